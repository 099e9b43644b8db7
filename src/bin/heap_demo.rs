//! Demonstration and timing harness
//!
//! ```bash
//! cargo run --release --features binaries --bin heap-demo -- schedule
//! cargo run --release --features binaries --bin heap-demo -- sort --sizes 1000,5000,10000
//! RUST_LOG=debug cargo run --features binaries --bin heap-demo -- queue --seed 42
//! ```

use anyhow::{ensure, Result};
use clap::{Args, Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

use task_heap::harness::{random_values, time_queue, time_sort, Scenario};
use task_heap::scheduler::TaskScheduler;

/// Binary heap sort, priority queue and scheduler demonstrations
#[derive(Parser, Debug)]
#[command(name = "heap-demo", version)]
struct CliArgs {
    /// Seed for generated inputs; random if unset
    #[arg(long, global = true, env = "HEAP_DEMO_SEED")]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the five-task scheduling demonstration
    Schedule,
    /// Time heap sort over several input shapes
    Sort(SortArgs),
    /// Time priority queue insertion and extraction
    Queue(QueueArgs),
}

#[derive(Args, Debug)]
struct SortArgs {
    /// Input sizes
    #[arg(
        long,
        value_delimiter = ',',
        default_value = "1000,5000,10000",
        env = "HEAP_DEMO_SIZES"
    )]
    sizes: Vec<usize>,

    /// Input shapes: random, sorted, reverse-sorted, nearly-sorted
    #[arg(
        long,
        value_delimiter = ',',
        default_value = "random,sorted,reverse-sorted,nearly-sorted"
    )]
    scenarios: Vec<Scenario>,

    /// Fraction of positions swapped in nearly-sorted inputs
    #[arg(long, default_value_t = 0.05, env = "HEAP_DEMO_SWAP_FRACTION")]
    swap_fraction: f64,
}

#[derive(Args, Debug)]
struct QueueArgs {
    /// Number of tasks per run
    #[arg(
        long,
        value_delimiter = ',',
        default_value = "100,1000,5000,10000",
        env = "HEAP_DEMO_SIZES"
    )]
    sizes: Vec<usize>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let args = CliArgs::parse();
    let seed = args.seed.unwrap_or_else(rand::random);
    info!(seed, "starting");
    let mut rng = StdRng::seed_from_u64(seed);

    match args.command {
        Command::Schedule => run_schedule(),
        Command::Sort(sort) => run_sort(&sort, &mut rng)?,
        Command::Queue(queue) => run_queue(&queue, &mut rng),
    }
    Ok(())
}

fn run_schedule() {
    let mut scheduler = TaskScheduler::new();
    let tasks = [
        ("System Backup", 1, 30),
        ("User Request", 5, 5),
        ("Critical Bug Fix", 10, 15),
        ("Email Processing", 2, 10),
        ("Security Patch", 8, 20),
    ];
    for (description, priority, duration) in tasks {
        scheduler.add_task(description, priority, duration, None);
    }

    println!("\n{}", "=".repeat(50));
    println!("Current Task Queue (by priority):");
    for task in scheduler.show_queue() {
        println!(
            "  - {} (Priority: {}, Duration: {})",
            task.description, task.priority, task.duration
        );
    }

    println!("\n{}", "=".repeat(50));
    println!("EXECUTING TASKS:");
    println!("{}", "=".repeat(50));
    while let Some(task) = scheduler.execute_next() {
        println!("Executing: {} (Priority: {})", task.description, task.priority);
        println!("Time elapsed: {} units", scheduler.current_time());
    }

    println!("\n{}", "=".repeat(50));
    println!("SCHEDULING STATISTICS:");
    match scheduler.statistics() {
        Some(stats) => println!("{}", stats),
        None => println!("No tasks completed yet"),
    }
}

fn run_sort(args: &SortArgs, rng: &mut StdRng) -> Result<()> {
    ensure!(
        (0.0..=1.0).contains(&args.swap_fraction),
        "--swap-fraction must be within 0..=1, got {}",
        args.swap_fraction
    );

    println!("\n==============================");
    println!(" Heapsort Performance Results ");
    println!("==============================");

    for &n in &args.sizes {
        println!("\n--- Array Size: {} ---", n);
        let base = random_values(n, rng);

        for &scenario in &args.scenarios {
            let data = scenario.arrange(&base, args.swap_fraction, rng);
            let timing = time_sort(scenario, data);
            println!(
                "{:<16} {:>10.6} s  {:>10} comparisons ({:.2} n log n)",
                scenario.label(),
                timing.elapsed.as_secs_f64(),
                timing.comparisons,
                timing.comparisons_per_nlogn()
            );
        }
    }
    Ok(())
}

fn run_queue(args: &QueueArgs, rng: &mut StdRng) {
    println!("\n=== PERFORMANCE ANALYSIS ===");
    for &size in &args.sizes {
        let timing = time_queue(size, rng);
        println!(
            "Size: {:5} | Insertion: {:.6}s | Extraction: {:.6}s",
            timing.size,
            timing.insert.as_secs_f64(),
            timing.extract.as_secs_f64()
        );
    }
}
