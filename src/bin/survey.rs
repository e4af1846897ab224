//! Headless survey: how long do random blob boards survive?

use blob_life::application::survey::survey;
use std::time::Instant;

const DEFAULT_TRIALS: u64 = 10_000;
const DEFAULT_CAP: u64 = 1_000;

fn arg_or(index: usize, default: u64) -> u64 {
    match std::env::args().nth(index) {
        Some(raw) => raw.parse().unwrap_or_else(|_| {
            log::warn!("survey: ignoring argument {raw:?}, using {default}");
            default
        }),
        None => default,
    }
}

fn main() {
    env_logger::init();

    let trials = arg_or(1, DEFAULT_TRIALS);
    let cap = arg_or(2, DEFAULT_CAP);

    println!("=== Blob Life Survey ===");
    println!("{trials} random 10×10 boards, up to {cap} generations each\n");

    let start = Instant::now();
    let report = survey(0..trials, cap);
    let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;

    println!("Extinct:        {} / {}", report.extinct, report.trials);
    println!("Mean lifespan:  {:.1} generations", report.mean_lifespan);
    println!("Longest:        {} generations", report.longest_lifespan);
    println!("Still alive:    {}", report.trials - report.extinct);
    println!("\nTook {elapsed_ms:.1}ms");
}
