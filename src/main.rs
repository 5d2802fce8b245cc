mod error;
mod range_tree;
mod sliding_window;
mod span;
mod traits;
mod util;

use rand_xoshiro::{rand_core::{RngCore, SeedableRng}, Xoshiro256PlusPlus};

use crate::error::SeriesError;
use crate::range_tree::RangeTree;
use crate::sliding_window::{window_max, window_minmax};
use crate::span::spans;

fn main() -> Result<(), SeriesError> {
    demo()?;

    let mut rng = Xoshiro256PlusPlus::seed_from_u64(123);
    let n = 10_000_000usize;
    println!("\nGenerating random price series of length {n}...");
    let mut prices: Vec<f64> = Vec::with_capacity(n);
    for _ in 0..n {
        prices.push(100.0 + (rng.next_u64() % 10_000) as f64 / 100.0);
    }

    benchmark_tree(&prices)?;
    benchmark_window(&prices)?;
    benchmark_span(&prices)?;
    Ok(())
}

fn demo() -> Result<(), SeriesError> {
    let prices = [150.25, 152.30, 148.90, 155.75, 157.20];
    let tree = RangeTree::new(&prices)?;
    println!("Range Maximum Query (0-3): {:.2}", tree.query_max(0, 3)?);
    println!("Range Minimum Query (1-4): {:.2}", tree.query_min(1, 4)?);
    println!("Range Mean (0-4): {:.2}", tree.query_mean(0, 4)?);

    let prices = [150.25, 152.30, 148.90, 155.75, 157.20, 159.40];
    let k = 3;
    println!("\nSliding Window Maximum (k={k}):");
    for (i, m) in window_max(&prices, k)?.iter().enumerate() {
        println!("Window {}-{}: {:.2}", i + 1, i + k, m);
    }
    println!("\nSliding Window Min/Max (k={k}):");
    for (i, (lo, hi)) in window_minmax(&prices, k)?.iter().enumerate() {
        println!("Window {}-{}: min {:.2} max {:.2}", i + 1, i + k, lo, hi);
    }

    let prices = [100.0, 80.0, 60.0, 70.0, 60.0, 75.0, 85.0];
    let day_spans = spans(&prices)?;
    println!("\nDay\tPrice\tSpan");
    for (i, s) in day_spans.iter().enumerate() {
        println!("{}\t{:.2}\t{}", i + 1, prices[i], s);
    }
    Ok(())
}

fn benchmark_tree(prices: &[f64]) -> Result<(), SeriesError> {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(131313);
    let n = prices.len();

    print!("Series generated. Building RangeTree... ");
    let tree = RangeTree::new(prices)?;

    // Draw 1 million random query ranges
    let n_queries = 1_000_000;
    println!("Generating {n_queries} random query ranges...");
    let mut query_ranges: Vec<(usize, usize)> = Vec::with_capacity(n_queries);
    for _ in 0..n_queries {
        let a = rng.next_u64() as usize % n;
        let b = rng.next_u64() as usize % n;
        query_ranges.push(if a <= b { (a, b) } else { (b, a) });
    }

    println!("Running max/min queries on RangeTree...");

    // Start the timer
    let start = std::time::Instant::now();

    // Run the queries
    let mut sum_of_answers = 0.0_f64;
    for &(lo, hi) in &query_ranges {
        sum_of_answers += tree.query_max(lo, hi)?;
        sum_of_answers += tree.query_min(lo, hi)?;
    }
    println!("Sum of all range answers: {}", sum_of_answers);

    // Print the elapsed time per query in nanoseconds
    let elapsed = start.elapsed();
    let avg_time_per_query = elapsed.as_secs_f64() / (2 * n_queries) as f64;
    println!("Average time per range query: {:.2} ns", avg_time_per_query * 1e9);
    Ok(())
}

fn benchmark_window(prices: &[f64]) -> Result<(), SeriesError> {
    let window = 1024;

    println!("Running sliding-window maximum pass (window {window})...");

    // Start the timer
    let start = std::time::Instant::now();

    let maxima = window_max(prices, window)?;
    let sum_of_answers: f64 = maxima.iter().sum();
    println!("Sum of all window answers: {}", sum_of_answers);

    // Print the elapsed time per element in nanoseconds
    let elapsed = start.elapsed();
    let avg_time_per_element = elapsed.as_secs_f64() / prices.len() as f64;
    println!("Average time per element: {:.2} ns", avg_time_per_element * 1e9);
    Ok(())
}

fn benchmark_span(prices: &[f64]) -> Result<(), SeriesError> {
    println!("Running span pass...");

    // Start the timer
    let start = std::time::Instant::now();

    let day_spans = spans(prices)?;
    let sum_of_answers: usize = day_spans.iter().sum();
    println!("Sum of all span answers: {}", sum_of_answers);

    // Print the elapsed time per element in nanoseconds
    let elapsed = start.elapsed();
    let avg_time_per_element = elapsed.as_secs_f64() / prices.len() as f64;
    println!("Average time per element: {:.2} ns", avg_time_per_element * 1e9);
    Ok(())
}
