use rand_xoshiro::{rand_core::{RngCore, SeedableRng}, Xoshiro256PlusPlus};

use series_rq::range_tree::RangeTree;
use series_rq::sliding_window::window_max;
use series_rq::span::spans;

fn main() {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(123);
    let n = 10_000_000usize;
    println!("Generating random price series of length {n}...");
    let mut prices: Vec<f64> = Vec::with_capacity(n);
    for _ in 0..n {
        prices.push(100.0 + (rng.next_u64() % 10_000) as f64 / 100.0);
    }

    benchmark_range_queries(&prices);
    benchmark_window(&prices);
    benchmark_span(&prices);
}

fn benchmark_range_queries(prices: &[f64]) {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(131313);
    let n = prices.len();

    println!("Building RangeTree");
    let tree = RangeTree::new(prices).unwrap();

    // Draw 1 million random query ranges
    let n_queries = 1_000_000;
    println!("Generating {n_queries} random query ranges...");
    let mut query_ranges: Vec<(usize, usize)> = Vec::with_capacity(n_queries);
    for _ in 0..n_queries {
        let a = rng.next_u64() as usize % n;
        let b = rng.next_u64() as usize % n;
        query_ranges.push(if a <= b { (a, b) } else { (b, a) });
    }

    println!("Running max queries on RangeTree");

    // Start the timer
    let start = std::time::Instant::now();

    // Run the queries
    let mut sum_of_answers = 0.0_f64;
    for &(lo, hi) in &query_ranges {
        sum_of_answers += tree.query_max(lo, hi).unwrap();
    }
    println!("Sum of all max answers: {}", sum_of_answers);

    // Print the elapsed time per query in nanoseconds
    let elapsed = start.elapsed();
    let avg_time_per_query = elapsed.as_secs_f64() / n_queries as f64;
    println!("Average time per max query: {:.2} ns", avg_time_per_query * 1e9);

    // The linear scan touches every element of a range, so it only gets a
    // sample of the same ranges.
    let n_naive = 2_000;
    println!("Running {n_naive} max queries by linear scan");

    // Start the timer
    let start = std::time::Instant::now();

    let mut sum_of_answers = 0.0_f64;
    for &(lo, hi) in &query_ranges[..n_naive] {
        let max = prices[lo..=hi]
            .iter()
            .copied()
            .fold(f64::NEG_INFINITY, f64::max);
        sum_of_answers += max;
    }
    println!("Sum of all max answers: {}", sum_of_answers);

    // Print the elapsed time per query in nanoseconds
    let elapsed = start.elapsed();
    let avg_time_per_query = elapsed.as_secs_f64() / n_naive as f64;
    println!("Average time per max query: {:.2} ns", avg_time_per_query * 1e9);

    // Same sample through the tree; the printed sums must agree.
    let mut tree_sum = 0.0_f64;
    for &(lo, hi) in &query_ranges[..n_naive] {
        tree_sum += tree.query_max(lo, hi).unwrap();
    }
    println!("Tree sum over the same ranges: {}", tree_sum);
}

fn benchmark_window(prices: &[f64]) {
    let window = 1024;
    println!(
        "Running sliding-window maximum on {} elements (window {window})",
        prices.len()
    );

    // Start the timer
    let start = std::time::Instant::now();

    let maxima = window_max(prices, window).unwrap();
    let sum_of_answers: f64 = maxima.iter().sum();
    println!("Sum of all window answers: {}", sum_of_answers);

    // Print the elapsed time per element in nanoseconds
    let elapsed = start.elapsed();
    let avg_time_per_element = elapsed.as_secs_f64() / prices.len() as f64;
    println!("Average time per element: {:.2} ns", avg_time_per_element * 1e9);

    // Rescanning each window is O(n * window); use a prefix.
    let n_naive = 200_000;
    println!("Running naive window maximum on {n_naive} elements (window {window})");
    let prefix = &prices[..n_naive];

    // Start the timer
    let start = std::time::Instant::now();

    let naive: Vec<f64> = prefix
        .windows(window)
        .map(|w| w.iter().copied().fold(f64::NEG_INFINITY, f64::max))
        .collect();
    let sum_of_answers: f64 = naive.iter().sum();
    println!("Sum of all window answers: {}", sum_of_answers);

    // Print the elapsed time per element in nanoseconds
    let elapsed = start.elapsed();
    let avg_time_per_element = elapsed.as_secs_f64() / n_naive as f64;
    println!("Average time per element: {:.2} ns", avg_time_per_element * 1e9);
}

fn benchmark_span(prices: &[f64]) {
    println!("Running span pass on {} elements", prices.len());

    // Start the timer
    let start = std::time::Instant::now();

    let day_spans = spans(prices).unwrap();
    let sum_of_answers: usize = day_spans.iter().sum();
    println!("Sum of all span answers: {}", sum_of_answers);

    // Print the elapsed time per element in nanoseconds
    let elapsed = start.elapsed();
    let avg_time_per_element = elapsed.as_secs_f64() / prices.len() as f64;
    println!("Average time per element: {:.2} ns", avg_time_per_element * 1e9);

    // Backward rescan per element; expected spans are short on random
    // data, but use a prefix to keep the worst case in check.
    let n_naive = 1_000_000;
    println!("Running naive span pass on {n_naive} elements");
    let prefix = &prices[..n_naive];

    // Start the timer
    let start = std::time::Instant::now();

    let mut sum_of_answers = 0_usize;
    for i in 0..prefix.len() {
        let mut span = 1;
        while span <= i && prefix[i - span] <= prefix[i] {
            span += 1;
        }
        sum_of_answers += span;
    }
    println!("Sum of all span answers: {}", sum_of_answers);

    // Print the elapsed time per element in nanoseconds
    let elapsed = start.elapsed();
    let avg_time_per_element = elapsed.as_secs_f64() / n_naive as f64;
    println!("Average time per element: {:.2} ns", avg_time_per_element * 1e9);
}
