//! Human-readable text output

use crate::config::Config;
use crate::stats::StatisticsRunner;

/// Print run results to console
///
/// Displays the configured run parameters, expected vs empirical moments with
/// their deviation, and a bar-chart histogram scaled so the fullest bucket
/// spans `bar_width` characters.
pub fn print_results(runner: &StatisticsRunner, config: &Config) {
    println!("═══════════════════════════════════════════════════════════");
    println!("                    SAMPLING RESULTS");
    println!("═══════════════════════════════════════════════════════════");
    println!();

    println!("Distribution: {}", config.run.distribution);
    println!("Samples:      {}", runner.sample_count());
    println!();

    println!("Moments:");
    println!(
        "  Mean:     expected {:>12.6}   empirical {:>12.6}   deviation {:>+10.6}",
        runner.expected_mean(),
        runner.mean(),
        runner.mean() - runner.expected_mean()
    );
    println!(
        "  Variance: expected {:>12.6}   empirical {:>12.6}   deviation {:>+10.6}",
        runner.expected_variance(),
        runner.variance(),
        runner.variance() - runner.expected_variance()
    );
    println!();

    println!("Max observed value: {:.6}", runner.max_observed_value());
    println!();

    println!("Histogram:");
    print_histogram(runner, config.output.bar_width);
}

/// Print the histogram as one asterisk bar per bucket
fn print_histogram(runner: &StatisticsRunner, bar_width: usize) {
    let hist = runner.histogram();
    let max_count = hist.max_bucket_count();

    if hist.is_empty() {
        println!("  (no samples)");
        return;
    }

    match (hist.fixed_counts(), hist.bucket_width()) {
        (Some(counts), Some(width)) => {
            // Fixed-width: render every bucket, empty ones included, so the
            // shape of the distribution is visible
            for (i, &count) in counts.iter().enumerate() {
                let lo = i as f64 * width;
                let hi = lo + width;
                println!(
                    "  [{:>10.4}, {:>10.4}) {:>10}  {}",
                    lo,
                    hi,
                    count,
                    bar(count, max_count, bar_width)
                );
            }
        }
        _ => {
            for (value, count) in hist.buckets() {
                println!(
                    "  {:>12.6} {:>10}  {}",
                    value,
                    count,
                    bar(count, max_count, bar_width)
                );
            }
        }
    }
}

/// Scale a bucket count to a bar of asterisks
///
/// The fullest bucket gets exactly `bar_width` asterisks; any non-empty bucket
/// gets at least one so it is distinguishable from an empty bucket.
fn bar(count: u64, max_count: u64, bar_width: usize) -> String {
    if count == 0 || max_count == 0 {
        return String::new();
    }

    let len = ((count as u128 * bar_width as u128) / max_count as u128) as usize;
    "*".repeat(len.max(1))
}
