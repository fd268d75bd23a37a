//! Basic usage example for bloomset
//!
//! Run with: RUST_LOG=debug cargo run --example basic_usage

use bloomset::{BloomConfig, BloomFilter};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Bloomset Example ===\n");

    let mut bloom = BloomFilter::new(5, 0.000001)?;
    let items = ["Java", "Python", "JavaScript", "Go", "PHP"];

    for item in &items {
        bloom.insert(*item);
    }

    for item in &items {
        println!("  {} in filter: {}", item, bloom.query(*item));
    }

    // Never inserted
    println!("  Rust in filter: {}", bloom.query("Rust"));
    println!("  Scala in filter: {}", bloom.query("Scala"));

    println!("  {}", bloom.stats());
    println!();

    // Invalid configurations are rejected up front
    let config = BloomConfig::default().with_false_positive_rate(1.5);
    if let Err(err) = BloomFilter::from_config(&config) {
        println!("  Rejected {:?}: {}", config, err);
    }

    Ok(())
}
