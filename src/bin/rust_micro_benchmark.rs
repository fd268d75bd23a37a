use bloomset::{expected_false_positive_rate, BloomFilter};
use rand::distributions::Alphanumeric;
use rand::Rng;
use std::time::Instant;

fn random_key(rng: &mut impl Rng, len: usize) -> String {
    rng.sample_iter(&Alphanumeric)
        .take(len)
        .map(char::from)
        .collect()
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("🦀 Rust Micro Benchmark - Bloom filter throughput and false positive rate");
    println!("{}", "=".repeat(70));

    let configurations: [(usize, f64); 6] = [
        (100, 0.5),
        (1_000, 0.1),
        (1_000, 0.01),
        (10_000, 0.01),
        (10_000, 0.001),
        (100_000, 1e-6),
    ];
    let query_count = 100_000;

    println!("Configurations (expected items, target rate): {:?}", configurations);
    println!();

    let mut rng = rand::thread_rng();
    let mut results = Vec::new();

    for &(n_items, target_fpr) in &configurations {
        println!("🔬 Testing {} items at rate {}...", n_items, target_fpr);

        let start = Instant::now();
        let mut filter = BloomFilter::new(n_items, target_fpr)?;
        let creation_time = start.elapsed().as_secs_f64();

        // Inserted keys are prefixed so they never collide with the random query keys
        let inserted: Vec<String> = (0..n_items)
            .map(|i| format!("inserted-{}-{}", i, random_key(&mut rng, 8)))
            .collect();
        let queries: Vec<String> = (0..query_count)
            .map(|_| random_key(&mut rng, 16))
            .collect();

        let start = Instant::now();
        for key in &inserted {
            filter.insert(key);
        }
        let insert_time = start.elapsed().as_secs_f64();

        let hits = inserted.iter().filter(|key| filter.query(*key)).count();

        let start = Instant::now();
        let mut false_positives = 0;
        for key in &queries {
            if filter.query(key) {
                false_positives += 1;
            }
        }
        let query_time = start.elapsed().as_secs_f64();

        let insert_rate = if insert_time > 0.0 {
            n_items as f64 / insert_time
        } else {
            f64::INFINITY
        };
        let query_rate = if query_time > 0.0 {
            query_count as f64 / query_time
        } else {
            f64::INFINITY
        };
        let measured_fpr = false_positives as f64 / query_count as f64;
        let theoretical_fpr =
            expected_false_positive_rate(filter.num_bits(), n_items, filter.num_hash_functions());

        results.push((
            n_items,
            target_fpr,
            filter.num_bits(),
            filter.num_hash_functions(),
            creation_time,
            insert_rate,
            query_rate,
            hits,
            measured_fpr,
            theoretical_fpr,
        ));

        println!(
            "   ✅ Done - Insert rate: {:.0} ops/s, Query rate: {:.0} ops/s",
            insert_rate, query_rate
        );
    }

    println!("\n📊 Results (CSV format):");
    println!("items,target_fpr,bits,hashes,creation_time,insert_rate,query_rate,hits,measured_fpr,theoretical_fpr");

    for (
        items,
        target_fpr,
        bits,
        hashes,
        creation_time,
        insert_rate,
        query_rate,
        hits,
        measured_fpr,
        theoretical_fpr,
    ) in &results
    {
        println!(
            "{},{},{},{},{:.6},{:.0},{:.0},{},{:.6},{:.6}",
            items,
            target_fpr,
            bits,
            hashes,
            creation_time,
            insert_rate,
            query_rate,
            hits,
            measured_fpr,
            theoretical_fpr
        );
    }

    Ok(())
}
