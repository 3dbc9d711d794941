//! Counts distinct keys of a stream split across worker threads, each worker filling its own
//! counter and the results merged at the end.

use std::thread;

use hllpp::{HyperLogLogPlus, Result};

const PRECISION: u8 = 12;
const WORKERS: u64 = 4;
const KEYS_PER_WORKER: u64 = 250_000;

fn main() -> Result<()> {
    let handles: Vec<_> = (0..WORKERS)
        .map(|worker| {
            thread::spawn(move || -> Result<HyperLogLogPlus> {
                let mut counter = HyperLogLogPlus::new(PRECISION)?;
                // neighbouring workers overlap on half of their keys
                let start = worker * KEYS_PER_WORKER / 2;
                for key in start..start + KEYS_PER_WORKER {
                    counter.insert(&key);
                }
                Ok(counter)
            })
        })
        .collect();

    let mut total = HyperLogLogPlus::new(PRECISION)?;
    for (worker, handle) in handles.into_iter().enumerate() {
        let counter = handle.join().expect("worker panicked")?;
        println!("worker {} estimate = {}", worker, counter.estimate()?);
        total.merge(&counter)?;
    }

    let exact = (WORKERS + 1) * KEYS_PER_WORKER / 2;
    let estimate = total.estimate()?;
    println!(
        "merged estimate = {}, exact = {}, relative error = {:.4}",
        estimate,
        exact,
        (estimate as f64 - exact as f64).abs() / exact as f64
    );

    Ok(())
}
