#[global_allocator]
static ALLOC: dhat::Alloc = dhat::Alloc;

use hyperloglogplus::HyperLogLog;
use std::hash::BuildHasherDefault;
use tabled::{
    settings::{Settings, Style},
    Table, Tabled,
};
use wyhash::WyHash;

#[derive(Tabled)]
struct Record {
    cardinality: usize,
    hllpp: String,
    amadeus_streaming: String,
    probabilistic_collections: String,
    hyperloglog: String,
    hyperloglogplus: String,
}

fn measure_memory_usage<T>(
    cardinality: usize,
    create: impl Fn() -> T,
    insert: impl Fn(&mut T, &usize),
) -> String
where
    T: Sized,
{
    let _profiler = dhat::Profiler::builder().testing().build();
    let mut estimator = create();
    for i in 0..cardinality {
        insert(&mut estimator, &i);
    }
    let stats = dhat::HeapStats::get();
    format!(
        "{} / {} / {}",
        std::mem::size_of::<T>(),
        stats.total_bytes,
        stats.total_blocks
    )
}

/// Heap usage of precision 12 counters: `stack size / total bytes / total blocks`
#[test]
fn test_allocations() {
    let results: Vec<Record> = std::iter::once(0)
        .chain((0..).map(|c| 1 << c))
        .take_while(|&c| c <= 1 << 20)
        .map(|cardinality| Record {
            cardinality,
            hllpp: measure_memory_usage(
                cardinality,
                || hllpp::HyperLogLogPlus::new(12).unwrap(),
                |est, i| est.insert(i),
            ),
            amadeus_streaming: measure_memory_usage(
                cardinality,
                || amadeus_streaming::HyperLogLog::new(0.01625),
                |est, i| est.push(i),
            ),
            probabilistic_collections: measure_memory_usage(
                cardinality,
                || probabilistic_collections::hyperloglog::HyperLogLog::<usize>::new(0.004),
                |est, i| est.insert(i),
            ),
            hyperloglog: measure_memory_usage(
                cardinality,
                || hyperloglog::HyperLogLog::new(0.004),
                |est, i| est.insert(i),
            ),
            hyperloglogplus: measure_memory_usage(
                cardinality,
                || {
                    hyperloglogplus::HyperLogLogPlus::<usize, _>::new(
                        12,
                        BuildHasherDefault::<WyHash>::default(),
                    )
                    .unwrap()
                },
                |est, i| est.insert(i),
            ),
        })
        .collect();

    let table_config = Settings::default().with(Style::markdown());
    let markdown = Table::new(results).with(table_config).to_string();
    std::fs::write(
        format!("{}/target/memory_allocations.md", env!("CARGO_MANIFEST_DIR")),
        &markdown,
    )
    .unwrap();
    println!("{}", markdown);
}

#[derive(Tabled)]
struct PromotionRecord {
    precision: u8,
    empty: usize,
    sparse_full: usize,
    dense: usize,
}

/// Reported footprint on both sides of the sparse to dense promotion
#[test]
fn test_promotion_footprint() {
    // distinct sparse index for every `i`, spread across registers
    let hash = |i: u64| (u64::from((i as u32).reverse_bits() >> 7) << 39) | 0xABCD;

    let results: Vec<PromotionRecord> = [4u8, 8, 12, 16]
        .into_iter()
        .map(|precision| {
            let m = 1u64 << precision;
            let mut counter = hllpp::HyperLogLogPlus::new(precision).unwrap();
            let empty = counter.size_of();

            (0..m).for_each(|i| counter.insert_hash(hash(i)));
            assert_eq!(counter.mode(), hllpp::Mode::Sparse);
            let sparse_full = counter.size_of();
            assert_eq!(sparse_full, empty + (m as usize) * 4);

            counter.insert_hash(hash(m));
            assert_eq!(counter.mode(), hllpp::Mode::Dense);
            let dense = counter.size_of();
            let fresh = hllpp::HyperLogLogPlus::with_mode(precision, hllpp::Mode::Dense).unwrap();
            assert_eq!(dense, fresh.size_of());
            // 6-bit registers take three quarters of the 4 bytes a sparse entry takes
            assert!(dense < sparse_full, "precision {}", precision);
            assert!(dense >= empty + (m as usize) * 6 / 8, "precision {}", precision);

            PromotionRecord {
                precision,
                empty,
                sparse_full,
                dense,
            }
        })
        .collect();

    let table_config = Settings::default().with(Style::markdown());
    println!("{}", Table::new(results).with(table_config));
}
