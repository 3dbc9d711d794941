#![no_main]

use hllpp::HyperLogLogPlus;
use libfuzzer_sys::fuzz_target;
use wyhash::wyhash;

fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }

    let split_index = wyhash(data, 0) as usize % data.len();
    let (first_half, second_half) = data.split_at(split_index);
    let precision = 4 + data[0] % 15;

    let mut counter1 = HyperLogLogPlus::new(precision).unwrap();
    for chunk in first_half.chunks(4) {
        counter1.insert(chunk);
        assert!(counter1.estimate().unwrap() > 0);
        assert!(counter1.size_of() > 0);
    }

    let mut counter2 = HyperLogLogPlus::new(precision).unwrap();
    for chunk in second_half.chunks(4) {
        counter2.insert(chunk);
        assert!(counter2.estimate().unwrap() > 0);
        assert!(counter2.size_of() > 0);
    }

    let mut merged = counter1.clone();
    merged.merge(&counter2).unwrap();
    counter2.merge(&counter1).unwrap();
    assert_eq!(merged, counter2);
});
