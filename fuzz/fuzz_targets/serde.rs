#![no_main]

use hllpp::HyperLogLogPlus;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(mut counter) = serde_json::from_slice::<HyperLogLogPlus>(data) {
        counter.estimate().unwrap();
        counter.insert(&1);
        assert!(counter.estimate().unwrap() > 0);
    }
});
