//! # Serde module for HyperLogLogPlus
//!
//! This module provides serde-based (serialization and deserialization) features for
//! `HyperLogLogPlus`.
//!
//! During serialization the counter is converted into a tuple:
//! `(precision, Option<Vec<u32>>, Option<Vec<u8>>)` where exactly one of the options is set:
//! sorted sparse entries for a sparse counter, register ranks for a dense one.
//!
//! During deserialization the tuple is validated and converted back through
//! `HyperLogLogPlus::from_parts_with_hasher`, so malformed input is rejected instead of
//! producing a counter violating its invariants. The hasher is not serialized, a
//! default constructed one is used instead.
//!
//! Refer to the serde documentation for more details on custom serialization and deserialization:
//! - [Serialization](https://serde.rs/impl-serialize.html)
//! - [Deserialization](https://serde.rs/impl-deserialize.html)
use std::hash::BuildHasher;

use serde::de::Error;
use serde::ser::SerializeTuple;
use serde::{Deserialize, Serialize};

use crate::counter::{HyperLogLogPlus, State};

impl<S> Serialize for HyperLogLogPlus<S> {
    fn serialize<Ser>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error>
    where
        Ser: serde::Serializer,
    {
        let (precision, state) = self.to_parts();
        let mut tup = serializer.serialize_tuple(3)?;
        tup.serialize_element(&precision)?;
        match state {
            State::Sparse(entries) => {
                tup.serialize_element(&Some(entries))?;
                tup.serialize_element(&None::<Vec<u8>>)?;
            }
            State::Dense(ranks) => {
                tup.serialize_element(&None::<Vec<u32>>)?;
                tup.serialize_element(&Some(ranks))?;
            }
        }
        tup.end()
    }
}

impl<'de, S> Deserialize<'de> for HyperLogLogPlus<S>
where
    S: BuildHasher + Default,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let (precision, entries, ranks): (u8, Option<Vec<u32>>, Option<Vec<u8>>) =
            Deserialize::deserialize(deserializer)?;
        let state = match (entries, ranks) {
            (Some(entries), None) => State::Sparse(entries),
            (None, Some(ranks)) => State::Dense(ranks),
            _ => {
                return Err(D::Error::custom(
                    "expected either sparse entries or register ranks",
                ))
            }
        };
        HyperLogLogPlus::from_parts_with_hasher(precision, state, S::default())
            .map_err(D::Error::custom)
    }
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use crate::representation::Mode;
    use test_case::test_case;

    #[test_case(4, 0; "empty set")]
    #[test_case(4, 1; "single element")]
    #[test_case(4, 100; "p4 dense")]
    #[test_case(12, 2; "two distinct elements")]
    #[test_case(12, 100; "hundred distinct elements")]
    #[test_case(12, 10000; "ten thousand distinct elements")]
    fn test_serde(precision: u8, n: usize) {
        let mut original = HyperLogLogPlus::new(precision).unwrap();
        for i in 0..n {
            original.insert(&format!("item{}", i));
        }

        let serialized = serde_json::to_string(&original).expect("serialization failed");
        assert!(!serialized.is_empty(), "serialized string should not be empty");

        let deserialized: HyperLogLogPlus =
            serde_json::from_str(&serialized).expect("deserialization failed");
        assert_eq!(original, deserialized);
        assert_eq!(original.estimate(), deserialized.estimate());
    }

    #[test]
    fn test_serialized_layout() {
        let mut counter = HyperLogLogPlus::with_mode(4, Mode::Dense).unwrap();
        counter.insert_hash(0x1000_0000_0000_0000);
        assert_eq!(
            serde_json::to_string(&counter).unwrap(),
            "[4,null,[0,61,0,0,0,0,0,0,0,0,0,0,0,0,0,0]]"
        );

        let counter = HyperLogLogPlus::new(10).unwrap();
        assert_eq!(serde_json::to_string(&counter).unwrap(), "[10,[],null]");
    }

    #[test]
    fn test_deserialize_invalid_json() {
        let invalid_json = "{ invalid_json_string }";
        let result: Result<HyperLogLogPlus, _> = serde_json::from_str(invalid_json);

        assert!(
            result.is_err(),
            "Deserialization should fail for invalid JSON"
        );
    }

    #[test_case("[3,[],null]"; "precision too low")]
    #[test_case("[19,null,[]]"; "precision too high")]
    #[test_case("[4,null,null]"; "no state")]
    #[test_case("[4,[],[]]"; "both states")]
    #[test_case("[4,null,[0,0,0]]"; "register count")]
    #[test_case("[4,null,[62,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0]]"; "register rank")]
    #[test_case("[4,[0],null]"; "malformed sparse entry")]
    #[test_case("[12345,null]"; "truncated tuple")]
    fn test_failed_deserialization(input: &str) {
        let result: Result<HyperLogLogPlus, _> = serde_json::from_str(input);
        assert!(result.is_err());
    }
}
