//! Records of metrics produced during environment interaction.
use crate::error::CarrierCoreError;
use std::collections::{
    hash_map::{Iter, Keys},
    HashMap,
};

/// Represents possible types of values in a [`Record`].
#[derive(Debug, Clone)]
pub enum RecordValue {
    /// A single floating-point value, typically a metric.
    Scalar(f32),

    /// A text value.
    String(String),
}

/// A container of key-value pairs emitted by environments and evaluators.
///
/// Environments attach a [`Record`] to every [`Step`](crate::Step), carrying
/// per-step diagnostics such as the reward or the wall density of the episode.
#[derive(Debug, Default)]
pub struct Record(HashMap<String, RecordValue>);

impl Record {
    /// Creates an empty record.
    pub fn empty() -> Self {
        Self(HashMap::new())
    }

    /// Creates a record containing a single scalar value.
    pub fn from_scalar(name: impl Into<String>, value: f32) -> Self {
        Self(HashMap::from([(name.into(), RecordValue::Scalar(value))]))
    }

    /// Returns an iterator over the keys in the record.
    pub fn keys(&self) -> Keys<String, RecordValue> {
        self.0.keys()
    }

    /// Inserts a key-value pair into the record.
    pub fn insert(&mut self, k: impl Into<String>, v: RecordValue) {
        self.0.insert(k.into(), v);
    }

    /// Returns an iterator over the key-value pairs in the record.
    pub fn iter(&self) -> Iter<'_, String, RecordValue> {
        self.0.iter()
    }

    /// Gets the value of the given key.
    pub fn get(&self, k: &str) -> Option<&RecordValue> {
        self.0.get(k)
    }

    /// Merges all entries of `record` into `self`, consuming `record`.
    pub fn merge(mut self, record: Record) -> Self {
        self.0.extend(record.0);
        self
    }

    /// Gets a scalar value.
    ///
    /// Returns an error if the key does not exist or the value is not a scalar.
    pub fn get_scalar(&self, k: &str) -> Result<f32, CarrierCoreError> {
        if let Some(v) = self.0.get(k) {
            match v {
                RecordValue::Scalar(v) => Ok(*v),
                _ => Err(CarrierCoreError::RecordValueTypeError(
                    "Scalar".to_string(),
                )),
            }
        } else {
            Err(CarrierCoreError::RecordKeyError(k.to_string()))
        }
    }

    /// Gets a string value.
    pub fn get_string(&self, k: &str) -> Result<String, CarrierCoreError> {
        if let Some(v) = self.0.get(k) {
            match v {
                RecordValue::String(s) => Ok(s.clone()),
                _ => Err(CarrierCoreError::RecordValueTypeError(
                    "String".to_string(),
                )),
            }
        } else {
            Err(CarrierCoreError::RecordKeyError(k.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Record, RecordValue};

    #[test]
    fn test_scalar_roundtrip() {
        let mut record = Record::empty();
        record.insert("Reward", RecordValue::Scalar(-1.25));
        assert_eq!(record.get_scalar("Reward").unwrap(), -1.25);
        assert!(record.get_scalar("Loss").is_err());
    }

    #[test]
    fn test_string_value_and_type_mismatch() {
        let mut record = Record::empty();
        record.insert("Phase", RecordValue::String("eval".to_string()));
        record.insert("Reward", RecordValue::Scalar(0.5));

        assert_eq!(record.get_string("Phase").unwrap(), "eval");
        // Wrong type and missing key both fail.
        assert!(record.get_string("Reward").is_err());
        assert!(record.get_string("Episode").is_err());
        assert!(record.get_scalar("Phase").is_err());
    }

    #[test]
    fn test_merge() {
        let r1 = Record::from_scalar("Episode return", 1.0);
        let mut r2 = Record::empty();
        r2.insert("Win", RecordValue::Scalar(1.0));
        let merged = r1.merge(r2);
        assert!(merged.get("Episode return").is_some());
        assert!(merged.get("Win").is_some());
        assert_eq!(merged.keys().count(), 2);
        assert_eq!(merged.iter().count(), 2);
    }
}
