//
// Copyright 2026 Hans W. Uhlig. All Rights Reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//

//! Binary codec used for deep cloning.
//!
//! Postcard is compact and deterministic, but it is not self-describing:
//! types that rely on `deserialize_any` (untagged enums, flattened structs,
//! `serde_json::Value`) cannot be decoded from it.

use crate::serialization::{DeserializationError, SerializationError, Serializer};

/// Postcard serializer.
///
/// # Examples
///
/// ```rust
/// use objconv::serialization::{PostcardSerializer, Serializer};
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// // Reject payloads over 1 MB when decoding.
/// let serializer = PostcardSerializer::new().with_max_size(1024 * 1024);
/// let bytes = serializer.serialize(&vec![1u32, 2, 3])?;
/// let decoded: Vec<u32> = serializer.deserialize(&bytes)?;
/// assert_eq!(decoded, vec![1, 2, 3]);
/// # Ok(())
/// # }
/// # example().unwrap();
/// ```
#[derive(Clone, Debug)]
pub struct PostcardSerializer {
    max_size: Option<usize>,
}

impl PostcardSerializer {
    /// Creates a new postcard serializer with no size limit.
    pub fn new() -> Self {
        Self { max_size: None }
    }

    /// Sets a maximum payload size accepted by [`deserialize`](Serializer::deserialize).
    pub fn with_max_size(mut self, max_size: usize) -> Self {
        self.max_size = Some(max_size);
        self
    }

    /// Removes any size limit.
    pub fn with_no_limit(mut self) -> Self {
        self.max_size = None;
        self
    }

    /// Returns the configured size limit.
    #[must_use]
    pub fn max_size(&self) -> Option<usize> {
        self.max_size
    }
}

impl Default for PostcardSerializer {
    fn default() -> Self {
        Self::new()
    }
}

impl Serializer for PostcardSerializer {
    fn serialize<T>(&self, value: &T) -> Result<Vec<u8>, SerializationError>
    where
        T: serde::Serialize + ?Sized,
    {
        postcard::to_allocvec(value).map_err(Into::into)
    }

    fn deserialize<T>(&self, bytes: &[u8]) -> Result<T, DeserializationError>
    where
        T: serde::de::DeserializeOwned,
    {
        if let Some(max_size) = self.max_size {
            if bytes.len() > max_size {
                return Err(DeserializationError::new(format!(
                    "Data size {} exceeds maximum allowed size {}",
                    bytes.len(),
                    max_size
                )));
            }
        }

        postcard::from_bytes(bytes).map_err(Into::into)
    }

    fn name(&self) -> &'static str {
        "postcard"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Serialize, Deserialize, Debug, PartialEq)]
    struct TestMessage {
        id: u32,
        text: String,
        values: Vec<i32>,
    }

    fn message() -> TestMessage {
        TestMessage {
            id: 42,
            text: "test".to_string(),
            values: vec![1, 2, 3],
        }
    }

    #[test]
    fn test_postcard_basic() {
        let serializer = PostcardSerializer::default();
        let bytes = serializer.serialize(&message()).unwrap();
        let decoded: TestMessage = serializer.deserialize(&bytes).unwrap();
        assert_eq!(message(), decoded);
    }

    #[test]
    fn test_postcard_invalid_data() {
        let serializer = PostcardSerializer::default();
        let result: Result<TestMessage, _> = serializer.deserialize(&[0xFF, 0xFF, 0xFF, 0xFF]);
        assert!(result.is_err());
    }

    #[test]
    fn test_postcard_name() {
        assert_eq!(PostcardSerializer::default().name(), "postcard");
    }

    #[test]
    fn test_postcard_with_max_size() {
        let serializer = PostcardSerializer::new().with_max_size(5);
        let bytes = PostcardSerializer::new().serialize(&message()).unwrap();

        let result: Result<TestMessage, _> = serializer.deserialize(&bytes);

        let err = result.unwrap_err();
        assert!(err.to_string().contains("exceeds maximum"));
    }

    #[test]
    fn test_postcard_no_limit() {
        let serializer = PostcardSerializer::new().with_max_size(5).with_no_limit();
        assert_eq!(serializer.max_size(), None);

        let large = TestMessage {
            id: u32::MAX,
            text: "x".repeat(10000),
            values: (0..1000).collect(),
        };
        let bytes = serializer.serialize(&large).unwrap();
        let decoded: TestMessage = serializer.deserialize(&bytes).unwrap();
        assert_eq!(large, decoded);
    }

    #[test]
    fn test_postcard_deterministic() {
        let serializer = PostcardSerializer::default();
        let bytes1 = serializer.serialize(&message()).unwrap();
        let bytes2 = serializer.serialize(&message()).unwrap();
        assert_eq!(bytes1, bytes2);
    }
}
