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

//! JSON codec.
//!
//! [`JsonSerializer`] is the format-level codec. [`JsonFactory`] builds the
//! typed [`TypedJsonSerializer`] entries cached by a
//! [`SerializerRegistry`](crate::registry::SerializerRegistry).

use crate::registry::{ConstructionError, SerializerFactory, TypeKey};
use crate::serialization::{DeserializationError, SerializationError, Serializer};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fmt;
use std::marker::PhantomData;

/// JSON serializer.
///
/// Produces compact JSON by default; pretty-printing is opt-in.
///
/// # Examples
///
/// ```rust
/// use objconv::serialization::{JsonSerializer, Serializer};
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Config {
///     host: String,
///     port: u16,
/// }
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let serializer = JsonSerializer::new();
/// let bytes = serializer.serialize(&Config { host: "localhost".into(), port: 8080 })?;
/// assert_eq!(bytes, br#"{"host":"localhost","port":8080}"#);
/// # Ok(())
/// # }
/// # example().unwrap();
/// ```
#[derive(Clone, Debug, Default)]
pub struct JsonSerializer {
    pretty: bool,
}

impl JsonSerializer {
    /// Creates a new JSON serializer producing compact output.
    pub fn new() -> Self {
        Self { pretty: false }
    }

    /// Configures the serializer to produce pretty-printed JSON.
    pub fn with_pretty_print(mut self) -> Self {
        self.pretty = true;
        self
    }

    /// Configures the serializer to produce compact JSON.
    ///
    /// This is the default behavior.
    pub fn with_compact(mut self) -> Self {
        self.pretty = false;
        self
    }

    /// Returns true if output is pretty-printed.
    #[must_use]
    pub fn is_pretty(&self) -> bool {
        self.pretty
    }
}

impl Serializer for JsonSerializer {
    fn serialize<T>(&self, value: &T) -> Result<Vec<u8>, SerializationError>
    where
        T: serde::Serialize + ?Sized,
    {
        if self.pretty {
            serde_json::to_vec_pretty(value).map_err(Into::into)
        } else {
            serde_json::to_vec(value).map_err(Into::into)
        }
    }

    fn deserialize<T>(&self, bytes: &[u8]) -> Result<T, DeserializationError>
    where
        T: serde::de::DeserializeOwned,
    {
        serde_json::from_slice(bytes).map_err(Into::into)
    }

    fn name(&self) -> &'static str {
        "json"
    }
}

/// JSON entry bound to a single type.
pub struct TypedJsonSerializer<T> {
    codec: JsonSerializer,
    key: TypeKey,
    _type: PhantomData<fn() -> T>,
}

impl<T: 'static> TypedJsonSerializer<T> {
    /// Creates an entry for `T` using `codec`.
    pub fn new(codec: JsonSerializer) -> Self {
        Self {
            codec,
            key: TypeKey::of::<T>(),
            _type: PhantomData,
        }
    }

    /// Returns the key of the type this entry handles.
    #[must_use]
    pub fn key(&self) -> TypeKey {
        self.key
    }

    /// Encodes `value` as JSON text.
    ///
    /// # Errors
    ///
    /// Returns a [`SerializationError`] if serde_json rejects the value, for
    /// example a map with non-string keys.
    pub fn serialize(&self, value: &T) -> Result<String, SerializationError>
    where
        T: Serialize,
    {
        let bytes = self.codec.serialize(value)?;
        String::from_utf8(bytes)
            .map_err(|e| SerializationError::with_source("JSON output is not UTF-8", e))
    }

    /// Decodes a value from JSON text.
    ///
    /// # Errors
    ///
    /// Returns a [`DeserializationError`] if the text is not valid JSON for `T`.
    pub fn deserialize(&self, text: &str) -> Result<T, DeserializationError>
    where
        T: DeserializeOwned,
    {
        self.codec.deserialize(text.as_bytes())
    }
}

impl<T> fmt::Debug for TypedJsonSerializer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypedJsonSerializer")
            .field("type", &self.key)
            .field("pretty", &self.codec.is_pretty())
            .finish()
    }
}

/// Builds [`TypedJsonSerializer`] entries. Construction never fails.
#[derive(Clone, Debug, Default)]
pub struct JsonFactory {
    codec: JsonSerializer,
}

impl JsonFactory {
    /// Creates a factory whose entries use `codec`.
    pub fn new(codec: JsonSerializer) -> Self {
        Self { codec }
    }
}

impl SerializerFactory for JsonFactory {
    type Entry<T: 'static> = TypedJsonSerializer<T>;

    fn build<T: 'static>(&self, key: &TypeKey) -> Result<TypedJsonSerializer<T>, ConstructionError> {
        tracing::debug!(type_name = key.type_name(), pretty = self.codec.is_pretty(), "built JSON serializer");
        Ok(TypedJsonSerializer::new(self.codec.clone()))
    }
}
