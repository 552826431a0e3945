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


//! Top-level error type for [`ObjectConverter`](crate::ObjectConverter).
//!
//! A conversion can fail at three points:
//!
//! 1. **Registry**: no serializer entry could be obtained ([`RegistryError`])
//! 2. **Encoding**: the value could not be written ([`SerializationError`])
//! 3. **Decoding**: the text or bytes could not be read back
//!    ([`DeserializationError`])
//!
//! # Examples
//!
//! ```rust
//! use objconv::ConvertError;
//! use objconv::serialization::DeserializationError;
//!
//! let error: ConvertError = DeserializationError::new("unexpected end of input").into();
//! assert!(error.is_deserialization_error());
//! assert!(!error.is_registry_error());
//! ```

use crate::registry::RegistryError;
use crate::serialization::{DeserializationError, SerializationError};
use thiserror::Error;

/// Errors returned by [`ObjectConverter`](crate::ObjectConverter).
#[derive(Debug, Error)]
pub enum ConvertError {
    /// No serializer entry could be obtained for the type.
    ///
    /// Construction failures are not cached, so retrying the same call runs
    /// the factory again.
    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// The value could not be encoded.
    #[error(transparent)]
    Serialization(#[from] SerializationError),

    /// The input could not be decoded into the requested type.
    #[error(transparent)]
    Deserialization(#[from] DeserializationError),
}

impl ConvertError {
    /// Returns true if the registry could not provide a serializer.
    #[must_use]
    pub const fn is_registry_error(&self) -> bool {
        matches!(self, Self::Registry(_))
    }

    /// Returns true if encoding failed.
    #[must_use]
    pub const fn is_serialization_error(&self) -> bool {
        matches!(self, Self::Serialization(_))
    }

    /// Returns true if decoding failed.
    #[must_use]
    pub const fn is_deserialization_error(&self) -> bool {
        matches!(self, Self::Deserialization(_))
    }

    /// Returns the registry error, if this is one.
    #[must_use]
    pub fn as_registry_error(&self) -> Option<&RegistryError> {
        match self {
            Self::Registry(err) => Some(err),
            _ => None,
        }
    }
}
