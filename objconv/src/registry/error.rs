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

//! Registry error types.
//!
//! Two failure kinds reach callers of the registry:
//!
//! - **Construction failures**: the factory could not build an entry for the
//!   requested type. The identity is left absent and the next call retries.
//! - **Invalid identities**: the supplied [`TypeKey`] does not identify the
//!   requested type. The map is not touched.

use super::TypeKey;
use thiserror::Error;

/// Error returned by a [`SerializerFactory`](super::SerializerFactory) that
/// cannot build an entry for a type.
///
/// # Examples
///
/// ```rust
/// use objconv::registry::ConstructionError;
///
/// let error = ConstructionError::InvalidRootName {
///     name: "(i32, i32)".to_string(),
/// };
/// assert!(error.to_string().contains("(i32, i32)"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConstructionError {
    /// The name derived for the document root is not a legal element name.
    #[error("`{name}` is not a valid XML element name")]
    InvalidRootName {
        /// The rejected name.
        name: String,
    },

    /// The factory does not support the type.
    #[error("unsupported type: {reason}")]
    Unsupported {
        /// Why the type was rejected.
        reason: String,
    },
}

impl ConstructionError {
    /// Creates an [`Unsupported`](Self::Unsupported) error.
    pub fn unsupported(reason: impl Into<String>) -> Self {
        Self::Unsupported {
            reason: reason.into(),
        }
    }
}

/// Errors returned by [`SerializerRegistry`](super::SerializerRegistry).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// The factory failed to construct an entry.
    ///
    /// Nothing was cached; a later request for the same type runs the factory
    /// again.
    #[error("failed to construct serializer for `{type_name}`: {source}")]
    Construction {
        /// Name of the type whose entry could not be built.
        type_name: &'static str,
        /// The factory error.
        #[source]
        source: ConstructionError,
    },

    /// The supplied key does not identify the requested type.
    #[error("type key `{supplied}` does not identify requested type `{expected}`")]
    InvalidIdentity {
        /// The key passed by the caller.
        supplied: TypeKey,
        /// The key of the requested type.
        expected: TypeKey,
    },
}

impl RegistryError {
    /// Returns true if this error came from the factory.
    #[must_use]
    pub const fn is_construction_failure(&self) -> bool {
        matches!(self, Self::Construction { .. })
    }

    /// Returns true if the caller supplied a mismatched key.
    #[must_use]
    pub const fn is_invalid_identity(&self) -> bool {
        matches!(self, Self::InvalidIdentity { .. })
    }
}
