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

//! Codecs for converting values to and from text and bytes.
//!
//! # Overview
//!
//! - **[`Serializer`] trait**: byte-oriented codec usable with any serde type
//! - **[`XmlFactory`] / [`XmlSerializer`]**: typed XML entries with a derived
//!   root element
//! - **[`JsonFactory`] / [`TypedJsonSerializer`]**: typed JSON entries
//! - **[`PostcardSerializer`]**: compact binary codec used for deep cloning
//! - **Error types**: [`SerializationError`] and [`DeserializationError`]
//!
//! The factories plug into a
//! [`SerializerRegistry`](crate::registry::SerializerRegistry), which builds
//! each typed entry once and shares it.
//!
//! # Formats
//!
//! ## XML
//!
//! Struct fields become child elements of a root element named after the
//! type. Types without a usable name (tuples, slices, references) need an
//! explicit root name registered with [`XmlFactory::with_root_name`].
//!
//! ## JSON
//!
//! Compact by default, pretty-printed on request. Also used as the
//! intermediate form for structural conversion between types.
//!
//! ## Postcard
//!
//! Compact and deterministic but not self-describing. Only used for round
//! trips where both sides share the same type.
//!
//! # Example
//!
//! ```rust
//! use objconv::registry::SerializerRegistry;
//! use objconv::serialization::{JsonFactory, JsonSerializer};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Serialize, Deserialize, Debug, PartialEq)]
//! struct Tag {
//!     name: String,
//! }
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let registry = SerializerRegistry::new(JsonFactory::new(JsonSerializer::new()));
//! let json = registry.get::<Tag>()?;
//!
//! let text = json.serialize(&Tag { name: "urgent".into() })?;
//! assert_eq!(text, r#"{"name":"urgent"}"#);
//! assert_eq!(json.deserialize(&text)?, Tag { name: "urgent".into() });
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

mod error;
mod json;
mod postcard;
mod traits;
mod xml;

pub use error::{DeserializationError, SerializationError};
pub use json::{JsonFactory, JsonSerializer, TypedJsonSerializer};
pub use self::postcard::PostcardSerializer;
pub use traits::Serializer;
pub use xml::{XML_DECLARATION, XmlConfig, XmlFactory, XmlIndent, XmlSerializer, is_valid_element_name};
