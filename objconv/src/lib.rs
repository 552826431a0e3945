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


#![allow(clippy::module_inception)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

//! # objconv - Typed object conversion
//!
//! objconv converts serde values to and from XML and JSON, clones them by
//! binary round trip, and caches the per-type serializers it builds along
//! the way:
//!
//! - **Serializer cache**: each type's serializer is built at most once, even
//!   under concurrent first use, and shared afterwards
//! - **XML and JSON**: typed entries with derived XML root names
//! - **Deep cloning**: independent copies through a compact binary codec
//! - **Structural conversion**: move data between types of the same shape
//! - **Helpers**: calendar ranges and ages, inclusive range checks, and
//!   fixed-width field metadata
//!
//! ## Architecture
//!
//! - **[`registry`]**: type-keyed, lazily built serializer cache
//! - **[`serialization`]**: XML, JSON and binary codecs
//! - **[`converter`]**: [`ObjectConverter`], which owns one registry per
//!   format
//! - **[`calendar`]**, **[`predicate`]**, **[`fixed_width`]**: stateless
//!   helpers
//!
//! ## Quick Start
//!
//! ```rust
//! use objconv::ObjectConverter;
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Serialize, Deserialize, Debug, PartialEq)]
//! struct Point {
//!     x: i32,
//!     y: i32,
//! }
//!
//! # fn main() -> Result<(), objconv::ConvertError> {
//! let converter = ObjectConverter::new();
//!
//! let xml = converter.to_xml(&Point { x: 3, y: 4 })?;
//! assert_eq!(xml, "<Point><x>3</x><y>4</y></Point>");
//!
//! // The second request reuses the entry built by the first.
//! let point: Point = converter.from_xml(&xml)?;
//! assert_eq!(point, Point { x: 3, y: 4 });
//! assert_eq!(converter.xml_registry().stats().constructions(), 1);
//! # Ok(())
//! # }
//! ```
//!
//! ## Features
//!
//! - `derive` (default): `#[derive(FixedWidth)]`
//!
//! ## Logging
//!
//! Codec factories emit `tracing` events when a serializer is built
//! (`debug`) or rejected (`warn`), and deep clones emit `trace` events. The
//! registry itself does not log.

pub mod calendar;
pub mod converter;
pub mod error;
pub mod fixed_width;
pub mod predicate;
pub mod registry;
pub mod serialization;

pub use converter::{ConverterConfig, ObjectConverter};
pub use error::ConvertError;
pub use fixed_width::FixedWidth;
pub use registry::{SerializerRegistry, TypeKey};

#[cfg(feature = "derive")]
pub use objconv_macros::FixedWidth;
