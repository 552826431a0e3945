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

//! Type-keyed serializer registry.
//!
//! Building a serializer for a type can be costly: the XML codec, for
//! example, derives and validates the document root name from the type. The
//! registry builds each serializer once and hands out shared references
//! afterwards.
//!
//! # Components
//!
//! - **[`TypeKey`]**: hashable identity of a concrete type
//! - **[`SerializerFactory`]**: builds the entry for a type
//! - **[`SerializerRegistry`]**: caches entries, one per type
//! - **[`RegistryStats`]**: hit, miss and construction counters
//!
//! # Lifecycle of an entry
//!
//! ```text
//! Absent --first request--> Constructing --success--> Present
//!    ^                           |
//!    +---------failure-----------+
//! ```
//!
//! Only one thread may move a type from `Absent` to `Constructing`. `Present`
//! is terminal: the entry is never replaced or removed.
//!
//! # Thread Safety
//!
//! Registries are `Send + Sync` and are meant to be shared, typically behind
//! an `Arc` or inside a longer-lived owner such as
//! [`ObjectConverter`](crate::ObjectConverter).

mod error;
mod factory;
mod key;
mod registry;
mod stats;

pub use error::{ConstructionError, RegistryError};
pub use factory::SerializerFactory;
pub use key::TypeKey;
pub use registry::SerializerRegistry;
pub use stats::{RegistryStats, StatsSnapshot};
