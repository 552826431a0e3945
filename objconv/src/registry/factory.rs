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

//! Serializer factory trait.

use super::{ConstructionError, TypeKey};

/// Builds serializer entries for the registry.
///
/// A factory names a family of entry types through the generic associated
/// type [`Entry`](Self::Entry); the registry caches one entry per concrete
/// type and never calls [`build`](Self::build) twice for the same type once
/// it has succeeded.
///
/// Factories must be `Send + Sync + 'static` because a registry is shared
/// across threads.
///
/// # Examples
///
/// ```rust
/// use objconv::registry::{ConstructionError, SerializerFactory, SerializerRegistry, TypeKey};
/// use std::marker::PhantomData;
///
/// /// Entry that only remembers which type it was built for.
/// struct NameTag<T> {
///     name: &'static str,
///     _type: PhantomData<fn() -> T>,
/// }
///
/// struct NameTagFactory;
///
/// impl SerializerFactory for NameTagFactory {
///     type Entry<T: 'static> = NameTag<T>;
///
///     fn build<T: 'static>(&self, key: &TypeKey) -> Result<NameTag<T>, ConstructionError> {
///         Ok(NameTag { name: key.short_name(), _type: PhantomData })
///     }
/// }
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let registry = SerializerRegistry::new(NameTagFactory);
/// let tag = registry.get::<String>()?;
/// assert_eq!(tag.name, "String");
/// # Ok(())
/// # }
/// # example().unwrap();
/// ```
pub trait SerializerFactory: Send + Sync + 'static {
    /// Entry type produced for values of type `T`.
    type Entry<T: 'static>: Send + Sync + 'static;

    /// Builds the entry for `T`.
    ///
    /// `key` is always `TypeKey::of::<T>()`.
    ///
    /// # Errors
    ///
    /// Returns a [`ConstructionError`] if no entry can be built for `T`.
    fn build<T: 'static>(&self, key: &TypeKey) -> Result<Self::Entry<T>, ConstructionError>;
}
