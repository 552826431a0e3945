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

//! Type-keyed serializer cache.

use super::{RegistryError, RegistryStats, SerializerFactory, TypeKey};
use once_cell::sync::OnceCell;
use parking_lot::RwLock;
use std::any::Any;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Type-erased cached entry.
type Erased = Arc<dyn Any + Send + Sync>;

/// Per-type slot. Empty until the factory succeeds, then never changes.
type Slot = Arc<OnceCell<Erased>>;

/// Thread-safe cache of serializer entries keyed by type.
///
/// Entries are built lazily by the registry's [`SerializerFactory`] on the
/// first request for a type and shared as `Arc`s afterwards. For any type the
/// factory succeeds at most once, even when many threads request the type at
/// the same moment; every caller receives the same `Arc`.
///
/// # Locking
///
/// The map is guarded by a read-write lock that is only held to look up or
/// insert a slot. Construction runs outside the map lock inside the type's
/// own once-cell, so a slow construction only blocks callers asking for the
/// same type.
///
/// # Failures
///
/// A failed construction is returned to the caller that ran the factory and
/// leaves the type absent. The failure is not cached: the next request runs
/// the factory again.
///
/// # Examples
///
/// ```rust
/// use objconv::registry::SerializerRegistry;
/// use objconv::serialization::XmlFactory;
/// use serde::{Deserialize, Serialize};
/// use std::sync::Arc;
///
/// #[derive(Serialize, Deserialize, Debug, PartialEq)]
/// struct Point {
///     x: i32,
///     y: i32,
/// }
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let registry = SerializerRegistry::new(XmlFactory::default());
///
/// let serializer = registry.get::<Point>()?;
/// let xml = serializer.serialize(&Point { x: 3, y: 4 })?;
/// assert_eq!(xml, "<Point><x>3</x><y>4</y></Point>");
///
/// // Second lookup is served from the cache.
/// let again = registry.get::<Point>()?;
/// assert!(Arc::ptr_eq(&serializer, &again));
/// assert_eq!(registry.stats().constructions(), 1);
/// # Ok(())
/// # }
/// # example().unwrap();
/// ```
pub struct SerializerRegistry<F: SerializerFactory> {
    factory: F,
    slots: RwLock<HashMap<TypeKey, Slot>>,
    stats: RegistryStats,
}

impl<F: SerializerFactory> SerializerRegistry<F> {
    /// Creates an empty registry using `factory` to build entries.
    pub fn new(factory: F) -> Self {
        Self::with_capacity(factory, 0)
    }

    /// Creates an empty registry with room for `capacity` types.
    pub fn with_capacity(factory: F, capacity: usize) -> Self {
        Self {
            factory,
            slots: RwLock::new(HashMap::with_capacity(capacity)),
            stats: RegistryStats::new(),
        }
    }

    /// Returns the entry for `T`, building it on first use.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Construction`] if the factory fails.
    pub fn get<T: 'static>(&self) -> Result<Arc<F::Entry<T>>, RegistryError> {
        self.resolve::<T>(&TypeKey::of::<T>())
    }

    /// Returns the entry for the type identified by `key`.
    ///
    /// `key` must identify `T`; it is checked before the map is consulted.
    ///
    /// # Errors
    ///
    /// - [`RegistryError::InvalidIdentity`] if `key` does not identify `T`.
    /// - [`RegistryError::Construction`] if the factory fails.
    pub fn resolve<T: 'static>(&self, key: &TypeKey) -> Result<Arc<F::Entry<T>>, RegistryError> {
        let expected = TypeKey::of::<T>();
        if *key != expected {
            return Err(RegistryError::InvalidIdentity {
                supplied: *key,
                expected,
            });
        }

        // Fast path: shared lock only.
        if let Some(entry) = self.slots.read().get(key).and_then(|slot| slot.get()) {
            self.stats.record_hit();
            return Self::downcast::<T>(entry, key);
        }

        self.stats.record_miss();
        let slot = self.slot(key);
        let entry = slot.get_or_try_init(|| match self.factory.build::<T>(key) {
            Ok(entry) => {
                self.stats.record_construction();
                Ok(Arc::new(entry) as Erased)
            }
            Err(source) => {
                self.stats.record_construction_failure();
                Err(RegistryError::Construction {
                    type_name: key.type_name(),
                    source,
                })
            }
        })?;
        Self::downcast::<T>(entry, key)
    }

    /// Returns true if an entry for `T` has been built.
    #[must_use]
    pub fn contains<T: 'static>(&self) -> bool {
        self.slots
            .read()
            .get(&TypeKey::of::<T>())
            .is_some_and(|slot| slot.get().is_some())
    }

    /// Returns the number of built entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots
            .read()
            .values()
            .filter(|slot| slot.get().is_some())
            .count()
    }

    /// Returns true if no entry has been built.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the keys of all built entries, in no particular order.
    #[must_use]
    pub fn keys(&self) -> Vec<TypeKey> {
        self.slots
            .read()
            .iter()
            .filter(|(_, slot)| slot.get().is_some())
            .map(|(key, _)| *key)
            .collect()
    }

    /// Returns the lookup and construction counters.
    #[must_use]
    pub fn stats(&self) -> &RegistryStats {
        &self.stats
    }

    /// Returns the factory used to build entries.
    #[must_use]
    pub fn factory(&self) -> &F {
        &self.factory
    }

    /// Returns the slot for `key`, inserting an empty one if absent.
    fn slot(&self, key: &TypeKey) -> Slot {
        if let Some(slot) = self.slots.read().get(key) {
            return Arc::clone(slot);
        }
        // Another thread may have inserted between the two locks.
        let mut slots = self.slots.write();
        Arc::clone(slots.entry(*key).or_default())
    }

    /// Recovers the typed entry from a slot.
    ///
    /// `resolve` has already checked `key` against `T`, and a slot only ever
    /// holds the entry built for its own key, so the error arm is unreachable.
    fn downcast<T: 'static>(entry: &Erased, key: &TypeKey) -> Result<Arc<F::Entry<T>>, RegistryError> {
        Arc::clone(entry)
            .downcast::<F::Entry<T>>()
            .map_err(|_| RegistryError::InvalidIdentity {
                supplied: *key,
                expected: TypeKey::of::<T>(),
            })
    }
}

impl<F: SerializerFactory + Default> Default for SerializerRegistry<F> {
    fn default() -> Self {
        Self::new(F::default())
    }
}

impl<F: SerializerFactory> fmt::Debug for SerializerRegistry<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SerializerRegistry")
            .field("factory", &std::any::type_name::<F>())
            .field("entries", &self.len())
            .field("stats", &self.stats.snapshot())
            .finish()
    }
}
