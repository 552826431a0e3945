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

//! Runtime type identity used as the registry key.

use std::any::TypeId;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Stable identity of a concrete `'static` type.
///
/// Equality, ordering and hashing are defined by the underlying [`TypeId`]
/// only. The type name is carried for diagnostics and for codecs that derive
/// metadata from it (such as the XML root element name).
///
/// # Examples
///
/// ```rust
/// use objconv::registry::TypeKey;
///
/// struct Point;
///
/// assert_eq!(TypeKey::of::<Point>(), TypeKey::of::<Point>());
/// assert_ne!(TypeKey::of::<Point>(), TypeKey::of::<u32>());
/// assert!(TypeKey::of::<Point>().type_name().ends_with("Point"));
/// ```
#[derive(Clone, Copy)]
pub struct TypeKey {
    id: TypeId,
    name: &'static str,
}

impl TypeKey {
    /// Returns the identity of `T`.
    #[must_use]
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: std::any::type_name::<T>(),
        }
    }

    /// Returns the underlying [`TypeId`].
    #[must_use]
    pub const fn type_id(&self) -> TypeId {
        self.id
    }

    /// Returns the fully qualified type name.
    ///
    /// The exact text is compiler-defined and must not be used for identity.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        self.name
    }

    /// Returns the type name without its module path or generic arguments.
    ///
    /// `alloc::vec::Vec<my::Point>` becomes `Vec`, `my::Point` becomes
    /// `Point`. Names that do not start with a path (tuples, slices,
    /// references) are returned unchanged.
    #[must_use]
    pub fn short_name(&self) -> &'static str {
        let name = self.name;
        if !name.starts_with(|c: char| c.is_alphabetic() || c == '_') {
            return name;
        }
        let base = match name.find('<') {
            Some(idx) => &name[..idx],
            None => name,
        };
        base.rsplit("::").next().unwrap_or(base)
    }

    /// Returns true if this key identifies `T`.
    #[must_use]
    pub fn is<T: ?Sized + 'static>(&self) -> bool {
        self.id == TypeId::of::<T>()
    }
}

impl PartialEq for TypeKey {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeKey {}

impl Hash for TypeKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl PartialOrd for TypeKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for TypeKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.id.cmp(&other.id)
    }
}

impl fmt::Debug for TypeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("TypeKey").field(&self.name).finish()
    }
}

impl fmt::Display for TypeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}
