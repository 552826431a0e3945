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

//! XML codec built on quick-xml's serde support.
//!
//! Every XML document needs a root element. [`XmlFactory`] derives it from the
//! type name when the entry is built (`my::Point` becomes `<Point>`), checks
//! that it is a legal element name, and stores it in the typed
//! [`XmlSerializer`] entry. Struct fields become child elements:
//!
//! ```text
//! Point { x: 3, y: 4 }  ->  <Point><x>3</x><y>4</y></Point>
//! ```
//!
//! Values that quick-xml writes as a run of sibling elements, or as nothing at
//! all, cannot form a document on their own. The factory rejects the standard
//! sequence and `Option` types up front, and every serialized value is checked
//! for exactly one root element. Wrap such values in a struct:
//!
//! ```text
//! Route { stops: vec![a, b] }  ->  <Route><stops>..</stops><stops>..</stops></Route>
//! ```

use crate::registry::{ConstructionError, SerializerFactory, TypeKey};
use crate::serialization::{DeserializationError, SerializationError};
use quick_xml::events::Event;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::fmt;
use std::marker::PhantomData;

/// Declaration written before the root element when enabled.
pub const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="utf-8"?>"#;

/// Indentation used for pretty-printed XML.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct XmlIndent {
    /// Character repeated for each level.
    pub character: char,
    /// Number of characters per level.
    pub size: usize,
}

impl XmlIndent {
    /// Indents with `size` spaces per level.
    #[must_use]
    pub const fn spaces(size: usize) -> Self {
        Self {
            character: ' ',
            size,
        }
    }

    /// Indents with one tab per level.
    #[must_use]
    pub const fn tabs() -> Self {
        Self {
            character: '\t',
            size: 1,
        }
    }
}

/// Output settings shared by all XML entries of a factory.
///
/// # Examples
///
/// ```rust
/// use objconv::serialization::{XmlConfig, XmlIndent};
///
/// let config = XmlConfig::new()
///     .with_declaration()
///     .with_indent(XmlIndent::spaces(2));
/// assert!(config.declaration);
/// assert_eq!(config.indent, Some(XmlIndent::spaces(2)));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct XmlConfig {
    /// Write [`XML_DECLARATION`] before the root element.
    ///
    /// Default: false
    pub declaration: bool,

    /// Pretty-print with this indentation.
    ///
    /// Default: None (single line)
    pub indent: Option<XmlIndent>,
}

impl XmlConfig {
    /// Creates the default configuration: no declaration, no indentation.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables the XML declaration.
    #[must_use]
    pub fn with_declaration(mut self) -> Self {
        self.declaration = true;
        self
    }

    /// Enables pretty-printing.
    #[must_use]
    pub fn with_indent(mut self, indent: XmlIndent) -> Self {
        self.indent = Some(indent);
        self
    }
}

/// Standard types quick-xml writes as sibling elements or as no element.
const ROOTLESS_TYPES: &[&str] = &[
    "core::option::Option",
    "alloc::vec::Vec",
    "alloc::collections::vec_deque::VecDeque",
    "alloc::collections::linked_list::LinkedList",
    "alloc::collections::binary_heap::BinaryHeap",
    "alloc::collections::btree::set::BTreeSet",
    "std::collections::hash::set::HashSet",
];

/// Returns true if values of the keyed type cannot be written under a single
/// root element: tuples, arrays, `Option` and the standard sequences.
fn is_rootless(key: &TypeKey) -> bool {
    let name = key.type_name();
    if name.starts_with(['(', '[']) {
        return true;
    }
    let base = name.find('<').map_or(name, |idx| &name[..idx]);
    ROOTLESS_TYPES.contains(&base)
}

/// Counts the top-level elements of an XML fragment.
fn count_root_elements(xml: &str) -> Result<usize, quick_xml::Error> {
    let mut reader = quick_xml::Reader::from_str(xml);
    let mut depth = 0usize;
    let mut roots = 0usize;
    loop {
        match reader.read_event()? {
            Event::Start(_) => {
                if depth == 0 {
                    roots += 1;
                }
                depth += 1;
            }
            Event::End(_) => depth = depth.saturating_sub(1),
            Event::Empty(_) if depth == 0 => roots += 1,
            Event::Eof => return Ok(roots),
            _ => {}
        }
    }
}

/// Returns true if `name` can be used as an XML element name.
///
/// Accepts a letter or underscore followed by letters, digits, `_`, `-` or
/// `.`. Namespace prefixes are not accepted.
///
/// ```rust
/// use objconv::serialization::is_valid_element_name;
///
/// assert!(is_valid_element_name("Point"));
/// assert!(is_valid_element_name("_order-line.v2"));
/// assert!(!is_valid_element_name("(i32, i32)"));
/// assert!(!is_valid_element_name("2d"));
/// assert!(!is_valid_element_name(""));
/// ```
#[must_use]
pub fn is_valid_element_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_alphabetic() || first == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphanumeric() || matches!(c, '_' | '-' | '.'))
}

/// XML entry bound to a single type.
///
/// Built by [`XmlFactory`]; usually obtained from a
/// [`SerializerRegistry`](crate::registry::SerializerRegistry).
pub struct XmlSerializer<T> {
    root: String,
    config: XmlConfig,
    key: TypeKey,
    _type: PhantomData<fn() -> T>,
}

impl<T: 'static> XmlSerializer<T> {
    /// Creates an entry writing documents rooted at `root`.
    ///
    /// # Errors
    ///
    /// Returns [`ConstructionError::InvalidRootName`] if `root` is not a legal
    /// element name.
    pub fn new(root: impl Into<String>, config: XmlConfig) -> Result<Self, ConstructionError> {
        let root = root.into();
        if !is_valid_element_name(&root) {
            return Err(ConstructionError::InvalidRootName { name: root });
        }
        Ok(Self {
            root,
            config,
            key: TypeKey::of::<T>(),
            _type: PhantomData,
        })
    }

    /// Returns the root element name.
    #[must_use]
    pub fn root_name(&self) -> &str {
        &self.root
    }

    /// Returns the output settings.
    #[must_use]
    pub fn config(&self) -> &XmlConfig {
        &self.config
    }

    /// Returns the key of the type this entry handles.
    #[must_use]
    pub fn key(&self) -> TypeKey {
        self.key
    }

    /// Encodes `value` as an XML document.
    ///
    /// # Errors
    ///
    /// Returns a [`SerializationError`] if quick-xml cannot represent the
    /// value, for example a map whose keys are not valid element names.
    pub fn serialize(&self, value: &T) -> Result<String, SerializationError>
    where
        T: Serialize,
    {
        let mut out = String::new();
        self.serialize_to(value, &mut out)?;
        Ok(out)
    }

    /// Appends the XML document for `value` to `writer`.
    ///
    /// Nothing is written unless the whole document is produced.
    ///
    /// # Errors
    ///
    /// Returns a [`SerializationError`] if the value cannot be represented, if
    /// it does not encode to exactly one root element (an empty sequence or
    /// `None` inside a newtype, for example), or if the writer fails.
    pub fn serialize_to<W>(&self, value: &T, writer: &mut W) -> Result<(), SerializationError>
    where
        T: Serialize,
        W: fmt::Write,
    {
        let mut body = String::new();
        let mut serializer = quick_xml::se::Serializer::with_root(&mut body, Some(self.root.as_str()))?;
        if let Some(indent) = self.config.indent {
            serializer.indent(indent.character, indent.size);
        }
        value.serialize(serializer)?;

        let roots = count_root_elements(&body)
            .map_err(|e| SerializationError::with_source("XML output is not well-formed", e))?;
        if roots != 1 {
            return Err(SerializationError::new(format!(
                "value produced {roots} root elements under `{}`, a document needs exactly one",
                self.root
            )));
        }

        let write = |writer: &mut W| -> fmt::Result {
            if self.config.declaration {
                writer.write_str(XML_DECLARATION)?;
                if self.config.indent.is_some() {
                    writer.write_char('\n')?;
                }
            }
            writer.write_str(&body)
        };
        write(writer).map_err(|e| SerializationError::with_source("Failed to write XML", e))
    }

    /// Decodes a value from an XML document.
    ///
    /// The root element name is not checked, so documents written under a
    /// different root still decode.
    ///
    /// # Errors
    ///
    /// Returns a [`DeserializationError`] if the text is not well-formed or
    /// does not match `T`.
    pub fn deserialize(&self, text: &str) -> Result<T, DeserializationError>
    where
        T: DeserializeOwned,
    {
        quick_xml::de::from_str(text).map_err(Into::into)
    }
}

impl<T> fmt::Debug for XmlSerializer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("XmlSerializer")
            .field("type", &self.key)
            .field("root", &self.root)
            .field("config", &self.config)
            .finish()
    }
}

/// Builds [`XmlSerializer`] entries.
///
/// # Examples
///
/// ```rust
/// use objconv::registry::{SerializerFactory, TypeKey};
/// use objconv::serialization::{XmlConfig, XmlFactory};
///
/// struct Order;
/// struct Invoice;
///
/// let factory = XmlFactory::new(XmlConfig::default())
///     .with_root_name::<Invoice>("invoice");
///
/// let order = factory.build::<Order>(&TypeKey::of::<Order>()).unwrap();
/// assert_eq!(order.root_name(), "Order");
///
/// let invoice = factory.build::<Invoice>(&TypeKey::of::<Invoice>()).unwrap();
/// assert_eq!(invoice.root_name(), "invoice");
///
/// // Sequences and tuples have no single root element.
/// assert!(factory.build::<Vec<Order>>(&TypeKey::of::<Vec<Order>>()).is_err());
/// assert!(factory.build::<(u8, u8)>(&TypeKey::of::<(u8, u8)>()).is_err());
/// ```
#[derive(Clone, Debug, Default)]
pub struct XmlFactory {
    config: XmlConfig,
    roots: HashMap<TypeKey, String>,
}

impl XmlFactory {
    /// Creates a factory whose entries use `config`.
    #[must_use]
    pub fn new(config: XmlConfig) -> Self {
        Self {
            config,
            roots: HashMap::new(),
        }
    }

    /// Uses `root` as the root element name for `T` instead of the derived one.
    #[must_use]
    pub fn with_root_name<T: ?Sized + 'static>(mut self, root: impl Into<String>) -> Self {
        self.roots.insert(TypeKey::of::<T>(), root.into());
        self
    }

    /// Returns the output settings.
    #[must_use]
    pub fn config(&self) -> &XmlConfig {
        &self.config
    }

    /// Returns the root name that entries for `key` will use.
    #[must_use]
    pub fn root_name_for(&self, key: &TypeKey) -> &str {
        self.roots
            .get(key)
            .map(String::as_str)
            .unwrap_or_else(|| key.short_name())
    }
}

impl SerializerFactory for XmlFactory {
    type Entry<T: 'static> = XmlSerializer<T>;

    fn build<T: 'static>(&self, key: &TypeKey) -> Result<XmlSerializer<T>, ConstructionError> {
        let result = if is_rootless(key) {
            Err(ConstructionError::unsupported(format!(
                "`{}` does not encode to a single XML element, wrap it in a struct",
                key.type_name()
            )))
        } else {
            XmlSerializer::new(self.root_name_for(key), self.config.clone())
        };
        match result {
            Ok(entry) => {
                tracing::debug!(type_name = key.type_name(), root = entry.root_name(), "built XML serializer");
                Ok(entry)
            }
            Err(err) => {
                tracing::warn!(type_name = key.type_name(), error = %err, "rejected XML serializer");
                Err(err)
            }
        }
    }
}
