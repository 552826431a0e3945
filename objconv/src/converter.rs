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


//! Object conversion facade.
//!
//! [`ObjectConverter`] owns one registry per text format plus the binary codec
//! used for cloning. Create one per application and share it by reference;
//! serializer entries built through it are reused for its whole lifetime.

use crate::error::ConvertError;
use crate::registry::SerializerRegistry;
use crate::serialization::{
    DeserializationError, JsonFactory, JsonSerializer, PostcardSerializer, SerializationError,
    Serializer, XmlConfig, XmlFactory,
};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fmt;
use std::io;

/// Settings for an [`ObjectConverter`].
///
/// # Examples
///
/// ```rust
/// use objconv::ConverterConfig;
/// use objconv::serialization::{XmlConfig, XmlIndent};
///
/// let config = ConverterConfig::default()
///     .with_xml(XmlConfig::new().with_indent(XmlIndent::spaces(4)))
///     .with_pretty_json(true)
///     .with_max_clone_size(64 * 1024);
/// assert_eq!(config.max_clone_size, Some(64 * 1024));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ConverterConfig {
    /// XML output settings.
    pub xml: XmlConfig,

    /// Pretty-print JSON output.
    ///
    /// Default: false
    pub pretty_json: bool,

    /// Largest encoded payload accepted by [`ObjectConverter::deep_clone`].
    ///
    /// Default: None (unbounded)
    pub max_clone_size: Option<usize>,
}

impl ConverterConfig {
    /// Sets the XML output settings.
    #[must_use]
    pub fn with_xml(mut self, xml: XmlConfig) -> Self {
        self.xml = xml;
        self
    }

    /// Enables or disables pretty-printed JSON.
    #[must_use]
    pub fn with_pretty_json(mut self, pretty: bool) -> Self {
        self.pretty_json = pretty;
        self
    }

    /// Bounds the payload size accepted when cloning.
    #[must_use]
    pub fn with_max_clone_size(mut self, max_size: usize) -> Self {
        self.max_clone_size = Some(max_size);
        self
    }
}

/// Converts values to and from XML and JSON, and clones them by round trip.
///
/// # Examples
///
/// ```rust
/// use objconv::ObjectConverter;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Serialize, Deserialize, Debug, PartialEq)]
/// struct Point {
///     x: i32,
///     y: i32,
/// }
///
/// # fn example() -> Result<(), objconv::ConvertError> {
/// let converter = ObjectConverter::new();
///
/// let xml = converter.to_xml(&Point { x: 3, y: 4 })?;
/// assert_eq!(xml, "<Point><x>3</x><y>4</y></Point>");
/// assert_eq!(converter.from_xml::<Point>(&xml)?, Point { x: 3, y: 4 });
///
/// let json = converter.to_json(&Point { x: 3, y: 4 })?;
/// assert_eq!(json, r#"{"x":3,"y":4}"#);
///
/// let copy = converter.deep_clone(&Point { x: 3, y: 4 })?;
/// assert_eq!(copy, Point { x: 3, y: 4 });
/// # Ok(())
/// # }
/// # example().unwrap();
/// ```
pub struct ObjectConverter {
    xml: SerializerRegistry<XmlFactory>,
    json: SerializerRegistry<JsonFactory>,
    binary: PostcardSerializer,
    config: ConverterConfig,
}

impl ObjectConverter {
    /// Creates a converter with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(ConverterConfig::default())
    }

    /// Creates a converter with the given settings.
    #[must_use]
    pub fn with_config(config: ConverterConfig) -> Self {
        let codec = if config.pretty_json {
            JsonSerializer::new().with_pretty_print()
        } else {
            JsonSerializer::new()
        };
        let binary = match config.max_clone_size {
            Some(max_size) => PostcardSerializer::new().with_max_size(max_size),
            None => PostcardSerializer::new(),
        };
        Self {
            xml: SerializerRegistry::new(XmlFactory::new(config.xml.clone())),
            json: SerializerRegistry::new(JsonFactory::new(codec)),
            binary,
            config,
        }
    }

    /// Replaces the XML factory, for example to register root names.
    ///
    /// Entries built by the previous factory are discarded.
    ///
    /// ```rust
    /// use objconv::ObjectConverter;
    /// use objconv::serialization::{XmlConfig, XmlFactory};
    ///
    /// use serde::Serialize;
    ///
    /// #[derive(Serialize)]
    /// struct Point { x: i32, y: i32 }
    ///
    /// let factory = XmlFactory::new(XmlConfig::default()).with_root_name::<Point>("Coordinate");
    /// let converter = ObjectConverter::new().with_xml_factory(factory);
    /// assert_eq!(
    ///     converter.to_xml(&Point { x: 1, y: 2 }).unwrap(),
    ///     "<Coordinate><x>1</x><y>2</y></Coordinate>"
    /// );
    /// ```
    #[must_use]
    pub fn with_xml_factory(mut self, factory: XmlFactory) -> Self {
        self.config.xml = factory.config().clone();
        self.xml = SerializerRegistry::new(factory);
        self
    }

    /// Returns the settings this converter was built with.
    #[must_use]
    pub fn config(&self) -> &ConverterConfig {
        &self.config
    }

    /// Returns the registry of XML entries.
    #[must_use]
    pub fn xml_registry(&self) -> &SerializerRegistry<XmlFactory> {
        &self.xml
    }

    /// Returns the registry of JSON entries.
    #[must_use]
    pub fn json_registry(&self) -> &SerializerRegistry<JsonFactory> {
        &self.json
    }

    /// Encodes `value` as an XML document.
    ///
    /// # Errors
    ///
    /// Returns [`ConvertError::Registry`] if no XML entry can be built for
    /// `T`, or [`ConvertError::Serialization`] if encoding fails.
    pub fn to_xml<T>(&self, value: &T) -> Result<String, ConvertError>
    where
        T: Serialize + 'static,
    {
        let entry = self.xml.get::<T>()?;
        Ok(entry.serialize(value)?)
    }

    /// Writes the XML document for `value` to `writer`.
    ///
    /// # Errors
    ///
    /// As [`to_xml`](Self::to_xml); a failing writer is reported as
    /// [`ConvertError::Serialization`].
    pub fn write_xml<T, W>(&self, value: &T, mut writer: W) -> Result<(), ConvertError>
    where
        T: Serialize + 'static,
        W: io::Write,
    {
        let text = self.to_xml(value)?;
        writer
            .write_all(text.as_bytes())
            .and_then(|()| writer.flush())
            .map_err(|e| SerializationError::with_source("Failed to write XML", e))?;
        Ok(())
    }

    /// Decodes a value of type `T` from an XML document.
    ///
    /// # Errors
    ///
    /// Returns [`ConvertError::Registry`] if no XML entry can be built for
    /// `T`, or [`ConvertError::Deserialization`] if the text does not decode.
    pub fn from_xml<T>(&self, text: &str) -> Result<T, ConvertError>
    where
        T: DeserializeOwned + 'static,
    {
        let entry = self.xml.get::<T>()?;
        Ok(entry.deserialize(text)?)
    }

    /// Encodes `value` as JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`ConvertError::Serialization`] if serde_json rejects the value.
    pub fn to_json<T>(&self, value: &T) -> Result<String, ConvertError>
    where
        T: Serialize + 'static,
    {
        let entry = self.json.get::<T>()?;
        Ok(entry.serialize(value)?)
    }

    /// Decodes a value of type `T` from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`ConvertError::Deserialization`] if the text does not decode.
    pub fn from_json<T>(&self, text: &str) -> Result<T, ConvertError>
    where
        T: DeserializeOwned + 'static,
    {
        let entry = self.json.get::<T>()?;
        Ok(entry.deserialize(text)?)
    }

    /// Returns an independent copy of `value` built by a binary round trip.
    ///
    /// The copy shares no heap data with the original.
    ///
    /// # Errors
    ///
    /// Fails if `T` cannot round-trip through a non-self-describing format
    /// (untagged enums, flattened fields) or if the encoded value exceeds
    /// [`ConverterConfig::max_clone_size`].
    pub fn deep_clone<T>(&self, value: &T) -> Result<T, ConvertError>
    where
        T: Serialize + DeserializeOwned,
    {
        let bytes = self.binary.serialize(value)?;
        tracing::trace!(
            type_name = std::any::type_name::<T>(),
            bytes = bytes.len(),
            "deep clone round trip"
        );
        Ok(self.binary.deserialize(&bytes)?)
    }

    /// Clones an optional value; `None` stays `None`.
    ///
    /// # Errors
    ///
    /// As [`deep_clone`](Self::deep_clone).
    pub fn clone_option<T>(&self, value: Option<&T>) -> Result<Option<T>, ConvertError>
    where
        T: Serialize + DeserializeOwned,
    {
        value.map(|v| self.deep_clone(v)).transpose()
    }

    /// Converts a value into another type with a compatible shape.
    ///
    /// Fields are matched by name through an intermediate JSON tree. Fields
    /// of `T` that `U` does not declare are dropped.
    ///
    /// ```rust
    /// use objconv::ObjectConverter;
    /// use serde::{Deserialize, Serialize};
    ///
    /// #[derive(Serialize)]
    /// struct Customer { id: u32, name: String, credit_limit: u64 }
    ///
    /// #[derive(Deserialize, Debug, PartialEq)]
    /// struct CustomerSummary { id: u32, name: String }
    ///
    /// let converter = ObjectConverter::new();
    /// let summary: CustomerSummary = converter
    ///     .convert(&Customer { id: 9, name: "Ada".into(), credit_limit: 5000 })
    ///     .unwrap();
    /// assert_eq!(summary, CustomerSummary { id: 9, name: "Ada".into() });
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`ConvertError::Deserialization`] if `U` requires a field `T`
    /// does not provide or the field types disagree.
    pub fn convert<T, U>(&self, value: &T) -> Result<U, ConvertError>
    where
        T: Serialize,
        U: DeserializeOwned,
    {
        let tree = serde_json::to_value(value).map_err(SerializationError::from)?;
        Ok(serde_json::from_value(tree).map_err(DeserializationError::from)?)
    }
}

impl Default for ObjectConverter {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ObjectConverter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObjectConverter")
            .field("xml_entries", &self.xml.len())
            .field("json_entries", &self.json.len())
            .field("config", &self.config)
            .finish()
    }
}
