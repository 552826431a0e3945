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

//! Codec error types.
//!
//! Every codec in this crate reports failures through these two types, with
//! the format-specific error kept as the source.

use std::fmt;

/// Error that occurs while encoding a value.
///
/// Common causes include:
/// - Map keys or values the target format cannot express
/// - A root element name rejected by the XML writer
/// - A failing output sink
///
/// # Examples
///
/// ```rust
/// use objconv::serialization::SerializationError;
///
/// let error = SerializationError::new("unsupported value");
/// assert_eq!(error.to_string(), "Serialization error: unsupported value");
/// ```
#[derive(Debug)]
pub struct SerializationError {
    /// The underlying error message
    message: String,
    /// Optional source error
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl SerializationError {
    /// Creates a new serialization error with a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    /// Creates a new serialization error with a message and source.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use objconv::serialization::SerializationError;
    /// use std::io;
    ///
    /// let io_error = io::Error::other("sink closed");
    /// let error = SerializationError::with_source("Failed to write XML", io_error);
    /// assert!(std::error::Error::source(&error).is_some());
    /// ```
    pub fn with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Returns the error message without the source.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for SerializationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Serialization error: {}", self.message)?;
        if let Some(source) = &self.source {
            write!(f, " (caused by: {})", source)?;
        }
        Ok(())
    }
}

impl std::error::Error for SerializationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

/// Error that occurs while decoding a value.
///
/// Common causes include:
/// - Malformed input text
/// - Missing or mistyped fields
/// - Input larger than the configured limit
#[derive(Debug)]
pub struct DeserializationError {
    /// The underlying error message
    message: String,
    /// Optional source error
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl DeserializationError {
    /// Creates a new deserialization error with a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    /// Creates a new deserialization error with a message and source.
    pub fn with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Returns the error message without the source.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for DeserializationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Deserialization error: {}", self.message)?;
        if let Some(source) = &self.source {
            write!(f, " (caused by: {})", source)?;
        }
        Ok(())
    }
}

impl std::error::Error for DeserializationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

impl From<quick_xml::se::SeError> for SerializationError {
    fn from(err: quick_xml::se::SeError) -> Self {
        Self::with_source("XML serialization failed", err)
    }
}

impl From<quick_xml::de::DeError> for DeserializationError {
    fn from(err: quick_xml::de::DeError) -> Self {
        Self::with_source("XML deserialization failed", err)
    }
}

impl From<serde_json::Error> for SerializationError {
    fn from(err: serde_json::Error) -> Self {
        Self::with_source("JSON serialization failed", err)
    }
}

impl From<serde_json::Error> for DeserializationError {
    fn from(err: serde_json::Error) -> Self {
        Self::with_source("JSON deserialization failed", err)
    }
}

impl From<postcard::Error> for SerializationError {
    fn from(err: postcard::Error) -> Self {
        Self::with_source("Postcard serialization failed", err)
    }
}

impl From<postcard::Error> for DeserializationError {
    fn from(err: postcard::Error) -> Self {
        Self::with_source("Postcard deserialization failed", err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_serialization_error_new() {
        let error = SerializationError::new("test error");
        assert_eq!(error.to_string(), "Serialization error: test error");
        assert_eq!(error.message(), "test error");
        assert!(error.source().is_none());
    }

    #[test]
    fn test_serialization_error_with_source() {
        let source = std::io::Error::other("io error");
        let error = SerializationError::with_source("test error", source);
        assert!(error.to_string().contains("caused by: io error"));
        assert!(error.source().is_some());
    }

    #[test]
    fn test_deserialization_error_new() {
        let error = DeserializationError::new("test error");
        assert_eq!(error.to_string(), "Deserialization error: test error");
        assert!(error.source().is_none());
    }

    #[test]
    fn test_from_json_error_keeps_source() {
        let json_error = serde_json::from_str::<u32>("not json").unwrap_err();
        let error: DeserializationError = json_error.into();
        assert_eq!(error.message(), "JSON deserialization failed");
        assert!(error.source().is_some());
    }

    #[test]
    fn test_from_xml_error_keeps_source() {
        let xml_error = quick_xml::de::from_str::<u32>("<a>x</a>").unwrap_err();
        let error: DeserializationError = xml_error.into();
        assert_eq!(error.message(), "XML deserialization failed");
        assert!(error.source().is_some());
    }
}
