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


//! Fixed-width field metadata.
//!
//! Fixed-width records lay fields out back to back, each padded or truncated
//! to a declared number of characters. Widths are declared per field with
//! `#[derive(FixedWidth)]` and read back through the [`FixedWidth`] trait.
//!
//! ```rust
//! # #[cfg(feature = "derive")]
//! # {
//! use objconv::FixedWidth;
//!
//! #[derive(FixedWidth)]
//! struct Customer {
//!     #[data_width(6)]
//!     id: String,
//!     #[data_width(10)]
//!     name: String,
//!     notes: String,
//! }
//!
//! assert_eq!(Customer::record_width(), 16);
//! assert_eq!(Customer::width_of("name").map(|w| w.get()), Some(10));
//! assert_eq!(Customer::width_of("notes"), None);
//! assert_eq!(
//!     Customer::format_record(&["42", "Ada Lovelace"]).as_deref(),
//!     Some("42    Ada Lovela")
//! );
//! # }
//! ```

use std::fmt;
use std::num::NonZeroUsize;

/// Width of a fixed-width field, in characters. Never zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DataWidth(NonZeroUsize);

impl DataWidth {
    /// Returns `None` if `width` is zero.
    #[must_use]
    pub const fn new(width: usize) -> Option<Self> {
        match NonZeroUsize::new(width) {
            Some(width) => Some(Self(width)),
            None => None,
        }
    }

    /// Creates a width from a literal checked at compile time.
    ///
    /// Used by `#[derive(FixedWidth)]`. Evaluating it with zero in a const
    /// context is a compile error.
    #[doc(hidden)]
    #[must_use]
    pub const fn from_literal(width: usize) -> Self {
        match Self::new(width) {
            Some(width) => width,
            None => panic!("data width must be positive"),
        }
    }

    /// Returns the width.
    #[must_use]
    pub const fn get(self) -> usize {
        self.0.get()
    }

    /// Pads `value` with trailing spaces, or truncates it, to exactly this
    /// many characters.
    ///
    /// ```rust
    /// use objconv::fixed_width::DataWidth;
    ///
    /// let width = DataWidth::new(4).unwrap();
    /// assert_eq!(width.fit("ab"), "ab  ");
    /// assert_eq!(width.fit("abcdef"), "abcd");
    /// ```
    #[must_use]
    pub fn fit(self, value: &str) -> String {
        let width = self.get();
        let mut out: String = value.chars().take(width).collect();
        let len = out.chars().count();
        out.extend(std::iter::repeat_n(' ', width - len));
        out
    }
}

impl fmt::Display for DataWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Declared width of one named field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldWidth {
    /// Field name as written in the struct.
    pub name: &'static str,
    /// Declared width.
    pub width: DataWidth,
}

/// Types whose fields have declared fixed widths.
///
/// Usually derived. Only fields carrying `#[data_width(N)]` are listed, in
/// declaration order.
pub trait FixedWidth {
    /// Declared fields in declaration order.
    const FIELDS: &'static [FieldWidth];

    /// Returns the declared width of `name`, if any.
    fn width_of(name: &str) -> Option<DataWidth> {
        Self::FIELDS
            .iter()
            .find(|field| field.name == name)
            .map(|field| field.width)
    }

    /// Returns the total width of a record.
    fn record_width() -> usize {
        Self::FIELDS.iter().map(|field| field.width.get()).sum()
    }

    /// Lays out `values` as one record, fitting each to its field's width.
    ///
    /// Returns `None` unless there is exactly one value per declared field.
    fn format_record(values: &[&str]) -> Option<String> {
        if values.len() != Self::FIELDS.len() {
            return None;
        }
        let mut record = String::with_capacity(Self::record_width());
        for (field, value) in Self::FIELDS.iter().zip(values) {
            record.push_str(&field.width.fit(value));
        }
        Some(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Invoice;

    impl FixedWidth for Invoice {
        const FIELDS: &'static [FieldWidth] = &[
            FieldWidth {
                name: "number",
                width: DataWidth::from_literal(8),
            },
            FieldWidth {
                name: "amount",
                width: DataWidth::from_literal(12),
            },
        ];
    }

    #[test]
    fn test_zero_width_rejected() {
        assert_eq!(DataWidth::new(0), None);
        assert_eq!(DataWidth::new(3).map(DataWidth::get), Some(3));
    }

    #[test]
    fn test_fit_pads_and_truncates() {
        let width = DataWidth::from_literal(5);
        assert_eq!(width.fit(""), "     ");
        assert_eq!(width.fit("12345"), "12345");
        assert_eq!(width.fit("123456789"), "12345");
    }

    #[test]
    fn test_fit_counts_characters_not_bytes() {
        let width = DataWidth::from_literal(3);
        assert_eq!(width.fit("né"), "né ");
        assert_eq!(width.fit("日本語です"), "日本語");
    }

    #[test]
    fn test_trait_defaults() {
        assert_eq!(Invoice::record_width(), 20);
        assert_eq!(Invoice::width_of("amount"), DataWidth::new(12));
        assert_eq!(Invoice::width_of("missing"), None);
    }

    #[test]
    fn test_format_record() {
        let record = Invoice::format_record(&["INV-1", "1250.00"]).unwrap();
        assert_eq!(record, "INV-1   1250.00     ");
        assert_eq!(record.len(), Invoice::record_width());
        assert_eq!(Invoice::format_record(&["INV-1"]), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(DataWidth::from_literal(42).to_string(), "42");
    }
}
