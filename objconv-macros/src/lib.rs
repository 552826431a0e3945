//! Procedural macros for objconv.
//!
//! This crate provides `#[derive(FixedWidth)]`, which records the width
//! declared on each field with `#[data_width(N)]`.
//!
//! # Example
//!
//! ```ignore
//! use objconv::FixedWidth;
//!
//! #[derive(FixedWidth)]
//! struct Payment {
//!     #[data_width(10)]
//!     account: String,
//!     #[data_width(12)]
//!     amount: String,
//! }
//!
//! assert_eq!(Payment::record_width(), 22);
//! ```
//!
//! This will generate an `objconv::fixed_width::FixedWidth` impl whose
//! `FIELDS` lists `account` and `amount` in declaration order.

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod generate;
mod parse;

/// Derives `objconv::fixed_width::FixedWidth`.
///
/// # Attributes
///
/// - `#[data_width(N)]` on a named field: the field is `N` characters wide.
///   `N` must be a positive integer literal. Fields without the attribute
///   are left out of the layout.
///
/// # Errors
///
/// Compilation fails if:
/// - the item is not a struct with named fields
/// - `N` is zero, negative, or not an integer literal
/// - a field carries more than one `data_width` attribute
#[proc_macro_derive(FixedWidth, attributes(data_width))]
pub fn derive_fixed_width(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let layout = match parse::parse_layout(&input) {
        Ok(layout) => layout,
        Err(err) => return err.to_compile_error().into(),
    };

    TokenStream::from(generate::generate_fixed_width(&layout))
}
