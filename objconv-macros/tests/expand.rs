//! Tests for macro expansion.
//!
//! These tests verify that `#[derive(FixedWidth)]` generates a usable impl.

use objconv::FixedWidth;
use objconv::fixed_width::{DataWidth, FieldWidth};
use std::marker::PhantomData;

/// A bank statement line.
#[allow(dead_code)]
#[derive(FixedWidth)]
struct StatementLine {
    #[data_width(8)]
    date: String,
    #[data_width(24)]
    description: String,
    memo: Option<String>,
    #[data_width(10)]
    amount: String,
}

#[allow(dead_code)]
#[derive(FixedWidth)]
struct Tagged<T: Clone> {
    #[data_width(3)]
    r#type: String,
    #[data_width(5)]
    value: T,
}

#[allow(dead_code)]
#[derive(FixedWidth)]
struct Unannotated {
    anything: u32,
}

#[allow(dead_code)]
#[derive(FixedWidth)]
struct Markers<T> {
    #[data_width(2)]
    code: String,
    _marker: PhantomData<T>,
}

#[test]
fn test_fields_in_declaration_order() {
    let names: Vec<&str> = StatementLine::FIELDS.iter().map(|f| f.name).collect();
    assert_eq!(names, vec!["date", "description", "amount"]);
}

#[test]
fn test_widths() {
    assert_eq!(StatementLine::width_of("description"), DataWidth::new(24));
    assert_eq!(StatementLine::width_of("memo"), None);
    assert_eq!(StatementLine::record_width(), 42);
}

#[test]
fn test_format_record() {
    let record = StatementLine::format_record(&["20240615", "Coffee", "-3.50"]).unwrap();
    assert_eq!(record.chars().count(), 42);
    assert!(record.starts_with("20240615Coffee "));
    assert!(record.ends_with("-3.50     "));
}

#[test]
fn test_generic_struct_and_raw_identifier() {
    assert_eq!(
        Tagged::<u64>::FIELDS,
        &[
            FieldWidth {
                name: "type",
                width: DataWidth::from_literal(3),
            },
            FieldWidth {
                name: "value",
                width: DataWidth::from_literal(5),
            },
        ]
    );
    assert_eq!(Tagged::<String>::record_width(), 8);
}

#[test]
fn test_struct_without_annotations() {
    assert!(Unannotated::FIELDS.is_empty());
    assert_eq!(Unannotated::record_width(), 0);
    assert_eq!(Unannotated::format_record(&[]).as_deref(), Some(""));
}

#[test]
fn test_generic_without_bounds() {
    assert_eq!(Markers::<u8>::record_width(), 2);
}
