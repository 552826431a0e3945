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


//! Range predicates for ordered values.

/// Inclusive range check for any partially ordered type.
///
/// ```rust
/// use objconv::predicate::Between;
///
/// assert!(5_i32.is_between(&1, &10));
/// assert!(10_i32.is_between(&1, &10));
/// assert!(!11_i32.is_between(&1, &10));
/// assert!("m".is_between(&"a", &"z"));
/// ```
pub trait Between: PartialOrd {
    /// Returns true if `low <= self <= high`.
    ///
    /// Always false when `low > high` or when either comparison is undefined,
    /// such as with `f64::NAN`.
    fn is_between(&self, low: &Self, high: &Self) -> bool {
        self >= low && self <= high
    }
}

impl<T: PartialOrd + ?Sized> Between for T {}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_integer_bounds_inclusive() {
        assert!(1_i32.is_between(&1, &3));
        assert!(3_i32.is_between(&1, &3));
        assert!(!0_i32.is_between(&1, &3));
        assert!(!4_i32.is_between(&1, &3));
    }

    #[test]
    fn test_inverted_bounds() {
        assert!(!2_i32.is_between(&3, &1));
    }

    #[test]
    fn test_nan_is_never_between() {
        assert!(!f64::NAN.is_between(&f64::MIN, &f64::MAX));
        assert!(!1.0_f64.is_between(&f64::NAN, &2.0));
    }

    #[test]
    fn test_unsized_str() {
        let word: &str = "kiwi";
        assert!(word.is_between("apple", "lemon"));
        assert!(!word.is_between("lemon", "zucchini"));
    }

    #[test]
    fn test_dates() {
        let day = |d| NaiveDate::from_ymd_opt(2024, 3, d).unwrap();
        assert!(day(15).is_between(&day(1), &day(31)));
        assert!(!day(1).is_between(&day(2), &day(31)));
    }
}
