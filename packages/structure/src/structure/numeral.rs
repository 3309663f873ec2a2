//! Numeral formatting for structure numbers.

use crate::config::MAX_ROMAN;

/// How a structure type displays its ordinal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberFormat {
    /// 1, 2, 3, ...
    Arabic,
    /// I, II, III, IV, ...
    Roman,
}

impl NumberFormat {
    /// Format an ordinal.
    ///
    /// # Examples
    /// ```
    /// use regelrecht_structure::structure::NumberFormat;
    ///
    /// assert_eq!(NumberFormat::Arabic.format(14), "14");
    /// assert_eq!(NumberFormat::Roman.format(14), "XIV");
    /// ```
    #[must_use]
    pub fn format(&self, ordinal: u32) -> String {
        match self {
            Self::Arabic => ordinal.to_string(),
            Self::Roman => romanize(ordinal),
        }
    }

    /// Parse a displayed number back to an ordinal.
    #[must_use]
    pub fn parse(&self, displayed: &str) -> Option<u32> {
        let displayed = displayed.trim();
        match self {
            Self::Arabic => displayed.parse().ok(),
            Self::Roman => parse_roman(displayed),
        }
    }
}

const ROMAN_TABLE: [(u32, &str); 13] = [
    (1000, "M"),
    (900, "CM"),
    (500, "D"),
    (400, "CD"),
    (100, "C"),
    (90, "XC"),
    (50, "L"),
    (40, "XL"),
    (10, "X"),
    (9, "IX"),
    (5, "V"),
    (4, "IV"),
    (1, "I"),
];

/// Convert an ordinal to upper-case Roman numerals (subtractive notation).
///
/// Ordinals outside `1..=3999` have no classical Roman form and are
/// written in arabic digits.
#[must_use]
pub fn romanize(ordinal: u32) -> String {
    if ordinal == 0 || ordinal > MAX_ROMAN {
        return ordinal.to_string();
    }

    let mut remaining = ordinal;
    let mut out = String::new();
    for (value, symbol) in ROMAN_TABLE {
        while remaining >= value {
            out.push_str(symbol);
            remaining -= value;
        }
    }
    out
}

/// Parse upper- or lower-case Roman numerals.
///
/// Only canonical forms are accepted: `IIII` or `IC` yield `None`.
#[must_use]
pub fn parse_roman(numeral: &str) -> Option<u32> {
    if numeral.is_empty() {
        return None;
    }

    let upper = numeral.to_ascii_uppercase();
    let mut total = 0u32;
    let mut previous = 0u32;
    for c in upper.chars().rev() {
        let value = match c {
            'I' => 1,
            'V' => 5,
            'X' => 10,
            'L' => 50,
            'C' => 100,
            'D' => 500,
            'M' => 1000,
            _ => return None,
        };
        if value < previous {
            total = total.checked_sub(value)?;
        } else {
            total = total.checked_add(value)?;
            previous = value;
        }
    }

    // Reject non-canonical spellings
    (romanize(total) == upper).then_some(total)
}
