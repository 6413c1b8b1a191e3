//! Qualifier comparison and increment rules.
//!
//! A qualifier is the class-specific suffix after the numeric core, e.g. `~alpha.1`,
//! `.fix.2` or `_feature_x.3`. Comparison treats `.` and `_` as the same separator;
//! incrementing bumps the trailing numeric run.

use once_cell::sync::Lazy;
use regex::Regex;
use std::cmp::Ordering;

/// Last `(delimiter)(digits)(non-digits)` run anchored at the end of an identifier
static TRAILING_NUMERIC_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([._])([0-9]+)([^0-9]*)$").unwrap());

/// Any `.N` / `_N` numeric segment
static NUMERIC_SEGMENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"[._][0-9]+").unwrap());

/// Strips the class delimiter (`~`, `.`, `_`) from the front of a qualifier
pub fn strip_delimiter(qualifier: &str) -> &str {
    match qualifier.chars().next() {
        Some('~' | '.' | '_') => &qualifier[1..],
        _ => qualifier,
    }
}

fn segments(qualifier: &str) -> Vec<&str> {
    strip_delimiter(qualifier).split(['.', '_']).collect()
}

fn is_numeric(segment: &str) -> bool {
    !segment.is_empty() && segment.bytes().all(|b| b.is_ascii_digit())
}

/// Numeric comparison of two digit strings of any length
fn compare_numeric(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

/// Compares a single pair of segments; an empty segment stands for a missing one
fn compare_segment(a: &str, b: &str) -> Ordering {
    match (a.is_empty(), b.is_empty()) {
        (true, true) => return Ordering::Equal,
        (true, false) => return Ordering::Less,
        (false, true) => return Ordering::Greater,
        (false, false) => {}
    }

    match (is_numeric(a), is_numeric(b)) {
        (true, true) => compare_numeric(a, b),
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => a.cmp(b),
    }
}

/// Compares two qualifiers of the same class segment by segment.
///
/// Both are split on `.` and `_`. A shorter sequence is padded with empty segments, which
/// sort before anything present. Numeric segments compare numerically and sort before
/// alphabetic ones; alphabetic segments compare as plain strings.
pub fn compare_qualifiers(a: &str, b: &str) -> Ordering {
    let a_parts = segments(a);
    let b_parts = segments(b);
    let len = a_parts.len().max(b_parts.len());

    (0..len)
        .map(|i| {
            compare_segment(
                a_parts.get(i).copied().unwrap_or(""),
                b_parts.get(i).copied().unwrap_or(""),
            )
        })
        .find(|ord| *ord != Ordering::Equal)
        .unwrap_or(Ordering::Equal)
}

fn increment_decimal(digits: &str) -> String {
    let trimmed = digits.trim_start_matches('0');
    let mut out: Vec<u8> = trimmed.bytes().collect();
    let mut idx = out.len();
    loop {
        if idx == 0 {
            out.insert(0, b'1');
            break;
        }
        idx -= 1;
        if out[idx] == b'9' {
            out[idx] = b'0';
        } else {
            out[idx] += 1;
            break;
        }
    }
    String::from_utf8(out).unwrap_or_else(|_| "1".to_string())
}

/// Increments an identifier (a qualifier without its leading delimiter).
///
/// The last `(delimiter)(digits)(trailing non-digits)` run has its number incremented and
/// every numeric segment before that run is dropped: `alpha.1.2` becomes `alpha.3` and
/// `alpha.1_feature` becomes `alpha.2_feature`. Without a numeric run `.1` is appended.
pub fn increment_identifier(identifier: &str) -> String {
    match TRAILING_NUMERIC_RUN.captures(identifier) {
        Some(caps) => {
            let run_start = caps.get(0).map_or(identifier.len(), |m| m.start());
            let prefix = NUMERIC_SEGMENT.replace_all(&identifier[..run_start], "");
            format!(
                "{}{}{}{}",
                prefix,
                &caps[1],
                increment_decimal(&caps[2]),
                &caps[3]
            )
        }
        None => format!("{}.1", identifier),
    }
}
