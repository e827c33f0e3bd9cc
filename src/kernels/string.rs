//! Unicode string kernels: codepoint lengths, case mapping, character
//! class predicates. All of them pass nulls through untouched and treat
//! the empty string as vacuously satisfying every predicate.

use crate::structs::variants::boolean::BooleanArray;
use crate::structs::variants::integer::Int64Array;
use crate::structs::variants::string::StringArray;
use crate::traits::masked_array::MaskedArray;

/// Length of each element in Unicode codepoints, not bytes.
pub fn str_len(a: &StringArray) -> Int64Array {
    let mut out = Int64Array::with_capacity(a.len(), a.null_mask.is_some());
    for i in 0..a.len() {
        match a.get_str(i) {
            Some(s) => out.push(s.chars().count() as i64),
            None => out.push_null(),
        }
    }
    out
}

/// Simple one-to-one case mapping: codepoints whose full mapping expands to
/// more than one codepoint (e.g. `ß`) are copied through unchanged.
fn to_lower_single(c: char) -> char {
    let mut mapped = c.to_lowercase();
    match (mapped.next(), mapped.next()) {
        (Some(l), None) => l,
        _ => c,
    }
}

fn to_upper_single(c: char) -> char {
    let mut mapped = c.to_uppercase();
    match (mapped.next(), mapped.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}

fn map_codepoints(a: &StringArray, f: impl Fn(char) -> char) -> StringArray {
    let mut out = StringArray::with_capacities(a.len(), a.data.len(), a.null_mask.is_some());
    let mut scratch = String::new();
    for i in 0..a.len() {
        match a.get_str(i) {
            None => out.push_null(),
            Some(s) => {
                scratch.clear();
                scratch.extend(s.chars().map(&f));
                out.push_str(&scratch);
            }
        }
    }
    out
}

/// Lowercases each codepoint via the simple one-to-one mapping.
pub fn lower(a: &StringArray) -> StringArray {
    map_codepoints(a, to_lower_single)
}

/// Uppercases each codepoint via the simple one-to-one mapping.
pub fn upper(a: &StringArray) -> StringArray {
    map_codepoints(a, to_upper_single)
}

/// Uppercases the first codepoint of each element; the remaining
/// codepoints are copied verbatim, not lowercased.
pub fn capitalize(a: &StringArray) -> StringArray {
    let mut out = StringArray::with_capacities(a.len(), a.data.len(), a.null_mask.is_some());
    let mut scratch = String::new();
    for i in 0..a.len() {
        match a.get_str(i) {
            None => out.push_null(),
            Some(s) => {
                scratch.clear();
                let mut chars = s.chars();
                if let Some(first) = chars.next() {
                    scratch.push(to_upper_single(first));
                    scratch.extend(chars);
                }
                out.push_str(&scratch);
            }
        }
    }
    out
}

/// Every-codepoint predicate: true when all codepoints satisfy `pred`,
/// vacuously true for the empty string, null passthrough.
fn check_codepoints(a: &StringArray, pred: impl Fn(char) -> bool) -> BooleanArray {
    let mut out = BooleanArray::with_capacity(a.len(), a.null_mask.is_some());
    for i in 0..a.len() {
        match a.get_str(i) {
            None => out.push_null(),
            Some(s) => out.push(s.chars().all(&pred)),
        }
    }
    out
}

pub fn is_alnum(a: &StringArray) -> BooleanArray {
    check_codepoints(a, |c| c.is_alphanumeric())
}

pub fn is_alpha(a: &StringArray) -> BooleanArray {
    check_codepoints(a, |c| c.is_alphabetic())
}

pub fn is_digit(a: &StringArray) -> BooleanArray {
    check_codepoints(a, |c| c.is_numeric())
}

/// True for the Unicode separator categories Zs, Zl and Zp only. Control
/// characters such as tab and newline are not separators and report false.
fn is_separator(c: char) -> bool {
    matches!(
        c,
        '\u{0020}'
            | '\u{00A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
    )
}

pub fn is_space(a: &StringArray) -> BooleanArray {
    check_codepoints(a, is_separator)
}

pub fn is_lower(a: &StringArray) -> BooleanArray {
    check_codepoints(a, |c| c.is_lowercase())
}

pub fn is_upper(a: &StringArray) -> BooleanArray {
    check_codepoints(a, |c| c.is_uppercase())
}
