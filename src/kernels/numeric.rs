//! Null-skipping numeric reductions.

use crate::structs::variants::integer::IntegerArray;
use crate::traits::masked_array::MaskedArray;
use crate::traits::type_unions::Integer;

/// Sum of the valid elements; `None` when the array is empty or all-null.
///
/// Accumulation wraps on overflow. No overflow detection is performed, so
/// wrapping keeps the result deterministic across build profiles.
pub fn sum<T: Integer>(a: &IntegerArray<T>) -> Option<T> {
    if a.is_empty() || a.null_count() == a.len() {
        return None;
    }
    let mut acc = T::zero();
    for i in 0..a.len() {
        if let Some(v) = a.get(i) {
            acc = acc.wrapping_add(&v);
        }
    }
    Some(acc)
}

/// Smallest valid element; `None` when the array is empty or all-null.
pub fn min<T: Integer>(a: &IntegerArray<T>) -> Option<T> {
    if a.is_empty() || a.null_count() == a.len() {
        return None;
    }
    let mut acc = T::max_value();
    for i in 0..a.len() {
        if let Some(v) = a.get(i) {
            if v < acc {
                acc = v;
            }
        }
    }
    Some(acc)
}

/// Largest valid element; `None` when the array is empty or all-null.
pub fn max<T: Integer>(a: &IntegerArray<T>) -> Option<T> {
    if a.is_empty() || a.null_count() == a.len() {
        return None;
    }
    let mut acc = T::min_value();
    for i in 0..a.len() {
        if let Some(v) = a.get(i) {
            if v > acc {
                acc = v;
            }
        }
    }
    Some(acc)
}
