//! Type-parametric, null-aware algorithms over [`MaskedArray`].
//!
//! Every kernel here is written once against the capability trait and
//! monomorphises per array type. Outputs are freshly allocated and
//! pre-reserved to their known size; inputs are never mutated, and on any
//! error path the partial output is simply dropped.

use std::collections::hash_map::Entry;
use std::collections::BTreeSet;
use std::str::FromStr;

use ahash::AHashMap;

use crate::enums::error::NanocolError;
use crate::structs::bitmask::Bitmask;
use crate::structs::variants::boolean::BooleanArray;
use crate::structs::variants::integer::Int64Array;
use crate::traits::masked_array::MaskedArray;

/// Null flags as a boolean array: `true` where the slot is null.
///
/// With a mask present this is one bitmap clone plus a word-stride
/// complement; an absent mask short-circuits to an all-false result.
pub fn isna<A: MaskedArray>(a: &A) -> BooleanArray {
    let data = match a.null_mask() {
        Some(mask) => mask.invert(),
        None => Bitmask::new_set_all(a.len(), false),
    };
    BooleanArray::new(data, None)
}

/// True when at least one element is valid. A presence test over the null
/// mask, not a logical OR of boolean values.
pub fn any<A: MaskedArray>(a: &A) -> bool {
    a.len() > a.null_count()
}

/// True when no element is null. A presence test over the null mask, not a
/// logical AND of boolean values.
pub fn all<A: MaskedArray>(a: &A) -> bool {
    a.null_count() == 0
}

/// Normalises a possibly-negative index against `len`.
///
/// Negative values wrap from the end; anything outside `[-len, len)` is an
/// error.
pub fn resolve_index(index: i64, len: usize) -> Result<usize, NanocolError> {
    let n = len as i64;
    if index >= n || index < -n {
        return Err(NanocolError::IndexOutOfBounds { index, len });
    }
    Ok(if index >= 0 { index as usize } else { (n + index) as usize })
}

/// Gathers elements by position. Negative indices wrap; nulls propagate.
pub fn take<A: MaskedArray>(a: &A, indices: &[i64]) -> Result<A, NanocolError> {
    let len = a.len();
    let mut out = A::with_capacity(indices.len(), a.null_mask().is_some());
    for &index in indices {
        match a.get(resolve_index(index, len)?) {
            Some(v) => out.push_ref(v),
            None => out.push_null(),
        }
    }
    Ok(out)
}

/// Deep copy. Value buffers and the null mask are duplicated wholesale.
pub fn copy<A: MaskedArray>(a: &A) -> A {
    a.clone()
}

/// Replaces every null with `replacement`; the result carries no nulls.
pub fn fillna<'a, A: MaskedArray>(a: &'a A, replacement: A::ValueRef<'a>) -> A {
    let mut out = A::with_capacity(a.len(), false);
    for i in 0..a.len() {
        match a.get(i) {
            Some(v) => out.push_ref(v),
            None => out.push_ref(replacement),
        }
    }
    out
}

/// Drops null slots, compacting the remaining elements.
pub fn dropna<A: MaskedArray>(a: &A) -> A {
    let mut out = A::with_capacity(a.len() - a.null_count(), false);
    for i in 0..a.len() {
        if let Some(v) = a.get(i) {
            out.push_ref(v);
        }
    }
    out
}

/// Forward fill: each null takes the nearest preceding valid value.
/// Leading nulls stay null.
pub fn interpolate<'a, A: MaskedArray>(a: &'a A) -> A {
    let mut out = A::with_capacity(a.len(), a.null_count() > 0);
    let mut last: Option<A::ValueRef<'a>> = None;
    for i in 0..a.len() {
        match a.get(i) {
            Some(v) => {
                out.push_ref(v);
                last = Some(v);
            }
            None => match last {
                Some(v) => out.push_ref(v),
                None => out.push_null(),
            },
        }
    }
    out
}

/// Gap-filling direction for [`pad_or_backfill`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FillMethod {
    /// Forward fill from the preceding valid value.
    Pad,
    /// Backward fill from the next valid value.
    Backfill,
}

impl FromStr for FillMethod {
    type Err = NanocolError;

    fn from_str(s: &str) -> Result<Self, NanocolError> {
        match s {
            "pad" => Ok(FillMethod::Pad),
            "backfill" => Ok(FillMethod::Backfill),
            other => Err(NanocolError::invalid_argument(format!(
                "fill method must be \"pad\" or \"backfill\", found \"{other}\""
            ))),
        }
    }
}

/// Fills null runs from the nearest valid neighbour in the chosen
/// direction. Nulls with no neighbour on that side stay null.
pub fn pad_or_backfill<A: MaskedArray>(a: &A, method: FillMethod) -> A {
    match method {
        FillMethod::Pad => interpolate(a),
        FillMethod::Backfill => {
            let mut out = A::with_capacity(a.len(), a.null_count() > 0);
            let mut pending = 0usize;
            for i in 0..a.len() {
                match a.get(i) {
                    Some(v) => {
                        for _ in 0..pending {
                            out.push_ref(v);
                        }
                        pending = 0;
                        out.push_ref(v);
                    }
                    None => pending += 1,
                }
            }
            for _ in 0..pending {
                out.push_null();
            }
            out
        }
    }
}

/// Distinct valid values in ascending order. Nulls are not reported.
pub fn unique<A: MaskedArray>(a: &A) -> A {
    let mut seen = BTreeSet::new();
    for i in 0..a.len() {
        if let Some(v) = a.get(i) {
            seen.insert(v);
        }
    }
    let mut out = A::with_capacity(seen.len(), false);
    for v in seen {
        out.push_ref(v);
    }
    out
}

/// Dictionary-encodes the array: codes in first-occurrence order plus the
/// dictionary of distinct valid values. Null slots encode as `-1`.
pub fn factorize<A: MaskedArray>(a: &A) -> (Int64Array, A) {
    let mut first_seen: AHashMap<A::ValueRef<'_>, i64> = AHashMap::new();
    let mut locations = Int64Array::with_capacity(a.len(), false);
    let mut dictionary = A::with_capacity(0, false);
    for i in 0..a.len() {
        match a.get(i) {
            None => locations.push(-1),
            Some(v) => {
                let next = first_seen.len() as i64;
                match first_seen.entry(v) {
                    Entry::Vacant(slot) => {
                        slot.insert(next);
                        dictionary.push_ref(v);
                        locations.push(next);
                    }
                    Entry::Occupied(slot) => locations.push(*slot.get()),
                }
            }
        }
    }
    (locations, dictionary)
}

/// Rebuilds an array from factorize output. `-1` and null codes produce
/// nulls; any other code outside the dictionary is an error.
pub fn from_factorized<A: MaskedArray>(
    locations: &Int64Array,
    dictionary: &A,
) -> Result<A, NanocolError> {
    let mut out = A::with_capacity(locations.len(), true);
    for i in 0..locations.len() {
        match locations.get(i) {
            None => out.push_null(),
            Some(-1) => out.push_null(),
            Some(code) => {
                if code < 0 || code as usize >= dictionary.len() {
                    return Err(NanocolError::IndexOutOfBounds {
                        index: code,
                        len: dictionary.len(),
                    });
                }
                match dictionary.get(code as usize) {
                    Some(v) => out.push_ref(v),
                    None => out.push_null(),
                }
            }
        }
    }
    Ok(out)
}

/// Concatenates two arrays of the same type: value buffers are bulk-copied,
/// validity merges at the bitmap level.
pub fn concat<A: MaskedArray>(a: &A, b: &A) -> A {
    let mut out = a.clone();
    out.append_array(b);
    out
}

/// Exports to owned scalars, nulls as `None`.
pub fn to_list<A: MaskedArray>(a: &A) -> Vec<Option<A::Logical>> {
    a.iter_opt().map(|v| v.map(Into::into)).collect()
}

/// Elementwise equality. A null on either side yields a null; the arrays
/// must have equal lengths. String comparison is byte-exact.
pub fn eq<A: MaskedArray>(a: &A, b: &A) -> Result<BooleanArray, NanocolError> {
    if a.len() != b.len() {
        return Err(NanocolError::SizeMismatch {
            expected: a.len(),
            found: b.len(),
        });
    }
    let mut out = BooleanArray::with_capacity(a.len(), true);
    for i in 0..a.len() {
        match (a.get(i), b.get(i)) {
            (Some(x), Some(y)) => out.push(x == y),
            _ => out.push_null(),
        }
    }
    Ok(out)
}

/// The positional indexer shapes [`get_item`] accepts.
#[derive(Debug, Clone, Copy)]
pub enum Indexer<'a> {
    /// A single position; negative values wrap.
    Int(i64),
    /// A list of positions; a `None` entry produces a null element.
    IntList(&'a [Option<i64>]),
    /// A boolean selection mask; its length must equal the array length.
    BoolMask(&'a [bool]),
    /// A Python-style slice; `step` must be non-zero.
    Slice { start: i64, stop: i64, step: i64 },
}

/// Result of [`get_item`]: scalar indexers produce a scalar-or-null,
/// everything else a new array.
#[derive(Debug, Clone, PartialEq)]
pub enum Indexed<A: MaskedArray> {
    Scalar(Option<A::Logical>),
    Array(A),
}

/// Reads one element as an owned scalar, `None` for null slots.
pub fn get_scalar<A: MaskedArray>(a: &A, index: i64) -> Result<Option<A::Logical>, NanocolError> {
    let idx = resolve_index(index, a.len())?;
    Ok(a.get(idx).map(Into::into))
}

/// Positional selection over the four indexer shapes.
pub fn get_item<A: MaskedArray>(a: &A, indexer: &Indexer<'_>) -> Result<Indexed<A>, NanocolError> {
    match *indexer {
        Indexer::Int(index) => Ok(Indexed::Scalar(get_scalar(a, index)?)),
        Indexer::IntList(indices) => {
            let len = a.len();
            let mut out = A::with_capacity(indices.len(), true);
            for &entry in indices {
                match entry {
                    None => out.push_null(),
                    Some(index) => match a.get(resolve_index(index, len)?) {
                        Some(v) => out.push_ref(v),
                        None => out.push_null(),
                    },
                }
            }
            Ok(Indexed::Array(out))
        }
        Indexer::BoolMask(mask) => {
            if mask.len() != a.len() {
                return Err(NanocolError::SizeMismatch {
                    expected: a.len(),
                    found: mask.len(),
                });
            }
            let n_kept = mask.iter().filter(|&&keep| keep).count();
            let mut out = A::with_capacity(n_kept, a.null_mask().is_some());
            for (i, &keep) in mask.iter().enumerate() {
                if keep {
                    match a.get(i) {
                        Some(v) => out.push_ref(v),
                        None => out.push_null(),
                    }
                }
            }
            Ok(Indexed::Array(out))
        }
        Indexer::Slice { start, stop, step } => {
            let (start, step, out_len) = adjust_slice(start, stop, step, a.len())?;
            let mut out = A::with_capacity(out_len, a.null_mask().is_some());
            let mut idx = start;
            for _ in 0..out_len {
                match a.get(idx as usize) {
                    Some(v) => out.push_ref(v),
                    None => out.push_null(),
                }
                idx += step;
            }
            Ok(Indexed::Array(out))
        }
    }
}

/// Python slice normalisation: clamps `start`/`stop` to the valid range for
/// the sign of `step` and returns the resolved start, step and output
/// length.
fn adjust_slice(
    mut start: i64,
    mut stop: i64,
    step: i64,
    len: usize,
) -> Result<(i64, i64, usize), NanocolError> {
    if step == 0 {
        return Err(NanocolError::invalid_argument("slice step cannot be zero"));
    }
    let n = len as i64;
    if start < 0 {
        start += n;
        if start < 0 {
            start = if step < 0 { -1 } else { 0 };
        }
    } else if start >= n {
        start = if step < 0 { n - 1 } else { n };
    }
    if stop < 0 {
        stop += n;
        if stop < 0 {
            stop = if step < 0 { -1 } else { 0 };
        }
    } else if stop >= n {
        stop = if step < 0 { n - 1 } else { n };
    }
    let out_len = if step > 0 {
        if start < stop {
            ((stop - start - 1) / step + 1) as usize
        } else {
            0
        }
    } else if stop < start {
        ((start - stop - 1) / -step + 1) as usize
    } else {
        0
    };
    Ok((start, step, out_len))
}
