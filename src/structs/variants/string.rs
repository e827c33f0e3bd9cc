//! Variable-length UTF-8 string array (Arrow "large string" layout).

use std::fmt::{self, Display};

use crate::aliases::{Length, Offset};
use crate::enums::error::NanocolError;
use crate::structs::bitmask::Bitmask;
use crate::structs::buffer::Buffer;
use crate::traits::masked_array::MaskedArray;
use crate::traits::print::MAX_PREVIEW;
use crate::utils::{merge_null_masks, validate_null_mask_len};

/// Nullable UTF-8 string array.
///
/// Layout invariants, enforced by every constructor:
/// - `offsets.len() == len + 1`, `offsets[0] == 0`, monotone non-decreasing
/// - the final offset equals `data.len()`
/// - every `[offsets[i], offsets[i+1])` span is valid UTF-8
///
/// Null slots are zero-length spans with a cleared validity bit.
#[derive(Debug, Clone, PartialEq)]
pub struct StringArray {
    pub offsets: Buffer<i64>,
    pub data: Buffer<u8>,
    pub null_mask: Option<Bitmask>,
}

impl Default for StringArray {
    fn default() -> Self {
        Self {
            offsets: Buffer::from(vec![0]),
            data: Buffer::new(),
            null_mask: None,
        }
    }
}

impl StringArray {
    /// Validating constructor over raw Arrow-style buffers.
    pub fn from_parts(
        offsets: Vec<i64>,
        data: Vec<u8>,
        null_mask: Option<Bitmask>,
    ) -> Result<Self, NanocolError> {
        if offsets.is_empty() {
            return Err(NanocolError::construction(
                "offsets must contain at least one entry",
            ));
        }
        if offsets[0] != 0 {
            return Err(NanocolError::construction(format!(
                "first offset must be 0, found {}",
                offsets[0]
            )));
        }
        for pair in offsets.windows(2) {
            if pair[1] < pair[0] {
                return Err(NanocolError::construction(format!(
                    "offsets must be non-decreasing, found {} after {}",
                    pair[1], pair[0]
                )));
            }
        }
        let last = offsets[offsets.len() - 1];
        if last as usize != data.len() {
            return Err(NanocolError::construction(format!(
                "final offset {} does not match data length {}",
                last,
                data.len()
            )));
        }
        let len = offsets.len() - 1;
        if let Some(mask) = &null_mask {
            if mask.len() != len {
                return Err(NanocolError::construction(format!(
                    "null mask length {} does not match array length {len}",
                    mask.len()
                )));
            }
        }
        for i in 0..len {
            let span = &data[offsets[i] as usize..offsets[i + 1] as usize];
            if std::str::from_utf8(span).is_err() {
                return Err(NanocolError::construction(format!(
                    "element {i} is not valid UTF-8"
                )));
            }
        }
        Ok(Self {
            offsets: Buffer::from(offsets),
            data: Buffer::from(data),
            null_mask,
        })
    }

    pub fn from_slice(values: &[&str]) -> Self {
        let bytes = values.iter().map(|s| s.len()).sum();
        let mut arr = Self::with_capacities(values.len(), bytes, false);
        for v in values {
            arr.push_str(v);
        }
        arr
    }

    /// Builds from optional strings; a null mask is materialised only when
    /// at least one slot is `None`.
    pub fn from_options(items: &[Option<&str>]) -> Self {
        let nullable = items.iter().any(Option::is_none);
        let bytes = items.iter().flatten().map(|s| s.len()).sum();
        let mut arr = Self::with_capacities(items.len(), bytes, nullable);
        for item in items {
            match item {
                Some(v) => arr.push_str(v),
                None => arr.push_null(),
            }
        }
        arr
    }

    /// An empty array with room for `n_strings` elements totalling
    /// `byte_cap` UTF-8 bytes.
    pub fn with_capacities(n_strings: usize, byte_cap: usize, nullable: bool) -> Self {
        let mut offsets = Buffer::with_capacity(n_strings + 1);
        offsets.push(0);
        Self {
            offsets,
            data: Buffer::with_capacity(byte_cap),
            null_mask: nullable.then(|| Bitmask::with_capacity(n_strings)),
        }
    }

    /// Borrowed view of element `idx`; `None` for nulls and out-of-range
    /// reads.
    #[inline]
    pub fn get_str(&self, idx: usize) -> Option<&str> {
        if idx >= self.len() || self.is_null(idx) {
            return None;
        }
        let start = self.offsets[idx] as usize;
        let end = self.offsets[idx + 1] as usize;
        // Safety: constructors and push paths only admit valid UTF-8 spans.
        Some(unsafe { std::str::from_utf8_unchecked(&self.data[start..end]) })
    }

    #[inline]
    pub fn push_str(&mut self, value: &str) {
        self.data.extend_from_slice(value.as_bytes());
        self.offsets.push(self.data.len() as i64);
        if let Some(mask) = &mut self.null_mask {
            mask.set(self.offsets.len() - 2, true);
        }
    }

    /// Clones elements `[offset, offset + len)` into a fresh array,
    /// rebasing offsets to zero.
    pub fn slice_clone(&self, offset: Offset, len: Length) -> Self {
        assert!(
            offset + len <= self.len(),
            "slice [{offset}, {}) out of range for length {}",
            offset + len,
            self.len()
        );
        let base = self.offsets[offset];
        let start_byte = base as usize;
        let end_byte = self.offsets[offset + len] as usize;
        let mut offsets = Buffer::with_capacity(len + 1);
        for i in offset..=offset + len {
            offsets.push(self.offsets[i] - base);
        }
        Self {
            offsets,
            data: Buffer::from_slice(&self.data[start_byte..end_byte]),
            null_mask: self
                .null_mask
                .as_ref()
                .map(|m| m.slice_clone(offset, len)),
        }
    }
}

impl MaskedArray for StringArray {
    type Logical = String;
    type ValueRef<'a>
        = &'a str
    where
        Self: 'a;

    fn with_capacity(cap: usize, nullable: bool) -> Self {
        Self::with_capacities(cap, 0, nullable)
    }

    #[inline]
    fn len(&self) -> usize {
        self.offsets.len() - 1
    }

    #[inline]
    fn get(&self, idx: usize) -> Option<&str> {
        self.get_str(idx)
    }

    #[inline]
    fn push_ref(&mut self, value: &str) {
        self.push_str(value);
    }

    fn push_null(&mut self) {
        let last = self.offsets[self.offsets.len() - 1];
        self.offsets.push(last);
        let idx = self.offsets.len() - 2;
        match &mut self.null_mask {
            Some(mask) => mask.set(idx, false),
            None => {
                let mut mask = Bitmask::new_set_all(idx + 1, true);
                mask.set(idx, false);
                self.null_mask = Some(mask);
            }
        }
    }

    fn null_mask(&self) -> Option<&Bitmask> {
        self.null_mask.as_ref()
    }

    fn null_mask_mut(&mut self) -> Option<&mut Bitmask> {
        self.null_mask.as_mut()
    }

    fn set_null_mask(&mut self, mask: Option<Bitmask>) {
        validate_null_mask_len(self.len(), &mask);
        self.null_mask = mask;
    }

    fn append_array(&mut self, other: &Self) {
        let old_len = self.len();
        let base = self.data.len() as i64;
        self.data.extend_from_slice(&other.data);
        self.offsets.reserve(other.len());
        for i in 0..other.len() {
            self.offsets.push(base + other.offsets[i + 1]);
        }
        merge_null_masks(
            &mut self.null_mask,
            old_len,
            other.null_mask.as_ref(),
            other.len(),
        );
    }

    fn dtype(&self) -> &'static str {
        "string[arrow]"
    }

    fn name() -> &'static str {
        "StringArray"
    }

    fn nbytes(&self) -> usize {
        self.data.len()
    }
}

impl Display for StringArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", Self::name())?;
        write!(f, "[")?;
        for i in 0..self.len().min(MAX_PREVIEW) {
            if i > 0 {
                write!(f, ", ")?;
            }
            match self.get_str(i) {
                Some(v) => write!(f, "{v:?}")?,
                None => write!(f, "null")?,
            }
        }
        if self.len() > MAX_PREVIEW {
            write!(f, ", … ({} total)", self.len())?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_and_get() {
        let mut arr = StringArray::default();
        arr.push_str("foo");
        arr.push_null();
        arr.push_str("barbaz");
        assert_eq!(arr.len(), 3);
        assert_eq!(arr.get_str(0), Some("foo"));
        assert_eq!(arr.get_str(1), None);
        assert_eq!(arr.get_str(2), Some("barbaz"));
        assert_eq!(arr.get_str(3), None);
        assert_eq!(arr.null_count(), 1);
        assert_eq!(arr.offsets.as_slice(), &[0, 3, 3, 9]);
    }

    #[test]
    fn from_options_lazy_mask() {
        let arr = StringArray::from_options(&[Some("a"), None, Some("bc")]);
        assert_eq!(arr.len(), 3);
        assert_eq!(arr.get_str(1), None);
        assert_eq!(arr.get_str(2), Some("bc"));

        let dense = StringArray::from_slice(&["x", "y"]);
        assert!(dense.null_mask.is_none());
        assert_eq!(dense.null_count(), 0);
    }

    #[test]
    fn from_parts_validates() {
        let ok = StringArray::from_parts(vec![0, 3, 6], b"foobar".to_vec(), None);
        assert_eq!(ok.unwrap().get_str(1), Some("bar"));

        assert!(matches!(
            StringArray::from_parts(vec![1, 3], b"abc".to_vec(), None),
            Err(NanocolError::Construction { .. })
        ));
        assert!(matches!(
            StringArray::from_parts(vec![0, 4, 2], b"abcd".to_vec(), None),
            Err(NanocolError::Construction { .. })
        ));
        assert!(matches!(
            StringArray::from_parts(vec![0, 2], b"abcd".to_vec(), None),
            Err(NanocolError::Construction { .. })
        ));
        // Offset splitting a multi-byte codepoint.
        assert!(matches!(
            StringArray::from_parts(vec![0, 1, 2], "é".as_bytes().to_vec(), None),
            Err(NanocolError::Construction { .. })
        ));
        // Mask length mismatch.
        assert!(matches!(
            StringArray::from_parts(
                vec![0, 3],
                b"foo".to_vec(),
                Some(Bitmask::new_set_all(2, true))
            ),
            Err(NanocolError::Construction { .. })
        ));
    }

    #[test]
    fn append_array_rebases_offsets() {
        let mut a = StringArray::from_slice(&["foo", "ba"]);
        let b = StringArray::from_options(&[None, Some("qux")]);
        a.append_array(&b);
        assert_eq!(a.len(), 4);
        assert_eq!(a.get_str(0), Some("foo"));
        assert_eq!(a.get_str(2), None);
        assert_eq!(a.get_str(3), Some("qux"));
        assert_eq!(a.offsets.as_slice(), &[0, 3, 5, 5, 8]);
        assert_eq!(a.null_count(), 1);
    }

    #[test]
    fn slice_clone_rebases() {
        let arr = StringArray::from_options(&[Some("ab"), None, Some("cde"), Some("f")]);
        let sliced = arr.slice_clone(1, 3);
        assert_eq!(sliced.len(), 3);
        assert_eq!(sliced.get_str(0), None);
        assert_eq!(sliced.get_str(1), Some("cde"));
        assert_eq!(sliced.get_str(2), Some("f"));
        assert_eq!(sliced.offsets.as_slice(), &[0, 0, 3, 4]);
    }

    #[test]
    fn dtype_and_nbytes() {
        let arr = StringArray::from_slice(&["foo", "bar", "baz"]);
        assert_eq!(arr.dtype(), "string[arrow]");
        // Value bytes only; offsets are not counted.
        assert_eq!(arr.nbytes(), 9);
    }

    #[test]
    fn display_preview_quotes() {
        let arr = StringArray::from_options(&[Some("foo"), None]);
        assert_eq!(format!("{arr}"), "StringArray\n[\"foo\", null]");
    }

    #[test]
    fn multibyte_round_trip() {
        let arr = StringArray::from_slice(&["üàéµ", "ok"]);
        assert_eq!(arr.get_str(0), Some("üàéµ"));
        assert_eq!(arr.nbytes(), 8 + 2);
    }
}
