//! Bit-packed boolean array.

use std::fmt::{self, Display};

use crate::aliases::{Length, Offset};
use crate::structs::bitmask::Bitmask;
use crate::traits::masked_array::MaskedArray;
use crate::traits::print::MAX_PREVIEW;
use crate::utils::{merge_null_masks, validate_null_mask_len};

/// Nullable boolean array. Values and validity are both packed bitmaps;
/// `len` is tracked separately because the value bitmap carries no logical
/// length of its own once padding is involved.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BooleanArray {
    pub data: Bitmask,
    pub null_mask: Option<Bitmask>,
    pub len: usize,
}

impl BooleanArray {
    pub fn new(data: Bitmask, null_mask: Option<Bitmask>) -> Self {
        let len = data.len();
        validate_null_mask_len(len, &null_mask);
        Self {
            data,
            null_mask,
            len,
        }
    }

    pub fn from_slice(values: &[bool]) -> Self {
        Self {
            data: Bitmask::from_bools(values),
            null_mask: None,
            len: values.len(),
        }
    }

    /// Builds from optional scalars; a null mask is materialised only when
    /// at least one slot is `None`.
    pub fn from_options(items: &[Option<bool>]) -> Self {
        let nullable = items.iter().any(Option::is_none);
        let mut arr = Self::with_capacity(items.len(), nullable);
        for item in items {
            match item {
                Some(v) => arr.push(*v),
                None => arr.push_null(),
            }
        }
        arr
    }

    #[inline]
    pub fn push(&mut self, value: bool) {
        let idx = self.len;
        self.data.set(idx, value);
        if let Some(mask) = &mut self.null_mask {
            mask.set(idx, true);
        }
        self.len += 1;
    }

    /// Clones elements `[offset, offset + len)` into a fresh array.
    pub fn slice_clone(&self, offset: Offset, len: Length) -> Self {
        assert!(
            offset + len <= self.len,
            "slice [{offset}, {}) out of range for length {}",
            offset + len,
            self.len
        );
        Self {
            data: self.data.slice_clone(offset, len),
            null_mask: self
                .null_mask
                .as_ref()
                .map(|m| m.slice_clone(offset, len)),
            len,
        }
    }
}

impl MaskedArray for BooleanArray {
    type Logical = bool;
    type ValueRef<'a>
        = bool
    where
        Self: 'a;

    fn with_capacity(cap: usize, nullable: bool) -> Self {
        Self {
            data: Bitmask::with_capacity(cap),
            null_mask: nullable.then(|| Bitmask::with_capacity(cap)),
            len: 0,
        }
    }

    #[inline]
    fn len(&self) -> usize {
        self.len
    }

    #[inline]
    fn get(&self, idx: usize) -> Option<bool> {
        if idx >= self.len || self.is_null(idx) {
            None
        } else {
            Some(self.data.get(idx))
        }
    }

    #[inline]
    fn push_ref(&mut self, value: bool) {
        self.push(value);
    }

    fn push_null(&mut self) {
        let idx = self.len;
        self.data.set(idx, false);
        match &mut self.null_mask {
            Some(mask) => mask.set(idx, false),
            None => {
                let mut mask = Bitmask::new_set_all(idx + 1, true);
                mask.set(idx, false);
                self.null_mask = Some(mask);
            }
        }
        self.len += 1;
    }

    fn null_mask(&self) -> Option<&Bitmask> {
        self.null_mask.as_ref()
    }

    fn null_mask_mut(&mut self) -> Option<&mut Bitmask> {
        self.null_mask.as_mut()
    }

    fn set_null_mask(&mut self, mask: Option<Bitmask>) {
        validate_null_mask_len(self.len, &mask);
        self.null_mask = mask;
    }

    fn append_array(&mut self, other: &Self) {
        let old_len = self.len;
        self.data.extend_from_bitmask(&other.data);
        merge_null_masks(
            &mut self.null_mask,
            old_len,
            other.null_mask.as_ref(),
            other.len,
        );
        self.len += other.len;
    }

    fn dtype(&self) -> &'static str {
        "boolean[arrow]"
    }

    fn name() -> &'static str {
        "BooleanArray"
    }

    fn nbytes(&self) -> usize {
        self.len.div_ceil(8)
    }
}

impl Display for BooleanArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", Self::name())?;
        write!(f, "[")?;
        for i in 0..self.len.min(MAX_PREVIEW) {
            if i > 0 {
                write!(f, ", ")?;
            }
            match self.get(i) {
                Some(v) => write!(f, "{v}")?,
                None => write!(f, "null")?,
            }
        }
        if self.len > MAX_PREVIEW {
            write!(f, ", … ({} total)", self.len)?;
        }
        write!(f, "]")
    }
}
