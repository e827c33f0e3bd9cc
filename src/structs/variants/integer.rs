//! Fixed-width integer array.

use std::fmt::{self, Display};

use crate::aliases::{Length, Offset};
use crate::structs::bitmask::Bitmask;
use crate::structs::buffer::Buffer;
use crate::traits::masked_array::MaskedArray;
use crate::traits::print::MAX_PREVIEW;
use crate::traits::type_unions::Integer;
use crate::utils::{merge_null_masks, validate_null_mask_len};

/// Nullable array of primitive integers: one value slot per element, nulls
/// carry `T::default()` in the value buffer and a cleared validity bit.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IntegerArray<T> {
    pub data: Buffer<T>,
    pub null_mask: Option<Bitmask>,
}

/// The workhorse width for codes, lengths and reductions.
pub type Int64Array = IntegerArray<i64>;

impl<T: Integer> IntegerArray<T> {
    pub fn new(data: Buffer<T>, null_mask: Option<Bitmask>) -> Self {
        validate_null_mask_len(data.len(), &null_mask);
        Self { data, null_mask }
    }

    pub fn from_slice(values: &[T]) -> Self {
        Self {
            data: Buffer::from_slice(values),
            null_mask: None,
        }
    }

    /// Builds from optional scalars; a null mask is materialised only when
    /// at least one slot is `None`.
    pub fn from_options(items: &[Option<T>]) -> Self {
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
    pub fn push(&mut self, value: T) {
        self.data.push(value);
        if let Some(mask) = &mut self.null_mask {
            mask.set(self.data.len() - 1, true);
        }
    }

    /// Clones elements `[offset, offset + len)` into a fresh array.
    pub fn slice_clone(&self, offset: Offset, len: Length) -> Self {
        assert!(
            offset + len <= self.data.len(),
            "slice [{offset}, {}) out of range for length {}",
            offset + len,
            self.data.len()
        );
        Self {
            data: Buffer::from_slice(&self.data[offset..offset + len]),
            null_mask: self
                .null_mask
                .as_ref()
                .map(|m| m.slice_clone(offset, len)),
        }
    }

    /// Iterates the raw value buffer, nulls included as `T::default()`.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }
}

impl<T: Integer> MaskedArray for IntegerArray<T> {
    type Logical = T;
    type ValueRef<'a>
        = T
    where
        Self: 'a;

    fn with_capacity(cap: usize, nullable: bool) -> Self {
        Self {
            data: Buffer::with_capacity(cap),
            null_mask: nullable.then(|| Bitmask::with_capacity(cap)),
        }
    }

    #[inline]
    fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    fn get(&self, idx: usize) -> Option<T> {
        if idx >= self.data.len() || self.is_null(idx) {
            None
        } else {
            Some(self.data[idx])
        }
    }

    #[inline]
    fn push_ref(&mut self, value: T) {
        self.push(value);
    }

    fn push_null(&mut self) {
        self.data.push(T::default());
        let idx = self.data.len() - 1;
        match &mut self.null_mask {
            Some(mask) => mask.set(idx, false),
            None => {
                let mut mask = Bitmask::new_set_all(self.data.len(), true);
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
        validate_null_mask_len(self.data.len(), &mask);
        self.null_mask = mask;
    }

    fn append_array(&mut self, other: &Self) {
        let old_len = self.data.len();
        self.data.extend_from_slice(&other.data);
        merge_null_masks(
            &mut self.null_mask,
            old_len,
            other.null_mask.as_ref(),
            other.data.len(),
        );
    }

    fn dtype(&self) -> &'static str {
        T::DTYPE
    }

    fn name() -> &'static str {
        "IntegerArray"
    }

    fn nbytes(&self) -> usize {
        self.data.len() * std::mem::size_of::<T>()
    }
}

impl<T: Integer> Display for IntegerArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", Self::name())?;
        write!(f, "[")?;
        for i in 0..self.len().min(MAX_PREVIEW) {
            if i > 0 {
                write!(f, ", ")?;
            }
            match self.get(i) {
                Some(v) => write!(f, "{v}")?,
                None => write!(f, "null")?,
            }
        }
        if self.len() > MAX_PREVIEW {
            write!(f, ", … ({} total)", self.len())?;
        }
        write!(f, "]")
    }
}
