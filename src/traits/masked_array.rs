//! Capability trait every nullable array implements.

use std::fmt::Debug;
use std::hash::Hash;

use crate::structs::bitmask::Bitmask;

/// Uniform surface over the three array types, sized so every generic
/// kernel can be written once and monomorphised per type.
///
/// `ValueRef<'a>` is the cheap borrowed view of one element (`bool`, a
/// primitive integer, `&str`); `Logical` is its owned counterpart. The
/// bounds on `ValueRef` are exactly what the kernels require: comparison
/// for `unique`/`eq`, hashing for `factorize`, `Into<Logical>` for
/// `to_list`.
pub trait MaskedArray: Clone + Default {
    type Logical: Clone + Default + PartialEq + Debug;
    type ValueRef<'a>: Copy + Eq + Ord + Hash + Debug + Into<Self::Logical>
    where
        Self: 'a;

    /// An empty array with room for `cap` elements. When `nullable` is
    /// true a zero-length null mask is materialised up front; otherwise a
    /// mask appears lazily on the first `push_null`.
    fn with_capacity(cap: usize, nullable: bool) -> Self;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Borrowed view of element `idx`; `None` for nulls and out-of-range
    /// reads.
    fn get(&self, idx: usize) -> Option<Self::ValueRef<'_>>;

    /// Appends a valid element.
    fn push_ref(&mut self, value: Self::ValueRef<'_>);

    /// Appends a null slot, materialising the null mask if absent.
    fn push_null(&mut self);

    fn null_mask(&self) -> Option<&Bitmask>;

    fn null_mask_mut(&mut self) -> Option<&mut Bitmask>;

    fn set_null_mask(&mut self, mask: Option<Bitmask>);

    /// True when slot `idx` is null. An absent mask means all-valid.
    fn is_null(&self, idx: usize) -> bool {
        match self.null_mask() {
            Some(mask) => !mask.get(idx),
            None => false,
        }
    }

    fn null_count(&self) -> usize {
        match self.null_mask() {
            Some(mask) => mask.count_zeros(),
            None => 0,
        }
    }

    /// Bulk append of `other`: value buffers are copied wholesale, validity
    /// is merged at the bitmap level.
    fn append_array(&mut self, other: &Self);

    /// Arrow-style dtype tag, e.g. `"int64[arrow]"`.
    fn dtype(&self) -> &'static str;

    /// Type name used as the preview header.
    fn name() -> &'static str;

    /// Size in bytes of the primary value buffer. Validity and offsets
    /// buffers are not counted.
    fn nbytes(&self) -> usize;

    fn iter_opt(&self) -> impl Iterator<Item = Option<Self::ValueRef<'_>>> {
        (0..self.len()).map(move |i| self.get(i))
    }
}
