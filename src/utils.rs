//! Internal validation and bitmap bookkeeping helpers.

use crate::Bitmask;

/// Confirms that a null mask, when present, covers exactly `len` logical
/// slots. Constructors call this so a mismatched mask fails loudly at build
/// time rather than mis-counting nulls later.
#[inline]
pub fn validate_null_mask_len(len: usize, null_mask: &Option<Bitmask>) {
    if let Some(mask) = null_mask {
        assert_eq!(
            mask.len(),
            len,
            "null mask length {} does not match array length {}",
            mask.len(),
            len
        );
    }
}

/// Merges the validity of `src` into `dst` as part of an array append.
///
/// `dst_len` is the destination's logical length *before* the append. Absent
/// masks are treated as all-valid: a mask is only materialised when at least
/// one side carries one.
pub(crate) fn merge_null_masks(
    dst: &mut Option<Bitmask>,
    dst_len: usize,
    src: Option<&Bitmask>,
    src_len: usize,
) {
    match (dst.as_mut(), src) {
        (None, None) => {}
        (Some(mask), None) => mask.resize(dst_len + src_len, true),
        (Some(mask), Some(other)) => mask.extend_from_bitmask(other),
        (None, Some(other)) => {
            let mut mask = Bitmask::new_set_all(dst_len, true);
            mask.extend_from_bitmask(other);
            *dst = Some(mask);
        }
    }
}
