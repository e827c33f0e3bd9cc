//! Packed bit buffer used for validity masks and boolean values.
//!
//! Bits are LSB-first within each byte, matching the Arrow validity layout:
//! logical slot `i` lives at byte `i / 8`, bit `i % 8`, and a set bit marks
//! a valid (or true) slot. Bits past `len` in the final byte are always
//! kept zero so byte-level operations (counts, bulk copies, inversion) need
//! no per-call edge handling.

use std::fmt::{self, Debug, Display};
use std::ops::Not;

use crate::aliases::{Length, Offset};
use crate::structs::buffer::Buffer;

#[derive(Clone, Default, PartialEq, Eq)]
pub struct Bitmask {
    pub bits: Buffer<u8>,
    pub len: usize,
}

impl Bitmask {
    /// Builds a mask from raw bytes, masking any trailing padding bits.
    pub fn new(bits: Buffer<u8>, len: usize) -> Self {
        assert!(
            bits.len() * 8 >= len,
            "bit buffer too short: {} bytes for {} bits",
            bits.len(),
            len
        );
        let mut mask = Bitmask { bits, len };
        mask.mask_trailing_bits();
        mask
    }

    /// A mask of `len` bits, all set to `value`.
    pub fn new_set_all(len: usize, value: bool) -> Self {
        let n_bytes = len.div_ceil(8);
        let fill = if value { 0xFF } else { 0x00 };
        let mut mask = Bitmask {
            bits: Buffer::from(vec![fill; n_bytes]),
            len,
        };
        mask.mask_trailing_bits();
        mask
    }

    /// An empty mask with room for `bits` bits.
    pub fn with_capacity(bits: usize) -> Self {
        Bitmask {
            bits: Buffer::with_capacity(bits.div_ceil(8)),
            len: 0,
        }
    }

    pub fn from_bools(values: &[bool]) -> Self {
        let mut mask = Bitmask::new_set_all(values.len(), false);
        for (i, &v) in values.iter().enumerate() {
            if v {
                mask.bits[i >> 3] |= 1 << (i & 7);
            }
        }
        mask
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Reads bit `idx`. Out-of-range reads return `false`, matching the
    /// all-padding-zero invariant.
    #[inline]
    pub fn get(&self, idx: usize) -> bool {
        if idx >= self.len {
            return false;
        }
        (self.bits[idx >> 3] >> (idx & 7)) & 1 != 0
    }

    /// Writes bit `idx`, growing the mask (zero-filled) when `idx` is past
    /// the current length.
    #[inline]
    pub fn set(&mut self, idx: usize, value: bool) {
        self.ensure_capacity(idx + 1);
        let byte = idx >> 3;
        let bit = 1u8 << (idx & 7);
        if value {
            self.bits[byte] |= bit;
        } else {
            self.bits[byte] &= !bit;
        }
    }

    /// Appends a single bit.
    #[inline]
    pub fn push(&mut self, value: bool) {
        let idx = self.len;
        self.set(idx, value);
    }

    /// Grows the mask to at least `bits` bits, zero-filling new slots.
    pub fn ensure_capacity(&mut self, bits: usize) {
        let needed = bits.div_ceil(8);
        if self.bits.len() < needed {
            self.bits.resize(needed, 0);
        }
        if bits > self.len {
            self.len = bits;
        }
    }

    /// Resizes to `new_len` bits; new slots take `value`.
    pub fn resize(&mut self, new_len: usize, value: bool) {
        let old_len = self.len;
        self.bits.resize(new_len.div_ceil(8), if value { 0xFF } else { 0x00 });
        self.len = new_len;
        if value && new_len > old_len {
            // New bits that land in the old partial byte were zeroed by the
            // padding invariant and must be raised by hand.
            let old_byte_end = (old_len.div_ceil(8) * 8).min(new_len);
            for i in old_len..old_byte_end {
                self.bits[i >> 3] |= 1 << (i & 7);
            }
        }
        self.mask_trailing_bits();
    }

    /// Count of set bits within `len`.
    pub fn count_ones(&self) -> usize {
        self.bits[..self.len.div_ceil(8)]
            .iter()
            .map(|b| b.count_ones() as usize)
            .sum()
    }

    /// Count of cleared bits within `len`.
    pub fn count_zeros(&self) -> usize {
        self.len - self.count_ones()
    }

    pub fn all_set(&self) -> bool {
        self.count_ones() == self.len
    }

    /// Bulk complement: whole `u64` words first, then the byte remainder,
    /// then the trailing padding is re-zeroed.
    pub fn invert(&self) -> Self {
        let mut out = self.clone();
        out.invert_inplace();
        out
    }

    pub fn invert_inplace(&mut self) {
        let n_bytes = self.len.div_ceil(8);
        let bytes = &mut self.bits.as_mut_slice()[..n_bytes];
        let mut chunks = bytes.chunks_exact_mut(8);
        for chunk in chunks.by_ref() {
            let mut word = [0u8; 8];
            word.copy_from_slice(chunk);
            let inverted = !u64::from_le_bytes(word);
            chunk.copy_from_slice(&inverted.to_le_bytes());
        }
        for byte in chunks.into_remainder() {
            *byte = !*byte;
        }
        self.mask_trailing_bits();
    }

    /// Appends all bits of `other`, byte-copying when the append is
    /// byte-aligned.
    pub fn extend_from_bitmask(&mut self, other: &Bitmask) {
        let start = self.len;
        let added = other.len;
        self.resize(start + added, false);
        if start & 7 == 0 {
            let dst_byte = start >> 3;
            let n_bytes = added.div_ceil(8);
            self.bits[dst_byte..dst_byte + n_bytes]
                .copy_from_slice(&other.bits[..n_bytes]);
            self.mask_trailing_bits();
        } else {
            for i in 0..added {
                if other.get(i) {
                    self.set(start + i, true);
                }
            }
        }
    }

    /// Clones bits `[offset, offset + len)` into a fresh mask.
    pub fn slice_clone(&self, offset: Offset, len: Length) -> Self {
        assert!(
            offset + len <= self.len,
            "slice [{offset}, {}) out of range for {} bits",
            offset + len,
            self.len
        );
        let mut out = Bitmask::new_set_all(len, false);
        for i in 0..len {
            if self.get(offset + i) {
                out.bits[i >> 3] |= 1 << (i & 7);
            }
        }
        out
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        self.bits.as_slice()
    }

    /// Zeroes the padding bits past `len` in the final byte.
    #[inline]
    pub fn mask_trailing_bits(&mut self) {
        let rem = self.len & 7;
        if rem != 0 {
            if let Some(last) = self.bits.as_mut_slice().get_mut(self.len >> 3) {
                *last &= (1u8 << rem) - 1;
            }
        }
    }
}

impl Not for &Bitmask {
    type Output = Bitmask;

    fn not(self) -> Bitmask {
        self.invert()
    }
}

impl Debug for Bitmask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Bitmask")
            .field("len", &self.len)
            .field("ones", &self.count_ones())
            .finish()
    }
}

impl Display for Bitmask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Bitmask [{} bits] ", self.len)?;
        for i in 0..self.len {
            write!(f, "{}", if self.get(i) { '1' } else { '0' })?;
        }
        Ok(())
    }
}
