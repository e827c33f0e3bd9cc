//! Semantic aliases used across the crate to keep signatures self-describing.

/// Element count of an array or bitmask.
pub type Length = usize;

/// Byte or element offset into a buffer.
pub type Offset = usize;
