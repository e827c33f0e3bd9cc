//! **nanocol** is a compact columnar array engine built on the Arrow memory
//! layout: each array is a contiguous value buffer plus an optional packed
//! validity bitmap, where bit `1` marks a valid (non-null) slot.
//!
//! Three array types cover the supported logical types:
//!
//! - [`BooleanArray`]: bit-packed values
//! - [`IntegerArray<T>`] for any [`Integer`] primitive ([`Int64Array`] alias)
//! - [`StringArray`]: UTF-8 bytes behind `i64` offsets (Arrow "large string")
//!
//! All null-aware algorithms live in [`kernels`] and are written once over
//! the [`MaskedArray`] capability trait, so `take`, `fillna`, `factorize`,
//! `unique`, indexing and friends monomorphise per array type with no
//! per-element dynamic dispatch.

pub mod aliases;
pub mod utils;

pub mod enums {
    pub mod error;
}

pub mod traits {
    pub mod masked_array;
    pub mod print;
    pub mod type_unions;
}

pub mod structs {
    pub mod bitmask;
    pub mod buffer;

    pub mod variants {
        pub mod boolean;
        pub mod integer;
        pub mod string;
    }
}

pub mod kernels {
    pub mod generic;
    pub mod numeric;
    pub mod string;
}

pub use aliases::{Length, Offset};
pub use enums::error::NanocolError;
pub use kernels::generic::{FillMethod, Indexed, Indexer};
pub use structs::bitmask::Bitmask;
pub use structs::buffer::Buffer;
pub use structs::variants::boolean::BooleanArray;
pub use structs::variants::integer::{Int64Array, IntegerArray};
pub use structs::variants::string::StringArray;
pub use traits::masked_array::MaskedArray;
pub use traits::print::Print;
pub use traits::type_unions::Integer;
