//! Console preview support.

use std::fmt::Display;

/// Maximum number of elements rendered by an array's `Display` preview
/// before truncation.
pub(crate) const MAX_PREVIEW: usize = 50;

/// Prints self to stdout using its `Display` impl.
pub trait Print {
    fn print(&self)
    where
        Self: Display,
    {
        println!("{}", self);
    }
}

impl<T: Display> Print for T {}
