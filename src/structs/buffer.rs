//! Owned contiguous value buffer backing every array type.

use std::fmt::{self, Debug};
use std::ops::{Deref, DerefMut};

/// Growable, contiguous element storage.
///
/// A thin wrapper over `Vec<T>` that keeps the crate's buffer surface in one
/// place: arrays hold `Buffer<T>` for their value bytes and never reach for
/// `Vec` directly.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Buffer<T> {
    inner: Vec<T>,
}

impl<T> Buffer<T> {
    #[inline]
    pub fn new() -> Self {
        Buffer { inner: Vec::new() }
    }

    #[inline]
    pub fn with_capacity(cap: usize) -> Self {
        Buffer {
            inner: Vec::with_capacity(cap),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.inner.capacity()
    }

    #[inline]
    pub fn push(&mut self, value: T) {
        self.inner.push(value);
    }

    #[inline]
    pub fn reserve(&mut self, additional: usize) {
        self.inner.reserve(additional);
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.inner
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.inner
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.inner.iter()
    }
}

impl<T: Clone> Buffer<T> {
    #[inline]
    pub fn from_slice(slice: &[T]) -> Self {
        Buffer {
            inner: slice.to_vec(),
        }
    }

    #[inline]
    pub fn extend_from_slice(&mut self, slice: &[T]) {
        self.inner.extend_from_slice(slice);
    }

    #[inline]
    pub fn resize(&mut self, new_len: usize, value: T) {
        self.inner.resize(new_len, value);
    }
}

impl<T> Deref for Buffer<T> {
    type Target = [T];

    #[inline]
    fn deref(&self) -> &[T] {
        &self.inner
    }
}

impl<T> DerefMut for Buffer<T> {
    #[inline]
    fn deref_mut(&mut self) -> &mut [T] {
        &mut self.inner
    }
}

impl<T> From<Vec<T>> for Buffer<T> {
    #[inline]
    fn from(inner: Vec<T>) -> Self {
        Buffer { inner }
    }
}

impl<T> FromIterator<T> for Buffer<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Buffer {
            inner: Vec::from_iter(iter),
        }
    }
}

impl<'a, T> IntoIterator for &'a Buffer<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.iter()
    }
}

impl<T: Debug> Debug for Buffer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.inner.iter()).finish()
    }
}
