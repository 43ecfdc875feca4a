//! Ordered iterators over a dictionary
//!
//! All iterators walk the dense pair array, so they yield pairs in
//! insertion order (minus deleted pairs).

use std::iter::FusedIterator;

use crate::blob::Blob;

use super::Pair;

/// Borrowing iterator over `(key, value)`
#[derive(Clone)]
pub struct Iter<'a> {
    inner: std::slice::Iter<'a, Pair>,
}

impl<'a> Iter<'a> {
    pub(crate) fn new(pairs: &'a [Pair]) -> Self {
        Self { inner: pairs.iter() }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a Blob, &'a Blob);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|pair| (&pair.key, &pair.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for Iter<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|pair| (&pair.key, &pair.value))
    }
}

impl ExactSizeIterator for Iter<'_> {}
impl FusedIterator for Iter<'_> {}

/// Borrowing iterator over keys
#[derive(Clone)]
pub struct Keys<'a> {
    inner: Iter<'a>,
}

impl<'a> Keys<'a> {
    pub(crate) fn new(inner: Iter<'a>) -> Self {
        Self { inner }
    }
}

impl<'a> Iterator for Keys<'a> {
    type Item = &'a Blob;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(key, _)| key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Keys<'_> {}
impl FusedIterator for Keys<'_> {}

/// Borrowing iterator over values
#[derive(Clone)]
pub struct Values<'a> {
    inner: Iter<'a>,
}

impl<'a> Values<'a> {
    pub(crate) fn new(inner: Iter<'a>) -> Self {
        Self { inner }
    }
}

impl<'a> Iterator for Values<'a> {
    type Item = &'a Blob;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(_, value)| value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Values<'_> {}
impl FusedIterator for Values<'_> {}

/// Owning iterator; yields each pair exactly once and releases the rest
/// on drop
pub struct IntoIter {
    inner: std::vec::IntoIter<Pair>,
}

impl IntoIter {
    pub(crate) fn new(pairs: Vec<Pair>) -> Self {
        Self {
            inner: pairs.into_iter(),
        }
    }
}

impl Iterator for IntoIter {
    type Item = (Blob, Blob);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|pair| (pair.key, pair.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for IntoIter {}
impl FusedIterator for IntoIter {}
