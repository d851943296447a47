//! Fixed-size chunking of sample sequences
//!
//! Splits an ordered slice of samples into contiguous groups of a configured
//! size. The last group holds the remainder when the length is not a multiple
//! of the chunk size; an empty input produces no chunks.

use crate::error::{Error, Result};

/// Lazy iterator over fixed-size chunks of a sample slice.
///
/// Created by [`chunks`]. Each item borrows from the underlying slice, so a
/// fresh call over the same data reproduces identical output.
#[derive(Debug, Clone)]
pub struct Chunks<'a> {
    remaining: &'a [f64],
    size: usize,
}

impl<'a> Iterator for Chunks<'a> {
    type Item = &'a [f64];

    fn next(&mut self) -> Option<&'a [f64]> {
        if self.remaining.is_empty() {
            return None;
        }
        let split = self.size.min(self.remaining.len());
        let (chunk, rest) = self.remaining.split_at(split);
        self.remaining = rest;
        Some(chunk)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining.len().div_ceil(self.size);
        (n, Some(n))
    }
}

impl ExactSizeIterator for Chunks<'_> {}

/// Split `samples` into chunks of exactly `size` elements, last possibly
/// shorter.
///
/// Fails with [`Error::InvalidParameter`] before any element is consumed when
/// `size` is zero.
pub fn chunks(samples: &[f64], size: usize) -> Result<Chunks<'_>> {
    if size == 0 {
        return Err(Error::non_positive_size("chunk size", size));
    }
    Ok(Chunks {
        remaining: samples,
        size,
    })
}
