// Copyright (c) 2025 ledger-message-crypto contributors
// SPDX-License-Identifier: Apache-2.0
//! Byte cursor for wire decoding.
//!
//! A small forward-only reader over a borrowed buffer. Every read names the
//! field being decoded, so a short buffer surfaces as a
//! `MalformedWireFormat` carrying the field name and the expected versus
//! actual lengths.

use super::error::DecryptError;

pub(crate) struct ByteCursor<'a> {
    buf: &'a [u8],
    offset: usize,
}

impl<'a> ByteCursor<'a> {
    pub(crate) fn new(buf: &'a [u8]) -> Self {
        Self { buf, offset: 0 }
    }

    /// Read the next `n` bytes, advancing the cursor.
    pub(crate) fn take(&mut self, n: usize, field: &'static str) -> Result<&'a [u8], DecryptError> {
        let remaining = self.buf.len() - self.offset;
        if remaining < n {
            return Err(DecryptError::MalformedWireFormat {
                field,
                expected: n,
                actual: remaining,
            });
        }
        let slice = &self.buf[self.offset..self.offset + n];
        self.offset += n;
        Ok(slice)
    }

    /// Read the next `N` bytes into a fixed array.
    pub(crate) fn take_array<const N: usize>(
        &mut self,
        field: &'static str,
    ) -> Result<[u8; N], DecryptError> {
        let slice = self.take(N, field)?;
        let mut out = [0u8; N];
        out.copy_from_slice(slice);
        Ok(out)
    }

    /// Consume everything left; fails if the buffer is exhausted.
    pub(crate) fn rest(self, field: &'static str) -> Result<&'a [u8], DecryptError> {
        let remaining = &self.buf[self.offset..];
        if remaining.is_empty() {
            return Err(DecryptError::MalformedWireFormat {
                field,
                expected: 1,
                actual: 0,
            });
        }
        Ok(remaining)
    }
}
