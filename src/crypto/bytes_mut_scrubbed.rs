// Copyright (c) 2023 Intel Corporation
//
// SPDX-License-Identifier: Apache-2.0 or MIT

use bytes::BytesMut;
use core::ops::Deref;
use zeroize::Zeroize;

/// Working buffer for key-derived material. The backing storage is zeroized
/// when the buffer is dropped.
#[derive(Default)]
pub struct ScrubbedBytes {
    bytes_mut: BytesMut,
}

impl ScrubbedBytes {
    #[inline]
    pub fn new() -> ScrubbedBytes {
        ScrubbedBytes {
            bytes_mut: BytesMut::new(),
        }
    }

    #[inline]
    pub fn with_capacity(capacity: usize) -> ScrubbedBytes {
        ScrubbedBytes {
            bytes_mut: BytesMut::with_capacity(capacity),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.bytes_mut.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bytes_mut.is_empty()
    }

    pub fn extend_from_slice(&mut self, extend: &[u8]) {
        self.bytes_mut.extend_from_slice(extend)
    }
}

impl Drop for ScrubbedBytes {
    fn drop(&mut self) {
        self.bytes_mut[..].zeroize()
    }
}

impl AsRef<[u8]> for ScrubbedBytes {
    #[inline]
    fn as_ref(&self) -> &[u8] {
        self.bytes_mut.as_ref()
    }
}

impl Deref for ScrubbedBytes {
    type Target = [u8];

    #[inline]
    fn deref(&self) -> &[u8] {
        self.bytes_mut.deref()
    }
}

impl<'a> From<&'a [u8]> for ScrubbedBytes {
    fn from(src: &'a [u8]) -> ScrubbedBytes {
        ScrubbedBytes {
            bytes_mut: BytesMut::from(src),
        }
    }
}
