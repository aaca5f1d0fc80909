// Copyright (c) 2023 Intel Corporation
//
// SPDX-License-Identifier: Apache-2.0 or MIT

extern crate alloc;
use alloc::boxed::Box;
use zeroize::{Zeroize, ZeroizeOnDrop};

pub const MD5_DIGEST_SIZE: usize = 16;
pub const SHA1_DIGEST_SIZE: usize = 20;
pub const SHA256_DIGEST_SIZE: usize = 32;
pub const SHA384_DIGEST_SIZE: usize = 48;
pub const SHA512_DIGEST_SIZE: usize = 64;

pub const MD5_BLOCK_SIZE: usize = 64;
pub const SHA1_BLOCK_SIZE: usize = 64;
pub const SHA256_BLOCK_SIZE: usize = 64;
pub const SHA384_BLOCK_SIZE: usize = 128;
pub const SHA512_BLOCK_SIZE: usize = 128;

pub const MAX_HASH_SIZE: usize = 64;
pub const MAX_HASH_BLOCK_SIZE: usize = 128;

bitflags! {
    #[derive(Default)]
    pub struct HmacBaseHashAlgo: u32 {
        const MD5 = 0b0000_0001;
        const SHA_1 = 0b0000_0010;
        const SHA_256 = 0b0000_0100;
        const SHA_384 = 0b0000_1000;
        const SHA_512 = 0b0001_0000;
        const VALID_MASK = Self::MD5.bits
            | Self::SHA_1.bits
            | Self::SHA_256.bits
            | Self::SHA_384.bits
            | Self::SHA_512.bits;
    }
}

impl HmacBaseHashAlgo {
    pub fn get_size(&self) -> u16 {
        match *self {
            HmacBaseHashAlgo::MD5 => MD5_DIGEST_SIZE as u16,
            HmacBaseHashAlgo::SHA_1 => SHA1_DIGEST_SIZE as u16,
            HmacBaseHashAlgo::SHA_256 => SHA256_DIGEST_SIZE as u16,
            HmacBaseHashAlgo::SHA_384 => SHA384_DIGEST_SIZE as u16,
            HmacBaseHashAlgo::SHA_512 => SHA512_DIGEST_SIZE as u16,
            _ => {
                panic!("invalid HashAlgo");
            }
        }
    }

    pub fn get_block_size(&self) -> u16 {
        match *self {
            HmacBaseHashAlgo::MD5 => MD5_BLOCK_SIZE as u16,
            HmacBaseHashAlgo::SHA_1 => SHA1_BLOCK_SIZE as u16,
            HmacBaseHashAlgo::SHA_256 => SHA256_BLOCK_SIZE as u16,
            HmacBaseHashAlgo::SHA_384 => SHA384_BLOCK_SIZE as u16,
            HmacBaseHashAlgo::SHA_512 => SHA512_BLOCK_SIZE as u16,
            _ => {
                panic!("invalid HashAlgo");
            }
        }
    }

    /// return true if no more than one is selected
    /// return false if two or more is selected
    pub fn is_no_more_than_one_selected(&self) -> bool {
        self.bits() == 0 || self.bits() & (self.bits() - 1) == 0
    }

    pub fn is_valid(&self) -> bool {
        (self.bits & Self::VALID_MASK.bits) != 0
    }

    pub fn is_valid_one_select(&self) -> bool {
        self.is_no_more_than_one_selected() && self.is_valid()
    }
}

macro_rules! create_sensitive_datatype {
    (Name: $name:ident, Size: $size:expr) => {
        #[derive(Debug, Clone, Zeroize, ZeroizeOnDrop)]
        pub struct $name {
            pub data_size: u16,
            pub data: Box<[u8; $size]>,
        }

        impl Default for $name {
            fn default() -> $name {
                $name {
                    data_size: 0,
                    data: Box::new([0u8; $size]),
                }
            }
        }

        impl AsRef<[u8]> for $name {
            fn as_ref(&self) -> &[u8] {
                &self.data[0..(self.data_size as usize)]
            }
        }

        impl From<&[u8]> for $name {
            fn from(value: &[u8]) -> Self {
                assert!(value.len() <= $size);
                let data_size = value.len() as u16;
                let mut data = Box::new([0u8; $size]);
                data[0..value.len()].copy_from_slice(value.as_ref());
                Self { data_size, data }
            }
        }
    };
}

create_sensitive_datatype!(Name: HmacDigestStruct, Size: MAX_HASH_SIZE);
create_sensitive_datatype!(Name: HmacKeyBlockStruct, Size: MAX_HASH_BLOCK_SIZE);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case0_digest_and_block_sizes() {
        assert_eq!(HmacBaseHashAlgo::MD5.get_size(), 16);
        assert_eq!(HmacBaseHashAlgo::SHA_1.get_size(), 20);
        assert_eq!(HmacBaseHashAlgo::SHA_256.get_size(), 32);
        assert_eq!(HmacBaseHashAlgo::SHA_384.get_size(), 48);
        assert_eq!(HmacBaseHashAlgo::SHA_512.get_size(), 64);

        assert_eq!(HmacBaseHashAlgo::MD5.get_block_size(), 64);
        assert_eq!(HmacBaseHashAlgo::SHA_1.get_block_size(), 64);
        assert_eq!(HmacBaseHashAlgo::SHA_256.get_block_size(), 64);
        assert_eq!(HmacBaseHashAlgo::SHA_384.get_block_size(), 128);
        assert_eq!(HmacBaseHashAlgo::SHA_512.get_block_size(), 128);
    }

    #[test]
    fn test_case1_is_valid_one_select() {
        assert!(HmacBaseHashAlgo::SHA_256.is_valid_one_select());
        assert!(HmacBaseHashAlgo::MD5.is_valid_one_select());
        assert!(!HmacBaseHashAlgo::empty().is_valid_one_select());
        assert!(!(HmacBaseHashAlgo::SHA_256 | HmacBaseHashAlgo::SHA_384).is_valid_one_select());
    }

    #[test]
    fn test_case2_digest_struct_from_slice() {
        let bytes = [0xabu8; 48];
        let digest = HmacDigestStruct::from(&bytes[..]);
        assert_eq!(digest.data_size, 48);
        assert_eq!(digest.as_ref(), &bytes[..]);

        let empty = HmacDigestStruct::default();
        assert_eq!(empty.data_size, 0);
        assert_eq!(empty.as_ref(), &[] as &[u8]);
    }

    #[test]
    #[should_panic]
    fn test_case3_get_size_invalid() {
        let _ = HmacBaseHashAlgo::empty().get_size();
    }
}
