// Copyright (c) 2023 Intel Corporation
//
// SPDX-License-Identifier: Apache-2.0 or MIT

pub mod bytes_mut_scrubbed;
mod crypto_callbacks;
pub use crypto_callbacks::{HmacHash, HmacHashCtx};

#[cfg(not(feature = "hmac-rustcrypto"))]
mod crypto_null;

#[cfg(feature = "hmac-rustcrypto")]
mod hmac_rustcrypto;

use conquer_once::spin::OnceCell;

static CRYPTO_HASH: OnceCell<HmacHash> = OnceCell::uninit();

pub mod hash {
    use super::CRYPTO_HASH;
    use crate::crypto::{HmacHash, HmacHashCtx};
    use crate::protocol::{HmacBaseHashAlgo, HmacDigestStruct};
    extern crate alloc;
    use alloc::boxed::Box;

    #[cfg(not(feature = "hmac-rustcrypto"))]
    use super::crypto_null::hash_impl::DEFAULT;

    #[cfg(feature = "hmac-rustcrypto")]
    use super::hmac_rustcrypto::hash_impl::DEFAULT;

    pub fn register(context: HmacHash) -> bool {
        CRYPTO_HASH.try_init_once(|| context).is_ok()
    }

    pub fn hash_all(base_hash_algo: HmacBaseHashAlgo, data: &[u8]) -> Option<HmacDigestStruct> {
        (CRYPTO_HASH
            .try_get_or_init(|| DEFAULT.clone())
            .ok()?
            .hash_all_cb)(base_hash_algo, data)
    }

    pub fn hash_ctx_init(
        base_hash_algo: HmacBaseHashAlgo,
    ) -> Option<Box<dyn HmacHashCtx + Send>> {
        (CRYPTO_HASH
            .try_get_or_init(|| DEFAULT.clone())
            .ok()?
            .hash_ctx_init_cb)(base_hash_algo)
    }
}

#[cfg(test)]
mod crypto_tests;
