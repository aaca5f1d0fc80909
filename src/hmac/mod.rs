// Copyright (c) 2023 Intel Corporation
//
// SPDX-License-Identifier: Apache-2.0 or MIT

extern crate alloc;
use alloc::boxed::Box;

use subtle::ConstantTimeEq;

use crate::crypto::bytes_mut_scrubbed::ScrubbedBytes;
use crate::crypto::{hash, HmacHashCtx};
use crate::error::{
    HmacResult, HMAC_STATUS_CRYPTO_ERROR, HMAC_STATUS_INVALID_STATE_LOCAL,
    HMAC_STATUS_UNSUPPORTED_ALGO, HMAC_STATUS_VERIF_FAIL,
};
use crate::protocol::{HmacBaseHashAlgo, HmacDigestStruct, HmacKeyBlockStruct};

const HMAC_IPAD: u8 = 0x36;
const HMAC_OPAD: u8 = 0x5c;

/// Compute HMAC(key, data) in one shot per RFC 2104.
///
/// Keys longer than the hash block size are pre-hashed; shorter keys are
/// zero-padded. The key bytes are copied into scrubbed storage and never
/// retained past the call.
pub fn hmac_digest(
    base_hash_algo: HmacBaseHashAlgo,
    key: &[u8],
    data: &[u8],
) -> HmacResult<HmacDigestStruct> {
    if !base_hash_algo.is_valid_one_select() {
        return Err(HMAC_STATUS_UNSUPPORTED_ALGO);
    }
    let (ipad, opad) = derive_pads(base_hash_algo, key)?;

    let mut inner_input = ScrubbedBytes::with_capacity(ipad.as_ref().len() + data.len());
    inner_input.extend_from_slice(ipad.as_ref());
    inner_input.extend_from_slice(data);
    let inner_digest =
        hash::hash_all(base_hash_algo, &inner_input).ok_or(HMAC_STATUS_UNSUPPORTED_ALGO)?;

    let mut outer_input =
        ScrubbedBytes::with_capacity(opad.as_ref().len() + inner_digest.as_ref().len());
    outer_input.extend_from_slice(opad.as_ref());
    outer_input.extend_from_slice(inner_digest.as_ref());
    hash::hash_all(base_hash_algo, &outer_input).ok_or(HMAC_STATUS_CRYPTO_ERROR)
}

/// Recompute HMAC(key, data) and compare against `hmac` in constant time.
pub fn hmac_verify(
    base_hash_algo: HmacBaseHashAlgo,
    key: &[u8],
    data: &[u8],
    hmac: &HmacDigestStruct,
) -> HmacResult {
    let digest = hmac_digest(base_hash_algo, key, data)?;
    let eq: bool = digest.as_ref().ct_eq(hmac.as_ref()).into();
    if eq {
        Ok(())
    } else {
        error!("hmac verification mismatch");
        Err(HMAC_STATUS_VERIF_FAIL)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum HmacContextState {
    Uninitialized,
    Active,
    Finished,
}

/// Streaming HMAC computation. Single-use per message: start, any number of
/// updates, one finish. An out-of-order call fails and leaves the context
/// exactly where it was.
pub struct HmacContext {
    state: HmacContextState,
    base_hash_algo: HmacBaseHashAlgo,
    inner_ctx: Option<Box<dyn HmacHashCtx + Send>>,
    opad: HmacKeyBlockStruct,
}

impl Default for HmacContext {
    fn default() -> Self {
        Self::new()
    }
}

impl HmacContext {
    pub fn new() -> Self {
        HmacContext {
            state: HmacContextState::Uninitialized,
            base_hash_algo: HmacBaseHashAlgo::empty(),
            inner_ctx: None,
            opad: HmacKeyBlockStruct::default(),
        }
    }

    pub fn start(&mut self, base_hash_algo: HmacBaseHashAlgo, key: &[u8]) -> HmacResult {
        if self.state != HmacContextState::Uninitialized {
            return Err(HMAC_STATUS_INVALID_STATE_LOCAL);
        }
        if !base_hash_algo.is_valid_one_select() {
            return Err(HMAC_STATUS_UNSUPPORTED_ALGO);
        }
        let (ipad, opad) = derive_pads(base_hash_algo, key)?;
        let mut inner_ctx =
            hash::hash_ctx_init(base_hash_algo).ok_or(HMAC_STATUS_UNSUPPORTED_ALGO)?;
        inner_ctx.update(ipad.as_ref());

        self.base_hash_algo = base_hash_algo;
        self.inner_ctx = Some(inner_ctx);
        self.opad = opad;
        self.state = HmacContextState::Active;
        Ok(())
    }

    pub fn update(&mut self, data: &[u8]) -> HmacResult {
        if self.state != HmacContextState::Active {
            return Err(HMAC_STATUS_INVALID_STATE_LOCAL);
        }
        let inner_ctx = self.inner_ctx.as_mut().ok_or(HMAC_STATUS_CRYPTO_ERROR)?;
        inner_ctx.update(data);
        Ok(())
    }

    pub fn finish(&mut self) -> HmacResult<HmacDigestStruct> {
        if self.state != HmacContextState::Active {
            return Err(HMAC_STATUS_INVALID_STATE_LOCAL);
        }
        let inner_ctx = self.inner_ctx.take().ok_or(HMAC_STATUS_CRYPTO_ERROR)?;
        self.state = HmacContextState::Finished;

        let inner_digest = inner_ctx.finalize().ok_or(HMAC_STATUS_CRYPTO_ERROR)?;
        let mut outer_ctx =
            hash::hash_ctx_init(self.base_hash_algo).ok_or(HMAC_STATUS_CRYPTO_ERROR)?;
        outer_ctx.update(self.opad.as_ref());
        outer_ctx.update(inner_digest.as_ref());
        let digest = outer_ctx.finalize().ok_or(HMAC_STATUS_CRYPTO_ERROR)?;

        // old pad storage is zeroized on drop
        self.opad = HmacKeyBlockStruct::default();
        Ok(digest)
    }
}

fn derive_pads(
    base_hash_algo: HmacBaseHashAlgo,
    key: &[u8],
) -> HmacResult<(HmacKeyBlockStruct, HmacKeyBlockStruct)> {
    let block_size = base_hash_algo.get_block_size() as usize;

    let mut key_block = HmacKeyBlockStruct::default();
    key_block.data_size = block_size as u16;
    if key.len() > block_size {
        let key_digest =
            hash::hash_all(base_hash_algo, key).ok_or(HMAC_STATUS_UNSUPPORTED_ALGO)?;
        key_block.data[0..key_digest.as_ref().len()].copy_from_slice(key_digest.as_ref());
    } else {
        key_block.data[0..key.len()].copy_from_slice(key);
    }

    let mut ipad = HmacKeyBlockStruct::default();
    let mut opad = HmacKeyBlockStruct::default();
    ipad.data_size = block_size as u16;
    opad.data_size = block_size as u16;
    for i in 0..block_size {
        ipad.data[i] = key_block.data[i] ^ HMAC_IPAD;
        opad.data[i] = key_block.data[i] ^ HMAC_OPAD;
    }
    Ok((ipad, opad))
}
