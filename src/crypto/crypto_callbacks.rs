// Copyright (c) 2023 Intel Corporation
//
// SPDX-License-Identifier: Apache-2.0 or MIT

extern crate alloc;
use alloc::boxed::Box;

use crate::protocol::{HmacBaseHashAlgo, HmacDigestStruct};

#[derive(Clone)]
pub struct HmacHash {
    pub hash_all_cb: fn(base_hash_algo: HmacBaseHashAlgo, data: &[u8]) -> Option<HmacDigestStruct>,

    pub hash_ctx_init_cb:
        fn(base_hash_algo: HmacBaseHashAlgo) -> Option<Box<dyn HmacHashCtx + Send>>,
}

/// Incremental absorption state for one in-flight hash computation.
/// Each context is exclusively owned by its holder; finalization consumes it.
pub trait HmacHashCtx {
    fn update(&mut self, data: &[u8]);

    fn finalize(self: Box<Self>) -> Option<HmacDigestStruct>;
}
