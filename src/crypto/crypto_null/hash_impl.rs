// Copyright (c) 2023 Intel Corporation
//
// SPDX-License-Identifier: Apache-2.0 or MIT

extern crate alloc;
use alloc::boxed::Box;

use crate::crypto::{HmacHash, HmacHashCtx};
use crate::protocol::{HmacBaseHashAlgo, HmacDigestStruct};

pub static DEFAULT: HmacHash = HmacHash {
    hash_all_cb: hash_all,
    hash_ctx_init_cb: hash_ctx_init,
};

fn hash_all(_base_hash_algo: HmacBaseHashAlgo, _data: &[u8]) -> Option<HmacDigestStruct> {
    unimplemented!()
}

fn hash_ctx_init(_base_hash_algo: HmacBaseHashAlgo) -> Option<Box<dyn HmacHashCtx + Send>> {
    unimplemented!()
}
