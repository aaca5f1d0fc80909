// Copyright (c) 2023 Intel Corporation
//
// SPDX-License-Identifier: Apache-2.0 or MIT

extern crate alloc;
use alloc::boxed::Box;

use md5::Md5;
use sha1::Sha1;
use sha2::{Digest, Sha256, Sha384, Sha512};

use crate::crypto::{HmacHash, HmacHashCtx};
use crate::protocol::{HmacBaseHashAlgo, HmacDigestStruct};

pub static DEFAULT: HmacHash = HmacHash {
    hash_all_cb: hash_all,
    hash_ctx_init_cb: hash_ctx_init,
};

fn hash_all(base_hash_algo: HmacBaseHashAlgo, data: &[u8]) -> Option<HmacDigestStruct> {
    let digest = match base_hash_algo {
        HmacBaseHashAlgo::MD5 => HmacDigestStruct::from(Md5::digest(data).as_slice()),
        HmacBaseHashAlgo::SHA_1 => HmacDigestStruct::from(Sha1::digest(data).as_slice()),
        HmacBaseHashAlgo::SHA_256 => HmacDigestStruct::from(Sha256::digest(data).as_slice()),
        HmacBaseHashAlgo::SHA_384 => HmacDigestStruct::from(Sha384::digest(data).as_slice()),
        HmacBaseHashAlgo::SHA_512 => HmacDigestStruct::from(Sha512::digest(data).as_slice()),
        _ => return None,
    };
    Some(digest)
}

fn hash_ctx_init(base_hash_algo: HmacBaseHashAlgo) -> Option<Box<dyn HmacHashCtx + Send>> {
    let ctx = match base_hash_algo {
        HmacBaseHashAlgo::MD5 => HashCtxConcrete::Md5(Md5::new()),
        HmacBaseHashAlgo::SHA_1 => HashCtxConcrete::Sha1(Sha1::new()),
        HmacBaseHashAlgo::SHA_256 => HashCtxConcrete::Sha256(Sha256::new()),
        HmacBaseHashAlgo::SHA_384 => HashCtxConcrete::Sha384(Sha384::new()),
        HmacBaseHashAlgo::SHA_512 => HashCtxConcrete::Sha512(Sha512::new()),
        _ => return None,
    };
    Some(Box::new(ctx))
}

enum HashCtxConcrete {
    Md5(Md5),
    Sha1(Sha1),
    Sha256(Sha256),
    Sha384(Sha384),
    Sha512(Sha512),
}

impl HmacHashCtx for HashCtxConcrete {
    fn update(&mut self, data: &[u8]) {
        match self {
            HashCtxConcrete::Md5(ctx) => ctx.update(data),
            HashCtxConcrete::Sha1(ctx) => ctx.update(data),
            HashCtxConcrete::Sha256(ctx) => ctx.update(data),
            HashCtxConcrete::Sha384(ctx) => ctx.update(data),
            HashCtxConcrete::Sha512(ctx) => ctx.update(data),
        }
    }

    fn finalize(self: Box<Self>) -> Option<HmacDigestStruct> {
        let digest = match *self {
            HashCtxConcrete::Md5(ctx) => HmacDigestStruct::from(ctx.finalize().as_slice()),
            HashCtxConcrete::Sha1(ctx) => HmacDigestStruct::from(ctx.finalize().as_slice()),
            HashCtxConcrete::Sha256(ctx) => HmacDigestStruct::from(ctx.finalize().as_slice()),
            HashCtxConcrete::Sha384(ctx) => HmacDigestStruct::from(ctx.finalize().as_slice()),
            HashCtxConcrete::Sha512(ctx) => HmacDigestStruct::from(ctx.finalize().as_slice()),
        };
        Some(digest)
    }
}
