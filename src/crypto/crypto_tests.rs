// Copyright (c) 2023 Intel Corporation
//
// SPDX-License-Identifier: Apache-2.0 or MIT

#[cfg(feature = "hmac-rustcrypto")]
use super::hash;
#[cfg(feature = "hmac-rustcrypto")]
use crate::protocol::HmacBaseHashAlgo;

#[cfg(feature = "hmac-rustcrypto")]
#[test]
fn test_case_hash() {
    // Len = 8
    // Msg = d3
    // MD = 28969cdfa74a12c82f3bad960b0b000aca2ac329deea5c2328ebc6f2ba9802c1
    let mut ctx = hash::hash_ctx_init(HmacBaseHashAlgo::SHA_256).unwrap();
    let data = &from_hex("d3").unwrap();
    let md = &from_hex("28969cdfa74a12c82f3bad960b0b000aca2ac329deea5c2328ebc6f2ba9802c1").unwrap();
    ctx.update(data);
    let res = ctx.finalize().unwrap();
    assert_eq!(res.as_ref(), md.as_slice());

    // Len = 512
    // Msg = 5a86b737eaea8ee976a0a24da63e7ed7eefad18a101c1211e2b3650c5187c2a8a650547208251f6d4237e661c7bf4c77f335390394c37fa1a9f9be836ac28509
    // MD = 42e61e174fbb3897d6dd6cef3dd2802fe67b331953b06114a65c772859dfc1aa
    let mut ctx2 = hash::hash_ctx_init(HmacBaseHashAlgo::SHA_256).unwrap();
    let data = &from_hex("5a86b737eaea8ee976a0a24da63e7ed7eefad18a101c1211e2b3650c5187c2a8a650547208251f6d4237e661c7bf4c77f335390394c37fa1a9f9be836ac28509").unwrap();
    let md = &from_hex("42e61e174fbb3897d6dd6cef3dd2802fe67b331953b06114a65c772859dfc1aa").unwrap();
    ctx2.update(&data.as_slice()[0..10]);
    ctx2.update(&data[10..]);
    let res = ctx2.finalize().unwrap();
    assert_eq!(res.as_ref(), md.as_slice());

    // one-shot over the same message
    let res = hash::hash_all(HmacBaseHashAlgo::SHA_256, data).unwrap();
    assert_eq!(res.as_ref(), md.as_slice());
}

#[cfg(feature = "hmac-rustcrypto")]
#[test]
fn test_case_register_once() {
    // at most one provider per process; the first call may race with lazy
    // default initialization in other tests
    let default = super::hmac_rustcrypto::hash_impl::DEFAULT.clone();
    let _ = hash::register(default.clone());
    assert!(!hash::register(default));
}

#[cfg(feature = "hmac-rustcrypto")]
fn from_hex(hex_str: &str) -> Result<Vec<u8>, String> {
    if hex_str.len() % 2 != 0 {
        return Err(String::from(
            "Hex string does not have an even number of digits",
        ));
    }

    let mut result = Vec::with_capacity(hex_str.len() / 2);
    for digits in hex_str.as_bytes().chunks(2) {
        let hi = from_hex_digit(digits[0])?;
        let lo = from_hex_digit(digits[1])?;
        result.push((hi * 0x10) | lo);
    }
    Ok(result)
}

#[cfg(feature = "hmac-rustcrypto")]
fn from_hex_digit(d: u8) -> Result<u8, String> {
    use core::ops::RangeInclusive;
    const DECIMAL: (u8, RangeInclusive<u8>) = (0, b'0'..=b'9');
    const HEX_LOWER: (u8, RangeInclusive<u8>) = (10, b'a'..=b'f');
    const HEX_UPPER: (u8, RangeInclusive<u8>) = (10, b'A'..=b'F');
    for (offset, range) in &[DECIMAL, HEX_LOWER, HEX_UPPER] {
        if range.contains(&d) {
            return Ok(d - range.start() + offset);
        }
    }
    Err(format!("Invalid hex digit '{}'", d as char))
}
