// Copyright (c) 2023 Intel Corporation
//
// SPDX-License-Identifier: Apache-2.0 or MIT

#![forbid(unsafe_code)]
#![cfg_attr(not(feature = "std"), no_std)]

#[macro_use]
extern crate log;

#[macro_use]
extern crate bitflags;

pub mod protocol;
#[macro_use]
pub mod error;
pub mod crypto;
pub mod hmac;
