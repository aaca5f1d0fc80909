// Copyright (c) 2023 Intel Corporation
//
// SPDX-License-Identifier: Apache-2.0 or MIT

use core::convert::TryFrom;
use core::fmt;

#[repr(u8)]
#[allow(dead_code)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum StatusSeverity {
    SUCCESS = 0,
    ERROR = 8,
}

impl Default for StatusSeverity {
    fn default() -> Self {
        Self::ERROR
    }
}

impl TryFrom<u8> for StatusSeverity {
    type Error = ();

    fn try_from(value: u8) -> core::result::Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::SUCCESS),
            8 => Ok(Self::ERROR),
            _ => Err(()),
        }
    }
}

#[repr(u16)]
#[allow(dead_code)]
#[allow(non_camel_case_types)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum StatusCodeCore {
    SUCCESS = 0,
    INVALID_PARAMETER = 1,
    UNSUPPORTED_ALGO = 2,
    INVALID_STATE_LOCAL = 3,
}

impl TryFrom<u16> for StatusCodeCore {
    type Error = ();

    fn try_from(value: u16) -> core::result::Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::SUCCESS),
            1 => Ok(Self::INVALID_PARAMETER),
            2 => Ok(Self::UNSUPPORTED_ALGO),
            3 => Ok(Self::INVALID_STATE_LOCAL),
            _ => Err(()),
        }
    }
}

impl Default for StatusCodeCore {
    fn default() -> Self {
        Self::INVALID_PARAMETER
    }
}

#[repr(u16)]
#[allow(dead_code)]
#[allow(non_camel_case_types)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum StatusCodeCrypto {
    CRYPTO_ERROR = 0,
    VERIF_FAIL = 1,
}

impl TryFrom<u16> for StatusCodeCrypto {
    type Error = ();

    fn try_from(value: u16) -> core::result::Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::CRYPTO_ERROR),
            1 => Ok(Self::VERIF_FAIL),
            _ => Err(()),
        }
    }
}

impl Default for StatusCodeCrypto {
    fn default() -> Self {
        Self::CRYPTO_ERROR
    }
}

#[allow(dead_code)]
#[allow(non_camel_case_types)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum StatusCode {
    SUCCESS,
    CORE(StatusCodeCore),
    CRYPTO(StatusCodeCrypto),
}

impl Default for StatusCode {
    fn default() -> Self {
        Self::CORE(StatusCodeCore::default())
    }
}

impl StatusCode {
    fn get_source_and_code(&self) -> (u8, u16) {
        match self {
            StatusCode::SUCCESS => (0, 0),
            StatusCode::CORE(c) => (1, *c as u16),
            StatusCode::CRYPTO(c) => (2, *c as u16),
        }
    }

    fn from_source_and_code(source: u8, code: u16) -> Option<Self> {
        match source {
            0 if code == 0 => Some(StatusCode::SUCCESS),
            1 => Some(StatusCode::CORE(StatusCodeCore::try_from(code).ok()?)),
            2 => Some(StatusCode::CRYPTO(StatusCodeCrypto::try_from(code).ok()?)),
            _ => None,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct HmacStatus {
    pub severity: StatusSeverity,
    pub status_code: StatusCode,
}

impl HmacStatus {
    /// return the u32 encoding
    pub fn get_u32(&self) -> u32 {
        let (source, code) = self.status_code.get_source_and_code();
        ((((self.severity as u8) & 0x0F) as u32) << 28) + ((source as u32) << 16) + code as u32
    }

    /// get HmacStatus structure from u32 value
    pub fn from_u32(status: u32) -> Option<Self> {
        let severity = ((status & 0xF0_00_00_00) >> 28) as u8;
        let severity = StatusSeverity::try_from(severity).ok()?;
        if (status & 0x0F_00_00_00) != 0 {
            return None; //the reserve field
        }
        let source = ((status & 0x00_FF_00_00) >> 16) as u8;
        let code = (status & 0x00_00_FF_FF) as u16;
        let status_code = StatusCode::from_source_and_code(source, code)?;

        Some(Self {
            severity,
            status_code,
        })
    }

    /// Returns true if severity is StatusSeverity::SUCCESS else it returns false.
    pub fn status_is_success(&self) -> bool {
        self.severity == StatusSeverity::SUCCESS
    }

    /// Returns true if severity is StatusSeverity::ERROR else it returns false.
    pub fn status_is_error(&self) -> bool {
        self.severity == StatusSeverity::ERROR
    }
}

impl fmt::Display for HmacStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Severity: {:?}, Status: {:?}, Code: {})",
            self.severity,
            self.status_code,
            self.get_u32()
        )
    }
}

pub type HmacResult<T = ()> = core::result::Result<T, HmacStatus>;

#[macro_export]
macro_rules! hmac_return_status {
    ($severity:expr,  $status_code:expr) => {
        HmacStatus {
            severity: $severity,
            status_code: $status_code,
        }
    };
}

pub use hmac_return_status;

pub const HMAC_STATUS_SUCCESS: HmacStatus =
    hmac_return_status!(StatusSeverity::SUCCESS, StatusCode::SUCCESS);

/* - Core Errors - */

/* The requested hash algorithm is not one of the supported variants. */
pub const HMAC_STATUS_UNSUPPORTED_ALGO: HmacStatus = hmac_return_status!(
    StatusSeverity::ERROR,
    StatusCode::CORE(StatusCodeCore::UNSUPPORTED_ALGO)
);

/* A streaming operation was invoked out of lifecycle order. */
pub const HMAC_STATUS_INVALID_STATE_LOCAL: HmacStatus = hmac_return_status!(
    StatusSeverity::ERROR,
    StatusCode::CORE(StatusCodeCore::INVALID_STATE_LOCAL)
);

/* - Crypto Errors - */

/* The registered hash provider failed to produce a digest. */
pub const HMAC_STATUS_CRYPTO_ERROR: HmacStatus = hmac_return_status!(
    StatusSeverity::ERROR,
    StatusCode::CRYPTO(StatusCodeCrypto::CRYPTO_ERROR)
);

/* The provided digest does not match the computed digest. */
pub const HMAC_STATUS_VERIF_FAIL: HmacStatus = hmac_return_status!(
    StatusSeverity::ERROR,
    StatusCode::CRYPTO(StatusCodeCrypto::VERIF_FAIL)
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case0_u32_round_trip() {
        for status in [
            HMAC_STATUS_SUCCESS,
            HMAC_STATUS_UNSUPPORTED_ALGO,
            HMAC_STATUS_INVALID_STATE_LOCAL,
            HMAC_STATUS_CRYPTO_ERROR,
            HMAC_STATUS_VERIF_FAIL,
        ]
        .iter()
        {
            let encoded = status.get_u32();
            assert_eq!(HmacStatus::from_u32(encoded), Some(*status));
        }
    }

    #[test]
    fn test_case1_reserved_field_rejected() {
        let encoded = HMAC_STATUS_CRYPTO_ERROR.get_u32() | 0x01_00_00_00;
        assert_eq!(HmacStatus::from_u32(encoded), None);
    }

    #[test]
    fn test_case2_severity() {
        assert!(HMAC_STATUS_SUCCESS.status_is_success());
        assert!(HMAC_STATUS_INVALID_STATE_LOCAL.status_is_error());
        assert!(!HMAC_STATUS_VERIF_FAIL.status_is_success());
    }
}
