// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `nscgate`: the secure half of a non-secure-callable gateway.
//!
//! Non-secure code on a TrustZone part can't touch secure-only peripheral
//! registers, but it still needs to, say, turn on the clock to its own
//! peripherals, or set up the external interrupt lines the secure side has
//! handed it. The secure side exposes a small, fixed set of entry points for
//! this, and each of them has to guarantee one thing above all: whatever the
//! caller passes in, state belonging to lines the caller does not own comes
//! out unchanged.
//!
//! This crate holds the parts of that which don't depend on any particular
//! chip:
//!
//! - [`merge`]: the mask merge arithmetic, as pure functions.
//! - [`ExtIntSetting`]: the request record that crosses the boundary.
//! - [`hw`]: the traits a chip's register backend implements.
//! - [`Gateway`]: the entry point logic itself, which owns the backends so
//!   that its methods are the only way to get at them.
//!
//! Nothing here knows about the CMSE calling convention; the firmware wraps
//! `Gateway` methods in `extern "cmse-nonsecure-entry"` functions and hands
//! back [`Status`] as an `i32`.

#![no_std]

#[cfg(test)]
extern crate std;

pub mod gateway;
pub mod hw;
pub mod merge;
pub mod setting;

#[cfg(test)]
mod mock;

pub use gateway::Gateway;
pub use setting::{ExtIntSetting, CONFIG_WORDS, LINES_PER_CONFIG_WORD};

use num_derive::FromPrimitive;

/// Result of a gateway call, as seen by the non-secure caller.
///
/// This crosses the security boundary as a plain `i32`. Callers should decode
/// it with `num_traits::FromPrimitive::from_i32` and treat anything that
/// doesn't decode as reserved.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(i32)]
#[derive(Copy, Clone, Debug, FromPrimitive, PartialEq, Eq)]
pub enum Status {
    /// The request was applied to the hardware.
    Applied = 0,
    /// The clock channel was already running. Nothing was written.
    AlreadyEnabled = 1,
    /// The request named a channel or value the hardware doesn't have.
    /// Nothing was written.
    InvalidArgument = -1,
}

impl From<Status> for i32 {
    fn from(status: Status) -> Self {
        status as i32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_traits::FromPrimitive;

    #[test]
    fn status_codes_are_stable() {
        assert_eq!(i32::from(Status::Applied), 0);
        assert_eq!(i32::from(Status::AlreadyEnabled), 1);
        assert_eq!(i32::from(Status::InvalidArgument), -1);
    }

    #[test]
    fn reserved_codes_do_not_decode() {
        assert_eq!(Status::from_i32(0), Some(Status::Applied));
        assert_eq!(Status::from_i32(1), Some(Status::AlreadyEnabled));
        assert_eq!(Status::from_i32(-1), Some(Status::InvalidArgument));
        for reserved in [2, 3, -2, i32::MAX, i32::MIN] {
            assert_eq!(Status::from_i32(reserved), None);
        }
    }
}
