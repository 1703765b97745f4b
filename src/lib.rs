// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! SAML11 glue for the `nscgate` secure gateway.
//!
//! The gateway logic itself lives in `nscgate` and is chip-independent. This
//! crate supplies the rest of what the two images need:
//!
//! - `regs` and `hw`: the SAML11 registers, and `nscgate`'s backend traits
//!   implemented over them (secure image).
//! - `bsp`: per-board pin and line ownership choices (secure image).
//! - `nsc`: the veneer declarations and safe wrappers (non-secure image).
//! - `dgi`: timing markers on the DGI pins (non-secure image).

#![no_std]

pub mod bsp;
pub mod dgi;
pub mod hw;
pub mod nsc;
pub mod regs;

/// Board this build was configured for, as its cargo feature name.
pub const BOARD: &str = env!("GATEKEEPER_BOARD");
