// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Non-secure side of the gateway.
//!
//! The secure image exports its veneers by name; the non-secure image links
//! against the CMSE import library the secure build produces, which resolves
//! the `extern` declarations below to addresses in the non-secure-callable
//! region. Everything here runs in non-secure state.

use nscgate::{ExtIntSetting, Status};
use num_traits::FromPrimitive;

extern "C" {
    fn nsc_periph_clock_init(gclk_id: u32, gclk_src: u32) -> i32;
    fn nsc_ext_irq_init(irq_setting: ExtIntSetting) -> i32;
}

/// Clock generators a peripheral channel can be fed from.
#[repr(u32)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, defmt::Format)]
pub enum Generator {
    Gclk0 = 0,
    Gclk1 = 1,
    Gclk2 = 2,
    Gclk3 = 3,
    Gclk4 = 4,
}

/// Peripheral clock channels (indices into GCLK `PCHCTRL`) the non-secure
/// image asks for. Add channels to `regs::gclk` first, then here.
#[repr(u32)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, defmt::Format)]
pub enum Channel {
    Eic = crate::regs::gclk::EIC_CHANNEL,
}

/// Asks the secure side to start `channel`'s clock from `generator`.
///
/// `None` means the secure side returned a code this image doesn't know.
pub fn periph_clock_init(channel: Channel, generator: Generator) -> Option<Status> {
    // Safety: the veneer takes two plain words and touches no non-secure
    // memory.
    let code = unsafe { nsc_periph_clock_init(channel as u32, generator as u32) };
    Status::from_i32(code)
}

/// Asks the secure side to apply `setting` to the external interrupt lines
/// this image owns. Fields for other lines are ignored by the secure side.
pub fn ext_irq_init(setting: &ExtIntSetting) -> Option<Status> {
    // Safety: the record is passed by value, in registers.
    let code = unsafe { nsc_ext_irq_init(*setting) };
    Status::from_i32(code)
}

