// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `nscgate` register backends for the SAML11's GCLK and (secure alias) EIC.
//!
//! Both handles are zero-sized; what makes them unique is that `steal` is
//! unsafe and the secure image only calls it once, then moves the handles
//! into the `Gateway`, which never gives them back.

use nscgate::hw::{ClockGates, ExtIntController};
use nscgate::CONFIG_WORDS;

use crate::regs::{self, eic, gclk, EIC_SEC_BASE, GCLK_BASE};

/// Generic clock controller channel gates.
pub struct Gclk(());

impl Gclk {
    /// # Safety
    ///
    /// There must be at most one `Gclk` in existence, and nothing else may
    /// write `PCHCTRL` while it exists.
    pub unsafe fn steal() -> Self {
        Self(())
    }
}

impl ClockGates for Gclk {
    fn channel_count(&self) -> u32 {
        gclk::CHANNELS
    }

    fn generator_count(&self) -> u32 {
        gclk::GENERATORS
    }

    fn is_enabled(&self, channel: u32) -> bool {
        let v = unsafe { regs::read32(GCLK_BASE, gclk::PCHCTRL0 + 4 * channel as usize) };
        v & nscgate::gateway::CHANNEL_ENABLE != 0
    }

    fn write(&mut self, channel: u32, value: u32) {
        unsafe { regs::write32(GCLK_BASE, gclk::PCHCTRL0 + 4 * channel as usize, value) }
    }
}

/// External interrupt controller, through its secure alias.
pub struct Eic(());

impl Eic {
    /// # Safety
    ///
    /// There must be at most one `Eic` in existence, and nothing else may
    /// write the EIC's secure alias while it exists.
    pub unsafe fn steal() -> Self {
        Self(())
    }
}

impl ExtIntController for Eic {
    fn nonsec(&self) -> u32 {
        unsafe { regs::read32(EIC_SEC_BASE, eic::NONSEC) }
    }

    fn evctrl(&self) -> u32 {
        unsafe { regs::read32(EIC_SEC_BASE, eic::EVCTRL) }
    }

    fn asynch(&self) -> u32 {
        unsafe { regs::read32(EIC_SEC_BASE, eic::ASYNCH) }
    }

    fn debouncen(&self) -> u32 {
        unsafe { regs::read32(EIC_SEC_BASE, eic::DEBOUNCEN) }
    }

    fn config(&self, index: usize) -> u32 {
        debug_assert!(index < CONFIG_WORDS);
        unsafe { regs::read32(EIC_SEC_BASE, eic::CONFIG0 + 4 * index) }
    }

    fn write_evctrl(&mut self, value: u32) {
        unsafe { regs::write32(EIC_SEC_BASE, eic::EVCTRL, value) }
    }

    fn write_asynch(&mut self, value: u32) {
        unsafe { regs::write32(EIC_SEC_BASE, eic::ASYNCH, value) }
    }

    fn write_debouncen(&mut self, value: u32) {
        unsafe { regs::write32(EIC_SEC_BASE, eic::DEBOUNCEN, value) }
    }

    fn write_config(&mut self, index: usize, value: u32) {
        debug_assert!(index < CONFIG_WORDS);
        unsafe { regs::write32(EIC_SEC_BASE, eic::CONFIG0 + 4 * index, value) }
    }

    fn write_nonsec(&mut self, value: u32) {
        unsafe { regs::write32(EIC_SEC_BASE, eic::NONSEC, value) }
    }

    fn set_enabled(&mut self, enabled: bool) {
        // CTRLA is a byte register; leave the clock select alone.
        unsafe {
            let ctrla = regs::read8(EIC_SEC_BASE, eic::CTRLA);
            let ctrla = if enabled {
                ctrla | eic::CTRLA_ENABLE
            } else {
                ctrla & !eic::CTRLA_ENABLE
            };
            regs::write8(EIC_SEC_BASE, eic::CTRLA, ctrla);
        }
    }

    fn wait_enable_sync(&mut self) {
        while unsafe { regs::read32(EIC_SEC_BASE, eic::SYNCBUSY) } & eic::SYNCBUSY_ENABLE != 0 {
            // spin.
        }
    }
}
