// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The gateway proper.
//!
//! A `Gateway` owns the register backends outright. The methods below are the
//! whole list of things a non-secure caller can get done to them, and each one
//! respects the ownership mask regardless of what it's handed.
//!
//! `Gateway` does no locking of its own. Every method takes `&mut self`, so
//! whoever holds it has to arrange exclusive access -- on the firmware side,
//! that's a critical section around each entry point, so that two interleaved
//! calls can't both read the registers before either writes them back.

use crate::hw::{ClockGates, ExtIntController};
use crate::merge::{merge, merge_config};
use crate::setting::{ExtIntSetting, CONFIG_WORDS};
use crate::Status;

/// Channel enable bit in a clock channel control register.
pub const CHANNEL_ENABLE: u32 = 1 << 6;

/// Hands the external interrupt lines in `mask` to non-secure code, and takes
/// every other line back.
///
/// This is boot-time configuration, done before a [`Gateway`] exists, and
/// nothing a non-secure caller can reach. `NONSEC` is enable-protected like the
/// line configuration, so it gets the same disable, sync, write, enable
/// treatment as [`Gateway::ext_int_init`].
pub fn delegate_lines<E: ExtIntController>(eic: &mut E, mask: u32) {
    eic.set_enabled(false);
    eic.wait_enable_sync();
    eic.write_nonsec(mask);
    eic.set_enabled(true);

    #[cfg(feature = "defmt")]
    defmt::debug!("ext int ownership mask set to {=u32:#x}", mask);
}

pub struct Gateway<G, E> {
    clocks: G,
    eic: E,
}

impl<G: ClockGates, E: ExtIntController> Gateway<G, E> {
    pub fn new(clocks: G, eic: E) -> Self {
        Self { clocks, eic }
    }

    /// The external interrupt lines currently delegated to non-secure code.
    pub fn ownership_mask(&self) -> u32 {
        self.eic.nonsec()
    }

    /// Starts the clock on peripheral channel `channel`, fed from generator
    /// `source`.
    ///
    /// A channel that's already running is left exactly as it is, including
    /// its generator, and reported as [`Status::AlreadyEnabled`]. This is how
    /// a caller finds out someone got there first; it isn't a failure.
    ///
    /// An out-of-range channel or generator gets [`Status::InvalidArgument`]
    /// and no write. `source` lands in the low bits of the control register
    /// next to the enable and write lock bits, so anything past the last
    /// generator is refused rather than masked.
    pub fn periph_clock_init(&mut self, channel: u32, source: u32) -> Status {
        if channel >= self.clocks.channel_count() || source >= self.clocks.generator_count() {
            #[cfg(feature = "defmt")]
            defmt::warn!("clock init rejected: channel {=u32} source {=u32:#x}", channel, source);
            return Status::InvalidArgument;
        }

        if self.clocks.is_enabled(channel) {
            return Status::AlreadyEnabled;
        }

        self.clocks.write(channel, source | CHANNEL_ENABLE);

        #[cfg(feature = "defmt")]
        defmt::debug!("clock channel {=u32} enabled from generator {=u32}", channel, source);

        Status::Applied
    }

    /// Applies `setting` to the external interrupt lines the caller owns.
    ///
    /// Each register is recomputed as "current value outside the ownership
    /// mask, requested value inside it", so bits of lines the caller doesn't
    /// own are written back exactly as they were read. The controller is
    /// disabled around the writes and re-enabled afterwards.
    pub fn ext_int_init(&mut self, setting: &ExtIntSetting) -> Status {
        let mask = self.eic.nonsec();

        let evctrl = merge(self.eic.evctrl(), setting.evctrl, mask);
        let asynch = merge(self.eic.asynch(), setting.asynch, mask);
        let debouncen = merge(self.eic.debouncen(), setting.debouncen, mask);
        let mut config = [0; CONFIG_WORDS];
        for (i, word) in config.iter_mut().enumerate() {
            *word = merge_config(self.eic.config(i), setting.config[i], mask, i);
        }

        // The controller won't take line configuration changes while it's
        // running, and the disable isn't in effect until sync completes.
        self.eic.set_enabled(false);
        self.eic.wait_enable_sync();

        self.eic.write_evctrl(evctrl);
        self.eic.write_asynch(asynch);
        self.eic.write_debouncen(debouncen);
        for (i, &word) in config.iter().enumerate() {
            self.eic.write_config(i, word);
        }

        self.eic.set_enabled(true);

        #[cfg(feature = "defmt")]
        defmt::debug!("ext int lines {=u32:#x} reconfigured", mask);

        Status::Applied
    }
}
