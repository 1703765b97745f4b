// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Register backends the gateway drives.
//!
//! These are deliberately thin: one method per register access the gateway
//! performs, no policy. The firmware implements them over the secure aliases
//! of the real peripherals; tests implement them over plain memory.

/// Peripheral channel clock gates (a generic clock controller's channel
/// control registers).
pub trait ClockGates {
    /// Number of channels. Valid channel indices are `0..channel_count()`.
    fn channel_count(&self) -> u32;

    /// Number of clock generators a channel can be fed from. Valid sources
    /// are `0..generator_count()`.
    fn generator_count(&self) -> u32;

    /// Checks the channel's enable bit. `channel` is in range.
    fn is_enabled(&self, channel: u32) -> bool;

    /// Writes the channel's whole control register. `channel` is in range.
    fn write(&mut self, channel: u32, value: u32);
}

/// External interrupt controller registers.
///
/// Line configuration registers must only be written while the controller is
/// disabled, and disabling only takes effect once
/// [`wait_enable_sync`](Self::wait_enable_sync) returns.
pub trait ExtIntController {
    /// Non-secure ownership mask, one bit per line.
    fn nonsec(&self) -> u32;

    fn evctrl(&self) -> u32;
    fn asynch(&self) -> u32;
    fn debouncen(&self) -> u32;
    /// Configuration word `index`, which is below `CONFIG_WORDS`.
    fn config(&self, index: usize) -> u32;

    fn write_evctrl(&mut self, value: u32);
    fn write_asynch(&mut self, value: u32);
    fn write_debouncen(&mut self, value: u32);
    fn write_config(&mut self, index: usize, value: u32);
    /// Replaces the non-secure ownership mask. Secure state only.
    fn write_nonsec(&mut self, value: u32);

    /// Sets or clears the controller's enable bit.
    fn set_enabled(&mut self, enabled: bool);

    /// Blocks until the last enable bit change has taken effect.
    ///
    /// There is no timeout. Hardware that never finishes synchronizing hangs
    /// the caller.
    fn wait_enable_sync(&mut self);
}
