// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! SAML11 register map, for the handful of registers we touch.
//!
//! On the SAML11, mix-secure peripherals (EIC, PORT) have two aliases: the
//! peripheral's base address is the non-secure alias, and the secure alias
//! sits [`SECURE_ALIAS_OFFSET`] above it. Registers only secure code may write,
//! such as `NONSEC`, ignore writes through the non-secure alias. GCLK is
//! secure-only in our configuration.
//!
//! We poke these directly rather than through a PAC. There are few of them and
//! their layout is stable across the SAML10/11 family.

pub const GCLK_BASE: usize = 0x4000_1C00;
pub const EIC_BASE: usize = 0x4000_2800;
pub const PORT_BASE: usize = 0x4000_3000;

/// Distance from a mix-secure peripheral's non-secure alias to its secure one.
pub const SECURE_ALIAS_OFFSET: usize = 0x200;

pub const EIC_SEC_BASE: usize = 0x4000_2A00;
pub const PORT_SEC_BASE: usize = 0x4000_3200;

static_assertions::const_assert_eq!(EIC_SEC_BASE, EIC_BASE + SECURE_ALIAS_OFFSET);
static_assertions::const_assert_eq!(PORT_SEC_BASE, PORT_BASE + SECURE_ALIAS_OFFSET);

pub mod gclk {
    /// Peripheral channel control, `PCHCTRL[m]`, one word each.
    pub const PCHCTRL0: usize = 0x80;
    /// Peripheral channels on the SAML11.
    pub const CHANNELS: u32 = 21;
    /// Generators 0..=4 exist; the `GEN` field is four bits wide regardless.
    pub const GENERATORS: u32 = 5;
    /// Channel clocking the EIC (datasheet, GCLK peripheral channel table,
    /// `PCHCTRL` index 3).
    pub const EIC_CHANNEL: u32 = 3;
}

pub mod eic {
    /// Control A (8 bits).
    pub const CTRLA: usize = 0x00;
    pub const CTRLA_ENABLE: u8 = 1 << 1;
    /// Synchronization busy flags.
    pub const SYNCBUSY: usize = 0x04;
    pub const SYNCBUSY_ENABLE: u32 = 1 << 1;

    pub const EVCTRL: usize = 0x08;
    pub const ASYNCH: usize = 0x18;
    /// `CONFIG[n]`, one word per eight lines.
    pub const CONFIG0: usize = 0x1C;
    pub const DEBOUNCEN: usize = 0x30;
    /// Non-secure line ownership. Only writable from secure state.
    pub const NONSEC: usize = 0x40;

    /// External interrupt lines on the SAML11.
    pub const LINES: u32 = 8;
}

pub mod port {
    /// Group 0 (PORTA) only; the SAML11 has no other.
    pub const DIRSET: usize = 0x08;
    pub const OUTCLR: usize = 0x14;
    pub const OUTSET: usize = 0x18;
    /// Pin configuration, one byte per pin.
    pub const PINCFG0: usize = 0x40;
    /// Non-secure pin ownership, one bit per pin. Secure alias only.
    pub const NONSEC: usize = 0x68;
}

/// Reads the 32-bit register at `base + offset`.
///
/// # Safety
///
/// `base + offset` must be a readable, 4-byte aligned register.
#[inline(always)]
pub unsafe fn read32(base: usize, offset: usize) -> u32 {
    core::ptr::read_volatile((base + offset) as *const u32)
}

/// Writes the 32-bit register at `base + offset`.
///
/// # Safety
///
/// `base + offset` must be a writable, 4-byte aligned register, and writing
/// `value` there must not break anyone else's assumptions.
#[inline(always)]
pub unsafe fn write32(base: usize, offset: usize, value: u32) {
    core::ptr::write_volatile((base + offset) as *mut u32, value)
}

/// # Safety
///
/// As [`read32`], for a byte register.
#[inline(always)]
pub unsafe fn read8(base: usize, offset: usize) -> u8 {
    core::ptr::read_volatile((base + offset) as *const u8)
}

/// # Safety
///
/// As [`write32`], for a byte register.
#[inline(always)]
pub unsafe fn write8(base: usize, offset: usize, value: u8) {
    core::ptr::write_volatile((base + offset) as *mut u8, value)
}
