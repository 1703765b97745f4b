// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Types and hooks for implementing Board Support Packages (BSPs) for the
//! secure image.
//!
//! The secure image doesn't care much about the board. It needs to know which
//! external interrupt lines the board hands to the non-secure image, which
//! pins carry the DGI timing markers, and how to signal a fault. The exact
//! properties are in the `Bsp` trait below.
//!
//! To implement a BSP:
//!
//! 1. Create a module within `bsp` named after your board.
//! 2. Define a type in the module called `Board`. This type will never be
//!    instantiated, so it can be arbitrary; an empty enum is easy.
//! 3. Implement `bsp::Bsp` for your `Board` type.
//! 4. Add a `target-board-*` feature to `Cargo.toml`.
//! 5. Add a branch to the `cfg_if` in `src/bin/secure.rs` and
//!    `src/bin/nonsecure.rs` to detect your board and select the right `Board`
//!    type.

// As with the boards themselves, these are all compiled regardless of which
// one is selected, so that every BSP at least builds.
pub mod saml11_xpro;
pub mod saml11_xpro_ext;

use crate::regs::{self, port, PORT_BASE, PORT_SEC_BASE};

/// Requirements placed upon a BSP type.
pub trait Bsp {
    /// External interrupt lines owned by the non-secure image, one bit per
    /// line. Written to the EIC once at boot and never changed after.
    const NONSECURE_EXTINT_LINES: u32;

    /// PORTA pins wired to the debugger's DGI GPIO0-3, in that order. The
    /// secure image drives them low and hands them to the non-secure image,
    /// which uses them as timing markers.
    const DGI_PINS: [u8; 4];

    /// Set up any I/Os needed for the board.
    fn configure();

    /// Indicate a fault. No information is provided as to _what_ failure,
    /// because generally speaking we only have one bit of output.
    fn indicate_fault();
}

/// Drives `pins` low as plain outputs and lets non-secure code have them.
pub fn release_dgi_pins(pins: [u8; 4]) {
    for pin in pins {
        let pin = PortPin::secure(pin);
        pin.make_output(false);
        pin.release_to_nonsecure();
    }
}

/// A PORTA pin, driven through one of the PORT aliases.
#[derive(Copy, Clone, Debug)]
pub struct PortPin {
    alias: usize,
    pin: u8,
}

impl PortPin {
    pub const fn secure(pin: u8) -> Self {
        Self { alias: PORT_SEC_BASE, pin }
    }

    /// A pin as the non-secure image sees it. Writes are ignored until the
    /// secure side has released the pin.
    pub const fn nonsecure(pin: u8) -> Self {
        Self { alias: PORT_BASE, pin }
    }

    /// Makes the pin a plain GPIO output at the given level.
    pub fn make_output(self, high: bool) {
        self.set(high);
        // Safety: DIRSET and PINCFG for a single pin; we only configure pins
        // the board says are ours.
        unsafe {
            regs::write32(self.alias, port::DIRSET, self.bit());
            // Peripheral mux off, no pull, no input buffer.
            regs::write8(self.alias, port::PINCFG0 + usize::from(self.pin), 0);
        }
    }

    pub fn set(self, high: bool) {
        let reg = if high { port::OUTSET } else { port::OUTCLR };
        // Safety: OUTSET/OUTCLR only affect the bits written as 1.
        unsafe { regs::write32(self.alias, reg, self.bit()) }
    }

    /// Marks the pin non-secure in `PORT.NONSEC`.
    pub fn release_to_nonsecure(self) {
        // Safety: NONSEC is a secure-alias register, so this always goes
        // through PORT_SEC_BASE. Other pins' bits are written back as read.
        unsafe {
            let nonsec = regs::read32(PORT_SEC_BASE, port::NONSEC);
            regs::write32(PORT_SEC_BASE, port::NONSEC, nonsec | self.bit());
        }
    }

    fn bit(self) -> u32 {
        1 << self.pin
    }
}
