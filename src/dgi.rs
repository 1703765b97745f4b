// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! DGI timing markers for the non-secure image, over the pins the secure image
//! released to it.

use dgimark::{Line, Markers, Port};

use crate::bsp::PortPin;

/// 1 ms at the 4 MHz core clock the SAML11 comes out of reset with.
const SETTLE_CYCLES: u32 = 4_000;

pub struct DgiPort {
    pins: [PortPin; 4],
}

impl Port for DgiPort {
    fn set(&mut self, line: Line, high: bool) {
        self.pins[line as usize].set(high);
    }

    fn settle(&mut self) {
        cortex_m::asm::delay(SETTLE_CYCLES);
    }
}

/// Markers on `pins`, the board's DGI GPIO0-3, through the non-secure PORT
/// alias.
pub fn nonsecure_markers(pins: [u8; 4]) -> Markers<DgiPort> {
    Markers::new(DgiPort { pins: pins.map(PortPin::nonsecure) })
}
