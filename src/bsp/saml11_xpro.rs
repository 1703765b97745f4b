// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use static_assertions::const_assert;

use crate::bsp::{self, Bsp, PortPin};
use crate::regs::eic;

/// LED0 is on PA07, active low.
const LED0: PortPin = PortPin::secure(7);

pub struct Board;

// Lines 0-3 belong to the non-secure application; 4-7 stay secure.
const NONSECURE_LINES: u32 = 0b0000_1111;
const_assert!(NONSECURE_LINES >> eic::LINES == 0);

impl Bsp for Board {
    const NONSECURE_EXTINT_LINES: u32 = NONSECURE_LINES;

    // The on-board debugger's DGI GPIOs. Note 2 and 3 are swapped relative to
    // pin order.
    const DGI_PINS: [u8; 4] = [8, 9, 11, 10];

    fn configure() {
        // Park the LED off until something goes wrong.
        LED0.make_output(true);
        bsp::release_dgi_pins(Self::DGI_PINS);
    }

    fn indicate_fault() {
        LED0.set(false);
    }
}
