// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! SAML11 Xplained Pro with the measurement header wired up.
//!
//! The DGI lines come out on header pins PA10, PA11, PA23 and PA27 instead of
//! the on-board debugger's defaults, so a logic analyzer can sit alongside.
//! The non-secure image only gets a single interrupt line (2), and the rest of
//! the EIC stays secure.

use static_assertions::const_assert;

use crate::bsp::{self, Bsp, PortPin};
use crate::regs::eic;

/// LED0 is on PA07, active low. PA27 would be closer to the analyzer, but it
/// carries DGI GPIO3.
const LED0: PortPin = PortPin::secure(7);

const NONSECURE_LINES: u32 = 1 << 2;
const_assert!(NONSECURE_LINES >> eic::LINES == 0);

pub struct Board;

impl Bsp for Board {
    const NONSECURE_EXTINT_LINES: u32 = NONSECURE_LINES;
    const DGI_PINS: [u8; 4] = [10, 11, 23, 27];

    fn configure() {
        LED0.make_output(true);
        bsp::release_dgi_pins(Self::DGI_PINS);
    }

    fn indicate_fault() {
        LED0.set(false);
    }
}
