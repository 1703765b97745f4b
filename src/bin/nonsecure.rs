// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The non-secure image.
//!
//! Gets its external interrupt hardware going through the secure gateway and
//! then waits for interrupts. Whatever the application does with those lines
//! goes here.
//!
//! Each veneer call is bracketed by a DGI marker (GPIO0 for the clock call,
//! GPIO1 for the interrupt call), so a capture shows the round trip through
//! the secure side. All four lines go high once both are done.

#![no_std]
#![no_main]

use cortex_m_rt::entry;
use dgimark::Line;
use gatekeeper::bsp::Bsp;
use gatekeeper::nsc::{self, Channel, Generator};
use nscgate::{ExtIntSetting, Status};

// Select the appropriate BSP type as `Board`. Only its pin choices are used
// here; configuring the board is the secure image's job.
cfg_if::cfg_if! {
    if #[cfg(feature = "target-board-saml11-xpro")] {
        use gatekeeper::bsp::saml11_xpro::Board;
    } else if #[cfg(feature = "target-board-saml11-xpro-ext")] {
        use gatekeeper::bsp::saml11_xpro_ext::Board;
    }
}

/// `CONFIG` sense code for rising edge, with the filter bit set.
const RISE_FILTERED: u8 = 0x1 | 0x8;

/// The line our button is on. The secure side has to have delegated it.
const BUTTON_LINE: usize = 2;

#[entry]
fn main() -> ! {
    let mut markers = gatekeeper::dgi::nonsecure_markers(Board::DGI_PINS);

    // The secure image turns the EIC clock on before we ever run, so this will
    // normally come back AlreadyEnabled. Either is fine.
    let status = markers.measure(Line::Gpio0, || {
        nsc::periph_clock_init(Channel::Eic, Generator::Gclk0)
    });
    match status {
        Some(Status::Applied | Status::AlreadyEnabled) => (),
        _ => panic!(),
    }

    let mut setting = ExtIntSetting {
        debouncen: 1 << BUTTON_LINE,
        ..ExtIntSetting::default()
    };
    setting.set_line_config(BUTTON_LINE, RISE_FILTERED);

    let status = markers.measure(Line::Gpio1, || nsc::ext_irq_init(&setting));
    if status != Some(Status::Applied) {
        panic!();
    }
    markers.end();

    loop {
        cortex_m::asm::wfi();
    }
}

#[panic_handler]
fn panic_handler(_: &core::panic::PanicInfo) -> ! {
    // Same as the secure side: wake the debugger if there is one.
    loop {
        cortex_m::asm::bkpt();
    }
}
