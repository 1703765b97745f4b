// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The secure image.
//!
//! This runs first out of reset, hands the board's delegated interrupt lines to
//! non-secure code, parks the gateway where the veneers can find it, and then
//! branches to the non-secure image for good. After that, the only secure code
//! that runs is the two veneers below (and fault handlers).
//!
//! Memory partitioning (IDAU/SAU, NSC region) comes from the fuses and the
//! linker script, not from here.

#![no_std]
#![no_main]
#![feature(abi_cmse_nonsecure_call)]
#![feature(cmse_nonsecure_entry)]

use core::cell::RefCell;
use core::sync::atomic::{compiler_fence, Ordering};

use critical_section::Mutex;
use defmt_rtt as _;
use gatekeeper::bsp::Bsp;
use gatekeeper::hw::{Eic, Gclk};
use gatekeeper::regs::gclk;
use nscgate::gateway::{delegate_lines, CHANNEL_ENABLE};
use nscgate::hw::ClockGates;
use nscgate::{ExtIntSetting, Gateway};

// Select the appropriate BSP type as `Board`
cfg_if::cfg_if! {
    if #[cfg(feature = "target-board-saml11-xpro")] {
        use gatekeeper::bsp::saml11_xpro::Board;
    } else if #[cfg(feature = "target-board-saml11-xpro-ext")] {
        use gatekeeper::bsp::saml11_xpro_ext::Board;
    }
}

use cortex_m_rt::{entry, exception, ExceptionFrame};

/// Non-secure copy of the VTOR.
const VTOR_NS: *mut u32 = 0xE002_ED08 as *mut u32;

/// The gateway, once boot has set it up. Every veneer takes the critical
/// section for the whole call, so read-modify-write sequences from two
/// callers (say, non-secure thread code and a non-secure interrupt handler)
/// can't interleave.
static GATEWAY: Mutex<RefCell<Option<Gateway<Gclk, Eic>>>> = Mutex::new(RefCell::new(None));

extern "C" {
    // Start of the non-secure image's vector table, placed by the linker
    // script: initial stack pointer, then reset vector.
    static NONSECURE_IMAGE: [u32; 2];
}

#[entry]
fn main() -> ! {
    Board::configure();

    // Safety: this is the only place either handle is created, and `entry`
    // makes it hard to call `main` twice.
    let (mut clocks, mut eic) = unsafe { (Gclk::steal(), Eic::steal()) };

    // The EIC won't synchronize anything without its clock.
    if !clocks.is_enabled(gclk::EIC_CHANNEL) {
        clocks.write(gclk::EIC_CHANNEL, CHANNEL_ENABLE);
    }
    delegate_lines(&mut eic, Board::NONSECURE_EXTINT_LINES);

    let gateway = Gateway::new(clocks, eic);
    defmt::info!(
        "{=str}: ext int lines {=u32:#04x} delegated to non-secure",
        gatekeeper::BOARD,
        gateway.ownership_mask()
    );

    critical_section::with(|cs| {
        GATEWAY.borrow_ref_mut(cs).replace(gateway);
    });

    boot_nonsecure()
}

fn boot_nonsecure() -> ! {
    // Safety: NONSECURE_IMAGE is extern only because the linker places it;
    // it's flash we never write.
    let [stack, reset] = unsafe { NONSECURE_IMAGE };
    if stack == u32::MAX || reset == u32::MAX {
        // Erased flash: nothing to run.
        panic!();
    }

    defmt::info!("entering non-secure image, reset vector {=u32:#010x}", reset);

    unsafe {
        VTOR_NS.write_volatile(NONSECURE_IMAGE.as_ptr() as u32);
        cortex_m::register::msp::write_ns(stack);
    }

    // Make sure the new settings take effect before we leave.
    cortex_m::asm::dsb();
    cortex_m::asm::isb();

    // Safety: the reset vector was put there by the non-secure image's own
    // build. A `cmse-nonsecure-call` clears our registers on the way out and
    // clears the low bit of the target, so the branch lands in non-secure
    // state.
    let reset: extern "cmse-nonsecure-call" fn() =
        unsafe { core::mem::transmute::<usize, _>(reset as usize) };
    reset();

    // The non-secure reset handler returned, which it has no business doing.
    panic!()
}

/// Runs `f` on the gateway with the critical section held.
fn with_gateway<R>(f: impl FnOnce(&mut Gateway<Gclk, Eic>) -> R) -> R {
    critical_section::with(|cs| {
        let mut gateway = GATEWAY.borrow_ref_mut(cs);
        match gateway.as_mut() {
            Some(gateway) => f(gateway),
            // Non-secure code only starts after boot fills this in.
            None => panic!(),
        }
    })
}

/// Veneer: enable the clock for peripheral channel `gclk_id` from generator
/// `gclk_src`.
///
/// Returns 0 if applied, 1 if the channel was already running, -1 if either
/// argument is out of range.
#[no_mangle]
pub extern "cmse-nonsecure-entry" fn nsc_periph_clock_init(gclk_id: u32, gclk_src: u32) -> i32 {
    with_gateway(|gw| gw.periph_clock_init(gclk_id, gclk_src)).into()
}

/// Veneer: configure the caller's external interrupt lines.
///
/// Fields of `irq_setting` for lines the caller doesn't own are ignored.
/// Always returns 0.
#[no_mangle]
pub extern "cmse-nonsecure-entry" fn nsc_ext_irq_init(irq_setting: ExtIntSetting) -> i32 {
    with_gateway(|gw| gw.ext_int_init(&irq_setting)).into()
}

#[panic_handler]
fn panic_handler(_: &core::panic::PanicInfo) -> ! {
    // We use a BKPT instruction to wake any attached debugger. If no debugger
    // is attached, BKPT escalates into a HardFault, falling to the handler
    // below. This way we can reuse its fault indication code.
    loop {
        cortex_m::asm::bkpt();
    }
}

#[exception]
unsafe fn HardFault(_ef: &ExceptionFrame) -> ! {
    // The Cortex-M23 has no SecureFault, so security violations from the
    // non-secure side land here too.
    Board::indicate_fault();

    // Spin -- don't use BKPT here because if no debugger is attached it'll
    // escalate to another HardFault and lock the processor.
    loop {
        compiler_fence(Ordering::SeqCst);
    }
}
