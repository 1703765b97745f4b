// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Merge-under-mask arithmetic.
//!
//! Everything the gateway does to a register boils down to "keep the bits the
//! caller doesn't own, take the caller's bits where it does." The ownership
//! mask has one bit per line, which is fine for registers that also have one
//! bit per line, but the line configuration registers pack a 4-bit code per
//! line, eight lines to a word. Those need the mask widened first.

use crate::setting::LINES_PER_CONFIG_WORD;

/// Bits per line in a configuration word.
const CONFIG_BITS_PER_LINE: u32 = 4;

/// Takes `requested` wherever `mask` is set and `current` everywhere else.
#[inline]
pub const fn merge(current: u32, requested: u32, mask: u32) -> u32 {
    (current & !mask) | (requested & mask)
}

/// Widens a line-level ownership mask into a mask over configuration word
/// `word`.
///
/// Configuration word `word` holds lines `8 * word .. 8 * word + 8`. Line `i`
/// of that group occupies bits `[4 * i, 4 * i + 4)`; if the line is owned,
/// that whole nibble is set in the result, and no other bits are.
pub const fn nibble_mask(line_mask: u32, word: usize) -> u32 {
    let shift = word.saturating_mul(LINES_PER_CONFIG_WORD);
    // Words past the end of a 32-line mask own nothing.
    let group = if shift < 32 { line_mask >> (shift as u32) } else { 0 };

    let mut out = 0;
    let mut i = 0;
    while i < LINES_PER_CONFIG_WORD as u32 {
        if group & (1 << i) != 0 {
            out |= 0xF << (i * CONFIG_BITS_PER_LINE);
        }
        i += 1;
    }
    out
}

/// [`merge`] for configuration word `word`, using the widened mask.
#[inline]
pub const fn merge_config(current: u32, requested: u32, line_mask: u32, word: usize) -> u32 {
    merge(current, requested, nibble_mask(line_mask, word))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn merge_takes_requested_only_under_mask() {
        assert_eq!(merge(0x0000_0000, 0xFFFF_FFFF, 0x0000_0004), 0x0000_0004);
        assert_eq!(merge(0xFFFF_FFFF, 0x0000_0000, 0x0000_0004), 0xFFFF_FFFB);
        assert_eq!(merge(0x1234_5678, 0xDEAD_BEEF, 0), 0x1234_5678);
        assert_eq!(merge(0x1234_5678, 0xDEAD_BEEF, !0), 0xDEAD_BEEF);
    }

    #[test]
    fn merge_never_touches_unowned_bits() {
        let mut rng = SmallRng::seed_from_u64(0x6eb1_c0de);
        for _ in 0..10_000 {
            let current: u32 = rng.gen();
            let mask: u32 = rng.gen();
            for requested in [0, !0, rng.gen()] {
                let out = merge(current, requested, mask);
                assert_eq!(out & !mask, current & !mask);
                assert_eq!(out & mask, requested & mask);
            }
        }
    }

    #[test]
    fn single_line_maps_to_its_nibble() {
        for line in 0..8 {
            assert_eq!(nibble_mask(1 << line, 0), 0xF << (4 * line));
        }
    }

    #[test]
    fn nibble_mask_of_several_lines() {
        assert_eq!(nibble_mask(0b0000_0000, 0), 0);
        assert_eq!(nibble_mask(0b1111_1111, 0), 0xFFFF_FFFF);
        assert_eq!(nibble_mask(0b1000_0101, 0), 0xF000_0F0F);
    }

    #[test]
    fn nibble_mask_selects_its_own_group() {
        // Lines 8 and 15 live in word 1; word 0 must not see them.
        let mask = 1 << 8 | 1 << 15 | 1 << 1;
        assert_eq!(nibble_mask(mask, 0), 0x0000_00F0);
        assert_eq!(nibble_mask(mask, 1), 0xF000_000F);
        assert_eq!(nibble_mask(mask, 2), 0);
        assert_eq!(nibble_mask(!0, 3), 0xFFFF_FFFF);
        assert_eq!(nibble_mask(!0, 4), 0);
    }

    #[test]
    fn config_merge_only_moves_owned_nibbles() {
        let mut rng = SmallRng::seed_from_u64(42);
        for _ in 0..10_000 {
            let current: u32 = rng.gen();
            let requested: u32 = rng.gen();
            let lines: u32 = rng.gen::<u8>().into();
            let out = merge_config(current, requested, lines, 0);
            for i in 0..8 {
                let nibble = |v: u32| (v >> (4 * i)) & 0xF;
                if lines & (1 << i) != 0 {
                    assert_eq!(nibble(out), nibble(requested));
                } else {
                    assert_eq!(nibble(out), nibble(current));
                }
            }
        }
    }
}
