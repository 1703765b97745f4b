// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The external interrupt request record passed across the boundary.

use core::mem::size_of;

use static_assertions::const_assert_eq;
use zerocopy::{AsBytes, FromBytes};

/// Lines whose 4-bit configuration codes share one configuration word.
pub const LINES_PER_CONFIG_WORD: usize = 8;

/// Configuration words in a request. The SAML11 EIC has eight lines, so one.
pub const CONFIG_WORDS: usize = 1;

/// Desired external interrupt settings, for every line.
///
/// The caller fills this in for all lines, including ones it doesn't own.
/// The gateway only honors fields for lines set in the ownership mask; the
/// rest of the record is read and then ignored.
///
/// Every bit pattern is a valid request, which is why this is `FromBytes`:
/// there's no such thing as a malformed `ExtIntSetting`, only one that asks
/// for things it won't get.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, AsBytes, FromBytes)]
#[repr(C)]
pub struct ExtIntSetting {
    /// Event output enable, one bit per line.
    pub evctrl: u32,
    /// Asynchronous edge detection, one bit per line.
    pub asynch: u32,
    /// Debouncer enable, one bit per line.
    pub debouncen: u32,
    /// Sense and filter codes, 4 bits per line, eight lines per word, line 0
    /// in the low nibble of word 0.
    pub config: [u32; CONFIG_WORDS],
}

// The CMSE calling convention only lets arguments cross in r0-r3; anything
// that spills onto the stack would have to be fetched from non-secure memory.
// Keep the record at four words.
const_assert_eq!(size_of::<ExtIntSetting>(), 16);

impl ExtIntSetting {
    /// Returns the configuration code requested for `line`.
    ///
    /// Lines past the end of the record read as 0.
    pub fn line_config(&self, line: usize) -> u8 {
        let word = line / LINES_PER_CONFIG_WORD;
        let shift = (line % LINES_PER_CONFIG_WORD) * 4;
        self.config
            .get(word)
            .map(|w| ((w >> shift) & 0xF) as u8)
            .unwrap_or(0)
    }

    /// Sets the configuration code requested for `line`. Only the low 4 bits
    /// of `code` are used.
    ///
    /// Lines past the end of the record are ignored.
    pub fn set_line_config(&mut self, line: usize, code: u8) {
        let word = line / LINES_PER_CONFIG_WORD;
        let shift = (line % LINES_PER_CONFIG_WORD) * 4;
        if let Some(w) = self.config.get_mut(word) {
            *w = (*w & !(0xF << shift)) | (u32::from(code & 0xF) << shift);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_order_matches_the_c_record() {
        let setting = ExtIntSetting {
            evctrl: 0x0403_0201,
            asynch: 0x0807_0605,
            debouncen: 0x0c0b_0a09,
            config: [0x100f_0e0d],
        };
        let expected: [u8; 16] = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16];
        // Little-endian, like the target.
        assert_eq!(setting.as_bytes(), &expected[..]);
    }

    #[test]
    fn any_bytes_are_a_request() {
        let bytes = [0xFFu8; 16];
        let setting = ExtIntSetting::read_from(&bytes[..]).unwrap();
        assert_eq!(setting.evctrl, !0);
        assert_eq!(setting.config, [!0]);
    }

    #[test]
    fn line_config_accessors() {
        let mut setting = ExtIntSetting::default();
        setting.set_line_config(2, 0xA);
        setting.set_line_config(7, 0x1F);
        assert_eq!(setting.config[0], 0xF000_0A00);
        assert_eq!(setting.line_config(2), 0xA);
        assert_eq!(setting.line_config(7), 0xF);
        assert_eq!(setting.line_config(3), 0);

        setting.set_line_config(8, 0x3);
        assert_eq!(setting.line_config(8), 0);
        assert_eq!(setting.config[0], 0xF000_0A00);
    }
}
