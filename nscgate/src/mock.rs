// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Memory-backed register fakes for tests.

use std::vec::Vec;

use rand::Rng;

use crate::gateway::CHANNEL_ENABLE;
use crate::hw::{ClockGates, ExtIntController};
use crate::setting::CONFIG_WORDS;

pub struct MockClocks {
    count: u32,
    pub pchctrl: [u32; 8],
    pub writes: usize,
}

impl MockClocks {
    pub fn new(count: u32) -> Self {
        assert!(count as usize <= 8);
        Self { count, pchctrl: [0; 8], writes: 0 }
    }
}

impl ClockGates for MockClocks {
    fn channel_count(&self) -> u32 {
        self.count
    }

    fn generator_count(&self) -> u32 {
        5
    }

    fn is_enabled(&self, channel: u32) -> bool {
        self.pchctrl[channel as usize] & CHANNEL_ENABLE != 0
    }

    fn write(&mut self, channel: u32, value: u32) {
        self.pchctrl[channel as usize] = value;
        self.writes += 1;
    }
}

/// One register-level operation, with the controller state it happened in.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum EicOp {
    SetEnabled(bool),
    WaitSync,
    WriteEvctrl { enabled: bool, synced: bool },
    WriteAsynch { enabled: bool, synced: bool },
    WriteDebouncen { enabled: bool, synced: bool },
    WriteConfig { index: usize, enabled: bool, synced: bool },
    WriteNonsec { enabled: bool, synced: bool },
}

#[derive(Clone, Debug, Default)]
pub struct MockEic {
    pub nonsec: u32,
    pub evctrl: u32,
    pub asynch: u32,
    pub debouncen: u32,
    pub config: [u32; CONFIG_WORDS],
    pub enabled: bool,
    /// Whether the last enable change has been waited out.
    pub synced: bool,
    pub ops: Vec<EicOp>,
}

impl MockEic {
    pub fn random(rng: &mut impl Rng) -> Self {
        let mut config = [0; CONFIG_WORDS];
        rng.fill(&mut config[..]);
        Self {
            nonsec: rng.gen::<u8>().into(),
            evctrl: rng.gen(),
            asynch: rng.gen(),
            debouncen: rng.gen(),
            config,
            enabled: true,
            synced: true,
            ops: Vec::new(),
        }
    }

    pub fn ops(&self) -> &[EicOp] {
        &self.ops
    }
}

impl ExtIntController for MockEic {
    fn nonsec(&self) -> u32 {
        self.nonsec
    }

    fn evctrl(&self) -> u32 {
        self.evctrl
    }

    fn asynch(&self) -> u32 {
        self.asynch
    }

    fn debouncen(&self) -> u32 {
        self.debouncen
    }

    fn config(&self, index: usize) -> u32 {
        self.config[index]
    }

    fn write_evctrl(&mut self, value: u32) {
        self.ops.push(EicOp::WriteEvctrl { enabled: self.enabled, synced: self.synced });
        self.evctrl = value;
    }

    fn write_asynch(&mut self, value: u32) {
        self.ops.push(EicOp::WriteAsynch { enabled: self.enabled, synced: self.synced });
        self.asynch = value;
    }

    fn write_debouncen(&mut self, value: u32) {
        self.ops.push(EicOp::WriteDebouncen { enabled: self.enabled, synced: self.synced });
        self.debouncen = value;
    }

    fn write_config(&mut self, index: usize, value: u32) {
        self.ops.push(EicOp::WriteConfig { index, enabled: self.enabled, synced: self.synced });
        self.config[index] = value;
    }

    fn write_nonsec(&mut self, value: u32) {
        self.ops.push(EicOp::WriteNonsec { enabled: self.enabled, synced: self.synced });
        self.nonsec = value;
    }

    fn set_enabled(&mut self, enabled: bool) {
        self.ops.push(EicOp::SetEnabled(enabled));
        self.enabled = enabled;
        self.synced = false;
    }

    fn wait_enable_sync(&mut self) {
        self.ops.push(EicOp::WaitSync);
        self.synced = true;
    }
}
