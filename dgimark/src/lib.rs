// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Timing markers on the debugger's four DGI GPIO lines.
//!
//! A host-side capture watches these lines and times the gap between edges.
//! The convention is: a line goes high when a measured section starts and low
//! when it stops, and all four going high together marks the end of a run.
//! Each marker settles for a fixed delay on the side facing away from the
//! measured code, so the settle time never lands inside a measurement.

#![no_std]

#[cfg(test)]
extern crate std;

/// One of the four DGI GPIO lines.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Line {
    Gpio0 = 0,
    Gpio1 = 1,
    Gpio2 = 2,
    Gpio3 = 3,
}

impl Line {
    pub const ALL: [Line; 4] = [Line::Gpio0, Line::Gpio1, Line::Gpio2, Line::Gpio3];
}

/// Pin access for the marker lines.
pub trait Port {
    fn set(&mut self, line: Line, high: bool);

    /// Waits long enough for the capture to separate two edges.
    fn settle(&mut self);
}

pub struct Markers<P> {
    port: P,
}

impl<P: Port> Markers<P> {
    /// Takes over `port` and drives every line low.
    pub fn new(mut port: P) -> Self {
        for line in Line::ALL {
            port.set(line, false);
        }
        Self { port }
    }

    pub fn start(&mut self, line: Line) {
        self.port.settle();
        self.port.set(line, true);
    }

    pub fn stop(&mut self, line: Line) {
        self.port.set(line, false);
        self.port.settle();
    }

    /// Runs `f` between a start and a stop marker on `line`.
    pub fn measure<R>(&mut self, line: Line, f: impl FnOnce() -> R) -> R {
        self.start(line);
        let r = f();
        self.stop(line);
        r
    }

    /// Signals that the run is over. Lines are left high.
    pub fn end(&mut self) {
        self.port.settle();
        for line in Line::ALL {
            self.port.set(line, true);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::vec::Vec;

    #[derive(Copy, Clone, Debug, PartialEq, Eq)]
    enum Op {
        Set(Line, bool),
        Settle,
        Body,
    }

    struct Recorder<'a>(&'a RefCell<Vec<Op>>);

    impl Port for Recorder<'_> {
        fn set(&mut self, line: Line, high: bool) {
            self.0.borrow_mut().push(Op::Set(line, high));
        }

        fn settle(&mut self) {
            self.0.borrow_mut().push(Op::Settle);
        }
    }

    fn markers(log: &RefCell<Vec<Op>>) -> Markers<Recorder<'_>> {
        let m = Markers::new(Recorder(log));
        log.borrow_mut().clear();
        m
    }

    #[test]
    fn lines_start_low() {
        let log = RefCell::new(Vec::new());
        let _ = Markers::new(Recorder(&log));
        assert_eq!(
            *log.borrow(),
            [
                Op::Set(Line::Gpio0, false),
                Op::Set(Line::Gpio1, false),
                Op::Set(Line::Gpio2, false),
                Op::Set(Line::Gpio3, false),
            ]
        );
    }

    #[test]
    fn settle_stays_outside_the_measured_section() {
        let log = RefCell::new(Vec::new());
        let mut m = markers(&log);

        let r = m.measure(Line::Gpio1, || {
            log.borrow_mut().push(Op::Body);
            7
        });

        assert_eq!(r, 7);
        assert_eq!(
            *log.borrow(),
            [
                Op::Settle,
                Op::Set(Line::Gpio1, true),
                Op::Body,
                Op::Set(Line::Gpio1, false),
                Op::Settle,
            ]
        );
    }

    #[test]
    fn end_raises_every_line_after_settling() {
        let log = RefCell::new(Vec::new());
        let mut m = markers(&log);

        m.end();

        assert_eq!(
            *log.borrow(),
            [
                Op::Settle,
                Op::Set(Line::Gpio0, true),
                Op::Set(Line::Gpio1, true),
                Op::Set(Line::Gpio2, true),
                Op::Set(Line::Gpio3, true),
            ]
        );
    }

    #[test]
    fn back_to_back_sections_use_their_own_lines() {
        let log = RefCell::new(Vec::new());
        let mut m = markers(&log);

        m.measure(Line::Gpio0, || ());
        m.measure(Line::Gpio2, || ());

        let sets: Vec<_> = log
            .borrow()
            .iter()
            .filter_map(|op| match op {
                Op::Set(line, high) => Some((*line, *high)),
                _ => None,
            })
            .collect();
        assert_eq!(
            sets,
            [(Line::Gpio0, true), (Line::Gpio0, false), (Line::Gpio2, true), (Line::Gpio2, false)]
        );
    }
}
