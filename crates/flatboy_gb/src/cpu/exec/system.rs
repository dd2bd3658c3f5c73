use crate::cpu::Cpu;

use super::Flow;

impl Cpu {
    /// HALT. Without an interrupt controller nothing resumes the CPU, so it
    /// idles until reset.
    pub(super) fn exec_halt(&mut self) -> Flow {
        self.halted = true;
        Flow::Next
    }

    /// STOP is a 2-byte instruction; the padding byte is skipped via the
    /// metadata length.
    pub(super) fn exec_stop(&mut self) -> Flow {
        self.stopped = true;
        self.halted = false;
        Flow::Next
    }

    pub(super) fn exec_di(&mut self) -> Flow {
        self.ime = false;
        Flow::Next
    }

    pub(super) fn exec_ei(&mut self) -> Flow {
        self.ime = true;
        Flow::Next
    }
}
