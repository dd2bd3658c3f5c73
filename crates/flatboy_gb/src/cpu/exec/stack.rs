use crate::cpu::{Bus, Cpu};
use crate::instructions::Reg16;

use super::Flow;

impl Cpu {
    pub(super) fn exec_push<B: Bus>(&mut self, bus: &mut B, pair: Reg16) -> Flow {
        debug_assert!(pair != Reg16::SP, "PUSH SP does not exist");
        let value = self.pair(pair);
        self.push_u16(bus, value);
        Flow::Next
    }

    /// POP rr. Popping AF rewrites the flag byte, so its low nibble is
    /// dropped.
    pub(super) fn exec_pop<B: Bus>(&mut self, bus: &mut B, pair: Reg16) -> Flow {
        debug_assert!(pair != Reg16::SP, "POP SP does not exist");
        let value = self.pop_u16(bus);
        self.regs.set16(pair, value);
        Flow::Next
    }
}
