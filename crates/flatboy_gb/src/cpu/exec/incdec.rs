use crate::cpu::{alu, Bus, Cpu};
use crate::instructions::{Operand8, Reg16};

use super::Flow;

impl Cpu {
    pub(super) fn exec_inc8<B: Bus>(&mut self, bus: &mut B, operand: Operand8) -> Flow {
        self.modify_operand(bus, operand, alu::inc8);
        Flow::Next
    }

    pub(super) fn exec_dec8<B: Bus>(&mut self, bus: &mut B, operand: Operand8) -> Flow {
        self.modify_operand(bus, operand, alu::dec8);
        Flow::Next
    }

    /// 16-bit INC rr. No flags are affected.
    pub(super) fn exec_inc16(&mut self, pair: Reg16) -> Flow {
        let value = self.pair(pair).wrapping_add(1);
        self.regs.set16(pair, value);
        Flow::Next
    }

    /// 16-bit DEC rr. No flags are affected.
    pub(super) fn exec_dec16(&mut self, pair: Reg16) -> Flow {
        let value = self.pair(pair).wrapping_sub(1);
        self.regs.set16(pair, value);
        Flow::Next
    }
}
