use crate::cpu::{alu, Bus, Cpu};
use crate::instructions::{Operand8, Reg16};

use super::Flow;

impl Cpu {
    pub(super) fn exec_ld8<B: Bus>(&mut self, bus: &mut B, dst: Operand8, src: Operand8) -> Flow {
        let value = self.read_operand(bus, src);
        self.write_operand(bus, dst, value);
        Flow::Next
    }

    pub(super) fn exec_ld16_imm<B: Bus>(&mut self, bus: &mut B, pair: Reg16) -> Flow {
        debug_assert!(pair != Reg16::AF, "LD AF, d16 does not exist");
        let value = self.imm16(bus);
        self.regs.set16(pair, value);
        Flow::Next
    }

    pub(super) fn exec_ld_a16_sp<B: Bus>(&mut self, bus: &mut B) -> Flow {
        let addr = self.imm16(bus);
        bus.write16(addr, self.regs.sp);
        Flow::Next
    }

    pub(super) fn exec_ld_sp_hl(&mut self) -> Flow {
        self.regs.sp = self.regs.hl;
        Flow::Next
    }

    pub(super) fn exec_ld_hl_sp_r8<B: Bus>(&mut self, bus: &mut B) -> Flow {
        let imm = self.imm8(bus);
        let (result, flags) = alu::add16_signed(self.regs.sp, imm);
        self.regs.hl = result;
        self.set_flags(flags);
        Flow::Next
    }
}
