use crate::cpu::{alu, Bus, Cpu, Flags};
use crate::instructions::{AluOp, Operand8, Reg16, ShiftOp};

use super::Flow;

impl Cpu {
    /// ADD/ADC/SUB/SBC/AND/XOR/OR/CP on A with any 8-bit source.
    pub(super) fn exec_alu<B: Bus>(&mut self, bus: &mut B, op: AluOp, operand: Operand8) -> Flow {
        let a = self.regs.a();
        let value = self.read_operand(bus, operand);
        let carry = self.get_flag(Flags::C);

        let (result, flags) = match op {
            AluOp::Add => alu::add8(a, value, false),
            AluOp::Adc => alu::add8(a, value, carry),
            AluOp::Sub => alu::sub8(a, value, false),
            AluOp::Sbc => alu::sub8(a, value, carry),
            AluOp::And => alu::and8(a, value),
            AluOp::Xor => alu::xor8(a, value),
            AluOp::Or => alu::or8(a, value),
            // CP only sets flags.
            AluOp::Cp => (a, alu::cp8(a, value)),
        };

        self.regs.set_a(result);
        self.set_flags(flags);
        Flow::Next
    }

    pub(super) fn exec_add_hl(&mut self, pair: Reg16) -> Flow {
        let value = self.pair(pair);
        let (result, flags) = alu::add16(self.regs.hl, value, self.flags());
        self.regs.hl = result;
        self.set_flags(flags);
        Flow::Next
    }

    pub(super) fn exec_add_sp_r8<B: Bus>(&mut self, bus: &mut B) -> Flow {
        let imm = self.imm8(bus);
        let (result, flags) = alu::add16_signed(self.regs.sp, imm);
        self.regs.sp = result;
        self.set_flags(flags);
        Flow::Next
    }

    pub(super) fn exec_rotate_a(&mut self, op: ShiftOp) -> Flow {
        debug_assert!(matches!(
            op,
            ShiftOp::Rlc | ShiftOp::Rrc | ShiftOp::Rl | ShiftOp::Rr
        ));
        let (result, flags) = alu::rotate_a(op, self.regs.a(), self.flags());
        self.regs.set_a(result);
        self.set_flags(flags);
        Flow::Next
    }

    pub(super) fn exec_daa(&mut self) -> Flow {
        let (result, flags) = alu::daa(self.regs.a(), self.flags());
        self.regs.set_a(result);
        self.set_flags(flags);
        Flow::Next
    }

    pub(super) fn exec_cpl(&mut self) -> Flow {
        let (result, flags) = alu::cpl(self.regs.a(), self.flags());
        self.regs.set_a(result);
        self.set_flags(flags);
        Flow::Next
    }

    pub(super) fn exec_scf(&mut self) -> Flow {
        let flags = alu::scf(self.flags());
        self.set_flags(flags);
        Flow::Next
    }

    pub(super) fn exec_ccf(&mut self) -> Flow {
        let flags = alu::ccf(self.flags());
        self.set_flags(flags);
        Flow::Next
    }
}
