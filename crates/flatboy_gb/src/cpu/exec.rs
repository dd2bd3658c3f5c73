mod alu;
mod control;
mod incdec;
mod ld;
mod stack;
mod system;

use crate::instructions::{Instruction, Op};

use super::{Bus, Cpu};

/// How PC moves once a handler has run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum Flow {
    /// Advance by the instruction length; base cost.
    Next,
    /// Conditional branch fell through: advance by the length, not-taken cost.
    NotTaken,
    /// Control transfer: PC becomes the target, the length is not added.
    Jump(u16),
}

impl Cpu {
    /// Execute one decoded instruction.
    ///
    /// `next_pc` is the address right after the instruction (PC + length),
    /// used as the return address by CALL/RST and as the base of JR.
    pub(super) fn execute<B: Bus>(
        &mut self,
        bus: &mut B,
        instruction: &Instruction,
        next_pc: u16,
    ) -> Flow {
        match instruction.op {
            Op::Nop => Flow::Next,
            Op::Halt => self.exec_halt(),
            Op::Stop => self.exec_stop(),
            Op::Di => self.exec_di(),
            Op::Ei => self.exec_ei(),

            // Load family.
            Op::Ld8 { dst, src } => self.exec_ld8(bus, dst, src),
            Op::Ld16Imm(pair) => self.exec_ld16_imm(bus, pair),
            Op::LdAbsSp => self.exec_ld_a16_sp(bus),
            Op::LdSpHl => self.exec_ld_sp_hl(),
            Op::LdHlSpOffset => self.exec_ld_hl_sp_r8(bus),

            // Arithmetic/logical family.
            Op::Alu(op, operand) => self.exec_alu(bus, op, operand),
            Op::Inc8(operand) => self.exec_inc8(bus, operand),
            Op::Dec8(operand) => self.exec_dec8(bus, operand),
            Op::Inc16(pair) => self.exec_inc16(pair),
            Op::Dec16(pair) => self.exec_dec16(pair),
            Op::AddHl(pair) => self.exec_add_hl(pair),
            Op::AddSpOffset => self.exec_add_sp_r8(bus),
            Op::RotateA(op) => self.exec_rotate_a(op),
            Op::Daa => self.exec_daa(),
            Op::Cpl => self.exec_cpl(),
            Op::Scf => self.exec_scf(),
            Op::Ccf => self.exec_ccf(),

            // Control-flow family.
            Op::Jp(cond) => self.exec_jp(bus, cond),
            Op::JpHl => self.exec_jp_hl(),
            Op::Jr(cond) => self.exec_jr(bus, cond, next_pc),
            Op::Call(cond) => self.exec_call(bus, cond, next_pc),
            Op::Ret(cond) => self.exec_ret(bus, cond),
            Op::Reti => self.exec_reti(bus),
            Op::Rst(vector) => self.exec_rst(bus, vector, next_pc),

            // Stack family.
            Op::Push(pair) => self.exec_push(bus, pair),
            Op::Pop(pair) => self.exec_pop(bus, pair),

            // Extended family.
            Op::Cb(op) => self.exec_cb(bus, op),
            Op::Prefix => unreachable!("0xCB is resolved to its prefixed entry during decode"),
        }
    }
}
