use crate::cpu::{Bus, Cpu};
use crate::instructions::Cond;

use super::Flow;

impl Cpu {
    pub(super) fn exec_jp<B: Bus>(&mut self, bus: &mut B, cond: Cond) -> Flow {
        let target = self.imm16(bus);
        if self.condition(cond) {
            Flow::Jump(target)
        } else {
            Flow::NotTaken
        }
    }

    pub(super) fn exec_jp_hl(&mut self) -> Flow {
        Flow::Jump(self.regs.hl)
    }

    /// Relative jump. The signed displacement is relative to the address
    /// following the operand.
    pub(super) fn exec_jr<B: Bus>(&mut self, bus: &mut B, cond: Cond, next_pc: u16) -> Flow {
        let offset = self.imm8(bus) as i8;
        if self.condition(cond) {
            Flow::Jump(next_pc.wrapping_add(offset as i16 as u16))
        } else {
            Flow::NotTaken
        }
    }

    pub(super) fn exec_call<B: Bus>(&mut self, bus: &mut B, cond: Cond, next_pc: u16) -> Flow {
        let target = self.imm16(bus);
        if self.condition(cond) {
            self.push_u16(bus, next_pc);
            Flow::Jump(target)
        } else {
            Flow::NotTaken
        }
    }

    pub(super) fn exec_ret<B: Bus>(&mut self, bus: &mut B, cond: Cond) -> Flow {
        if self.condition(cond) {
            Flow::Jump(self.pop_u16(bus))
        } else {
            Flow::NotTaken
        }
    }

    pub(super) fn exec_reti<B: Bus>(&mut self, bus: &mut B) -> Flow {
        self.ime = true;
        Flow::Jump(self.pop_u16(bus))
    }

    pub(super) fn exec_rst<B: Bus>(&mut self, bus: &mut B, vector: u16, next_pc: u16) -> Flow {
        debug_assert!(vector & !0x38 == 0, "RST vector {vector:#06x}");
        self.push_u16(bus, next_pc);
        Flow::Jump(vector)
    }
}
