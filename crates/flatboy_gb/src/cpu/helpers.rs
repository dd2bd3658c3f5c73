use crate::instructions::{Cond, Operand8, Reg16};

use super::{Bus, Cpu, Flags};

impl Cpu {
    /// Byte operand following the opcode. PC still points at the opcode
    /// while an instruction executes.
    #[inline]
    pub(super) fn imm8<B: Bus>(&self, bus: &mut B) -> u8 {
        bus.read8(self.regs.pc.wrapping_add(1))
    }

    /// Word operand following the opcode (little-endian).
    #[inline]
    pub(super) fn imm16<B: Bus>(&self, bus: &mut B) -> u16 {
        bus.read16(self.regs.pc.wrapping_add(1))
    }

    /// Resolve the memory address of an operand, if it names memory.
    ///
    /// `(HL+)` and `(HL-)` apply their post-increment/decrement here, so each
    /// operand must be resolved exactly once per instruction.
    fn operand_address<B: Bus>(&mut self, bus: &mut B, operand: Operand8) -> Option<u16> {
        match operand {
            Operand8::Reg(_) | Operand8::Imm8 => None,
            Operand8::Indirect(pair) => Some(self.regs.get16(pair)),
            Operand8::HlInc => {
                let addr = self.regs.hl;
                self.regs.hl = addr.wrapping_add(1);
                Some(addr)
            }
            Operand8::HlDec => {
                let addr = self.regs.hl;
                self.regs.hl = addr.wrapping_sub(1);
                Some(addr)
            }
            Operand8::Absolute => Some(self.imm16(bus)),
            Operand8::High => Some(0xFF00 | self.imm8(bus) as u16),
            Operand8::HighC => Some(0xFF00 | self.regs.c() as u16),
        }
    }

    pub(super) fn read_operand<B: Bus>(&mut self, bus: &mut B, operand: Operand8) -> u8 {
        match operand {
            Operand8::Reg(reg) => self.regs.get8(reg),
            Operand8::Imm8 => self.imm8(bus),
            _ => match self.operand_address(bus, operand) {
                Some(addr) => bus.read8(addr),
                None => unreachable!("{operand} has no address"),
            },
        }
    }

    pub(super) fn write_operand<B: Bus>(&mut self, bus: &mut B, operand: Operand8, value: u8) {
        match operand {
            Operand8::Reg(reg) => self.regs.set8(reg, value),
            Operand8::Imm8 => unreachable!("immediate operand is read-only"),
            _ => {
                if let Some(addr) = self.operand_address(bus, operand) {
                    bus.write8(addr, value);
                }
            }
        }
    }

    /// Read-modify-write on an operand. Used by INC/DEC and the prefixed
    /// block, whose memory operand is always `(HL)`, so resolving the address
    /// twice is side-effect free.
    pub(super) fn modify_operand<B: Bus>(
        &mut self,
        bus: &mut B,
        operand: Operand8,
        f: impl FnOnce(u8, Flags) -> (u8, Flags),
    ) {
        let value = self.read_operand(bus, operand);
        let (result, flags) = f(value, self.flags());
        self.write_operand(bus, operand, result);
        self.set_flags(flags);
    }

    /// Push a word: SP is decremented by two, then the high byte lands at
    /// SP+1 and the low byte at SP.
    #[inline]
    pub(super) fn push_u16<B: Bus>(&mut self, bus: &mut B, value: u16) {
        let [lo, hi] = value.to_le_bytes();
        self.regs.sp = self.regs.sp.wrapping_sub(1);
        bus.write8(self.regs.sp, hi);
        self.regs.sp = self.regs.sp.wrapping_sub(1);
        bus.write8(self.regs.sp, lo);
    }

    /// Pop a word: read at SP, then SP is incremented by two.
    #[inline]
    pub(super) fn pop_u16<B: Bus>(&mut self, bus: &mut B) -> u16 {
        let value = bus.read16(self.regs.sp);
        self.regs.sp = self.regs.sp.wrapping_add(2);
        value
    }

    #[inline]
    pub(super) fn condition(&self, cond: Cond) -> bool {
        match cond {
            Cond::Always => true,
            Cond::NotZero => !self.get_flag(Flags::Z),
            Cond::Zero => self.get_flag(Flags::Z),
            Cond::NotCarry => !self.get_flag(Flags::C),
            Cond::Carry => self.get_flag(Flags::C),
        }
    }

    #[inline]
    pub(super) fn pair(&self, pair: Reg16) -> u16 {
        self.regs.get16(pair)
    }
}
