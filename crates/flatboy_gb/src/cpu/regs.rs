use bitflags::bitflags;

use crate::instructions::{Reg16, Reg8};

/// High byte of a 16-bit register word.
#[inline]
pub const fn high(word: u16) -> u8 {
    (word >> 8) as u8
}

/// Low byte of a 16-bit register word.
#[inline]
pub const fn low(word: u16) -> u8 {
    (word & 0x00FF) as u8
}

/// Replace the high byte of `word`.
#[inline]
pub const fn set_high(word: u16, byte: u8) -> u16 {
    (word & 0x00FF) | ((byte as u16) << 8)
}

/// Replace the low byte of `word`.
#[inline]
pub const fn set_low(word: u16, byte: u8) -> u16 {
    (word & 0xFF00) | byte as u16
}

bitflags! {
    /// Flag bits in the F register (the low byte of AF).
    ///
    /// Layout (bit index in the byte, from MSB to LSB):
    /// - bit 7: Z (zero)
    /// - bit 6: N (subtract)
    /// - bit 5: H (half carry)
    /// - bit 4: C (carry)
    /// - bits 0–3 are always zero.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Flags: u8 {
        const Z = 1 << 7;
        const N = 1 << 6;
        const H = 1 << 5;
        const C = 1 << 4;
    }
}

impl Flags {
    /// Build a flag byte from four individual bits.
    #[inline]
    pub fn from_zhnc(z: bool, n: bool, h: bool, c: bool) -> Self {
        let mut flags = Flags::empty();
        flags.set(Flags::Z, z);
        flags.set(Flags::N, n);
        flags.set(Flags::H, h);
        flags.set(Flags::C, c);
        flags
    }
}

/// Register file for the Game Boy CPU (LR35902).
///
/// Every pair is stored as one 16-bit word. The 8-bit views (A, F, B, C, ...)
/// are computed with shifts and masks, so the layout does not depend on host
/// byte order. F is the low byte of AF and only its top nibble is meaningful.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Registers {
    pub af: u16,
    pub bc: u16,
    pub de: u16,
    pub hl: u16,
    pub sp: u16,
    pub pc: u16,
}

impl Registers {
    #[inline]
    pub fn a(&self) -> u8 {
        high(self.af)
    }

    #[inline]
    pub fn set_a(&mut self, value: u8) {
        self.af = set_high(self.af, value);
    }

    #[inline]
    pub fn flags(&self) -> Flags {
        Flags::from_bits_truncate(low(self.af))
    }

    /// Rewrite the whole flag byte. Bits 0–3 end up zero.
    #[inline]
    pub fn set_flags(&mut self, flags: Flags) {
        self.af = set_low(self.af, flags.bits());
    }

    #[inline]
    pub fn flag(&self, flag: Flags) -> bool {
        self.flags().contains(flag)
    }

    #[inline]
    pub fn b(&self) -> u8 {
        high(self.bc)
    }

    #[inline]
    pub fn set_b(&mut self, value: u8) {
        self.bc = set_high(self.bc, value);
    }

    #[inline]
    pub fn c(&self) -> u8 {
        low(self.bc)
    }

    #[inline]
    pub fn set_c(&mut self, value: u8) {
        self.bc = set_low(self.bc, value);
    }

    #[inline]
    pub fn d(&self) -> u8 {
        high(self.de)
    }

    #[inline]
    pub fn set_d(&mut self, value: u8) {
        self.de = set_high(self.de, value);
    }

    #[inline]
    pub fn e(&self) -> u8 {
        low(self.de)
    }

    #[inline]
    pub fn set_e(&mut self, value: u8) {
        self.de = set_low(self.de, value);
    }

    #[inline]
    pub fn h(&self) -> u8 {
        high(self.hl)
    }

    #[inline]
    pub fn set_h(&mut self, value: u8) {
        self.hl = set_high(self.hl, value);
    }

    #[inline]
    pub fn l(&self) -> u8 {
        low(self.hl)
    }

    #[inline]
    pub fn set_l(&mut self, value: u8) {
        self.hl = set_low(self.hl, value);
    }

    pub fn get8(&self, reg: Reg8) -> u8 {
        match reg {
            Reg8::A => self.a(),
            Reg8::B => self.b(),
            Reg8::C => self.c(),
            Reg8::D => self.d(),
            Reg8::E => self.e(),
            Reg8::H => self.h(),
            Reg8::L => self.l(),
        }
    }

    pub fn set8(&mut self, reg: Reg8, value: u8) {
        match reg {
            Reg8::A => self.set_a(value),
            Reg8::B => self.set_b(value),
            Reg8::C => self.set_c(value),
            Reg8::D => self.set_d(value),
            Reg8::E => self.set_e(value),
            Reg8::H => self.set_h(value),
            Reg8::L => self.set_l(value),
        }
    }

    pub fn get16(&self, reg: Reg16) -> u16 {
        match reg {
            Reg16::AF => self.af,
            Reg16::BC => self.bc,
            Reg16::DE => self.de,
            Reg16::HL => self.hl,
            Reg16::SP => self.sp,
        }
    }

    /// Write a register pair as an instruction would.
    ///
    /// Writing AF goes through the flag byte, so the low nibble of F is
    /// forced to zero.
    pub fn set16(&mut self, reg: Reg16, value: u16) {
        match reg {
            Reg16::AF => self.af = value & 0xFFF0,
            Reg16::BC => self.bc = value,
            Reg16::DE => self.de = value,
            Reg16::HL => self.hl = value,
            Reg16::SP => self.sp = value,
        }
    }
}
