//! Flag-computing arithmetic for the LR35902.
//!
//! Every function is pure: it takes the operands (and the incoming flags
//! where some bits are preserved) and returns the result together with the
//! complete new flag byte. The CPU writes both back.

use crate::instructions::ShiftOp;

use super::Flags;

/// 8-bit ADD/ADC.
///
/// `carry_in` selects between ADD (false) and ADC (true with C set).
pub fn add8(a: u8, b: u8, carry_in: bool) -> (u8, Flags) {
    let c = carry_in as u8;
    let half = (a & 0x0F) + (b & 0x0F) + c;
    let full = a as u16 + b as u16 + c as u16;
    let result = full as u8;

    let flags = Flags::from_zhnc(result == 0, false, half > 0x0F, full > 0xFF);
    (result, flags)
}

/// 8-bit SUB/SBC.
pub fn sub8(a: u8, b: u8, carry_in: bool) -> (u8, Flags) {
    let c = carry_in as i16;
    let half = (a & 0x0F) as i16 - (b & 0x0F) as i16 - c;
    let full = a as i16 - b as i16 - c;
    let result = full as u8;

    let flags = Flags::from_zhnc(result == 0, true, half < 0, full < 0);
    (result, flags)
}

/// Compare: flags of `a - b`, the accumulator is left alone.
#[inline]
pub fn cp8(a: u8, b: u8) -> Flags {
    sub8(a, b, false).1
}

#[inline]
pub fn and8(a: u8, b: u8) -> (u8, Flags) {
    let result = a & b;
    (result, Flags::from_zhnc(result == 0, false, true, false))
}

#[inline]
pub fn or8(a: u8, b: u8) -> (u8, Flags) {
    let result = a | b;
    (result, Flags::from_zhnc(result == 0, false, false, false))
}

#[inline]
pub fn xor8(a: u8, b: u8) -> (u8, Flags) {
    let result = a ^ b;
    (result, Flags::from_zhnc(result == 0, false, false, false))
}

/// INC r / INC (HL). C is preserved.
#[inline]
pub fn inc8(value: u8, flags: Flags) -> (u8, Flags) {
    let result = value.wrapping_add(1);
    let carry = flags.contains(Flags::C);
    (
        result,
        Flags::from_zhnc(result == 0, false, (value & 0x0F) == 0x0F, carry),
    )
}

/// DEC r / DEC (HL). C is preserved.
#[inline]
pub fn dec8(value: u8, flags: Flags) -> (u8, Flags) {
    let result = value.wrapping_sub(1);
    let carry = flags.contains(Flags::C);
    (
        result,
        Flags::from_zhnc(result == 0, true, (value & 0x0F) == 0, carry),
    )
}

/// 16-bit add for `ADD HL,rr`.
///
/// Z is preserved and N cleared. H reports a carry past the low eleven bits
/// and C a carry out of bit 15.
pub fn add16(a: u16, b: u16, flags: Flags) -> (u16, Flags) {
    let result = a.wrapping_add(b);
    let half = (a & 0x07FF) + (b & 0x07FF) > 0x07FF;
    let carry = a as u32 + b as u32 > 0xFFFF;
    (
        result,
        Flags::from_zhnc(flags.contains(Flags::Z), false, half, carry),
    )
}

/// Signed 8-bit offset added to a 16-bit base, as used by `ADD SP,r8` and
/// `LD HL,SP+r8`.
///
/// Z and N are cleared; H and C come from the unsigned add of the low byte.
pub fn add16_signed(base: u16, imm8: u8) -> (u16, Flags) {
    let offset = imm8 as i8 as i16 as u16;
    let half = (base & 0x000F) + (offset & 0x000F) > 0x000F;
    let carry = (base & 0x00FF) + (offset & 0x00FF) > 0x00FF;
    (
        base.wrapping_add(offset),
        Flags::from_zhnc(false, false, half, carry),
    )
}

/// Decimal adjust accumulator after BCD addition/subtraction.
///
/// Uses C, H, N and A to compute a correction value. Updates Z, H, C and
/// leaves N unchanged.
pub fn daa(a: u8, flags: Flags) -> (u8, Flags) {
    let subtract = flags.contains(Flags::N);
    let mut adjust: u8 = if flags.contains(Flags::C) { 0x60 } else { 0x00 };
    if flags.contains(Flags::H) {
        adjust |= 0x06;
    }

    let result = if !subtract {
        if (a & 0x0F) > 0x09 {
            adjust |= 0x06;
        }
        if a > 0x99 {
            adjust |= 0x60;
        }
        a.wrapping_add(adjust)
    } else {
        a.wrapping_sub(adjust)
    };

    (
        result,
        Flags::from_zhnc(result == 0, subtract, false, adjust >= 0x60),
    )
}

/// Complement A. Sets N and H; Z and C are preserved.
#[inline]
pub fn cpl(a: u8, flags: Flags) -> (u8, Flags) {
    (!a, flags | Flags::N | Flags::H)
}

/// SCF: set carry, clear N and H.
#[inline]
pub fn scf(flags: Flags) -> Flags {
    (flags & Flags::Z) | Flags::C
}

/// CCF: invert carry, clear N and H.
#[inline]
pub fn ccf(flags: Flags) -> Flags {
    let mut next = flags & (Flags::Z | Flags::C);
    next.toggle(Flags::C);
    next
}

/// Exchange the two nibbles of a byte.
#[inline]
pub fn swap(value: u8) -> (u8, Flags) {
    let result = value.rotate_left(4);
    (result, Flags::from_zhnc(result == 0, false, false, false))
}

/// Rotate/shift used by the prefixed block.
///
/// Z reflects the result, N and H are cleared, C receives the bit shifted
/// out. Only the incoming C is read (by RL and RR).
pub fn shift(op: ShiftOp, value: u8, flags: Flags) -> (u8, Flags) {
    let carry_in = flags.contains(Flags::C);
    let (result, carry_out) = match op {
        ShiftOp::Rlc => (value.rotate_left(1), value & 0x80 != 0),
        ShiftOp::Rrc => (value.rotate_right(1), value & 0x01 != 0),
        ShiftOp::Rl => ((value << 1) | carry_in as u8, value & 0x80 != 0),
        ShiftOp::Rr => ((value >> 1) | ((carry_in as u8) << 7), value & 0x01 != 0),
        ShiftOp::Sla => (value << 1, value & 0x80 != 0),
        ShiftOp::Sra => ((value >> 1) | (value & 0x80), value & 0x01 != 0),
        ShiftOp::Swap => return swap(value),
        ShiftOp::Srl => (value >> 1, value & 0x01 != 0),
    };
    (
        result,
        Flags::from_zhnc(result == 0, false, false, carry_out),
    )
}

/// Unprefixed accumulator rotates (RLCA, RRCA, RLA, RRA).
///
/// Same as the prefixed forms except Z is always cleared.
#[inline]
pub fn rotate_a(op: ShiftOp, a: u8, flags: Flags) -> (u8, Flags) {
    let (result, next) = shift(op, a, flags);
    (result, next - Flags::Z)
}

/// BIT b: Z set when the bit is clear, N cleared, H set, C preserved.
#[inline]
pub fn bit(index: u8, value: u8, flags: Flags) -> Flags {
    let set = value & (1 << index) != 0;
    Flags::from_zhnc(!set, false, true, flags.contains(Flags::C))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_overflow_sets_zero_half_and_carry() {
        let (result, flags) = add8(0xFF, 0x01, false);
        assert_eq!(result, 0x00);
        assert_eq!(flags, Flags::Z | Flags::H | Flags::C);
    }

    #[test]
    fn add_half_carry_only() {
        let (result, flags) = add8(0x08, 0x08, false);
        assert_eq!(result, 0x10);
        assert_eq!(flags, Flags::H);
    }

    #[test]
    fn adc_includes_carry_in() {
        let (result, flags) = add8(0x0E, 0x01, true);
        assert_eq!(result, 0x10);
        assert_eq!(flags, Flags::H);

        let (result, flags) = add8(0xFE, 0x01, true);
        assert_eq!(result, 0x00);
        assert_eq!(flags, Flags::Z | Flags::H | Flags::C);
    }

    #[test]
    fn cp_borrows_from_both_nibbles() {
        let flags = cp8(0x04, 0x08);
        assert!(!flags.contains(Flags::Z));
        assert!(flags.contains(Flags::N));
        assert!(flags.contains(Flags::H));
        assert!(flags.contains(Flags::C));
    }

    #[test]
    fn cp_equal_sets_zero_only() {
        assert_eq!(cp8(0x42, 0x42), Flags::Z | Flags::N);
    }

    #[test]
    fn cp_half_borrow_without_full_borrow() {
        // 0x10 - 0x21: low nibble 0 < 1, and 0x10 < 0x21.
        assert_eq!(cp8(0x10, 0x21), Flags::N | Flags::H | Flags::C);
        // 0x20 - 0x01: only the nibble borrows.
        assert_eq!(cp8(0x20, 0x01), Flags::N | Flags::H);
    }

    #[test]
    fn sbc_includes_carry_in() {
        let (result, flags) = sub8(0x10, 0x0F, true);
        assert_eq!(result, 0x00);
        assert_eq!(flags, Flags::Z | Flags::N | Flags::H);
    }

    #[test]
    fn logic_ops_overwrite_every_flag() {
        assert_eq!(and8(0xF0, 0x0F), (0x00, Flags::Z | Flags::H));
        assert_eq!(and8(0xFF, 0x0F), (0x0F, Flags::H));
        assert_eq!(or8(0x00, 0x00), (0x00, Flags::Z));
        assert_eq!(or8(0x10, 0x01), (0x11, Flags::empty()));
        assert_eq!(xor8(0x5A, 0x5A), (0x00, Flags::Z));
    }

    #[test]
    fn inc_and_dec_preserve_carry() {
        assert_eq!(inc8(0x0F, Flags::C), (0x10, Flags::H | Flags::C));
        assert_eq!(inc8(0xFF, Flags::empty()), (0x00, Flags::Z | Flags::H));
        assert_eq!(dec8(0x10, Flags::C), (0x0F, Flags::N | Flags::H | Flags::C));
        assert_eq!(dec8(0x01, Flags::empty()), (0x00, Flags::Z | Flags::N));
    }

    #[test]
    fn inc_then_dec_restores_every_value() {
        for value in 0..=u8::MAX {
            let (incremented, inc_flags) = inc8(value, Flags::empty());
            assert_eq!(inc_flags.contains(Flags::Z), incremented == 0);
            assert_eq!(inc_flags.contains(Flags::H), value & 0x0F == 0x0F);

            let (restored, dec_flags) = dec8(incremented, inc_flags);
            assert_eq!(restored, value);
            assert_eq!(dec_flags.contains(Flags::Z), value == 0);
            assert_eq!(dec_flags.contains(Flags::H), incremented & 0x0F == 0);
            assert!(dec_flags.contains(Flags::N));
        }
    }

    #[test]
    fn add16_preserves_zero_and_reports_carries() {
        let (result, flags) = add16(0xFFFF, 0x0001, Flags::Z | Flags::N);
        assert_eq!(result, 0x0000);
        assert_eq!(flags, Flags::Z | Flags::H | Flags::C);

        let (result, flags) = add16(0x0100, 0x0100, Flags::empty());
        assert_eq!(result, 0x0200);
        assert_eq!(flags, Flags::empty());
    }

    #[test]
    fn add16_half_carry_uses_low_eleven_bits() {
        let (_, flags) = add16(0x07FF, 0x0001, Flags::empty());
        assert_eq!(flags, Flags::H);
        let (_, flags) = add16(0x0800, 0x0800, Flags::empty());
        assert_eq!(flags, Flags::empty());
    }

    #[test]
    fn add16_signed_uses_low_byte_carries() {
        assert_eq!(add16_signed(0xFFF8, 0x08), (0x0000, Flags::H | Flags::C));
        assert_eq!(add16_signed(0x0000, 0xFF), (0xFFFF, Flags::empty()));
        assert_eq!(add16_signed(0x00FF, 0x01), (0x0100, Flags::H | Flags::C));
    }

    #[test]
    fn daa_after_addition_and_subtraction() {
        // 0x15 + 0x27 = 0x3C, adjusted to BCD 42.
        let (sum, flags) = add8(0x15, 0x27, false);
        assert_eq!(daa(sum, flags), (0x42, Flags::empty()));

        // 0x99 + 0x01 = 0x9A, adjusted to 00 with carry.
        let (sum, flags) = add8(0x99, 0x01, false);
        assert_eq!(daa(sum, flags), (0x00, Flags::Z | Flags::C));

        // 0x42 - 0x15 = 0x2D, adjusted to BCD 27.
        let (diff, flags) = sub8(0x42, 0x15, false);
        assert_eq!(daa(diff, flags), (0x27, Flags::N));
    }

    #[test]
    fn cpl_sets_subtract_and_half_carry() {
        assert_eq!(cpl(0x35, Flags::Z), (0xCA, Flags::Z | Flags::N | Flags::H));
        assert_eq!(cpl(0x00, Flags::C), (0xFF, Flags::N | Flags::H | Flags::C));
    }

    #[test]
    fn scf_and_ccf() {
        assert_eq!(scf(Flags::Z | Flags::N | Flags::H), Flags::Z | Flags::C);
        assert_eq!(ccf(Flags::C | Flags::H), Flags::empty());
        assert_eq!(ccf(Flags::Z | Flags::N), Flags::Z | Flags::C);
    }

    #[test]
    fn swap_exchanges_nibbles_and_clears_carry() {
        assert_eq!(swap(0xF1), (0x1F, Flags::empty()));
        assert_eq!(swap(0x00), (0x00, Flags::Z));
        assert_eq!(shift(ShiftOp::Swap, 0xAB, Flags::C), (0xBA, Flags::empty()));
    }

    #[test]
    fn shifts_move_bits_through_carry() {
        assert_eq!(shift(ShiftOp::Rlc, 0x85, Flags::empty()), (0x0B, Flags::C));
        assert_eq!(shift(ShiftOp::Rrc, 0x01, Flags::empty()), (0x80, Flags::C));
        assert_eq!(shift(ShiftOp::Rl, 0x80, Flags::empty()), (0x00, Flags::Z | Flags::C));
        assert_eq!(shift(ShiftOp::Rl, 0x00, Flags::C), (0x01, Flags::empty()));
        assert_eq!(shift(ShiftOp::Rr, 0x01, Flags::C), (0x80, Flags::C));
        assert_eq!(shift(ShiftOp::Sla, 0xC0, Flags::empty()), (0x80, Flags::C));
        assert_eq!(shift(ShiftOp::Sra, 0x81, Flags::empty()), (0xC0, Flags::C));
        assert_eq!(shift(ShiftOp::Srl, 0x01, Flags::empty()), (0x00, Flags::Z | Flags::C));
    }

    #[test]
    fn accumulator_rotates_clear_zero() {
        assert_eq!(rotate_a(ShiftOp::Rl, 0x80, Flags::empty()), (0x00, Flags::C));
        assert_eq!(rotate_a(ShiftOp::Rrc, 0x00, Flags::Z), (0x00, Flags::empty()));
    }

    #[test]
    fn bit_test_keeps_carry() {
        assert_eq!(bit(7, 0x7F, Flags::C), Flags::Z | Flags::H | Flags::C);
        assert_eq!(bit(0, 0x01, Flags::N), Flags::H);
    }
}
