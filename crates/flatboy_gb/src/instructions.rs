//! Static instruction metadata for the LR35902.
//!
//! Two 256-entry tables map an opcode byte to its length, cycle cost and
//! operation tag: one for the primary opcode space and one for the space
//! reached through the `0xCB` prefix. Undefined opcodes have no entry.
//!
//! Cycle counts are clock cycles (four per machine cycle). Conditional
//! control flow carries a second cost for the not-taken path.

use std::fmt;

use lazy_static::lazy_static;

/// Opcode that switches decoding to the prefixed table.
pub const PREFIX_OPCODE: u8 = 0xCB;

/// 8-bit registers addressable by instructions. F is not one of them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Reg8 {
    A,
    B,
    C,
    D,
    E,
    H,
    L,
}

/// 16-bit register pairs plus SP.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Reg16 {
    AF,
    BC,
    DE,
    HL,
    SP,
}

/// Addressing mode of an 8-bit operand.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operand8 {
    Reg(Reg8),
    /// Memory addressed by a register pair: `(BC)`, `(DE)`, `(HL)`.
    Indirect(Reg16),
    /// `(HL+)`: memory at HL, HL incremented afterwards.
    HlInc,
    /// `(HL-)`: memory at HL, HL decremented afterwards.
    HlDec,
    /// Byte following the opcode.
    Imm8,
    /// Memory at the 16-bit address following the opcode.
    Absolute,
    /// High RAM fast path: memory at `0xFF00 + n`, `n` following the opcode.
    High,
    /// Memory at `0xFF00 + C`.
    HighC,
}

impl Operand8 {
    pub const A: Operand8 = Operand8::Reg(Reg8::A);
    pub const HL_INDIRECT: Operand8 = Operand8::Indirect(Reg16::HL);
}

/// Branch condition evaluated against a single flag bit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Cond {
    Always,
    NotZero,
    Zero,
    NotCarry,
    Carry,
}

/// Accumulator operations of the `0x80..=0xBF` block and their immediates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AluOp {
    Add,
    Adc,
    Sub,
    Sbc,
    And,
    Xor,
    Or,
    Cp,
}

/// Rotate and shift operations (prefixed block `0x00..=0x3F`, and the four
/// unprefixed accumulator rotates).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShiftOp {
    Rlc,
    Rrc,
    Rl,
    Rr,
    Sla,
    Sra,
    Swap,
    Srl,
}

/// Operations of the prefixed opcode space.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CbOp {
    Shift(ShiftOp, Operand8),
    Bit(u8, Operand8),
    Res(u8, Operand8),
    Set(u8, Operand8),
}

/// Operation tag of a metadata entry, with its operands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Op {
    Nop,
    Halt,
    Stop,
    Di,
    Ei,
    /// 8-bit load between any two [`Operand8`]s.
    Ld8 {
        dst: Operand8,
        src: Operand8,
    },
    /// `LD rr, d16`
    Ld16Imm(Reg16),
    /// `LD (a16), SP`
    LdAbsSp,
    /// `LD SP, HL`
    LdSpHl,
    /// `LD HL, SP+r8`
    LdHlSpOffset,
    Alu(AluOp, Operand8),
    Inc8(Operand8),
    Dec8(Operand8),
    Inc16(Reg16),
    Dec16(Reg16),
    /// `ADD HL, rr`
    AddHl(Reg16),
    /// `ADD SP, r8`
    AddSpOffset,
    /// `RLCA`, `RRCA`, `RLA`, `RRA`
    RotateA(ShiftOp),
    Daa,
    Cpl,
    Scf,
    Ccf,
    Jp(Cond),
    JpHl,
    Jr(Cond),
    Call(Cond),
    Ret(Cond),
    Reti,
    /// Call to a fixed vector.
    Rst(u16),
    Push(Reg16),
    Pop(Reg16),
    /// Lead-in byte of the prefixed space.
    Prefix,
    Cb(CbOp),
}

/// One metadata entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Instruction {
    /// Bytes consumed including the opcode (and the prefix, if any).
    pub length: u8,
    /// Base cost; for conditional control flow the cost of the taken path.
    pub cycles: u8,
    /// Cost when a conditional branch falls through. Equal to `cycles` for
    /// everything else.
    pub cycles_not_taken: u8,
    pub op: Op,
}

impl Instruction {
    const fn fixed(op: Op, length: u8, cycles: u8) -> Self {
        Self {
            length,
            cycles,
            cycles_not_taken: cycles,
            op,
        }
    }

    const fn branch(op: Op, length: u8, taken: u8, not_taken: u8) -> Self {
        Self {
            length,
            cycles: taken,
            cycles_not_taken: not_taken,
            op,
        }
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.op.fmt(f)
    }
}

lazy_static! {
    static ref INSTRUCTIONS: [Option<Instruction>; 256] =
        std::array::from_fn(|opcode| decode_primary(opcode as u8));
    static ref PREFIXED_INSTRUCTIONS: [Option<Instruction>; 256] =
        std::array::from_fn(|opcode| decode_prefixed(opcode as u8));
}

/// Metadata for a primary opcode, or `None` for an opcode hole.
pub fn lookup(opcode: u8) -> Option<&'static Instruction> {
    INSTRUCTIONS[opcode as usize].as_ref()
}

/// Metadata for the byte following a `0xCB` prefix.
pub fn lookup_prefixed(opcode: u8) -> Option<&'static Instruction> {
    PREFIXED_INSTRUCTIONS[opcode as usize].as_ref()
}

/// Register/operand encoding shared by most opcode groups:
/// 0=B, 1=C, 2=D, 3=E, 4=H, 5=L, 6=(HL), 7=A.
fn r8(index: u8) -> Operand8 {
    match index & 0x07 {
        0 => Operand8::Reg(Reg8::B),
        1 => Operand8::Reg(Reg8::C),
        2 => Operand8::Reg(Reg8::D),
        3 => Operand8::Reg(Reg8::E),
        4 => Operand8::Reg(Reg8::H),
        5 => Operand8::Reg(Reg8::L),
        6 => Operand8::HL_INDIRECT,
        _ => Operand8::A,
    }
}

/// Register pair in bits 4–5, SP flavour (LD/INC/DEC/ADD HL).
fn rp(opcode: u8) -> Reg16 {
    match (opcode >> 4) & 0x03 {
        0 => Reg16::BC,
        1 => Reg16::DE,
        2 => Reg16::HL,
        _ => Reg16::SP,
    }
}

/// Register pair in bits 4–5, AF flavour (PUSH/POP).
fn rp2(opcode: u8) -> Reg16 {
    match (opcode >> 4) & 0x03 {
        0 => Reg16::BC,
        1 => Reg16::DE,
        2 => Reg16::HL,
        _ => Reg16::AF,
    }
}

/// Condition in bits 3–4.
fn cond(opcode: u8) -> Cond {
    match (opcode >> 3) & 0x03 {
        0 => Cond::NotZero,
        1 => Cond::Zero,
        2 => Cond::NotCarry,
        _ => Cond::Carry,
    }
}

fn alu_op(index: u8) -> AluOp {
    match index & 0x07 {
        0 => AluOp::Add,
        1 => AluOp::Adc,
        2 => AluOp::Sub,
        3 => AluOp::Sbc,
        4 => AluOp::And,
        5 => AluOp::Xor,
        6 => AluOp::Or,
        _ => AluOp::Cp,
    }
}

fn shift_op(index: u8) -> ShiftOp {
    match index & 0x07 {
        0 => ShiftOp::Rlc,
        1 => ShiftOp::Rrc,
        2 => ShiftOp::Rl,
        3 => ShiftOp::Rr,
        4 => ShiftOp::Sla,
        5 => ShiftOp::Sra,
        6 => ShiftOp::Swap,
        _ => ShiftOp::Srl,
    }
}

fn decode_primary(opcode: u8) -> Option<Instruction> {
    use Instruction as I;

    let y = (opcode >> 3) & 0x07;
    let z = opcode & 0x07;

    let instruction = match opcode {
        0x00 => I::fixed(Op::Nop, 1, 4),
        0x10 => I::fixed(Op::Stop, 2, 4),
        0x76 => I::fixed(Op::Halt, 1, 4),
        0xF3 => I::fixed(Op::Di, 1, 4),
        0xFB => I::fixed(Op::Ei, 1, 4),

        // Load family.
        0x01 | 0x11 | 0x21 | 0x31 => I::fixed(Op::Ld16Imm(rp(opcode)), 3, 12),
        0x02 | 0x12 => I::fixed(
            Op::Ld8 {
                dst: Operand8::Indirect(rp(opcode)),
                src: Operand8::A,
            },
            1,
            8,
        ),
        0x22 => I::fixed(
            Op::Ld8 {
                dst: Operand8::HlInc,
                src: Operand8::A,
            },
            1,
            8,
        ),
        0x32 => I::fixed(
            Op::Ld8 {
                dst: Operand8::HlDec,
                src: Operand8::A,
            },
            1,
            8,
        ),
        0x0A | 0x1A => I::fixed(
            Op::Ld8 {
                dst: Operand8::A,
                src: Operand8::Indirect(rp(opcode)),
            },
            1,
            8,
        ),
        0x2A => I::fixed(
            Op::Ld8 {
                dst: Operand8::A,
                src: Operand8::HlInc,
            },
            1,
            8,
        ),
        0x3A => I::fixed(
            Op::Ld8 {
                dst: Operand8::A,
                src: Operand8::HlDec,
            },
            1,
            8,
        ),
        0x06 | 0x0E | 0x16 | 0x1E | 0x26 | 0x2E | 0x36 | 0x3E => {
            let dst = r8(y);
            let cycles = if dst == Operand8::HL_INDIRECT { 12 } else { 8 };
            I::fixed(
                Op::Ld8 {
                    dst,
                    src: Operand8::Imm8,
                },
                2,
                cycles,
            )
        }
        0x40..=0x7F => {
            let (dst, src) = (r8(y), r8(z));
            let cycles = if y == 6 || z == 6 { 8 } else { 4 };
            I::fixed(Op::Ld8 { dst, src }, 1, cycles)
        }
        0x08 => I::fixed(Op::LdAbsSp, 3, 20),
        0xE0 => I::fixed(
            Op::Ld8 {
                dst: Operand8::High,
                src: Operand8::A,
            },
            2,
            12,
        ),
        0xF0 => I::fixed(
            Op::Ld8 {
                dst: Operand8::A,
                src: Operand8::High,
            },
            2,
            12,
        ),
        0xE2 => I::fixed(
            Op::Ld8 {
                dst: Operand8::HighC,
                src: Operand8::A,
            },
            1,
            8,
        ),
        0xF2 => I::fixed(
            Op::Ld8 {
                dst: Operand8::A,
                src: Operand8::HighC,
            },
            1,
            8,
        ),
        0xEA => I::fixed(
            Op::Ld8 {
                dst: Operand8::Absolute,
                src: Operand8::A,
            },
            3,
            16,
        ),
        0xFA => I::fixed(
            Op::Ld8 {
                dst: Operand8::A,
                src: Operand8::Absolute,
            },
            3,
            16,
        ),
        0xF8 => I::fixed(Op::LdHlSpOffset, 2, 12),
        0xF9 => I::fixed(Op::LdSpHl, 1, 8),

        // Arithmetic/logical family.
        0x03 | 0x13 | 0x23 | 0x33 => I::fixed(Op::Inc16(rp(opcode)), 1, 8),
        0x0B | 0x1B | 0x2B | 0x3B => I::fixed(Op::Dec16(rp(opcode)), 1, 8),
        0x04 | 0x0C | 0x14 | 0x1C | 0x24 | 0x2C | 0x34 | 0x3C => {
            let target = r8(y);
            let cycles = if y == 6 { 12 } else { 4 };
            I::fixed(Op::Inc8(target), 1, cycles)
        }
        0x05 | 0x0D | 0x15 | 0x1D | 0x25 | 0x2D | 0x35 | 0x3D => {
            let target = r8(y);
            let cycles = if y == 6 { 12 } else { 4 };
            I::fixed(Op::Dec8(target), 1, cycles)
        }
        0x09 | 0x19 | 0x29 | 0x39 => I::fixed(Op::AddHl(rp(opcode)), 1, 8),
        0xE8 => I::fixed(Op::AddSpOffset, 2, 16),
        0x07 | 0x0F | 0x17 | 0x1F => I::fixed(Op::RotateA(shift_op(y)), 1, 4),
        0x27 => I::fixed(Op::Daa, 1, 4),
        0x2F => I::fixed(Op::Cpl, 1, 4),
        0x37 => I::fixed(Op::Scf, 1, 4),
        0x3F => I::fixed(Op::Ccf, 1, 4),
        0x80..=0xBF => {
            let cycles = if z == 6 { 8 } else { 4 };
            I::fixed(Op::Alu(alu_op(y), r8(z)), 1, cycles)
        }
        0xC6 | 0xCE | 0xD6 | 0xDE | 0xE6 | 0xEE | 0xF6 | 0xFE => {
            I::fixed(Op::Alu(alu_op(y), Operand8::Imm8), 2, 8)
        }

        // Control-flow family.
        0x18 => I::fixed(Op::Jr(Cond::Always), 2, 12),
        0x20 | 0x28 | 0x30 | 0x38 => I::branch(Op::Jr(cond(opcode)), 2, 12, 8),
        0xC3 => I::fixed(Op::Jp(Cond::Always), 3, 16),
        0xC2 | 0xCA | 0xD2 | 0xDA => I::branch(Op::Jp(cond(opcode)), 3, 16, 12),
        0xE9 => I::fixed(Op::JpHl, 1, 4),
        0xCD => I::fixed(Op::Call(Cond::Always), 3, 24),
        0xC4 | 0xCC | 0xD4 | 0xDC => I::branch(Op::Call(cond(opcode)), 3, 24, 12),
        0xC9 => I::fixed(Op::Ret(Cond::Always), 1, 16),
        0xC0 | 0xC8 | 0xD0 | 0xD8 => I::branch(Op::Ret(cond(opcode)), 1, 20, 8),
        0xD9 => I::fixed(Op::Reti, 1, 16),
        0xC7 | 0xCF | 0xD7 | 0xDF | 0xE7 | 0xEF | 0xF7 | 0xFF => {
            I::fixed(Op::Rst((opcode & 0x38) as u16), 1, 16)
        }

        // Stack family.
        0xC5 | 0xD5 | 0xE5 | 0xF5 => I::fixed(Op::Push(rp2(opcode)), 1, 16),
        0xC1 | 0xD1 | 0xE1 | 0xF1 => I::fixed(Op::Pop(rp2(opcode)), 1, 12),

        PREFIX_OPCODE => I::fixed(Op::Prefix, 1, 4),

        // Opcode holes: D3, DB, DD, E3, E4, EB, EC, ED, F4, FC, FD.
        _ => return None,
    };

    Some(instruction)
}

fn decode_prefixed(opcode: u8) -> Option<Instruction> {
    let x = opcode >> 6;
    let y = (opcode >> 3) & 0x07;
    let z = opcode & 0x07;
    let target = r8(z);
    let memory = z == 6;

    let (op, cycles) = match x {
        0 => (CbOp::Shift(shift_op(y), target), if memory { 16 } else { 8 }),
        1 => (CbOp::Bit(y, target), if memory { 12 } else { 8 }),
        2 => (CbOp::Res(y, target), if memory { 16 } else { 8 }),
        _ => (CbOp::Set(y, target), if memory { 16 } else { 8 }),
    };

    Some(Instruction::fixed(Op::Cb(op), 2, cycles))
}

impl fmt::Display for Reg8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Reg8::A => "A",
            Reg8::B => "B",
            Reg8::C => "C",
            Reg8::D => "D",
            Reg8::E => "E",
            Reg8::H => "H",
            Reg8::L => "L",
        };
        f.write_str(name)
    }
}

impl fmt::Display for Reg16 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Reg16::AF => "AF",
            Reg16::BC => "BC",
            Reg16::DE => "DE",
            Reg16::HL => "HL",
            Reg16::SP => "SP",
        };
        f.write_str(name)
    }
}

impl fmt::Display for Operand8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand8::Reg(reg) => write!(f, "{reg}"),
            Operand8::Indirect(pair) => write!(f, "({pair})"),
            Operand8::HlInc => f.write_str("(HL+)"),
            Operand8::HlDec => f.write_str("(HL-)"),
            Operand8::Imm8 => f.write_str("d8"),
            Operand8::Absolute => f.write_str("(a16)"),
            Operand8::High => f.write_str("($FF00+a8)"),
            Operand8::HighC => f.write_str("($FF00+C)"),
        }
    }
}

impl fmt::Display for Cond {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Cond::Always => "",
            Cond::NotZero => "NZ",
            Cond::Zero => "Z",
            Cond::NotCarry => "NC",
            Cond::Carry => "C",
        };
        f.write_str(name)
    }
}

impl fmt::Display for AluOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AluOp::Add => "ADD",
            AluOp::Adc => "ADC",
            AluOp::Sub => "SUB",
            AluOp::Sbc => "SBC",
            AluOp::And => "AND",
            AluOp::Xor => "XOR",
            AluOp::Or => "OR",
            AluOp::Cp => "CP",
        };
        f.write_str(name)
    }
}

impl fmt::Display for ShiftOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ShiftOp::Rlc => "RLC",
            ShiftOp::Rrc => "RRC",
            ShiftOp::Rl => "RL",
            ShiftOp::Rr => "RR",
            ShiftOp::Sla => "SLA",
            ShiftOp::Sra => "SRA",
            ShiftOp::Swap => "SWAP",
            ShiftOp::Srl => "SRL",
        };
        f.write_str(name)
    }
}

/// Write `MNEMONIC` or `MNEMONIC cc, operand` with the comma only when a
/// condition is present.
fn write_conditional(f: &mut fmt::Formatter<'_>, name: &str, cond: Cond, operand: &str) -> fmt::Result {
    match (cond, operand.is_empty()) {
        (Cond::Always, true) => f.write_str(name),
        (Cond::Always, false) => write!(f, "{name} {operand}"),
        (cond, true) => write!(f, "{name} {cond}"),
        (cond, false) => write!(f, "{name} {cond}, {operand}"),
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Op::Nop => f.write_str("NOP"),
            Op::Halt => f.write_str("HALT"),
            Op::Stop => f.write_str("STOP"),
            Op::Di => f.write_str("DI"),
            Op::Ei => f.write_str("EI"),
            Op::Ld8 { dst, src } => write!(f, "LD {dst}, {src}"),
            Op::Ld16Imm(pair) => write!(f, "LD {pair}, d16"),
            Op::LdAbsSp => f.write_str("LD (a16), SP"),
            Op::LdSpHl => f.write_str("LD SP, HL"),
            Op::LdHlSpOffset => f.write_str("LD HL, SP+r8"),
            Op::Alu(op, operand) => write!(f, "{op} A, {operand}"),
            Op::Inc8(operand) => write!(f, "INC {operand}"),
            Op::Dec8(operand) => write!(f, "DEC {operand}"),
            Op::Inc16(pair) => write!(f, "INC {pair}"),
            Op::Dec16(pair) => write!(f, "DEC {pair}"),
            Op::AddHl(pair) => write!(f, "ADD HL, {pair}"),
            Op::AddSpOffset => f.write_str("ADD SP, r8"),
            Op::RotateA(op) => write!(f, "{op}A"),
            Op::Daa => f.write_str("DAA"),
            Op::Cpl => f.write_str("CPL"),
            Op::Scf => f.write_str("SCF"),
            Op::Ccf => f.write_str("CCF"),
            Op::Jp(cond) => write_conditional(f, "JP", *cond, "a16"),
            Op::JpHl => f.write_str("JP HL"),
            Op::Jr(cond) => write_conditional(f, "JR", *cond, "r8"),
            Op::Call(cond) => write_conditional(f, "CALL", *cond, "a16"),
            Op::Ret(cond) => write_conditional(f, "RET", *cond, ""),
            Op::Reti => f.write_str("RETI"),
            Op::Rst(vector) => write!(f, "RST ${vector:02X}"),
            Op::Push(pair) => write!(f, "PUSH {pair}"),
            Op::Pop(pair) => write!(f, "POP {pair}"),
            Op::Prefix => f.write_str("PREFIX CB"),
            Op::Cb(CbOp::Shift(op, operand)) => write!(f, "{op} {operand}"),
            Op::Cb(CbOp::Bit(bit, operand)) => write!(f, "BIT {bit}, {operand}"),
            Op::Cb(CbOp::Res(bit, operand)) => write!(f, "RES {bit}, {operand}"),
            Op::Cb(CbOp::Set(bit, operand)) => write!(f, "SET {bit}, {operand}"),
        }
    }
}
