use thiserror::Error;

/// Opcode without an entry in its metadata table.
///
/// Executing past one would run undefined behaviour, so the CPU state is
/// left exactly as it was at fetch time and the driver stops.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum DecodeError {
    #[error("unknown opcode 0x{opcode:02X} at PC=0x{pc:04X}")]
    UnknownOpcode { opcode: u8, pc: u16 },
    #[error("unknown prefixed opcode 0xCB 0x{opcode:02X} at PC=0x{pc:04X}")]
    UnknownPrefixedOpcode { opcode: u8, pc: u16 },
}

impl DecodeError {
    /// The offending opcode byte (the byte after the prefix for prefixed ones).
    pub fn opcode(&self) -> u8 {
        match *self {
            DecodeError::UnknownOpcode { opcode, .. }
            | DecodeError::UnknownPrefixedOpcode { opcode, .. } => opcode,
        }
    }

    /// Address of the instruction being fetched.
    pub fn pc(&self) -> u16 {
        match *self {
            DecodeError::UnknownOpcode { pc, .. } | DecodeError::UnknownPrefixedOpcode { pc, .. } => {
                pc
            }
        }
    }
}

/// Cartridge image rejected before any instruction executes.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum LoadError {
    #[error("ROM image is {size} bytes, too small to contain a cartridge header (0x150 bytes)")]
    TooSmall { size: usize },
    #[error("ROM image is {size} bytes, larger than the 32 KiB a ROM ONLY cartridge can map")]
    TooLarge { size: usize },
    #[error("unsupported cartridge type 0x{code:02X} ({name}); only ROM ONLY cartridges are supported")]
    UnsupportedType { code: u8, name: &'static str },
}
