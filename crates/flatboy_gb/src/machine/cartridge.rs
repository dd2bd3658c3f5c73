use std::fmt;

use crate::error::LoadError;

use super::ROM_WINDOW_SIZE;

const TITLE_START: usize = 0x134;
const TITLE_END: usize = 0x144;
const TYPE_OFFSET: usize = 0x147;
const HEADER_CHECKSUM_OFFSET: usize = 0x14D;

/// First byte past the cartridge header.
pub const HEADER_END: usize = 0x150;

/// Controller type byte stored at 0x147 of the cartridge header.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CartridgeType(pub u8);

impl CartridgeType {
    pub const ROM_ONLY: CartridgeType = CartridgeType(0x00);

    pub fn code(self) -> u8 {
        self.0
    }

    /// Only cartridges without a bank controller can be mapped.
    pub fn is_supported(self) -> bool {
        self == Self::ROM_ONLY
    }

    /// Name as printed in the Pan Docs header table.
    pub fn name(self) -> &'static str {
        match self.0 {
            0x00 => "ROM ONLY",
            0x01 => "MBC1",
            0x02 => "MBC1+RAM",
            0x03 => "MBC1+RAM+BATTERY",
            0x05 => "MBC2",
            0x06 => "MBC2+BATTERY",
            0x08 => "ROM+RAM",
            0x09 => "ROM+RAM+BATTERY",
            0x0B => "MMM01",
            0x0C => "MMM01+RAM",
            0x0D => "MMM01+RAM+BATTERY",
            0x0F => "MBC3+TIMER+BATTERY",
            0x10 => "MBC3+TIMER+RAM+BATTERY",
            0x11 => "MBC3",
            0x12 => "MBC3+RAM",
            0x13 => "MBC3+RAM+BATTERY",
            0x19 => "MBC5",
            0x1A => "MBC5+RAM",
            0x1B => "MBC5+RAM+BATTERY",
            0x1C => "MBC5+RUMBLE",
            0x1D => "MBC5+RUMBLE+RAM",
            0x1E => "MBC5+RUMBLE+RAM+BATTERY",
            0x20 => "MBC6",
            0x22 => "MBC7+SENSOR+RUMBLE+RAM+BATTERY",
            0xFC => "POCKET CAMERA",
            0xFD => "BANDAI TAMA5",
            0xFE => "HuC3",
            0xFF => "HuC1+RAM+BATTERY",
            _ => "unknown",
        }
    }
}

impl fmt::Display for CartridgeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (0x{:02X})", self.name(), self.0)
    }
}

/// A validated ROM-only cartridge image.
///
/// Construction checks the header before anything else sees the bytes, so a
/// `Cartridge` value is always safe to map into memory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cartridge {
    rom: Vec<u8>,
}

impl Cartridge {
    pub fn new(rom: Vec<u8>) -> Result<Self, LoadError> {
        if rom.len() < HEADER_END {
            return Err(LoadError::TooSmall { size: rom.len() });
        }

        let kind = CartridgeType(rom[TYPE_OFFSET]);
        if !kind.is_supported() {
            return Err(LoadError::UnsupportedType {
                code: kind.code(),
                name: kind.name(),
            });
        }

        if rom.len() > ROM_WINDOW_SIZE {
            return Err(LoadError::TooLarge { size: rom.len() });
        }

        let cartridge = Self { rom };
        log::info!(
            "Loaded cartridge '{}': {}, {} bytes",
            cartridge.title(),
            kind,
            cartridge.rom.len()
        );
        if !cartridge.header_checksum_ok() {
            log::warn!(
                "Header checksum mismatch: stored 0x{:02X}, computed 0x{:02X}",
                cartridge.rom[HEADER_CHECKSUM_OFFSET],
                cartridge.computed_header_checksum()
            );
        }
        Ok(cartridge)
    }

    /// Raw ROM bytes.
    pub fn data(&self) -> &[u8] {
        &self.rom
    }

    pub fn len(&self) -> usize {
        self.rom.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rom.is_empty()
    }

    pub fn kind(&self) -> CartridgeType {
        CartridgeType(self.rom[TYPE_OFFSET])
    }

    /// Game title from the header, cut at the first NUL byte.
    pub fn title(&self) -> String {
        let raw = &self.rom[TITLE_START..TITLE_END];
        let end = raw.iter().position(|&b| b == 0).unwrap_or(raw.len());
        String::from_utf8_lossy(&raw[..end]).trim_end().to_string()
    }

    pub fn header_checksum_ok(&self) -> bool {
        self.rom[HEADER_CHECKSUM_OFFSET] == self.computed_header_checksum()
    }

    fn computed_header_checksum(&self) -> u8 {
        header_checksum(&self.rom)
    }
}

/// Header checksum over 0x134..=0x14C, as the boot ROM verifies it.
pub(super) fn header_checksum(rom: &[u8]) -> u8 {
    rom[TITLE_START..HEADER_CHECKSUM_OFFSET]
        .iter()
        .fold(0u8, |x, &byte| x.wrapping_sub(byte).wrapping_sub(1))
}
