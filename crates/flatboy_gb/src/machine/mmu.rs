use crate::cpu::Bus;

use super::{Cartridge, MEMORY_SIZE, ROM_WINDOW_SIZE};

/// Flat 64 KiB memory image.
///
/// The cartridge is copied into the low 32 KiB once at construction; all
/// other addresses start zeroed and read back whatever was last written.
#[derive(Clone)]
pub struct Mmu {
    memory: Box<[u8; MEMORY_SIZE]>,
}

impl Default for Mmu {
    fn default() -> Self {
        Self {
            memory: Box::new([0; MEMORY_SIZE]),
        }
    }
}

impl std::fmt::Debug for Mmu {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Mmu").finish_non_exhaustive()
    }
}

impl Mmu {
    pub fn new(cartridge: &Cartridge) -> Self {
        let mut mmu = Self::default();
        mmu.load_rom(cartridge.data());
        mmu
    }

    /// Copy `rom` into the ROM window starting at 0x0000. Bytes past the
    /// 32 KiB window are ignored.
    pub fn load_rom(&mut self, rom: &[u8]) {
        let len = rom.len().min(ROM_WINDOW_SIZE);
        self.memory[..len].copy_from_slice(&rom[..len]);
    }

    #[inline]
    pub fn read8(&self, addr: u16) -> u8 {
        self.memory[addr as usize]
    }

    #[inline]
    pub fn write8(&mut self, addr: u16, value: u8) {
        self.memory[addr as usize] = value;
    }

    /// Little-endian word read. At 0xFFFF the high byte comes from 0x0000.
    pub fn read16(&self, addr: u16) -> u16 {
        u16::from_le_bytes([self.read8(addr), self.read8(addr.wrapping_add(1))])
    }

    /// Little-endian word write. At 0xFFFF the high byte lands at 0x0000.
    pub fn write16(&mut self, addr: u16, value: u16) {
        let [lo, hi] = value.to_le_bytes();
        self.write8(addr, lo);
        self.write8(addr.wrapping_add(1), hi);
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.memory[..]
    }
}

impl Bus for Mmu {
    fn read8(&mut self, addr: u16) -> u8 {
        Mmu::read8(self, addr)
    }

    fn write8(&mut self, addr: u16, value: u8) {
        Mmu::write8(self, addr, value);
    }
}
