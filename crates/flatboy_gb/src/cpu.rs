pub mod alu;
mod cb;
mod exec;
mod helpers;
mod init;
mod regs;
mod step;

pub use regs::{high, low, set_high, set_low, Flags, Registers};
pub use step::IDLE_CYCLES;

/// Abstraction over the Game Boy address space as seen by the CPU.
///
/// Every 16-bit address is valid. Word accesses are little-endian and wrap
/// around at 0xFFFF.
pub trait Bus {
    fn read8(&mut self, addr: u16) -> u8;
    fn write8(&mut self, addr: u16, value: u8);

    /// Read a little-endian word: `addr` holds the low byte.
    fn read16(&mut self, addr: u16) -> u16 {
        let lo = self.read8(addr);
        let hi = self.read8(addr.wrapping_add(1));
        u16::from_le_bytes([lo, hi])
    }

    /// Write a little-endian word: low byte at `addr`, high byte after it.
    fn write16(&mut self, addr: u16, value: u16) {
        let [lo, hi] = value.to_le_bytes();
        self.write8(addr, lo);
        self.write8(addr.wrapping_add(1), hi);
    }
}

/// Game Boy CPU core.
///
/// Owns the register file and the run-state flags (`ime`, `halted`,
/// `stopped`). Memory is reached through a [`Bus`] passed to each step, so
/// the CPU never owns or aliases the address space.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cpu {
    pub regs: Registers,
    /// Interrupt master enable. Toggled by DI/EI/RETI; nothing services
    /// interrupts yet.
    pub ime: bool,
    pub halted: bool,
    /// STOP low-power state. Like HALT, nothing wakes the CPU from it in the
    /// absence of an interrupt controller.
    stopped: bool,
}

impl Cpu {
    #[inline]
    pub fn flags(&self) -> Flags {
        self.regs.flags()
    }

    #[inline]
    pub fn set_flags(&mut self, flags: Flags) {
        self.regs.set_flags(flags);
    }

    #[inline]
    pub fn get_flag(&self, flag: Flags) -> bool {
        self.regs.flag(flag)
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    /// True while HALT or STOP keeps the CPU from fetching instructions.
    pub fn is_idle(&self) -> bool {
        self.halted || self.stopped
    }
}
