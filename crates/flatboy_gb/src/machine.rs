mod cartridge;
mod gameboy;
mod mmu;

pub use cartridge::{Cartridge, CartridgeType};
pub use gameboy::{GameBoy, RunConfig, RunSummary, StopReason};
pub use mmu::Mmu;

/// Total addressable memory for the Game Boy (64 KiB).
///
/// The whole map is one flat array: cartridge ROM sits in the low 32 KiB and
/// everything above it behaves as plain RAM with no I/O side effects.
pub const MEMORY_SIZE: usize = 0x10000;

/// Bytes of cartridge ROM visible without a bank controller.
pub const ROM_WINDOW_SIZE: usize = 0x8000;
