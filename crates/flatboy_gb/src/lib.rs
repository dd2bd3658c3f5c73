pub mod cpu;
pub mod error;
pub mod instructions;
pub mod machine;
pub mod trace;

pub use cpu::{Bus, Cpu};
pub use error::{DecodeError, LoadError};
pub use machine::{Cartridge, CartridgeType, GameBoy, Mmu, RunConfig, RunSummary, StopReason};

pub use flatboy_common::{SCREEN_HEIGHT, SCREEN_WIDTH};
