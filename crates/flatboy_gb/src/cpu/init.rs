use super::{Cpu, Registers};

impl Default for Cpu {
    fn default() -> Self {
        Self::new()
    }
}

impl Cpu {
    pub fn new() -> Self {
        let mut cpu = Self {
            regs: Registers::default(),
            ime: false,
            halted: false,
            stopped: false,
        };
        cpu.apply_dmg_boot_state();
        cpu
    }

    /// Reset the CPU to the state the boot ROM leaves behind.
    pub fn reset(&mut self) {
        self.regs = Registers::default();
        self.halted = false;
        self.stopped = false;
        self.apply_dmg_boot_state();
    }

    /// Initialize registers to match the DMG boot ROM's state after it
    /// hands control to cartridge code at 0x0100.
    fn apply_dmg_boot_state(&mut self) {
        self.regs.af = 0x01B0; // A=0x01, F = Z H C
        self.regs.bc = 0x0013;
        self.regs.de = 0x00D8;
        self.regs.hl = 0x014D;
        self.regs.sp = 0xFFFE;
        self.regs.pc = 0x0100;

        // IME is clear when control is handed to the cartridge.
        self.ime = false;
    }
}
