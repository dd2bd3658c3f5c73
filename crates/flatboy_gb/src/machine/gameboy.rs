use anyhow::Context;
use flatboy_common::{Presentation, FRAME_BYTES};
use typed_builder::TypedBuilder;

use crate::cpu::Cpu;
use crate::error::{DecodeError, LoadError};
use crate::trace::{LogTrace, TraceSink};

use super::{Cartridge, Mmu};

/// T-cycles in one DMG frame (154 lines of 456 dots).
pub const DMG_FRAME_CYCLES: u32 = 70_224;

/// Knobs for [`GameBoy::run`].
#[derive(Clone, Debug, PartialEq, Eq, TypedBuilder)]
pub struct RunConfig {
    /// Stop after this many executed steps.
    #[builder(default, setter(strip_option))]
    pub max_steps: Option<u64>,
    /// Log every fetch and taken branch at trace level.
    #[builder(default)]
    pub trace: bool,
    /// Cycles between two presented frames. Zero disables presentation.
    #[builder(default = DMG_FRAME_CYCLES)]
    pub frame_cycles: u32,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StopReason {
    /// The presentation layer asked to quit.
    Quit,
    /// `max_steps` was reached.
    StepLimit,
    /// HALT or STOP with nothing able to wake the CPU.
    CpuIdle,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunSummary {
    pub steps: u64,
    pub cycles: u64,
    pub stop: StopReason,
}

/// High-level Game Boy machine.
///
/// Owns the cartridge, the memory image built from it and the CPU core that
/// executes against that memory.
pub struct GameBoy {
    pub cpu: Cpu,
    pub mmu: Mmu,
    cartridge: Cartridge,
    config: RunConfig,
    tracer: Option<Box<dyn TraceSink>>,
    frame: Vec<u8>,
    frame_cycles: u32,
}

impl GameBoy {
    pub fn new(cartridge: Cartridge, config: RunConfig) -> Self {
        let tracer: Option<Box<dyn TraceSink>> = if config.trace {
            Some(Box::new(LogTrace))
        } else {
            None
        };

        Self {
            cpu: Cpu::new(),
            mmu: Mmu::new(&cartridge),
            cartridge,
            config,
            tracer,
            frame: vec![0xFF; FRAME_BYTES],
            frame_cycles: 0,
        }
    }

    /// Validate `rom` and build a machine around it.
    pub fn from_rom(rom: Vec<u8>, config: RunConfig) -> Result<Self, LoadError> {
        Ok(Self::new(Cartridge::new(rom)?, config))
    }

    pub fn cartridge(&self) -> &Cartridge {
        &self.cartridge
    }

    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    /// Replace the trace sink used by [`GameBoy::step`].
    pub fn set_tracer(&mut self, tracer: Option<Box<dyn TraceSink>>) {
        self.tracer = tracer;
    }

    /// Power-cycle: registers back to the boot state, memory rebuilt from
    /// the cartridge.
    pub fn reset(&mut self) {
        self.cpu.reset();
        self.mmu = Mmu::new(&self.cartridge);
        self.frame_cycles = 0;
    }

    /// Execute one instruction and return its cycle cost.
    pub fn step(&mut self) -> Result<u32, DecodeError> {
        match self.tracer.as_deref_mut() {
            Some(tracer) => self.cpu.step_traced(&mut self.mmu, tracer),
            None => self.cpu.step(&mut self.mmu),
        }
    }

    /// Drive the CPU until the presentation asks to quit, the step limit is
    /// hit or the CPU idles.
    ///
    /// A blank frame is presented every `frame_cycles` cycles. There is no
    /// pixel pipeline, so the frame stays white.
    pub fn run<P>(&mut self, presentation: &mut P) -> anyhow::Result<RunSummary>
    where
        P: Presentation + ?Sized,
    {
        let mut steps = 0u64;
        let mut cycles = 0u64;

        let stop = loop {
            if presentation.should_quit() {
                break StopReason::Quit;
            }
            if self.config.max_steps.is_some_and(|max| steps >= max) {
                break StopReason::StepLimit;
            }
            if self.cpu.is_idle() {
                break StopReason::CpuIdle;
            }

            let taken = self
                .step()
                .inspect_err(|err| log::error!("{err}; registers: {:04X?}", self.cpu.regs))
                .with_context(|| {
                    format!(
                        "execution stopped after {steps} steps ({cycles} cycles), SP=0x{:04X}",
                        self.cpu.regs.sp
                    )
                })?;
            steps += 1;
            cycles += u64::from(taken);
            self.advance_frame(taken, presentation);
        };

        log::info!("Run finished after {steps} steps, {cycles} cycles: {stop:?}");
        Ok(RunSummary {
            steps,
            cycles,
            stop,
        })
    }

    fn advance_frame<P>(&mut self, cycles: u32, presentation: &mut P)
    where
        P: Presentation + ?Sized,
    {
        if self.config.frame_cycles == 0 {
            return;
        }

        self.frame_cycles += cycles;
        while self.frame_cycles >= self.config.frame_cycles {
            self.frame_cycles -= self.config.frame_cycles;
            presentation.present(&self.frame);
        }
    }
}
