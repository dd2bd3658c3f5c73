use crate::error::DecodeError;
use crate::instructions::{self, Instruction, Op};
use crate::trace::{NullTrace, TraceEvent, TraceSink};

use super::exec::Flow;
use super::{Bus, Cpu};

/// Cycles reported for a step taken while HALT/STOP keeps the CPU idle.
pub const IDLE_CYCLES: u32 = 4;

impl Cpu {
    /// Execute a single instruction and return the number of clock cycles
    /// it took.
    ///
    /// An opcode missing from the metadata tables is returned as a
    /// [`DecodeError`]; registers and memory are untouched in that case.
    pub fn step<B: Bus>(&mut self, bus: &mut B) -> Result<u32, DecodeError> {
        self.step_traced(bus, &mut NullTrace)
    }

    /// Same as [`Cpu::step`], reporting the fetched instruction and any
    /// taken branch to `trace`.
    pub fn step_traced<B, T>(&mut self, bus: &mut B, trace: &mut T) -> Result<u32, DecodeError>
    where
        B: Bus,
        T: TraceSink + ?Sized,
    {
        if self.is_idle() {
            return Ok(IDLE_CYCLES);
        }

        let pc = self.regs.pc;
        let (opcode, instruction) = self.decode(bus, pc)?;
        trace.record(&TraceEvent::Fetch {
            pc,
            opcode,
            op: instruction.op,
        });

        let next_pc = pc.wrapping_add(instruction.length as u16);
        let cycles = match self.execute(bus, instruction, next_pc) {
            Flow::Next => {
                self.regs.pc = next_pc;
                instruction.cycles
            }
            Flow::NotTaken => {
                self.regs.pc = next_pc;
                instruction.cycles_not_taken
            }
            Flow::Jump(target) => {
                trace.record(&TraceEvent::Branch {
                    from: pc,
                    to: target,
                });
                self.regs.pc = target;
                instruction.cycles
            }
        };

        Ok(cycles as u32)
    }

    /// Look up the instruction at `pc` without executing it.
    ///
    /// Returns the opcode byte at `pc` and the metadata entry; for `0xCB`
    /// the entry comes from the prefixed table, keyed by the byte after it.
    pub fn decode<B: Bus>(
        &self,
        bus: &mut B,
        pc: u16,
    ) -> Result<(u8, &'static Instruction), DecodeError> {
        let opcode = bus.read8(pc);
        let instruction =
            instructions::lookup(opcode).ok_or(DecodeError::UnknownOpcode { opcode, pc })?;

        if instruction.op != Op::Prefix {
            return Ok((opcode, instruction));
        }

        let prefixed = bus.read8(pc.wrapping_add(1));
        let instruction = instructions::lookup_prefixed(prefixed).ok_or(
            DecodeError::UnknownPrefixedOpcode {
                opcode: prefixed,
                pc,
            },
        )?;
        Ok((opcode, instruction))
    }
}
