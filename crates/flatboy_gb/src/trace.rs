//! Optional per-step tracing.
//!
//! The CPU reports what it executes to a [`TraceSink`] handed to
//! [`Cpu::step_traced`](crate::cpu::Cpu::step_traced). Nothing is written
//! anywhere unless a driver subscribes a sink.

use crate::instructions::Op;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TraceEvent {
    /// An instruction was decoded at `pc` and is about to execute. For
    /// prefixed instructions `opcode` is the `0xCB` lead-in byte.
    Fetch { pc: u16, opcode: u8, op: Op },
    /// A control transfer was taken.
    Branch { from: u16, to: u16 },
}

pub trait TraceSink {
    fn record(&mut self, event: &TraceEvent);
}

/// Discards every event.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullTrace;

impl TraceSink for NullTrace {
    #[inline]
    fn record(&mut self, _event: &TraceEvent) {}
}

/// Collects events in order; handy for tests and debugging tools.
impl TraceSink for Vec<TraceEvent> {
    fn record(&mut self, event: &TraceEvent) {
        self.push(*event);
    }
}

/// Forwards events to `log::trace!`.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogTrace;

impl TraceSink for LogTrace {
    fn record(&mut self, event: &TraceEvent) {
        match *event {
            TraceEvent::Fetch { pc, opcode, op } => {
                log::trace!("0x{pc:04X}: 0x{opcode:02X} {op}");
            }
            TraceEvent::Branch { from, to } => {
                log::trace!("0x{from:04X}: branch -> 0x{to:04X}");
            }
        }
    }
}
