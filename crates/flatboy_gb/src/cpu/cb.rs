use crate::instructions::CbOp;

use super::exec::Flow;
use super::{alu, Bus, Cpu};

impl Cpu {
    /// Handle CB-prefixed instructions (bit operations, shifts, and rotates).
    pub(super) fn exec_cb<B: Bus>(&mut self, bus: &mut B, op: CbOp) -> Flow {
        match op {
            CbOp::Shift(shift, operand) => {
                self.modify_operand(bus, operand, |value, flags| {
                    alu::shift(shift, value, flags)
                });
            }
            CbOp::Bit(bit, operand) => {
                let value = self.read_operand(bus, operand);
                let flags = alu::bit(bit, value, self.flags());
                self.set_flags(flags);
            }
            // RES and SET leave the flags alone.
            CbOp::Res(bit, operand) => {
                self.modify_operand(bus, operand, |value, flags| (value & !(1 << bit), flags));
            }
            CbOp::Set(bit, operand) => {
                self.modify_operand(bus, operand, |value, flags| (value | (1 << bit), flags));
            }
        }

        Flow::Next
    }
}
