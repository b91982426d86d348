use crate::bus::Bus;
use crate::cpu::operand::{unhandled, Pair};
use crate::cpu::{alu, Cpu, Flags};
use crate::error::CpuError;
use crate::instruction::{Instruction, Payload};

impl<B: Bus> Cpu<B> {
    pub(in crate::cpu) fn exec_inc(&mut self, instr: &Instruction) -> Result<(), CpuError> {
        self.exec_step(instr, alu::inc8, u16::wrapping_add)
    }

    pub(in crate::cpu) fn exec_dec(&mut self, instr: &Instruction) -> Result<(), CpuError> {
        self.exec_step(instr, alu::dec8, u16::wrapping_sub)
    }

    /// Shared INC/DEC body. 8-bit targets go through `op8` and update
    /// Z/N/H; 16-bit pairs and SP wrap silently without touching flags.
    fn exec_step(
        &mut self,
        instr: &Instruction,
        op8: fn(u8, Flags) -> (u8, Flags),
        op16: fn(u16, u16) -> u16,
    ) -> Result<(), CpuError> {
        if instr.payload() != Payload::None {
            return Err(unhandled(instr));
        }

        if let Some(pair) = Pair::from_target(instr.target()) {
            let value = op16(self.read_pair(pair), 1);
            self.write_pair(pair, value);
            return Ok(());
        }

        let place = self.rmw_place(instr)?;
        let value = self.read_place8(place);
        let (result, flags) = op8(value, self.regs.f);
        self.write_place8(place, result);
        self.regs.f = flags;
        Ok(())
    }
}
