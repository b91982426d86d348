use crate::bus::Bus;
use crate::error::CpuError;
use crate::instruction::{InstrKind, Instruction, Payload};

use super::operand::unhandled;
use super::{alu, Cpu};

impl<B: Bus> Cpu<B> {
    /// CB-prefixed rotates, shifts and SWAP on a register or `(HL)`.
    ///
    /// Unlike RLCA and friends, Z is taken from the result. A bit index
    /// carried from a CB decode is accepted and ignored.
    pub(super) fn exec_shift(&mut self, instr: &Instruction) -> Result<(), CpuError> {
        let place = match instr.payload() {
            Payload::None | Payload::Bit(_) => self.place8(instr.target()),
            Payload::Immediate(_) => None,
        }
        .ok_or_else(|| unhandled(instr))?;
        let value = self.read_place8(place);
        let carry = self.regs.f.carry;

        let (result, flags) = match instr.kind() {
            InstrKind::Rlc => alu::rlc(value),
            InstrKind::Rrc => alu::rrc(value),
            InstrKind::Rl => alu::rl(value, carry),
            InstrKind::Rr => alu::rr(value, carry),
            InstrKind::Sla => alu::sla(value),
            InstrKind::Sra => alu::sra(value),
            InstrKind::Srl => alu::srl(value),
            InstrKind::Swap => alu::swap(value),
            _ => return Err(unhandled(instr)),
        };

        self.write_place8(place, result);
        self.regs.f = flags;
        Ok(())
    }

    /// BIT b / SET b / RES b.
    pub(super) fn exec_bit_op(&mut self, instr: &Instruction) -> Result<(), CpuError> {
        let mask = instr.bit_index().ok_or_else(|| unhandled(instr))?.mask();

        if instr.kind() == InstrKind::Bit {
            // BIT only reads, so F is a legal source here.
            let value = self
                .read_source8(instr.target())
                .ok_or_else(|| unhandled(instr))?;
            self.regs.f = alu::bit(value, mask, self.regs.f);
            return Ok(());
        }

        let place = self.place8(instr.target()).ok_or_else(|| unhandled(instr))?;
        let value = self.read_place8(place);
        let result = match instr.kind() {
            InstrKind::Set => alu::set_bit(value, mask),
            InstrKind::Res => alu::res_bit(value, mask),
            _ => return Err(unhandled(instr)),
        };
        self.write_place8(place, result);
        Ok(())
    }
}
