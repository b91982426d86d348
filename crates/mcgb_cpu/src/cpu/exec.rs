mod alu;
mod incdec;

use crate::bus::Bus;
use crate::error::CpuError;
use crate::instruction::{InstrKind, Instruction};

use super::Cpu;

impl<B: Bus> Cpu<B> {
    /// Execute a single decoded instruction.
    ///
    /// The operand is resolved before anything is written, so a malformed
    /// instruction is rejected with the register file, flags, and bus
    /// exactly as they were.
    pub fn execute(&mut self, instr: Instruction) -> Result<(), CpuError> {
        log::trace!("execute {instr} [{}]", self.regs);

        let outcome = self.dispatch(&instr);
        if let Err(err) = &outcome {
            log::error!("GB CPU rejected {instr}: {err} ({})", self.regs);
        }
        outcome
    }

    fn dispatch(&mut self, instr: &Instruction) -> Result<(), CpuError> {
        match instr.kind() {
            // 8-bit ALU operations on A: ADD/ADC/SUB/SBC/AND/XOR/OR/CP
            InstrKind::Add
            | InstrKind::Adc
            | InstrKind::Sub
            | InstrKind::Sbc
            | InstrKind::And
            | InstrKind::Or
            | InstrKind::Xor
            | InstrKind::Cp => self.exec_alu8(instr),

            InstrKind::AddHl => self.exec_add_hl_rr(instr),
            InstrKind::AddSp => self.exec_add_sp_r8(instr),

            InstrKind::Inc => self.exec_inc(instr),
            InstrKind::Dec => self.exec_dec(instr),

            InstrKind::Daa | InstrKind::Cpl | InstrKind::Scf | InstrKind::Ccf => {
                self.exec_misc_a(instr)
            }

            InstrKind::Rlca | InstrKind::Rrca | InstrKind::Rla | InstrKind::Rra => {
                self.exec_rotate_a(instr)
            }

            InstrKind::Rlc
            | InstrKind::Rrc
            | InstrKind::Rl
            | InstrKind::Rr
            | InstrKind::Sla
            | InstrKind::Sra
            | InstrKind::Srl
            | InstrKind::Swap => self.exec_shift(instr),

            InstrKind::Bit | InstrKind::Set | InstrKind::Res => self.exec_bit_op(instr),
        }
    }
}
