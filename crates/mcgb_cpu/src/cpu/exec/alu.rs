use crate::bus::Bus;
use crate::cpu::operand::{unhandled, Pair};
use crate::cpu::{alu, Cpu};
use crate::error::CpuError;
use crate::instruction::{InstrKind, Instruction, Payload, Target};

impl<B: Bus> Cpu<B> {
    pub(in crate::cpu) fn exec_alu8(&mut self, instr: &Instruction) -> Result<(), CpuError> {
        let value = self.alu_operand(instr)?;
        let a = self.regs.a;
        let carry = self.regs.f.carry;

        let (result, flags) = match instr.kind() {
            InstrKind::Add => alu::add(a, value, false),
            InstrKind::Adc => alu::add(a, value, carry),
            InstrKind::Sub | InstrKind::Cp => alu::sub(a, value, false),
            InstrKind::Sbc => alu::sub(a, value, carry),
            InstrKind::And => alu::and(a, value),
            InstrKind::Or => alu::or(a, value),
            InstrKind::Xor => alu::xor(a, value),
            _ => return Err(unhandled(instr)),
        };

        // CP only compares; A keeps its value.
        if instr.kind() != InstrKind::Cp {
            self.regs.a = result;
        }
        self.regs.f = flags;
        Ok(())
    }

    pub(in crate::cpu) fn exec_add_hl_rr(&mut self, instr: &Instruction) -> Result<(), CpuError> {
        let pair = match instr.payload() {
            Payload::None => Pair::from_target(instr.target()),
            _ => None,
        }
        .ok_or_else(|| unhandled(instr))?;

        let value = self.read_pair(pair);
        let (result, flags) = alu::add16(self.regs.hl(), value, self.regs.f);
        self.regs.set_hl(result);
        self.regs.f = flags;
        Ok(())
    }

    pub(in crate::cpu) fn exec_add_sp_r8(&mut self, instr: &Instruction) -> Result<(), CpuError> {
        let offset = instr.immediate().ok_or_else(|| unhandled(instr))?;
        let (result, flags) = alu::add16_signed(self.regs.sp, offset);
        self.regs.sp = result;
        self.regs.f = flags;
        Ok(())
    }

    /// DAA, CPL, SCF, CCF. None of them take an operand.
    pub(in crate::cpu) fn exec_misc_a(&mut self, instr: &Instruction) -> Result<(), CpuError> {
        expect_implied(instr)?;
        let flags = self.regs.f;

        match instr.kind() {
            InstrKind::Daa => {
                let (result, flags) = alu::daa(self.regs.a, flags);
                self.regs.a = result;
                self.regs.f = flags;
            }
            InstrKind::Cpl => {
                let (result, flags) = alu::cpl(self.regs.a, flags);
                self.regs.a = result;
                self.regs.f = flags;
            }
            InstrKind::Scf => self.regs.f = alu::scf(flags),
            InstrKind::Ccf => self.regs.f = alu::ccf(flags),
            _ => return Err(unhandled(instr)),
        }
        Ok(())
    }

    /// RLCA, RRCA, RLA, RRA.
    pub(in crate::cpu) fn exec_rotate_a(&mut self, instr: &Instruction) -> Result<(), CpuError> {
        expect_implied(instr)?;
        let a = self.regs.a;
        let carry = self.regs.f.carry;

        let rotated = match instr.kind() {
            // RLCA: rotate A left. Bit 7 to Carry and bit 0.
            InstrKind::Rlca => alu::rlc(a),
            // RRCA: rotate A right. Bit 0 to Carry and bit 7.
            InstrKind::Rrca => alu::rrc(a),
            // RLA: rotate A left through Carry.
            InstrKind::Rla => alu::rl(a, carry),
            // RRA: rotate A right through Carry.
            InstrKind::Rra => alu::rr(a, carry),
            _ => return Err(unhandled(instr)),
        };

        let (result, flags) = alu::accumulator_rotate(rotated);
        self.regs.a = result;
        self.regs.f = flags;
        Ok(())
    }
}

fn expect_implied(instr: &Instruction) -> Result<(), CpuError> {
    match (instr.target(), instr.payload()) {
        (Target::None, Payload::None) => Ok(()),
        _ => Err(unhandled(instr)),
    }
}
