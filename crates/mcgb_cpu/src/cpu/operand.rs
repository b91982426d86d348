use crate::bus::Bus;
use crate::error::CpuError;
use crate::instruction::{Instruction, Payload, Target};

use super::Cpu;

/// A writable 8-bit location: one of the seven data registers or the byte
/// at an address on the bus. F is not a place; it is only ever read.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum Place8 {
    A,
    B,
    C,
    D,
    E,
    H,
    L,
    Mem(u16),
}

/// A 16-bit register operand.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum Pair {
    Bc,
    De,
    Hl,
    Sp,
}

#[inline]
pub(super) fn unhandled(instr: &Instruction) -> CpuError {
    CpuError::Unhandled {
        kind: instr.kind(),
        target: instr.target(),
    }
}

impl Pair {
    pub(super) fn from_target(target: Target) -> Option<Self> {
        match target {
            Target::Bc => Some(Pair::Bc),
            Target::De => Some(Pair::De),
            Target::Hl => Some(Pair::Hl),
            Target::Sp => Some(Pair::Sp),
            _ => None,
        }
    }
}

impl<B: Bus> Cpu<B> {
    /// Resolve a read-modify-write 8-bit location. `(HL)` is latched to the
    /// current HL value so the read and the write hit the same address.
    pub(super) fn place8(&self, target: Target) -> Option<Place8> {
        let place = match target {
            Target::A => Place8::A,
            Target::B => Place8::B,
            Target::C => Place8::C,
            Target::D => Place8::D,
            Target::E => Place8::E,
            Target::H => Place8::H,
            Target::L => Place8::L,
            Target::HlAddr => Place8::Mem(self.regs.hl()),
            _ => return None,
        };
        Some(place)
    }

    pub(super) fn read_place8(&mut self, place: Place8) -> u8 {
        match place {
            Place8::A => self.regs.a,
            Place8::B => self.regs.b,
            Place8::C => self.regs.c,
            Place8::D => self.regs.d,
            Place8::E => self.regs.e,
            Place8::H => self.regs.h,
            Place8::L => self.regs.l,
            Place8::Mem(addr) => self.bus.read8(addr),
        }
    }

    pub(super) fn write_place8(&mut self, place: Place8, value: u8) {
        match place {
            Place8::A => self.regs.a = value,
            Place8::B => self.regs.b = value,
            Place8::C => self.regs.c = value,
            Place8::D => self.regs.d = value,
            Place8::E => self.regs.e = value,
            Place8::H => self.regs.h = value,
            Place8::L => self.regs.l = value,
            Place8::Mem(addr) => self.bus.write8(addr, value),
        }
    }

    /// Read a register (F included) or the `(HL)` byte as a plain source.
    pub(super) fn read_source8(&mut self, target: Target) -> Option<u8> {
        if target == Target::F {
            return Some(self.regs.f.to_byte());
        }
        let place = self.place8(target)?;
        Some(self.read_place8(place))
    }

    /// Resolve the right-hand operand of an 8-bit ALU instruction:
    /// a register, `(HL)`, or the carried immediate.
    pub(super) fn alu_operand(&mut self, instr: &Instruction) -> Result<u8, CpuError> {
        let value = match (instr.target(), instr.payload()) {
            (Target::None, Payload::Immediate(value)) => Some(value as u8),
            (target, Payload::None) => self.read_source8(target),
            _ => None,
        };
        value.ok_or_else(|| unhandled(instr))
    }

    /// Resolve a writable 8-bit location for an instruction that carries no
    /// payload (INC/DEC r and (HL)).
    pub(super) fn rmw_place(&self, instr: &Instruction) -> Result<Place8, CpuError> {
        match instr.payload() {
            Payload::None => self.place8(instr.target()).ok_or_else(|| unhandled(instr)),
            _ => Err(unhandled(instr)),
        }
    }

    pub(super) fn read_pair(&self, pair: Pair) -> u16 {
        match pair {
            Pair::Bc => self.regs.bc(),
            Pair::De => self.regs.de(),
            Pair::Hl => self.regs.hl(),
            Pair::Sp => self.regs.sp,
        }
    }

    pub(super) fn write_pair(&mut self, pair: Pair, value: u16) {
        match pair {
            Pair::Bc => self.regs.set_bc(value),
            Pair::De => self.regs.set_de(value),
            Pair::Hl => self.regs.set_hl(value),
            Pair::Sp => self.regs.sp = value,
        }
    }
}
