use std::fmt;

use crate::error::CpuError;

/// Instruction families understood by the execution engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InstrKind {
    Add,
    Adc,
    /// `ADD HL, rr`.
    AddHl,
    /// `ADD SP, r8`.
    AddSp,
    Sub,
    Sbc,
    Cp,
    And,
    Or,
    Xor,
    Inc,
    Dec,
    Ccf,
    Scf,
    Cpl,
    Daa,
    // Accumulator-only rotates.
    Rra,
    Rla,
    Rrca,
    Rlca,
    // CB-prefixed rotates and shifts.
    Rlc,
    Rrc,
    Rl,
    Rr,
    Sla,
    Sra,
    Srl,
    Swap,
    Bit,
    Set,
    Res,
}

impl fmt::Display for InstrKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            InstrKind::Add => "ADD",
            InstrKind::Adc => "ADC",
            InstrKind::AddHl => "ADD HL",
            InstrKind::AddSp => "ADD SP",
            InstrKind::Sub => "SUB",
            InstrKind::Sbc => "SBC",
            InstrKind::Cp => "CP",
            InstrKind::And => "AND",
            InstrKind::Or => "OR",
            InstrKind::Xor => "XOR",
            InstrKind::Inc => "INC",
            InstrKind::Dec => "DEC",
            InstrKind::Ccf => "CCF",
            InstrKind::Scf => "SCF",
            InstrKind::Cpl => "CPL",
            InstrKind::Daa => "DAA",
            InstrKind::Rra => "RRA",
            InstrKind::Rla => "RLA",
            InstrKind::Rrca => "RRCA",
            InstrKind::Rlca => "RLCA",
            InstrKind::Rlc => "RLC",
            InstrKind::Rrc => "RRC",
            InstrKind::Rl => "RL",
            InstrKind::Rr => "RR",
            InstrKind::Sla => "SLA",
            InstrKind::Sra => "SRA",
            InstrKind::Srl => "SRL",
            InstrKind::Swap => "SWAP",
            InstrKind::Bit => "BIT",
            InstrKind::Set => "SET",
            InstrKind::Res => "RES",
        };
        f.write_str(name)
    }
}

/// Operand source/destination of an instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Target {
    A,
    B,
    C,
    D,
    E,
    /// The flags register, readable as its packed byte.
    F,
    H,
    L,
    Bc,
    De,
    Hl,
    /// The byte on the bus at the address held in HL.
    HlAddr,
    Sp,
    /// No register operand; the instruction's immediate is used instead.
    None,
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Target::A => "A",
            Target::B => "B",
            Target::C => "C",
            Target::D => "D",
            Target::E => "E",
            Target::F => "F",
            Target::H => "H",
            Target::L => "L",
            Target::Bc => "BC",
            Target::De => "DE",
            Target::Hl => "HL",
            Target::HlAddr => "(HL)",
            Target::Sp => "SP",
            Target::None => "-",
        };
        f.write_str(name)
    }
}

/// Bit position 0..=7 used by BIT/SET/RES.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BitIndex(u8);

impl BitIndex {
    pub const fn new(bit: u8) -> Option<Self> {
        if bit < 8 {
            Some(Self(bit))
        } else {
            None
        }
    }

    #[inline]
    pub const fn get(self) -> u8 {
        self.0
    }

    #[inline]
    pub const fn mask(self) -> u8 {
        1 << self.0
    }
}

impl TryFrom<u8> for BitIndex {
    type Error = CpuError;

    fn try_from(bit: u8) -> Result<Self, Self::Error> {
        BitIndex::new(bit).ok_or(CpuError::BitIndexOutOfRange(bit))
    }
}

/// Optional extra data carried by an instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Payload {
    None,
    Immediate(i8),
    Bit(BitIndex),
}

/// A decoded instruction.
///
/// The fields are private: the only way to build one is through the
/// factories below, each of which fixes the (target, payload) shape.
/// The kind is still checked against the target at execution time: an
/// immediate on INC/DEC/CB ops, a 16-bit target on an 8-bit family, a
/// missing bit index on BIT/SET/RES, or any operand on CCF/SCF/CPL/DAA and
/// the accumulator rotates is rejected as `CpuError::Unhandled`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Instruction {
    kind: InstrKind,
    target: Target,
    payload: Payload,
}

impl Instruction {
    /// Register or memory operand, no payload.
    pub const fn reg(kind: InstrKind, target: Target) -> Self {
        Self {
            kind,
            target,
            payload: Payload::None,
        }
    }

    /// Immediate operand; the target is always `Target::None`.
    pub const fn imm(kind: InstrKind, value: i8) -> Self {
        Self {
            kind,
            target: Target::None,
            payload: Payload::Immediate(value),
        }
    }

    /// Unsigned convenience over `imm` for the 8-bit ALU families.
    pub const fn imm_u8(kind: InstrKind, value: u8) -> Self {
        Self::imm(kind, value as i8)
    }

    /// Bit-indexed operand for BIT/SET/RES. CB rotates and shifts accept
    /// one too and ignore it.
    pub const fn bit(kind: InstrKind, target: Target, bit: BitIndex) -> Self {
        Self {
            kind,
            target,
            payload: Payload::Bit(bit),
        }
    }

    /// Instruction with no operand at all (CCF, SCF, CPL, DAA, RLCA, ...).
    pub const fn implied(kind: InstrKind) -> Self {
        Self::reg(kind, Target::None)
    }

    #[inline]
    pub const fn kind(&self) -> InstrKind {
        self.kind
    }

    #[inline]
    pub const fn target(&self) -> Target {
        self.target
    }

    #[inline]
    pub const fn payload(&self) -> Payload {
        self.payload
    }

    #[inline]
    pub const fn immediate(&self) -> Option<i8> {
        match self.payload {
            Payload::Immediate(value) => Some(value),
            _ => None,
        }
    }

    #[inline]
    pub const fn bit_index(&self) -> Option<BitIndex> {
        match self.payload {
            Payload::Bit(bit) => Some(bit),
            _ => None,
        }
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.payload {
            Payload::None if self.target == Target::None => write!(f, "{}", self.kind),
            Payload::None => write!(f, "{} {}", self.kind, self.target),
            Payload::Immediate(value) => write!(f, "{} 0x{:02X}", self.kind, value as u8),
            Payload::Bit(bit) => write!(f, "{} {},{}", self.kind, bit.get(), self.target),
        }
    }
}
