use std::fmt;

use crate::instruction::{InstrKind, Target};

/// Errors reported by the CPU core.
///
/// Both variants point at a decoder defect rather than at bad program
/// data; the engine never produces them for a well-formed instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CpuError {
    /// The (kind, target, payload) combination has no defined resolution.
    Unhandled { kind: InstrKind, target: Target },
    /// A bit index outside 0..=7.
    BitIndexOutOfRange(u8),
}

impl fmt::Display for CpuError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CpuError::Unhandled { kind, target } => {
                write!(f, "unhandled instruction {kind} with target {target}")
            }
            CpuError::BitIndexOutOfRange(bit) => {
                write!(f, "bit index {bit} is out of range 0..=7")
            }
        }
    }
}

impl std::error::Error for CpuError {}
