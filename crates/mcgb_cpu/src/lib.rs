pub mod bus;
pub mod cpu;
pub mod error;
pub mod instruction;

pub use bus::{Bus, Memory};
pub use cpu::{Cpu, Flag, Flags, Registers};
pub use error::CpuError;
pub use instruction::{BitIndex, InstrKind, Instruction, Payload, Target};
