pub mod alu;
mod cb;
mod exec;
mod operand;
mod regs;

pub use regs::{Flag, Flags, Registers};

use crate::bus::Bus;

/// CPU core for a Game Boy-class processor.
///
/// Holds the register file and the bus it executes against. `B` is usually
/// a `&mut` borrow of the machine's bus, but an owned bus works as well.
#[derive(Clone, Debug)]
pub struct Cpu<B: Bus> {
    pub regs: Registers,
    bus: B,
}

impl<B: Bus> Cpu<B> {
    /// Create a CPU with every register zeroed.
    pub fn new(bus: B) -> Self {
        Self::with_registers(bus, Registers::default())
    }

    pub fn with_registers(bus: B, regs: Registers) -> Self {
        Self { regs, bus }
    }

    /// Zero the register file again. Bus contents are left alone.
    pub fn reset(&mut self) {
        self.regs = Registers::default();
    }

    #[inline]
    pub fn bus(&self) -> &B {
        &self.bus
    }

    #[inline]
    pub fn bus_mut(&mut self) -> &mut B {
        &mut self.bus
    }

    pub fn into_bus(self) -> B {
        self.bus
    }

    #[inline]
    pub fn get_flag(&self, flag: Flag) -> bool {
        self.regs.f.get(flag)
    }

    #[inline]
    pub fn set_flag(&mut self, flag: Flag, value: bool) {
        self.regs.f.set(flag, value);
    }
}
