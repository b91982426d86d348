/// Abstraction over the 64 KiB address space seen by the CPU.
///
/// The bus belongs to the enclosing machine. The CPU only borrows it for
/// the duration of an `execute` call, so nothing else touches memory while
/// an instruction is in flight.
pub trait Bus {
    fn read8(&mut self, addr: u16) -> u8;
    fn write8(&mut self, addr: u16, value: u8);
}

impl<B: Bus + ?Sized> Bus for &mut B {
    #[inline]
    fn read8(&mut self, addr: u16) -> u8 {
        (**self).read8(addr)
    }

    #[inline]
    fn write8(&mut self, addr: u16, value: u8) {
        (**self).write8(addr, value)
    }
}

/// Size of the flat address space.
pub const MEMORY_SIZE: usize = 0x10000;

/// Flat RAM covering the whole address space. No banking.
#[derive(Clone)]
pub struct Memory {
    bytes: Box<[u8; MEMORY_SIZE]>,
}

impl Default for Memory {
    fn default() -> Self {
        Self {
            bytes: Box::new([0; MEMORY_SIZE]),
        }
    }
}

impl Memory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy `data` into memory starting at `addr`, wrapping at the top of
    /// the address space.
    pub fn load(&mut self, addr: u16, data: &[u8]) {
        for (offset, &byte) in data.iter().enumerate() {
            let target = addr.wrapping_add(offset as u16);
            self.bytes[target as usize] = byte;
        }
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.bytes[..]
    }
}

impl std::fmt::Debug for Memory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Memory")
            .field("size", &MEMORY_SIZE)
            .finish()
    }
}

impl Bus for Memory {
    #[inline]
    fn read8(&mut self, addr: u16) -> u8 {
        self.bytes[addr as usize]
    }

    #[inline]
    fn write8(&mut self, addr: u16, value: u8) {
        self.bytes[addr as usize] = value;
    }
}
