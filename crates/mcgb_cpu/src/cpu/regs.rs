use std::fmt;

/// Flag bits in the F register.
///
/// Layout (bit index in the byte, from MSB to LSB):
/// - bit 7: Z (zero)
/// - bit 6: N (subtract)
/// - bit 5: H (half carry)
/// - bit 4: C (carry)
/// - bits 0–3 are always zero.
#[derive(Clone, Copy, Debug)]
pub enum Flag {
    Z = 7,
    N = 6,
    H = 5,
    C = 4,
}

impl Flag {
    #[inline]
    const fn mask(self) -> u8 {
        1 << self as u8
    }
}

/// The four condition flags as independent booleans.
///
/// The packed byte form only exists at the edges (`to_byte`/`from_byte`),
/// so the low nibble can never be set by accident.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Flags {
    pub zero: bool,
    pub subtraction: bool,
    pub half_carry: bool,
    pub carry: bool,
}

impl Flags {
    #[inline]
    pub const fn empty() -> Self {
        Self {
            zero: false,
            subtraction: false,
            half_carry: false,
            carry: false,
        }
    }

    #[inline]
    pub const fn new(zero: bool, subtraction: bool, half_carry: bool, carry: bool) -> Self {
        Self {
            zero,
            subtraction,
            half_carry,
            carry,
        }
    }

    #[inline]
    pub fn get(&self, flag: Flag) -> bool {
        match flag {
            Flag::Z => self.zero,
            Flag::N => self.subtraction,
            Flag::H => self.half_carry,
            Flag::C => self.carry,
        }
    }

    #[inline]
    pub fn set(&mut self, flag: Flag, value: bool) {
        match flag {
            Flag::Z => self.zero = value,
            Flag::N => self.subtraction = value,
            Flag::H => self.half_carry = value,
            Flag::C => self.carry = value,
        }
    }

    /// Pack into the hardware F layout. Bits 0–3 are always zero.
    pub fn to_byte(self) -> u8 {
        [Flag::Z, Flag::N, Flag::H, Flag::C]
            .into_iter()
            .filter(|&flag| self.get(flag))
            .fold(0, |byte, flag| byte | flag.mask())
    }

    /// Unpack from the hardware F layout, ignoring bits 0–3.
    pub fn from_byte(byte: u8) -> Self {
        Self {
            zero: byte & Flag::Z.mask() != 0,
            subtraction: byte & Flag::N.mask() != 0,
            half_carry: byte & Flag::H.mask() != 0,
            carry: byte & Flag::C.mask() != 0,
        }
    }
}

impl From<u8> for Flags {
    fn from(byte: u8) -> Self {
        Flags::from_byte(byte)
    }
}

impl From<Flags> for u8 {
    fn from(flags: Flags) -> Self {
        flags.to_byte()
    }
}

/// Registers for the Game Boy-class CPU.
///
/// F is held as a typed `Flags` value rather than a raw byte, so there is
/// deliberately no `af` pair. Callers that need the 16-bit form compose it
/// themselves from `a` and `f.to_byte()`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Registers {
    pub a: u8,
    pub f: Flags,
    pub b: u8,
    pub c: u8,
    pub d: u8,
    pub e: u8,
    pub h: u8,
    pub l: u8,
    pub sp: u16,
    pub pc: u16,
}

impl Registers {
    #[inline]
    pub fn bc(&self) -> u16 {
        u16::from_be_bytes([self.b, self.c])
    }

    #[inline]
    pub fn set_bc(&mut self, value: u16) {
        let [b, c] = value.to_be_bytes();
        self.b = b;
        self.c = c;
    }

    #[inline]
    pub fn de(&self) -> u16 {
        u16::from_be_bytes([self.d, self.e])
    }

    #[inline]
    pub fn set_de(&mut self, value: u16) {
        let [d, e] = value.to_be_bytes();
        self.d = d;
        self.e = e;
    }

    #[inline]
    pub fn hl(&self) -> u16 {
        u16::from_be_bytes([self.h, self.l])
    }

    #[inline]
    pub fn set_hl(&mut self, value: u16) {
        let [h, l] = value.to_be_bytes();
        self.h = h;
        self.l = l;
    }
}

impl fmt::Display for Registers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "A=0x{a:02X} F=0x{flags:02X} BC=0x{bc:04X} DE=0x{de:04X} HL=0x{hl:04X} SP=0x{sp:04X} PC=0x{pc:04X}",
            a = self.a,
            flags = self.f.to_byte(),
            bc = self.bc(),
            de = self.de(),
            hl = self.hl(),
            sp = self.sp,
            pc = self.pc,
        )
    }
}
