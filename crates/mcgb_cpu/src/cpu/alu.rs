//! Stateless ALU formulas.
//!
//! Every function takes its operands (and the incoming flags where some of
//! them survive the operation) and returns the new value together with the
//! complete new flag set. Nothing here touches the register file or bus.

use super::Flags;

/// 8-bit ADD/ADC. `carry_in` is the C flag for ADC and `false` for ADD.
pub fn add(a: u8, value: u8, carry_in: bool) -> (u8, Flags) {
    let carry_in = carry_in as u8;

    let half = (a & 0x0F) + (value & 0x0F) + carry_in;
    let full = a as u16 + value as u16 + carry_in as u16;
    let result = full as u8;

    let flags = Flags::new(result == 0, false, half > 0x0F, full > 0xFF);
    (result, flags)
}

/// 8-bit SUB/SBC/CP. `carry_in` is the C flag for SBC and `false` otherwise.
///
/// CP shares this formula; the caller simply does not commit the result.
pub fn sub(a: u8, value: u8, carry_in: bool) -> (u8, Flags) {
    let carry_in = carry_in as u8;

    let result = a.wrapping_sub(value).wrapping_sub(carry_in);
    let half = (a & 0x0F) < (value & 0x0F) + carry_in;
    let borrow = (a as u16) < value as u16 + carry_in as u16;

    (result, Flags::new(result == 0, true, half, borrow))
}

#[inline]
pub fn and(a: u8, value: u8) -> (u8, Flags) {
    let result = a & value;
    (result, Flags::new(result == 0, false, true, false))
}

#[inline]
pub fn or(a: u8, value: u8) -> (u8, Flags) {
    let result = a | value;
    (result, Flags::new(result == 0, false, false, false))
}

#[inline]
pub fn xor(a: u8, value: u8) -> (u8, Flags) {
    let result = a ^ value;
    (result, Flags::new(result == 0, false, false, false))
}

/// 8-bit increment. Updates Z, N, H while leaving C unchanged.
#[inline]
pub fn inc8(value: u8, flags: Flags) -> (u8, Flags) {
    let result = value.wrapping_add(1);
    let half = (value & 0x0F) + 1 > 0x0F;
    (result, Flags::new(result == 0, false, half, flags.carry))
}

/// 8-bit decrement. Updates Z, N, H while leaving C unchanged.
#[inline]
pub fn dec8(value: u8, flags: Flags) -> (u8, Flags) {
    let result = value.wrapping_sub(1);
    let half = (value & 0x0F) == 0;
    (result, Flags::new(result == 0, true, half, flags.carry))
}

/// 16-bit add for `ADD HL,rr`.
///
/// Z is unaffected; N is cleared; H is the carry out of bit 11 and C the
/// carry out of bit 15.
pub fn add16(hl: u16, value: u16, flags: Flags) -> (u16, Flags) {
    let full = hl as u32 + value as u32;
    let half = (hl & 0x0FFF) + (value & 0x0FFF) > 0x0FFF;
    (full as u16, Flags::new(flags.zero, false, half, full > 0xFFFF))
}

/// Signed 8-bit immediate added to a 16-bit base (`ADD SP,r8`).
///
/// Z and N are cleared; H and C are computed from the low byte.
pub fn add16_signed(base: u16, offset: i8) -> (u16, Flags) {
    let offset = offset as i16 as u16;
    let half = (base & 0x000F) + (offset & 0x000F) > 0x000F;
    let carry = (base & 0x00FF) + (offset & 0x00FF) > 0x00FF;
    (base.wrapping_add(offset), Flags::new(false, false, half, carry))
}

/// Decimal adjust after a BCD addition or subtraction.
///
/// Updates Z, H, C; leaves N unchanged.
pub fn daa(a: u8, flags: Flags) -> (u8, Flags) {
    let mut adjust: u8 = if flags.carry { 0x60 } else { 0x00 };
    if flags.half_carry {
        adjust |= 0x06;
    }

    let result = if !flags.subtraction {
        if (a & 0x0F) > 0x09 {
            adjust |= 0x06;
        }
        if a > 0x99 {
            adjust |= 0x60;
        }
        a.wrapping_add(adjust)
    } else {
        a.wrapping_sub(adjust)
    };

    let flags = Flags::new(result == 0, flags.subtraction, false, adjust >= 0x60);
    (result, flags)
}

/// One's complement. Sets N and H; Z and C are unaffected.
#[inline]
pub fn cpl(a: u8, flags: Flags) -> (u8, Flags) {
    (!a, Flags::new(flags.zero, true, true, flags.carry))
}

#[inline]
pub fn ccf(flags: Flags) -> Flags {
    Flags::new(flags.zero, false, false, !flags.carry)
}

#[inline]
pub fn scf(flags: Flags) -> Flags {
    Flags::new(flags.zero, false, false, true)
}

/// Rotate left; bit 7 goes to both C and bit 0.
#[inline]
pub fn rlc(value: u8) -> (u8, Flags) {
    let result = value.rotate_left(1);
    (result, shifted(result, value & 0x80 != 0))
}

/// Rotate right; bit 0 goes to both C and bit 7.
#[inline]
pub fn rrc(value: u8) -> (u8, Flags) {
    let result = value.rotate_right(1);
    (result, shifted(result, value & 0x01 != 0))
}

/// Rotate left through carry.
#[inline]
pub fn rl(value: u8, carry_in: bool) -> (u8, Flags) {
    let result = (value << 1) | carry_in as u8;
    (result, shifted(result, value & 0x80 != 0))
}

/// Rotate right through carry.
#[inline]
pub fn rr(value: u8, carry_in: bool) -> (u8, Flags) {
    let result = (value >> 1) | if carry_in { 0x80 } else { 0 };
    (result, shifted(result, value & 0x01 != 0))
}

#[inline]
pub fn sla(value: u8) -> (u8, Flags) {
    let result = value << 1;
    (result, shifted(result, value & 0x80 != 0))
}

/// Arithmetic shift right; bit 7 is kept.
#[inline]
pub fn sra(value: u8) -> (u8, Flags) {
    let result = (value >> 1) | (value & 0x80);
    (result, shifted(result, value & 0x01 != 0))
}

#[inline]
pub fn srl(value: u8) -> (u8, Flags) {
    let result = value >> 1;
    (result, shifted(result, value & 0x01 != 0))
}

#[inline]
pub fn swap(value: u8) -> (u8, Flags) {
    let result = value.rotate_left(4);
    (result, shifted(result, false))
}

#[inline]
fn shifted(result: u8, carry: bool) -> Flags {
    Flags::new(result == 0, false, false, carry)
}

/// RLCA/RRCA/RLA/RRA: same rotation as the CB forms but Z is always cleared.
#[inline]
pub fn accumulator_rotate((result, flags): (u8, Flags)) -> (u8, Flags) {
    (result, Flags { zero: false, ..flags })
}

/// BIT b: Z is set when the bit is clear; H=1, N=0, C preserved.
#[inline]
pub fn bit(value: u8, mask: u8, flags: Flags) -> Flags {
    Flags::new(value & mask == 0, false, true, flags.carry)
}

#[inline]
pub fn set_bit(value: u8, mask: u8) -> u8 {
    value | mask
}

#[inline]
pub fn res_bit(value: u8, mask: u8) -> u8 {
    value & !mask
}
