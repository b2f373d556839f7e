use crate::cpu::{Fault, ProcessorState, R};

#[cfg(test)]
#[path = "./muldiv_test.rs"]
mod muldiv_test;

impl ProcessorState {
    /// Signed multiply (AX <- AL * src).
    /// CF and OF are set together when significant bits are carried into the
    /// upper half of the result, cleared when the result is the pure
    /// sign-extension of the lower half.
    pub fn imul8(&mut self, src: u8) {
        let res = i32::from(self.get_r8(R::AL) as i8) * i32::from(src as i8);
        self.set_r16(R::AX, res as u16);
        let fits = res == i32::from(res as i8);
        self.regs.flags.carry = !fits;
        self.regs.flags.overflow = !fits;
        // The SF, ZF, AF, and PF flags are undefined.
    }

    /// Signed multiply (DX:AX <- AX * src).
    pub fn imul16(&mut self, src: u16) {
        let res = i32::from(self.get_r16(R::AX) as i16) * i32::from(src as i16);
        self.set_r16(R::AX, res as u16);
        self.set_r16(R::DX, (res >> 16) as u16);
        let fits = res == i32::from(res as i16);
        self.regs.flags.carry = !fits;
        self.regs.flags.overflow = !fits;
    }

    /// Signed multiply (EDX:EAX <- EAX * src).
    pub fn imul32(&mut self, src: u32) {
        let res = i64::from(self.get_r32(R::EAX) as i32) * i64::from(src as i32);
        self.set_r32(R::EAX, res as u32);
        self.set_r32(R::EDX, (res >> 32) as u32);
        let fits = res == i64::from(res as i32);
        self.regs.flags.carry = !fits;
        self.regs.flags.overflow = !fits;
    }

    /// Signed multiply truncated to the destination width.
    /// CF and OF are set together whenever the discarded high bits are not
    /// all zero. That is not the sign-extension test the widening form uses;
    /// it is kept as the original routines observed it on real hardware.
    pub fn imul16_trunc(&mut self, dst: u16, src: u16) -> u16 {
        let wide = i32::from(dst as i16) * i32::from(src as i16);
        let hi = (wide as u32 >> 16) as u16;
        self.regs.flags.carry = hi != 0;
        self.regs.flags.overflow = hi != 0;
        wide as u16
    }

    pub fn imul32_trunc(&mut self, dst: u32, src: u32) -> u32 {
        let wide = i64::from(dst as i32) * i64::from(src as i32);
        let hi = (wide as u64 >> 32) as u32;
        self.regs.flags.carry = hi != 0;
        self.regs.flags.overflow = hi != 0;
        wide as u32
    }

    /// Unsigned divide (AL <- AX / src, AH <- AX % src).
    /// A divisor no larger than the high half of the dividend cannot produce
    /// a quotient at the destination width; that case (division by zero
    /// included) is reported as a divide fault and the destination is set to
    /// the all-ones-quotient, zero-remainder sentinel.
    pub fn div8(&mut self, src: u8) {
        let ah = self.get_r8(R::AH);
        if src <= ah {
            self.divide_fault();
            self.set_r8(R::AL, 0xFF);
            self.set_r8(R::AH, 0);
            return;
        }
        let ax = self.get_r16(R::AX);
        self.set_r8(R::AL, (ax / u16::from(src)) as u8);
        self.set_r8(R::AH, (ax % u16::from(src)) as u8);
        // The CF, OF, SF, ZF, AF, and PF flags are undefined.
    }

    /// Unsigned divide (AX <- DX:AX / src, DX <- DX:AX % src).
    pub fn div16(&mut self, src: u16) {
        let dx = self.get_r16(R::DX);
        if src <= dx {
            self.divide_fault();
            self.set_r16(R::AX, 0xFFFF);
            self.set_r16(R::DX, 0);
            return;
        }
        let num = (u32::from(dx) << 16) | u32::from(self.get_r16(R::AX));
        self.set_r16(R::AX, (num / u32::from(src)) as u16);
        self.set_r16(R::DX, (num % u32::from(src)) as u16);
    }

    /// Unsigned divide (EAX <- EDX:EAX / src, EDX <- EDX:EAX % src).
    pub fn div32(&mut self, src: u32) {
        let edx = self.get_r32(R::EDX);
        if src <= edx {
            self.divide_fault();
            self.set_r32(R::EAX, 0xFFFF_FFFF);
            self.set_r32(R::EDX, 0);
            return;
        }
        let num = (u64::from(edx) << 32) | u64::from(self.get_r32(R::EAX));
        self.set_r32(R::EAX, (num / u64::from(src)) as u32);
        self.set_r32(R::EDX, (num % u64::from(src)) as u32);
    }

    fn divide_fault(&mut self) {
        warn!("{}", Fault::DivideOverflow);
        self.last_fault = Some(Fault::DivideOverflow);
    }
}
