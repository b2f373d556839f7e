// these modules are re-exported as a single module

pub use self::register::*;
mod register;

pub use self::flag::*;
mod flag;

pub use self::fpu::*;
mod fpu;

mod alu;
mod condition;
mod muldiv;
mod shift;

use std::num::Wrapping;

use crate::memory::{Memory, Width, SELECTOR_STACK, STACK_SIZE};


quick_error! {
    /// Non-fatal diagnostics. Execution always continues past these with a
    /// garbage-in, garbage-out result so bulk test harnesses never abort.
    #[derive(Copy, Clone, Debug, PartialEq)]
    pub enum Fault {
        NullSelector(selector: u16, addr: u32) {
            display("access through null selector {:04X} at {:08X}", selector, addr)
        }
        StackBounds(addr: u32) {
            display("stack segment access out of bounds at {:08X}", addr)
        }
        DivideOverflow {
            display("quotient does not fit the destination of an unsigned divide")
        }
        FpuStackUnderflow {
            display("fpu operation read an empty stack slot")
        }
        FpuStackOverflow {
            display("fpu push onto an occupied stack slot")
        }
        FpuZeroDivide {
            display("fpu divide by a zero-tagged divisor")
        }
        FpuInvalidOperands(dst: u8, src: u8) {
            display("no two-register fpu form addresses st{} and st{}", dst, src)
        }
    }
}

/// The visible processor state of one emulated routine invocation: register
/// file, flags, the floating-point stack and the synthetic stack segment.
/// Created per invocation, mutated in place by every operation, discarded
/// when the routine returns.
#[derive(Clone)]
pub struct ProcessorState {
    pub regs: RegisterState,
    pub fpu: FPU,
    pub mem: Memory,
    pub last_fault: Option<Fault>,
}

impl Default for ProcessorState {
    fn default() -> Self {
        let mut state = ProcessorState {
            regs: RegisterState::default(),
            fpu: FPU::default(),
            mem: Memory::default(),
            last_fault: None,
        };
        state.regs.set_r16(R::SS, SELECTOR_STACK);
        state.regs.set_r32(R::ESP, STACK_SIZE as u32);
        state
    }
}

impl ProcessorState {
    pub fn new() -> Self {
        ProcessorState::default()
    }

    /// returns registers, flags, fpu and stack to their power-on values,
    /// keeping the installed memory hooks
    pub fn reset(&mut self) {
        let read_hook = self.mem.read_hook;
        let write_hook = self.mem.write_hook;
        *self = ProcessorState::default();
        self.mem.read_hook = read_hook;
        self.mem.write_hook = write_hook;
    }

    pub fn get_r8(&self, r: R) -> u8 {
        self.regs.get_r8(r)
    }

    pub fn set_r8(&mut self, r: R, val: u8) {
        self.regs.set_r8(r, val);
    }

    pub fn get_r16(&self, r: R) -> u16 {
        self.regs.get_r16(r)
    }

    pub fn set_r16(&mut self, r: R, val: u16) {
        self.regs.set_r16(r, val);
    }

    pub fn get_r32(&self, r: R) -> u32 {
        self.regs.get_r32(r)
    }

    pub fn set_r32(&mut self, r: R, val: u32) {
        self.regs.set_r32(r, val);
    }

    /// selector-checked read, used for anything the routine addresses
    /// indirectly
    pub fn mem_read(&mut self, selector: u16, addr: u32, width: Width) -> u32 {
        let v = self.mem.read(selector, addr, width);
        if let Some(fault) = self.mem.last_fault.take() {
            self.last_fault = Some(fault);
        }
        v
    }

    pub fn mem_write(&mut self, selector: u16, addr: u32, width: Width, value: u32) {
        self.mem.write(selector, addr, width, value);
        if let Some(fault) = self.mem.last_fault.take() {
            self.last_fault = Some(fault);
        }
    }

    pub fn push16(&mut self, data: u16) {
        let esp = (Wrapping(self.get_r32(R::ESP)) - Wrapping(2)).0;
        self.set_r32(R::ESP, esp);
        let ss = self.get_r16(R::SS);
        debug!("push16 {:04X} to {:04X}:{:08X}", data, ss, esp);
        self.mem_write(ss, esp, Width::Word, u32::from(data));
    }

    pub fn push32(&mut self, data: u32) {
        let esp = (Wrapping(self.get_r32(R::ESP)) - Wrapping(4)).0;
        self.set_r32(R::ESP, esp);
        let ss = self.get_r16(R::SS);
        debug!("push32 {:08X} to {:04X}:{:08X}", data, ss, esp);
        self.mem_write(ss, esp, Width::Dword, data);
    }

    pub fn pop16(&mut self) -> u16 {
        let esp = self.get_r32(R::ESP);
        let ss = self.get_r16(R::SS);
        let data = self.mem_read(ss, esp, Width::Word) as u16;
        self.set_r32(R::ESP, (Wrapping(esp) + Wrapping(2)).0);
        data
    }

    pub fn pop32(&mut self) -> u32 {
        let esp = self.get_r32(R::ESP);
        let ss = self.get_r16(R::SS);
        let data = self.mem_read(ss, esp, Width::Dword);
        self.set_r32(R::ESP, (Wrapping(esp) + Wrapping(4)).0);
        data
    }

    /// store AL at ES:EDI, stepping EDI by the direction flag
    pub fn stosb(&mut self) {
        let al = self.get_r8(R::AL);
        let es = self.get_r16(R::ES);
        let edi = self.get_r32(R::EDI);
        self.mem_write(es, edi, Width::Byte, u32::from(al));
        self.step_edi(1);
    }

    /// store AX at ES:EDI, stepping EDI by the direction flag
    pub fn stosw(&mut self) {
        let ax = self.get_r16(R::AX);
        let es = self.get_r16(R::ES);
        let edi = self.get_r32(R::EDI);
        self.mem_write(es, edi, Width::Word, u32::from(ax));
        self.step_edi(2);
    }

    /// store EAX at ES:EDI, stepping EDI by the direction flag
    pub fn stosd(&mut self) {
        let eax = self.get_r32(R::EAX);
        let es = self.get_r16(R::ES);
        let edi = self.get_r32(R::EDI);
        self.mem_write(es, edi, Width::Dword, eax);
        self.step_edi(4);
    }

    fn step_edi(&mut self, bytes: u32) {
        let edi = self.get_r32(R::EDI);
        let edi = if !self.regs.flags.direction {
            (Wrapping(edi) + Wrapping(bytes)).0
        } else {
            (Wrapping(edi) - Wrapping(bytes)).0
        };
        self.set_r32(R::EDI, edi);
    }
}
