#![allow(dead_code)]
#![allow(clippy::verbose_bit_mask)]

#[macro_use]
extern crate quick_error;

#[macro_use]
extern crate log;

#[cfg(test)] #[macro_use]
extern crate pretty_assertions;

pub mod cpu;
pub mod memory;
