#![no_std]
extern crate alloc;

pub mod component;
pub mod font;
pub mod gfx;
pub mod gui;
pub mod text_component;

#[cfg(test)]
mod test_util;
