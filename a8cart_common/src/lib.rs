//! A structures-only library for data shared between the cartridge runtime and the tools that run
//! on the host system.
//!
//! Not public API.

#![no_std]

#[cfg(test)]
extern crate std;

mod car;
mod rcfix;
mod rom_size;

pub use car::*;
pub use rcfix::*;
pub use rom_size::*;

/// The name of the absolute symbol that carries the configured ROM size in a linked cartridge.
pub const ROM_SIZE_SYMBOL: &str = "__cart_rom_size";
