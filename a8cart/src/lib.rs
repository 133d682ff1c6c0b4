//! A cartridge image that reports its own ROM size.
//!
//! The size is fixed when this crate is built, from the `CART_ROM_SIZE` environment variable. On
//! start, the cartridge prints `Cartridge <size>` and then halts forever, the same way a reset
//! vector with nowhere to return to would.
//!
//! The size is additionally exported to other link units as the weak absolute symbol
//! `__cart_rom_size`. See [`export_rom_size!`].

mod rom_size;
mod startup;

pub use rom_size::*;
pub use startup::{halt, start, write_banner};

#[cfg(feature = "binary")]
pub use startup::init_logger;

/// **NOT** public API!! Only for this crate's macros.
#[doc(hidden)]
pub mod __macro_export {
    pub use core;
}

/// Exports the configured ROM size as the weak absolute symbol `__cart_rom_size`.
///
/// The *value* of the symbol is the ROM size, not the address of some data holding it. A strong
/// definition of the same symbol in another object file takes precedence at link time.
///
/// This should be invoked once, in the crate producing the final executable. It expands to nothing
/// on targets that do not use ELF.
#[macro_export]
macro_rules! export_rom_size {
    () => {
        #[cfg(all(unix, not(target_vendor = "apple")))]
        $crate::__macro_export::core::arch::global_asm!(
            ".weak __cart_rom_size",
            ".set __cart_rom_size, {size}",
            size = const $crate::ROM_SIZE,
        );
    };
}
