//! Host-side tools for working with cartridge ROM files.
//!
//! This converts raw `.ROM` dumps into the `.CAR` format understood by emulators, checks existing
//! `.CAR` files, and reads the ROM size exported by a linked cartridge.

mod car_image;
mod convert;
mod symbols;

pub use car_image::CartImage;
pub use convert::{convert, derive_output, verify, ConvertConfig};
pub use symbols::{rom_size_symbol, RomSizeSymbol};

pub use a8cart_common::{CartType, RcFix};
