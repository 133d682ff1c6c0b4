use a8cart_common::{is_valid_rom_size, CartType};

/// The ROM size this cartridge was built with, as it was written in `CART_ROM_SIZE`.
pub const ROM_SIZE_STR: &str = env!("A8CART_ROM_SIZE_STR");

/// The ROM size this cartridge was built with, in bytes.
pub const ROM_SIZE: u32 = parse_decimal(env!("A8CART_ROM_SIZE"));

/// The line printed when the cartridge starts.
pub const BANNER: &str = concat!("Cartridge ", env!("A8CART_ROM_SIZE_STR"));

const fn parse_decimal(str: &str) -> u32 {
    let bytes = str.as_bytes();
    assert!(!bytes.is_empty(), "empty ROM size");

    let mut i = 0;
    let mut value = 0u32;
    while i < bytes.len() {
        assert!(bytes[i].is_ascii_digit(), "ROM size is not a decimal number");
        value = value * 10 + (bytes[i] - b'0') as u32;
        i += 1;
    }
    value
}

/// Returns whether the configured ROM size is one a `.CAR` file can describe.
pub fn rom_size_is_standard() -> bool {
    is_valid_rom_size(ROM_SIZE as usize)
}

/// Returns the cartridge type matching the configured ROM size, if there is one.
pub fn cart_type() -> Option<CartType> {
    CartType::from_rom_size(ROM_SIZE as usize)
}
