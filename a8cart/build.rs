use a8cart_common::{is_valid_rom_size, parse_rom_size, rom_size_text};

/// The ROM size used when `CART_ROM_SIZE` is not set: the smallest standard cartridge.
const DEFAULT_ROM_SIZE: &str = "8192";

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=CART_ROM_SIZE");

    let configured = match std::env::var("CART_ROM_SIZE") {
        Ok(str) => str,
        Err(std::env::VarError::NotPresent) => {
            println!("cargo:warning=CART_ROM_SIZE is not set, defaulting to {DEFAULT_ROM_SIZE}");
            DEFAULT_ROM_SIZE.to_string()
        }
        Err(std::env::VarError::NotUnicode(_)) => panic!("CART_ROM_SIZE is not valid unicode"),
    };

    let rom_size = match parse_rom_size(&configured) {
        Ok(size) => size,
        Err(e) => panic!("Invalid CART_ROM_SIZE {configured:?}: {e}"),
    };
    if !is_valid_rom_size(rom_size as usize) {
        println!("cargo:warning=ROM size {rom_size} does not match any standard cartridge size");
    }

    // the value is parsed from decimal, the text is printed as given
    println!("cargo:rustc-env=A8CART_ROM_SIZE={rom_size}");
    println!("cargo:rustc-env=A8CART_ROM_SIZE_STR={}", rom_size_text(&configured));
}
