use a8cart_common::ROM_SIZE_SYMBOL;
use anyhow::{bail, Result};
use goblin::elf::{
    section_header::SHN_ABS,
    sym::{bind_to_str, STB_WEAK},
    Elf,
};
use log::{debug, warn};

/// The ROM size symbol, as found in a linked cartridge executable.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RomSizeSymbol {
    /// The value of the symbol, which is the ROM size.
    pub value: u64,
    /// The ELF binding of the symbol (`STB_*`).
    pub binding: u8,
    /// Whether the symbol is absolute rather than relative to a section.
    pub absolute: bool,
}
impl RomSizeSymbol {
    /// Returns whether a strong definition elsewhere would have replaced this symbol.
    pub fn is_weak(&self) -> bool {
        self.binding == STB_WEAK
    }
}

/// Reads the ROM size symbol from a linked cartridge executable.
///
/// Returns `None` if the symbol is not present.
pub fn rom_size_symbol(elf_data: &[u8]) -> Result<Option<RomSizeSymbol>> {
    if elf_data.len() < 4 || &elf_data[0..4] != b"\x7fELF" {
        bail!("Not an ELF binary.")
    }

    debug!("Parsing binary...");
    let elf = Elf::parse(elf_data)?;

    let static_syms = elf.syms.iter().map(|x| (x, elf.strtab.get_at(x.st_name)));
    let dynamic_syms = elf.dynsyms.iter().map(|x| (x, elf.dynstrtab.get_at(x.st_name)));
    for (sym, name) in static_syms.chain(dynamic_syms) {
        if name != Some(ROM_SIZE_SYMBOL) {
            continue;
        }

        debug!("Found symbol: {ROM_SIZE_SYMBOL} = {sym:?} ({})", bind_to_str(sym.st_bind()));
        let symbol = RomSizeSymbol {
            value: sym.st_value,
            binding: sym.st_bind(),
            absolute: sym.st_shndx == SHN_ABS as usize,
        };
        if !symbol.absolute {
            warn!("{ROM_SIZE_SYMBOL} is not an absolute symbol.");
        }
        return Ok(Some(symbol));
    }

    warn!("{ROM_SIZE_SYMBOL} not found.");
    Ok(None)
}
