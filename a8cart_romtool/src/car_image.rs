use a8cart_common::{
    is_valid_rom_size, CarHeader, CartType, RcFix, BANK_SIZE, CAR_HEADER_LEN, CAR_MAGIC,
};
use anyhow::{bail, Result};
use log::{debug, info, warn};
use std::{fmt, fmt::Formatter, ops::RangeInclusive};

/// The offset of the right-cartridge detection byte within a bank.
const RIGHT_CART_DETECT: usize = 0x1ffc;
/// The area around the detection byte that must be unused for [`RcFix::Auto`] to patch it.
const RIGHT_CART_AREA: RangeInclusive<usize> = 0x1ff0..=0x1fff;

/// A raw cartridge ROM, along with the cartridge type it will be stored as.
#[derive(Clone)]
pub struct CartImage {
    data: Vec<u8>,
    cart_type: CartType,
}
impl CartImage {
    /// Produces a cartridge image from a raw ROM dump.
    pub fn from_rom(rom_data: &[u8]) -> Result<Self> {
        // check that this isn't already a CAR file
        if rom_data.len() > CAR_HEADER_LEN
            && rom_data[0..4] == CAR_MAGIC
            && is_valid_rom_size(rom_data.len() - CAR_HEADER_LEN)
        {
            bail!("CAR files cannot be loaded with from_rom")
        }

        if !is_valid_rom_size(rom_data.len()) {
            bail!("Input size of {} is not appropriate", rom_data.len());
        }
        let cart_type = match CartType::from_rom_size(rom_data.len()) {
            Some(x) => x,
            None => bail!("Unable to determine type for size {}", rom_data.len()),
        };
        debug!("Cartridge type: {} ({})", cart_type.name(), cart_type.id());

        Ok(CartImage { data: Vec::from(rom_data), cart_type })
    }

    /// Produces a cartridge image from the contents of a `.CAR` file, checking its header.
    pub fn from_car(car_data: &[u8]) -> Result<Self> {
        let header = match CarHeader::parse(car_data) {
            Some(x) => x,
            None => bail!("CART header not found."),
        };
        debug!("Found header: {header:?}");

        let rom_data = &car_data[CAR_HEADER_LEN..];
        let cart_type = match CartType::from_id(header.cart_type) {
            Some(x) => x,
            None => bail!("Unsupported cartridge type {}", header.cart_type),
        };
        if cart_type.rom_size() != rom_data.len() {
            bail!(
                "{} should contain {} bytes, found {}",
                cart_type.name(),
                cart_type.rom_size(),
                rom_data.len(),
            );
        }
        if car_data[12..CAR_HEADER_LEN] != [0; 4] {
            warn!("Unused header bytes are not zero.");
        }

        let checksum = CarHeader::checksum(rom_data);
        if checksum != header.checksum {
            bail!("Checksum mismatch: header has {:#010x}, data sums to {checksum:#010x}", header.checksum);
        }

        Ok(CartImage { data: Vec::from(rom_data), cart_type })
    }

    /// Returns the cartridge type of this image.
    pub fn cart_type(&self) -> CartType {
        self.cart_type
    }

    /// Returns the ROM data underlying this image.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Returns the checksum stored in the `.CAR` header for this image.
    pub fn checksum(&self) -> u32 {
        CarHeader::checksum(&self.data)
    }

    /// Patches the right-cartridge detection byte of every bank except the last one, so the image
    /// boots on "OS A". Returns the number of bytes patched.
    ///
    /// In [`RcFix::Auto`] mode, nothing is changed if any bank that needs patching has data near
    /// the detection byte.
    pub fn fixup_right_cart(&mut self, mode: RcFix) -> Result<usize> {
        debug!("rcfix: {mode}");
        if mode == RcFix::Never {
            return Ok(0);
        }

        // the last bank is the left cartridge, and is mapped to 0xa000
        let mut patch_at = Vec::new();
        let mut failed = false;
        for bank in (0..self.data.len() - BANK_SIZE).step_by(BANK_SIZE) {
            let offset = bank + RIGHT_CART_DETECT;
            if self.data[offset] != 0 {
                continue;
            }

            if mode == RcFix::Auto {
                let area = bank + RIGHT_CART_AREA.start()..=bank + RIGHT_CART_AREA.end();
                let used = self.data[area].iter().filter(|&&x| x != 0).count();
                if used > 0 {
                    warn!("rcfix auto: saw {used} non-zero bytes near {offset:#07x}");
                    failed = true;
                }
            }
            patch_at.push(offset);
        }
        if failed {
            bail!("Cannot reliably fixup/patch ROM");
        }

        for &offset in &patch_at {
            self.data[offset] = 0xff;
            debug!("Unzeroed {offset:#07x}");
        }
        Ok(patch_at.len())
    }

    /// Prints statistics about the image using the `log` crate.
    pub fn print_statistics(&self) {
        info!("");
        info!("==================================================================");
        info!("Statistics");
        info!("==================================================================");
        info!("Cartridge Type : {} (type {})", self.cart_type.name(), self.cart_type.id());
        info!("ROM Size       : {} KiB", self.data.len() / 1024);
        info!("Banks          : {}", self.data.len() / BANK_SIZE);
        info!("Checksum       : {:#010x}", self.checksum());
        info!("==================================================================");
        info!("");
    }

    /// Produces the contents of a `.CAR` file for this image.
    pub fn produce_car(&self) -> Vec<u8> {
        let header = CarHeader::for_rom(self.cart_type, &self.data);
        let mut vec = Vec::with_capacity(CAR_HEADER_LEN + self.data.len());
        vec.extend_from_slice(&header.to_bytes());
        vec.extend_from_slice(&self.data);
        vec
    }
}
impl fmt::Debug for CartImage {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        struct Length(usize);
        impl fmt::Debug for Length {
            fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
                write!(f, "[{} bytes]", self.0)
            }
        }
        f.debug_struct("CartImage")
            .field("data", &Length(self.data.len()))
            .field("cart_type", &self.cart_type)
            .finish()
    }
}
