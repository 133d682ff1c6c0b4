use byteorder::{BigEndian, ByteOrder};

/// The size of a single cartridge bank, as seen in the `0xa000..0xc000` window.
pub const BANK_SIZE: usize = 8 * 1024;

/// The length of the header that precedes the ROM data in a `.CAR` file.
pub const CAR_HEADER_LEN: usize = 16;

/// The magic number at the start of every `.CAR` file.
pub const CAR_MAGIC: [u8; 4] = *b"CART";

/// Returns whether a ROM of the given length can be stored in a `.CAR` file.
///
/// Valid sizes are powers of two between 8 KiB and 1 MiB inclusive.
pub const fn is_valid_rom_size(len: usize) -> bool {
    if !len.is_power_of_two() {
        return false;
    }
    let kib = len >> 10;
    kib >= 8 && kib <= 1024
}

/// A cartridge type understood by emulators that load `.CAR` files.
///
/// Only the plain (non-bankswitched and XEGS) layouts are represented, as those are the ones that
/// can be derived from the ROM size alone.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum CartType {
    Standard8K,
    Standard16K,
    Xegs32K,
    Xegs64K,
    Xegs128K,
    Xegs256K,
    Xegs512K,
    Xegs1024K,
}
impl CartType {
    /// Every supported cartridge type, ordered by size.
    pub const ALL: [CartType; 8] = [
        CartType::Standard8K,
        CartType::Standard16K,
        CartType::Xegs32K,
        CartType::Xegs64K,
        CartType::Xegs128K,
        CartType::Xegs256K,
        CartType::Xegs512K,
        CartType::Xegs1024K,
    ];

    /// Returns the cartridge type used for a ROM of a given length.
    pub const fn from_rom_size(len: usize) -> Option<CartType> {
        if !is_valid_rom_size(len) {
            return None;
        }
        match len / 1024 {
            8 => Some(CartType::Standard8K),
            16 => Some(CartType::Standard16K),
            32 => Some(CartType::Xegs32K),
            64 => Some(CartType::Xegs64K),
            128 => Some(CartType::Xegs128K),
            256 => Some(CartType::Xegs256K),
            512 => Some(CartType::Xegs512K),
            1024 => Some(CartType::Xegs1024K),
            _ => None,
        }
    }

    /// Returns the cartridge type with a given `.CAR` type number.
    pub fn from_id(id: u32) -> Option<CartType> {
        Self::ALL.into_iter().find(|x| x.id() == id)
    }

    /// Returns the type number stored in the `.CAR` header.
    pub const fn id(&self) -> u32 {
        match self {
            CartType::Standard8K => 1,
            CartType::Standard16K => 2,
            CartType::Xegs32K => 12,
            CartType::Xegs64K => 13,
            CartType::Xegs128K => 14,
            CartType::Xegs256K => 23,
            CartType::Xegs512K => 24,
            CartType::Xegs1024K => 25,
        }
    }

    /// Returns the length of the ROM data for this cartridge type.
    pub const fn rom_size(&self) -> usize {
        match self {
            CartType::Standard8K => 8 * 1024,
            CartType::Standard16K => 16 * 1024,
            CartType::Xegs32K => 32 * 1024,
            CartType::Xegs64K => 64 * 1024,
            CartType::Xegs128K => 128 * 1024,
            CartType::Xegs256K => 256 * 1024,
            CartType::Xegs512K => 512 * 1024,
            CartType::Xegs1024K => 1024 * 1024,
        }
    }

    /// Returns a human readable name for this cartridge type.
    pub const fn name(&self) -> &'static str {
        match self {
            CartType::Standard8K => "Standard 8 KB cartridge",
            CartType::Standard16K => "Standard 16 KB cartridge",
            CartType::Xegs32K => "XEGS 32 KB cartridge",
            CartType::Xegs64K => "XEGS 64 KB cartridge",
            CartType::Xegs128K => "XEGS 128 KB cartridge",
            CartType::Xegs256K => "XEGS 256 KB cartridge",
            CartType::Xegs512K => "XEGS 512 KB cartridge",
            CartType::Xegs1024K => "XEGS 1 MB cartridge",
        }
    }
}

/// The header of a `.CAR` file.
///
/// All multi-byte fields are stored big-endian. The last four bytes of the header are unused and
/// always zero.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct CarHeader {
    pub cart_type: u32,
    pub checksum: u32,
}
impl CarHeader {
    /// Creates the header for the given ROM data.
    pub fn for_rom(cart_type: CartType, data: &[u8]) -> Self {
        CarHeader { cart_type: cart_type.id(), checksum: Self::checksum(data) }
    }

    /// Calculates the checksum of some ROM data. This is the sum of all bytes, wrapping at 32 bits.
    pub fn checksum(data: &[u8]) -> u32 {
        data.iter().fold(0u32, |acc, &b| acc.wrapping_add(b as u32))
    }

    /// Encodes this header.
    pub fn to_bytes(&self) -> [u8; CAR_HEADER_LEN] {
        let mut header = [0; CAR_HEADER_LEN];
        header[0..4].copy_from_slice(&CAR_MAGIC);
        BigEndian::write_u32(&mut header[4..8], self.cart_type);
        BigEndian::write_u32(&mut header[8..12], self.checksum);
        header
    }

    /// Decodes the header at the start of a `.CAR` file.
    ///
    /// Returns `None` if the data is too short or does not start with the `CART` magic number.
    pub fn parse(data: &[u8]) -> Option<Self> {
        if data.len() < CAR_HEADER_LEN || data[0..4] != CAR_MAGIC {
            return None;
        }
        Some(CarHeader {
            cart_type: BigEndian::read_u32(&data[4..8]),
            checksum: BigEndian::read_u32(&data[8..12]),
        })
    }
}
