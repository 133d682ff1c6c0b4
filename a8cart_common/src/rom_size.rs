use core::fmt;

/// The error returned when the configured ROM size cannot be parsed.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum InvalidRomSize {
    Empty,
    NotANumber,
    TooLarge,
}
impl fmt::Display for InvalidRomSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            InvalidRomSize::Empty => "ROM size is empty",
            InvalidRomSize::NotANumber => "ROM size is not a decimal or 0x-prefixed hex integer",
            InvalidRomSize::TooLarge => "ROM size does not fit in 32 bits",
        })
    }
}
impl core::error::Error for InvalidRomSize {}

/// Parses a configured ROM size, given either in decimal or as `0x`-prefixed hexadecimal.
///
/// Surrounding whitespace is ignored. Use [`rom_size_text`] to get the text that is printed.
pub fn parse_rom_size(text: &str) -> Result<u32, InvalidRomSize> {
    let text = rom_size_text(text);
    let (digits, radix) = match text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
        Some(hex) => (hex, 16),
        None => (text, 10),
    };
    if digits.is_empty() {
        return Err(if text.is_empty() { InvalidRomSize::Empty } else { InvalidRomSize::NotANumber });
    }

    let mut value = 0u32;
    for ch in digits.chars() {
        let digit = ch.to_digit(radix).ok_or(InvalidRomSize::NotANumber)?;
        value = value
            .checked_mul(radix)
            .and_then(|x| x.checked_add(digit))
            .ok_or(InvalidRomSize::TooLarge)?;
    }
    Ok(value)
}

/// Returns the text of a configured ROM size as it is substituted into the startup banner.
pub fn rom_size_text(text: &str) -> &str {
    text.trim()
}
