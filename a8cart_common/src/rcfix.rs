use core::{fmt, str::FromStr};

/// Controls whether the right-cartridge detection byte of each bank is patched.
///
/// "OS A" on the Atari 400/800 supports a second (right) cartridge, and treats a zero at `0x9ffc`
/// as its presence. Cartridges of 16 KiB or more map their earlier banks into that window, so a
/// zero at offset `0x1ffc` of any bank except the last creates a false detection and usually
/// hangs the machine at boot.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum RcFix {
    /// Patch the detection byte only when the area around it is unused.
    #[default]
    Auto,
    /// Never patch the ROM.
    Never,
    /// Always patch the detection byte when it is zero.
    Always,
}
impl FromStr for RcFix {
    type Err = InvalidRcFix;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let is = |name: &str| s.eq_ignore_ascii_case(name);
        if is("auto") {
            Ok(RcFix::Auto)
        } else if is("never") || is("no") {
            Ok(RcFix::Never)
        } else if is("always") || is("yes") {
            Ok(RcFix::Always)
        } else {
            Err(InvalidRcFix)
        }
    }
}
impl fmt::Display for RcFix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            RcFix::Auto => "auto",
            RcFix::Never => "never",
            RcFix::Always => "always",
        })
    }
}

/// The error returned when parsing an unknown [`RcFix`] mode.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct InvalidRcFix;
impl fmt::Display for InvalidRcFix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("invalid rcfix mode (expected auto, never or always)")
    }
}
impl core::error::Error for InvalidRcFix {}

#[cfg(test)]
mod test {
    use crate::{InvalidRcFix, RcFix};
    use std::string::ToString;

    #[test]
    fn test_parse() {
        assert_eq!("auto".parse::<RcFix>(), Ok(RcFix::Auto));
        assert_eq!("AUTO".parse::<RcFix>(), Ok(RcFix::Auto));
        assert_eq!("never".parse::<RcFix>(), Ok(RcFix::Never));
        assert_eq!("No".parse::<RcFix>(), Ok(RcFix::Never));
        assert_eq!("always".parse::<RcFix>(), Ok(RcFix::Always));
        assert_eq!("yes".parse::<RcFix>(), Ok(RcFix::Always));
        assert_eq!("sometimes".parse::<RcFix>(), Err(InvalidRcFix));
        assert_eq!("".parse::<RcFix>(), Err(InvalidRcFix));
    }

    #[test]
    fn test_display() {
        assert_eq!(RcFix::default().to_string(), "auto");
        assert_eq!(RcFix::Never.to_string(), "never");
        assert_eq!(RcFix::Always.to_string(), "always");
    }
}
