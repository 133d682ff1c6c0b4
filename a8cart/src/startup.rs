use crate::{BANNER, ROM_SIZE};
use log::{debug, warn};
use std::{io, io::Write, thread};

/// Writes the startup banner to a stream, followed by a newline, and flushes it.
pub fn write_banner(mut w: impl Write) -> io::Result<()> {
    write_line(&mut w, BANNER)
}

fn write_line(w: &mut impl Write, line: &str) -> io::Result<()> {
    w.write_all(line.as_bytes())?;
    w.write_all(b"\n")?;
    w.flush()
}

/// Sets up logging for the `cartridge` binary.
///
/// Warnings are shown by default, so a failure to print the banner is visible on stderr. `RUST_LOG`
/// overrides this.
#[cfg(feature = "binary")]
pub fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();
}

/// Halts the current thread forever.
///
/// The thread is parked rather than spun, so the cartridge idles without occupying a core.
pub fn halt() -> ! {
    debug!("Halting.");
    loop {
        // unpark and spurious wakeups land here
        thread::park();
    }
}

/// The startup routine: prints the banner to standard output, then halts.
pub fn start() -> ! {
    debug!("Starting cartridge with a ROM size of {ROM_SIZE} bytes.");
    if !crate::rom_size_is_standard() {
        warn!("ROM size {ROM_SIZE} does not match a standard cartridge size.");
    }

    if let Err(e) = write_banner(io::stdout().lock()) {
        warn!("Could not write banner: {e}");
    }
    halt()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_banner() {
        let mut out = Vec::new();
        write_banner(&mut out).unwrap();
        assert_eq!(out, format!("Cartridge {}\n", crate::ROM_SIZE_STR).into_bytes());
    }

    #[test]
    fn test_write_error() {
        struct Broken;
        impl Write for Broken {
            fn write(&mut self, _: &[u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
            }
            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }
        assert_eq!(write_banner(Broken).unwrap_err().kind(), io::ErrorKind::BrokenPipe);
    }
}
