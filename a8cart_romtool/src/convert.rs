use crate::CartImage;
use a8cart_common::RcFix;
use anyhow::*;
use derive_setters::Setters;
use log::{debug, info};
use std::path::{Path, PathBuf};

/// The settings used to convert a `.ROM` file into a `.CAR` file.
#[derive(Setters, Clone, Debug)]
#[setters(strip_option)]
pub struct ConvertConfig {
    #[setters(skip)]
    input: PathBuf,
    #[setters(into)]
    output: Option<PathBuf>,
    rcfix: RcFix,
}
impl ConvertConfig {
    pub fn new(input: impl Into<PathBuf>) -> Self {
        ConvertConfig { input: input.into(), output: None, rcfix: RcFix::Auto }
    }

    /// Returns the path the `.CAR` file will be written to.
    pub fn output_path(&self) -> PathBuf {
        match &self.output {
            Some(output) => output.clone(),
            None => derive_output(&self.input),
        }
    }
}

/// Derives an output filename, either by replacing a `.rom` extension with `.car` or by appending
/// `.car` to whatever we started with.
pub fn derive_output(path: &Path) -> PathBuf {
    match path.extension() {
        Some(ext) if ext.eq_ignore_ascii_case("rom") => path.with_extension("car"),
        _ => {
            let mut name = path.as_os_str().to_os_string();
            name.push(".car");
            PathBuf::from(name)
        }
    }
}

/// Converts a `.ROM` file into a `.CAR` file, returning the path written to.
pub fn convert(args: &ConvertConfig) -> Result<PathBuf> {
    let output = args.output_path();
    info!("Converting '{}' to '{}'...", args.input.display(), output.display());

    let rom_data = std::fs::read(&args.input)
        .with_context(|| format!("Could not read '{}'", args.input.display()))?;
    info!("Read '{}' size {}", args.input.display(), rom_data.len());

    let mut image = CartImage::from_rom(&rom_data)?;
    let patched = image.fixup_right_cart(args.rcfix)?;
    debug!("Patched {patched} right-cartridge detection bytes.");

    let car_data = image.produce_car();
    std::fs::write(&output, &car_data)
        .with_context(|| format!("Could not write '{}'", output.display()))?;
    info!("Wrote '{}' size {}", output.display(), car_data.len());

    image.print_statistics();
    Ok(output)
}

/// Reads a `.CAR` file and checks that its header matches its contents.
pub fn verify(path: &Path) -> Result<CartImage> {
    let car_data =
        std::fs::read(path).with_context(|| format!("Could not read '{}'", path.display()))?;
    let image = CartImage::from_car(&car_data)
        .with_context(|| format!("'{}' is not a valid CAR file", path.display()))?;
    image.print_statistics();
    Ok(image)
}
