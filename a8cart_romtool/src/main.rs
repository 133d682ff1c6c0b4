use a8cart_romtool::{ConvertConfig, RcFix};
use anyhow::*;
use clap::{Parser, Subcommand};
use log::{debug, LevelFilter};
use std::{path::PathBuf, result::Result::Ok};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Be verbose
    #[arg(long, global = true)]
    verbose: bool,
    /// Show debugging output (implies --verbose)
    #[arg(long, global = true)]
    debug: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Converts a raw '.ROM' cartridge dump into a '.CAR' file suitable for emulators
    #[command(alias = "rom2car")]
    Convert {
        rom_path: PathBuf,
        /// Output filename (derived from the input filename if not given)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Fix 'OS A' right-cartridge detection (auto/never/always)
        #[arg(long, default_value_t = RcFix::Auto)]
        rcfix: RcFix,
    },
    /// Checks the header and checksum of a '.CAR' file
    Verify { car_path: PathBuf },
    /// Prints the ROM size exported by a linked cartridge executable
    RomSize { elf_path: PathBuf },
}

fn init_logger(cli: &Cli) {
    let level = if cli.debug {
        LevelFilter::Debug
    } else if cli.verbose {
        LevelFilter::Info
    } else {
        LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn execute(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Convert { rom_path, output, rcfix } => {
            let mut config = ConvertConfig::new(rom_path).rcfix(rcfix);
            if let Some(output) = output {
                config = config.output(output);
            }
            a8cart_romtool::convert(&config)?;
        }
        Commands::Verify { car_path } => {
            let image = a8cart_romtool::verify(&car_path)?;
            let ty = image.cart_type();
            println!(
                "{}: {} (type {}), checksum {:#010x}",
                car_path.display(),
                ty.name(),
                ty.id(),
                image.checksum(),
            );
        }
        Commands::RomSize { elf_path } => {
            let elf_data = std::fs::read(&elf_path)
                .with_context(|| format!("Could not read '{}'", elf_path.display()))?;
            match a8cart_romtool::rom_size_symbol(&elf_data)? {
                Some(symbol) => {
                    debug!("{symbol:?}");
                    println!("{}", symbol.value);
                }
                None => bail!("'{}' does not export a ROM size.", elf_path.display()),
            }
        }
    }
    Ok(())
}
fn main() {
    let cli = Cli::parse();
    init_logger(&cli);

    match execute(cli) {
        Ok(_) => {}
        Err(e) => {
            eprintln!("Error encountered: {:?}", e);
            std::process::exit(1);
        }
    }
}
