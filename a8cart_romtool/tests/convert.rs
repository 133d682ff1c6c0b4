use a8cart_romtool::{convert, verify, CartType, ConvertConfig, RcFix};
use std::{
    fs,
    path::{Path, PathBuf},
    process::Command,
};

/// Creates an empty scratch directory unique to this test.
fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("a8cart_romtool_{}_{name}", std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn write_rom(dir: &Path, name: &str, banks: usize) -> PathBuf {
    let mut data = vec![0xa9; banks * 8192];
    // leave the right-cartridge area unused so auto mode can patch it
    for bank in 0..banks {
        data[bank * 8192 + 0x1ff0..(bank + 1) * 8192].fill(0);
    }
    let path = dir.join(name);
    fs::write(&path, data).unwrap();
    path
}

#[test]
fn converts_and_verifies() {
    let dir = scratch_dir("convert");
    let rom = write_rom(&dir, "game.ROM", 4);

    let output = convert(&ConvertConfig::new(&rom)).unwrap();
    assert_eq!(output, dir.join("game.car"));

    let car = fs::read(&output).unwrap();
    assert_eq!(car.len(), 16 + 32768);
    assert_eq!(&car[0..8], b"CART\0\0\0\x0c");
    assert_eq!(car[16 + 0x1ffc], 0xff);
    assert_eq!(car[16 + 3 * 8192 + 0x1ffc], 0);

    let image = verify(&output).unwrap();
    assert_eq!(image.cart_type(), CartType::Xegs32K);

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn honors_output_and_rcfix() {
    let dir = scratch_dir("options");
    let rom = write_rom(&dir, "game.bin", 2);
    let target = dir.join("custom.car");

    let config = ConvertConfig::new(&rom).output(&target).rcfix(RcFix::Never);
    assert_eq!(convert(&config).unwrap(), target);

    let car = fs::read(&target).unwrap();
    assert_eq!(car[16 + 0x1ffc], 0);
    assert!(!dir.join("game.bin.car").exists());

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn rejects_bad_input() {
    let dir = scratch_dir("reject");

    let odd = dir.join("odd.rom");
    fs::write(&odd, vec![0; 12 * 1024]).unwrap();
    let err = convert(&ConvertConfig::new(&odd)).unwrap_err();
    assert_eq!(err.to_string(), "Input size of 12288 is not appropriate");
    assert!(!dir.join("odd.car").exists());

    let missing = dir.join("missing.rom");
    assert!(convert(&ConvertConfig::new(&missing)).is_err());

    // dirty area around the detection byte in auto mode
    let dirty = dir.join("dirty.rom");
    let mut data = vec![0x60; 16 * 1024];
    data[0x1ffc] = 0;
    fs::write(&dirty, data).unwrap();
    assert!(convert(&ConvertConfig::new(&dirty)).is_err());
    assert!(!dir.join("dirty.car").exists());

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn cli_reports_errors() {
    let dir = scratch_dir("cli");
    let bogus = dir.join("bogus.car");
    fs::write(&bogus, b"not a cartridge").unwrap();

    let out = Command::new(env!("CARGO_BIN_EXE_a8cart_romtool"))
        .arg("verify")
        .arg(&bogus)
        .output()
        .unwrap();
    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("Error encountered"));

    let out = Command::new(env!("CARGO_BIN_EXE_a8cart_romtool"))
        .args(["convert", "--rcfix", "sometimes"])
        .arg(&bogus)
        .output()
        .unwrap();
    assert!(!out.status.success());

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn cli_converts() {
    let dir = scratch_dir("cli_convert");
    let rom = write_rom(&dir, "cart.rom", 1);

    let status = Command::new(env!("CARGO_BIN_EXE_a8cart_romtool"))
        .arg("rom2car")
        .arg(&rom)
        .status()
        .unwrap();
    assert!(status.success());

    let out = Command::new(env!("CARGO_BIN_EXE_a8cart_romtool"))
        .arg("verify")
        .arg(dir.join("cart.car"))
        .output()
        .unwrap();
    assert!(out.status.success());
    assert!(String::from_utf8_lossy(&out.stdout).contains("Standard 8 KB cartridge (type 1)"));

    fs::remove_dir_all(&dir).unwrap();
}
