use a8cart::{BANNER, ROM_SIZE, ROM_SIZE_STR};
use std::{
    io::{BufRead, BufReader, Read},
    process::{Child, Command, Stdio},
    thread,
    time::Duration,
};

fn spawn_cartridge() -> Child {
    Command::new(env!("CARGO_BIN_EXE_cartridge"))
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .expect("failed to start cartridge")
}

#[test]
fn prints_banner_and_never_exits() {
    let mut child = spawn_cartridge();
    let mut stdout = BufReader::new(child.stdout.take().unwrap());

    let mut line = String::new();
    stdout.read_line(&mut line).unwrap();
    assert_eq!(line, format!("Cartridge {ROM_SIZE_STR}\n"));
    assert_eq!(line.trim_end(), BANNER);

    // the cartridge halts rather than exiting
    thread::sleep(Duration::from_millis(200));
    assert!(child.try_wait().unwrap().is_none(), "cartridge exited on its own");

    child.kill().unwrap();
    child.wait().unwrap();

    // nothing is written after the banner
    let mut rest = String::new();
    stdout.read_to_string(&mut rest).unwrap();
    assert_eq!(rest, "");
}

#[test]
#[cfg(target_os = "linux")]
fn exports_rom_size_symbol() {
    let elf_data = std::fs::read(env!("CARGO_BIN_EXE_cartridge")).unwrap();
    let symbol = a8cart_romtool::rom_size_symbol(&elf_data).unwrap().expect("symbol not exported");
    assert_eq!(symbol.value, ROM_SIZE as u64);
    assert!(symbol.absolute);

    // a strong definition in another object would take its place
    assert!(symbol.is_weak());
}
