a8cart::export_rom_size!();

fn main() {
    a8cart::init_logger();
    a8cart::start()
}
