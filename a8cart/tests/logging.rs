#![cfg(feature = "binary")]

use log::{Level, LevelFilter};

#[test]
fn warnings_are_shown_by_default() {
    if std::env::var_os("RUST_LOG").is_some() {
        return;
    }

    a8cart::init_logger();
    assert_eq!(log::max_level(), LevelFilter::Warn);
    assert!(log::log_enabled!(Level::Warn));
    assert!(!log::log_enabled!(Level::Info));
}
