/// Global logger installation. Kept in its own test binary since the `log`
/// facade accepts exactly one logger per process.
use hwscore::{flush_all_logs, initialize_logging};
use log::LevelFilter;

#[test]
fn test_initialize_logging_installs_collector_once() {
    let collector = initialize_logging(LevelFilter::Debug).expect("first install succeeds");
    assert_eq!(log::max_level(), LevelFilter::Debug);
    assert!(log::log_enabled!(log::Level::Debug));

    eprintln!("[TEST] Logging through the installed collector");
    log::info!("[TEST] collector installed");
    flush_all_logs(&collector);

    assert!(initialize_logging(LevelFilter::Info).is_err());
}
