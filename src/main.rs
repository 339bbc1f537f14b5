use std::io;

use hwscore::{BaselineTable, HardwareDetector, Harness, HarnessConfig};

fn main() -> hwscore::Result<()> {
    // Diagnostics go to stderr; stdout carries only the report lines
    let logger = hwscore::initialize_logging(log::LevelFilter::Info)?;
    log::info!("hwscore {} starting", hwscore::VERSION);

    let mut detector = HardwareDetector::new();
    let hardware = detector.detect_all();
    log::info!("[Main] Host: {}", hardware);

    let mut harness = Harness::with_standard_probes(
        BaselineTable::reference(),
        HarnessConfig::default(),
        hardware.logical_cpus,
    )?;

    let stdout = io::stdout();
    let mut reporter = harness.line_reporter(stdout.lock());
    let outcome = harness.run(&mut reporter);

    if let Err(e) = &outcome {
        log::error!("[Main] Run aborted: {}", e);
    }
    hwscore::flush_all_logs(&logger);

    outcome?;
    Ok(())
}
