//! Benchmark harness: probe registry and sequential runner.
//!
//! The harness owns an ordered list of `ProbeDescriptor`s. A run executes
//! them one at a time in registration order, scores each against the
//! injected `BaselineTable`, and streams every report to a `ResultSink`
//! before starting the next probe. There is no composite score.
//!
//! Failure handling follows `HarnessConfig::failure_policy`:
//! - `Abort`: the first probe error ends the run; earlier lines stay printed
//! - `Continue`: the probe is reported as failed with `score: N/A`

pub mod report;
pub mod state;

pub use report::{format_report_line, LineReporter, ResultSink};
pub use state::HarnessState;

use std::io::Write;

use crate::config::{BaselineTable, FailurePolicy, HarnessConfig};
use crate::error::HarnessError;
use crate::models::{ProbeId, ProbeReport, ProbeResult};
use crate::system::performance::{standard_probes, PerformanceScorer, Probe};

/// The unit of registration: a probe plus its display name and baseline.
pub struct ProbeDescriptor {
    pub id: ProbeId,
    pub name: String,
    pub baseline: f64,
    probe: Box<dyn Probe>,
}

impl ProbeDescriptor {
    pub fn probe(&self) -> &dyn Probe {
        self.probe.as_ref()
    }
}

impl std::fmt::Debug for ProbeDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProbeDescriptor")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("baseline", &self.baseline)
            .finish()
    }
}

pub struct Harness {
    baselines: BaselineTable,
    config: HarnessConfig,
    scorer: PerformanceScorer,
    descriptors: Vec<ProbeDescriptor>,
    state: HarnessState,
}

impl Harness {
    /// Empty harness; register probes before running.
    pub fn new(baselines: BaselineTable, config: HarnessConfig) -> Self {
        let scorer = PerformanceScorer::new(config.elapsed_floor);
        Harness {
            baselines,
            config,
            scorer,
            descriptors: Vec::new(),
            state: HarnessState::Idle,
        }
    }

    /// Harness with the ten standard probes registered in order.
    pub fn with_standard_probes(
        baselines: BaselineTable,
        config: HarnessConfig,
        logical_cpus: usize,
    ) -> Result<Self, HarnessError> {
        let mut harness = Harness::new(baselines, config);
        for probe in standard_probes(logical_cpus) {
            harness.register(probe)?;
        }
        Ok(harness)
    }

    /// Append a probe to the run order.
    ///
    /// Fails if the probe has no baseline or is already registered.
    pub fn register(&mut self, probe: Box<dyn Probe>) -> Result<(), HarnessError> {
        let id = probe.id();
        if self.descriptors.iter().any(|d| d.id == id) {
            return Err(HarnessError::DuplicateProbe(id));
        }
        let baseline = self
            .baselines
            .get(id)
            .ok_or(HarnessError::MissingBaseline(id))?;

        log::debug!("[HARNESS] Registered {} (baseline {:.2}s)", id, baseline);
        self.descriptors.push(ProbeDescriptor {
            id,
            name: id.display_name(self.config.locale).to_string(),
            baseline,
            probe,
        });
        Ok(())
    }

    pub fn descriptors(&self) -> &[ProbeDescriptor] {
        &self.descriptors
    }

    pub fn probe_ids(&self) -> Vec<ProbeId> {
        self.descriptors.iter().map(|d| d.id).collect()
    }

    pub fn state(&self) -> HarnessState {
        self.state
    }

    pub fn config(&self) -> &HarnessConfig {
        &self.config
    }

    /// Line reporter in the same locale as the registered display names.
    pub fn line_reporter<W: Write>(&self, writer: W) -> LineReporter<W> {
        LineReporter::new(writer, self.config.locale)
    }

    fn transition(&mut self, next: HarnessState) -> Result<(), HarnessError> {
        let from = self.state;
        self.state
            .transition_to(next)
            .map_err(|_| HarnessError::InvalidTransition {
                from: from.to_string(),
                to: next.to_string(),
            })
    }

    /// Run every registered probe in order, streaming each report to `sink`.
    pub fn run<S: ResultSink + ?Sized>(
        &mut self,
        sink: &mut S,
    ) -> Result<Vec<ProbeReport>, HarnessError> {
        if self.state.is_terminal() {
            self.transition(HarnessState::Idle)?;
        }

        let total = self.descriptors.len();
        log::info!("[HARNESS] Starting run of {} probes", total);
        let mut reports = Vec::with_capacity(total);

        for index in 0..total {
            let id = self.descriptors[index].id;
            self.transition(HarnessState::Running(id))?;
            log::info!("[HARNESS] [{}/{}] Running {}", index + 1, total, id);

            let descriptor = &self.descriptors[index];
            let report = match descriptor.probe.run() {
                Ok(elapsed) => {
                    let score = self.scorer.score(elapsed, descriptor.baseline);
                    log::info!(
                        "[HARNESS] {} finished in {:.4}s (score {:.2})",
                        id,
                        elapsed,
                        score
                    );
                    ProbeReport::Completed(ProbeResult::new(
                        id,
                        descriptor.name.clone(),
                        elapsed,
                        score,
                    ))
                }
                Err(source) => match self.config.failure_policy {
                    FailurePolicy::Abort => {
                        log::error!("[HARNESS] {} failed, aborting run: {}", id, source);
                        self.transition(HarnessState::Aborted(id))?;
                        return Err(HarnessError::Probe { probe: id, source });
                    }
                    FailurePolicy::Continue => {
                        log::warn!("[HARNESS] {} failed, continuing: {}", id, source);
                        ProbeReport::Failed {
                            probe: id,
                            name: descriptor.name.clone(),
                            error: source.to_string(),
                        }
                    }
                },
            };

            if let Err(e) = sink.emit(&report) {
                log::error!("[HARNESS] Failed to emit {} report, aborting run: {}", id, e);
                self.transition(HarnessState::Aborted(id))?;
                return Err(HarnessError::Report(e));
            }
            reports.push(report);
            self.transition(HarnessState::Collected(id))?;
        }

        self.transition(HarnessState::Done)?;
        log::info!("[HARNESS] Run complete");
        Ok(reports)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProbeError;
    use std::io;
    use crate::models::Locale;

    struct FixedProbe {
        id: ProbeId,
        elapsed: f64,
    }

    impl Probe for FixedProbe {
        fn id(&self) -> ProbeId {
            self.id
        }

        fn run(&self) -> Result<f64, ProbeError> {
            Ok(self.elapsed)
        }
    }

    struct FailingProbe(ProbeId);

    impl Probe for FailingProbe {
        fn id(&self) -> ProbeId {
            self.0
        }

        fn run(&self) -> Result<f64, ProbeError> {
            Err(ProbeError::Verification("stub failure".to_string()))
        }
    }

    fn fixed(id: ProbeId, elapsed: f64) -> Box<dyn Probe> {
        Box::new(FixedProbe { id, elapsed })
    }

    #[test]
    fn test_register_requires_baseline() {
        let baselines = BaselineTable::from_entries([(ProbeId::Sort, 2.0)]);
        let mut harness = Harness::new(baselines, HarnessConfig::default());
        assert!(harness.register(fixed(ProbeId::Sort, 1.0)).is_ok());
        assert!(matches!(
            harness.register(fixed(ProbeId::Matrix, 1.0)),
            Err(HarnessError::MissingBaseline(ProbeId::Matrix))
        ));
    }

    #[test]
    fn test_register_rejects_duplicates() {
        let mut harness = Harness::new(BaselineTable::reference(), HarnessConfig::default());
        harness.register(fixed(ProbeId::Sort, 1.0)).unwrap();
        assert!(matches!(
            harness.register(fixed(ProbeId::Sort, 1.0)),
            Err(HarnessError::DuplicateProbe(ProbeId::Sort))
        ));
    }

    #[test]
    fn test_standard_registration_order() {
        let harness =
            Harness::with_standard_probes(BaselineTable::reference(), HarnessConfig::default(), 2)
                .unwrap();
        assert_eq!(harness.probe_ids(), ProbeId::ALL.to_vec());
        assert_eq!(harness.descriptors()[0].baseline, 5.0);
        assert_eq!(harness.descriptors()[6].baseline, 0.2);
    }

    #[test]
    fn test_run_scores_against_baseline() {
        let mut harness = Harness::new(BaselineTable::reference(), HarnessConfig::default());
        harness.register(fixed(ProbeId::SingleCore, 5.0)).unwrap();
        harness.register(fixed(ProbeId::MultiCore, 1.25)).unwrap();

        let mut sink: Vec<ProbeReport> = Vec::new();
        let reports = harness.run(&mut sink).unwrap();

        assert_eq!(reports, sink);
        assert_eq!(reports[0].result().unwrap().score, 100.0);
        assert_eq!(reports[1].result().unwrap().score, 200.0);
        assert_eq!(harness.state(), HarnessState::Done);
    }

    #[test]
    fn test_abort_policy_stops_at_first_failure() {
        let mut harness = Harness::new(BaselineTable::reference(), HarnessConfig::default());
        harness.register(fixed(ProbeId::SingleCore, 5.0)).unwrap();
        harness.register(Box::new(FailingProbe(ProbeId::Matrix))).unwrap();
        harness.register(fixed(ProbeId::Sort, 2.0)).unwrap();

        let mut sink: Vec<ProbeReport> = Vec::new();
        let err = harness.run(&mut sink).unwrap_err();

        assert_eq!(err.probe(), Some(ProbeId::Matrix));
        assert_eq!(sink.len(), 1, "completed lines stay emitted");
        assert_eq!(harness.state(), HarnessState::Aborted(ProbeId::Matrix));
    }

    #[test]
    fn test_continue_policy_reports_failure() {
        let config = HarnessConfig::default().with_failure_policy(FailurePolicy::Continue);
        let mut harness = Harness::new(BaselineTable::reference(), config);
        harness.register(Box::new(FailingProbe(ProbeId::Matrix))).unwrap();
        harness.register(fixed(ProbeId::Sort, 2.0)).unwrap();

        let mut sink: Vec<ProbeReport> = Vec::new();
        let reports = harness.run(&mut sink).unwrap();

        assert!(reports[0].is_failed());
        assert_eq!(reports[1].result().unwrap().score, 100.0);
        assert_eq!(harness.state(), HarnessState::Done);
    }

    #[test]
    fn test_rerun_after_done() {
        let mut harness = Harness::new(BaselineTable::reference(), HarnessConfig::default());
        harness.register(fixed(ProbeId::Sort, 1.0)).unwrap();
        let mut sink: Vec<ProbeReport> = Vec::new();
        harness.run(&mut sink).unwrap();
        harness.run(&mut sink).unwrap();
        assert_eq!(sink.len(), 2);
    }

    #[test]
    fn test_empty_harness_finishes() {
        let mut harness = Harness::new(BaselineTable::reference(), HarnessConfig::default());
        let mut sink: Vec<ProbeReport> = Vec::new();
        assert!(harness.run(&mut sink).unwrap().is_empty());
        assert_eq!(harness.state(), HarnessState::Done);
    }

    #[test]
    fn test_zero_elapsed_uses_floor() {
        let mut harness = Harness::new(BaselineTable::reference(), HarnessConfig::default());
        harness.register(fixed(ProbeId::Sort, 0.0)).unwrap();
        let mut sink: Vec<ProbeReport> = Vec::new();
        let reports = harness.run(&mut sink).unwrap();
        let result = reports[0].result().unwrap();
        assert_eq!(result.elapsed_seconds, 0.0);
        assert!(result.score.is_finite());
    }

    struct BrokenSink;

    impl ResultSink for BrokenSink {
        fn emit(&mut self, _report: &ProbeReport) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "stdout closed"))
        }
    }

    #[test]
    fn test_failed_emit_leaves_harness_reusable() {
        let mut harness = Harness::new(BaselineTable::reference(), HarnessConfig::default());
        harness.register(fixed(ProbeId::Sort, 1.0)).unwrap();

        let err = harness.run(&mut BrokenSink).unwrap_err();
        assert!(matches!(err, HarnessError::Report(_)));
        assert_eq!(harness.state(), HarnessState::Aborted(ProbeId::Sort));

        let mut sink: Vec<ProbeReport> = Vec::new();
        let reports = harness.run(&mut sink).unwrap();
        assert_eq!(reports.len(), 1);
        assert_eq!(harness.state(), HarnessState::Done);
    }

    #[test]
    fn test_line_reporter_uses_config_locale() {
        let config = HarnessConfig::default().with_locale(Locale::Chinese);
        let mut harness = Harness::new(BaselineTable::reference(), config);
        harness.register(fixed(ProbeId::SingleCore, 5.0)).unwrap();

        let mut reporter = harness.line_reporter(Vec::new());
        harness.run(&mut reporter).unwrap();

        let output = String::from_utf8(reporter.into_inner()).unwrap();
        assert_eq!(output, "单核性能: 5.0000 秒，得分: 100.00\n");
    }

    #[test]
    fn test_names_follow_locale() {
        let config = HarnessConfig::default().with_locale(Locale::Chinese);
        let mut harness = Harness::new(BaselineTable::reference(), config);
        harness.register(fixed(ProbeId::SingleCore, 5.0)).unwrap();
        assert_eq!(harness.descriptors()[0].name, "单核性能");
    }
}
