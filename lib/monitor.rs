//! Injected observer for progress reporting, stage timing, and cancellation.
//!
//! The computation never depends on the observer for correctness; a slow
//! sink only slows the computation down, and [`NoMonitor`] is always a valid
//! substitute.

use std::{ cell::RefCell, fmt, time::Duration };
use indicatif::{ ProgressBar, ProgressStyle };

/// Named stages of Hamiltonian construction.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Stage {
    /// Pairwise neighbor discovery.
    NeighborSearch,
    /// Matrix assembly from onsite energies and hopping amplitudes.
    Assembly,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NeighborSearch => write!(f, "finding neighbors"),
            Self::Assembly => write!(f, "constructing Hamiltonian"),
        }
    }
}

/// Observer interface for long-running construction stages.
///
/// All methods run inline on the calling thread.
pub trait Monitor {
    /// Called with the fraction of work completed, in `[0, 1]`; each stage
    /// ends with a final call at exactly `1.0`.
    fn progress(&self, stage: Stage, fraction: f64) {
        let _ = (stage, fraction);
    }

    /// Called once per stage with its wall-clock duration.
    fn stage_done(&self, stage: Stage, elapsed: Duration) {
        let _ = (stage, elapsed);
    }

    /// Polled once per outer-loop iteration; returning `true` aborts the
    /// computation with [`TbError::Cancelled`][crate::error::TbError].
    fn cancelled(&self) -> bool { false }
}

/// Monitor that ignores everything and never cancels.
#[derive(Copy, Clone, Debug, Default)]
pub struct NoMonitor;

impl Monitor for NoMonitor { }

const BAR_RESOLUTION: u64 = 1000;

/// Terminal progress display, one bar per stage.
#[derive(Debug, Default)]
pub struct ConsoleMonitor {
    bar: RefCell<Option<(Stage, ProgressBar)>>,
}

impl ConsoleMonitor {
    pub fn new() -> Self {
        Self { bar: RefCell::new(None) }
    }

    fn make_bar(stage: Stage) -> ProgressBar {
        let bar = ProgressBar::new(BAR_RESOLUTION);
        bar.set_style(
            ProgressStyle::with_template(
                "{msg}: [{bar:20}] {percent}%")
                .expect("invalid progress bar template")
                .progress_chars("#--"),
        );
        bar.set_message(stage.to_string());
        bar
    }
}

impl Monitor for ConsoleMonitor {
    fn progress(&self, stage: Stage, fraction: f64) {
        let mut cur = self.bar.borrow_mut();
        let stale = cur.as_ref().map(|(s, _)| *s != stage).unwrap_or(true);
        if stale {
            if let Some((_, old)) = cur.take() { old.finish_and_clear(); }
            *cur = Some((stage, Self::make_bar(stage)));
        }
        let (_, bar) = cur.as_ref().unwrap();
        bar.set_position(
            (fraction.clamp(0.0, 1.0) * BAR_RESOLUTION as f64) as u64);
    }

    fn stage_done(&self, stage: Stage, elapsed: Duration) {
        if let Some((s, bar)) = self.bar.borrow_mut().take() {
            if s == stage {
                bar.finish_with_message(
                    format!("{}: done in {:.3} s", stage, elapsed.as_secs_f64()));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_monitor_never_cancels() {
        let mon = NoMonitor;
        assert!(!mon.cancelled());
        mon.progress(Stage::NeighborSearch, 0.5);
        mon.stage_done(Stage::Assembly, Duration::from_millis(1));
    }

    #[test]
    fn stage_display_names() {
        assert_eq!(Stage::NeighborSearch.to_string(), "finding neighbors");
        assert_eq!(Stage::Assembly.to_string(), "constructing Hamiltonian");
    }
}
