//! Secondary-pressure sweep driver.

use crate::error::{MixingError, MixingResult};
use crate::gas::GasConstants;
use crate::inlet::{IdealExit, InletState};
use crate::mixing::{MixingQuadratic, SampleOutcome, solve_sample};
use crate::sample::StreamConditions;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Definition of a secondary static pressure sweep.
///
/// The stop bound is exclusive. Samples are produced by accumulating
/// `ps_step` onto `ps_start`, so the sample pressures carry the same
/// floating-point drift as the recorded reference trace.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PressureSweep {
    pub ps_start: f64,
    pub ps_stop: f64,
    pub ps_step: f64,
}

impl Default for PressureSweep {
    fn default() -> Self {
        Self {
            ps_start: 0.2,
            ps_stop: 0.99,
            ps_step: 0.02,
        }
    }
}

/// One evaluated sweep sample.
#[derive(Debug, Clone, Serialize)]
pub struct SampleReport {
    /// Secondary static pressure of this sample
    pub ps: f64,
    pub conditions: StreamConditions,
    pub quadratic: MixingQuadratic,
    #[serde(flatten)]
    pub outcome: SampleOutcome,
}

/// Sample counts by outcome.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SweepSummary {
    pub samples: usize,
    pub both: usize,
    pub subsonic_only: usize,
    pub imaginary: usize,
}

/// Result of a full sweep, in increasing-pressure order.
#[derive(Debug, Clone, Serialize)]
pub struct SweepResult {
    pub ideal: IdealExit,
    pub reports: Vec<SampleReport>,
    pub summary: SweepSummary,
}

/// Run the mixing solve across the sweep range.
///
/// Sample evaluation is strictly sequential and samples share no mutable
/// state. Per-sample degradations (no real solution, supersonic domain
/// error) are recorded in the reports; anything else aborts the sweep.
pub fn run_sweep(
    gas: &GasConstants,
    inlet: &InletState,
    sweep: &PressureSweep,
) -> MixingResult<SweepResult> {
    if !(sweep.ps_step > 0.0 && sweep.ps_step.is_finite()) {
        return Err(MixingError::InvalidArg {
            what: "sweep step must be positive and finite",
        });
    }
    if !(sweep.ps_start > 0.0 && sweep.ps_start < sweep.ps_stop) {
        return Err(MixingError::InvalidArg {
            what: "sweep start must be positive and below the stop bound",
        });
    }

    let ideal = inlet.ideal_exit(gas)?;
    let mut reports = Vec::new();
    let mut summary = SweepSummary::default();

    let mut ps = sweep.ps_start;
    while ps < sweep.ps_stop {
        let conditions = StreamConditions::evaluate(gas, inlet, ps)?;
        let (quadratic, outcome) = solve_sample(gas, inlet, &ideal, &conditions)?;

        debug!(ps, status = outcome.label(), det = quadratic.det, "sample evaluated");
        summary.samples += 1;
        match outcome {
            SampleOutcome::Both { .. } => summary.both += 1,
            SampleOutcome::SubsonicOnly { .. } => summary.subsonic_only += 1,
            SampleOutcome::Imaginary => summary.imaginary += 1,
        }

        reports.push(SampleReport {
            ps,
            conditions,
            quadratic,
            outcome,
        });

        ps += sweep.ps_step;
    }

    info!(
        samples = summary.samples,
        both = summary.both,
        subsonic_only = summary.subsonic_only,
        imaginary = summary.imaginary,
        "sweep complete"
    );

    Ok(SweepResult {
        ideal,
        reports,
        summary,
    })
}
