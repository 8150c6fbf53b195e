//! Control-volume mixed-flow solve: quadratic closure and both branches.

use crate::error::MixingResult;
use crate::gas::{GasConstants, checked_ln, checked_sqrt};
use crate::inlet::{IdealExit, InletState};
use crate::sample::StreamConditions;
use serde::Serialize;

/// Momentum/energy coupling quantity and the quadratic it closes.
///
/// The mixed-flow Mach number satisfies k a M^4 + b M^2 + 1 = 0 in M^2 with
/// a = 1 - J^2 (k-1)/2, b = 2 - k J^2 and discriminant det = b^2 - 4a.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct MixingQuadratic {
    pub j: f64,
    pub a: f64,
    pub b: f64,
    pub det: f64,
}

impl MixingQuadratic {
    /// Form the coupling quantity J and the quadratic coefficients for one
    /// sample.
    pub fn evaluate(
        gas: &GasConstants,
        inlet: &InletState,
        cond: &StreamConditions,
    ) -> MixingResult<Self> {
        let j_sq = cond.trp.sqrt() * ((inlet.asp + 1.0) / (gas.k * cond.mp) + cond.mp)
            + cond.mfr * cond.ms * (cond.ts / inlet.tp0).sqrt()
                / ((1.0 + cond.mfr) * (inlet.ts0 / inlet.tp0))
                * (1.0 + cond.mfr);
        let j = checked_sqrt(j_sq, "momentum coupling quantity")?;

        let a = 1.0 - (j * j) * (gas.k - 1.0) / 2.0;
        let b = 2.0 - gas.k * (j * j);
        let det = (b * b) - (4.0 * a);

        Ok(Self { j, a, b, det })
    }
}

/// One mixed-flow solution branch: end-of-mixing state, diffuser exit and
/// thrust augmentation ratio.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct MixedFlow {
    /// Mach number at the end of mixing
    pub mach: f64,
    /// Mixed stagnation temperature (shared between branches)
    pub t0: f64,
    /// Primary-to-mixed static temperature ratio factor
    pub x: f64,
    /// Static pressure recovery ratio
    pub z: f64,
    /// Static temperature at the end of mixing
    pub t: f64,
    /// Static pressure at the end of mixing
    pub p: f64,
    /// Stagnation pressure at the end of mixing
    pub p0: f64,
    /// Mixed-to-primary static temperature ratio
    pub y: f64,
    /// Mixed-to-secondary reference temperature ratio
    pub w: f64,
    /// Entropy-change proxy across mixing
    pub ds: f64,
    /// Diffuser-exit Mach number
    pub m3: f64,
    /// Diffuser-exit static temperature
    pub t3: f64,
    /// Thrust augmentation ratio
    pub tar: f64,
}

/// Outcome of one sweep sample.
///
/// The supersonic branch shares the subsonic branch's mixed stagnation
/// temperature, static temperature and diffuser-exit temperature; that
/// coupling is part of the recorded numeric contract.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status")]
pub enum SampleOutcome {
    /// det < 0: no real mixed-flow solution at this pressure
    Imaginary,
    /// The supersonic branch hit a domain error; only the subsonic
    /// solution is reported
    SubsonicOnly { subsonic: MixedFlow, reason: String },
    /// Both branches are real
    Both {
        subsonic: MixedFlow,
        supersonic: MixedFlow,
    },
}

impl SampleOutcome {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Imaginary => "imaginary",
            Self::SubsonicOnly { .. } => "subsonic-only",
            Self::Both { .. } => "both",
        }
    }
}

/// Solve one sample: quadratic closure, then the subsonic branch and, when
/// it stays in domain, the supersonic branch.
///
/// det < 0 and supersonic-branch domain errors degrade the outcome; any
/// domain error in the subsonic branch is outside the supported envelope
/// and propagates as fatal.
pub fn solve_sample(
    gas: &GasConstants,
    inlet: &InletState,
    ideal: &IdealExit,
    cond: &StreamConditions,
) -> MixingResult<(MixingQuadratic, SampleOutcome)> {
    let quad = MixingQuadratic::evaluate(gas, inlet, cond)?;
    if quad.det < 0.0 {
        return Ok((quad, SampleOutcome::Imaginary));
    }

    let root = quad.det.sqrt();
    let msub_sq = (-quad.b - root) / (2.0 * gas.k * quad.a);
    let msup_sq = (-quad.b + root) / (2.0 * gas.k * quad.a);

    let msub = checked_sqrt(msub_sq, "subsonic mixed-flow Mach")?;
    let subsonic = subsonic_branch(gas, inlet, ideal, cond, msub)?;

    let outcome = match supersonic_branch(gas, inlet, ideal, cond, &subsonic, msup_sq) {
        Ok(supersonic) => SampleOutcome::Both {
            subsonic,
            supersonic,
        },
        Err(err) => SampleOutcome::SubsonicOnly {
            subsonic,
            reason: err.to_string(),
        },
    };

    Ok((quad, outcome))
}

fn subsonic_branch(
    gas: &GasConstants,
    inlet: &InletState,
    ideal: &IdealExit,
    cond: &StreamConditions,
    msub: f64,
) -> MixingResult<MixedFlow> {
    let n = gas.n();
    let n1 = gas.n1();
    let n2 = gas.n2();

    let tsub0 = (inlet.tp0 + cond.mfr * inlet.ts0) / (1.0 + cond.mfr);
    let xsub = (1.0 + n2 * (cond.mp * cond.mp)) / (1.0 + n2 * (msub * msub));
    let zsub = (1.0 + cond.mfr) * cond.mp
        * checked_sqrt(tsub0 * xsub / inlet.tp0, "subsonic pressure recovery")?
        / ((inlet.asp + 1.0) * msub);
    let tsub = cond.ts * xsub * tsub0 / inlet.ts0;
    let psub = cond.ps * zsub;
    // linear Mach term in the recovery correlation
    let psub0 = (1.0 + n2 * (msub * 2.0)).powf(n) * psub;

    let ysub = tsub / cond.tp;
    let wsub = tsub / inlet.ts0;
    let dssub = n * checked_ln(ysub, "subsonic temperature ratio")?
        + n * cond.mfr * checked_ln(wsub, "subsonic temperature ratio")?
        - (1.0 + cond.mfr) * checked_ln(zsub, "subsonic pressure recovery")?;

    let m3sub = checked_sqrt(
        2.0 * (psub0.powf(n1) - 1.0) / (gas.k - 1.0),
        "subsonic diffuser-exit Mach",
    )?;
    let t3sub = gas.static_temperature(tsub0, m3sub);
    let tarsub = (1.0 + cond.mfr) * m3sub * t3sub.sqrt() / (ideal.m3id * ideal.t3id.sqrt());

    Ok(MixedFlow {
        mach: msub,
        t0: tsub0,
        x: xsub,
        z: zsub,
        t: tsub,
        p: psub,
        p0: psub0,
        y: ysub,
        w: wsub,
        ds: dssub,
        m3: m3sub,
        t3: t3sub,
        tar: tarsub,
    })
}

fn supersonic_branch(
    gas: &GasConstants,
    inlet: &InletState,
    ideal: &IdealExit,
    cond: &StreamConditions,
    subsonic: &MixedFlow,
    msup_sq: f64,
) -> MixingResult<MixedFlow> {
    let n = gas.n();
    let n2 = gas.n2();
    // the mixed stagnation temperature is the subsonic branch's
    let tsub0 = subsonic.t0;

    let msup = checked_sqrt(msup_sq, "supersonic mixed-flow Mach")?;
    let xsup = (1.0 + n2 * (cond.mp * cond.mp)) / (1.0 + n2 * (msup * msup));
    let zsup = (1.0 + cond.mfr) * cond.mp
        * checked_sqrt(subsonic.t * xsup / inlet.tp0, "supersonic pressure recovery")?
        / ((inlet.asp + 1.0) * msup);
    let psup = cond.ps * zsup;
    let psup0 = (1.0 + (gas.k - 1.0) * (msup * msup) / 2.0).powf(n) * psup;
    let tsup = cond.ts * xsup * (tsub0 / inlet.ts0);

    let ysup = tsup / cond.tp;
    let wsup = tsup / cond.ts;
    let dssup = n * checked_ln(ysup, "supersonic temperature ratio")?
        + n * cond.mfr * checked_ln(wsup, "supersonic temperature ratio")?
        - (1.0 + cond.mfr) * checked_ln(zsup, "supersonic pressure recovery")?;

    let m3sup = checked_sqrt(
        2.0 * (psup0.powf(1.0 / n) - 1.0) / (gas.k - 1.0),
        "supersonic diffuser-exit Mach",
    )?;
    let t3sup = gas.static_temperature(tsub0, m3sup);
    let tarsup =
        (1.0 + cond.mfr) * m3sup * subsonic.t3.sqrt() / (ideal.m3id * ideal.t3id.sqrt());

    Ok(MixedFlow {
        mach: msup,
        t0: tsub0,
        x: xsup,
        z: zsup,
        t: tsup,
        p: psup,
        p0: psup0,
        y: ysup,
        w: wsup,
        ds: dssup,
        m3: m3sup,
        t3: t3sup,
        tar: tarsup,
    })
}
