//! Per-sample primary/secondary stream conditions.

use crate::error::{MixingError, MixingResult};
use crate::gas::{GasConstants, PA_PER_ATM};
use crate::inlet::InletState;
use ej_core::ensure_finite;
use serde::Serialize;

/// Everything derived from one secondary static pressure sample.
///
/// The area ratio `apt`, speeds of sound, velocities and densities are
/// diagnostics: they are evaluated and reported for every sample but nothing
/// in the mixing solve consumes them. Both densities scale from the secondary
/// static pressure.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct StreamConditions {
    /// Secondary static pressure (the sweep variable)
    pub ps: f64,
    /// Secondary Mach number
    pub ms: f64,
    /// Primary Mach number
    pub mp: f64,
    /// Secondary static temperature
    pub ts: f64,
    /// Primary static temperature
    pub tp: f64,
    /// Primary-to-total area ratio (diagnostic)
    pub apt: f64,
    /// Secondary speed of sound (diagnostic)
    pub cs: f64,
    /// Primary speed of sound (diagnostic)
    pub cp: f64,
    /// Secondary flow speed (diagnostic)
    pub us: f64,
    /// Primary flow speed (diagnostic)
    pub up: f64,
    /// Secondary density (diagnostic)
    pub rhos: f64,
    /// Primary density (diagnostic)
    pub rhop: f64,
    /// Secondary-to-primary mass flow rate ratio
    pub mfr: f64,
    /// Primary pressure ratio ps/pp0
    pub prp: f64,
    /// Secondary pressure ratio ps/pa
    pub prs: f64,
    /// Primary temperature ratio tp/tp0
    pub trp: f64,
    /// Secondary temperature ratio ts/ts0
    pub trs: f64,
}

impl StreamConditions {
    /// Evaluate both streams at one secondary static pressure.
    ///
    /// Fails when `ps` exceeds either total pressure (no real Mach number)
    /// or when the primary Mach number degenerates to zero.
    pub fn evaluate(gas: &GasConstants, inlet: &InletState, ps: f64) -> MixingResult<Self> {
        if !(ps > 0.0 && ps.is_finite()) {
            return Err(MixingError::InvalidArg {
                what: "secondary static pressure must be positive and finite",
            });
        }

        let ms = gas.mach_from_pressure_ratio(inlet.pa, ps, "secondary stream")?;
        let mp = gas.mach_from_pressure_ratio(inlet.pp0, ps, "primary stream")?;

        let ts = gas.static_temperature(inlet.ts0, ms);
        let tp = gas.static_temperature(inlet.tp0, mp);
        let apt = gas.area_ratio_to_sonic(mp)?;

        let cs = gas.speed_of_sound(ts)?;
        let cp = gas.speed_of_sound(tp)?;
        let us = ms * cs;
        let up = mp * cp;
        let rhos = (ps / (gas.r * ts)) * PA_PER_ATM;
        let rhop = (ps / (gas.r * tp)) * PA_PER_ATM;

        let mfr = inlet.asp * (ms / mp) * (tp / ts).sqrt();
        ensure_finite(mfr, "mass flow rate ratio")?;

        Ok(Self {
            ps,
            ms,
            mp,
            ts,
            tp,
            apt,
            cs,
            cp,
            us,
            up,
            rhos,
            rhop,
            mfr,
            prp: ps / inlet.pp0,
            prs: ps / inlet.pa,
            trp: tp / inlet.tp0,
            trs: ts / inlet.ts0,
        })
    }
}
