//! Ejector inlet stagnation state and the ideal primary-nozzle reference.

use crate::error::MixingResult;
use crate::gas::GasConstants;
use serde::{Deserialize, Serialize};

/// Stagnation conditions for the primary and secondary streams, plus the
/// secondary-to-primary area ratio. Fixed for a whole run.
///
/// Pressures and temperatures are nondimensional (atm-scaled and
/// reference-scaled respectively), matching the recorded reference case.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InletState {
    /// Primary total pressure
    pub pp0: f64,
    /// Secondary total pressure
    pub pa: f64,
    /// Primary total temperature
    pub tp0: f64,
    /// Secondary stagnation temperature
    pub ts0: f64,
    /// Secondary-to-primary area ratio
    pub asp: f64,
}

impl Default for InletState {
    fn default() -> Self {
        Self {
            pp0: 6.0,
            pa: 1.0,
            tp0: 3.35,
            ts0: 1.0,
            asp: 10.0,
        }
    }
}

/// Ideal primary-nozzle exit: the Mach number and static temperature the
/// primary stream would reach expanding alone to unit back pressure.
///
/// Serves as the thrust reference for both mixed-flow branches.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct IdealExit {
    pub m3id: f64,
    pub t3id: f64,
}

impl InletState {
    /// Derive the ideal primary-nozzle exit state. Constant across a sweep.
    pub fn ideal_exit(&self, gas: &GasConstants) -> MixingResult<IdealExit> {
        let m3id = gas.mach_from_pressure_ratio(self.pp0, 1.0, "ideal primary nozzle")?;
        let t3id = gas.static_temperature(self.tp0, m3id);
        Ok(IdealExit { m3id, t3id })
    }
}
