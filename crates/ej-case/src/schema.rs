//! Case file schema definitions.

use ej_mixing::{GasConstants, InletState, PressureSweep};
use serde::{Deserialize, Serialize};

/// A complete analysis case: working gas, inlet stagnation state and the
/// secondary-pressure sweep range.
///
/// Every section defaults to the reference case, so a partial (or empty)
/// case file is valid.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Case {
    pub gas: GasConstants,
    pub inlet: InletState,
    pub sweep: PressureSweep,
}
