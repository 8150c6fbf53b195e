//! ej-mixing: constant-area ejector mixing analysis.
//!
//! Provides:
//! - Calorically perfect gas constants and isentropic flow relations
//! - Ejector inlet stagnation state and the ideal primary-nozzle reference
//! - Per-sample primary/secondary stream conditions
//! - The control-volume mixed-flow solve (subsonic and supersonic branches)
//! - A secondary-pressure sweep driver
//!
//! # Architecture
//!
//! Each secondary static pressure sample is evaluated independently: stream
//! conditions are derived from the inlet state, the momentum/energy coupling
//! quantity closes a quadratic in mixed-flow Mach number, and each real root
//! is expanded into end-of-mixing and diffuser-exit conditions plus a thrust
//! augmentation ratio. A negative discriminant or a supersonic-branch domain
//! error degrades the sample report instead of aborting the sweep.
//!
//! # Example
//!
//! ```
//! use ej_mixing::{GasConstants, InletState, PressureSweep, run_sweep};
//!
//! let gas = GasConstants::default();
//! let inlet = InletState::default();
//! let sweep = PressureSweep::default();
//!
//! let result = run_sweep(&gas, &inlet, &sweep).unwrap();
//! assert_eq!(result.reports.len(), 40);
//! ```

pub mod error;
pub mod gas;
pub mod inlet;
pub mod mixing;
pub mod sample;
pub mod sweep;

// Re-exports for ergonomics
pub use error::{MixingError, MixingResult};
pub use gas::{GasConstants, PA_PER_ATM, checked_ln, checked_sqrt};
pub use inlet::{IdealExit, InletState};
pub use mixing::{MixedFlow, MixingQuadratic, SampleOutcome, solve_sample};
pub use sample::StreamConditions;
pub use sweep::{PressureSweep, SampleReport, SweepResult, SweepSummary, run_sweep};
