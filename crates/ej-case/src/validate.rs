//! Case validation logic.
//!
//! Keeps configured runs inside the envelope where the mixing solve only
//! fails in its two recognized, recoverable ways.

use crate::schema::Case;

#[derive(thiserror::Error, Debug)]
pub enum ValidationError {
    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: &'static str,
        value: f64,
        reason: &'static str,
    },
}

fn invalid(field: &'static str, value: f64, reason: &'static str) -> ValidationError {
    ValidationError::InvalidValue {
        field,
        value,
        reason,
    }
}

fn require_positive(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(invalid(field, value, "must be positive and finite"));
    }
    Ok(())
}

pub fn validate_case(case: &Case) -> Result<(), ValidationError> {
    if !case.gas.k.is_finite() || case.gas.k <= 1.0 {
        return Err(invalid("gas.k", case.gas.k, "ratio of specific heats must exceed one"));
    }
    require_positive("gas.r", case.gas.r)?;

    require_positive("inlet.pp0", case.inlet.pp0)?;
    require_positive("inlet.pa", case.inlet.pa)?;
    require_positive("inlet.tp0", case.inlet.tp0)?;
    require_positive("inlet.ts0", case.inlet.ts0)?;
    require_positive("inlet.asp", case.inlet.asp)?;

    if case.inlet.pp0 < 1.0 {
        return Err(invalid(
            "inlet.pp0",
            case.inlet.pp0,
            "primary total pressure must reach the unit back pressure of the ideal nozzle",
        ));
    }

    require_positive("sweep.ps_start", case.sweep.ps_start)?;
    require_positive("sweep.ps_step", case.sweep.ps_step)?;
    if !case.sweep.ps_stop.is_finite() || case.sweep.ps_start >= case.sweep.ps_stop {
        return Err(invalid(
            "sweep.ps_stop",
            case.sweep.ps_stop,
            "sweep stop must lie above the start",
        ));
    }

    // Exclusive stop bound: every sample must stay below both totals so the
    // stream Mach numbers remain real.
    let ps_max = case.inlet.pa.min(case.inlet.pp0);
    if case.sweep.ps_stop > ps_max {
        return Err(invalid(
            "sweep.ps_stop",
            case.sweep.ps_stop,
            "sweep must stay at or below the smaller total pressure",
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ej_mixing::{InletState, PressureSweep};

    #[test]
    fn default_case_is_valid() {
        assert!(validate_case(&Case::default()).is_ok());
    }

    #[test]
    fn rejects_unphysical_gas() {
        let mut case = Case::default();
        case.gas.k = 1.0;
        assert!(validate_case(&case).is_err());

        let mut case = Case::default();
        case.gas.r = -287.0;
        assert!(validate_case(&case).is_err());
    }

    #[test]
    fn rejects_subambient_primary_total() {
        let case = Case {
            inlet: InletState {
                pp0: 0.8,
                ..InletState::default()
            },
            ..Case::default()
        };
        assert!(validate_case(&case).is_err());
    }

    #[test]
    fn rejects_sweep_beyond_secondary_total() {
        let case = Case {
            sweep: PressureSweep {
                ps_stop: 1.2,
                ..PressureSweep::default()
            },
            ..Case::default()
        };
        let err = validate_case(&case).unwrap_err();
        assert!(err.to_string().contains("sweep"));
    }

    #[test]
    fn rejects_inverted_sweep() {
        let case = Case {
            sweep: PressureSweep {
                ps_start: 0.9,
                ps_stop: 0.3,
                ps_step: 0.02,
            },
            ..Case::default()
        };
        assert!(validate_case(&case).is_err());
    }

    #[test]
    fn rejects_zero_step() {
        let case = Case {
            sweep: PressureSweep {
                ps_step: 0.0,
                ..PressureSweep::default()
            },
            ..Case::default()
        };
        assert!(validate_case(&case).is_err());
    }

    #[test]
    fn validation_error_names_the_field() {
        let mut case = Case::default();
        case.inlet.asp = 0.0;
        let err = validate_case(&case).unwrap_err();
        assert!(err.to_string().contains("inlet.asp"));
    }
}
