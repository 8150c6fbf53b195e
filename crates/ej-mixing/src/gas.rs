//! Calorically perfect gas constants and isentropic flow relations.

use crate::error::{MixingError, MixingResult};
use serde::{Deserialize, Serialize};

/// Pascals per atmosphere, used to scale nondimensional pressures when
/// forming densities in SI units.
pub const PA_PER_ATM: f64 = 101_300.0;

/// Square root with an explicit domain check.
///
/// A negative argument is reported as a domain error instead of silently
/// producing NaN.
pub fn checked_sqrt(v: f64, what: &'static str) -> MixingResult<f64> {
    if v < 0.0 {
        return Err(MixingError::Domain {
            op: "sqrt",
            what,
            value: v,
        });
    }
    Ok(v.sqrt())
}

/// Natural logarithm with an explicit domain check.
pub fn checked_ln(v: f64, what: &'static str) -> MixingResult<f64> {
    if v <= 0.0 {
        return Err(MixingError::Domain {
            op: "ln",
            what,
            value: v,
        });
    }
    Ok(v.ln())
}

/// Gas constants for a calorically perfect gas.
///
/// Defaults to air: k = 1.4, r = 287 J/(kg K).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GasConstants {
    /// Ratio of specific heats (dimensionless)
    pub k: f64,
    /// Specific gas constant (J/(kg K))
    pub r: f64,
}

impl Default for GasConstants {
    fn default() -> Self {
        Self { k: 1.4, r: 287.0 }
    }
}

impl GasConstants {
    /// Isentropic exponent k/(k-1).
    pub fn n(&self) -> f64 {
        self.k / (self.k - 1.0)
    }

    /// Inverse isentropic exponent (k-1)/k.
    pub fn n1(&self) -> f64 {
        (self.k - 1.0) / self.k
    }

    /// Half of (k-1).
    pub fn n2(&self) -> f64 {
        (self.k - 1.0) / 2.0
    }

    /// Isentropic Mach number from a total-to-static pressure ratio.
    ///
    /// M = sqrt( (2/(k-1)) ((p0/p)^((k-1)/k) - 1) )
    ///
    /// Fails with a domain error when p0/p < 1: a static pressure above the
    /// total pressure has no real Mach number.
    pub fn mach_from_pressure_ratio(
        &self,
        p0: f64,
        p: f64,
        what: &'static str,
    ) -> MixingResult<f64> {
        let arg = ((p0 / p).powf(self.n1()) - 1.0) * 2.0 / (self.k - 1.0);
        checked_sqrt(arg, what)
    }

    /// Static temperature from a total temperature and Mach number.
    ///
    /// T = T0 / (1 + ((k-1)/2) M^2)
    pub fn static_temperature(&self, t0: f64, m: f64) -> f64 {
        t0 / (1.0 + self.n2() * (m * m))
    }

    /// Area ratio to the sonic throat for a given Mach number.
    ///
    /// A/A* = (1/M^2) ((2/(k+1)) (1 + ((k-1)/2) M^2))^((k+1)/(k-1))
    pub fn area_ratio_to_sonic(&self, m: f64) -> MixingResult<f64> {
        let ratio = (1.0 / (m * m))
            * ((2.0 / (self.k + 1.0)) * (1.0 + self.n2() * (m * m))).powf((self.k + 1.0) / (self.k - 1.0));
        if !ratio.is_finite() {
            return Err(MixingError::NonPhysical {
                what: "area ratio to sonic throat",
            });
        }
        Ok(ratio)
    }

    /// Speed of sound, c = sqrt(k r T).
    pub fn speed_of_sound(&self, t: f64) -> MixingResult<f64> {
        checked_sqrt(self.k * self.r * t, "speed of sound")
    }
}
