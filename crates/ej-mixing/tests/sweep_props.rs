//! Property-based invariants for the sampling and solve layers.

use ej_mixing::{
    GasConstants, InletState, SampleOutcome, StreamConditions, solve_sample,
};
use proptest::prelude::*;

proptest! {
    /// Stream Mach numbers are real and positive anywhere strictly inside
    /// the reference sweep envelope.
    #[test]
    fn stream_conditions_are_finite_and_positive(ps in 0.05f64..0.95) {
        let gas = GasConstants::default();
        let inlet = InletState::default();
        let c = StreamConditions::evaluate(&gas, &inlet, ps).unwrap();

        prop_assert!(c.ms > 0.0 && c.ms.is_finite());
        prop_assert!(c.mp > 0.0 && c.mp.is_finite());
        prop_assert!(c.ts > 0.0 && c.tp > 0.0);
        prop_assert!(c.mfr > 0.0 && c.mfr.is_finite());
        prop_assert!(c.apt.is_finite());
        prop_assert!(c.rhos.is_finite() && c.rhop.is_finite());
    }

    /// The default inlet keeps the supersonic root out of domain across the
    /// whole envelope: every sample degrades to a subsonic-only report with
    /// a subsonic Mach number.
    #[test]
    fn default_inlet_yields_subsonic_only(ps in 0.05f64..0.95) {
        let gas = GasConstants::default();
        let inlet = InletState::default();
        let ideal = inlet.ideal_exit(&gas).unwrap();
        let c = StreamConditions::evaluate(&gas, &inlet, ps).unwrap();
        let (quad, outcome) = solve_sample(&gas, &inlet, &ideal, &c).unwrap();

        prop_assert!(quad.det >= 0.0);
        match outcome {
            SampleOutcome::SubsonicOnly { subsonic, .. } => {
                prop_assert!(subsonic.mach > 0.0 && subsonic.mach < 1.0);
                prop_assert!(subsonic.tar.is_finite() && subsonic.tar > 0.0);
            }
            other => prop_assert!(false, "unexpected outcome {:?}", other),
        }
    }

    /// Branch naming is an invariant: whenever both roots are real, the
    /// subsonic Mach is below one and the supersonic at or above it.
    #[test]
    fn both_branches_respect_naming(
        pp0 in 1.1f64..4.0,
        tp0 in 0.5f64..4.0,
        asp in 0.1f64..12.0,
        ps in 0.1f64..0.9,
    ) {
        let gas = GasConstants::default();
        let inlet = InletState { pp0, pa: 1.0, tp0, ts0: 1.0, asp };
        prop_assume!(ps < inlet.pa && ps < inlet.pp0);

        let Ok(ideal) = inlet.ideal_exit(&gas) else { return Ok(()) };
        let Ok(c) = StreamConditions::evaluate(&gas, &inlet, ps) else { return Ok(()) };
        let Ok((_, outcome)) = solve_sample(&gas, &inlet, &ideal, &c) else { return Ok(()) };

        if let SampleOutcome::Both { subsonic, supersonic } = outcome {
            prop_assert!(subsonic.mach < 1.0);
            prop_assert!(supersonic.mach >= 1.0);
            prop_assert!(subsonic.tar.is_finite());
            prop_assert!(supersonic.tar.is_finite());
        }
    }

    /// Re-evaluating the same sample twice is bit-identical.
    #[test]
    fn sample_evaluation_is_deterministic(ps in 0.05f64..0.95) {
        let gas = GasConstants::default();
        let inlet = InletState::default();
        let ideal = inlet.ideal_exit(&gas).unwrap();

        let a = StreamConditions::evaluate(&gas, &inlet, ps).unwrap();
        let b = StreamConditions::evaluate(&gas, &inlet, ps).unwrap();
        prop_assert_eq!(a.ms, b.ms);
        prop_assert_eq!(a.mfr, b.mfr);

        let (qa, oa) = solve_sample(&gas, &inlet, &ideal, &a).unwrap();
        let (qb, ob) = solve_sample(&gas, &inlet, &ideal, &b).unwrap();
        prop_assert_eq!(qa.j, qb.j);
        prop_assert_eq!(qa.det, qb.det);
        match (oa, ob) {
            (
                SampleOutcome::SubsonicOnly { subsonic: sa, .. },
                SampleOutcome::SubsonicOnly { subsonic: sb, .. },
            ) => prop_assert_eq!(sa.tar, sb.tar),
            _ => prop_assert!(false, "outcomes diverged between identical runs"),
        }
    }
}
