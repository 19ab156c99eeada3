//! Easing curves.
//!
//! Named after the curves designers know from GSAP so timelines read the
//! same as in a design handoff. Every curve maps 0 to 0 and 1 to 1.

use std::f64::consts::TAU;

/// Overshoot used by `back.out`.
const BACK_OVERSHOOT: f64 = 1.70158;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Ease {
    Linear,
    Power2Out,
    Power2InOut,
    Power3Out,
    ExpoOut,
    BackOut,
    ElasticOut { amplitude: f64, period: f64 },
}

impl Ease {
    /// Evaluate the curve at `t`, clamped to `[0, 1]`.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::Power2Out => 1.0 - (1.0 - t).powi(2),
            Self::Power2InOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
            Self::Power3Out => 1.0 - (1.0 - t).powi(3),
            Self::ExpoOut => {
                if t >= 1.0 {
                    1.0
                } else {
                    1.0 - 2f64.powf(-10.0 * t)
                }
            }
            Self::BackOut => {
                let c3 = BACK_OVERSHOOT + 1.0;
                let u = t - 1.0;
                1.0 + c3 * u.powi(3) + BACK_OVERSHOOT * u.powi(2)
            }
            Self::ElasticOut { amplitude, period } => elastic_out(t, amplitude, period),
        }
    }

    /// Equivalent CSS timing function, when one exists.
    pub fn css(self) -> Option<&'static str> {
        match self {
            Self::Linear => Some("linear"),
            Self::Power2Out => Some("cubic-bezier(0.25, 0.46, 0.45, 0.94)"),
            Self::Power2InOut => Some("cubic-bezier(0.455, 0.03, 0.515, 0.955)"),
            Self::Power3Out => Some("cubic-bezier(0.215, 0.61, 0.355, 1)"),
            Self::ExpoOut => Some("cubic-bezier(0.19, 1, 0.22, 1)"),
            Self::BackOut => Some("cubic-bezier(0.175, 0.885, 0.32, 1.275)"),
            Self::ElasticOut { .. } => None,
        }
    }
}

fn elastic_out(t: f64, amplitude: f64, period: f64) -> f64 {
    if t <= 0.0 {
        return 0.0;
    }
    if t >= 1.0 {
        return 1.0;
    }
    let p1 = amplitude.max(1.0);
    let p2 = period / amplitude.min(1.0);
    let p3 = p2 / TAU * (1.0 / p1).asin();
    p1 * 2f64.powf(-10.0 * t) * ((t - p3) * TAU / p2).sin() + 1.0
}

/// `elastic.out(1, 0.2)` used for the string spring-back.
pub const ELASTIC_SPRING: Ease = Ease::ElasticOut {
    amplitude: 1.0,
    period: 0.2,
};

/// Interpolate between `from` and `to` by an already-eased `k`.
#[inline]
pub fn lerp(from: f64, to: f64, k: f64) -> f64 {
    from + (to - from) * k
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Ease; 7] = [
        Ease::Linear,
        Ease::Power2Out,
        Ease::Power2InOut,
        Ease::Power3Out,
        Ease::ExpoOut,
        Ease::BackOut,
        ELASTIC_SPRING,
    ];

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_endpoints() {
        for ease in ALL {
            assert!(close(ease.apply(0.0), 0.0), "{:?} at 0", ease);
            assert!(close(ease.apply(1.0), 1.0), "{:?} at 1", ease);
        }
    }

    #[test]
    fn test_input_is_clamped() {
        assert!(close(Ease::Power3Out.apply(-2.0), 0.0));
        assert!(close(Ease::Power3Out.apply(3.0), 1.0));
    }

    #[test]
    fn test_in_out_is_symmetric() {
        let ease = Ease::Power2InOut;
        assert!(close(ease.apply(0.5), 0.5));
        assert!(close(ease.apply(0.25) + ease.apply(0.75), 1.0));
    }

    #[test]
    fn test_back_out_overshoots() {
        let peak = (1..100)
            .map(|i| Ease::BackOut.apply(i as f64 / 100.0))
            .fold(0.0, f64::max);
        assert!(peak > 1.0);
    }

    #[test]
    fn test_elastic_oscillates_around_target() {
        let samples: Vec<f64> = (1..100).map(|i| ELASTIC_SPRING.apply(i as f64 / 100.0)).collect();
        assert!(samples.iter().any(|v| *v > 1.0));
        assert!(samples.iter().any(|v| *v < 1.0));
        assert!((samples[98] - 1.0).abs() < 0.01);
    }

    #[test]
    fn test_out_curves_lead_linear() {
        for ease in [Ease::Power2Out, Ease::Power3Out, Ease::ExpoOut] {
            assert!(ease.apply(0.3) > 0.3, "{:?}", ease);
        }
    }

    #[test]
    fn test_css_mapping() {
        assert_eq!(Ease::Linear.css(), Some("linear"));
        assert!(ELASTIC_SPRING.css().is_none());
    }
}
