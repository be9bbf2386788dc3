//! Hull construction settings.

use crate::primitives::Point3;
use num_traits::Float;

/// Rotation angle (radians) used by [`HullConfig::perturbed`].
pub const DEFAULT_ROTATION: f64 = 0.05;

/// Relative jitter used by [`HullConfig::perturbed`].
pub const DEFAULT_JITTER: f64 = 1e-8;

const JITTER_SEED: u64 = 0x2545_F491_4F6C_DD1D;

/// Settings for a hull construction.
///
/// The algorithm assumes general position: distinct x coordinates, no three
/// collinear and no four coplanar points. Inputs that break this (integer
/// grids, boxes) can be pushed into general position with a rotation and a
/// small deterministic jitter. Both are applied to a private copy of the
/// coordinates; faces always refer to the caller's identities.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HullConfig<F> {
    /// Turn determinants with magnitude at or below this value count as zero.
    ///
    /// The threshold is absolute and is compared against products of two
    /// coordinate differences, so it must shrink with the input: for points
    /// spread over about `s`, use something well below `s * s`. The default
    /// suits coordinates of order one or larger; a cloud at `1e-8` scale
    /// yields no faces with it.
    pub epsilon: F,
    /// Rotate every point by this angle about the x, y and z axes in turn.
    pub rotation: Option<F>,
    /// Displace every coordinate by up to this fraction of the largest
    /// absolute input coordinate.
    pub jitter: Option<F>,
}

impl<F: Float> Default for HullConfig<F> {
    fn default() -> Self {
        Self {
            epsilon: F::epsilon(),
            rotation: None,
            jitter: None,
        }
    }
}

impl<F: Float> HullConfig<F> {
    /// Settings for inputs that may violate general position.
    ///
    /// Rotates by [`DEFAULT_ROTATION`] and jitters by [`DEFAULT_JITTER`].
    pub fn perturbed() -> Self {
        Self {
            rotation: F::from(DEFAULT_ROTATION),
            jitter: F::from(DEFAULT_JITTER),
            ..Self::default()
        }
    }

    /// Returns a copy with the given zero threshold.
    pub fn with_epsilon(self, epsilon: F) -> Self {
        Self { epsilon, ..self }
    }

    /// Returns a copy with the given rotation.
    pub fn with_rotation(self, angle: F) -> Self {
        Self {
            rotation: Some(angle),
            ..self
        }
    }

    /// Returns a copy with the given relative jitter.
    pub fn with_jitter(self, amount: F) -> Self {
        Self {
            jitter: Some(amount),
            ..self
        }
    }

    /// Returns `true` if points are moved before construction.
    pub fn perturbs(&self) -> bool {
        self.rotation.is_some() || self.jitter.is_some()
    }

    /// Applies jitter, then rotation, to a copy of `points`.
    ///
    /// The jitter stream is a fixed-seed xorshift, so the same input always
    /// produces the same hull.
    pub(crate) fn perturb(&self, points: &[Point3<F>]) -> Vec<Point3<F>> {
        let mut out = points.to_vec();

        if let Some(amount) = self.jitter {
            let extent = out
                .iter()
                .map(|p| p.x.abs().max(p.y.abs()).max(p.z.abs()))
                .fold(F::zero(), F::max);
            let scale = if extent > F::zero() {
                amount * extent
            } else {
                amount
            };

            let mut state = JITTER_SEED;
            let mut offset = || {
                state ^= state << 13;
                state ^= state >> 7;
                state ^= state << 17;
                let unit = (state >> 11) as f64 / (1u64 << 53) as f64 * 2.0 - 1.0;
                F::from(unit).map_or(F::zero(), |u| u * scale)
            };

            for p in &mut out {
                p.x = p.x + offset();
                p.y = p.y + offset();
                p.z = p.z + offset();
            }
        }

        if let Some(angle) = self.rotation {
            for p in &mut out {
                *p = p.rotate(angle);
            }
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_exact() {
        let config: HullConfig<f64> = HullConfig::default();
        assert_eq!(config.epsilon, f64::EPSILON);
        assert!(!config.perturbs());
    }

    #[test]
    fn test_perturbed_presets() {
        let config: HullConfig<f64> = HullConfig::perturbed();
        assert_eq!(config.rotation, Some(DEFAULT_ROTATION));
        assert_eq!(config.jitter, Some(DEFAULT_JITTER));
        assert!(config.perturbs());
    }

    #[test]
    fn test_builders() {
        let config: HullConfig<f64> = HullConfig::default()
            .with_epsilon(1e-20)
            .with_rotation(0.1)
            .with_jitter(1e-6);
        assert_eq!(config.epsilon, 1e-20);
        assert_eq!(config.rotation, Some(0.1));
        assert_eq!(config.jitter, Some(1e-6));
    }

    #[test]
    fn test_perturb_without_settings_is_identity() {
        let points = vec![Point3::new(1.0_f64, 2.0, 3.0), Point3::new(-1.0, 0.0, 4.0)];
        assert_eq!(HullConfig::default().perturb(&points), points);
    }

    #[test]
    fn test_jitter_is_small_and_deterministic() {
        let points = vec![
            Point3::new(0.0_f64, 0.0, 0.0),
            Point3::new(0.0, 0.0, 1.0),
            Point3::new(0.0, 1.0, 0.0),
            Point3::new(10.0, 0.0, 0.0),
        ];
        let config = HullConfig::default().with_jitter(1e-6);
        let first = config.perturb(&points);
        let second = config.perturb(&points);
        assert_eq!(first, second);

        for (p, q) in points.iter().zip(&first) {
            assert!((*q - *p).magnitude() <= 1e-6 * 10.0 * 3.0_f64.sqrt());
        }
        // Points that shared x = 0 no longer do.
        assert!(first[0].x != first[1].x && first[1].x != first[2].x);
    }
}
