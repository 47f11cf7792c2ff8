//! Frame-driven interpolation helpers.
//!
//! The engine stays timer-agnostic: whatever scheduler drives the frames
//! feeds per-frame deltas in here. Translations and rotations are applied
//! as per-frame increments (`target * dt`); a uniform scale is previewed
//! each frame as `lerp(1.0, target, t)` through
//! [`Scene::preview_scale_mvp`](crate::scene::Scene::preview_scale_mvp)
//! and committed once at the end.

/// Linear interpolation between `start` and `end` at parameter `t`.
///
/// The [`Vector3::lerp`](affine_math::Vector3::lerp) method is the
/// componentwise counterpart for animating positions.
pub fn lerp(start: f64, end: f64, t: f64) -> f64 {
    start + (end - start) * t
}

/// Accumulates per-frame deltas toward a fixed duration, clamping at the
/// end. A non-positive duration counts as already complete.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationProgress {
    elapsed: f64,
    duration: f64,
}

impl AnimationProgress {
    pub fn new(duration_seconds: f64) -> Self {
        Self {
            elapsed: 0.0,
            duration: duration_seconds.max(0.0),
        }
    }

    /// Advance by `dt` seconds, reporting whether the animation finished.
    pub fn advance(&mut self, dt: f64) -> bool {
        self.elapsed = (self.elapsed + dt).min(self.duration);
        self.is_complete()
    }

    /// Normalized progress in `[0, 1]`.
    pub fn t(&self) -> f64 {
        if self.duration <= 0.0 {
            1.0
        } else {
            (self.elapsed / self.duration).clamp(0.0, 1.0)
        }
    }

    pub fn is_complete(&self) -> bool {
        self.elapsed >= self.duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_lerp_endpoints_and_midpoint() {
        assert_abs_diff_eq!(lerp(1.0, 3.0, 0.0), 1.0);
        assert_abs_diff_eq!(lerp(1.0, 3.0, 1.0), 3.0);
        assert_abs_diff_eq!(lerp(1.0, 3.0, 0.5), 2.0);
        assert_abs_diff_eq!(lerp(5.0, -5.0, 0.25), 2.5);
    }

    #[test]
    fn test_progress_accumulates_and_clamps() {
        let mut progress = AnimationProgress::new(2.0);
        assert!(!progress.advance(0.5));
        assert_abs_diff_eq!(progress.t(), 0.25);
        assert!(!progress.advance(1.0));
        assert_abs_diff_eq!(progress.t(), 0.75);
        assert!(progress.advance(10.0));
        assert_abs_diff_eq!(progress.t(), 1.0);
        assert!(progress.is_complete());
    }

    #[test]
    fn test_exact_finish() {
        let mut progress = AnimationProgress::new(1.0);
        assert!(progress.advance(1.0));
        assert_abs_diff_eq!(progress.t(), 1.0);
    }

    #[test]
    fn test_zero_duration_is_complete() {
        let progress = AnimationProgress::new(0.0);
        assert!(progress.is_complete());
        assert_abs_diff_eq!(progress.t(), 1.0);
    }
}
