//! Linear interpolation over a fixed duration

/// Duration of a sliding tile move, in seconds
pub const TILE_MOVE_SECONDS: f32 = 0.1;

/// Values that can be linearly interpolated
pub trait Lerp: Copy {
    /// Value at fraction `t` (0 = `self`, 1 = `to`)
    #[must_use]
    fn lerp(self, to: Self, t: f32) -> Self;
}

impl Lerp for f32 {
    fn lerp(self, to: Self, t: f32) -> Self {
        (to - self).mul_add(t, self)
    }
}

impl Lerp for (f32, f32) {
    fn lerp(self, to: Self, t: f32) -> Self {
        (self.0.lerp(to.0, t), self.1.lerp(to.1, t))
    }
}

/// Interpolation from one value to another, advanced by `update(dt)`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween<T: Lerp> {
    from: T,
    to: T,
    duration: f32,
    elapsed: f32,
}

impl<T: Lerp> Tween<T> {
    /// Start a tween; a non-positive duration finishes immediately
    ///
    /// # Examples
    /// ```
    /// use minigames::anim::Tween;
    ///
    /// let mut slide = Tween::new((0.0, 0.0), (100.0, 0.0), 0.1);
    /// let (x, _) = slide.update(0.05);
    /// assert!((x - 50.0).abs() < 1e-3);
    /// assert_eq!(slide.update(1.0), (100.0, 0.0));
    /// assert!(slide.is_finished());
    /// ```
    #[must_use]
    pub fn new(from: T, to: T, duration: f32) -> Self {
        Self {
            from,
            to,
            duration: duration.max(0.0),
            elapsed: 0.0,
        }
    }

    /// Advance by `dt` seconds and return the current value
    pub fn update(&mut self, dt: f32) -> T {
        if dt > 0.0 {
            self.elapsed = (self.elapsed + dt).min(self.duration);
        }
        self.value()
    }

    /// Current value; exactly `to` once finished
    #[must_use]
    pub fn value(&self) -> T {
        if self.is_finished() {
            self.to
        } else {
            self.from.lerp(self.to, self.progress())
        }
    }

    /// Fraction of the duration elapsed, in `[0, 1]`
    #[must_use]
    pub fn progress(&self) -> f32 {
        if self.duration <= 0.0 {
            1.0
        } else {
            (self.elapsed / self.duration).clamp(0.0, 1.0)
        }
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_origin() {
        let tween = Tween::new(2.0_f32, 4.0, 1.0);
        assert!((tween.value() - 2.0).abs() < f32::EPSILON);
        assert!(tween.progress().abs() < f32::EPSILON);
        assert!(!tween.is_finished());
    }

    #[test]
    fn advances_linearly() {
        let mut tween = Tween::new(0.0_f32, 10.0, 2.0);
        assert!((tween.update(0.5) - 2.5).abs() < 1e-5);
        assert!((tween.update(0.5) - 5.0).abs() < 1e-5);
        assert!((tween.progress() - 0.5).abs() < 1e-5);
    }

    #[test]
    fn clamps_to_target() {
        let mut tween = Tween::new(0.0_f32, 7.0, TILE_MOVE_SECONDS);
        for _ in 0..5 {
            tween.update(0.033);
        }
        assert!(tween.is_finished());
        assert!((tween.value() - 7.0).abs() < f32::EPSILON);
        assert!((tween.progress() - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn negative_dt_is_ignored() {
        let mut tween = Tween::new(0.0_f32, 1.0, 1.0);
        tween.update(0.25);
        tween.update(-1.0);
        assert!((tween.progress() - 0.25).abs() < 1e-5);
    }

    #[test]
    fn zero_duration_finishes_immediately() {
        let tween = Tween::new((1.0, 1.0), (3.0, -2.0), 0.0);
        assert!(tween.is_finished());
        assert_eq!(tween.value(), (3.0, -2.0));
    }
}
