//! Two-state offset animation
//!
//! A [`ToggleAnimator`] walks a scalar offset toward one of two bounds, one
//! fixed step per tick. Which bound is chosen by a single boolean that can
//! flip at any time; the walk then reverses from wherever the offset is.

/// Bounded, monotone interpolation between two offsets
#[derive(Debug, Clone, PartialEq)]
pub struct ToggleAnimator {
    active: bool,
    offset: f32,
    inactive_bound: f32,
    active_bound: f32,
    step: f32,
}

impl ToggleAnimator {
    /// Create an inactive animator starting at `offset`
    pub fn new(inactive_bound: f32, active_bound: f32, step: f32, offset: f32) -> Self {
        Self {
            active: false,
            offset,
            inactive_bound,
            active_bound,
            step: step.abs(),
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    /// Flip the state and return the new one
    pub fn toggle(&mut self) -> bool {
        self.active = !self.active;
        self.active
    }

    pub fn offset(&self) -> f32 {
        self.offset
    }

    /// Bound selected by the current state
    pub fn target(&self) -> f32 {
        if self.active {
            self.active_bound
        } else {
            self.inactive_bound
        }
    }

    /// Whether the offset sits on the selected bound
    pub fn is_settled(&self) -> bool {
        self.offset == self.target()
    }

    /// Advance one step toward the selected bound.
    ///
    /// A step that would pass the bound, or land within half a step of it,
    /// ends exactly on the bound. Returns the new offset, or `None` once
    /// settled. A zero step never moves, so every tick returns `None`.
    pub fn tick(&mut self) -> Option<f32> {
        let target = self.target();
        if self.offset == target || self.step == 0.0 {
            return None;
        }

        let direction = (target - self.offset).signum();
        let next = self.offset + direction * self.step;
        let remaining = (target - next) * direction;
        self.offset = if remaining <= self.step * 0.5 { target } else { next };
        Some(self.offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LOCKED: f32 = -0.45;
    const UNLOCKED: f32 = -0.34;

    #[test]
    fn walks_to_the_active_bound_and_stops() {
        let mut anim = ToggleAnimator::new(LOCKED, UNLOCKED, 0.001, LOCKED);
        anim.set_active(true);

        let mut ticks = 0;
        while anim.tick().is_some() {
            ticks += 1;
            assert!(anim.offset() <= UNLOCKED);
        }
        assert_eq!(ticks, 110);
        assert_eq!(anim.offset(), UNLOCKED);
        assert!(anim.is_settled());
        assert_eq!(anim.tick(), None);
    }

    #[test]
    fn reverses_from_the_current_offset() {
        let mut anim = ToggleAnimator::new(LOCKED, UNLOCKED, 0.001, LOCKED);
        anim.set_active(true);
        for _ in 0..50 {
            anim.tick();
        }
        let midway = anim.offset();
        assert!(midway > LOCKED && midway < UNLOCKED);

        assert!(!anim.toggle());
        let next = anim.tick().unwrap();
        assert!(next < midway);
        assert!((midway - next - 0.001).abs() < 1e-6);
    }

    #[test]
    fn uneven_step_clamps_at_the_bound() {
        let mut anim = ToggleAnimator::new(0.0, 1.0, 0.35, 0.0);
        anim.set_active(true);
        let offsets: Vec<f32> = std::iter::from_fn(|| anim.tick()).collect();
        assert_eq!(offsets.len(), 3);
        assert_eq!(*offsets.last().unwrap(), 1.0);
        assert!(offsets.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn inactive_start_moves_toward_inactive_bound() {
        let mut anim = ToggleAnimator::new(LOCKED, UNLOCKED, 0.001, -0.43);
        assert!(!anim.is_settled());
        let first = anim.tick().unwrap();
        assert!(first < -0.43);
    }

    #[test]
    fn zero_step_stays_put() {
        let mut anim = ToggleAnimator::new(0.0, 1.0, 0.0, 0.5);
        anim.set_active(true);
        for _ in 0..1000 {
            assert_eq!(anim.tick(), None);
        }
        assert_eq!(anim.offset(), 0.5);
    }
}
