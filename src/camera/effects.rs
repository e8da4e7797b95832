//! Camera domain: field-of-view tween and head bob.

/// Linear field-of-view tween in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FovTween {
    from: f32,
    to: f32,
    duration: f32,
    elapsed: f32,
}

impl FovTween {
    pub fn new(from: f32, to: f32, duration: f32) -> Self {
        Self {
            from,
            to,
            duration: duration.max(0.0),
            elapsed: 0.0,
        }
    }

    pub fn target(&self) -> f32 {
        self.to
    }

    /// Advances the tween and returns the field of view plus whether it finished.
    pub fn advance(&mut self, delta_secs: f32) -> (f32, bool) {
        self.elapsed += delta_secs.max(0.0);
        if self.duration <= 0.0 || self.elapsed >= self.duration {
            return (self.to, true);
        }
        let t = self.elapsed / self.duration;
        (self.from + (self.to - self.from) * t, false)
    }
}

/// Vertical eye offset while moving on foot.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct HeadBob {
    phase: f32,
}

impl HeadBob {
    /// Returns the offset for this frame. The bob winds down to rest when
    /// disabled or below `min_speed`.
    pub fn advance(
        &mut self,
        enabled: bool,
        planar_speed: f32,
        min_speed: f32,
        frequency: f32,
        amplitude: f32,
        delta_secs: f32,
    ) -> f32 {
        if enabled && planar_speed > min_speed {
            self.phase = (self.phase + delta_secs * frequency) % std::f32::consts::TAU;
        } else {
            self.phase = 0.0;
        }
        self.phase.sin() * amplitude
    }
}
