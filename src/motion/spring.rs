pub const STIFFNESS: f64 = 300.0;
pub const DAMPING: f64 = 30.0;
pub const MASS: f64 = 1.0;

/// Distance (px) and speed (px/s) below which the spring is considered at rest.
const REST_DELTA: f64 = 0.5;
const REST_SPEED: f64 = 10.0;

/// Largest integration step, in seconds. Longer frames are subdivided.
const MAX_STEP: f64 = 1.0 / 240.0;

/// Longest frame gap honoured; anything longer (backgrounded tab) is capped.
const MAX_FRAME: f64 = 0.1;

/// One-dimensional damped spring.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spring {
    position: f64,
    velocity: f64,
    target: f64,
    placed: bool,
}

impl Default for Spring {
    fn default() -> Self {
        Self {
            position: 0.0,
            velocity: 0.0,
            target: 0.0,
            placed: false,
        }
    }
}

impl Spring {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn position(&self) -> f64 {
        self.position
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    /// Whether the spring has been given a target yet.
    pub fn is_placed(&self) -> bool {
        self.placed
    }

    /// Set a new target. The first target is jumped to without animating.
    pub fn set_target(&mut self, target: f64) {
        if !self.placed {
            self.placed = true;
            self.position = target;
            self.velocity = 0.0;
        }
        self.target = target;
    }

    pub fn is_at_rest(&self) -> bool {
        (self.position - self.target).abs() < REST_DELTA && self.velocity.abs() < REST_SPEED
    }

    /// Integrate for `dt` seconds and return the new position.
    pub fn step(&mut self, dt: f64) -> f64 {
        if self.is_at_rest() {
            self.position = self.target;
            self.velocity = 0.0;
            return self.position;
        }
        let mut remaining = dt.clamp(0.0, MAX_FRAME);
        while remaining > 0.0 {
            let h = remaining.min(MAX_STEP);
            let force = -STIFFNESS * (self.position - self.target) - DAMPING * self.velocity;
            self.velocity += force / MASS * h;
            self.position += self.velocity * h;
            remaining -= h;
        }
        if self.is_at_rest() {
            self.position = self.target;
            self.velocity = 0.0;
        }
        self.position
    }
}

/// Position and width of a highlight that slides between entries on springs.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Indicator {
    x: Spring,
    width: Spring,
    drawn: Option<(f64, f64)>,
}

impl Indicator {
    pub fn retarget(&mut self, x: f64, width: f64) {
        self.x.set_target(x);
        self.width.set_target(width);
    }

    /// Advance both springs. Returns `(x, width)` when it changed since the last draw.
    pub fn frame(&mut self, dt: f64) -> Option<(f64, f64)> {
        if !self.x.is_placed() {
            return None;
        }
        let next = (self.x.step(dt), self.width.step(dt));
        if self.drawn == Some(next) {
            return None;
        }
        self.drawn = Some(next);
        Some(next)
    }
}
