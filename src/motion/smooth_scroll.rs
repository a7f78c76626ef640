/// Seconds an eased scroll takes from start to target.
pub const DURATION: f64 = 1.2;

/// Pixels per line for `WheelEvent.deltaMode == 1`.
const LINE_HEIGHT: f64 = 100.0 / 6.0;

pub fn ease(t: f64) -> f64 {
    (1.001 - 2f64.powf(-10.0 * t)).min(1.0)
}

/// Elements that keep native wheel scrolling for their own content.
pub const NATIVE_SCROLL_SELECTOR: &str = "textarea, [data-native-scroll]";

/// Whether the engine should take a wheel event. Zoom gestures (ctrl+wheel)
/// and wheels over a natively scrolling element are left to the browser.
pub fn captures_wheel(ctrl_key: bool, over_native_scroller: bool) -> bool {
    !ctrl_key && !over_native_scroller
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeltaMode {
    Pixel,
    Line,
    Page,
}

impl From<u32> for DeltaMode {
    fn from(value: u32) -> Self {
        match value {
            1 => Self::Line,
            2 => Self::Page,
            _ => Self::Pixel,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Tween {
    from: f64,
    to: f64,
    elapsed: f64,
}

/// Eases the window scroll position toward a target fed by wheel input.
///
/// The engine owns no DOM handles: callers feed it wheel deltas and frame
/// timestamps and apply the position it hands back.
#[derive(Debug, Clone, PartialEq)]
pub struct SmoothScroll {
    animated: f64,
    target: f64,
    tween: Option<Tween>,
    last_time: Option<f64>,
    destroyed: bool,
}

impl SmoothScroll {
    pub fn new(initial: f64) -> Self {
        Self {
            animated: initial,
            target: initial,
            tween: None,
            last_time: None,
            destroyed: false,
        }
    }

    pub fn position(&self) -> f64 {
        self.animated
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn is_animating(&self) -> bool {
        self.tween.is_some()
    }

    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    /// Push the target by a wheel delta, clamped to `[0, limit]`.
    pub fn on_wheel(&mut self, delta: f64, mode: DeltaMode, viewport_height: f64, limit: f64) {
        let multiplier = match mode {
            DeltaMode::Pixel => 1.0,
            DeltaMode::Line => LINE_HEIGHT,
            DeltaMode::Page => viewport_height,
        };
        let target = self.target + delta * multiplier;
        self.scroll_to(target, limit);
    }

    pub fn scroll_to(&mut self, target: f64, limit: f64) {
        if self.destroyed {
            return;
        }
        let target = target.clamp(0.0, limit.max(0.0));
        self.target = target;
        self.tween = Some(Tween {
            from: self.animated,
            to: target,
            elapsed: 0.0,
        });
    }

    /// Adopt a scroll position produced outside the engine (keyboard, scrollbar).
    /// Ignored mid-animation, where the engine itself is the source of truth.
    pub fn sync(&mut self, actual: f64) {
        if self.destroyed || self.tween.is_some() {
            return;
        }
        self.animated = actual;
        self.target = actual;
    }

    /// Advance to frame time `time_ms`. Returns the position to apply, if any.
    pub fn raf(&mut self, time_ms: f64) -> Option<f64> {
        if self.destroyed {
            return None;
        }
        let dt = match self.last_time.replace(time_ms) {
            Some(prev) => ((time_ms - prev) * 0.001).max(0.0),
            None => 0.0,
        };
        let tween = self.tween.as_mut()?;
        tween.elapsed += dt;
        let progress = (tween.elapsed / DURATION).clamp(0.0, 1.0);
        if progress >= 1.0 {
            self.animated = tween.to;
            self.tween = None;
        } else {
            self.animated = tween.from + (tween.to - tween.from) * ease(progress);
        }
        Some(self.animated)
    }

    pub fn destroy(&mut self) {
        self.destroyed = true;
        self.tween = None;
        self.last_time = None;
    }
}
