#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Offset {
    pub x: f64,
    pub y: f64,
}

impl Offset {
    pub fn transform(&self) -> String {
        format!("translate({}px, {}px)", self.x, self.y)
    }
}

/// A decoration that trails the pointer by a fixed fraction of its position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParallaxLayer {
    pub factor: f64,
    pub duration_ms: u32,
}

pub const SLOW_LAYER: ParallaxLayer = ParallaxLayer {
    factor: 0.05,
    duration_ms: 3000,
};

pub const FAST_LAYER: ParallaxLayer = ParallaxLayer {
    factor: 0.08,
    duration_ms: 4000,
};

impl ParallaxLayer {
    pub fn offset(&self, x: f64, y: f64) -> Offset {
        Offset {
            x: x * self.factor,
            y: y * self.factor,
        }
    }

    /// CSS transition that eases the layer to whatever transform is set next.
    /// Setting a new transform mid-flight retargets from the current position.
    pub fn transition(&self) -> String {
        format!("transform {}ms ease-out", self.duration_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layer_offsets() {
        let slow = SLOW_LAYER.offset(200.0, 100.0);
        let fast = FAST_LAYER.offset(200.0, 100.0);
        assert!((slow.x - 10.0).abs() < 1e-9);
        assert!((slow.y - 5.0).abs() < 1e-9);
        assert!((fast.x - 16.0).abs() < 1e-9);
        assert!((fast.y - 8.0).abs() < 1e-9);
    }

    #[test]
    fn test_offsets_are_deterministic() {
        for (x, y) in [(0.0, 0.0), (1.0, 1.0), (1919.0, 1079.0), (-40.0, 12.5)] {
            assert_eq!(SLOW_LAYER.offset(x, y), SLOW_LAYER.offset(x, y));
            assert_eq!(FAST_LAYER.offset(x, y), FAST_LAYER.offset(x, y));
            assert_eq!(SLOW_LAYER.offset(x, y).x, x * 0.05);
            assert_eq!(FAST_LAYER.offset(x, y).y, y * 0.08);
        }
    }

    #[test]
    fn test_css_output() {
        assert_eq!(SLOW_LAYER.offset(0.0, 0.0).transform(), "translate(0px, 0px)");
        assert_eq!(
            Offset { x: 12.5, y: -3.0 }.transform(),
            "translate(12.5px, -3px)"
        );
        assert_eq!(SLOW_LAYER.transition(), "transform 3000ms ease-out");
        assert_eq!(FAST_LAYER.transition(), "transform 4000ms ease-out");
    }
}
