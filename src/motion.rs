//! Animation math behind the page's decorative motion.
//!
//! Everything here is plain data so it can be driven from browser callbacks and
//! exercised from unit tests alike.

pub mod parallax;
pub mod smooth_scroll;
pub mod spring;

pub use parallax::{Offset, ParallaxLayer, FAST_LAYER, SLOW_LAYER};
pub use smooth_scroll::SmoothScroll;
pub use spring::{Indicator, Spring};
