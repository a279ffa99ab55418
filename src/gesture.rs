// src/gesture.rs
// Pure swipe math: origin + current pointer x -> direction and progress.

use serde::Deserialize;

/// Committed swipe outcome. "No direction" is `Option::None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SwipeDirection {
    Left,
    Right,
}

impl SwipeDirection {
    pub fn as_str(self) -> &'static str {
        match self {
            SwipeDirection::Left => "left",
            SwipeDirection::Right => "right",
        }
    }
}

/// Minimum horizontal travel before a direction registers. Fixed; not
/// part of `GestureConfig`.
pub const DEADZONE: f64 = 50.0;

/// Tunables for the swipe card.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GestureConfig {
    /// Card width used when the live measurement is unavailable.
    pub fallback_card_width: f64,
    /// Exit animation length before `on_swipe` fires.
    pub commit_delay_ms: u32,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            fallback_card_width: 300.0,
            commit_delay_ms: 300,
        }
    }
}

impl GestureConfig {
    /// Measured width if usable, otherwise the fallback.
    pub fn card_width(&self, measured: Option<f64>) -> f64 {
        match measured {
            Some(w) if w.is_finite() && w > 0.0 => w,
            _ => self.fallback_card_width,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureUpdate {
    pub direction: Option<SwipeDirection>,
    /// Always within [0, 1].
    pub progress: f64,
}

impl GestureUpdate {
    pub const NEUTRAL: GestureUpdate = GestureUpdate {
        direction: None,
        progress: 0.0,
    };
}

pub fn update_gesture(
    origin_x: f64,
    current_x: f64,
    measured_width: Option<f64>,
    config: &GestureConfig,
) -> GestureUpdate {
    let delta = current_x - origin_x;
    if delta.is_nan() {
        return GestureUpdate::NEUTRAL;
    }

    let half = config.card_width(measured_width) * 0.5;
    let progress = (delta.abs() / half).clamp(0.0, 1.0);

    let direction = if delta.abs() < DEADZONE {
        None
    } else if delta > 0.0 {
        Some(SwipeDirection::Right)
    } else {
        Some(SwipeDirection::Left)
    };

    GestureUpdate { direction, progress }
}
