// src/input.rs
// Mouse and touch events reduced to one horizontal coordinate stream.

use web_sys::{MouseEvent, TouchEvent};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerPhase {
    Start,
    Move,
    End,
    /// Pointer left the card before releasing.
    Leave,
}

/// Anything that can report the primary pointer's horizontal position.
pub trait PointerSource {
    fn primary_x(&self) -> Option<f64>;
}

impl PointerSource for MouseEvent {
    fn primary_x(&self) -> Option<f64> {
        Some(f64::from(self.client_x()))
    }
}

impl PointerSource for TouchEvent {
    // touchend has an empty `touches` list; End/Leave never read it.
    fn primary_x(&self) -> Option<f64> {
        self.touches().get(0).map(|t| f64::from(t.client_x()))
    }
}

#[cfg(test)]
impl PointerSource for f64 {
    fn primary_x(&self) -> Option<f64> {
        Some(*self)
    }
}

#[cfg(test)]
impl PointerSource for Option<f64> {
    fn primary_x(&self) -> Option<f64> {
        *self
    }
}
