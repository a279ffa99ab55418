// src/machine.rs
use crate::gesture::{update_gesture, GestureConfig, GestureUpdate, SwipeDirection};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GesturePhase {
    Idle,
    Dragging {
        origin_x: f64,
        direction: Option<SwipeDirection>,
        progress: f64,
    },
    Committing(SwipeDirection),
}

/// What `end` decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndOutcome {
    Commit(SwipeDirection),
    SnapBack,
    /// No drag was in progress.
    Ignored,
}

/// One gesture session at a time, reused across cards.
#[derive(Debug, Clone, PartialEq)]
pub struct GestureMachine {
    phase: GesturePhase,
}

impl Default for GestureMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl GestureMachine {
    pub fn new() -> Self {
        Self {
            phase: GesturePhase::Idle,
        }
    }

    pub fn phase(&self) -> GesturePhase {
        self.phase
    }

    /// Starts a drag at `x`. A second begin while dragging replaces the
    /// origin. Returns false while a commit is in flight.
    pub fn begin(&mut self, x: f64) -> bool {
        if let GesturePhase::Committing(_) = self.phase {
            return false;
        }
        self.phase = GesturePhase::Dragging {
            origin_x: x,
            direction: None,
            progress: 0.0,
        };
        true
    }

    pub fn update(
        &mut self,
        current_x: f64,
        measured_width: Option<f64>,
        config: &GestureConfig,
    ) -> Option<GestureUpdate> {
        let GesturePhase::Dragging { origin_x, .. } = self.phase else {
            return None;
        };
        let next = update_gesture(origin_x, current_x, measured_width, config);
        self.phase = GesturePhase::Dragging {
            origin_x,
            direction: next.direction,
            progress: next.progress,
        };
        Some(next)
    }

    pub fn end(&mut self) -> EndOutcome {
        let GesturePhase::Dragging { direction, .. } = self.phase else {
            return EndOutcome::Ignored;
        };
        match direction {
            Some(dir) => {
                self.phase = GesturePhase::Committing(dir);
                EndOutcome::Commit(dir)
            }
            None => {
                self.phase = GesturePhase::Idle;
                EndOutcome::SnapBack
            }
        }
    }

    /// Drops an in-progress drag without committing. Returns true if a drag
    /// was actually cancelled.
    pub fn abort(&mut self) -> bool {
        if let GesturePhase::Dragging { .. } = self.phase {
            self.phase = GesturePhase::Idle;
            true
        } else {
            false
        }
    }

    /// Committing -> Idle. Yields the committed direction once.
    pub fn finish_commit(&mut self) -> Option<SwipeDirection> {
        let GesturePhase::Committing(dir) = self.phase else {
            return None;
        };
        self.phase = GesturePhase::Idle;
        Some(dir)
    }
}
