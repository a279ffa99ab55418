// src/controller.rs
// SwipeCard controller: gesture machine + pending commit timer + callbacks.

use std::cell::RefCell;
use std::rc::Rc;

use yew::Callback;

use crate::gesture::{GestureConfig, GestureUpdate, SwipeDirection};
use crate::input::{PointerPhase, PointerSource};
use crate::machine::{EndOutcome, GestureMachine, GesturePhase};
use crate::scheduler::{ScheduledTask, Scheduler, TimeoutScheduler};

/// Render-facing snapshot of the controller.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SwipeView {
    pub direction: Option<SwipeDirection>,
    pub progress: f64,
    pub committing: Option<SwipeDirection>,
}

impl SwipeView {
    fn of(phase: GesturePhase) -> Self {
        match phase {
            GesturePhase::Idle => Self::default(),
            GesturePhase::Dragging {
                direction,
                progress,
                ..
            } => Self {
                direction,
                progress,
                committing: None,
            },
            GesturePhase::Committing(dir) => Self {
                direction: None,
                progress: 0.0,
                committing: Some(dir),
            },
        }
    }

    pub fn overlay_opacity(&self) -> f64 {
        (self.progress * 2.0).min(1.0)
    }

    /// Exit animation while committing, directional tint while dragging.
    pub fn card_class(&self) -> Option<&'static str> {
        match (self.committing, self.direction) {
            (Some(SwipeDirection::Left), _) => Some("animate-swipe-left"),
            (Some(SwipeDirection::Right), _) => Some("animate-swipe-right"),
            (None, Some(SwipeDirection::Left)) => Some("dragging-left"),
            (None, Some(SwipeDirection::Right)) => Some("dragging-right"),
            (None, None) => None,
        }
    }
}

pub struct SwipeController<S: Scheduler = TimeoutScheduler> {
    machine: Rc<RefCell<GestureMachine>>,
    config: GestureConfig,
    /// Config received mid-gesture, applied at the next begin.
    queued_config: Option<GestureConfig>,
    scheduler: S,
    pending: Option<ScheduledTask>,
    on_swipe: Callback<SwipeDirection>,
    on_change: Callback<SwipeView>,
}

impl<S: Scheduler> SwipeController<S> {
    pub fn new(
        config: GestureConfig,
        scheduler: S,
        on_swipe: Callback<SwipeDirection>,
        on_change: Callback<SwipeView>,
    ) -> Self {
        Self {
            machine: Rc::new(RefCell::new(GestureMachine::new())),
            config,
            queued_config: None,
            scheduler,
            pending: None,
            on_swipe,
            on_change,
        }
    }

    pub fn view(&self) -> SwipeView {
        SwipeView::of(self.machine.borrow().phase())
    }

    /// Swaps the config without touching a drag or commit in flight. While
    /// busy the new config waits for the next begin.
    pub fn set_config(&mut self, config: GestureConfig) {
        if config == self.config {
            self.queued_config = None;
            return;
        }
        if self.machine.borrow().phase() == GesturePhase::Idle {
            log::debug!("swipe: config applied: {config:?}");
            self.config = config;
            self.queued_config = None;
        } else {
            log::debug!("swipe: config queued until the next gesture");
            self.queued_config = Some(config);
        }
    }

    /// Routes one adapted input event. Start/Move without a coordinate are
    /// dropped.
    pub fn handle(&mut self, phase: PointerPhase, source: &impl PointerSource, card_width: Option<f64>) {
        match phase {
            PointerPhase::Start => {
                if let Some(x) = source.primary_x() {
                    self.begin(x);
                }
            }
            PointerPhase::Move => {
                if let Some(x) = source.primary_x() {
                    self.update(x, card_width);
                }
            }
            PointerPhase::End => {
                self.end();
            }
            PointerPhase::Leave => self.abort(),
        }
    }

    pub fn begin(&mut self, x: f64) {
        let started = self.machine.borrow_mut().begin(x);
        if started {
            if let Some(config) = self.queued_config.take() {
                log::debug!("swipe: queued config applied: {config:?}");
                self.config = config;
            }
            log::trace!("swipe: begin at x={x}");
            self.emit_view();
        } else {
            log::debug!("swipe: begin ignored while committing");
        }
    }

    pub fn update(&mut self, current_x: f64, card_width: Option<f64>) -> Option<GestureUpdate> {
        let next = self
            .machine
            .borrow_mut()
            .update(current_x, card_width, &self.config)?;
        self.emit_view();
        Some(next)
    }

    pub fn end(&mut self) -> EndOutcome {
        let outcome = self.machine.borrow_mut().end();
        match outcome {
            EndOutcome::Commit(dir) => {
                log::debug!("swipe: committing {}", dir.as_str());
                self.emit_view();
                self.schedule_commit();
            }
            EndOutcome::SnapBack => {
                log::trace!("swipe: snap back");
                self.emit_view();
            }
            EndOutcome::Ignored => {}
        }
        outcome
    }

    pub fn abort(&mut self) {
        if self.machine.borrow_mut().abort() {
            log::debug!("swipe: pointer left card, drag aborted");
            self.emit_view();
        }
    }

    /// Drops the pending commit without firing `on_swipe`.
    pub fn cancel_pending(&mut self) {
        if let Some(task) = self.pending.take() {
            task.cancel();
        }
    }

    fn schedule_commit(&mut self) {
        let machine = self.machine.clone();
        let on_swipe = self.on_swipe.clone();
        let on_change = self.on_change.clone();
        let task = self.scheduler.schedule(
            self.config.commit_delay_ms,
            Box::new(move || {
                let committed = machine.borrow_mut().finish_commit();
                if let Some(dir) = committed {
                    on_change.emit(SwipeView::default());
                    on_swipe.emit(dir);
                }
            }),
        );
        self.pending = Some(task);
    }

    fn emit_view(&self) {
        self.on_change.emit(self.view());
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::scheduler::ManualScheduler;

    struct Harness {
        sched: ManualScheduler,
        swipes: Rc<RefCell<Vec<SwipeDirection>>>,
        views: Rc<RefCell<Vec<SwipeView>>>,
        ctl: SwipeController<ManualScheduler>,
    }

    fn harness() -> Harness {
        let sched = ManualScheduler::new();
        let swipes = Rc::new(RefCell::new(Vec::new()));
        let views = Rc::new(RefCell::new(Vec::new()));
        let on_swipe = {
            let swipes = swipes.clone();
            Callback::from(move |d: SwipeDirection| swipes.borrow_mut().push(d))
        };
        let on_change = {
            let views = views.clone();
            Callback::from(move |v: SwipeView| views.borrow_mut().push(v))
        };
        let ctl = SwipeController::new(GestureConfig::default(), sched.clone(), on_swipe, on_change);
        Harness {
            sched,
            swipes,
            views,
            ctl,
        }
    }

    #[test]
    fn test_right_swipe_fires_once_after_delay() {
        let mut h = harness();
        h.ctl.begin(100.0);
        let u = h.ctl.update(160.0, None).unwrap();
        assert_eq!(u.direction, Some(SwipeDirection::Right));
        assert!((u.progress - 0.4).abs() < 1e-9);

        assert_eq!(h.ctl.end(), EndOutcome::Commit(SwipeDirection::Right));
        assert_eq!(h.ctl.view().committing, Some(SwipeDirection::Right));
        assert_eq!(h.ctl.view().card_class(), Some("animate-swipe-right"));

        h.sched.advance(299);
        assert!(h.swipes.borrow().is_empty());
        h.sched.advance(1);
        assert_eq!(*h.swipes.borrow(), vec![SwipeDirection::Right]);
        assert_eq!(h.ctl.view(), SwipeView::default());

        h.sched.advance(10_000);
        assert_eq!(h.swipes.borrow().len(), 1);
    }

    #[test]
    fn test_short_drag_snaps_back() {
        let mut h = harness();
        h.ctl.begin(100.0);
        let u = h.ctl.update(120.0, None).unwrap();
        assert_eq!(u.direction, None);
        assert_eq!(h.ctl.end(), EndOutcome::SnapBack);
        assert_eq!(h.sched.pending(), 0);
        h.sched.advance(1_000);
        assert!(h.swipes.borrow().is_empty());
        assert_eq!(h.views.borrow().last(), Some(&SwipeView::default()));
    }

    #[test]
    fn test_left_drag_clamps_progress() {
        let mut h = harness();
        h.ctl.begin(200.0);
        let u = h.ctl.update(50.0, None).unwrap();
        assert_eq!(u.direction, Some(SwipeDirection::Left));
        assert_eq!(u.progress, 1.0);
        assert_eq!(h.ctl.view().overlay_opacity(), 1.0);
        assert_eq!(h.ctl.view().card_class(), Some("dragging-left"));
    }

    #[test]
    fn test_leave_aborts_without_swipe() {
        let mut h = harness();
        h.ctl.handle(PointerPhase::Start, &100.0, None);
        h.ctl.handle(PointerPhase::Move, &200.0, None);
        assert_eq!(h.ctl.view().direction, Some(SwipeDirection::Right));

        h.ctl.handle(PointerPhase::Leave, &None::<f64>, None);
        assert_eq!(h.ctl.view(), SwipeView::default());

        // a release after leaving has nothing to commit
        h.ctl.handle(PointerPhase::End, &None::<f64>, None);
        h.sched.advance(1_000);
        assert!(h.swipes.borrow().is_empty());
    }

    #[test]
    fn test_drop_during_commit_suppresses_callback() {
        let mut h = harness();
        h.ctl.begin(0.0);
        h.ctl.update(-120.0, None);
        h.ctl.end();
        assert_eq!(h.sched.pending(), 1);

        let Harness { sched, swipes, ctl, .. } = h;
        drop(ctl);
        assert_eq!(sched.pending(), 0);
        sched.advance(1_000);
        assert!(swipes.borrow().is_empty());
    }

    #[test]
    fn test_cancel_pending_keeps_callback_silent() {
        let mut h = harness();
        h.ctl.begin(0.0);
        h.ctl.update(90.0, Some(180.0));
        h.ctl.end();
        h.ctl.cancel_pending();
        h.sched.advance(1_000);
        assert!(h.swipes.borrow().is_empty());
    }

    #[test]
    fn test_move_without_coordinate_is_ignored() {
        let mut h = harness();
        h.ctl.handle(PointerPhase::Start, &10.0, None);
        let before = h.views.borrow().len();
        h.ctl.handle(PointerPhase::Move, &None::<f64>, None);
        assert_eq!(h.views.borrow().len(), before);
    }

    #[test]
    fn test_controller_is_reused_across_cards() {
        let mut h = harness();
        for (from, to) in [(0.0, 80.0), (0.0, -80.0), (0.0, 10.0), (0.0, 300.0)] {
            h.ctl.begin(from);
            h.ctl.update(to, None);
            h.ctl.end();
            h.sched.advance(300);
        }
        assert_eq!(
            *h.swipes.borrow(),
            vec![SwipeDirection::Right, SwipeDirection::Left, SwipeDirection::Right]
        );
    }

    fn narrow() -> GestureConfig {
        GestureConfig {
            fallback_card_width: 200.0,
            commit_delay_ms: 500,
        }
    }

    #[test]
    fn test_config_change_during_commit_keeps_swipe() {
        let mut h = harness();
        h.ctl.begin(100.0);
        h.ctl.update(160.0, None);
        assert_eq!(h.ctl.end(), EndOutcome::Commit(SwipeDirection::Right));

        h.ctl.set_config(narrow());
        assert_eq!(h.sched.pending(), 1);
        assert_eq!(h.ctl.view().committing, Some(SwipeDirection::Right));

        h.sched.advance(300);
        assert_eq!(*h.swipes.borrow(), vec![SwipeDirection::Right]);
        assert_eq!(h.views.borrow().last(), Some(&SwipeView::default()));

        // the queued config takes effect on the next drag
        h.ctl.begin(0.0);
        let u = h.ctl.update(60.0, None).unwrap();
        assert!((u.progress - 0.6).abs() < 1e-9);
        h.ctl.end();
        h.sched.advance(300);
        assert_eq!(h.swipes.borrow().len(), 1);
        h.sched.advance(200);
        assert_eq!(h.swipes.borrow().len(), 2);
    }

    #[test]
    fn test_config_change_mid_drag_waits() {
        let mut h = harness();
        h.ctl.begin(0.0);
        h.ctl.set_config(narrow());
        let u = h.ctl.update(60.0, None).unwrap();
        assert!((u.progress - 0.4).abs() < 1e-9);
        assert_eq!(u.direction, Some(SwipeDirection::Right));
    }

    #[test]
    fn test_config_change_while_idle_applies_now() {
        let mut h = harness();
        h.ctl.set_config(narrow());
        h.ctl.begin(0.0);
        let u = h.ctl.update(60.0, None).unwrap();
        assert!((u.progress - 0.6).abs() < 1e-9);
    }

    #[test]
    fn test_commit_is_published_before_swipe() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let on_swipe = {
            let log = log.clone();
            Callback::from(move |d: SwipeDirection| log.borrow_mut().push(format!("swipe {}", d.as_str())))
        };
        let on_change = {
            let log = log.clone();
            Callback::from(move |v: SwipeView| {
                log.borrow_mut().push(format!("committing={}", v.committing.is_some()))
            })
        };
        let sched = ManualScheduler::new();
        let mut ctl = SwipeController::new(GestureConfig::default(), sched.clone(), on_swipe, on_change);
        ctl.begin(0.0);
        ctl.update(-80.0, None);
        ctl.end();
        assert_eq!(log.borrow().last().map(String::as_str), Some("committing=true"));

        sched.advance(300);
        let tail: Vec<String> = log.borrow().iter().rev().take(2).rev().cloned().collect();
        assert_eq!(tail, vec!["committing=false".to_string(), "swipe left".to_string()]);
    }

    #[test]
    fn test_overlay_opacity_doubles_progress() {
        let view = SwipeView {
            direction: Some(SwipeDirection::Right),
            progress: 0.2,
            committing: None,
        };
        assert!((view.overlay_opacity() - 0.4).abs() < 1e-9);
    }
}
