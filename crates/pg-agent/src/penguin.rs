//! A single penguin and its behavior-selection state machine.

use pg_behavior::{ActiveBehavior, BehaviorKind, StepOutcome};
use pg_core::{AgentRng, Body, SceneBounds};

/// What happened to one penguin during one [`Penguin::update`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct UpdateReport {
    /// Behavior entered this update, if any.
    pub entered: Option<BehaviorKind>,
    /// Behavior whose step reported `Done` this update, if any.
    pub finished: Option<BehaviorKind>,
}

/// One wandering penguin.
///
/// `body` is public for rendering; only the active behavior moves it.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Penguin {
    pub body: Body,
    active: Option<ActiveBehavior>,
    fresh: bool,
}

impl Penguin {
    pub fn new(x: f32, y: f32) -> Self {
        Self { body: Body::new(x, y), active: None, fresh: true }
    }

    /// `true` until the first update has run.
    #[inline]
    pub fn is_fresh(&self) -> bool {
        self.fresh
    }

    #[inline]
    pub fn active_kind(&self) -> Option<BehaviorKind> {
        self.active.as_ref().map(ActiveBehavior::kind)
    }

    /// Advance this penguin by `dt` seconds.
    ///
    /// The very first call always enters `Move` so new spawns walk into
    /// frame.  Afterwards an empty slot is refilled with a uniformly random
    /// behavior.  The active behavior is then stepped; on `Done` the slot is
    /// cleared and stays empty until the next call.
    pub fn update(&mut self, dt: f32, bounds: SceneBounds, rng: &mut AgentRng) -> UpdateReport {
        let mut report = UpdateReport::default();

        if self.fresh {
            self.fresh = false;
            self.activate(BehaviorKind::Move, bounds, rng, &mut report);
        }

        if self.active.is_none() {
            let kind = BehaviorKind::random(rng);
            self.activate(kind, bounds, rng, &mut report);
        }

        let Some(active) = self.active.as_mut() else {
            return report;
        };

        if active.step(dt, &mut self.body, bounds) == StepOutcome::Done {
            report.finished = Some(active.kind());
            self.active = None;
        }

        report
    }

    fn activate(
        &mut self,
        kind:   BehaviorKind,
        bounds: SceneBounds,
        rng:    &mut AgentRng,
        report: &mut UpdateReport,
    ) {
        self.active = Some(ActiveBehavior::enter(kind, &mut self.body, bounds, rng));
        report.entered = Some(kind);
    }
}
