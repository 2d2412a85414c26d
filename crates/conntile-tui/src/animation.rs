use std::time::{Duration, Instant};

/// The two panels of the connections pane. Exactly one is shown at rest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelState {
    List,
    Explorer,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideDirection {
    /// Outgoing panel exits left, incoming enters from the right.
    RightToLeft,
    /// Outgoing panel exits right, incoming enters from the left.
    LeftToRight,
}

impl PanelState {
    fn direction_to(self, to: PanelState) -> SlideDirection {
        match (self, to) {
            (PanelState::List, PanelState::Explorer) => SlideDirection::RightToLeft,
            _ => SlideDirection::LeftToRight,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Slide {
    pub from: PanelState,
    pub to: PanelState,
    pub direction: SlideDirection,
    started_at: Instant,
    duration: Duration,
}

impl Slide {
    pub fn progress(&self, now: Instant) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started_at);
        (elapsed.as_secs_f64() / self.duration.as_secs_f64()).min(1.0)
    }

    pub fn is_finished(&self, now: Instant) -> bool {
        self.progress(now) >= 1.0
    }

    /// Horizontal offsets of the outgoing and incoming panels, relative to the
    /// pane origin, for a pane `width` columns wide.
    pub fn offsets(&self, now: Instant, width: u16) -> (i32, i32) {
        let width = i32::from(width);
        let shift = (self.progress(now) * f64::from(width)).round() as i32;
        match self.direction {
            SlideDirection::RightToLeft => (-shift, width - shift),
            SlideDirection::LeftToRight => (shift, shift - width),
        }
    }
}

/// Two-state panel machine with slide transitions.
///
/// A transition is only complete once [`PanelSwitcher::advance`] observes the
/// slide finished; its completion value is handed back exactly once, after
/// the slide. Requests made while a slide is in flight are queued (latest
/// wins) and start when the current slide completes.
#[derive(Debug)]
pub struct PanelSwitcher<C> {
    shown: PanelState,
    duration: Duration,
    in_flight: Option<(Slide, C)>,
    queued: Option<(PanelState, C)>,
}

impl<C> PanelSwitcher<C> {
    pub fn new(duration: Duration) -> Self {
        Self { shown: PanelState::List, duration, in_flight: None, queued: None }
    }

    /// The panel at rest, or the outgoing panel while a slide runs.
    pub fn shown(&self) -> PanelState {
        self.shown
    }

    /// `None` while a slide is running: neither panel is interactable then.
    pub fn at_rest(&self) -> Option<PanelState> {
        if self.in_flight.is_some() {
            None
        } else {
            Some(self.shown)
        }
    }

    pub fn slide(&self) -> Option<&Slide> {
        self.in_flight.as_ref().map(|(slide, _)| slide)
    }

    pub fn is_animating(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Asks for `to` to become the shown panel. When it already is, and
    /// nothing is in flight, the completion is returned right away.
    pub fn request(&mut self, to: PanelState, on_complete: C, now: Instant) -> Option<C> {
        if self.in_flight.is_some() {
            self.queued = Some((to, on_complete));
            return None;
        }
        if to == self.shown {
            return Some(on_complete);
        }
        self.start(to, on_complete, now);
        None
    }

    /// Completes a finished slide and starts any queued one. Returns the
    /// completions that became due, in order.
    pub fn advance(&mut self, now: Instant) -> Vec<C> {
        let mut done = Vec::new();
        let finished = self.in_flight.as_ref().is_some_and(|(slide, _)| slide.is_finished(now));
        if !finished {
            return done;
        }
        if let Some((slide, on_complete)) = self.in_flight.take() {
            self.shown = slide.to;
            done.push(on_complete);
        }
        if let Some((to, on_complete)) = self.queued.take() {
            if to == self.shown {
                done.push(on_complete);
            } else {
                self.start(to, on_complete, now);
            }
        }
        done
    }

    fn start(&mut self, to: PanelState, on_complete: C, now: Instant) {
        let direction = self.shown.direction_to(to);
        let slide = Slide { from: self.shown, to, direction, started_at: now, duration: self.duration };
        self.in_flight = Some((slide, on_complete));
    }
}
