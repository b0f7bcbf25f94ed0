//! The presentation boundary. The core calls these after every state change
//! and never touches a display surface itself.

use std::cell::RefCell;
use std::rc::Rc;

use crate::persistence::Theme;
use crate::segment::Segment;
use crate::wheel::{Wheel, WheelMap};

pub trait WheelView {
    fn render_wheel(&mut self, wheel: &Wheel);
    fn show_winner(&mut self, text: &str, color: &str, emoji: &str);
    fn refresh_tabs(&mut self, wheels: &WheelMap, current_id: &str);
    fn refresh_segment_list(&mut self, segments: &[Segment]);
    fn refresh_history(&mut self, history: &[Segment]);

    /// A blocking notice, e.g. a rejected deletion.
    fn notify(&mut self, message: &str);

    /// Enables or disables the spin trigger.
    fn set_spin_enabled(&mut self, enabled: bool);

    fn apply_theme(&mut self, _theme: Theme) {}
}

#[derive(Debug, Clone, PartialEq)]
pub enum ViewEvent {
    RenderWheel { id: String, rotation: f64 },
    ShowWinner { text: String, color: String, emoji: String },
    RefreshTabs { ids: Vec<String>, current_id: String },
    RefreshSegmentList(Vec<Segment>),
    RefreshHistory(Vec<Segment>),
    Notify(String),
    SpinEnabled(bool),
    Theme(Theme),
}

/// Headless view that keeps every call it receives. Clones share the log.
#[derive(Debug, Clone, Default)]
pub struct RecordingView {
    events: Rc<RefCell<Vec<ViewEvent>>>,
}

impl RecordingView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<ViewEvent> {
        self.events.borrow().clone()
    }

    pub fn take_events(&self) -> Vec<ViewEvent> {
        std::mem::take(&mut *self.events.borrow_mut())
    }

    pub fn winners(&self) -> Vec<String> {
        self.events
            .borrow()
            .iter()
            .filter_map(|e| match e {
                ViewEvent::ShowWinner { text, .. } => Some(text.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn notices(&self) -> Vec<String> {
        self.events
            .borrow()
            .iter()
            .filter_map(|e| match e {
                ViewEvent::Notify(message) => Some(message.clone()),
                _ => None,
            })
            .collect()
    }

    fn push(&self, event: ViewEvent) {
        self.events.borrow_mut().push(event);
    }
}

impl WheelView for RecordingView {
    fn render_wheel(&mut self, wheel: &Wheel) {
        self.push(ViewEvent::RenderWheel { id: wheel.id.clone(), rotation: wheel.rotation });
    }

    fn show_winner(&mut self, text: &str, color: &str, emoji: &str) {
        self.push(ViewEvent::ShowWinner {
            text: text.to_string(),
            color: color.to_string(),
            emoji: emoji.to_string(),
        });
    }

    fn refresh_tabs(&mut self, wheels: &WheelMap, current_id: &str) {
        self.push(ViewEvent::RefreshTabs { ids: wheels.ids(), current_id: current_id.to_string() });
    }

    fn refresh_segment_list(&mut self, segments: &[Segment]) {
        self.push(ViewEvent::RefreshSegmentList(segments.to_vec()));
    }

    fn refresh_history(&mut self, history: &[Segment]) {
        self.push(ViewEvent::RefreshHistory(history.to_vec()));
    }

    fn notify(&mut self, message: &str) {
        self.push(ViewEvent::Notify(message.to_string()));
    }

    fn set_spin_enabled(&mut self, enabled: bool) {
        self.push(ViewEvent::SpinEnabled(enabled));
    }

    fn apply_theme(&mut self, theme: Theme) {
        self.push(ViewEvent::Theme(theme));
    }
}
