use std::cell::RefCell;
use std::rc::Rc;

use gloo::dialogs::alert;
use gloo_timers::callback::Timeout;
use shared::constants::WINNER_POPUP_MS;
use shared::{Segment, SegmentField, SpinTick, Theme, Wheel, WheelMap, WheelSession, WheelView};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::window;
use yew::prelude::*;

use crate::config::fetch_template;
use crate::storage::LocalStorage;

type AppSession = WheelSession<LocalStorage, YewView>;
type SharedSession = Rc<RefCell<Option<AppSession>>>;
type FrameLoop = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// Everything the page renders. Only the view adapter writes to it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct WheelScreen {
    pub ready: bool,
    pub wheel: Option<Wheel>,
    pub tabs: Vec<String>,
    pub current_id: String,
    pub segments: Vec<Segment>,
    pub history: Vec<Segment>,
    pub winner: Option<Segment>,
    pub spin_enabled: bool,
    pub theme: Theme,
}

pub enum ScreenAction {
    Ready,
    Wheel(Wheel),
    Tabs { ids: Vec<String>, current_id: String },
    Segments(Vec<Segment>),
    History(Vec<Segment>),
    Winner(Option<Segment>),
    SpinEnabled(bool),
    Theme(Theme),
}

impl Reducible for WheelScreen {
    type Action = ScreenAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            ScreenAction::Ready => next.ready = true,
            ScreenAction::Wheel(wheel) => next.wheel = Some(wheel),
            ScreenAction::Tabs { ids, current_id } => {
                next.tabs = ids;
                next.current_id = current_id;
            }
            ScreenAction::Segments(segments) => next.segments = segments,
            ScreenAction::History(history) => next.history = history,
            ScreenAction::Winner(winner) => next.winner = winner,
            ScreenAction::SpinEnabled(enabled) => next.spin_enabled = enabled,
            ScreenAction::Theme(theme) => next.theme = theme,
        }
        Rc::new(next)
    }
}

/// Feeds session output into the yew reducer.
pub struct YewView {
    screen: UseReducerDispatcher<WheelScreen>,
}

impl YewView {
    pub fn new(screen: UseReducerDispatcher<WheelScreen>) -> Self {
        Self { screen }
    }
}

impl WheelView for YewView {
    fn render_wheel(&mut self, wheel: &Wheel) {
        self.screen.dispatch(ScreenAction::Wheel(wheel.clone()));
    }

    fn show_winner(&mut self, text: &str, color: &str, emoji: &str) {
        let winner = Segment {
            text: text.to_string(),
            emoji: emoji.to_string(),
            color: color.to_string(),
            ..Segment::placeholder(0)
        };
        self.screen.dispatch(ScreenAction::Winner(Some(winner)));

        let screen = self.screen.clone();
        Timeout::new(WINNER_POPUP_MS, move || {
            screen.dispatch(ScreenAction::Winner(None));
        })
        .forget();
    }

    fn refresh_tabs(&mut self, wheels: &WheelMap, current_id: &str) {
        self.screen.dispatch(ScreenAction::Tabs {
            ids: wheels.ids(),
            current_id: current_id.to_string(),
        });
    }

    fn refresh_segment_list(&mut self, segments: &[Segment]) {
        self.screen.dispatch(ScreenAction::Segments(segments.to_vec()));
    }

    fn refresh_history(&mut self, history: &[Segment]) {
        self.screen.dispatch(ScreenAction::History(history.to_vec()));
    }

    fn notify(&mut self, message: &str) {
        alert(message);
    }

    fn set_spin_enabled(&mut self, enabled: bool) {
        self.screen.dispatch(ScreenAction::SpinEnabled(enabled));
    }

    fn apply_theme(&mut self, theme: Theme) {
        // Tailwind's `dark:` variants key off this class on <html>.
        if let Some(root) = window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        {
            let classes = root.class_list();
            let result = match theme {
                Theme::Dark => classes.add_1("dark"),
                Theme::Light => classes.remove_1("dark"),
            };
            if let Err(err) = result {
                log::warn!("Could not switch theme class: {err:?}");
            }
        }
        self.screen.dispatch(ScreenAction::Theme(theme));
    }
}

/// User intents coming from the page.
#[derive(Debug, Clone, PartialEq)]
pub enum WheelCommand {
    CreateWheel,
    SelectWheel(String),
    DeleteWheel,
    SetSegmentCount(String),
    UpdateSegment { index: usize, field: SegmentField, value: String },
    RemoveSegment(usize),
    Spin,
    ToggleTheme,
}

#[derive(Clone, PartialEq)]
pub struct WheelSessionHandle {
    pub screen: UseReducerHandle<WheelScreen>,
    pub on_command: Callback<WheelCommand>,
}

#[hook]
pub fn use_wheel_session() -> WheelSessionHandle {
    let screen = use_reducer(WheelScreen::default);
    let session: SharedSession = use_mut_ref(|| None);
    let frame_loop: FrameLoop = use_mut_ref(|| None);

    {
        let session = session.clone();
        let dispatcher = screen.dispatcher();
        use_effect_with((), move |_| {
            spawn_local(async move {
                let template = fetch_template().await;
                let view = YewView::new(dispatcher.clone());
                *session.borrow_mut() = Some(WheelSession::start(LocalStorage, view, template));
                dispatcher.dispatch(ScreenAction::Ready);
            });
            || ()
        });
    }

    let on_command = {
        let session = session.clone();
        let frame_loop = frame_loop.clone();
        Callback::from(move |command: WheelCommand| {
            let started = match session.borrow_mut().as_mut() {
                Some(active) => run_command(active, command),
                None => {
                    log::debug!("Ignoring {command:?} before the session is ready");
                    false
                }
            };
            if started {
                start_frame_loop(session.clone(), frame_loop.clone());
            }
        })
    };

    WheelSessionHandle { screen, on_command }
}

/// Applies one command. Returns whether a spin was started.
fn run_command(session: &mut AppSession, command: WheelCommand) -> bool {
    let result = match &command {
        WheelCommand::CreateWheel => session.create_wheel().map(|_| ()),
        WheelCommand::SelectWheel(id) => session.select_wheel(id),
        WheelCommand::DeleteWheel => session.delete_current_wheel(),
        WheelCommand::SetSegmentCount(raw) => session.set_segment_count(raw).map(|_| ()),
        WheelCommand::UpdateSegment { index, field, value } => {
            session.update_segment(*index, *field, value)
        }
        WheelCommand::RemoveSegment(index) => session.remove_segment(*index),
        WheelCommand::Spin => return session.spin(),
        WheelCommand::ToggleTheme => session.toggle_theme().map(|_| ()),
    };
    // The session has already shown the user whatever they need to see.
    if let Err(err) = result {
        log::debug!("{command:?} failed: {err}");
    }
    false
}

/// Drives `tick` from requestAnimationFrame until the spin settles.
fn start_frame_loop(session: SharedSession, frame_loop: FrameLoop) {
    let next = frame_loop.clone();
    *frame_loop.borrow_mut() = Some(Closure::wrap(Box::new(move |timestamp: f64| {
        let tick = match session.borrow_mut().as_mut() {
            Some(active) => active.tick(timestamp),
            None => return,
        };
        match tick {
            Ok(SpinTick::Turning { .. }) => request_frame(&next),
            Ok(SpinTick::Finished(outcome)) => {
                log::info!("Wheel {} landed on {}", outcome.wheel_id, outcome.winner.text);
            }
            Ok(SpinTick::Idle | SpinTick::Aborted) => {}
            Err(err) => log::error!("Spin finished but could not be saved: {err}"),
        }
    }) as Box<dyn FnMut(f64)>));

    request_frame(&frame_loop);
}

fn request_frame(frame_loop: &FrameLoop) {
    let Some(window) = window() else {
        log::error!("No window to animate in");
        return;
    };
    if let Some(callback) = frame_loop.borrow().as_ref() {
        if let Err(err) = window.request_animation_frame(callback.as_ref().unchecked_ref()) {
            log::error!("requestAnimationFrame failed: {err:?}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reducer_tracks_latest_view_output() {
        let screen = Rc::new(WheelScreen::default());
        let screen = screen.reduce(ScreenAction::Tabs {
            ids: vec!["wheel-1".into(), "wheel-2".into()],
            current_id: "wheel-2".into(),
        });
        let screen = screen.reduce(ScreenAction::SpinEnabled(true));
        let screen = screen.reduce(ScreenAction::Winner(Some(Segment::placeholder(0))));
        let screen = screen.reduce(ScreenAction::Winner(None));

        assert_eq!(screen.tabs.len(), 2);
        assert_eq!(screen.current_id, "wheel-2");
        assert!(screen.spin_enabled);
        assert_eq!(screen.winner, None);
        assert!(!screen.ready);
    }
}
