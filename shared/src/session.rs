//! Wires the registry, spin engine, storage and view together.
//!
//! Every successful mutation redraws and saves. Rejected mutations change
//! nothing, show the user the notice carried by the error and hand the
//! error back to the caller.

use crate::clock::{Clock, SystemClock};
use crate::constants::SAVE_FAILED_ERROR;
use crate::error::{Result, WheelError};
use crate::persistence::{KeyValueStore, Theme, WheelStorage};
use crate::registry::WheelRegistry;
use crate::segment::{Segment, SegmentField};
use crate::spin::{RandomSource, SpinEngine, SpinTick, ThreadRandom};
use crate::view::WheelView;

pub struct WheelSession<S: KeyValueStore, V: WheelView> {
    registry: WheelRegistry,
    engine: SpinEngine,
    storage: WheelStorage<S>,
    view: V,
    template: Vec<Segment>,
    random: Box<dyn RandomSource>,
    clock: Box<dyn Clock>,
    theme: Theme,
}

impl<S: KeyValueStore, V: WheelView> WheelSession<S, V> {
    pub fn start(store: S, view: V, template: Vec<Segment>) -> Self {
        Self::with_sources(store, view, template, Box::new(ThreadRandom), Box::new(SystemClock))
    }

    /// Like [`start`](Self::start) with explicit randomness and time, for
    /// reproducible runs.
    pub fn with_sources(
        store: S,
        view: V,
        template: Vec<Segment>,
        random: Box<dyn RandomSource>,
        clock: Box<dyn Clock>,
    ) -> Self {
        let storage = WheelStorage::new(store);
        let (registry, seeded) =
            WheelRegistry::initialize(storage.load(), &template, clock.as_ref());
        let theme = storage.load_theme();

        let mut session = Self {
            registry,
            engine: SpinEngine::new(),
            storage,
            view,
            template,
            random,
            clock,
            theme,
        };
        log::info!(
            "Wheel session started with {} wheels (seeded: {seeded})",
            session.registry.len()
        );

        if seeded {
            // A failed first save is already reported; the session still works in memory.
            let _ = session.persist();
        }
        session.view.apply_theme(theme);
        session.refresh_ui();
        session
    }

    pub fn registry(&self) -> &WheelRegistry {
        &self.registry
    }

    pub fn template(&self) -> &[Segment] {
        &self.template
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn store(&self) -> &S {
        self.storage.store()
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn is_spinning(&self) -> bool {
        self.engine.is_spinning()
    }

    /// Pushes the whole current state to the view.
    pub fn refresh_ui(&mut self) {
        let wheel = self.registry.current();
        self.view.refresh_tabs(self.registry.wheels(), self.registry.current_id());
        self.view.render_wheel(wheel);
        self.view.refresh_segment_list(&wheel.segments);
        self.view.refresh_history(&wheel.history);
        self.view.set_spin_enabled(!self.engine.is_spinning());
    }

    fn persist(&mut self) -> Result<()> {
        match self.storage.save(self.registry.state()) {
            Ok(()) => Ok(()),
            Err(err) => {
                log::error!("Failed to save wheels: {err}");
                self.view.notify(SAVE_FAILED_ERROR);
                Err(err)
            }
        }
    }

    fn commit(&mut self) -> Result<()> {
        self.refresh_ui();
        self.persist()
    }

    fn reject(&mut self, err: WheelError) -> WheelError {
        if err.is_user_facing() {
            log::warn!("Rejected: {err}");
            self.view.notify(&err.to_string());
        } else {
            log::error!("Rejected: {err}");
        }
        err
    }

    pub fn create_wheel(&mut self) -> Result<String> {
        let id = self.registry.create_wheel(&self.template, self.clock.as_ref());
        self.commit()?;
        Ok(id)
    }

    pub fn select_wheel(&mut self, id: &str) -> Result<()> {
        self.registry.select_wheel(id).map_err(|e| self.reject(e))?;
        self.commit()
    }

    pub fn delete_current_wheel(&mut self) -> Result<()> {
        self.registry.delete_current_wheel().map_err(|e| self.reject(e))?;
        self.commit()
    }

    /// Takes the raw text of the segment-count field.
    pub fn set_segment_count(&mut self, raw: &str) -> Result<usize> {
        let requested = WheelRegistry::parse_segment_count(raw);
        let count = self.registry.set_segment_count(requested).map_err(|e| self.reject(e))?;
        self.commit()?;
        Ok(count)
    }

    /// Edits redraw only the wheel, leaving the editor rows alone while the
    /// user is typing in them.
    pub fn update_segment(&mut self, index: usize, field: SegmentField, value: &str) -> Result<()> {
        self.registry
            .update_segment(index, field, value)
            .map_err(|e| self.reject(e))?;
        self.view.render_wheel(self.registry.current());
        self.persist()
    }

    pub fn remove_segment(&mut self, index: usize) -> Result<()> {
        self.registry.remove_segment(index).map_err(|e| self.reject(e))?;
        self.commit()
    }

    /// Starts a spin of the current wheel. Returns `false` when one is
    /// already running.
    pub fn spin(&mut self) -> bool {
        if self.engine.spin(&self.registry, self.random.as_mut()).is_none() {
            return false;
        }
        self.view.set_spin_enabled(false);
        true
    }

    /// One animation frame. Keep calling while it returns `Turning`.
    pub fn tick(&mut self, now_ms: f64) -> Result<SpinTick> {
        let tick = self.engine.tick(&mut self.registry, now_ms);
        match &tick {
            SpinTick::Idle => {}
            SpinTick::Turning { wheel_id, .. } => {
                if wheel_id == self.registry.current_id() {
                    self.view.render_wheel(self.registry.current());
                }
            }
            SpinTick::Finished(outcome) => {
                self.view.set_spin_enabled(true);
                if outcome.wheel_id == self.registry.current_id() {
                    let wheel = self.registry.current();
                    self.view.render_wheel(wheel);
                    self.view.refresh_history(&wheel.history);
                }
                let winner = &outcome.winner;
                self.view.show_winner(&winner.text, &winner.color, &winner.emoji);
                self.persist()?;
            }
            SpinTick::Aborted => self.view.set_spin_enabled(true),
        }
        Ok(tick)
    }

    pub fn toggle_theme(&mut self) -> Result<Theme> {
        self.theme = self.theme.toggled();
        self.view.apply_theme(self.theme);
        self.storage.save_theme(self.theme)?;
        Ok(self.theme)
    }
}
