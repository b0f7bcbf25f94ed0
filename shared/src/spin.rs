//! Spin resolution and the time-based spin animation.
//!
//! The winner is drawn before anything moves. From that index a fixed target
//! angle is derived (ten full turns plus the offset that puts the pointer in
//! the middle of the winning slice) and the animation only ever eases toward
//! that angle, so the landing position agrees with the recorded winner by
//! construction.

use std::f64::consts::{PI, TAU};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::constants::{EXTRA_REVOLUTIONS, SPIN_DURATION_MS};
use crate::registry::WheelRegistry;
use crate::segment::Segment;
use crate::wheel::Wheel;

/// Uniform index source for picking a winner.
pub trait RandomSource {
    /// Returns an index in `0..len`. `len` is never zero.
    fn pick_index(&mut self, len: usize) -> usize;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn pick_index(&mut self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len)
    }
}

/// Reproducible draws from a seed.
#[derive(Debug, Clone)]
pub struct SeededRandom(StdRng);

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

impl RandomSource for SeededRandom {
    fn pick_index(&mut self, len: usize) -> usize {
        self.0.gen_range(0..len)
    }
}

/// Always picks the same index (wrapped into range).
#[derive(Debug, Clone, Copy)]
pub struct FixedRandom(pub usize);

impl RandomSource for FixedRandom {
    fn pick_index(&mut self, len: usize) -> usize {
        self.0 % len
    }
}

pub fn ease_out_cubic(t: f64) -> f64 {
    1.0 - (1.0 - t).powi(3)
}

/// Everything decided at the moment a spin starts.
#[derive(Debug, Clone, PartialEq)]
pub struct SpinPlan {
    pub wheel_id: String,
    pub winning_index: usize,
    /// Copy of the winning segment taken when the spin started.
    pub winner: Segment,
    pub slice_degrees: f64,
    pub stop_at_degrees: f64,
    pub total_rotation_degrees: f64,
}

impl SpinPlan {
    /// `winning_index` must be a valid index into `wheel.segments`.
    pub fn new(wheel: &Wheel, winning_index: usize) -> Self {
        let slice_degrees = 360.0 / wheel.segments.len() as f64;
        let stop_at_degrees = 360.0 - winning_index as f64 * slice_degrees - slice_degrees / 2.0;
        let total_rotation_degrees = 360.0 * EXTRA_REVOLUTIONS + stop_at_degrees;

        Self {
            wheel_id: wheel.id.clone(),
            winning_index,
            winner: wheel.segments[winning_index].clone(),
            slice_degrees,
            stop_at_degrees,
            total_rotation_degrees,
        }
    }

    /// Linear progress through the spin, clamped to `0.0..=1.0`.
    pub fn progress_at(elapsed_ms: f64) -> f64 {
        (elapsed_ms / SPIN_DURATION_MS).clamp(0.0, 1.0)
    }

    /// Wheel angle in radians `elapsed_ms` after the first frame.
    pub fn rotation_at(&self, elapsed_ms: f64) -> f64 {
        let eased = ease_out_cubic(Self::progress_at(elapsed_ms));
        self.total_rotation_degrees * eased * PI / 180.0
    }
}

/// Index of the segment under the pointer for a given wheel angle.
///
/// Segment `i` is drawn from `i * slice + rotation - π/2` (canvas angles,
/// clockwise from the +x axis) and the pointer sits at the top, `-π/2`.
pub fn segment_at_pointer(rotation: f64, segment_count: usize) -> usize {
    let slice = TAU / segment_count as f64;
    let offset = (-rotation).rem_euclid(TAU);
    (offset / slice) as usize % segment_count
}

#[derive(Debug, Clone, PartialEq)]
pub struct SpinOutcome {
    pub wheel_id: String,
    pub winning_index: usize,
    pub winner: Segment,
    /// Final angle, normalized to `0..2π`.
    pub rotation: f64,
}

/// What a single animation frame did.
#[derive(Debug, Clone, PartialEq)]
pub enum SpinTick {
    /// No spin in flight.
    Idle,
    Turning { wheel_id: String, rotation: f64, progress: f64 },
    Finished(SpinOutcome),
    /// The spun wheel was deleted before the spin ended.
    Aborted,
}

#[derive(Debug, Clone)]
struct ActiveSpin {
    plan: SpinPlan,
    started_at: Option<f64>,
}

/// `Idle -> Spinning -> Idle`. Holding an active spin is the only
/// "is spinning" latch in the system.
#[derive(Debug, Clone, Default)]
pub struct SpinEngine {
    active: Option<ActiveSpin>,
}

impl SpinEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_spinning(&self) -> bool {
        self.active.is_some()
    }

    pub fn plan(&self) -> Option<&SpinPlan> {
        self.active.as_ref().map(|a| &a.plan)
    }

    /// Starts spinning the current wheel. Returns `None` without touching
    /// anything when a spin is already in flight or there is nothing to spin.
    pub fn spin(
        &mut self,
        registry: &WheelRegistry,
        random: &mut dyn RandomSource,
    ) -> Option<&SpinPlan> {
        if self.active.is_some() {
            log::debug!("Spin ignored, wheel already spinning");
            return None;
        }

        let wheel = registry.current();
        if wheel.segments.is_empty() {
            log::warn!("Wheel {} has no segments to spin", wheel.id);
            return None;
        }

        let winning_index = random.pick_index(wheel.segments.len());
        let plan = SpinPlan::new(wheel, winning_index);
        log::debug!(
            "Spinning wheel {} toward segment {} ({:.2} deg)",
            plan.wheel_id,
            plan.winning_index,
            plan.total_rotation_degrees
        );

        self.active = Some(ActiveSpin { plan, started_at: None });
        self.plan()
    }

    /// Advances the animation to `now_ms` (any monotonic millisecond clock;
    /// the first tick after `spin` marks the start). The final tick normalizes
    /// the angle, records the winner on the spun wheel and releases the latch.
    pub fn tick(&mut self, registry: &mut WheelRegistry, now_ms: f64) -> SpinTick {
        let Some(active) = self.active.as_mut() else {
            return SpinTick::Idle;
        };

        let started_at = *active.started_at.get_or_insert(now_ms);
        let elapsed = now_ms - started_at;
        let progress = SpinPlan::progress_at(elapsed);
        let rotation = active.plan.rotation_at(elapsed);
        let wheel_id = active.plan.wheel_id.clone();

        let Some(wheel) = registry.wheel_mut(&wheel_id) else {
            log::warn!("Wheel {wheel_id} disappeared mid-spin, aborting");
            self.active = None;
            return SpinTick::Aborted;
        };

        if progress < 1.0 {
            wheel.rotation = rotation;
            return SpinTick::Turning { wheel_id, rotation, progress };
        }

        let rotation = rotation.rem_euclid(TAU);
        wheel.rotation = rotation;

        let Some(ActiveSpin { plan, .. }) = self.active.take() else {
            return SpinTick::Idle;
        };
        if let Err(err) = registry.record_outcome_for(&plan.wheel_id, plan.winner.clone()) {
            log::error!("Could not record spin outcome: {err}");
        }
        log::info!(
            "Wheel {} landed on segment {} ({})",
            plan.wheel_id,
            plan.winning_index,
            plan.winner.text
        );

        SpinTick::Finished(SpinOutcome {
            wheel_id: plan.wheel_id,
            winning_index: plan.winning_index,
            winner: plan.winner,
            rotation,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use crate::constants::HISTORY_LIMIT;
    use crate::segment::{fallback_template, SegmentField};

    fn registry_with(segments: &[Segment]) -> WheelRegistry {
        WheelRegistry::initialize(None, segments, &ManualClock::new(0)).0
    }

    fn two_segments() -> Vec<Segment> {
        vec![
            Segment::new("A", "🅰️", 28, "#E8D1DC"),
            Segment::new("B", "🅱️", 28, "#FFFFFF"),
        ]
    }

    fn run_to_end(engine: &mut SpinEngine, registry: &mut WheelRegistry) -> SpinOutcome {
        let mut now = 1000.0;
        loop {
            match engine.tick(registry, now) {
                SpinTick::Finished(outcome) => return outcome,
                SpinTick::Turning { .. } => now += 16.0,
                other => panic!("unexpected tick {other:?}"),
            }
        }
    }

    #[test]
    fn test_ease_out_cubic() {
        assert_eq!(ease_out_cubic(0.0), 0.0);
        assert_eq!(ease_out_cubic(1.0), 1.0);
        assert!((ease_out_cubic(0.5) - 0.875).abs() < 1e-12);
    }

    #[test]
    fn test_plan_for_two_segments() {
        let registry = registry_with(&two_segments());
        let plan = SpinPlan::new(registry.current(), 1);
        assert_eq!(plan.slice_degrees, 180.0);
        assert_eq!(plan.stop_at_degrees, 90.0);
        assert_eq!(plan.total_rotation_degrees, 3690.0);
        assert_eq!(plan.winner.text, "B");
    }

    #[test]
    fn test_rotation_at_follows_easing() {
        let registry = registry_with(&two_segments());
        let plan = SpinPlan::new(registry.current(), 0);
        assert_eq!(plan.rotation_at(0.0), 0.0);
        assert_eq!(plan.rotation_at(-50.0), 0.0);
        let expected_half = plan.total_rotation_degrees * 0.875 * PI / 180.0;
        assert!((plan.rotation_at(2500.0) - expected_half).abs() < 1e-9);
        assert_eq!(plan.rotation_at(5000.0), plan.rotation_at(9000.0));
    }

    #[test]
    fn test_rotation_is_monotonic() {
        let registry = registry_with(&fallback_template());
        let plan = SpinPlan::new(registry.current(), 7);
        let mut last = -1.0;
        for step in 0..=100 {
            let rotation = plan.rotation_at(step as f64 * 50.0);
            assert!(rotation >= last);
            last = rotation;
        }
    }

    #[test]
    fn test_spin_lands_on_forced_winner() {
        let mut registry = registry_with(&two_segments());
        let mut engine = SpinEngine::new();
        engine.spin(&registry, &mut FixedRandom(1)).unwrap();

        let outcome = run_to_end(&mut engine, &mut registry);
        assert_eq!(outcome.winning_index, 1);
        assert_eq!(outcome.winner.text, "B");
        assert!((outcome.rotation - PI / 2.0).abs() < 1e-9);
        assert_eq!(segment_at_pointer(outcome.rotation, 2), 1);
        assert_eq!(registry.current().history[0], two_segments()[1]);
        assert_eq!(registry.current().rotation, outcome.rotation);
        assert!(!engine.is_spinning());
    }

    #[test]
    fn test_every_index_lands_under_pointer() {
        for len in [2usize, 3, 7, 12, 50] {
            let mut registry = registry_with(&fallback_template());
            registry.set_segment_count(len as i64).unwrap();
            for index in 0..len {
                let mut engine = SpinEngine::new();
                engine.spin(&registry, &mut FixedRandom(index)).unwrap();
                let outcome = run_to_end(&mut engine, &mut registry);
                assert_eq!(segment_at_pointer(outcome.rotation, len), index, "len {len}");
                assert!(outcome.rotation.is_finite());
                assert!((0.0..TAU).contains(&outcome.rotation));
            }
        }
    }

    #[test]
    fn test_second_spin_is_ignored_while_spinning() {
        let mut registry = registry_with(&fallback_template());
        let mut engine = SpinEngine::new();
        let first = engine.spin(&registry, &mut FixedRandom(3)).cloned().unwrap();
        assert!(engine.spin(&registry, &mut FixedRandom(5)).is_none());
        assert_eq!(engine.plan(), Some(&first));

        engine.tick(&mut registry, 0.0);
        assert!(matches!(engine.tick(&mut registry, 100.0), SpinTick::Turning { .. }));
        assert!(engine.spin(&registry, &mut FixedRandom(5)).is_none());

        let outcome = run_to_end(&mut engine, &mut registry);
        assert_eq!(outcome.winning_index, 3);
        assert!(engine.spin(&registry, &mut FixedRandom(5)).is_some());
    }

    #[test]
    fn test_first_tick_marks_start() {
        let mut registry = registry_with(&two_segments());
        let mut engine = SpinEngine::new();
        engine.spin(&registry, &mut FixedRandom(0)).unwrap();

        let SpinTick::Turning { rotation, progress, .. } = engine.tick(&mut registry, 12_345.0)
        else {
            panic!("expected turning");
        };
        assert_eq!(rotation, 0.0);
        assert_eq!(progress, 0.0);
        assert!(matches!(
            engine.tick(&mut registry, 12_345.0 + 4999.0),
            SpinTick::Turning { .. }
        ));
        assert!(matches!(
            engine.tick(&mut registry, 12_345.0 + 5000.0),
            SpinTick::Finished(_)
        ));
        assert_eq!(engine.tick(&mut registry, 20_000.0), SpinTick::Idle);
    }

    #[test]
    fn test_winner_captured_before_edits() {
        let mut registry = registry_with(&two_segments());
        let mut engine = SpinEngine::new();
        engine.spin(&registry, &mut FixedRandom(0)).unwrap();
        engine.tick(&mut registry, 0.0);
        registry.update_segment(0, SegmentField::Text, "Edited").unwrap();

        let outcome = run_to_end(&mut engine, &mut registry);
        assert_eq!(outcome.winner.text, "A");
        assert_eq!(registry.current().history[0].text, "A");
    }

    #[test]
    fn test_outcome_recorded_on_spun_wheel() {
        let clock = ManualClock::new(0);
        let mut registry = registry_with(&two_segments());
        let spun = registry.current_id().to_string();
        let mut engine = SpinEngine::new();
        engine.spin(&registry, &mut FixedRandom(1)).unwrap();
        engine.tick(&mut registry, 0.0);

        clock.advance(1);
        registry.create_wheel(&fallback_template(), &clock);
        run_to_end(&mut engine, &mut registry);

        assert!(registry.current().history.is_empty());
        assert_eq!(registry.wheel(&spun).unwrap().history.len(), 1);
    }

    #[test]
    fn test_deleted_wheel_aborts_spin() {
        let clock = ManualClock::new(0);
        let mut registry = registry_with(&two_segments());
        let mut engine = SpinEngine::new();
        engine.spin(&registry, &mut FixedRandom(1)).unwrap();

        clock.advance(1);
        registry.create_wheel(&two_segments(), &clock);
        let spun = registry.wheels().first().unwrap().id.clone();
        registry.delete_wheel(&spun).unwrap();

        assert_eq!(engine.tick(&mut registry, 0.0), SpinTick::Aborted);
        assert!(!engine.is_spinning());
    }

    #[test]
    fn test_sixteen_spins_drop_the_first() {
        let mut registry = registry_with(&fallback_template());
        let mut engine = SpinEngine::new();
        let mut random = SeededRandom::new(7);
        let mut winners = Vec::new();
        for _ in 0..16 {
            engine.spin(&registry, &mut random).unwrap();
            winners.push(run_to_end(&mut engine, &mut registry).winning_index);
        }
        let history = &registry.current().history;
        assert_eq!(history.len(), HISTORY_LIMIT);
        let expected: Vec<Segment> = winners[1..]
            .iter()
            .rev()
            .map(|&i| fallback_template()[i].clone())
            .collect();
        assert_eq!(history, &expected);
    }

    #[test]
    fn test_seeded_draws_cover_every_index() {
        let mut random = SeededRandom::new(42);
        let mut seen = [0u32; 6];
        for _ in 0..6000 {
            seen[random.pick_index(6)] += 1;
        }
        assert!(seen.iter().all(|&n| n > 800), "{seen:?}");
    }
}
