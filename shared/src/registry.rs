//! Owns every wheel instance and the notion of the current one.
//!
//! All operations are synchronous and all-or-nothing: a rejected call leaves
//! the registry exactly as it was. Persisting and redrawing after a mutation
//! is the session's job, not the registry's.

use crate::clock::Clock;
use crate::constants::{
    DEFAULT_SEGMENT_COUNT, LAST_WHEEL_ERROR, MAX_SEGMENTS, MIN_SEGMENTS, MIN_SEGMENTS_ERROR,
};
use crate::error::{Result, WheelError};
use crate::segment::{Segment, SegmentField};
use crate::validation::parse_leading_int;
use crate::wheel::{RegistryState, Wheel, WheelMap};

#[derive(Debug, Clone, PartialEq)]
pub struct WheelRegistry {
    state: RegistryState,
}

impl WheelRegistry {
    /// Adopts a persisted state when it has wheels, otherwise seeds a single
    /// wheel from `template`. The flag is `true` when the state was seeded.
    pub fn initialize(
        persisted: Option<RegistryState>,
        template: &[Segment],
        clock: &dyn Clock,
    ) -> (Self, bool) {
        if let Some(mut state) = persisted.filter(|s| !s.wheels.is_empty()) {
            if !state.wheels.contains(&state.current_wheel_id) {
                if let Some(first) = state.wheels.first() {
                    log::warn!(
                        "Current wheel {:?} is missing, selecting {}",
                        state.current_wheel_id,
                        first.id
                    );
                    state.current_wheel_id = first.id.clone();
                }
            }
            return (Self { state }, false);
        }

        let mut registry = Self {
            state: RegistryState {
                wheels: WheelMap::default(),
                current_wheel_id: String::new(),
            },
        };
        registry.create_wheel(template, clock);
        (registry, true)
    }

    pub fn state(&self) -> &RegistryState {
        &self.state
    }

    pub fn wheels(&self) -> &WheelMap {
        &self.state.wheels
    }

    pub fn len(&self) -> usize {
        self.state.wheels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.wheels.is_empty()
    }

    pub fn current_id(&self) -> &str {
        &self.state.current_wheel_id
    }

    pub fn wheel(&self, id: &str) -> Option<&Wheel> {
        self.state.wheels.get(id)
    }

    pub(crate) fn wheel_mut(&mut self, id: &str) -> Option<&mut Wheel> {
        self.state.wheels.get_mut(id)
    }

    pub fn current(&self) -> &Wheel {
        self.state
            .wheels
            .get(&self.state.current_wheel_id)
            .expect("current wheel id always names a registered wheel")
    }

    fn current_mut(&mut self) -> Result<&mut Wheel> {
        let id = self.state.current_wheel_id.clone();
        self.state.wheels.get_mut(&id).ok_or(WheelError::NotFound(id))
    }

    /// Ids are `wheel-{unix ms}`; a `-{n}` suffix is added when that id is
    /// already taken, so two wheels created in the same millisecond differ.
    fn next_wheel_id(&self, now_ms: i64) -> String {
        let base = format!("wheel-{now_ms}");
        let mut candidate = base.clone();
        let mut suffix = 1;
        while self.state.wheels.contains(&candidate) {
            candidate = format!("{base}-{suffix}");
            suffix += 1;
        }
        candidate
    }

    /// Adds a wheel seeded from `template` and makes it current.
    pub fn create_wheel(&mut self, template: &[Segment], clock: &dyn Clock) -> String {
        let id = self.next_wheel_id(clock.now_ms());
        self.state.wheels.insert(Wheel::new(id.clone(), template));
        self.state.current_wheel_id = id.clone();
        log::info!("Created wheel {id} ({} wheels)", self.len());
        id
    }

    pub fn select_wheel(&mut self, id: &str) -> Result<()> {
        if !self.state.wheels.contains(id) {
            return Err(WheelError::NotFound(id.to_string()));
        }
        self.state.current_wheel_id = id.to_string();
        Ok(())
    }

    /// Removes a wheel. The last remaining wheel can never be removed.
    /// When the current wheel goes, the first remaining one becomes current.
    pub fn delete_wheel(&mut self, id: &str) -> Result<Wheel> {
        if self.len() <= 1 {
            return Err(WheelError::InvariantViolation(LAST_WHEEL_ERROR));
        }
        let removed = self
            .state
            .wheels
            .remove(id)
            .ok_or_else(|| WheelError::NotFound(id.to_string()))?;

        if self.state.current_wheel_id == removed.id {
            if let Some(first) = self.state.wheels.first() {
                self.state.current_wheel_id = first.id.clone();
            }
        }
        log::info!("Deleted wheel {} ({} wheels left)", removed.id, self.len());
        Ok(removed)
    }

    pub fn delete_current_wheel(&mut self) -> Result<Wheel> {
        let id = self.state.current_wheel_id.clone();
        self.delete_wheel(&id)
    }

    /// Reads the segment-count field. Empty or non-numeric text gives 0,
    /// which [`set_segment_count`](Self::set_segment_count) turns into the default.
    pub fn parse_segment_count(raw: &str) -> i64 {
        parse_leading_int(raw).unwrap_or(0)
    }

    /// Resizes the current wheel and returns the new segment count.
    ///
    /// Zero means "use the default" (12); anything else is clamped to
    /// `1..=50`. Existing segments keep their index, new slots are filled
    /// with numbered placeholders. The floor here is 1, not the 2 enforced
    /// by [`remove_segment`](Self::remove_segment).
    pub fn set_segment_count(&mut self, requested: i64) -> Result<usize> {
        let count = if requested == 0 {
            DEFAULT_SEGMENT_COUNT
        } else {
            requested.clamp(1, MAX_SEGMENTS as i64) as usize
        };

        let wheel = self.current_mut()?;
        let previous = wheel.segments.len();
        wheel.segments.truncate(count);
        let existing = wheel.segments.len();
        wheel.segments.extend((existing..count).map(Segment::placeholder));

        log::debug!("Wheel {} resized from {previous} to {count} segments", wheel.id);
        Ok(count)
    }

    pub fn update_segment(&mut self, index: usize, field: SegmentField, value: &str) -> Result<()> {
        let wheel = self.current_mut()?;
        let len = wheel.segments.len();
        let segment = wheel
            .segments
            .get_mut(index)
            .ok_or(WheelError::IndexOutOfRange { index, len })?;
        segment.apply(field, value)
    }

    /// Removes one segment; a wheel never drops below two.
    pub fn remove_segment(&mut self, index: usize) -> Result<Segment> {
        let wheel = self.current_mut()?;
        let len = wheel.segments.len();
        if len <= MIN_SEGMENTS {
            return Err(WheelError::InvariantViolation(MIN_SEGMENTS_ERROR));
        }
        if index >= len {
            return Err(WheelError::IndexOutOfRange { index, len });
        }
        Ok(wheel.segments.remove(index))
    }

    /// Prepends an outcome to the current wheel's history.
    pub fn record_outcome(&mut self, segment: Segment) -> Result<()> {
        self.current_mut()?.push_history(segment);
        Ok(())
    }

    /// Prepends an outcome to a specific wheel's history, whichever wheel is
    /// current.
    pub fn record_outcome_for(&mut self, id: &str, segment: Segment) -> Result<()> {
        self.state
            .wheels
            .get_mut(id)
            .ok_or_else(|| WheelError::NotFound(id.to_string()))?
            .push_history(segment);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use crate::constants::HISTORY_LIMIT;
    use crate::segment::fallback_template;
    use pretty_assertions::assert_eq;

    fn fresh() -> (WheelRegistry, ManualClock) {
        let clock = ManualClock::new(1_700_000_000_000);
        let (registry, seeded) = WheelRegistry::initialize(None, &fallback_template(), &clock);
        assert!(seeded);
        (registry, clock)
    }

    #[test]
    fn test_initialize_seeds_one_wheel() {
        let (registry, _) = fresh();
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.current_id(), "wheel-1700000000000");
        assert_eq!(registry.current().segments, fallback_template());
        assert_eq!(registry.current().rotation, 0.0);
        assert!(registry.current().history.is_empty());
    }

    #[test]
    fn test_initialize_adopts_persisted_state() {
        let (mut source, clock) = fresh();
        clock.advance(5);
        source.create_wheel(&fallback_template()[..3], &clock);
        source.select_wheel("wheel-1700000000000").unwrap();

        let (registry, seeded) = WheelRegistry::initialize(
            Some(source.state().clone()),
            &fallback_template(),
            &clock,
        );
        assert!(!seeded);
        assert_eq!(registry, source);
    }

    #[test]
    fn test_initialize_ignores_empty_state() {
        let clock = ManualClock::new(1);
        let (registry, seeded) =
            WheelRegistry::initialize(Some(RegistryState::default()), &fallback_template(), &clock);
        assert!(seeded);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_initialize_repairs_dangling_current_id() {
        let (source, clock) = fresh();
        let mut state = source.state().clone();
        state.current_wheel_id = "wheel-gone".into();
        let (registry, _) = WheelRegistry::initialize(Some(state), &fallback_template(), &clock);
        assert_eq!(registry.current_id(), "wheel-1700000000000");
    }

    #[test]
    fn test_create_wheel_same_millisecond_ids_differ() {
        let (mut registry, clock) = fresh();
        let a = registry.create_wheel(&fallback_template(), &clock);
        let b = registry.create_wheel(&fallback_template(), &clock);
        assert_ne!(a, b);
        assert_eq!(a, "wheel-1700000000000-1");
        assert_eq!(b, "wheel-1700000000000-2");
        assert_eq!(registry.len(), 3);
        assert_eq!(registry.current_id(), b);
    }

    #[test]
    fn test_create_wheel_deep_copies_template() {
        let (mut registry, clock) = fresh();
        registry.update_segment(0, SegmentField::Text, "Changed").unwrap();
        clock.advance(1);
        registry.create_wheel(&fallback_template(), &clock);
        assert_eq!(registry.current().segments[0].text, "Caneta");
    }

    #[test]
    fn test_select_wheel() {
        let (mut registry, clock) = fresh();
        let first = registry.current_id().to_string();
        clock.advance(1);
        registry.create_wheel(&fallback_template(), &clock);
        registry.select_wheel(&first).unwrap();
        assert_eq!(registry.current_id(), first);

        let err = registry.select_wheel("wheel-nope").unwrap_err();
        assert_eq!(err, WheelError::NotFound("wheel-nope".into()));
        assert_eq!(registry.current_id(), first);
    }

    #[test]
    fn test_delete_last_wheel_is_rejected() {
        let (mut registry, _) = fresh();
        let before = registry.clone();
        let err = registry.delete_current_wheel().unwrap_err();
        assert_eq!(err, WheelError::InvariantViolation(LAST_WHEEL_ERROR));
        assert_eq!(registry, before);
    }

    #[test]
    fn test_delete_current_selects_first_remaining() {
        let (mut registry, clock) = fresh();
        let first = registry.current_id().to_string();
        clock.advance(1);
        let second = registry.create_wheel(&fallback_template(), &clock);
        clock.advance(1);
        registry.create_wheel(&fallback_template(), &clock);

        registry.select_wheel(&first).unwrap();
        let removed = registry.delete_current_wheel().unwrap();
        assert_eq!(removed.id, first);
        assert_eq!(registry.current_id(), second);
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_delete_other_wheel_keeps_current() {
        let (mut registry, clock) = fresh();
        let first = registry.current_id().to_string();
        clock.advance(1);
        let second = registry.create_wheel(&fallback_template(), &clock);
        registry.delete_wheel(&first).unwrap();
        assert_eq!(registry.current_id(), second);

        clock.advance(1);
        registry.create_wheel(&fallback_template(), &clock);
        assert!(matches!(registry.delete_wheel("missing"), Err(WheelError::NotFound(_))));
    }

    #[test]
    fn test_set_segment_count_range() {
        let (mut registry, _) = fresh();
        for n in 1..=50 {
            assert_eq!(registry.set_segment_count(n).unwrap(), n as usize);
            assert_eq!(registry.current().segments.len(), n as usize);
        }
        assert_eq!(registry.set_segment_count(80).unwrap(), MAX_SEGMENTS);
        assert_eq!(registry.set_segment_count(0).unwrap(), DEFAULT_SEGMENT_COUNT);
        assert_eq!(registry.set_segment_count(-4).unwrap(), 1);
    }

    #[test]
    fn test_set_segment_count_preserves_and_fills() {
        let (mut registry, _) = fresh();
        registry.set_segment_count(14).unwrap();
        let segments = &registry.current().segments;
        assert_eq!(&segments[..12], &fallback_template()[..]);
        assert_eq!(segments[12], Segment::placeholder(12));
        assert_eq!(segments[13].text, "Opção 14");

        registry.set_segment_count(3).unwrap();
        assert_eq!(registry.current().segments, fallback_template()[..3].to_vec());
    }

    #[test]
    fn test_parse_segment_count() {
        assert_eq!(WheelRegistry::parse_segment_count("8"), 8);
        assert_eq!(WheelRegistry::parse_segment_count("oito"), 0);
        assert_eq!(WheelRegistry::parse_segment_count(""), 0);

        let (mut registry, _) = fresh();
        registry.set_segment_count(WheelRegistry::parse_segment_count("x")).unwrap();
        assert_eq!(registry.current().segments.len(), DEFAULT_SEGMENT_COUNT);
    }

    #[test]
    fn test_update_segment() {
        let (mut registry, _) = fresh();
        registry.update_segment(2, SegmentField::EmojiSize, "33").unwrap();
        registry.update_segment(2, SegmentField::Color, "#123456").unwrap();
        assert_eq!(registry.current().segments[2].emoji_size, 33);
        assert_eq!(registry.current().segments[2].color, "#123456");

        let err = registry.update_segment(12, SegmentField::Text, "x").unwrap_err();
        assert_eq!(err, WheelError::IndexOutOfRange { index: 12, len: 12 });
    }

    #[test]
    fn test_remove_segment_floor() {
        let (mut registry, _) = fresh();
        registry.set_segment_count(3).unwrap();
        let removed = registry.remove_segment(0).unwrap();
        assert_eq!(removed.text, "Caneta");
        assert_eq!(registry.current().segments[0].text, "Voucher");

        let before = registry.current().segments.clone();
        let err = registry.remove_segment(0).unwrap_err();
        assert_eq!(err, WheelError::InvariantViolation(MIN_SEGMENTS_ERROR));
        assert_eq!(registry.current().segments, before);
    }

    #[test]
    fn test_remove_segment_out_of_range() {
        let (mut registry, _) = fresh();
        let err = registry.remove_segment(40).unwrap_err();
        assert_eq!(err, WheelError::IndexOutOfRange { index: 40, len: 12 });
        assert_eq!(registry.current().segments.len(), 12);
    }

    #[test]
    fn test_record_outcome_bounded() {
        let (mut registry, _) = fresh();
        for i in 0..16 {
            registry.record_outcome(Segment::placeholder(i)).unwrap();
        }
        let history = &registry.current().history;
        assert_eq!(history.len(), HISTORY_LIMIT);
        assert_eq!(history[0], Segment::placeholder(15));
        assert!(!history.contains(&Segment::placeholder(0)));
    }

    #[test]
    fn test_record_outcome_for_named_wheel() {
        let (mut registry, clock) = fresh();
        let first = registry.current_id().to_string();
        clock.advance(1);
        registry.create_wheel(&fallback_template(), &clock);

        registry.record_outcome_for(&first, Segment::placeholder(4)).unwrap();
        assert!(registry.current().history.is_empty());
        assert_eq!(registry.wheel(&first).unwrap().history.len(), 1);
    }
}
