use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::constants::HISTORY_LIMIT;
use crate::segment::Segment;

/// One independent wheel: its segments, current visual angle and the
/// outcomes it produced, newest first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wheel {
    pub id: String,
    pub segments: Vec<Segment>,
    /// Radians. Written only by the spin engine.
    #[serde(default)]
    pub rotation: f64,
    #[serde(default)]
    pub history: Vec<Segment>,
}

impl Wheel {
    pub fn new(id: String, template: &[Segment]) -> Self {
        Self {
            id,
            segments: template.to_vec(),
            rotation: 0.0,
            history: Vec::new(),
        }
    }

    pub fn push_history(&mut self, segment: Segment) {
        self.history.insert(0, segment);
        self.history.truncate(HISTORY_LIMIT);
    }
}

/// Wheels keyed by id, kept in insertion order.
///
/// Serializes as a JSON object so the stored shape stays `{ id: wheel }`,
/// and reads entries back in document order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct WheelMap(Vec<Wheel>);

impl WheelMap {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.0.iter().any(|w| w.id == id)
    }

    pub fn get(&self, id: &str) -> Option<&Wheel> {
        self.0.iter().find(|w| w.id == id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut Wheel> {
        self.0.iter_mut().find(|w| w.id == id)
    }

    pub fn first(&self) -> Option<&Wheel> {
        self.0.first()
    }

    /// Replaces a wheel with the same id in place, otherwise appends.
    pub fn insert(&mut self, wheel: Wheel) {
        match self.get_mut(&wheel.id) {
            Some(existing) => *existing = wheel,
            None => self.0.push(wheel),
        }
    }

    pub fn remove(&mut self, id: &str) -> Option<Wheel> {
        let position = self.0.iter().position(|w| w.id == id)?;
        Some(self.0.remove(position))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Wheel> {
        self.0.iter()
    }

    pub fn ids(&self) -> Vec<String> {
        self.0.iter().map(|w| w.id.clone()).collect()
    }
}

impl FromIterator<Wheel> for WheelMap {
    fn from_iter<I: IntoIterator<Item = Wheel>>(iter: I) -> Self {
        let mut map = WheelMap::default();
        for wheel in iter {
            map.insert(wheel);
        }
        map
    }
}

impl Serialize for WheelMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for wheel in &self.0 {
            map.serialize_entry(&wheel.id, wheel)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for WheelMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct WheelMapVisitor;

        impl<'de> Visitor<'de> for WheelMapVisitor {
            type Value = WheelMap;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of wheel id to wheel")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<WheelMap, A::Error> {
                let mut wheels = WheelMap::default();
                while let Some((key, mut wheel)) = access.next_entry::<String, Wheel>()? {
                    // Lookups go through the key, so it wins over the inner id.
                    wheel.id = key;
                    wheels.insert(wheel);
                }
                Ok(wheels)
            }
        }

        deserializer.deserialize_map(WheelMapVisitor)
    }
}

/// Everything that gets persisted: all wheels plus the selected one.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistryState {
    pub wheels: WheelMap,
    #[serde(default)]
    pub current_wheel_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn wheel(id: &str) -> Wheel {
        Wheel::new(id.to_string(), &[Segment::placeholder(0), Segment::placeholder(1)])
    }

    #[test]
    fn test_history_is_newest_first_and_bounded() {
        let mut w = wheel("a");
        for i in 0..(HISTORY_LIMIT + 3) {
            w.push_history(Segment::placeholder(i));
        }
        assert_eq!(w.history.len(), HISTORY_LIMIT);
        assert_eq!(w.history[0], Segment::placeholder(HISTORY_LIMIT + 2));
        assert!(!w.history.contains(&Segment::placeholder(2)));
    }

    #[test]
    fn test_map_keeps_insertion_order() {
        let mut map: WheelMap = ["wheel-3", "wheel-1", "wheel-2"].into_iter().map(wheel).collect();
        assert_eq!(map.ids(), vec!["wheel-3", "wheel-1", "wheel-2"]);

        map.remove("wheel-3");
        assert_eq!(map.first().map(|w| w.id.as_str()), Some("wheel-1"));
    }

    #[test]
    fn test_state_json_shape() {
        let state = RegistryState {
            wheels: ["wheel-9", "wheel-1"].into_iter().map(wheel).collect(),
            current_wheel_id: "wheel-1".into(),
        };
        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(json["currentWheelId"], "wheel-1");
        assert_eq!(json["wheels"]["wheel-9"]["id"], "wheel-9");
        assert_eq!(json["wheels"]["wheel-1"]["segments"][0]["emojiSize"], 28);

        let text = serde_json::to_string(&state).unwrap();
        let back: RegistryState = serde_json::from_str(&text).unwrap();
        assert_eq!(back.wheels.ids(), vec!["wheel-9", "wheel-1"]);
        assert_eq!(back, state);
    }

    #[test]
    fn test_key_overrides_inner_id() {
        let text = r##"{"wheels":{"wheel-a":{"id":"stale","segments":[],"rotation":1.5,"history":[]}},
            "currentWheelId":"wheel-a"}"##;
        let state: RegistryState = serde_json::from_str(text).unwrap();
        assert_eq!(state.wheels.get("wheel-a").map(|w| w.rotation), Some(1.5));
    }
}
