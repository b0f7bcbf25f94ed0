//! Display-free core of the prize wheel: segments, the wheel registry, spin
//! resolution and persistence. The frontend supplies storage and a view.

pub mod clock;
pub mod config;
pub mod constants;
pub mod error;
pub mod persistence;
pub mod registry;
pub mod segment;
pub mod session;
pub mod spin;
pub mod validation;
pub mod view;
pub mod wheel;

pub use crate::error::{Result, WheelError};
pub use crate::persistence::{KeyValueStore, MemoryStore, Theme, WheelStorage};
pub use crate::registry::WheelRegistry;
pub use crate::segment::{Segment, SegmentField};
pub use crate::session::WheelSession;
pub use crate::spin::{SpinEngine, SpinOutcome, SpinPlan, SpinTick};
pub use crate::view::WheelView;
pub use crate::wheel::{RegistryState, Wheel, WheelMap};
