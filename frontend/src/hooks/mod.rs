pub mod use_wheel_session;

pub use use_wheel_session::{use_wheel_session, WheelCommand, WheelScreen, WheelSessionHandle};
