//! Platform abstraction layer
//!
//! Handles device differences for:
//! - Input events (keyboard, mouse, touch, on-screen buttons)

pub mod input;

pub use input::{
    ControlButton, ControlLayout, DeviceEvent, InputMapper, InputState, LogicalEvent,
};
