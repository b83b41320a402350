//! Device input → logical commands
//!
//! Keyboard keys, mouse clicks, touches and on-screen buttons all resolve to
//! the same six logical events. Movement is held-state, jump and restart are
//! edge-triggered. The simulation only ever sees a [`TickInput`].

use std::collections::HashMap;

use glam::Vec2;

use crate::sim::TickInput;

/// Raw input from the host platform.
///
/// Key codes follow the web `KeyboardEvent.code` names ("ArrowLeft", "Space", ...).
/// Mouse buttons and touches are both pointers, distinguished by `id`.
#[derive(Debug, Clone, PartialEq)]
pub enum DeviceEvent {
    KeyDown { code: String, repeat: bool },
    KeyUp { code: String },
    PointerDown { id: u32, pos: Vec2 },
    PointerUp { id: u32 },
}

/// Device-independent input events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogicalEvent {
    MoveLeftDown,
    MoveLeftUp,
    MoveRightDown,
    MoveRightUp,
    JumpPressed,
    RestartPressed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Left,
    Right,
}

impl Direction {
    fn down(self) -> LogicalEvent {
        match self {
            Direction::Left => LogicalEvent::MoveLeftDown,
            Direction::Right => LogicalEvent::MoveRightDown,
        }
    }

    fn up(self) -> LogicalEvent {
        match self {
            Direction::Left => LogicalEvent::MoveLeftUp,
            Direction::Right => LogicalEvent::MoveRightUp,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum KeyAction {
    Move(Direction),
    Jump,
    Restart,
}

fn key_action(code: &str) -> Option<KeyAction> {
    match code {
        "ArrowLeft" | "KeyA" => Some(KeyAction::Move(Direction::Left)),
        "ArrowRight" | "KeyD" => Some(KeyAction::Move(Direction::Right)),
        "Space" | "ArrowUp" | "KeyW" => Some(KeyAction::Jump),
        "KeyR" => Some(KeyAction::Restart),
        _ => None,
    }
}

/// On-screen touch controls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlButton {
    Left,
    Right,
    Jump,
}

/// Circular on-screen buttons: left/right at bottom-left, jump at bottom-right
#[derive(Debug, Clone, PartialEq)]
pub struct ControlLayout {
    buttons: [(ControlButton, Vec2); 3],
    radius: f32,
}

impl ControlLayout {
    const BUTTON_SIZE: f32 = 50.0;
    const MARGIN: f32 = 20.0;

    pub fn new(screen: Vec2) -> Self {
        let radius = Self::BUTTON_SIZE / 2.0;
        let y = screen.y - Self::MARGIN - radius;
        Self {
            buttons: [
                (ControlButton::Left, Vec2::new(Self::MARGIN + radius, y)),
                (ControlButton::Right, Vec2::new(Self::MARGIN + Self::BUTTON_SIZE * 2.0, y)),
                (ControlButton::Jump, Vec2::new(screen.x - Self::MARGIN - radius, y)),
            ],
            radius,
        }
    }

    /// Button centers for drawing
    pub fn buttons(&self) -> impl Iterator<Item = (ControlButton, Vec2)> + '_ {
        self.buttons.iter().copied()
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Button under a screen position, if any
    pub fn hit(&self, pos: Vec2) -> Option<ControlButton> {
        self.buttons
            .iter()
            .find(|(_, center)| center.distance_squared(pos) <= self.radius * self.radius)
            .map(|(button, _)| *button)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum Source {
    Key(String),
    Pointer(u32),
}

/// Merges every device into logical events.
///
/// A direction counts as held while any source (a key or a pointer on a
/// button) holds it; Down/Up events fire only when that aggregate changes.
#[derive(Debug, Clone)]
pub struct InputMapper {
    layout: ControlLayout,
    held: HashMap<Source, Direction>,
}

impl InputMapper {
    pub fn new(layout: ControlLayout) -> Self {
        Self {
            layout,
            held: HashMap::new(),
        }
    }

    pub fn set_layout(&mut self, layout: ControlLayout) {
        self.layout = layout;
    }

    pub fn layout(&self) -> &ControlLayout {
        &self.layout
    }

    /// Translate one device event
    pub fn map(&mut self, event: &DeviceEvent) -> Vec<LogicalEvent> {
        let mapped = match event {
            DeviceEvent::KeyDown { code, repeat } => match key_action(code) {
                Some(KeyAction::Move(dir)) => self.press(Source::Key(code.clone()), dir),
                Some(KeyAction::Jump) if !repeat => Some(LogicalEvent::JumpPressed),
                Some(KeyAction::Restart) if !repeat => Some(LogicalEvent::RestartPressed),
                _ => None,
            },
            DeviceEvent::KeyUp { code } => self.release(&Source::Key(code.clone())),
            DeviceEvent::PointerDown { id, pos } => match self.layout.hit(*pos) {
                Some(ControlButton::Left) => self.press(Source::Pointer(*id), Direction::Left),
                Some(ControlButton::Right) => self.press(Source::Pointer(*id), Direction::Right),
                Some(ControlButton::Jump) => Some(LogicalEvent::JumpPressed),
                // A tap anywhere else restarts after game over
                None => Some(LogicalEvent::RestartPressed),
            },
            DeviceEvent::PointerUp { id } => self.release(&Source::Pointer(*id)),
        };
        mapped.into_iter().collect()
    }

    /// Drop every held source (focus loss, new session)
    pub fn release_all(&mut self) -> Vec<LogicalEvent> {
        let mut events = Vec::new();
        for dir in [Direction::Left, Direction::Right] {
            if self.is_held(dir) {
                events.push(dir.up());
            }
        }
        self.held.clear();
        events
    }

    fn is_held(&self, dir: Direction) -> bool {
        self.held.values().any(|d| *d == dir)
    }

    fn press(&mut self, source: Source, dir: Direction) -> Option<LogicalEvent> {
        let was_held = self.is_held(dir);
        self.held.insert(source, dir);
        (!was_held).then_some(dir.down())
    }

    fn release(&mut self, source: &Source) -> Option<LogicalEvent> {
        let dir = self.held.remove(source)?;
        (!self.is_held(dir)).then_some(dir.up())
    }
}

/// Folds logical events into the per-tick command set.
///
/// One-shot commands stay latched until [`InputState::consume_one_shots`]
/// so a press between frames is never lost.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputState {
    move_left: bool,
    move_right: bool,
    jump: bool,
    restart: bool,
}

impl InputState {
    pub fn apply(&mut self, event: LogicalEvent) {
        match event {
            LogicalEvent::MoveLeftDown => self.move_left = true,
            LogicalEvent::MoveLeftUp => self.move_left = false,
            LogicalEvent::MoveRightDown => self.move_right = true,
            LogicalEvent::MoveRightUp => self.move_right = false,
            LogicalEvent::JumpPressed => self.jump = true,
            LogicalEvent::RestartPressed => self.restart = true,
        }
    }

    pub fn tick_input(&self) -> TickInput {
        TickInput {
            move_left: self.move_left,
            move_right: self.move_right,
            jump: self.jump,
            restart: self.restart,
        }
    }

    /// Clear jump/restart after a tick has seen them
    pub fn consume_one_shots(&mut self) {
        self.jump = false;
        self.restart = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn screen() -> Vec2 {
        Vec2::new(400.0, 300.0)
    }

    fn mapper() -> InputMapper {
        InputMapper::new(ControlLayout::new(screen()))
    }

    fn key_down(code: &str) -> DeviceEvent {
        DeviceEvent::KeyDown {
            code: code.to_string(),
            repeat: false,
        }
    }

    fn key_up(code: &str) -> DeviceEvent {
        DeviceEvent::KeyUp {
            code: code.to_string(),
        }
    }

    fn button_pos(mapper: &InputMapper, which: ControlButton) -> Vec2 {
        mapper
            .layout()
            .buttons()
            .find(|(b, _)| *b == which)
            .map(|(_, pos)| pos)
            .unwrap()
    }

    #[test]
    fn test_layout_positions() {
        let layout = ControlLayout::new(screen());
        let buttons: Vec<_> = layout.buttons().collect();
        assert_eq!(buttons[0], (ControlButton::Left, Vec2::new(45.0, 255.0)));
        assert_eq!(buttons[1], (ControlButton::Right, Vec2::new(120.0, 255.0)));
        assert_eq!(buttons[2], (ControlButton::Jump, Vec2::new(355.0, 255.0)));
        assert_eq!(layout.radius(), 25.0);
        assert_eq!(layout.hit(Vec2::new(45.0 + 25.0, 255.0)), Some(ControlButton::Left));
        assert_eq!(layout.hit(Vec2::new(45.0 + 25.1, 255.0)), None);
        assert_eq!(layout.hit(Vec2::new(50.0, 260.0)), Some(ControlButton::Left));
        assert_eq!(layout.hit(Vec2::new(200.0, 100.0)), None);
    }

    #[test]
    fn test_set_layout_follows_resize() {
        let mut m = mapper();
        let old_jump = button_pos(&m, ControlButton::Jump);
        m.map(&key_down("ArrowLeft"));

        m.set_layout(ControlLayout::new(Vec2::new(800.0, 600.0)));
        let new_jump = button_pos(&m, ControlButton::Jump);
        assert_eq!(new_jump, Vec2::new(755.0, 555.0));

        // The old button spot is now empty screen
        assert_eq!(
            m.map(&DeviceEvent::PointerDown { id: 1, pos: old_jump }),
            vec![LogicalEvent::RestartPressed]
        );
        assert_eq!(
            m.map(&DeviceEvent::PointerDown { id: 2, pos: new_jump }),
            vec![LogicalEvent::JumpPressed]
        );
        // Held keys survive a layout change
        assert_eq!(m.map(&key_up("ArrowLeft")), vec![LogicalEvent::MoveLeftUp]);
    }

    #[test]
    fn test_keyboard_and_touch_resolve_the_same() {
        let mut keys = mapper();
        let mut touch = mapper();
        let left = button_pos(&touch, ControlButton::Left);
        let jump = button_pos(&touch, ControlButton::Jump);

        assert_eq!(keys.map(&key_down("ArrowLeft")), vec![LogicalEvent::MoveLeftDown]);
        assert_eq!(
            touch.map(&DeviceEvent::PointerDown { id: 1, pos: left }),
            vec![LogicalEvent::MoveLeftDown]
        );

        assert_eq!(keys.map(&key_up("ArrowLeft")), vec![LogicalEvent::MoveLeftUp]);
        assert_eq!(
            touch.map(&DeviceEvent::PointerUp { id: 1 }),
            vec![LogicalEvent::MoveLeftUp]
        );

        assert_eq!(keys.map(&key_down("Space")), vec![LogicalEvent::JumpPressed]);
        assert_eq!(
            touch.map(&DeviceEvent::PointerDown { id: 2, pos: jump }),
            vec![LogicalEvent::JumpPressed]
        );
    }

    #[test]
    fn test_direction_held_by_any_source() {
        let mut m = mapper();
        let right = button_pos(&m, ControlButton::Right);

        assert_eq!(m.map(&key_down("ArrowRight")), vec![LogicalEvent::MoveRightDown]);
        // Second source: no new Down
        assert!(m.map(&DeviceEvent::PointerDown { id: 4, pos: right }).is_empty());
        // Releasing one source keeps the direction held
        assert!(m.map(&key_up("ArrowRight")).is_empty());
        assert_eq!(
            m.map(&DeviceEvent::PointerUp { id: 4 }),
            vec![LogicalEvent::MoveRightUp]
        );
    }

    #[test]
    fn test_key_repeat_does_not_rejump() {
        let mut m = mapper();
        assert_eq!(m.map(&key_down("Space")), vec![LogicalEvent::JumpPressed]);
        let repeat = DeviceEvent::KeyDown {
            code: "Space".to_string(),
            repeat: true,
        };
        assert!(m.map(&repeat).is_empty());

        let held = DeviceEvent::KeyDown {
            code: "KeyA".to_string(),
            repeat: false,
        };
        assert_eq!(m.map(&held), vec![LogicalEvent::MoveLeftDown]);
        let held_repeat = DeviceEvent::KeyDown {
            code: "KeyA".to_string(),
            repeat: true,
        };
        assert!(m.map(&held_repeat).is_empty());
    }

    #[test]
    fn test_tap_outside_buttons_restarts() {
        let mut m = mapper();
        assert_eq!(
            m.map(&DeviceEvent::PointerDown {
                id: 0,
                pos: Vec2::new(200.0, 100.0)
            }),
            vec![LogicalEvent::RestartPressed]
        );
        assert!(m.map(&DeviceEvent::PointerUp { id: 0 }).is_empty());
        assert_eq!(m.map(&key_down("KeyR")), vec![LogicalEvent::RestartPressed]);
    }

    #[test]
    fn test_unbound_keys_ignored() {
        let mut m = mapper();
        assert!(m.map(&key_down("KeyQ")).is_empty());
        assert!(m.map(&key_up("KeyQ")).is_empty());
    }

    #[test]
    fn test_release_all() {
        let mut m = mapper();
        m.map(&key_down("ArrowLeft"));
        m.map(&key_down("ArrowRight"));
        let events = m.release_all();
        assert_eq!(events, vec![LogicalEvent::MoveLeftUp, LogicalEvent::MoveRightUp]);
        assert!(m.release_all().is_empty());
    }

    #[test]
    fn test_input_state_latches_one_shots() {
        let mut state = InputState::default();
        state.apply(LogicalEvent::MoveLeftDown);
        state.apply(LogicalEvent::JumpPressed);

        let input = state.tick_input();
        assert!(input.move_left && input.jump && !input.move_right && !input.restart);

        state.consume_one_shots();
        let input = state.tick_input();
        assert!(input.move_left);
        assert!(!input.jump);

        state.apply(LogicalEvent::MoveLeftUp);
        state.apply(LogicalEvent::RestartPressed);
        let input = state.tick_input();
        assert!(!input.move_left);
        assert!(input.restart);
    }
}
