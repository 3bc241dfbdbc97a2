//! Input handling for the game screen.
//!
//! Terminal events are mapped to UI-agnostic [`FlappyInput`] actions, and a
//! frame's worth of actions is folded into a single [`FrameInput`] before the
//! engine sees it. The engine only ever receives "impulse requested: yes/no".

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent, MouseEventKind,
};

/// Input actions for the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlappyInput {
    /// Flap (Space, Up, Enter, `w`, `k`, or a mouse button press).
    Flap,
    /// Quit the game (Esc, `q`, Ctrl+C).
    Quit,
    /// Anything else.
    Other,
}

/// Map a key event to a game action. Only key presses count.
pub fn map_key(key: KeyEvent) -> FlappyInput {
    if key.kind != KeyEventKind::Press {
        return FlappyInput::Other;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') | KeyCode::Char('C') => FlappyInput::Quit,
            _ => FlappyInput::Other,
        };
    }

    match key.code {
        KeyCode::Char(' ') | KeyCode::Up | KeyCode::Enter => FlappyInput::Flap,
        KeyCode::Char('w') | KeyCode::Char('W') | KeyCode::Char('k') | KeyCode::Char('K') => {
            FlappyInput::Flap
        }
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => FlappyInput::Quit,
        _ => FlappyInput::Other,
    }
}

/// Map a mouse event to a game action. Any button press flaps.
pub fn map_mouse(mouse: MouseEvent) -> FlappyInput {
    match mouse.kind {
        MouseEventKind::Down(_) => FlappyInput::Flap,
        _ => FlappyInput::Other,
    }
}

/// Map any terminal event to a game action.
pub fn map_event(event: &Event) -> FlappyInput {
    match event {
        Event::Key(key) => map_key(*key),
        Event::Mouse(mouse) => map_mouse(*mouse),
        _ => FlappyInput::Other,
    }
}

/// Inputs gathered during one frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameInput {
    pub impulse_requested: bool,
    pub quit_requested: bool,
}

impl FrameInput {
    /// Record one action. Several flaps in a frame collapse into one impulse.
    pub fn push(&mut self, input: FlappyInput) {
        match input {
            FlappyInput::Flap => self.impulse_requested = true,
            FlappyInput::Quit => self.quit_requested = true,
            FlappyInput::Other => {}
        }
    }

    pub fn collect<I: IntoIterator<Item = FlappyInput>>(inputs: I) -> Self {
        let mut frame = Self::default();
        for input in inputs {
            frame.push(input);
        }
        frame
    }

    /// Hand the pending impulse to the caller, leaving none behind.
    pub fn take_impulse(&mut self) -> bool {
        std::mem::take(&mut self.impulse_requested)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventState, MouseButton};

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn mouse(kind: MouseEventKind) -> MouseEvent {
        MouseEvent {
            kind,
            column: 3,
            row: 4,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_flap_keys() {
        for code in [
            KeyCode::Char(' '),
            KeyCode::Up,
            KeyCode::Enter,
            KeyCode::Char('w'),
            KeyCode::Char('k'),
        ] {
            assert_eq!(map_key(press(code)), FlappyInput::Flap, "{:?}", code);
        }
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(map_key(press(KeyCode::Esc)), FlappyInput::Quit);
        assert_eq!(map_key(press(KeyCode::Char('q'))), FlappyInput::Quit);
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(map_key(ctrl_c), FlappyInput::Quit);
    }

    #[test]
    fn test_other_keys() {
        assert_eq!(map_key(press(KeyCode::Char('x'))), FlappyInput::Other);
        assert_eq!(map_key(press(KeyCode::Left)), FlappyInput::Other);
        let ctrl_w = KeyEvent::new(KeyCode::Char('w'), KeyModifiers::CONTROL);
        assert_eq!(map_key(ctrl_w), FlappyInput::Other);
    }

    #[test]
    fn test_key_release_ignored() {
        let release = KeyEvent {
            code: KeyCode::Char(' '),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(map_key(release), FlappyInput::Other);
    }

    #[test]
    fn test_mouse_press_flaps() {
        assert_eq!(
            map_mouse(mouse(MouseEventKind::Down(MouseButton::Left))),
            FlappyInput::Flap
        );
        assert_eq!(
            map_mouse(mouse(MouseEventKind::Down(MouseButton::Right))),
            FlappyInput::Flap
        );
        assert_eq!(map_mouse(mouse(MouseEventKind::Moved)), FlappyInput::Other);
        assert_eq!(
            map_mouse(mouse(MouseEventKind::Up(MouseButton::Left))),
            FlappyInput::Other
        );
    }

    #[test]
    fn test_map_event() {
        assert_eq!(
            map_event(&Event::Key(press(KeyCode::Char(' ')))),
            FlappyInput::Flap
        );
        assert_eq!(map_event(&Event::Resize(80, 24)), FlappyInput::Other);
        assert_eq!(map_event(&Event::FocusLost), FlappyInput::Other);
    }

    #[test]
    fn test_frame_input_collects() {
        let frame = FrameInput::collect([FlappyInput::Other, FlappyInput::Flap, FlappyInput::Flap]);
        assert!(frame.impulse_requested);
        assert!(!frame.quit_requested);

        let frame = FrameInput::collect([FlappyInput::Quit]);
        assert!(frame.quit_requested);
        assert!(!frame.impulse_requested);
    }

    #[test]
    fn test_take_impulse_consumes() {
        let mut frame = FrameInput::collect([FlappyInput::Flap]);
        assert!(frame.take_impulse());
        assert!(!frame.take_impulse());
    }
}
