//! Discrete input events delivered once per frame

/// What the player did this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    CharacterTyped(char),
    Backspace,
    Submit,
    /// Leave the current mode; handled by the driver, not the controller
    Exit,
}
