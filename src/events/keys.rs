/// What a key press asks the tower view to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    ToggleRotation,
    ResetAngle,
    ClearSelection,
}

#[inline]
pub fn action_for_key(key: &str) -> Option<KeyAction> {
    match key {
        " " | "Spacebar" => Some(KeyAction::ToggleRotation),
        "r" | "R" => Some(KeyAction::ResetAngle),
        "Escape" => Some(KeyAction::ClearSelection),
        _ => None,
    }
}
