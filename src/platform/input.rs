//! Keyboard mapping

/// Logical player actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Left,
    Right,
    Jump,
}

impl Action {
    /// Map a `KeyboardEvent.key` value to an action. Unmapped keys are ignored.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" | "a" | "A" => Some(Action::Left),
            "ArrowRight" | "d" | "D" => Some(Action::Right),
            "ArrowUp" | "w" | "W" | " " => Some(Action::Jump),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrow_keys() {
        assert_eq!(Action::from_key("ArrowLeft"), Some(Action::Left));
        assert_eq!(Action::from_key("ArrowRight"), Some(Action::Right));
        assert_eq!(Action::from_key("ArrowUp"), Some(Action::Jump));
    }

    #[test]
    fn test_letter_keys_ignore_case() {
        assert_eq!(Action::from_key("a"), Some(Action::Left));
        assert_eq!(Action::from_key("D"), Some(Action::Right));
        assert_eq!(Action::from_key("w"), Some(Action::Jump));
        assert_eq!(Action::from_key(" "), Some(Action::Jump));
    }

    #[test]
    fn test_unmapped_keys() {
        assert_eq!(Action::from_key("ArrowDown"), None);
        assert_eq!(Action::from_key("Enter"), None);
        assert_eq!(Action::from_key(""), None);
    }
}
