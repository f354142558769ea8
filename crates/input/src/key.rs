use serde::{Deserialize, Serialize};

/// A control key tracked by the camera controller.
///
/// Identifiers follow the browser `KeyboardEvent.key` spelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Key {
    W,
    A,
    S,
    D,
    Q,
    E,
    Z,
    C,
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
}

impl Key {
    pub const ALL: [Key; 12] = [
        Key::W,
        Key::A,
        Key::S,
        Key::D,
        Key::Q,
        Key::E,
        Key::Z,
        Key::C,
        Key::ArrowUp,
        Key::ArrowDown,
        Key::ArrowLeft,
        Key::ArrowRight,
    ];

    /// Parse a key identifier. Single letters match case-insensitively.
    pub fn from_id(id: &str) -> Option<Key> {
        let key = match id {
            "w" | "W" => Key::W,
            "a" | "A" => Key::A,
            "s" | "S" => Key::S,
            "d" | "D" => Key::D,
            "q" | "Q" => Key::Q,
            "e" | "E" => Key::E,
            "z" | "Z" => Key::Z,
            "c" | "C" => Key::C,
            "ArrowUp" => Key::ArrowUp,
            "ArrowDown" => Key::ArrowDown,
            "ArrowLeft" => Key::ArrowLeft,
            "ArrowRight" => Key::ArrowRight,
            _ => return None,
        };
        Some(key)
    }

    pub fn id(self) -> &'static str {
        match self {
            Key::W => "w",
            Key::A => "a",
            Key::S => "s",
            Key::D => "d",
            Key::Q => "q",
            Key::E => "e",
            Key::Z => "z",
            Key::C => "c",
            Key::ArrowUp => "ArrowUp",
            Key::ArrowDown => "ArrowDown",
            Key::ArrowLeft => "ArrowLeft",
            Key::ArrowRight => "ArrowRight",
        }
    }
}

impl std::fmt::Display for Key {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

impl std::str::FromStr for Key {
    type Err = UnknownKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Key::from_id(s).ok_or_else(|| UnknownKey(s.to_string()))
    }
}

/// Returned when parsing an identifier that is not a tracked key.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown key identifier: {0:?}")]
pub struct UnknownKey(pub String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_round_trip() {
        for key in Key::ALL {
            assert_eq!(Key::from_id(key.id()), Some(key));
        }
    }

    #[test]
    fn letters_are_case_insensitive() {
        assert_eq!(Key::from_id("W"), Some(Key::W));
        assert_eq!(Key::from_id("q"), Some(Key::Q));
    }

    #[test]
    fn arrow_ids_are_case_sensitive() {
        assert_eq!(Key::from_id("arrowup"), None);
        assert_eq!(Key::from_id("ArrowUp"), Some(Key::ArrowUp));
    }

    #[test]
    fn unknown_ids() {
        assert_eq!(Key::from_id("x"), None);
        assert_eq!(Key::from_id(""), None);
        assert_eq!(Key::from_id("Shift"), None);
        let err = "Escape".parse::<Key>().unwrap_err();
        assert_eq!(err, UnknownKey("Escape".into()));
    }
}
