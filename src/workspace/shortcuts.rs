//! Global keyboard shortcuts.
//!
//! Ctrl+S / Cmd+S saves, Ctrl+N / Cmd+N creates a note. A UI that recognises
//! a shortcut must swallow the key event so the platform default never runs.

/// A key press with its modifier state, independent of any UI toolkit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyChord {
    pub key: char,
    pub ctrl: bool,
    /// Cmd on macOS, Super/Windows elsewhere
    pub meta: bool,
}

impl KeyChord {
    pub fn new(key: char, ctrl: bool, meta: bool) -> Self {
        Self { key, ctrl, meta }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    Save,
    NewNote,
}

impl Shortcut {
    pub fn from_chord(chord: KeyChord) -> Option<Self> {
        if !(chord.ctrl || chord.meta) {
            return None;
        }
        match chord.key.to_ascii_lowercase() {
            's' => Some(Shortcut::Save),
            'n' => Some(Shortcut::NewNote),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ctrl_and_cmd_both_bind() {
        assert_eq!(Shortcut::from_chord(KeyChord::new('s', true, false)), Some(Shortcut::Save));
        assert_eq!(Shortcut::from_chord(KeyChord::new('S', false, true)), Some(Shortcut::Save));
        assert_eq!(Shortcut::from_chord(KeyChord::new('n', true, false)), Some(Shortcut::NewNote));
    }

    #[test]
    fn test_plain_keys_pass_through() {
        assert_eq!(Shortcut::from_chord(KeyChord::new('s', false, false)), None);
        assert_eq!(Shortcut::from_chord(KeyChord::new('x', true, false)), None);
    }
}
