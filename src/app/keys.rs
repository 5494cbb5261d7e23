//! Key bindings.
//!
//! | Key            | Event        |
//! |----------------|--------------|
//! | `Enter`        | `Submit`     |
//! | `Tab`          | `NextField`  |
//! | `Shift+Tab`    | `PrevField`  |
//! | `Ctrl+u`       | `ClearField` |
//! | `Down` / `Up`  | `ScrollDown` / `ScrollUp` |
//! | `Backspace`    | `Backspace`  |
//! | `Esc`          | `Close`      |
//! | any other char | `Char`       |
//!
//! Other `Ctrl` chords and `Alt`+char are left to Zellij.

use super::Event;
use zellij_tile::prelude::{BareKey, KeyModifier, KeyWithModifier};

/// Maps a Zellij key press to an application event.
///
/// Returns `None` for keys the plugin does not handle.
#[must_use]
pub fn map_key(key: &KeyWithModifier) -> Option<Event> {
    tracing::trace!(bare_key = ?key.bare_key, "key event");

    if key.has_modifiers(&[KeyModifier::Ctrl]) {
        return match key.bare_key {
            BareKey::Char('u') => Some(Event::ClearField),
            _ => None,
        };
    }

    let alt = key.has_modifiers(&[KeyModifier::Alt]);
    Some(match key.bare_key {
        BareKey::Enter => Event::Submit,
        BareKey::Esc => Event::Close,
        BareKey::Tab if key.has_modifiers(&[KeyModifier::Shift]) => Event::PrevField,
        BareKey::Tab => Event::NextField,
        BareKey::Down => Event::ScrollDown,
        BareKey::Up => Event::ScrollUp,
        BareKey::Backspace => Event::Backspace,
        BareKey::Char(c) if !alt => Event::Char(c),
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(bare_key: BareKey) -> KeyWithModifier {
        KeyWithModifier::new(bare_key)
    }

    #[test]
    fn test_enter_submits() {
        assert_eq!(map_key(&key(BareKey::Enter)), Some(Event::Submit));
    }

    #[test]
    fn test_tab_cycles_fields() {
        assert_eq!(map_key(&key(BareKey::Tab)), Some(Event::NextField));
        assert_eq!(
            map_key(&key(BareKey::Tab).with_shift_modifier()),
            Some(Event::PrevField)
        );
    }

    #[test]
    fn test_ctrl_u_clears_and_other_chords_pass_through() {
        assert_eq!(
            map_key(&key(BareKey::Char('u')).with_ctrl_modifier()),
            Some(Event::ClearField)
        );
        assert_eq!(map_key(&key(BareKey::Char('c')).with_ctrl_modifier()), None);
        assert_eq!(map_key(&key(BareKey::Enter).with_ctrl_modifier()), None);
    }

    #[test]
    fn test_chars_are_typed_unless_alt_is_held() {
        assert_eq!(map_key(&key(BareKey::Char('u'))), Some(Event::Char('u')));
        assert_eq!(map_key(&key(BareKey::Char('7'))), Some(Event::Char('7')));
        assert_eq!(map_key(&key(BareKey::Char('x')).with_alt_modifier()), None);
    }

    #[test]
    fn test_navigation_keys() {
        assert_eq!(map_key(&key(BareKey::Down)), Some(Event::ScrollDown));
        assert_eq!(map_key(&key(BareKey::Up)), Some(Event::ScrollUp));
        assert_eq!(map_key(&key(BareKey::Backspace)), Some(Event::Backspace));
        assert_eq!(map_key(&key(BareKey::Esc)), Some(Event::Close));
        assert_eq!(map_key(&key(BareKey::Left)), None);
    }
}
