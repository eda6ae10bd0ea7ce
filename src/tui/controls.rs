//! Keyboard input handling for the dashboard.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::runtime::App;

/// Maps a key event to a boundary action.
///
/// Guards on [`KeyEventKind::Press`] to avoid double-fire on some terminals.
pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.shutdown(),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => app.shutdown(),
        KeyCode::Char(' ' | 'c') => app.flags.toggle_charging(),
        KeyCode::Char('d') => app.flags.toggle_details(),
        KeyCode::Char(']') | KeyCode::Right => {
            let next = app.flags.selected_region.next();
            app.flags.select_region(next);
        }
        KeyCode::Char('[') | KeyCode::Left => {
            let prev = app.flags.selected_region.prev();
            app.flags.select_region(prev);
        }
        KeyCode::Char('s') => app.flags.open_settings(),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DashConfig;
    use crate::view::Region;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn keys_drive_flags() {
        let mut app = App::new(&DashConfig::standard());
        handle_key(&mut app, press(KeyCode::Char(' ')));
        assert!(!app.flags.is_charging);
        handle_key(&mut app, press(KeyCode::Char('d')));
        assert!(app.flags.show_details);
        handle_key(&mut app, press(KeyCode::Right));
        assert_eq!(app.flags.selected_region, Region::Europe);
        handle_key(&mut app, press(KeyCode::Char('[')));
        handle_key(&mut app, press(KeyCode::Char('[')));
        assert_eq!(app.flags.selected_region, Region::Africa);
        assert!(!app.quit);
    }

    #[test]
    fn ctrl_c_quits_but_plain_c_toggles() {
        let mut app = App::new(&DashConfig::standard());
        handle_key(&mut app, press(KeyCode::Char('c')));
        assert!(!app.flags.is_charging);
        assert!(!app.quit);
        handle_key(
            &mut app,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        );
        assert!(app.quit);
    }

    #[test]
    fn settings_key_changes_nothing() {
        let mut app = App::new(&DashConfig::standard());
        let before = app.flags;
        handle_key(&mut app, press(KeyCode::Char('s')));
        assert_eq!(app.flags, before);
        assert!(!app.quit);
    }
}
