use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::state::*;
use crate::portal::draft::DraftField;
use crate::portal::router::Section;
use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Instant;

pub fn handle_event(state: &mut AppState, event: AppEvent) -> Vec<Action> {
    match event {
        AppEvent::Terminal(cevent) => handle_terminal(state, cevent),
        AppEvent::Tick => {
            state.expire_status(Instant::now());
            vec![]
        }
    }
}

fn handle_terminal(state: &mut AppState, event: CEvent) -> Vec<Action> {
    match event {
        // Windows reports releases too; act on presses only.
        CEvent::Key(key) if key.kind != KeyEventKind::Release => {
            state.dirty = true;
            handle_key(state, key)
        }
        CEvent::Resize(_, _) => {
            state.dirty = true;
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return vec![Action::Quit];
    }

    // Composer captures all input while visible
    if state.news.is_composer_open() {
        return handle_composer_key(state, key);
    }

    match key.code {
        KeyCode::Char('q') => return vec![Action::Quit],
        KeyCode::Char(c @ '1'..='5') => {
            let index = c as usize - '1' as usize;
            if let Some(section) = Section::from_index(index) {
                state.select_section(section);
            }
            return vec![];
        }
        KeyCode::Tab | KeyCode::Right => {
            state.select_next_section();
            return vec![];
        }
        KeyCode::BackTab | KeyCode::Left => {
            state.select_prev_section();
            return vec![];
        }
        _ => {}
    }

    match state.current_section() {
        Section::News => handle_news_key(state, key),
        _ => vec![],
    }
}

fn handle_news_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    match key.code {
        KeyCode::Char('n') | KeyCode::Char('+') => state.open_composer(),
        KeyCode::Up | KeyCode::Char('k') => state.select_prev_news(),
        KeyCode::Down | KeyCode::Char('j') => state.select_next_news(),
        KeyCode::Char('d') | KeyCode::Delete => {
            state.delete_selected_news();
        }
        _ => {}
    }
    vec![]
}

fn handle_composer_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Esc => state.close_composer(),
        KeyCode::Tab => state.focus_next_field(),
        KeyCode::BackTab => state.focus_prev_field(),
        KeyCode::Char('s') if ctrl => return submit(state),
        KeyCode::Enter => match state.composer_field {
            DraftField::Title => state.focus_next_field(),
            DraftField::Content => state.active_field_mut().insert_char('\n'),
            DraftField::Author => return submit(state),
        },
        KeyCode::Backspace => {
            if key.modifiers.contains(KeyModifiers::ALT) {
                state.active_field_mut().delete_word_back();
            } else {
                state.active_field_mut().delete_back();
            }
        }
        KeyCode::Delete => state.active_field_mut().delete_forward(),
        KeyCode::Left => state.active_field_mut().move_left(),
        KeyCode::Right => state.active_field_mut().move_right(),
        KeyCode::Home => state.active_field_mut().move_home(),
        KeyCode::End => state.active_field_mut().move_end(),
        // Alt chords are unbound; don't type their letter
        KeyCode::Char(_) if key.modifiers.contains(KeyModifiers::ALT) => {}
        KeyCode::Char(c) => {
            let field = state.active_field_mut();
            if ctrl {
                match c {
                    'a' => field.move_home(),
                    'e' => field.move_end(),
                    'w' => field.delete_word_back(),
                    'u' => field.clear(),
                    _ => {}
                }
            } else {
                field.insert_char(c);
            }
        }
        _ => {}
    }
    vec![]
}

fn submit(state: &mut AppState) -> Vec<Action> {
    match state.submit_draft() {
        Ok(_) => vec![],
        Err(_) if state.config.behavior.bell_on_rejected_draft => vec![Action::Bell],
        Err(_) => vec![],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use chrono::Utc;

    fn state() -> AppState {
        AppState::new(AppConfig::default())
    }

    fn press(state: &mut AppState, code: KeyCode) -> Vec<Action> {
        press_with(state, code, KeyModifiers::NONE)
    }

    fn press_with(state: &mut AppState, code: KeyCode, modifiers: KeyModifiers) -> Vec<Action> {
        let event = AppEvent::Terminal(CEvent::Key(KeyEvent::new(code, modifiers)));
        handle_event(state, event)
    }

    fn type_text(state: &mut AppState, text: &str) {
        for c in text.chars() {
            if c == '\n' {
                press(state, KeyCode::Enter);
            } else {
                press(state, KeyCode::Char(c));
            }
        }
    }

    #[test]
    fn test_digits_select_sections() {
        let mut s = state();
        for (digit, section) in ['1', '2', '3', '4', '5'].into_iter().zip(Section::ALL) {
            press(&mut s, KeyCode::Char(digit));
            assert_eq!(s.current_section(), section);
        }
        press(&mut s, KeyCode::Char('6'));
        assert_eq!(s.current_section(), Section::Contacts);
    }

    #[test]
    fn test_tab_cycles_sections() {
        let mut s = state();
        press(&mut s, KeyCode::Tab);
        assert_eq!(s.current_section(), Section::News);
        press(&mut s, KeyCode::BackTab);
        press(&mut s, KeyCode::BackTab);
        assert_eq!(s.current_section(), Section::Contacts);
    }

    #[test]
    fn test_quit_keys() {
        let mut s = state();
        assert_eq!(press(&mut s, KeyCode::Char('q')), vec![Action::Quit]);
        assert_eq!(
            press_with(&mut s, KeyCode::Char('c'), KeyModifiers::CONTROL),
            vec![Action::Quit]
        );
    }

    #[test]
    fn test_composer_only_opens_from_news() {
        let mut s = state();
        press(&mut s, KeyCode::Char('n'));
        assert!(!s.news.is_composer_open());
        press(&mut s, KeyCode::Char('2'));
        press(&mut s, KeyCode::Char('n'));
        assert!(s.news.is_composer_open());
    }

    #[test]
    fn test_composer_captures_navigation_keys() {
        let mut s = state();
        press(&mut s, KeyCode::Char('2'));
        press(&mut s, KeyCode::Char('n'));
        type_text(&mut s, "q1");
        assert_eq!(s.current_section(), Section::News);
        assert!(!s.should_quit);
        assert_eq!(s.news.draft.title.text, "q1");
    }

    #[test]
    fn test_compose_and_publish_via_keys() {
        let mut s = state();
        press(&mut s, KeyCode::Char('2'));
        press(&mut s, KeyCode::Char('n'));
        type_text(&mut s, "Отпуск\nЕздили\nна море");
        press(&mut s, KeyCode::Tab);
        type_text(&mut s, "Иван");
        press(&mut s, KeyCode::Enter);

        assert!(!s.news.is_composer_open());
        assert_eq!(s.news.len(), 3);
        let first = &s.news.items()[0];
        assert_eq!(first.title, "Отпуск");
        assert_eq!(first.content, "Ездили\nна море");
        assert_eq!(first.author, "Иван");
        assert_eq!(first.date, Utc::now().date_naive());
        assert!(s.news.draft.title.is_empty());
    }

    #[test]
    fn test_incomplete_submit_is_noop() {
        let mut s = state();
        press(&mut s, KeyCode::Char('2'));
        press(&mut s, KeyCode::Char('n'));
        type_text(&mut s, "Заголовок");
        let actions = press_with(&mut s, KeyCode::Char('s'), KeyModifiers::CONTROL);

        assert!(actions.is_empty());
        assert!(s.news.is_composer_open());
        assert_eq!(s.news.len(), 2);
    }

    #[test]
    fn test_bell_on_rejected_draft_when_enabled() {
        let mut config = AppConfig::default();
        config.behavior.bell_on_rejected_draft = true;
        let mut s = AppState::new(config);
        press(&mut s, KeyCode::Char('2'));
        press(&mut s, KeyCode::Char('n'));
        let actions = press_with(&mut s, KeyCode::Char('s'), KeyModifiers::CONTROL);
        assert_eq!(actions, vec![Action::Bell]);
    }

    #[test]
    fn test_escape_keeps_draft() {
        let mut s = state();
        press(&mut s, KeyCode::Char('2'));
        press(&mut s, KeyCode::Char('n'));
        type_text(&mut s, "Черновик");
        press(&mut s, KeyCode::Esc);
        assert!(!s.news.is_composer_open());

        press(&mut s, KeyCode::Char('n'));
        assert_eq!(s.news.draft.title.text, "Черновик");
    }

    #[test]
    fn test_alt_chords_do_not_type() {
        let mut s = state();
        press(&mut s, KeyCode::Char('2'));
        press(&mut s, KeyCode::Char('n'));
        type_text(&mut s, "Дача");
        press_with(&mut s, KeyCode::Char('x'), KeyModifiers::ALT);
        press_with(&mut s, KeyCode::Char('b'), KeyModifiers::ALT);
        assert_eq!(s.news.draft.title.text, "Дача");

        press_with(&mut s, KeyCode::Backspace, KeyModifiers::ALT);
        assert!(s.news.draft.title.is_empty());
    }

    #[test]
    fn test_delete_highlighted_news() {
        let mut s = state();
        press(&mut s, KeyCode::Char('2'));
        press(&mut s, KeyCode::Down);
        press(&mut s, KeyCode::Char('d'));
        let ids: Vec<_> = s.news.items().iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![1]);
    }

    #[test]
    fn test_delete_key_ignored_outside_news() {
        let mut s = state();
        press(&mut s, KeyCode::Char('d'));
        assert_eq!(s.news.len(), 2);
    }

    #[test]
    fn test_add_then_delete_round_trip() {
        let mut s = state();
        press(&mut s, KeyCode::Char('2'));
        press(&mut s, KeyCode::Char('n'));
        type_text(&mut s, "Отпуск\n");
        type_text(&mut s, "Ездили на море");
        press(&mut s, KeyCode::Tab);
        type_text(&mut s, "Иван");
        press_with(&mut s, KeyCode::Char('s'), KeyModifiers::CONTROL);
        assert_eq!(s.news.len(), 3);
        assert_eq!(s.news.items()[0].title, "Отпуск");

        press(&mut s, KeyCode::Char('d'));
        let ids: Vec<_> = s.news.items().iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }
}
