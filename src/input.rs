//! Key bindings for every screen.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::{App, FormScreen, Screen, SolveState};
use crate::form::Field;
use crate::session::Phase;

/// Apply one key press to the app.
pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.quit();
        return;
    }

    match &app.screen {
        Screen::List(_) => handle_list_input(app, key.code),
        Screen::Form(_) => handle_form_input(app, key),
        Screen::Solve(_) => handle_solve_input(app, key.code),
        Screen::History(_) => handle_history_input(app, key.code),
    }
}

/// Navigation shared by the screens that do not take text input.
fn handle_navigation(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Char('1') => app.open_list(),
        KeyCode::Char('2') => app.open_create(),
        KeyCode::Char('3') => app.open_history(),
        KeyCode::Char('q') | KeyCode::Char('Q') => app.quit(),
        _ => {}
    }
}

fn handle_list_input(app: &mut App, key: KeyCode) {
    let confirming = matches!(&app.screen, Screen::List(list) if list.confirm_delete.is_some());
    if confirming {
        match key {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => app.list_confirm_delete(),
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => app.list_cancel_delete(),
            _ => {}
        }
        return;
    }

    match key {
        KeyCode::Up | KeyCode::Char('k') => app.list_move(-1),
        KeyCode::Down | KeyCode::Char('j') => app.list_move(1),
        KeyCode::Char('s') => app.list_cycle_sort(),
        KeyCode::Char('r') => app.open_list(),
        KeyCode::Enter => {
            if let Some(id) = app.selected_quiz_id() {
                app.open_solve(id);
            }
        }
        KeyCode::Char('e') => {
            if let Some(id) = app.selected_quiz_id() {
                app.open_edit(id);
            }
        }
        KeyCode::Char('d') | KeyCode::Delete => app.list_request_delete(),
        KeyCode::Char('c') => app.open_create(),
        other => handle_navigation(app, other),
    }
}

fn handle_form_input(app: &mut App, key: KeyEvent) {
    if key.code == KeyCode::Esc {
        app.open_list();
        return;
    }
    if !matches!(app.screen, Screen::Form(FormScreen::Ready(_))) {
        return;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        if let KeyCode::Char('s') = key.code {
            app.submit_form();
            return;
        }
        let Some(form) = app.form_mut() else {
            return;
        };
        match (key.code, form.focus()) {
            (KeyCode::Char('n'), _) => form.add_question(),
            (KeyCode::Char('a'), _) => {
                if let Some(q) = form.focused_question() {
                    form.add_answer(q);
                }
            }
            (KeyCode::Char('d'), Field::Answer(q, a)) => form.remove_answer(q, a),
            _ => {}
        }
        return;
    }

    let Some(form) = app.form_mut() else {
        return;
    };
    match (key.code, form.focus()) {
        (KeyCode::Tab | KeyCode::Down | KeyCode::Enter, _) => form.focus_next(),
        (KeyCode::BackTab | KeyCode::Up, _) => form.focus_previous(),
        (KeyCode::Left, Field::Correct(q)) => form.shift_correct(q, -1),
        (KeyCode::Right, Field::Correct(q)) => form.shift_correct(q, 1),
        (KeyCode::Backspace, _) => form.backspace(),
        (KeyCode::Char(c), _) => form.insert_char(c),
        _ => {}
    }
}

fn handle_solve_input(app: &mut App, key: KeyCode) {
    let phase = match &app.screen {
        Screen::Solve(solve) => match &solve.state {
            SolveState::Active(session) => Some(session.phase()),
            SolveState::Loading | SolveState::Missing => None,
        },
        _ => return,
    };

    match phase {
        None => match key {
            KeyCode::Esc => app.open_list(),
            other => handle_navigation(app, other),
        },
        Some(Phase::InProgress) => match key {
            KeyCode::Up | KeyCode::Char('k') => app.solve_move(-1),
            KeyCode::Down | KeyCode::Char('j') => app.solve_move(1),
            KeyCode::Enter | KeyCode::Char(' ') => app.solve_answer(),
            KeyCode::Char('f') => app.solve_request_finish(),
            KeyCode::Esc => app.open_list(),
            KeyCode::Char('q') | KeyCode::Char('Q') => app.quit(),
            _ => {}
        },
        Some(Phase::ConfirmingFinish) => match key {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => app.solve_confirm_finish(),
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => app.solve_cancel_finish(),
            _ => {}
        },
        Some(Phase::Finished { .. }) => match key {
            KeyCode::Enter | KeyCode::Esc => app.open_list(),
            KeyCode::Char('h') => app.open_history(),
            other => handle_navigation(app, other),
        },
    }
}

fn handle_history_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Up | KeyCode::Char('k') => app.history_scroll(-1),
        KeyCode::Down | KeyCode::Char('j') => app.history_scroll(1),
        KeyCode::Char('s') => app.history_cycle_sort(),
        KeyCode::Esc => app.open_list(),
        other => handle_navigation(app, other),
    }
}
