use crate::logger;
use crate::models::{App, AppState, FormResult, MenuItem};
use crate::quiz::{CHOICES_PER_QUESTION, QuestionState};
use crate::solver::{angle_pair, circle};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.should_quit = true;
        return;
    }

    match app.state {
        AppState::Menu => handle_menu_input(app, key),
        AppState::AnglePairs => handle_angle_pair_input(app, key),
        AppState::CircleAngles => handle_circle_input(app, key),
        AppState::Quiz => handle_quiz_input(app, key),
        AppState::QuizResetConfirm => handle_reset_confirm_input(app, key),
    }
}

fn switch_to(app: &mut App, state: AppState) {
    logger::log(&format!("screen {:?} -> {:?}", app.state, state));
    app.state = state;
}

pub fn handle_menu_input(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => {
            app.menu_index = app.menu_index.saturating_sub(1);
        }
        KeyCode::Down | KeyCode::Char('j') => {
            if app.menu_index < MenuItem::ALL.len() - 1 {
                app.menu_index += 1;
            }
        }
        KeyCode::Enter => {
            let target = MenuItem::ALL[app.menu_index].target();
            switch_to(app, target);
        }
        KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
        _ => {}
    }
}

pub fn handle_angle_pair_input(app: &mut App, key: KeyEvent) {
    let form = &mut app.angle_form;
    match key.code {
        KeyCode::Esc => switch_to(app, AppState::Menu),
        KeyCode::Left => {
            form.kind = form.kind.previous();
            form.result = None;
        }
        KeyCode::Right => {
            form.kind = form.kind.next();
            form.result = None;
        }
        KeyCode::Backspace => form.angle1.pop(),
        KeyCode::Char(c) => form.angle1.push(c),
        KeyCode::Enter => {
            let result = match form.angle1.value() {
                Ok(angle1) => FormResult::from(angle_pair::solve(form.kind, angle1)),
                Err(e) => FormResult::Warning(e.to_string()),
            };
            logger::log(&format!(
                "angle pair {:?} with '{}': {:?}",
                form.kind, form.angle1.buffer, result
            ));
            form.result = Some(result);
        }
        _ => {}
    }
}

pub fn handle_circle_input(app: &mut App, key: KeyEvent) {
    let form = &mut app.circle_form;
    match key.code {
        KeyCode::Esc => switch_to(app, AppState::Menu),
        KeyCode::Left => {
            form.kind = form.kind.previous();
            form.result = None;
        }
        KeyCode::Right => {
            form.kind = form.kind.next();
            form.result = None;
        }
        KeyCode::Tab | KeyCode::Down => form.focus_next(),
        KeyCode::BackTab | KeyCode::Up => form.focus_previous(),
        KeyCode::Backspace => form.focused_field().pop(),
        KeyCode::Char(c) => form.focused_field().push(c),
        KeyCode::Enter => {
            let result = match form.known_values() {
                Ok(values) => {
                    let outcome = circle::solve(form.kind, &values);
                    logger::log(&format!(
                        "circle {:?} solved: {}",
                        form.kind,
                        outcome.is_solved()
                    ));
                    FormResult::from(outcome.into_result())
                }
                Err(e) => FormResult::Warning(e.to_string()),
            };
            logger::log(&format!("circle {:?}: {:?}", form.kind, result));
            form.result = Some(result);
        }
        _ => {}
    }
}

fn go_to_question(app: &mut App, index: usize) {
    let quiz = &mut app.quiz;
    quiz.current_index = index;
    quiz.last_error = None;
    quiz.selected_choice = match quiz.session.state(index) {
        QuestionState::Answered(record) => record.selected,
        QuestionState::Unanswered => 0,
    };
}

pub fn handle_quiz_input(app: &mut App, key: KeyEvent) {
    let total = app.quiz.session.questions().len();
    let current = app.quiz.current_index;
    let locked = matches!(
        app.quiz.session.state(current),
        QuestionState::Answered(_)
    );

    match key.code {
        KeyCode::Esc => switch_to(app, AppState::Menu),
        KeyCode::Char('r') => switch_to(app, AppState::QuizResetConfirm),
        KeyCode::Right | KeyCode::Char('n') => {
            if current < total.saturating_sub(1) {
                go_to_question(app, current + 1);
            }
        }
        KeyCode::Left | KeyCode::Char('p') => {
            if current > 0 {
                go_to_question(app, current - 1);
            }
        }
        KeyCode::Up | KeyCode::Char('k') if !locked => {
            app.quiz.selected_choice = app.quiz.selected_choice.saturating_sub(1);
        }
        KeyCode::Down | KeyCode::Char('j') if !locked => {
            if app.quiz.selected_choice < CHOICES_PER_QUESTION - 1 {
                app.quiz.selected_choice += 1;
            }
        }
        KeyCode::Enter if locked => {
            if current < total.saturating_sub(1) {
                go_to_question(app, current + 1);
            }
        }
        KeyCode::Enter => {
            let selected = app.quiz.selected_choice;
            match app.quiz.session.submit(current, selected) {
                Ok(record) => {
                    let (score, total) = app.quiz.session.current_score();
                    logger::log(&format!(
                        "question {} answered with choice {} (correct: {}), score {}/{}",
                        current + 1,
                        selected,
                        record.correct,
                        score,
                        total
                    ));
                    app.quiz.last_error = None;
                }
                Err(e) => {
                    logger::log(&format!("submit rejected: {}", e));
                    app.quiz.last_error = Some(e.to_string());
                }
            }
        }
        _ => {}
    }
}

pub fn handle_reset_confirm_input(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('y') => {
            app.quiz.session.reset();
            go_to_question(app, 0);
            logger::log("assessment reset");
            switch_to(app, AppState::Quiz);
        }
        KeyCode::Char('n') | KeyCode::Esc => switch_to(app, AppState::Quiz),
        _ => {}
    }
}
