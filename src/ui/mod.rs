mod angle_pair;
mod circle;
pub mod layout;
mod menu;
mod quiz;

pub use angle_pair::draw_angle_pairs;
pub use circle::draw_circle_angles;
pub use layout::{calculate_field_chunks, calculate_quiz_chunks, calculate_solver_chunks};
pub use menu::draw_menu;
pub use quiz::{draw_quiz, draw_reset_confirmation};

use crate::models::{App, AppState, FormResult, NumberField};
use crate::utils::truncate_string;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
};

pub fn draw(f: &mut Frame, app: &App) {
    match app.state {
        AppState::Menu => draw_menu(f, app.menu_index),
        AppState::AnglePairs => draw_angle_pairs(f, &app.angle_form),
        AppState::CircleAngles => draw_circle_angles(f, &app.circle_form),
        AppState::Quiz => draw_quiz(f, &app.quiz),
        AppState::QuizResetConfirm => draw_reset_confirmation(f),
    }
}

fn key_style() -> Style {
    Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD)
}

/// `key label  ` pairs for a help bar.
fn help_line(keys: &[(&'static str, &'static str)]) -> Line<'static> {
    let mut spans = Vec::new();
    for (key, label) in keys {
        spans.push(Span::styled(*key, key_style()));
        spans.push(Span::from(format!(" {}  ", label)));
    }
    Line::from(spans)
}

fn draw_header(f: &mut Frame, area: Rect, title: &str) {
    let header = Paragraph::new(title.to_string())
        .style(key_style())
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(header, area);
}

fn draw_help(f: &mut Frame, area: Rect, lines: Vec<Line<'static>>) {
    let help = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, area);
}

/// Selector box showing `◀ label ▶`; long labels are cut to fit between the arrows.
fn draw_selector(f: &mut Frame, area: Rect, title: &str, label: &str) {
    // Two border columns plus the two arrows with their padding.
    let label_width = area.width.saturating_sub(6) as usize;
    let selector = Paragraph::new(Line::from(vec![
        Span::styled("◀ ", key_style()),
        Span::styled(
            truncate_string(label, label_width),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(" ▶", key_style()),
    ]))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL).title(title.to_string()));
    f.render_widget(selector, area);
}

fn draw_number_field(f: &mut Frame, area: Rect, field: &NumberField, focused: bool) {
    let border_style = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let content = if field.buffer.is_empty() {
        Span::styled(
            "[blank = unknown]",
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        )
    } else {
        Span::from(field.buffer.clone())
    };
    let widget = Paragraph::new(Line::from(content)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(field.label),
    );
    f.render_widget(widget, area);

    if focused {
        let cursor_x = area.x + 1 + field.buffer.len() as u16;
        f.set_cursor_position((cursor_x, area.y + 1));
    }
}

fn draw_form_result(f: &mut Frame, area: Rect, result: Option<&FormResult>) {
    let mut text = Text::default();
    let mut title = String::from("Result");
    match result {
        Some(FormResult::Solved(solution)) => {
            title = format!("Result: solved for {}", solution.unknown.label());
            text.push_line(Line::from(Span::styled(
                solution.summary.clone(),
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )));
            text.push_line(Line::from(""));
            text.push_line(Line::from(Span::styled(
                "Step-by-step:",
                Style::default().add_modifier(Modifier::BOLD),
            )));
            for step in &solution.steps {
                text.push_line(Line::from(step.clone()));
            }
        }
        Some(FormResult::Warning(message)) => {
            text.push_line(Line::from(Span::styled(
                message.clone(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )));
        }
        None => {
            text.push_line(Line::from(Span::styled(
                "Press Enter to solve.",
                Style::default().fg(Color::DarkGray),
            )));
        }
    }

    let widget = Paragraph::new(text)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title(title));
    f.render_widget(widget, area);
}
