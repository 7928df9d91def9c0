use super::layout::calculate_quiz_chunks;
use super::{draw_header, draw_help, help_line, key_style};
use crate::models::QuizView;
use crate::quiz::QuestionState;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
};

pub fn draw_quiz(f: &mut Frame, view: &QuizView) {
    let layout = calculate_quiz_chunks(f.area());
    let session = &view.session;
    let (score, total) = session.current_score();

    let header = format!(
        "🧠 Assessment — Question {} / {} — Your current score: {} / {}",
        view.current_index + 1,
        total,
        score,
        total
    );
    draw_header(f, layout.header_area, &header);

    let Some(question) = session.question(view.current_index) else {
        return;
    };

    let question_text = Text::from(Line::from(vec![
        Span::styled(
            format!("Q{}. ", view.current_index + 1),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::from(question.prompt.as_str()),
    ]));
    let prompt = Paragraph::new(question_text)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title("Question"));
    f.render_widget(prompt, layout.question_area);

    let state = session.state(view.current_index);
    let items: Vec<ListItem> = question
        .choices
        .iter()
        .enumerate()
        .map(|(i, choice)| {
            let marker = if i == view.selected_choice { "(•)" } else { "( )" };
            let style = match state {
                QuestionState::Answered(_) if i == question.answer => {
                    Style::default().fg(Color::Green)
                }
                QuestionState::Answered(record) if i == record.selected => {
                    Style::default().fg(Color::Red)
                }
                QuestionState::Answered(_) => Style::default().fg(Color::DarkGray),
                QuestionState::Unanswered if i == view.selected_choice => Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
                QuestionState::Unanswered => Style::default(),
            };
            ListItem::new(format!("{} {}", marker, choice)).style(style)
        })
        .collect();
    let choices = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Choose an answer:"),
    );
    f.render_widget(choices, layout.choices_area);

    let feedback = if let Some(error) = &view.last_error {
        Line::from(Span::styled(
            error.clone(),
            Style::default().fg(Color::Yellow),
        ))
    } else {
        match state {
            QuestionState::Answered(record) if record.correct => Line::from(Span::styled(
                format!(
                    "You answered: {} — Correct ✅",
                    question.choices[record.selected]
                ),
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )),
            QuestionState::Answered(record) => Line::from(Span::styled(
                format!(
                    "You answered: {} — Incorrect ❌ (Correct: {})",
                    question.choices[record.selected],
                    question.correct_choice()
                ),
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )),
            QuestionState::Unanswered => Line::from(Span::styled(
                "Not answered yet",
                Style::default().fg(Color::DarkGray),
            )),
        }
    };
    let feedback = Paragraph::new(feedback).block(Block::default().borders(Borders::ALL));
    f.render_widget(feedback, layout.feedback_area);

    let first_line = if matches!(state, QuestionState::Answered(_)) {
        help_line(&[("←/→", "Question"), ("Enter", "Next")])
    } else {
        help_line(&[
            ("↑/↓", "Choose"),
            ("Enter", "Submit Answer"),
            ("←/→", "Question"),
        ])
    };
    let mut progress = help_line(&[("r", "Reset Assessment"), ("Esc", "Menu")]);
    progress.spans.push(Span::styled(
        format!("Answered: {} / {}  ", session.answered_count(), total),
        Style::default().fg(Color::DarkGray),
    ));
    if session.is_complete() {
        progress.spans.push(Span::styled(
            format!("Finished: {} / {}", score, total),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ));
    }
    draw_help(f, layout.help_area, vec![first_line, progress]);
}

pub fn draw_reset_confirmation(f: &mut Frame) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(5)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(5),
            Constraint::Length(3),
        ])
        .split(f.area());

    let title = Paragraph::new("Reset Assessment")
        .style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, chunks[0]);

    let message = Paragraph::new("Clear score and answers?")
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(message, chunks[1]);

    let help_text = vec![Line::from(vec![
        Span::styled(
            "y",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Yes (Reset)  "),
        Span::styled(
            "n",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        Span::from(" No (Keep Answers)  "),
        Span::styled("Ctrl+C", key_style()),
        Span::from(" Exit App"),
    ])];
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, chunks[2]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::{QuestionBank, QuizSession};
    use crate::ui::test_support::render_to_string;
    use std::sync::Arc;

    fn create_test_view() -> QuizView {
        QuizView::new(QuizSession::new(Arc::new(
            QuestionBank::embedded().unwrap(),
        )))
    }

    #[test]
    fn test_draws_unanswered_question() {
        let view = create_test_view();
        let screen = render_to_string(120, 30, |f| draw_quiz(f, &view));
        assert!(screen.contains("Your current score: 0 / 6"));
        assert!(screen.contains("supplementary and one is 110°"));
        assert!(screen.contains("(•) 70°"));
        assert!(screen.contains("Not answered yet"));
        assert!(screen.contains("Answered: 0 / 6"));
    }

    #[test]
    fn test_draws_correct_answer_feedback() {
        let mut view = create_test_view();
        view.session.submit(0, 0).unwrap();
        let screen = render_to_string(120, 30, |f| draw_quiz(f, &view));
        assert!(screen.contains("Your current score: 1 / 6"));
        assert!(screen.contains("You answered: 70° — Correct"));
        assert!(screen.contains("Answered: 1 / 6"));
    }

    #[test]
    fn test_draws_incorrect_answer_feedback() {
        let mut view = create_test_view();
        view.current_index = 1;
        view.selected_choice = 2;
        view.session.submit(1, 2).unwrap();
        let screen = render_to_string(120, 30, |f| draw_quiz(f, &view));
        assert!(screen.contains("You answered: 120° — Incorrect"));
        assert!(screen.contains("(Correct: 60°)"));
    }

    #[test]
    fn test_draws_reset_confirmation() {
        let screen = render_to_string(80, 24, draw_reset_confirmation);
        assert!(screen.contains("Reset Assessment"));
        assert!(screen.contains("Clear score and answers?"));
    }
}
