use super::{draw_header, draw_help, help_line};
use crate::models::MenuItem;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
};

const INTRO: &str = "Solve angle-pair problems and circle-secant/tangent angle problems. \
Includes a short assessment with scoring.";

pub fn draw_menu(f: &mut Frame, selected_index: usize) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(4),
            Constraint::Min(5),
            Constraint::Length(3),
        ])
        .split(f.area());

    draw_header(f, chunks[0], "📐 Angu-Lator");

    let intro = Paragraph::new(INTRO)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(intro, chunks[1]);

    let items: Vec<ListItem> = MenuItem::ALL
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let style = if i == selected_index {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(item.label()).style(style)
        })
        .collect();

    let list = List::new(items).block(Block::default().borders(Borders::ALL).title("Sections"));
    f.render_widget(list, chunks[2]);

    draw_help(
        f,
        chunks[3],
        vec![help_line(&[
            ("↑/↓", "Navigate"),
            ("Enter", "Open"),
            ("q/Esc", "Quit"),
        ])],
    );
}
