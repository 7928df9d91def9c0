use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct SolverLayout {
    pub header_area: Rect,
    pub kind_area: Rect,
    pub input_area: Rect,
    pub result_area: Rect,
    pub help_area: Rect,
}

pub struct QuizLayout {
    pub header_area: Rect,
    pub question_area: Rect,
    pub choices_area: Rect,
    pub feedback_area: Rect,
    pub help_area: Rect,
}

/// Splits a solver screen; `input_rows` is the number of number fields shown.
pub fn calculate_solver_chunks(area: Rect, input_rows: u16) -> SolverLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(input_rows * 3),
            Constraint::Min(5),
            Constraint::Length(3),
        ])
        .split(area);

    SolverLayout {
        header_area: chunks[0],
        kind_area: chunks[1],
        input_area: chunks[2],
        result_area: chunks[3],
        help_area: chunks[4],
    }
}

/// One three-row bordered box per number field.
pub fn calculate_field_chunks(area: Rect, fields: usize) -> Vec<Rect> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Length(3); fields])
        .split(area)
        .to_vec()
}

pub fn calculate_quiz_chunks(area: Rect) -> QuizLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(4),
            Constraint::Length(6),
            Constraint::Length(3),
            Constraint::Length(4),
        ])
        .split(area);

    QuizLayout {
        header_area: chunks[0],
        question_area: chunks[1],
        choices_area: chunks[2],
        feedback_area: chunks[3],
        help_area: chunks[4],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solver_layout() {
        let area = Rect::new(0, 0, 100, 40);
        let layout = calculate_solver_chunks(area, 3);

        // Margin 1 leaves 38 rows: 3 + 3 + 9 + 3 fixed, 20 for the result.
        assert_eq!(layout.header_area.height, 3);
        assert_eq!(layout.kind_area.height, 3);
        assert_eq!(layout.input_area.height, 9);
        assert_eq!(layout.help_area.height, 3);
        assert_eq!(layout.result_area.height, 20);
    }

    #[test]
    fn test_field_chunks() {
        let area = Rect::new(0, 0, 50, 9);
        let fields = calculate_field_chunks(area, 3);
        assert_eq!(fields.len(), 3);
        assert!(fields.iter().all(|r| r.height == 3));
        assert_eq!(fields[2].y, 6);
    }

    #[test]
    fn test_quiz_layout() {
        let area = Rect::new(0, 0, 100, 40);
        let layout = calculate_quiz_chunks(area);

        assert_eq!(layout.header_area.height, 3);
        assert_eq!(layout.choices_area.height, 6);
        assert_eq!(layout.feedback_area.height, 3);
        assert_eq!(layout.help_area.height, 4);
        assert_eq!(layout.question_area.height, 38 - 16);
    }
}
