use super::layout::{calculate_field_chunks, calculate_solver_chunks};
use super::{draw_form_result, draw_header, draw_help, draw_number_field, draw_selector, help_line};
use crate::models::CircleForm;
use ratatui::Frame;

pub fn draw_circle_angles(f: &mut Frame, form: &CircleForm) {
    let layout = calculate_solver_chunks(f.area(), form.fields.len() as u16);

    draw_header(
        f,
        layout.header_area,
        "Part 2 — Circle Angles (Tangents & Secants)",
    );
    draw_selector(f, layout.kind_area, "Circle case", form.kind.label());

    let field_areas = calculate_field_chunks(layout.input_area, form.fields.len());
    for (i, (field, area)) in form.fields.iter().zip(field_areas).enumerate() {
        draw_number_field(f, area, field, i == form.focused);
    }

    draw_form_result(f, layout.result_area, form.result.as_ref());
    draw_help(
        f,
        layout.help_area,
        vec![help_line(&[
            ("←/→", "Case"),
            ("Tab/↑/↓", "Field"),
            ("Enter", "Solve"),
            ("Esc", "Menu"),
        ])],
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FormResult;
    use crate::solver::{CircleCaseKind, KnownValues, circle};
    use crate::ui::test_support::render_to_string;

    #[test]
    fn test_draws_case_and_fields() {
        let form = CircleForm::default();
        let screen = render_to_string(100, 30, |f| draw_circle_angles(f, &form));
        assert!(screen.contains("Two Tangents Intersect Outside the Circle"));
        assert!(screen.contains("Arc 1 (far/major arc)"));
        assert!(screen.contains("Arc 2 (near/minor arc)"));
    }

    #[test]
    fn test_draws_interior_solution() {
        let mut form = CircleForm::default();
        form.kind = CircleCaseKind::TwoSecantsInside;
        form.result = Some(FormResult::from(
            circle::solve(form.kind, &KnownValues::from_raw(0.0, 70.0, 50.0)).into_result(),
        ));
        let screen = render_to_string(100, 30, |f| draw_circle_angles(f, &form));
        assert!(screen.contains("Interior angle = ½(70.0 + 50.0) = 60.00°"));
        assert!(screen.contains("Interior angle theorem"));
        assert!(screen.contains("Result: solved for Angle"));
    }

    #[test]
    fn test_narrow_selector_truncates_case_label() {
        let form = CircleForm::default();
        let screen = render_to_string(40, 30, |f| draw_circle_angles(f, &form));
        assert!(screen.contains("◀ Two Tangents Intersect Outsid... ▶"));
        assert!(!screen.contains("the Circle"));
    }
}
