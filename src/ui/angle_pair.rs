use super::layout::calculate_solver_chunks;
use super::{draw_form_result, draw_header, draw_help, draw_number_field, draw_selector, help_line};
use crate::models::AnglePairForm;
use ratatui::Frame;

pub fn draw_angle_pairs(f: &mut Frame, form: &AnglePairForm) {
    let layout = calculate_solver_chunks(f.area(), 1);

    draw_header(f, layout.header_area, "Part 1 — Angle Pairs (Two Angles)");
    draw_selector(f, layout.kind_area, "Angle type", form.kind.label());
    draw_number_field(f, layout.input_area, &form.angle1, true);
    draw_form_result(f, layout.result_area, form.result.as_ref());
    draw_help(
        f,
        layout.help_area,
        vec![help_line(&[
            ("←/→", "Angle type"),
            ("Enter", "Solve"),
            ("Esc", "Menu"),
        ])],
    );
}
