use crate::error::{InputError, SolveError};
use crate::quiz::{QuestionBank, QuizSession};
use crate::solver::{AnglePairKind, CircleCaseKind, KnownValues, Solution, angle_pair};
use crate::utils::parse_degrees;
use std::sync::Arc;

pub const CIRCLE_MAX_DEGREES: f64 = 1000.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Menu,
    AnglePairs,
    CircleAngles,
    Quiz,
    QuizResetConfirm,
}

/// Entries of the main menu, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    AnglePairs,
    CircleAngles,
    Assessment,
}

impl MenuItem {
    pub const ALL: [MenuItem; 3] = [
        MenuItem::AnglePairs,
        MenuItem::CircleAngles,
        MenuItem::Assessment,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            MenuItem::AnglePairs => "Part 1 — Angle Pairs (Two Angles)",
            MenuItem::CircleAngles => "Part 2 — Circle Angles (Tangents & Secants)",
            MenuItem::Assessment => "Assessment — 6 questions (score tracked)",
        }
    }

    pub fn target(&self) -> AppState {
        match self {
            MenuItem::AnglePairs => AppState::AnglePairs,
            MenuItem::CircleAngles => AppState::CircleAngles,
            MenuItem::Assessment => AppState::Quiz,
        }
    }
}

/// A single-line numeric text field bounded to `[min, max]`.
#[derive(Debug, Clone, PartialEq)]
pub struct NumberField {
    pub label: &'static str,
    pub buffer: String,
    pub min: f64,
    pub max: f64,
}

impl NumberField {
    pub fn new(label: &'static str, min: f64, max: f64) -> Self {
        Self {
            label,
            buffer: String::new(),
            min,
            max,
        }
    }

    pub fn push(&mut self, c: char) {
        if c.is_ascii_digit() || (c == '.' && !self.buffer.contains('.')) {
            self.buffer.push(c);
        }
    }

    pub fn pop(&mut self) {
        self.buffer.pop();
    }

    pub fn value(&self) -> Result<f64, InputError> {
        parse_degrees(self.label, &self.buffer, self.min, self.max)
    }
}

/// What the last solve attempt on a form produced.
#[derive(Debug, Clone, PartialEq)]
pub enum FormResult {
    Solved(Solution),
    Warning(String),
}

impl From<Result<Solution, SolveError>> for FormResult {
    fn from(result: Result<Solution, SolveError>) -> Self {
        match result {
            Ok(solution) => FormResult::Solved(solution),
            Err(e) => FormResult::Warning(e.to_string()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AnglePairForm {
    pub kind: AnglePairKind,
    pub angle1: NumberField,
    pub result: Option<FormResult>,
}

impl Default for AnglePairForm {
    fn default() -> Self {
        Self {
            kind: AnglePairKind::Complementary,
            angle1: NumberField::new(
                "Angle 1 (degrees)",
                angle_pair::MIN_ANGLE,
                angle_pair::MAX_ANGLE,
            ),
            result: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CircleForm {
    pub kind: CircleCaseKind,
    /// Angle, arc 1 and arc 2, in that order.
    pub fields: [NumberField; 3],
    pub focused: usize,
    pub result: Option<FormResult>,
}

impl Default for CircleForm {
    fn default() -> Self {
        Self {
            kind: CircleCaseKind::TwoTangentsOutside,
            fields: [
                NumberField::new("Angle (if known, degrees)", 0.0, CIRCLE_MAX_DEGREES),
                NumberField::new("Arc 1 (far/major arc)", 0.0, CIRCLE_MAX_DEGREES),
                NumberField::new("Arc 2 (near/minor arc)", 0.0, CIRCLE_MAX_DEGREES),
            ],
            focused: 0,
            result: None,
        }
    }
}

impl CircleForm {
    pub fn known_values(&self) -> Result<KnownValues, InputError> {
        Ok(KnownValues::from_raw(
            self.fields[0].value()?,
            self.fields[1].value()?,
            self.fields[2].value()?,
        ))
    }

    pub fn focused_field(&mut self) -> &mut NumberField {
        &mut self.fields[self.focused]
    }

    pub fn focus_next(&mut self) {
        self.focused = (self.focused + 1) % self.fields.len();
    }

    pub fn focus_previous(&mut self) {
        self.focused = (self.focused + self.fields.len() - 1) % self.fields.len();
    }
}

/// Quiz screen state layered over the scoring session.
#[derive(Debug, Clone)]
pub struct QuizView {
    pub session: QuizSession,
    pub current_index: usize,
    pub selected_choice: usize,
    pub last_error: Option<String>,
}

impl QuizView {
    pub fn new(session: QuizSession) -> Self {
        Self {
            session,
            current_index: 0,
            selected_choice: 0,
            last_error: None,
        }
    }
}

#[derive(Debug)]
pub struct App {
    pub state: AppState,
    pub menu_index: usize,
    pub angle_form: AnglePairForm,
    pub circle_form: CircleForm,
    pub quiz: QuizView,
    pub should_quit: bool,
}

impl App {
    pub fn new(bank: Arc<QuestionBank>) -> Self {
        Self {
            state: AppState::Menu,
            menu_index: 0,
            angle_form: AnglePairForm::default(),
            circle_form: CircleForm::default(),
            quiz: QuizView::new(QuizSession::new(bank)),
            should_quit: false,
        }
    }
}
