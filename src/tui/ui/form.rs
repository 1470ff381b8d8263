//! Patient lab-value entry form.
//!
//! Every control is bounded: adjustments clamp at the declared range, so a
//! submitted input can never be out of range or malformed.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::domain::{FieldSpec, PatientInput, FIELD_SPECS};
use crate::tui::styles::ClinicTheme;

/// Width of the inline value bar, in cells.
const BAR_WIDTH: usize = 10;

/// Multiplier for coarse (PageUp/PageDown) adjustments.
const COARSE_FACTOR: f64 = 10.0;

/// Form state: one value per control, always within its declared range.
pub struct FormState {
    values: Vec<f64>,
    selected: usize,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            values: FIELD_SPECS.iter().map(|s| s.default).collect(),
            selected: 0,
        }
    }
}

impl FormState {
    /// Move selection to the next field.
    pub fn next_field(&mut self) {
        self.selected = (self.selected + 1) % FIELD_SPECS.len();
    }

    /// Move selection to the previous field.
    pub fn prev_field(&mut self) {
        if self.selected == 0 {
            self.selected = FIELD_SPECS.len() - 1;
        } else {
            self.selected -= 1;
        }
    }

    /// Increase the selected value by one step (or a coarse step), clamped.
    pub fn increase(&mut self, coarse: bool) {
        self.adjust(1.0, coarse);
    }

    /// Decrease the selected value by one step (or a coarse step), clamped.
    pub fn decrease(&mut self, coarse: bool) {
        self.adjust(-1.0, coarse);
    }

    /// Flip the selected field if it is a binary flag.
    pub fn toggle(&mut self) {
        let spec = &FIELD_SPECS[self.selected];
        if spec.binary {
            let value = &mut self.values[self.selected];
            *value = if *value == 0.0 { 1.0 } else { 0.0 };
        }
    }

    /// Reset every control to its default value.
    pub fn reset_defaults(&mut self) {
        for (value, spec) in self.values.iter_mut().zip(FIELD_SPECS.iter()) {
            *value = spec.default;
        }
    }

    fn adjust(&mut self, direction: f64, coarse: bool) {
        let spec = &FIELD_SPECS[self.selected];
        if spec.binary {
            // Binary flags toggle regardless of direction granularity.
            self.values[self.selected] = if direction > 0.0 { 1.0 } else { 0.0 };
            return;
        }

        let step = if coarse {
            spec.step * COARSE_FACTOR
        } else {
            spec.step
        };
        let raw = self.values[self.selected] + direction * step;

        // Snap to the step grid to avoid floating-point drift from
        // repeated adjustments, then clamp to the declared range.
        let snapped = (raw / spec.step).round() * spec.step;
        self.values[self.selected] = snapped.clamp(spec.min, spec.max);
    }

    /// Current value of a field by index.
    #[must_use]
    pub fn value(&self, index: usize) -> f64 {
        self.values[index]
    }

    /// Take an immutable snapshot of the current control values.
    #[must_use]
    pub fn snapshot(&self) -> PatientInput {
        // The value vector always has exactly one entry per FIELD_SPECS slot.
        PatientInput::from_field_values(&self.values).unwrap_or_else(|_| unreachable!())
    }
}

/// Render the patient entry form.
pub fn render_form(f: &mut Frame, area: Rect, state: &FormState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Fields
            Constraint::Length(3), // Footer
        ])
        .split(area);

    render_form_header(f, chunks[0]);
    render_form_fields(f, chunks[1], state);
    render_form_footer(f, chunks[2]);
}

fn render_form_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new(Line::from(vec![
        Span::styled(" ", ClinicTheme::text()),
        Span::styled("Patient Lab Values", ClinicTheme::title()),
        Span::styled(
            " │ Chronic Kidney Disease Risk",
            ClinicTheme::text_secondary(),
        ),
    ]))
    .block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(ClinicTheme::border()),
    );

    f.render_widget(header, area);
}

fn render_form_fields(f: &mut Frame, area: Rect, state: &FormState) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .margin(1)
        .split(area);

    let mid = (FIELD_SPECS.len() + 1) / 2;

    render_field_column(f, columns[0], 0, mid, state);
    render_field_column(f, columns[1], mid, FIELD_SPECS.len(), state);
}

fn render_field_column(f: &mut Frame, area: Rect, start: usize, end: usize, state: &FormState) {
    let lines: Vec<Line> = (start..end)
        .map(|i| field_line(&FIELD_SPECS[i], state.value(i), i == state.selected))
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(ClinicTheme::border());

    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn field_line(spec: &FieldSpec, value: f64, selected: bool) -> Line<'static> {
    let (marker, label_style, value_style) = if selected {
        ("▌ ", ClinicTheme::focused(), ClinicTheme::focused())
    } else {
        ("  ", ClinicTheme::text_secondary(), ClinicTheme::text())
    };

    let mut spans = vec![
        Span::styled(marker, ClinicTheme::border_focused()),
        Span::styled(format!("{:<24}", spec.label), label_style),
        Span::styled(format!("{:>8}", format_value(spec, value)), value_style),
    ];

    if spec.binary {
        spans.push(Span::raw("  "));
    } else {
        spans.push(Span::styled(
            format!("  {}  ", value_bar(spec, value)),
            ClinicTheme::border_focused(),
        ));
    }

    spans.push(Span::styled(spec.hint.to_string(), ClinicTheme::text_muted()));

    Line::from(spans)
}

fn format_value(spec: &FieldSpec, value: f64) -> String {
    if spec.binary {
        let (no, yes) = match spec.hint {
            "good/poor" => ("good", "poor"),
            _ => ("no", "yes"),
        };
        if value == 0.0 { no.into() } else { yes.into() }
    } else if spec.step >= 1.0 {
        format!("{value:.0}")
    } else if spec.step >= 0.1 {
        format!("{value:.1}")
    } else {
        format!("{value:.3}")
    }
}

fn value_bar(spec: &FieldSpec, value: f64) -> String {
    let fraction = ((value - spec.min) / (spec.max - spec.min)).clamp(0.0, 1.0);
    let filled = (fraction * BAR_WIDTH as f64).round() as usize;
    let mut bar = String::with_capacity(BAR_WIDTH);
    for i in 0..BAR_WIDTH {
        bar.push(if i < filled { '█' } else { '░' });
    }
    bar
}

fn render_form_footer(f: &mut Frame, area: Rect) {
    let content = Line::from(vec![
        Span::styled("[↑↓] ", ClinicTheme::key_hint()),
        Span::styled("Navigate ", ClinicTheme::key_desc()),
        Span::styled("[←→] ", ClinicTheme::key_hint()),
        Span::styled("Adjust ", ClinicTheme::key_desc()),
        Span::styled("[PgUp/PgDn] ", ClinicTheme::key_hint()),
        Span::styled("Coarse ", ClinicTheme::key_desc()),
        Span::styled("[Space] ", ClinicTheme::key_hint()),
        Span::styled("Toggle ", ClinicTheme::key_desc()),
        Span::styled("[D] ", ClinicTheme::key_hint()),
        Span::styled("Defaults ", ClinicTheme::key_desc()),
        Span::styled("[Enter] ", ClinicTheme::key_hint()),
        Span::styled("Predict ", ClinicTheme::key_desc()),
        Span::styled("[Q] ", ClinicTheme::key_hint()),
        Span::styled("Quit", ClinicTheme::key_desc()),
    ]);

    let footer = Paragraph::new(content).block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(ClinicTheme::border()),
    );

    f.render_widget(footer, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn index_of(key: &str) -> usize {
        FIELD_SPECS
            .iter()
            .position(|s| s.key == key)
            .expect("field present")
    }

    #[test]
    fn test_defaults_snapshot() {
        let state = FormState::default();
        assert_eq!(state.snapshot(), PatientInput::defaults());
    }

    #[test]
    fn test_adjust_clamps_at_bounds() {
        let mut state = FormState::default();
        state.selected = index_of("sod");

        // sod: 135-145, default 140, step 1.
        for _ in 0..20 {
            state.increase(false);
        }
        assert_eq!(state.value(state.selected), 145.0);

        for _ in 0..40 {
            state.decrease(false);
        }
        assert_eq!(state.value(state.selected), 135.0);
    }

    #[test]
    fn test_coarse_adjust_uses_larger_step() {
        let mut state = FormState::default();
        state.selected = index_of("wbcc");

        // wbcc: default 6000, step 100; coarse = 1000.
        state.increase(true);
        assert_eq!(state.value(state.selected), 7000.0);
    }

    #[test]
    fn test_fractional_steps_stay_on_grid() {
        let mut state = FormState::default();
        state.selected = index_of("sg");

        // sg: default 1.020, step 0.001.
        for _ in 0..5 {
            state.increase(false);
        }
        assert!((state.value(state.selected) - 1.025).abs() < 1e-9);
        assert!(state.snapshot().sg <= 1.030);
    }

    #[test]
    fn test_binary_toggle() {
        let mut state = FormState::default();
        state.selected = index_of("dm_yes");

        assert_eq!(state.value(state.selected), 0.0);
        state.toggle();
        assert_eq!(state.value(state.selected), 1.0);
        state.toggle();
        assert_eq!(state.value(state.selected), 0.0);

        // Arrow adjustments set rather than step binary flags.
        state.increase(false);
        assert_eq!(state.value(state.selected), 1.0);
        state.decrease(false);
        assert_eq!(state.value(state.selected), 0.0);
    }

    #[test]
    fn test_reset_defaults() {
        let mut state = FormState::default();
        state.selected = index_of("bgr");
        state.increase(true);
        state.selected = index_of("htn_yes");
        state.toggle();

        state.reset_defaults();
        assert_eq!(state.snapshot(), PatientInput::defaults());
    }

    #[test]
    fn test_selection_wraps() {
        let mut state = FormState::default();
        state.prev_field();
        assert_eq!(state.selected, FIELD_SPECS.len() - 1);
        state.next_field();
        assert_eq!(state.selected, 0);
    }
}
