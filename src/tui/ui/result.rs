//! Prediction result view.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

use crate::domain::Prediction;
use crate::tui::styles::ClinicTheme;

/// Result screen state.
#[derive(Debug, Clone)]
pub enum ResultState {
    /// Completed prediction for a submitted input
    Complete {
        prediction: Prediction,
        assessed_at: chrono::DateTime<chrono::Utc>,
        threshold: f64,
    },
    /// The model rejected the cycle; no partial result is shown
    Error { message: String },
}

/// Render the prediction result screen.
pub fn render_result(f: &mut Frame, area: Rect, state: &ResultState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Content
            Constraint::Length(3), // Footer
        ])
        .split(area);

    render_result_header(f, chunks[0]);
    match state {
        ResultState::Complete {
            prediction,
            assessed_at,
            threshold,
        } => render_prediction(f, chunks[1], prediction, *assessed_at, *threshold),
        ResultState::Error { message } => render_error(f, chunks[1], message),
    }
    render_result_footer(f, chunks[2], state);
}

fn render_result_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new(Line::from(vec![
        Span::styled(" ", ClinicTheme::text()),
        Span::styled("Prediction Result", ClinicTheme::title()),
        Span::styled(" │ CKD Risk Classifier", ClinicTheme::text_secondary()),
    ]))
    .block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(ClinicTheme::border()),
    );

    f.render_widget(header, area);
}

fn render_prediction(
    f: &mut Frame,
    area: Rect,
    prediction: &Prediction,
    assessed_at: chrono::DateTime<chrono::Utc>,
    threshold: f64,
) {
    let block = Block::default()
        .title(Span::styled(" Predicted Class ", ClinicTheme::subtitle()))
        .borders(Borders::ALL)
        .border_style(ClinicTheme::border_focused());

    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Label
            Constraint::Length(4), // Probability gauge
            Constraint::Length(4), // Probability lines
            Constraint::Min(0),    // Metadata
        ])
        .margin(1)
        .split(inner);

    let label_style = ClinicTheme::risk_label(prediction.label);
    let label_display = Paragraph::new(vec![
        Line::from(Span::styled(
            prediction.label.to_string(),
            label_style.add_modifier(ratatui::style::Modifier::BOLD),
        )),
        Line::from(Span::styled(
            prediction.label.description(),
            ClinicTheme::text_secondary(),
        )),
    ])
    .alignment(Alignment::Center);
    f.render_widget(label_display, chunks[0]);

    let prob_gauge = Gauge::default()
        .block(
            Block::default()
                .title(Span::styled(
                    " Probability of CKD ",
                    ClinicTheme::text_secondary(),
                ))
                .borders(Borders::ALL)
                .border_style(ClinicTheme::border()),
        )
        .gauge_style(label_style)
        .percent((prediction.p_positive * 100.0) as u16)
        .label(format!("{:.2}", prediction.p_positive));
    f.render_widget(prob_gauge, chunks[1]);

    // Probabilities reported to two decimal places, exactly as classified.
    let probabilities = Paragraph::new(vec![
        Line::from(vec![
            Span::styled("Probability of CKD:     ", ClinicTheme::text_secondary()),
            Span::styled(format!("{:.2}", prediction.p_positive), ClinicTheme::text()),
        ]),
        Line::from(vec![
            Span::styled("Probability of not CKD: ", ClinicTheme::text_secondary()),
            Span::styled(format!("{:.2}", prediction.p_negative), ClinicTheme::text()),
        ]),
    ])
    .alignment(Alignment::Center);
    f.render_widget(probabilities, chunks[2]);

    let metadata = Paragraph::new(vec![
        Line::from(vec![
            Span::styled("Decision threshold: ", ClinicTheme::text_muted()),
            Span::styled(format!("{threshold:.2}"), ClinicTheme::text_muted()),
        ]),
        Line::from(vec![
            Span::styled("Assessed at: ", ClinicTheme::text_muted()),
            Span::styled(
                assessed_at.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
                ClinicTheme::text_muted(),
            ),
        ]),
    ])
    .alignment(Alignment::Center);
    f.render_widget(metadata, chunks[3]);
}

fn render_error(f: &mut Frame, area: Rect, message: &str) {
    let content = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled("! Prediction Failed", ClinicTheme::danger())),
        Line::from(""),
        Line::from(Span::styled(message.to_string(), ClinicTheme::text())),
    ])
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(ClinicTheme::danger()),
    );

    f.render_widget(content, area);
}

fn render_result_footer(f: &mut Frame, area: Rect, state: &ResultState) {
    let content = match state {
        ResultState::Complete { .. } => Line::from(vec![
            Span::styled("[Enter/Esc] ", ClinicTheme::key_hint()),
            Span::styled("Back to Form ", ClinicTheme::key_desc()),
            Span::styled("[N] ", ClinicTheme::key_hint()),
            Span::styled("New Patient", ClinicTheme::key_desc()),
        ]),
        ResultState::Error { .. } => Line::from(vec![
            Span::styled("[Enter/Esc] ", ClinicTheme::key_hint()),
            Span::styled("Back to Form", ClinicTheme::key_desc()),
        ]),
    };

    let footer = Paragraph::new(content).block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(ClinicTheme::border()),
    );

    f.render_widget(footer, area);
}
