use ratatui::prelude::*;
use ratatui::widgets::*;

use crate::ui::{AppState, ToastLevel};

pub fn draw_status(f: &mut Frame, area: Rect, state: &AppState, help_text: &str) {
    let mut spans: Vec<Span> = Vec::new();
    if let Some(t) = &state.toast {
        let color = state.theme.toast_color(t.level);
        let tag = match t.level {
            ToastLevel::Success => "[OK]",
            ToastLevel::Info => "[INFO]",
        };
        spans.push(Span::styled(
            format!(" {tag} "),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(t.text.clone(), Style::default().fg(color)));
        spans.push(Span::raw("  |  "));
    } else {
        spans.push(Span::raw(" "));
    }
    spans.push(Span::styled(
        help_text.to_string(),
        crate::theme::text_muted(),
    ));
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
