use ratatui::prelude::*;
use ratatui::widgets::*;

use crate::ui::AppState;

pub fn draw_header(f: &mut Frame, area: Rect, state: &AppState) {
    let title = state
        .stack
        .last()
        .map(|s| s.title().to_string())
        .unwrap_or_default();
    let mut spans = vec![Span::styled(format!(" {title}"), state.theme.title_style())];
    if state.stack.len() > 1 {
        spans.push(Span::styled(
            "  ‹ Esc back",
            crate::theme::text_muted(),
        ));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
