use crate::widgets::chrome::panel_block;
use crossterm::event::KeyCode;
use ratatui::prelude::*;
use ratatui::widgets::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Number { is_integer: bool },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormField {
    pub name: String,
    pub label: String,
    pub kind: FieldKind,
    pub value: String,
}

impl FormField {
    pub fn text(name: &str, label: &str, value: impl Into<String>) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            kind: FieldKind::Text,
            value: value.into(),
        }
    }

    pub fn integer(name: &str, label: &str, value: impl Into<String>) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            kind: FieldKind::Number { is_integer: true },
            value: value.into(),
        }
    }

    pub fn decimal(name: &str, label: &str, value: impl Into<String>) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            kind: FieldKind::Number { is_integer: false },
            value: value.into(),
        }
    }

    fn accepts(&self, c: char) -> bool {
        match self.kind {
            FieldKind::Text => !c.is_control(),
            FieldKind::Number { is_integer: true } => c.is_ascii_digit(),
            FieldKind::Number { is_integer: false } => {
                c.is_ascii_digit() || (c == '.' && !self.value.contains('.'))
            }
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct FormState {
    pub fields: Vec<FormField>,
    pub selected: usize,
    pub read_only: bool,
}

impl FormState {
    pub fn new(fields: Vec<FormField>, read_only: bool) -> Self {
        Self {
            fields,
            selected: 0,
            read_only,
        }
    }
}

/// Route a key into the form. Returns true when the key was consumed:
/// Up/Down always move the field cursor; characters and Backspace edit the
/// selected field in place, but only when the form is not read-only.
pub fn handle_form_key(form: &mut FormState, key: KeyCode) -> bool {
    match key {
        KeyCode::Up => {
            if form.selected > 0 {
                form.selected -= 1;
            }
            true
        }
        KeyCode::Down => {
            if form.selected + 1 < form.fields.len() {
                form.selected += 1;
            }
            true
        }
        KeyCode::Char(c) if !form.read_only => {
            if let Some(fld) = form.fields.get_mut(form.selected) {
                if fld.accepts(c) {
                    fld.value.push(c);
                }
            }
            true
        }
        KeyCode::Backspace if !form.read_only => {
            if let Some(fld) = form.fields.get_mut(form.selected) {
                fld.value.pop();
            }
            true
        }
        _ => false,
    }
}

pub fn draw_form(f: &mut Frame, area: Rect, form: &mut FormState, title: &str, cursor_on: bool) {
    let mut lines: Vec<Line> = Vec::new();
    for (i, fld) in form.fields.iter().enumerate() {
        let sel = if i == form.selected { '›' } else { ' ' };
        let mut val = fld.value.clone();
        if !form.read_only && i == form.selected && cursor_on {
            val.push('▏');
        }
        let value_style = if i == form.selected {
            if form.read_only {
                crate::theme::text_active_bold()
            } else {
                crate::theme::text_editing_bold()
            }
        } else {
            Style::default()
        };
        lines.push(Line::from(vec![
            Span::raw(format!("{sel} {}: ", fld.label)),
            Span::styled(val, value_style),
        ]));
    }
    if form.read_only {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "  read only",
            crate::theme::text_muted(),
        )));
    }
    let block = panel_block(title, true);
    let p = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    f.render_widget(p, area);
}
