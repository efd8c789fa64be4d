use crate::app::MenuAction;
use crate::widgets::chrome::panel_block;
use ratatui::prelude::*;
use ratatui::widgets::*;

#[derive(Clone, Debug)]
pub struct MenuEntry {
    pub label: String,
    pub action: MenuAction,
}

/// Context menu built by the top screen and drawn as a centered overlay.
#[derive(Clone, Debug, Default)]
pub struct Menu {
    entries: Vec<MenuEntry>,
    selected: usize,
}

impl Menu {
    pub fn add(&mut self, label: impl Into<String>, action: MenuAction) {
        self.entries.push(MenuEntry {
            label: label.into(),
            action,
        });
    }

    pub fn entries(&self) -> &[MenuEntry] {
        &self.entries
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn select_prev(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.entries.len() {
            self.selected += 1;
        }
    }

    pub fn selected_action(&self) -> Option<MenuAction> {
        self.entries.get(self.selected).map(|e| e.action)
    }

    pub fn contains(&self, action: MenuAction) -> bool {
        self.entries.iter().any(|e| e.action == action)
    }
}

pub fn draw_menu(f: &mut Frame, area: Rect, menu: &Menu) {
    let widest = menu
        .entries
        .iter()
        .map(|e| e.label.len())
        .max()
        .unwrap_or(0) as u16;
    let w = (widest + 8).max(16).min(area.width);
    let h = (menu.entries.len() as u16 + 2).min(area.height);
    let rect = centered_rect(w, h, area);
    f.render_widget(Clear, rect);
    let items: Vec<ListItem> = menu
        .entries
        .iter()
        .enumerate()
        .map(|(i, e)| {
            let sel = if i == menu.selected { "> " } else { "  " };
            let item = ListItem::new(format!("{sel}{}", e.label));
            if i == menu.selected {
                item.style(crate::theme::list_cursor_style())
            } else {
                item
            }
        })
        .collect();
    let list = List::new(items).block(panel_block("Menu", true));
    f.render_widget(list, rect);
}

fn centered_rect(w: u16, h: u16, area: Rect) -> Rect {
    let x = area.x + area.width.saturating_sub(w) / 2;
    let y = area.y + area.height.saturating_sub(h) / 2;
    Rect::new(x, y, w.min(area.width), h.min(area.height))
}
