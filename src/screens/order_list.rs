use crate::app::{Effect, MenuAction};
use crate::model::OrderRecord;
use crate::screens::order_form::OrderFormScreen;
use crate::screens::{default_menu, Screen};
use crate::widgets::chrome::panel_block;
use crate::widgets::menu::Menu;
use crossterm::event::KeyCode;
use ratatui::prelude::*;
use ratatui::widgets::*;
use std::any::Any;

/// Root screen: one row per order record, with a scroll window that keeps
/// the selection visible. The context menu opens form screens in view or
/// edit mode.
pub struct OrderListScreen {
    title: String,
    records: Vec<OrderRecord>,
    selected: usize,
    offset: usize,
    last_viewport_h: u16,
}

impl OrderListScreen {
    pub fn new(title: impl Into<String>, records: Vec<OrderRecord>) -> Self {
        Self {
            title: title.into(),
            records,
            selected: 0,
            offset: 0,
            last_viewport_h: 0,
        }
    }

    pub fn records(&self) -> &[OrderRecord] {
        &self.records
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Replace the stored record carrying the same id. Called by the host
    /// when a form screen is popped with a saved snapshot.
    pub fn apply_update(&mut self, record: OrderRecord) {
        if let Some(slot) = self.records.iter_mut().find(|r| r.id == record.id) {
            *slot = record;
        }
    }

    fn keep_selected_visible(&mut self) {
        let ih = self.last_viewport_h as usize;
        if ih == 0 {
            self.offset = 0;
            return;
        }
        if self.selected < self.offset {
            self.offset = self.selected;
        } else if self.selected >= self.offset.saturating_add(ih) {
            self.offset = self.selected.saturating_sub(ih.saturating_sub(1));
        }
    }

    fn open_selected(&self, editable: bool) -> Vec<Effect> {
        match self.records.get(self.selected) {
            Some(r) => vec![Effect::Push(Box::new(OrderFormScreen::new(
                r.clone(),
                editable,
            )))],
            None => Vec::new(),
        }
    }
}

impl Screen for OrderListScreen {
    fn title(&self) -> &str {
        &self.title
    }

    fn render(&mut self, f: &mut Frame, area: Rect, _tick: u64) {
        let inner_h = area.height.saturating_sub(2);
        self.last_viewport_h = inner_h;
        if self.records.is_empty() {
            let p = Paragraph::new(Line::from(Span::styled(
                "No order records.",
                crate::theme::text_muted(),
            )))
            .block(panel_block(&self.title, true));
            f.render_widget(p, area);
            return;
        }
        if self.selected > self.records.len() - 1 {
            self.selected = self.records.len() - 1;
        }
        self.keep_selected_visible();
        let ih = inner_h as usize;
        let total = self.records.len();
        let max_start = total.saturating_sub(ih);
        let start = self.offset.min(max_start);
        let end = (start + ih).min(total);
        let items: Vec<ListItem> = self
            .records
            .iter()
            .enumerate()
            .skip(start)
            .take(end - start)
            .map(|(i, r)| {
                let sel = if i == self.selected { "> " } else { "  " };
                let text = format!(
                    "{sel}#{:<4} {:<22} x{:<4} {:>9}  {}",
                    r.id,
                    r.product,
                    r.quantity,
                    r.price_display(),
                    r.ordered_on
                );
                let item = ListItem::new(text);
                if i == self.selected {
                    item.style(crate::theme::text_active_bold())
                } else {
                    item
                }
            })
            .collect();
        let list = List::new(items).block(panel_block(&self.title, true));
        f.render_widget(list, area);
    }

    fn handle_key(&mut self, key: KeyCode) -> Option<Vec<Effect>> {
        let total = self.records.len();
        match key {
            KeyCode::Up => {
                if self.selected > 0 {
                    self.selected -= 1;
                }
                self.keep_selected_visible();
                Some(Vec::new())
            }
            KeyCode::Down => {
                if total > 0 && self.selected + 1 < total {
                    self.selected += 1;
                }
                self.keep_selected_visible();
                Some(Vec::new())
            }
            KeyCode::PageUp => {
                let step = self.last_viewport_h as usize;
                self.selected = self.selected.saturating_sub(step.max(1));
                self.keep_selected_visible();
                Some(Vec::new())
            }
            KeyCode::PageDown => {
                let step = self.last_viewport_h as usize;
                self.selected = (self.selected + step.max(1)).min(total.saturating_sub(1));
                self.keep_selected_visible();
                Some(Vec::new())
            }
            KeyCode::Home => {
                self.selected = 0;
                self.keep_selected_visible();
                Some(Vec::new())
            }
            KeyCode::End => {
                if total > 0 {
                    self.selected = total - 1;
                }
                self.keep_selected_visible();
                Some(Vec::new())
            }
            KeyCode::Enter => Some(vec![Effect::OpenMenu]),
            _ => None,
        }
    }

    fn build_menu(&self, menu: &mut Menu) {
        default_menu(menu);
        if !self.records.is_empty() {
            menu.add("View", MenuAction::View);
            menu.add("Edit", MenuAction::Edit);
        }
    }

    fn on_menu_action(&mut self, action: MenuAction) -> Vec<Effect> {
        match action {
            MenuAction::View => self.open_selected(false),
            MenuAction::Edit => self.open_selected(true),
            _ => Vec::new(),
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
