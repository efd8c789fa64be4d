use crate::app::{Effect, MenuAction};
use crate::controller::OrderRecordController;
use crate::model::OrderRecord;
use crate::screens::{default_menu, Screen};
use crate::ui::ToastLevel;
use crate::widgets::form::{draw_form, handle_form_key};
use crate::widgets::menu::Menu;
use crossterm::event::KeyCode;
use ratatui::prelude::*;
use std::any::Any;

const TITLE_EDIT: &str = "Edit Order Record";
const TITLE_VIEW: &str = "View Order Record";

/// Screen for displaying and/or editing one order record. Enter opens the
/// context menu; the menu carries "Edit" until the screen becomes editable
/// and "Save" afterwards. The saved snapshot stays readable after the
/// screen is popped.
pub struct OrderFormScreen {
    title: String,
    editable: bool,
    controller: OrderRecordController,
    updated: Option<OrderRecord>,
}

impl OrderFormScreen {
    pub fn new(record: OrderRecord, editable: bool) -> Self {
        let title = if editable { TITLE_EDIT } else { TITLE_VIEW };
        Self {
            title: title.to_string(),
            editable,
            controller: OrderRecordController::new(record, editable),
            updated: None,
        }
    }

    /// Last saved snapshot, or None when no save has happened yet.
    pub fn updated_order_record(&self) -> Option<&OrderRecord> {
        self.updated.as_ref()
    }

    pub fn is_editable(&self) -> bool {
        self.editable
    }

    /// "Edit" menu entry: turn this into an edit screen in place.
    fn edit_action(&mut self) {
        self.title = TITLE_EDIT.to_string();
        self.editable = true;
        self.controller.make_editable();
    }

    /// "Save" menu entry: capture the snapshot, then leave the stack.
    fn save_action(&mut self) -> Vec<Effect> {
        let mut effects = Vec::new();
        if self.save() {
            effects.push(Effect::Toast {
                text: "Order record saved".into(),
                level: ToastLevel::Success,
                seconds: 3,
            });
            effects.push(Effect::Pop);
        }
        effects
    }

    fn save(&mut self) -> bool {
        self.updated = Some(self.controller.updated_record());
        true
    }
}

impl Screen for OrderFormScreen {
    fn title(&self) -> &str {
        &self.title
    }

    fn render(&mut self, f: &mut Frame, area: Rect, tick: u64) {
        let cursor_on = tick % 2 == 0;
        draw_form(f, area, self.controller.form_mut(), &self.title, cursor_on);
    }

    fn handle_key(&mut self, key: KeyCode) -> Option<Vec<Effect>> {
        if key == KeyCode::Enter {
            return Some(vec![Effect::OpenMenu]);
        }
        if handle_form_key(self.controller.form_mut(), key) {
            return Some(Vec::new());
        }
        None
    }

    fn build_menu(&self, menu: &mut Menu) {
        default_menu(menu);
        if self.editable {
            menu.add("Save", MenuAction::Save);
        } else {
            menu.add("Edit", MenuAction::Edit);
        }
    }

    fn on_menu_action(&mut self, action: MenuAction) -> Vec<Effect> {
        match action {
            MenuAction::Edit => {
                self.edit_action();
                Vec::new()
            }
            MenuAction::Save => self.save_action(),
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
