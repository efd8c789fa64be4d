pub mod order_form;
pub mod order_list;

use crate::app::{Effect, MenuAction};
use crate::widgets::menu::Menu;
use crossterm::event::KeyCode;
use ratatui::prelude::*;
use std::any::Any;

/// A unit of navigable content on the host's screen stack. Screens render
/// into the body area, get first crack at key input, and describe their
/// context menu; the host recovers concrete screens through `as_any` (e.g.
/// to read results out of a popped screen).
pub trait Screen {
    fn title(&self) -> &str;

    fn render(&mut self, f: &mut Frame, area: Rect, tick: u64);

    /// `Some(effects)` when the key was consumed; `None` delegates to the
    /// host's default handling.
    fn handle_key(&mut self, key: KeyCode) -> Option<Vec<Effect>>;

    fn build_menu(&self, menu: &mut Menu) {
        default_menu(menu);
    }

    fn on_menu_action(&mut self, action: MenuAction) -> Vec<Effect>;

    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

/// Entries every screen's menu starts with.
pub fn default_menu(menu: &mut Menu) {
    menu.add("Close", MenuAction::Close);
}
