use crate::screens::Screen;
use crate::ui::{AppState, ToastLevel};
use crossterm::event::KeyCode;

#[cfg(test)]
mod tests;

/// Named actions a context-menu entry can carry. `Close` is handled by the
/// host; everything else is dispatched to the top screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuAction {
    View,
    Edit,
    Save,
    Close,
}

pub enum AppMsg {
    Key(KeyCode),
}

pub enum Effect {
    Push(Box<dyn Screen>),
    Pop,
    OpenMenu,
    CloseMenu,
    Quit,
    Toast {
        text: String,
        level: ToastLevel,
        seconds: u64,
    },
}

/// Map one input event to effects. The menu overlay owns the keys while it
/// is open; otherwise the top screen gets the key first and unconsumed
/// keys fall through to the host defaults (Esc/Backspace pops, q quits).
pub fn update(state: &mut AppState, msg: AppMsg) -> Vec<Effect> {
    let AppMsg::Key(key) = msg;
    let mut effects: Vec<Effect> = Vec::new();
    if let Some(menu) = &mut state.menu {
        match key {
            KeyCode::Up => menu.select_prev(),
            KeyCode::Down => menu.select_next(),
            KeyCode::Esc => effects.push(Effect::CloseMenu),
            KeyCode::Enter => {
                let action = menu.selected_action();
                effects.push(Effect::CloseMenu);
                match action {
                    Some(MenuAction::Close) => effects.push(Effect::Pop),
                    Some(action) => {
                        if let Some(top) = state.stack.last_mut() {
                            effects.extend(top.on_menu_action(action));
                        }
                    }
                    None => {}
                }
            }
            _ => {}
        }
        return effects;
    }
    if let Some(top) = state.stack.last_mut() {
        if let Some(consumed) = top.handle_key(key) {
            return consumed;
        }
    }
    match key {
        KeyCode::Esc | KeyCode::Backspace => effects.push(Effect::Pop),
        KeyCode::Char('q') => effects.push(Effect::Quit),
        _ => {}
    }
    effects
}
