use crossterm::event::{
    self, Event, KeyCode, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind,
};
use std::time::Duration;

/// Raw terminal events the shell cares about. Pointer coordinates are still
/// in cells here; the app scales them into world pixels.
#[derive(Clone, Copy, Debug)]
pub(crate) enum UiEvent {
    Key(KeyCode, KeyModifiers),
    PointerDown(MouseButton, u16, u16),
    PointerDrag(u16, u16),
    PointerUp,
}

pub(crate) fn collect_input_nonblocking(max_frame_time: Duration) -> anyhow::Result<Vec<UiEvent>> {
    let mut out = Vec::new();

    // poll with a tiny timeout so we stay responsive
    let timeout = std::cmp::min(Duration::from_millis(1), max_frame_time);
    while event::poll(timeout)? {
        match event::read()? {
            Event::Key(k) => {
                if k.kind == KeyEventKind::Press || k.kind == KeyEventKind::Repeat {
                    out.push(UiEvent::Key(k.code, k.modifiers));
                }
            }
            Event::Mouse(m) => match m.kind {
                MouseEventKind::Down(button) => {
                    out.push(UiEvent::PointerDown(button, m.column, m.row));
                }
                MouseEventKind::Drag(MouseButton::Left) => {
                    out.push(UiEvent::PointerDrag(m.column, m.row));
                }
                MouseEventKind::Up(MouseButton::Left) => {
                    out.push(UiEvent::PointerUp);
                }
                _ => {}
            },
            _ => {}
        }
        if out.len() >= 64 {
            break;
        }
    }
    Ok(out)
}

#[derive(Clone, Copy, Debug)]
pub(crate) enum AppAction {
    Quit,
    HelpToggle,
}

pub(crate) fn map_key_action(code: KeyCode, _mods: KeyModifiers) -> Option<AppAction> {
    match code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(AppAction::Quit),
        KeyCode::Char('h') | KeyCode::Char('H') => Some(AppAction::HelpToggle),
        _ => None,
    }
}
