use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};

use crate::{
    core::{
        msg::{feed::FeedMsg, gallery::GalleryMsg, system::SystemMsg, Msg},
        raw_msg::RawMsg,
        state::AppState,
    },
    presentation::config::keybindings::{key_event_to_string, Action},
};

/// Translates raw external events into domain messages
/// This function is pure and contains no side effects
pub fn translate_raw_to_domain(raw: RawMsg, state: &AppState) -> Vec<Msg> {
    match raw {
        // System events - direct mapping
        RawMsg::Quit => vec![Msg::System(SystemMsg::Quit)],
        RawMsg::Resize(width, height) => vec![Msg::System(SystemMsg::Resize(width, height))],

        // User input - translate based on key bindings
        RawMsg::Key(key) => translate_key_event(key, state),
        RawMsg::Mouse(mouse) => translate_mouse_event(mouse),

        // Feed completions
        RawMsg::PageLoaded { page, photos } if photos.is_empty() => vec![
            Msg::Feed(FeedMsg::PageLoaded { page, photos }),
            Msg::System(SystemMsg::UpdateStatusMessage(format!(
                "Page {page} was empty"
            ))),
        ],
        RawMsg::PageLoaded { page, photos } => vec![Msg::Feed(FeedMsg::PageLoaded { page, photos })],
        RawMsg::PageFailed { page, reason } => vec![Msg::Feed(FeedMsg::PageFailed { page, reason })],

        RawMsg::Error(error) => vec![Msg::System(SystemMsg::ShowError(error))],

        // Ignore frequent system events in domain layer
        RawMsg::Tick | RawMsg::Render => vec![],
    }
}

/// Translates keyboard input to domain events
fn translate_key_event(key: KeyEvent, state: &AppState) -> Vec<Msg> {
    // Global key bindings first
    if let KeyEvent {
        code: KeyCode::Char('c'),
        modifiers: KeyModifiers::CONTROL,
        ..
    } = key
    {
        return vec![Msg::System(SystemMsg::Quit)];
    }

    match state.config.config.keybindings.get(&vec![key]) {
        Some(action) => {
            log::debug!("<{}> -> {action}", key_event_to_string(&key));
            translate_action_to_msg(*action)
        }
        None => vec![], // No matching keybinding found
    }
}

fn translate_mouse_event(mouse: MouseEvent) -> Vec<Msg> {
    match mouse.kind {
        MouseEventKind::ScrollDown => vec![Msg::Gallery(GalleryMsg::ScrollBy(1))],
        MouseEventKind::ScrollUp => vec![Msg::Gallery(GalleryMsg::ScrollBy(-1))],
        _ => vec![],
    }
}

fn translate_action_to_msg(action: Action) -> Vec<Msg> {
    match action {
        Action::ScrollUp => vec![Msg::Gallery(GalleryMsg::SelectRowAbove)],
        Action::ScrollDown => vec![Msg::Gallery(GalleryMsg::SelectRowBelow)],
        Action::ScrollLeft => vec![Msg::Gallery(GalleryMsg::SelectPrevious)],
        Action::ScrollRight => vec![Msg::Gallery(GalleryMsg::SelectNext)],
        Action::PageUp => vec![Msg::Gallery(GalleryMsg::PageUp)],
        Action::PageDown => vec![Msg::Gallery(GalleryMsg::PageDown)],
        Action::ScrollToTop => vec![Msg::Gallery(GalleryMsg::SelectFirst)],
        Action::ScrollToBottom => vec![Msg::Gallery(GalleryMsg::SelectLast)],
        Action::LoadMore => vec![Msg::Feed(FeedMsg::Advance)],
        Action::DismissError => vec![
            Msg::Feed(FeedMsg::DismissError),
            Msg::System(SystemMsg::ClearStatusMessage),
        ],
        Action::Quit => vec![Msg::System(SystemMsg::Quit)],
    }
}
