use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};
use pretty_assertions::assert_eq;

use photoscroll::{
    core::{cmd::Cmd, raw_msg::RawMsg, state::{feed::FETCH_FAILED_MESSAGE, AppState}},
    domain::photo::PhotoRecord,
    infrastructure::config::Config,
    integration::runtime::Runtime,
};

fn photos(page: u32, count: usize) -> Vec<PhotoRecord> {
    (0..count)
        .map(|i| PhotoRecord::new(format!("{page}-{i}"), "url", format!("Author {i}")))
        .collect()
}

/// Runtime with the bundled keybindings and a 2x2 card grid on screen
fn runtime() -> Runtime {
    let config = Config::embedded().unwrap();
    let mut runtime = Runtime::new(AppState::new_with_config(config));
    runtime.send_raw_msg(RawMsg::Resize(64, 14));
    runtime.process_all_messages();
    runtime.pending_commands();
    runtime
}

fn send(runtime: &mut Runtime, raw: RawMsg) -> Vec<Cmd> {
    runtime.send_raw_msg(raw);
    runtime.process_all_messages();
    runtime
        .pending_commands()
        .into_iter()
        .filter(|cmd| matches!(cmd, Cmd::FetchPage { .. }))
        .collect()
}

fn key(runtime: &mut Runtime, code: KeyCode, modifiers: KeyModifiers) -> Vec<Cmd> {
    send(runtime, RawMsg::Key(KeyEvent::new(code, modifiers)))
}

fn load(runtime: &mut Runtime, page: u32, count: usize) -> Vec<Cmd> {
    send(
        runtime,
        RawMsg::PageLoaded {
            page,
            photos: photos(page, count),
        },
    )
}

/// Mount: the first page is requested before any photo exists
fn mounted() -> Runtime {
    let mut runtime = runtime();
    assert_eq!(
        key(&mut runtime, KeyCode::Char('L'), KeyModifiers::SHIFT),
        vec![Cmd::FetchPage { page: 1 }]
    );
    runtime
}

#[test]
fn test_scrolling_to_the_end_loads_the_next_page_once() {
    let mut runtime = mounted();
    assert!(load(&mut runtime, 1, 20).is_empty());

    let cmds = key(&mut runtime, KeyCode::End, KeyModifiers::NONE);
    assert_eq!(cmds, vec![Cmd::FetchPage { page: 2 }]);

    // Further movement while page 2 is in flight does not ask again
    assert!(key(&mut runtime, KeyCode::Char('k'), KeyModifiers::NONE).is_empty());
    assert!(key(&mut runtime, KeyCode::Char('j'), KeyModifiers::NONE).is_empty());
    assert!(key(&mut runtime, KeyCode::Char('L'), KeyModifiers::SHIFT).is_empty());

    assert!(load(&mut runtime, 2, 15).is_empty());
    let state = runtime.state();
    assert_eq!(state.feed.len(), 35);
    assert_eq!(state.feed.next_page(), 3);
    assert_eq!(state.feed.items()[20].id.as_str(), "2-0");
}

#[test]
fn test_failed_page_is_retried_when_the_end_is_reached_again() {
    let mut runtime = mounted();
    load(&mut runtime, 1, 20);
    key(&mut runtime, KeyCode::End, KeyModifiers::NONE);

    let cmds = send(
        &mut runtime,
        RawMsg::PageFailed {
            page: 2,
            reason: "unexpected HTTP status 503".to_string(),
        },
    );

    // The last card is still on screen, but nothing retries on its own
    assert!(cmds.is_empty());
    let state = runtime.state();
    assert_eq!(state.feed.len(), 20);
    assert_eq!(state.feed.next_page(), 2);
    assert!(!state.feed.is_loading());
    assert_eq!(state.feed.last_error(), Some(FETCH_FAILED_MESSAGE));

    assert!(key(&mut runtime, KeyCode::Char('g'), KeyModifiers::NONE).is_empty());
    assert_eq!(
        key(&mut runtime, KeyCode::End, KeyModifiers::NONE),
        vec![Cmd::FetchPage { page: 2 }]
    );

    load(&mut runtime, 2, 15);
    // The error stays until dismissed
    assert_eq!(runtime.state().feed.last_error(), Some(FETCH_FAILED_MESSAGE));
    key(&mut runtime, KeyCode::Esc, KeyModifiers::NONE);
    assert_eq!(runtime.state().feed.last_error(), None);
    assert_eq!(runtime.state().feed.len(), 35);
}

#[test]
fn test_short_pages_chain_until_the_screen_is_full() {
    let mut runtime = mounted();

    // One card per page: the last card stays visible until four are shown
    assert_eq!(load(&mut runtime, 1, 1), vec![Cmd::FetchPage { page: 2 }]);
    assert_eq!(load(&mut runtime, 2, 1), vec![Cmd::FetchPage { page: 3 }]);
    assert_eq!(load(&mut runtime, 3, 1), vec![Cmd::FetchPage { page: 4 }]);
    assert_eq!(load(&mut runtime, 4, 1), vec![Cmd::FetchPage { page: 5 }]);
    assert!(load(&mut runtime, 5, 1).is_empty());
    assert_eq!(runtime.state().feed.len(), 5);
}

#[test]
fn test_empty_page_does_not_loop() {
    let mut runtime = mounted();

    assert!(load(&mut runtime, 1, 0).is_empty());

    let state = runtime.state();
    assert!(state.feed.is_empty());
    assert_eq!(state.feed.next_page(), 2);
    assert!(!state.feed.is_loading());
    assert_eq!(state.system.status_message.as_deref(), Some("Page 1 was empty"));
}

#[test]
fn test_mouse_wheel_reaches_the_end() {
    let mut runtime = mounted();
    load(&mut runtime, 1, 12);

    let wheel = |kind| {
        RawMsg::Mouse(MouseEvent {
            kind,
            column: 0,
            row: 0,
            modifiers: KeyModifiers::NONE,
        })
    };

    // 6 rows of cards, 2 on screen: four notches bring the last row in
    let mut cmds = Vec::new();
    for _ in 0..4 {
        cmds.extend(send(&mut runtime, wheel(MouseEventKind::ScrollDown)));
    }

    assert_eq!(cmds, vec![Cmd::FetchPage { page: 2 }]);
    assert_eq!(runtime.state().gallery.scroll_row(), 4);
}

#[test]
fn test_stale_completion_is_ignored() {
    let mut runtime = mounted();
    load(&mut runtime, 1, 20);

    // Page 1 again, not the one in flight
    load(&mut runtime, 1, 20);

    assert_eq!(runtime.state().feed.len(), 20);
}
