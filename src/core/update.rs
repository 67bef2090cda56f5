use crate::core::{
    cmd::Cmd,
    msg::{system::SystemMsg, Msg},
    state::{gallery::Viewport, AppState},
};

/// Elm-like update function
/// Returns new state and list of commands from current state and message
pub fn update(msg: Msg, mut state: AppState) -> (AppState, Vec<Cmd>) {
    let mut commands = match msg {
        // System messages (delegated to SystemState)
        Msg::System(system_msg) => {
            if let SystemMsg::Resize(width, height) = system_msg {
                let len = state.feed.len();
                state.gallery.set_viewport(Viewport::new(width, height), len);
            }
            state.system.update(system_msg)
        }

        // Feed messages (delegated to FeedState)
        Msg::Feed(feed_msg) => state.feed.update(feed_msg),

        // Gallery messages (delegated to GalleryState)
        Msg::Gallery(gallery_msg) => {
            let len = state.feed.len();
            state.gallery.update(gallery_msg, len)
        }
    };

    commands.extend(reconcile_visibility(&mut state));
    (state, commands)
}

/// Keep the load-more trigger bound to the last card and feed it the card's
/// current visibility. Runs after every message, the way a render pass would.
pub fn reconcile_visibility(state: &mut AppState) -> Option<Cmd> {
    let last = state.feed.len().checked_sub(1).zip(state.feed.last());
    let last = last.map(|(index, photo)| (index, &photo.id));

    if !state.gallery.trigger.is_observing(last) {
        state.gallery.trigger.attach(last, &state.feed);
    }

    let index = state.gallery.trigger.observed_index()?;
    let visible = state.gallery.is_item_visible(index);
    state.gallery.trigger.notify(visible, &mut state.feed)
}
