use std::sync::Arc;

use color_eyre::eyre::Result;
use ratatui::layout::Rect;
use tokio::sync::{mpsc, Mutex};
use tokio_util::sync::CancellationToken;

use crate::{
    core::{
        cmd::TuiCommand,
        msg::{feed::FeedMsg, Msg},
        raw_msg::RawMsg,
        state::AppState,
    },
    infrastructure::{
        config::Config,
        feed_client::{PhotoFeed, UnsplashClient},
        feed_service::FeedService,
        tui::{event_source::EventSource, real::RealTui, Event, Frame, TuiLike},
    },
    integration::runtime::Runtime,
    presentation::components::Components,
};

/// Drives the application: terminal events and feed results go into the
/// runtime, commands come out, and the gallery is redrawn after each step.
pub struct AppRunner<T: TuiLike> {
    runtime: Runtime,
    tui: Arc<Mutex<T>>,
    events: EventSource,
    tui_rx: mpsc::UnboundedReceiver<TuiCommand>,
    components: Components,
    feed_cancel: CancellationToken,
}

enum Input {
    Terminal(Option<Event>),
    Feed(Option<RawMsg>),
}

impl AppRunner<RealTui> {
    /// Production wiring: Unsplash client and the real terminal
    pub fn new_with_real(config: Config, tui: Arc<Mutex<RealTui>>) -> Result<Self> {
        let feed: Arc<dyn PhotoFeed> = Arc::new(UnsplashClient::new(&config)?);
        let events = EventSource::real(Arc::<Mutex<RealTui>>::clone(&tui));
        Ok(Self::new_with_feed(config, feed, tui, events))
    }
}

impl<T: TuiLike> AppRunner<T> {
    /// Wire the runtime to `feed` and start the feed service.
    /// `tui` is drawn on; `events` supplies input.
    /// Must be called inside a tokio runtime.
    pub fn new_with_feed(
        config: Config,
        feed: Arc<dyn PhotoFeed>,
        tui: Arc<Mutex<T>>,
        events: EventSource,
    ) -> Self {
        let mut runtime = Runtime::new(AppState::new_with_config(config));

        let (feed_tx, feed_cancel, feed_service) = FeedService::new(feed, runtime.get_raw_sender());
        feed_service.run();
        runtime.set_feed_sender(feed_tx);

        let (tui_tx, tui_rx) = mpsc::unbounded_channel();
        runtime.set_tui_sender(tui_tx);

        Self {
            runtime,
            tui,
            events,
            tui_rx,
            components: Components::new(),
            feed_cancel,
        }
    }

    pub fn runtime(&self) -> &Runtime {
        &self.runtime
    }

    pub fn state(&self) -> &AppState {
        self.runtime.state()
    }

    pub fn should_quit(&self) -> bool {
        self.runtime.state().system.should_quit
    }

    /// Run until the user quits
    pub async fn run(&mut self) -> Result<()> {
        self.start().await?;
        while !self.should_quit() {
            self.step().await?;
        }
        self.shutdown().await
    }

    /// Enter the terminal, size the grid and request the first page
    pub async fn start(&mut self) -> Result<()> {
        let size = {
            let mut tui = self.tui.lock().await;
            tui.enter()?;
            tui.size()?
        };

        self.runtime
            .send_raw_msg(RawMsg::Resize(size.width, size.height));
        self.runtime.send_msg(Msg::Feed(FeedMsg::Advance));
        self.update_and_render().await
    }

    /// Wait for one terminal event or feed result, apply it and redraw.
    ///
    /// When the event source is exhausted the step waits on the feed alone.
    pub async fn step(&mut self) -> Result<()> {
        let input = tokio::select! {
            biased;
            event = self.events.next() => Input::Terminal(event),
            raw = self.runtime.recv_raw() => Input::Feed(raw),
        };

        match input {
            Input::Terminal(Some(event)) => self.handle_event(event),
            Input::Terminal(None) => {
                if let Some(raw) = self.runtime.recv_raw().await {
                    self.runtime.send_raw_msg(raw);
                }
            }
            Input::Feed(Some(raw)) => self.runtime.send_raw_msg(raw),
            Input::Feed(None) => {}
        }

        self.update_and_render().await
    }

    /// Stop the feed service and restore the terminal
    pub async fn shutdown(&mut self) -> Result<()> {
        self.feed_cancel.cancel();
        self.tui.lock().await.exit()?;
        log::info!("Shut down after {} photos", self.state().feed.len());
        Ok(())
    }

    fn handle_event(&mut self, event: Event) {
        let raw = match event {
            Event::Quit | Event::Closed => RawMsg::Quit,
            Event::Tick => RawMsg::Tick,
            Event::Render => RawMsg::Render,
            Event::Resize(w, h) => RawMsg::Resize(w, h),
            Event::Key(key) => RawMsg::Key(key),
            Event::Mouse(mouse) => RawMsg::Mouse(mouse),
            Event::Error => RawMsg::Error("terminal event error".to_string()),
            Event::Init | Event::FocusGained | Event::FocusLost | Event::Paste(_) => return,
        };
        self.runtime.send_raw_msg(raw);
    }

    async fn update_and_render(&mut self) -> Result<()> {
        for line in self.runtime.run_update_cycle() {
            log::trace!("{line}");
        }

        let mut tui = self.tui.lock().await;
        while let Ok(cmd) = self.tui_rx.try_recv() {
            match cmd {
                TuiCommand::Resize { width, height } => {
                    tui.resize(Rect::new(0, 0, width, height))?;
                }
            }
        }

        let state = self.runtime.state();
        let components = &self.components;
        tui.draw(&mut |f: &mut Frame<'_>| components.render(f, state))
    }
}
