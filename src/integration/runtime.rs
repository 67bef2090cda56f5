use std::collections::VecDeque;

use tokio::sync::mpsc;

use crate::{
    core::{
        cmd::{Cmd, TuiCommand},
        cmd_executor::CmdExecutor,
        msg::Msg,
        raw_msg::RawMsg,
        state::AppState,
        translator::translate_raw_to_domain,
        update::update,
    },
    infrastructure::feed_service::FeedOperation,
};

/// Owns the application state and drives the update cycle:
/// raw messages are translated, domain messages are applied, and the
/// resulting commands are handed to the executor.
pub struct Runtime {
    state: AppState,
    msg_queue: VecDeque<Msg>,
    raw_msg_queue: VecDeque<RawMsg>,
    cmd_queue: VecDeque<Cmd>,
    raw_msg_tx: mpsc::UnboundedSender<RawMsg>,
    raw_msg_rx: mpsc::UnboundedReceiver<RawMsg>,
    cmd_executor: CmdExecutor,
}

impl Runtime {
    /// Create a new Runtime whose executor has no routes yet
    pub fn new(initial_state: AppState) -> Self {
        Self::new_with_executor(initial_state, CmdExecutor::new())
    }

    pub fn new_with_executor(initial_state: AppState, mut cmd_executor: CmdExecutor) -> Self {
        let (raw_msg_tx, raw_msg_rx) = mpsc::unbounded_channel();
        cmd_executor.set_raw_sender(raw_msg_tx.clone());

        Self {
            state: initial_state,
            msg_queue: VecDeque::new(),
            raw_msg_queue: VecDeque::new(),
            cmd_queue: VecDeque::new(),
            raw_msg_tx,
            raw_msg_rx,
            cmd_executor,
        }
    }

    pub fn set_feed_sender(&mut self, feed_sender: mpsc::UnboundedSender<FeedOperation>) {
        self.cmd_executor.set_feed_sender(feed_sender);
    }

    pub fn set_tui_sender(&mut self, tui_sender: mpsc::UnboundedSender<TuiCommand>) {
        self.cmd_executor.set_tui_sender(tui_sender);
    }

    /// Get current state (read-only)
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Queue a domain message
    pub fn send_msg(&mut self, msg: Msg) {
        self.msg_queue.push_back(msg);
    }

    /// Queue a raw message
    pub fn send_raw_msg(&mut self, raw_msg: RawMsg) {
        if !raw_msg.is_frequent() {
            log::trace!("Received {raw_msg:?}");
        }
        self.raw_msg_queue.push_back(raw_msg);
    }

    /// Sender for background services that report back as raw messages
    pub fn get_raw_sender(&self) -> mpsc::UnboundedSender<RawMsg> {
        self.raw_msg_tx.clone()
    }

    /// Wait for the next raw message from a background service
    pub async fn recv_raw(&mut self) -> Option<RawMsg> {
        self.raw_msg_rx.recv().await
    }

    /// Take pending commands
    pub fn pending_commands(&mut self) -> Vec<Cmd> {
        self.cmd_queue.drain(..).collect()
    }

    /// Execute all pending commands using the command executor
    pub fn execute_pending_commands(&mut self) -> Vec<String> {
        let commands = self.pending_commands();
        if commands.is_empty() {
            return vec![];
        }
        self.cmd_executor.execute_commands(&commands)
    }

    /// Process a single message
    pub fn process_message(&mut self, msg: Msg) -> Vec<Cmd> {
        if !msg.is_frequent() {
            log::debug!("Processing {msg:?}");
        }

        let (new_state, commands) = update(msg, std::mem::take(&mut self.state));
        self.state = new_state;
        self.cmd_queue.extend(commands.iter().cloned());
        commands
    }

    /// Process all queued and received messages
    pub fn process_all_messages(&mut self) -> Vec<Cmd> {
        while let Ok(raw_msg) = self.raw_msg_rx.try_recv() {
            self.raw_msg_queue.push_back(raw_msg);
        }

        while let Some(raw_msg) = self.raw_msg_queue.pop_front() {
            let domain_msgs = translate_raw_to_domain(raw_msg, &self.state);
            self.msg_queue.extend(domain_msgs);
        }

        let mut all_commands = Vec::new();
        while let Some(msg) = self.msg_queue.pop_front() {
            all_commands.extend(self.process_message(msg));
        }
        all_commands
    }

    /// Process all messages and execute commands in one step
    pub fn run_update_cycle(&mut self) -> Vec<String> {
        self.process_all_messages();
        self.execute_pending_commands()
    }

    /// Get runtime statistics
    pub fn get_stats(&self) -> RuntimeStats {
        RuntimeStats {
            queued_messages: self.msg_queue.len() + self.raw_msg_queue.len(),
            queued_commands: self.cmd_queue.len(),
            photo_count: self.state.feed.len(),
            selected_index: self.state.gallery.selected_index(),
            is_loading: self.state.feed.is_loading(),
            has_feed_support: self.cmd_executor.get_stats().has_feed_sender,
        }
    }
}

/// Runtime statistics
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeStats {
    pub queued_messages: usize,
    pub queued_commands: usize,
    pub photo_count: usize,
    pub selected_index: Option<usize>,
    pub is_loading: bool,
    pub has_feed_support: bool,
}
