use color_eyre::eyre::{eyre, Result};
use tokio::sync::mpsc;

use crate::{
    core::{
        cmd::{Cmd, TuiCommand},
        raw_msg::RawMsg,
    },
    infrastructure::feed_service::FeedOperation,
};

/// Command executor that routes Elm commands to background services
#[derive(Clone, Default)]
pub struct CmdExecutor {
    feed_sender: Option<mpsc::UnboundedSender<FeedOperation>>,
    tui_sender: Option<mpsc::UnboundedSender<TuiCommand>>,
    // Reports fetches that never reached the feed service
    raw_sender: Option<mpsc::UnboundedSender<RawMsg>>,
}

impl CmdExecutor {
    /// Create an executor with no routes; every routed command is dropped
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new command executor with FeedOperation support
    pub fn new_with_feed(feed_sender: mpsc::UnboundedSender<FeedOperation>) -> Self {
        Self {
            feed_sender: Some(feed_sender),
            ..Self::default()
        }
    }

    pub fn set_feed_sender(&mut self, feed_sender: mpsc::UnboundedSender<FeedOperation>) {
        self.feed_sender = Some(feed_sender);
    }

    /// Inject TUI command sender for executing TuiCommand asynchronously.
    pub fn set_tui_sender(&mut self, sender: mpsc::UnboundedSender<TuiCommand>) {
        self.tui_sender = Some(sender);
    }

    /// Sender used to report a `PageFailed` when a fetch cannot be handed off
    pub fn set_raw_sender(&mut self, sender: mpsc::UnboundedSender<RawMsg>) {
        self.raw_sender = Some(sender);
    }

    /// Execute a single command
    pub fn execute_command(&self, cmd: &Cmd) -> Result<()> {
        match cmd {
            Cmd::None => {}

            Cmd::FetchPage { page } => {
                let handed_off = match &self.feed_sender {
                    Some(feed_sender) => feed_sender
                        .send(FeedOperation::FetchPage { page: *page })
                        .map_err(|e| e.to_string()),
                    None => Err("FeedService not available".to_string()),
                };
                if let Err(reason) = handed_off {
                    self.report_page_failed(*page, &reason);
                    return Err(eyre!(reason));
                }
            }

            Cmd::Tui(tui_cmd) => match tui_cmd {
                TuiCommand::Resize { width, height } => {
                    if let Some(tx) = &self.tui_sender {
                        let _ = tx.send(TuiCommand::Resize {
                            width: *width,
                            height: *height,
                        });
                    } else {
                        log::debug!(
                            "CmdExecutor: TUI sender not configured; dropping Resize command {width}x{height}"
                        );
                    }
                }
            },

            Cmd::LogError { message } => {
                log::error!("Elm command error: {message}");
            }

            Cmd::LogInfo { message } => {
                log::info!("Elm command info: {message}");
            }

            Cmd::Batch(commands) => {
                for cmd in commands {
                    self.execute_command(cmd)?;
                }
            }
        }

        Ok(())
    }

    /// The page was marked in flight by the update; release it with a failure
    fn report_page_failed(&self, page: u32, reason: &str) {
        let msg = RawMsg::PageFailed {
            page,
            reason: reason.to_string(),
        };
        match &self.raw_sender {
            Some(tx) if tx.send(msg).is_ok() => {}
            _ => log::warn!("FetchPage({page}) dropped and could not be reported: {reason}"),
        }
    }

    /// Execute multiple commands
    pub fn execute_commands(&self, commands: &[Cmd]) -> Vec<String> {
        let mut execution_log = Vec::new();

        for cmd in commands {
            match self.execute_command(cmd) {
                Ok(()) => {
                    execution_log.push(format!("✓ Executed: {}", cmd.name()));
                }
                Err(e) => {
                    let error_msg = format!("✗ Failed to execute {}: {e}", cmd.name());
                    log::error!("{error_msg}");
                    execution_log.push(error_msg);
                }
            }
        }

        execution_log
    }

    /// Get execution statistics
    pub fn get_stats(&self) -> CmdExecutorStats {
        CmdExecutorStats {
            has_feed_sender: self.feed_sender.is_some(),
            is_feed_sender_closed: self.feed_sender.as_ref().map(|sender| sender.is_closed()),
            has_tui_sender: self.tui_sender.is_some(),
        }
    }
}

/// Command executor statistics
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdExecutorStats {
    pub has_feed_sender: bool,
    pub is_feed_sender_closed: Option<bool>,
    pub has_tui_sender: bool,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn create_test_executor() -> (CmdExecutor, mpsc::UnboundedReceiver<FeedOperation>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (CmdExecutor::new_with_feed(tx), rx)
    }

    #[test]
    fn test_execute_fetch_page() -> Result<()> {
        let (executor, mut rx) = create_test_executor();

        executor.execute_command(&Cmd::FetchPage { page: 4 })?;

        assert_eq!(rx.try_recv()?, FeedOperation::FetchPage { page: 4 });
        Ok(())
    }

    #[test]
    fn test_fetch_page_without_feed_reports_failure() -> Result<()> {
        let (raw_tx, mut raw_rx) = mpsc::unbounded_channel();
        let mut executor = CmdExecutor::new();
        executor.set_raw_sender(raw_tx);

        assert!(executor.execute_command(&Cmd::FetchPage { page: 1 }).is_err());

        assert_eq!(
            raw_rx.try_recv()?,
            RawMsg::PageFailed {
                page: 1,
                reason: "FeedService not available".to_string()
            }
        );
        Ok(())
    }

    #[test]
    fn test_fetch_page_to_closed_channel_fails() {
        let (mut executor, rx) = create_test_executor();
        let (raw_tx, mut raw_rx) = mpsc::unbounded_channel();
        executor.set_raw_sender(raw_tx);
        drop(rx);

        assert!(executor.execute_command(&Cmd::FetchPage { page: 3 }).is_err());
        assert_eq!(executor.get_stats().is_feed_sender_closed, Some(true));
        assert!(matches!(
            raw_rx.try_recv(),
            Ok(RawMsg::PageFailed { page: 3, .. })
        ));
    }

    #[test]
    fn test_execute_resize() -> Result<()> {
        let (mut executor, _rx) = create_test_executor();
        let (tui_tx, mut tui_rx) = mpsc::unbounded_channel::<TuiCommand>();
        executor.set_tui_sender(tui_tx);

        executor.execute_command(&Cmd::Tui(TuiCommand::Resize {
            width: 80,
            height: 24,
        }))?;

        assert_eq!(
            tui_rx.try_recv()?,
            TuiCommand::Resize {
                width: 80,
                height: 24
            }
        );
        Ok(())
    }

    #[test]
    fn test_execute_none() -> Result<()> {
        let (executor, mut rx) = create_test_executor();

        executor.execute_command(&Cmd::None)?;

        assert!(rx.try_recv().is_err());
        Ok(())
    }

    #[test]
    fn test_execute_batch() -> Result<()> {
        let (executor, mut rx) = create_test_executor();

        executor.execute_command(&Cmd::Batch(vec![
            Cmd::LogInfo {
                message: "batch".to_string(),
            },
            Cmd::FetchPage { page: 1 },
            Cmd::FetchPage { page: 2 },
        ]))?;

        assert_eq!(rx.try_recv()?, FeedOperation::FetchPage { page: 1 });
        assert_eq!(rx.try_recv()?, FeedOperation::FetchPage { page: 2 });
        Ok(())
    }

    #[test]
    fn test_execute_commands_log() {
        let (executor, rx) = create_test_executor();

        let log = executor.execute_commands(&[Cmd::None]);
        assert_eq!(log, vec!["✓ Executed: None".to_string()]);

        drop(rx);
        let log = executor.execute_commands(&[Cmd::FetchPage { page: 1 }]);
        assert!(log[0].starts_with("✗ Failed to execute FetchPage(1)"));
    }

    #[test]
    fn test_get_stats() {
        let executor = CmdExecutor::new();
        assert_eq!(
            executor.get_stats(),
            CmdExecutorStats {
                has_feed_sender: false,
                is_feed_sender_closed: None,
                has_tui_sender: false,
            }
        );
    }
}
