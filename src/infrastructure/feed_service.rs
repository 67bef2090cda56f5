use std::sync::Arc;

use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use crate::{
    core::raw_msg::RawMsg,
    domain::photo::PhotoRecord,
    infrastructure::feed_client::{FeedError, PhotoFeed},
};

/// Operations executed by the feed service
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedOperation {
    FetchPage { page: u32 },
}

/// FeedService performs photo feed requests in the background
/// - One request at a time, in the order received
/// - Every request ends in exactly one `PageLoaded` or `PageFailed`
/// - On cancellation a request in flight is abandoned and reports nothing
pub struct FeedService {
    feed: Arc<dyn PhotoFeed>,
    // Incoming channels
    op_rx: mpsc::UnboundedReceiver<FeedOperation>,
    cancel_token: CancellationToken,
    // Outgoing channels
    raw_tx: mpsc::UnboundedSender<RawMsg>,
}

pub type NewFeedService = (
    mpsc::UnboundedSender<FeedOperation>, // op_tx - operations to send
    CancellationToken,                    // shutdown signal
    FeedService,
);

impl FeedService {
    pub fn new(feed: Arc<dyn PhotoFeed>, raw_tx: mpsc::UnboundedSender<RawMsg>) -> NewFeedService {
        let (op_tx, op_rx) = mpsc::unbounded_channel();
        let cancel_token = CancellationToken::new();

        (
            op_tx,
            cancel_token.clone(),
            Self {
                feed,
                op_rx,
                cancel_token,
                raw_tx,
            },
        )
    }

    /// Run the FeedService in background task
    pub fn run(mut self) -> tokio::task::JoinHandle<()> {
        tokio::spawn(async move {
            self.run_service().await;
        })
    }

    /// Main service loop
    async fn run_service(&mut self) {
        loop {
            tokio::select! {
                result = self.op_rx.recv() => {
                    match result {
                        Some(op) => self.handle_operation(op).await,
                        None => {
                            log::info!("FeedService: operation channel closed");
                            break;
                        }
                    }
                }

                _ = self.cancel_token.cancelled() => {
                    log::info!("FeedService received cancellation signal");
                    break;
                }
            }
        }
    }

    async fn handle_operation(&self, op: FeedOperation) {
        log::debug!("Handling FeedOperation: {op:?}");

        match op {
            FeedOperation::FetchPage { page } => {
                let Some(result) = self.fetch(page).await else {
                    return;
                };
                let msg = match result {
                    Ok(photos) => RawMsg::PageLoaded { page, photos },
                    Err(e) => RawMsg::PageFailed {
                        page,
                        reason: e.to_string(),
                    },
                };
                if self.raw_tx.send(msg).is_err() {
                    log::warn!("FeedService: runtime is gone; dropping result for page {page}");
                }
            }
        }
    }

    /// `None` when the service is shut down mid-request
    async fn fetch(&self, page: u32) -> Option<Result<Vec<PhotoRecord>, FeedError>> {
        tokio::select! {
            result = self.feed.fetch_page(page) => Some(result),
            _ = self.cancel_token.cancelled() => {
                log::info!("FeedService: request for page {page} cancelled");
                None
            }
        }
    }
}
