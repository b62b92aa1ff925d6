//! Video blob downloads that stop as soon as the consuming view goes away
//! or switches to another source.

use std::future::Future;

use thiserror::Error;
use tokio::sync::oneshot;

#[derive(Debug, Error)]
pub enum MediaError {
    #[error("video download cancelled")]
    Cancelled,

    #[error("failed to fetch video (HTTP {status})")]
    Status { status: u16 },

    #[error("network failure while fetching video: {0}")]
    Network(#[from] reqwest::Error),
}

/// Downloads `url` chunk by chunk. Resolving `cancel` stops the download at
/// the next suspension point.
pub async fn fetch_video<C>(client: &reqwest::Client, url: &str, cancel: C) -> Result<Vec<u8>, MediaError>
where
    C: Future<Output = ()>,
{
    tokio::pin!(cancel);

    let mut resp = tokio::select! {
        biased;
        _ = &mut cancel => return Err(MediaError::Cancelled),
        resp = client.get(url).send() => resp?,
    };
    let status = resp.status();
    if !status.is_success() {
        return Err(MediaError::Status {
            status: status.as_u16(),
        });
    }

    let mut body = Vec::new();
    loop {
        tokio::select! {
            biased;
            _ = &mut cancel => return Err(MediaError::Cancelled),
            chunk = resp.chunk() => match chunk? {
                Some(bytes) => body.extend_from_slice(&bytes),
                None => break,
            },
        }
    }
    tracing::debug!(url, bytes = body.len(), "video downloaded");
    Ok(body)
}

pub type VideoResult = oneshot::Receiver<Result<Vec<u8>, MediaError>>;

/// Owns at most one running download. Starting another one or dropping the
/// loader cancels the running one.
#[derive(Debug)]
pub struct VideoLoader {
    client: reqwest::Client,
    cancel: Option<oneshot::Sender<()>>,
}

impl VideoLoader {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client, cancel: None }
    }

    /// Starts downloading `url` on the runtime. The receiver yields the body,
    /// or [`MediaError::Cancelled`] once a newer load or drop cancelled it.
    pub fn load(&mut self, url: impl Into<String>) -> VideoResult {
        self.cancel();

        let (cancel_tx, cancel_rx) = oneshot::channel::<()>();
        let (done_tx, done_rx) = oneshot::channel();
        let client = self.client.clone();
        let url = url.into();
        tokio::spawn(async move {
            // Fires on an explicit cancel and when the sender is dropped.
            let cancelled = async {
                let _ = cancel_rx.await;
            };
            let result = fetch_video(&client, &url, cancelled).await;
            let _ = done_tx.send(result);
        });

        self.cancel = Some(cancel_tx);
        done_rx
    }

    pub fn cancel(&mut self) {
        if let Some(tx) = self.cancel.take() {
            let _ = tx.send(());
        }
    }

    pub fn is_loading(&self) -> bool {
        self.cancel.as_ref().is_some_and(|tx| !tx.is_closed())
    }
}

impl Drop for VideoLoader {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
#[path = "tests/media_tests.rs"]
mod tests;
