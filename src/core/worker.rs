use crate::core::download::Downloader;
use crate::domain::model::House;
use crate::domain::ports::{HouseSink, Storage};
use crate::utils::error::{HarvestError, Result};
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::{mpsc, Mutex};
use tokio::task::JoinHandle;

/// Producer side of the bounded work queue. When the queue holds
/// `queue_capacity` undelivered houses, `dispatch` blocks until a worker
/// drains one, which throttles how far ahead pagination can run.
pub struct ChannelSink {
    tx: mpsc::Sender<House>,
}

impl ChannelSink {
    pub fn new(tx: mpsc::Sender<House>) -> Self {
        Self { tx }
    }
}

#[async_trait]
impl HouseSink for ChannelSink {
    async fn dispatch(&self, house: House) -> Result<()> {
        self.tx
            .send(house)
            .await
            .map_err(|e| HarvestError::QueueClosed {
                message: format!("house ID={} rejected, all workers stopped", e.0.id),
            })
    }
}

/// Starts the fixed worker pool. Each worker pulls from the shared receiver
/// until the queue is closed and drained, then terminates. The pool is joined
/// by awaiting the returned handles.
pub fn spawn_workers<S>(
    total_workers: usize,
    rx: mpsc::Receiver<House>,
    downloader: Arc<Downloader<S>>,
) -> Vec<JoinHandle<()>>
where
    S: Storage + 'static,
{
    let queue = Arc::new(Mutex::new(rx));
    (1..=total_workers)
        .map(|id| tokio::spawn(run_worker(id, Arc::clone(&queue), Arc::clone(&downloader))))
        .collect()
}

async fn run_worker<S>(
    id: usize,
    queue: Arc<Mutex<mpsc::Receiver<House>>>,
    downloader: Arc<Downloader<S>>,
) where
    S: Storage,
{
    loop {
        // hold the lock only for the dequeue so downloads run in parallel
        let next = { queue.lock().await.recv().await };
        let Some(house) = next else {
            break;
        };

        tracing::info!("Worker {} started download ID={}", id, house.id);
        match downloader.download(&house).await {
            Ok(()) => tracing::info!("Worker {} finished download ID={}", id, house.id),
            Err(e) => tracing::warn!("Worker {} failed download ID={}: {}", id, house.id, e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use reqwest::Client;
    use std::collections::HashMap;
    use std::time::Duration;

    #[derive(Default)]
    struct MockStorage {
        files: Mutex<HashMap<String, Vec<u8>>>,
    }

    impl Storage for MockStorage {
        async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
            let mut files = self.files.lock().await;
            files.insert(path.to_string(), data.to_vec());
            Ok(())
        }
    }

    fn house(id: i64, photo_url: &str) -> House {
        House {
            id,
            address: format!("{} Main Street", id),
            homeowner: "Owner".to_string(),
            price: 100000,
            photo_url: photo_url.to_string(),
        }
    }

    #[tokio::test]
    async fn test_full_queue_blocks_producer() {
        let (tx, mut rx) = mpsc::channel::<House>(2);
        let sink = ChannelSink::new(tx);

        // no worker draining: capacity 2 accepts two, the third must block
        sink.dispatch(house(1, "http://x/1.jpg")).await.unwrap();
        sink.dispatch(house(2, "http://x/2.jpg")).await.unwrap();

        let blocked =
            tokio::time::timeout(Duration::from_millis(50), sink.dispatch(house(3, "http://x/3.jpg")))
                .await;
        assert!(blocked.is_err(), "producer should block on a full queue");

        // draining one slot unblocks the producer
        assert_eq!(rx.recv().await.unwrap().id, 1);
        let unblocked =
            tokio::time::timeout(Duration::from_millis(50), sink.dispatch(house(3, "http://x/3.jpg")))
                .await;
        assert!(unblocked.is_ok());
    }

    #[tokio::test]
    async fn test_dispatch_after_receiver_dropped_fails() {
        let (tx, rx) = mpsc::channel::<House>(2);
        drop(rx);
        let sink = ChannelSink::new(tx);

        let err = sink.dispatch(house(1, "http://x/1.jpg")).await.unwrap_err();
        assert!(matches!(err, HarvestError::QueueClosed { .. }));
    }

    #[tokio::test]
    async fn test_workers_drain_queue_then_stop() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET);
            then.status(200).body(b"jpg" as &[u8]);
        });

        let downloader = Arc::new(Downloader::new(Client::new(), MockStorage::default()));
        let (tx, rx) = mpsc::channel::<House>(4);
        let workers = spawn_workers(3, rx, Arc::clone(&downloader));

        for id in 1..=8 {
            tx.send(house(id, &server.url(format!("/photos/{}.jpg", id))))
                .await
                .unwrap();
        }
        drop(tx);
        for worker in workers {
            worker.await.unwrap();
        }

        let files = downloader_files(&downloader).await;
        assert_eq!(files, 8);
    }

    #[tokio::test]
    async fn test_failed_download_does_not_stop_worker() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/photos/2.jpg");
            then.status(500);
        });
        server.mock(|when, then| {
            when.method(GET);
            then.status(200).body(b"jpg" as &[u8]);
        });

        let downloader = Arc::new(Downloader::new(Client::new(), MockStorage::default()));
        let (tx, rx) = mpsc::channel::<House>(4);
        let workers = spawn_workers(1, rx, Arc::clone(&downloader));

        for id in 1..=3 {
            tx.send(house(id, &server.url(format!("/photos/{}.jpg", id))))
                .await
                .unwrap();
        }
        drop(tx);
        for worker in workers {
            worker.await.unwrap();
        }

        // record 2 failed and was skipped, 1 and 3 still landed
        let files = downloader_files(&downloader).await;
        assert_eq!(files, 2);
    }

    async fn downloader_files(downloader: &Downloader<MockStorage>) -> usize {
        downloader.storage().files.lock().await.len()
    }
}
