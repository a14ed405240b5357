mod common;

use std::sync::Arc;

use snaplink::domain::click_event::ClickEvent;
use snaplink::domain::click_worker::run_click_worker;
use snaplink::domain::repositories::{ClickRepository, LinkRepository};
use tokio::sync::mpsc;

use common::{InMemoryClicks, InMemoryLinks};

#[tokio::test]
async fn test_worker_records_every_queued_click() {
    let links = Arc::new(InMemoryLinks::new());
    let clicks = Arc::new(InMemoryClicks::new());
    let link_id = links.seed("hot123", "https://example.com", None);

    let (tx, rx) = mpsc::channel(64);

    for i in 0..25 {
        tx.send(ClickEvent::new(
            link_id,
            Some(format!("https://referrer.example/{i}")),
            Some("Mozilla/5.0".to_string()),
            None,
        ))
        .await
        .unwrap();
    }
    drop(tx);

    let link_repo: Arc<dyn LinkRepository> = links.clone();
    let click_repo: Arc<dyn ClickRepository> = clicks.clone();
    run_click_worker(rx, link_repo, click_repo).await;

    assert_eq!(links.get(link_id).unwrap().clicks_count, 25);
    assert_eq!(clicks.all().len(), 25);
}

#[tokio::test]
async fn test_worker_survives_dangling_link_id() {
    let links = Arc::new(InMemoryLinks::new());
    let clicks = Arc::new(InMemoryClicks::new());
    let link_id = links.seed("real12", "https://example.com", None);

    let (tx, rx) = mpsc::channel(8);

    // Event for a link that was never created.
    tx.send(ClickEvent::new(9999, None, None, None)).await.unwrap();
    tx.send(ClickEvent::new(link_id, None, None, None)).await.unwrap();
    drop(tx);

    let link_repo: Arc<dyn LinkRepository> = links.clone();
    let click_repo: Arc<dyn ClickRepository> = clicks.clone();
    run_click_worker(rx, link_repo, click_repo).await;

    // The bad event is dropped, the good one still lands.
    assert_eq!(links.get(link_id).unwrap().clicks_count, 1);
    assert_eq!(clicks.all().len(), 1);
}
