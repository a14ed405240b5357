#![allow(dead_code)]

//! In-memory fakes and state assembly shared by the integration tests.

use std::collections::BTreeMap;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicI64, Ordering};

use async_trait::async_trait;
use axum::extract::ConnectInfo;
use chrono::Utc;
use serde_json::json;
use std::net::SocketAddr;
use tokio::sync::mpsc;

use snaplink::AppError;
use snaplink::application::services::{LinkService, RedirectService, StatsService};
use snaplink::domain::click_event::ClickEvent;
use snaplink::domain::entities::{Click, DayCount, Link, LivenessSnapshot, NewClick, NewLink};
use snaplink::domain::prober::{LivenessProber, ProbeOutcome};
use snaplink::domain::recorder::QueuedClickRecorder;
use snaplink::domain::repositories::{ClickRepository, LinkRepository};
use snaplink::infrastructure::cache::{LinkCache, MemoryCache};
use snaplink::state::AppState;

/// In-memory link store with the same observable behavior as the
/// PostgreSQL repository: unique short codes, atomic counter, newest-first
/// listing.
pub struct InMemoryLinks {
    rows: Mutex<Vec<Link>>,
    next_id: AtomicI64,
}

impl InMemoryLinks {
    pub fn new() -> Self {
        Self {
            rows: Mutex::new(Vec::new()),
            next_id: AtomicI64::new(1),
        }
    }

    /// Seeds a link directly, bypassing code generation.
    pub fn seed(&self, short_code: &str, original_url: &str, owner_id: Option<i64>) -> i64 {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        self.rows.lock().unwrap().push(Link {
            id,
            short_code: short_code.to_string(),
            original_url: original_url.to_string(),
            title: String::new(),
            owner_id,
            clicks_count: 0,
            is_alive: None,
            last_check_status: None,
            last_checked_at: None,
            created_at: Utc::now(),
        });
        id
    }

    pub fn get(&self, id: i64) -> Option<Link> {
        self.rows.lock().unwrap().iter().find(|l| l.id == id).cloned()
    }
}

#[async_trait]
impl LinkRepository for InMemoryLinks {
    async fn create(&self, new_link: NewLink) -> Result<Link, AppError> {
        let mut rows = self.rows.lock().unwrap();
        if rows.iter().any(|l| l.short_code == new_link.short_code) {
            return Err(AppError::conflict(
                "Unique constraint violation",
                json!({ "constraint": "links_short_code_key" }),
            ));
        }

        let link = Link {
            id: self.next_id.fetch_add(1, Ordering::SeqCst),
            short_code: new_link.short_code,
            original_url: new_link.original_url,
            title: new_link.title,
            owner_id: new_link.owner_id,
            clicks_count: 0,
            is_alive: None,
            last_check_status: None,
            last_checked_at: None,
            created_at: Utc::now(),
        };
        rows.push(link.clone());
        Ok(link)
    }

    async fn find_by_code(&self, short_code: &str) -> Result<Option<Link>, AppError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|l| l.short_code == short_code)
            .cloned())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Link>, AppError> {
        Ok(self.get(id))
    }

    async fn list_by_owner(&self, owner_id: Option<i64>) -> Result<Vec<Link>, AppError> {
        let mut links: Vec<Link> = self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|l| owner_id.is_none() || l.owner_id == owner_id)
            .cloned()
            .collect();
        links.reverse();
        Ok(links)
    }

    async fn increment_clicks(&self, id: i64) -> Result<(), AppError> {
        let mut rows = self.rows.lock().unwrap();
        match rows.iter_mut().find(|l| l.id == id) {
            Some(link) => {
                link.clicks_count += 1;
                Ok(())
            }
            None => Err(AppError::internal("Database error", json!({}))),
        }
    }

    async fn update_liveness(&self, id: i64, snapshot: LivenessSnapshot) -> Result<(), AppError> {
        let mut rows = self.rows.lock().unwrap();
        match rows.iter_mut().find(|l| l.id == id) {
            Some(link) => {
                link.is_alive = Some(snapshot.is_alive);
                link.last_check_status = snapshot.status;
                link.last_checked_at = Some(snapshot.checked_at);
                Ok(())
            }
            None => Err(AppError::internal("Database error", json!({}))),
        }
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}

/// In-memory click store mirroring the SQL day-bucketed aggregation.
pub struct InMemoryClicks {
    rows: Mutex<Vec<Click>>,
    next_id: AtomicI64,
}

impl InMemoryClicks {
    pub fn new() -> Self {
        Self {
            rows: Mutex::new(Vec::new()),
            next_id: AtomicI64::new(1),
        }
    }

    pub fn all(&self) -> Vec<Click> {
        self.rows.lock().unwrap().clone()
    }

    /// Seeds a click at a specific timestamp.
    pub fn seed_at(&self, link_id: i64, occurred_at: chrono::DateTime<Utc>) {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        self.rows.lock().unwrap().push(Click {
            id,
            link_id,
            occurred_at,
            referrer: None,
            user_agent: None,
            device_type: "unknown".to_string(),
            os: "unknown".to_string(),
            browser: "unknown".to_string(),
            ip: None,
        });
    }
}

#[async_trait]
impl ClickRepository for InMemoryClicks {
    async fn record(&self, new_click: NewClick) -> Result<Click, AppError> {
        let click = Click {
            id: self.next_id.fetch_add(1, Ordering::SeqCst),
            link_id: new_click.link_id,
            occurred_at: Utc::now(),
            referrer: new_click.referrer,
            user_agent: new_click.user_agent,
            device_type: new_click.device_type,
            os: new_click.os,
            browser: new_click.browser,
            ip: new_click.ip,
        };
        self.rows.lock().unwrap().push(click.clone());
        Ok(click)
    }

    async fn clicks_by_day(&self, link_id: i64) -> Result<Vec<DayCount>, AppError> {
        let mut buckets = BTreeMap::new();
        for click in self.rows.lock().unwrap().iter() {
            if click.link_id == link_id {
                *buckets.entry(click.occurred_at.date_naive()).or_insert(0) += 1;
            }
        }
        Ok(buckets
            .into_iter()
            .map(|(day, count)| DayCount { day, count })
            .collect())
    }
}

/// Prober returning a fixed outcome, for exercising the check endpoint
/// without outbound traffic.
pub struct StaticProber {
    pub outcome: ProbeOutcome,
}

#[async_trait]
impl LivenessProber for StaticProber {
    async fn probe(&self, _url: &str) -> ProbeOutcome {
        self.outcome
    }
}

/// Link store wrapper whose first `create` reports a short code collision.
pub struct CollideOnce {
    inner: Arc<dyn LinkRepository>,
    collided: AtomicBool,
}

impl CollideOnce {
    pub fn new(inner: Arc<dyn LinkRepository>) -> Self {
        Self {
            inner,
            collided: AtomicBool::new(false),
        }
    }
}

#[async_trait]
impl LinkRepository for CollideOnce {
    async fn create(&self, new_link: NewLink) -> Result<Link, AppError> {
        if !self.collided.swap(true, Ordering::SeqCst) {
            return Err(AppError::conflict(
                "Unique constraint violation",
                json!({ "constraint": "links_short_code_key" }),
            ));
        }
        self.inner.create(new_link).await
    }

    async fn find_by_code(&self, short_code: &str) -> Result<Option<Link>, AppError> {
        self.inner.find_by_code(short_code).await
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Link>, AppError> {
        self.inner.find_by_id(id).await
    }

    async fn list_by_owner(&self, owner_id: Option<i64>) -> Result<Vec<Link>, AppError> {
        self.inner.list_by_owner(owner_id).await
    }

    async fn increment_clicks(&self, id: i64) -> Result<(), AppError> {
        self.inner.increment_clicks(id).await
    }

    async fn update_liveness(&self, id: i64, snapshot: LivenessSnapshot) -> Result<(), AppError> {
        self.inner.update_liveness(id, snapshot).await
    }

    async fn ping(&self) -> Result<(), AppError> {
        self.inner.ping().await
    }
}

/// Everything a test needs to drive the router and observe side effects.
pub struct TestContext {
    pub state: AppState,
    pub links: Arc<InMemoryLinks>,
    pub clicks: Arc<InMemoryClicks>,
    pub click_rx: mpsc::Receiver<ClickEvent>,
}

/// Assembles an [`AppState`] over in-memory fakes.
///
/// The click receiver is returned rather than wired to a worker so tests
/// can either inspect raw events or spawn the worker themselves.
pub fn create_test_context() -> TestContext {
    let links = Arc::new(InMemoryLinks::new());
    let clicks = Arc::new(InMemoryClicks::new());
    create_test_context_with(links, clicks, ProbeOutcome {
        status: Some(200),
        is_alive: true,
    })
}

pub fn create_test_context_with(
    links: Arc<InMemoryLinks>,
    clicks: Arc<InMemoryClicks>,
    probe_outcome: ProbeOutcome,
) -> TestContext {
    let cache: Arc<dyn LinkCache> =
        Arc::new(MemoryCache::new(std::time::Duration::from_secs(300)));
    let (tx, rx) = mpsc::channel(100);
    let recorder = Arc::new(QueuedClickRecorder::new(tx));
    let prober = Arc::new(StaticProber {
        outcome: probe_outcome,
    });

    let link_repo: Arc<dyn LinkRepository> = links.clone();
    let click_repo: Arc<dyn ClickRepository> = clicks.clone();

    let redirect_service = Arc::new(RedirectService::new(
        link_repo.clone(),
        cache.clone(),
        recorder.clone(),
    ));
    let link_service = Arc::new(LinkService::new(link_repo.clone(), cache.clone(), prober));
    let stats_service = Arc::new(StatsService::new(link_repo, click_repo));

    let state = AppState::new(
        redirect_service,
        link_service,
        stats_service,
        cache,
        recorder,
    );

    TestContext {
        state,
        links,
        clicks,
        click_rx: rx,
    }
}

/// Injects a fixed peer address so handlers using `ConnectInfo` work
/// under `axum_test::TestServer`.
#[derive(Clone)]
pub struct MockConnectInfoLayer;

impl<S> tower::Layer<S> for MockConnectInfoLayer {
    type Service = MockConnectInfoService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        MockConnectInfoService { inner }
    }
}

#[derive(Clone)]
pub struct MockConnectInfoService<S> {
    inner: S,
}

impl<S, B> tower::Service<axum::http::Request<B>> for MockConnectInfoService<S>
where
    S: tower::Service<axum::http::Request<B>> + Clone + Send + 'static,
    S::Future: Send + 'static,
    B: Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = S::Future;

    fn poll_ready(
        &mut self,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: axum::http::Request<B>) -> Self::Future {
        let addr: SocketAddr = "127.0.0.1:12345".parse().unwrap();
        req.extensions_mut().insert(ConnectInfo(addr));
        self.inner.call(req)
    }
}
