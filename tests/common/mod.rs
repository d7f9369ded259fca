//! Shared fixtures for integration tests.

#![allow(dead_code)]

use std::fmt;
use std::sync::{Arc, Mutex};

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use chrono::{DateTime, TimeZone, Utc};
use tower::ServiceExt;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::Layer;

use account_owner_server::api::{create_router, AppState};
use account_owner_server::{Account, Database, Owner, Repositories, RepositoryWrapper};

/// Fresh in-memory database with migrations applied
pub async fn database() -> Arc<Database> {
    Arc::new(
        Database::connect("sqlite::memory:")
            .await
            .expect("in-memory database"),
    )
}

pub fn created(day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, day, 12, 0, 0).unwrap()
}

/// Insert owners and accounts through the repository wrapper and save
pub async fn seed(db: &Database, owners: Vec<Owner>, accounts: Vec<Account>) {
    let repos = Repositories::new(db.get_connection());
    for owner in owners {
        repos.owner().create_owner(owner).await.expect("valid owner");
    }
    for account in accounts {
        repos
            .account()
            .create_account(account)
            .await
            .expect("valid account");
    }
    repos.save().await.expect("seed saved");
}

pub fn app(db: Arc<Database>) -> Router {
    create_router(AppState::new(db))
}

pub async fn get(app: Router, uri: &str) -> (StatusCode, String) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

/// An ERROR event seen by [`ErrorCapture`], with the names of its enclosing spans
#[derive(Debug, Clone)]
pub struct CapturedError {
    pub message: String,
    pub spans: Vec<String>,
}

/// Layer recording every ERROR event
#[derive(Clone, Default)]
pub struct ErrorCapture {
    events: Arc<Mutex<Vec<CapturedError>>>,
}

impl ErrorCapture {
    /// Install as the thread's default subscriber until the guard drops
    pub fn install(&self) -> tracing::subscriber::DefaultGuard {
        tracing::subscriber::set_default(tracing_subscriber::registry().with(self.clone()))
    }

    pub fn errors(&self) -> Vec<CapturedError> {
        self.events.lock().unwrap().clone()
    }
}

struct MessageVisitor(String);

impl Visit for MessageVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.0 = format!("{:?}", value);
        }
    }
}

impl<S> Layer<S> for ErrorCapture
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_event(&self, event: &Event<'_>, ctx: Context<'_, S>) {
        if *event.metadata().level() != Level::ERROR {
            return;
        }
        let mut visitor = MessageVisitor(String::new());
        event.record(&mut visitor);
        let spans = ctx
            .event_scope(event)
            .map(|scope| scope.map(|span| span.name().to_string()).collect())
            .unwrap_or_default();
        self.events.lock().unwrap().push(CapturedError {
            message: visitor.0,
            spans,
        });
    }
}
