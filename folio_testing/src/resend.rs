use std::{
    net::{IpAddr, Ipv4Addr, SocketAddr},
    sync::{Arc, Mutex, PoisonError},
};

use anyhow::Context;
use axum::{
    extract::State,
    http::{header::AUTHORIZATION, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing, Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tokio::net::TcpListener;
use tracing::info;
use url::Url;
use uuid::Uuid;

const EMAILS_ROUTE: &str = "/emails";

/// Emails to recipients at this domain are rejected with a validation error.
pub const REJECTED_DOMAIN: &str = "rejected.invalid";

pub async fn start_server(host: IpAddr, port: u16, api_key: String) -> anyhow::Result<()> {
    info!("Starting resend testing server on {host}:{port}");
    info!("Resend api url: http://{host}:{port}/");
    info!("API key: {api_key:?}");
    info!("Emails to recipients at {REJECTED_DOMAIN:?} are rejected");

    let listener = TcpListener::bind((host, port))
        .await
        .with_context(|| format!("Failed to bind to {host}:{port}"))?;
    axum::serve(listener, router(api_key, Outbox::default()))
        .await
        .context("Failed to start HTTP server")
}

/// Resend server running in the background of the current tokio runtime.
#[derive(Debug, Clone)]
pub struct MockResend {
    pub url: Url,
    pub addr: SocketAddr,
    pub outbox: Outbox,
}

/// Start a resend testing server on an ephemeral localhost port.
pub async fn spawn(api_key: &str) -> anyhow::Result<MockResend> {
    let listener = TcpListener::bind((Ipv4Addr::LOCALHOST, 0))
        .await
        .context("Failed to bind to an ephemeral port")?;
    let addr = listener.local_addr()?;
    let url = format!("http://{addr}/")
        .parse()
        .context("Failed to build server url")?;

    let outbox = Outbox::default();
    let router = router(api_key.into(), outbox.clone());
    tokio::spawn(async move { axum::serve(listener, router).await });

    Ok(MockResend { url, addr, outbox })
}

/// All emails the server has accepted, oldest first.
#[derive(Debug, Clone, Default)]
pub struct Outbox(Arc<Mutex<Vec<ReceivedEmail>>>);

impl Outbox {
    pub fn emails(&self) -> Vec<ReceivedEmail> {
        self.0
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn push(&self, email: ReceivedEmail) {
        self.0
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(email);
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceivedEmail {
    pub id: String,
    pub from: String,
    pub to: Vec<String>,
    pub reply_to: Option<String>,
    pub subject: String,
    pub html: Option<String>,
    pub text: Option<String>,
}

#[derive(Clone)]
struct AppState {
    api_key: Arc<str>,
    outbox: Outbox,
}

fn router(api_key: String, outbox: Outbox) -> Router {
    Router::new()
        .route("/", routing::get(index))
        .route(EMAILS_ROUTE, routing::post(send_email))
        .with_state(AppState {
            api_key: api_key.into(),
            outbox,
        })
}

#[derive(Deserialize)]
struct SendEmailRequest {
    from: String,
    to: Vec<String>,
    #[serde(default)]
    reply_to: Option<String>,
    subject: String,
    #[serde(default)]
    html: Option<String>,
    #[serde(default)]
    text: Option<String>,
}

async fn index() -> &'static str {
    "resend testing server"
}

async fn send_email(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<SendEmailRequest>,
) -> Response {
    let token = headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "));

    match token {
        None => {
            return error(
                StatusCode::UNAUTHORIZED,
                "missing_api_key",
                "Missing API key in the authorization header.",
            )
        }
        Some(token) if token != &*state.api_key => {
            return error(StatusCode::FORBIDDEN, "invalid_api_key", "API key is invalid.")
        }
        Some(_) => {}
    }

    if request.to.is_empty() {
        return error(
            StatusCode::UNPROCESSABLE_ENTITY,
            "validation_error",
            "The `to` field must contain at least one recipient.",
        );
    }

    let rejected_suffix = format!("@{REJECTED_DOMAIN}");
    if let Some(to) = request
        .to
        .iter()
        .find(|to| to.trim_end_matches('>').ends_with(&rejected_suffix))
    {
        return error(
            StatusCode::UNPROCESSABLE_ENTITY,
            "validation_error",
            &format!("Invalid `to` field: {to}"),
        );
    }

    let id = Uuid::now_v7().to_string();
    info!(%id, to = ?request.to, subject = %request.subject, "Received email");

    state.outbox.push(ReceivedEmail {
        id: id.clone(),
        from: request.from,
        to: request.to,
        reply_to: request.reply_to,
        subject: request.subject,
        html: request.html,
        text: request.text,
    });

    Json(json!({ "id": id })).into_response()
}

fn error(status: StatusCode, name: &str, message: &str) -> Response {
    (
        status,
        Json(json!({
            "statusCode": status.as_u16(),
            "name": name,
            "message": message,
        })),
    )
        .into_response()
}
