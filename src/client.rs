use crate::config::BoardConfig;
use crate::errors::{ApiError, ConfigError};
use crate::models::{ActionAccepted, ActionRejected, ActivityList};
use axum::http::StatusCode;
use reqwest::{Client, Method, Url};
use std::future::Future;
use std::pin::Pin;

pub type ApiFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T, ApiError>> + Send + 'a>>;

/// Outcome of a signup or unregister call that produced a JSON reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiReply {
    Accepted { message: String },
    Rejected { status: StatusCode, detail: Option<String> },
}

/// The backend endpoints the board consumes.
pub trait ActivityApi: Send + Sync {
    fn list_activities(&self) -> ApiFuture<'_, ActivityList>;

    fn signup<'a>(&'a self, activity: &'a str, email: &'a str) -> ApiFuture<'a, ApiReply>;

    fn unregister<'a>(&'a self, activity: &'a str, email: &'a str) -> ApiFuture<'a, ApiReply>;
}

#[derive(Clone)]
pub struct HttpActivityApi {
    client: Client,
    base_url: Url,
}

impl HttpActivityApi {
    pub fn new(client: Client, base_url: Url) -> Self {
        Self { client, base_url }
    }

    pub fn from_config(config: &BoardConfig) -> Result<Self, ConfigError> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|err| ConfigError::Client(err.to_string()))?;
        Ok(Self::new(client, config.api_base_url.clone()))
    }

    async fn send_action(&self, method: Method, url: Url) -> Result<ApiReply, ApiError> {
        let response = self.client.request(method, url).send().await?;
        let status = response.status();
        let body = response.bytes().await?;
        decode_reply(status, &body)
    }
}

/// A 2xx body must carry `message`; any other status may carry `detail`.
/// Either way the body has to be JSON.
pub fn decode_reply(status: StatusCode, body: &[u8]) -> Result<ApiReply, ApiError> {
    if status.is_success() {
        let accepted: ActionAccepted = serde_json::from_slice(body).map_err(ApiError::decode)?;
        Ok(ApiReply::Accepted {
            message: accepted.message,
        })
    } else {
        let rejected: ActionRejected = serde_json::from_slice(body).map_err(ApiError::decode)?;
        Ok(ApiReply::Rejected {
            status,
            detail: rejected.detail_text().map(str::to_string),
        })
    }
}

impl ActivityApi for HttpActivityApi {
    fn list_activities(&self) -> ApiFuture<'_, ActivityList> {
        Box::pin(async move {
            let url = activities_url(&self.base_url);
            let response = self.client.get(url).send().await?;
            let status = response.status();
            if !status.is_success() {
                return Err(ApiError::Status(status));
            }
            let body = response.bytes().await?;
            serde_json::from_slice(&body).map_err(ApiError::decode)
        })
    }

    fn signup<'a>(&'a self, activity: &'a str, email: &'a str) -> ApiFuture<'a, ApiReply> {
        Box::pin(async move {
            let url = action_url(&self.base_url, activity, "signup", email);
            self.send_action(Method::POST, url).await
        })
    }

    fn unregister<'a>(&'a self, activity: &'a str, email: &'a str) -> ApiFuture<'a, ApiReply> {
        Box::pin(async move {
            let url = action_url(&self.base_url, activity, "unregister", email);
            self.send_action(Method::DELETE, url).await
        })
    }
}

fn activities_url(base: &Url) -> Url {
    with_segments(base, &["activities"])
}

/// `{base}/activities/{activity}/{action}?email={email}` with each part percent-encoded.
pub fn action_url(base: &Url, activity: &str, action: &str, email: &str) -> Url {
    let mut url = with_segments(base, &["activities", activity, action]);
    url.query_pairs_mut().clear().append_pair("email", email);
    url
}

fn with_segments(base: &Url, segments: &[&str]) -> Url {
    let mut url = base.clone();
    url.set_query(None);
    url.set_fragment(None);
    if let Ok(mut path) = url.path_segments_mut() {
        path.pop_if_empty().extend(segments);
    }
    url
}
