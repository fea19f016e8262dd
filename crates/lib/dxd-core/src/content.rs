//! The content tool dispatcher.
//!
//! Each operation binds its arguments as query variables, executes the
//! matching template exactly once, projects the result, and seals the
//! outcome at a single boundary: callers always receive a string. The only
//! two error shapes are the fixed request-failed sentinel and
//! `Error: [<message>]` for arguments rejected before the query is issued.

use dxd_graphql::types::{RecommendResult, SearchResultsConnection, Toc, Topic};
use dxd_graphql::{GraphQlTransport, TransportError, queries};
use serde_json::json;
use tracing::{error, info};

use crate::project;

/// Fixed sentinel returned for any transport or mapping failure.
pub const REQUEST_FAILED: &str = "Error: [Request failed]";

enum OpError {
    /// Rejected before the query was issued; the message surfaces verbatim.
    Invalid(String),
    Transport(TransportError),
    Serialize(serde_json::Error),
}

impl From<TransportError> for OpError {
    fn from(err: TransportError) -> Self {
        Self::Transport(err)
    }
}

impl From<serde_json::Error> for OpError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialize(err)
    }
}

/// Stateless dispatcher for the five content operations.
///
/// Holds nothing but the transport; every call is independent and the
/// transport await is its only suspension point.
#[derive(Clone)]
pub struct ContentService<T: GraphQlTransport> {
    transport: T,
}

impl<T: GraphQlTransport> ContentService<T> {
    pub const fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Table of contents for a publication as a JSON object; `{}` when the
    /// publication has none.
    pub async fn get_toc(&self, publication_id: i64) -> String {
        let outcome = self.fetch_toc(publication_id).await;
        seal("get_toc", &format!("publicationId={publication_id}"), outcome)
    }

    /// Topic content by publication and topic ID as a JSON object; `{}`
    /// when no such topic exists.
    pub async fn get_topic_content_by_id(&self, publication_id: i64, topic_id: i64) -> String {
        let outcome = self.fetch_topic_by_id(publication_id, topic_id).await;
        seal(
            "get_topic_content_by_id",
            &format!("publicationId={publication_id} topicId={topic_id}"),
            outcome,
        )
    }

    /// Topic content by publication ID and topic URL as a JSON object; `{}`
    /// when no such topic exists.
    pub async fn get_topic_content_by_url(&self, publication_id: i64, url: &str) -> String {
        let outcome = self.fetch_topic_by_url(publication_id, url).await;
        seal(
            "get_topic_content_by_url",
            &format!("publicationId={publication_id} url={url}"),
            outcome,
        )
    }

    /// Ranked search results as a JSON array; `[]` when nothing matches.
    pub async fn search_topics(&self, term: &str) -> String {
        let outcome = self.fetch_search(term).await;
        seal("search_topics", &format!("term={term}"), outcome)
    }

    /// Recommended topics for a composite topic key as a JSON array; `[]`
    /// when there are none.
    pub async fn get_recommendations(&self, topic: &str) -> String {
        let outcome = self.fetch_recommendations(topic).await;
        seal("get_recommendations", &format!("topic={topic}"), outcome)
    }

    async fn fetch_toc(&self, publication_id: i64) -> Result<String, OpError> {
        let toc: Option<Toc> = self
            .transport
            .execute(&queries::TOC, json!({ "publicationId": publication_id }))
            .await?;
        if toc.is_none() {
            info!(publication_id, "no TOC found");
        }
        Ok(project::toc(toc)?)
    }

    async fn fetch_topic_by_id(
        &self,
        publication_id: i64,
        topic_id: i64,
    ) -> Result<String, OpError> {
        let variables = json!({ "publicationId": publication_id, "topicId": topic_id });
        let topic: Option<Topic> = self
            .transport
            .execute(&queries::TOPIC_BY_ID, variables)
            .await?;
        if topic.is_none() {
            info!(publication_id, topic_id, "no topic content found");
        }
        Ok(project::topic(topic)?)
    }

    async fn fetch_topic_by_url(&self, publication_id: i64, url: &str) -> Result<String, OpError> {
        ensure_non_empty(url, "url")?;
        let variables = json!({ "publicationId": publication_id, "url": url });
        let topic: Option<Topic> = self
            .transport
            .execute(&queries::TOPIC_BY_URL, variables)
            .await?;
        if topic.is_none() {
            info!(publication_id, url, "no topic content found");
        }
        Ok(project::topic(topic)?)
    }

    async fn fetch_search(&self, term: &str) -> Result<String, OpError> {
        ensure_non_empty(term, "term")?;
        let connection: Option<SearchResultsConnection> = self
            .transport
            .execute(&queries::SEARCH, json!({ "term": term }))
            .await?;
        if connection.is_none() {
            info!(term, "no search results found");
        }
        Ok(project::search(connection)?)
    }

    async fn fetch_recommendations(&self, topic: &str) -> Result<String, OpError> {
        ensure_non_empty(topic, "topic")?;
        let result: Option<RecommendResult> = self
            .transport
            .execute(&queries::RECOMMEND, json!({ "topic": topic }))
            .await?;
        if result.is_none() {
            info!(topic, "no recommendation results found");
        }
        Ok(project::recommendations(result)?)
    }
}

fn ensure_non_empty(value: &str, name: &str) -> Result<(), OpError> {
    if value.trim().is_empty() {
        return Err(OpError::Invalid(format!("{name} must not be empty")));
    }
    Ok(())
}

/// The fail-soft boundary: exactly one log event per failure, and only the
/// two fixed error-string shapes ever leave this function.
fn seal(operation: &'static str, context: &str, outcome: Result<String, OpError>) -> String {
    match outcome {
        Ok(payload) => payload,
        Err(OpError::Invalid(message)) => {
            error!(operation, context, "invalid arguments: {message}");
            format!("Error: [{message}]")
        }
        Err(OpError::Transport(err)) => {
            error!(operation, context, "request failed: {err}");
            REQUEST_FAILED.to_string()
        }
        Err(OpError::Serialize(err)) => {
            error!(operation, context, "failed to encode result: {err}");
            REQUEST_FAILED.to_string()
        }
    }
}
