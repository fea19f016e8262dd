use dxd_graphql::GraphQlTransport;
use rmcp::{
    ErrorData,
    handler::server::wrapper::Parameters,
    model::{CallToolResult, Content},
    schemars,
    tool,
    tool_router,
};
use serde::{Deserialize, Serialize};

use crate::DxdMcp;

/// Parameters for fetching a publication's table of contents.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct GetTocParams {
    /// The publication ID.
    pub publication_id: i64,
}

/// Parameters for fetching topic content by topic ID.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct GetTopicByIdParams {
    /// The publication ID.
    pub publication_id: i64,
    /// The topic ID.
    pub topic_id: i64,
}

/// Parameters for fetching topic content by topic URL.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct GetTopicByUrlParams {
    /// The publication ID.
    pub publication_id: i64,
    /// The topic URL.
    pub url: String,
}

/// Parameters for searching topics.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct SearchTopicsParams {
    /// The terms to search for.
    pub term: String,
}

/// Parameters for topic recommendations.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct GetRecommendationsParams {
    /// The topic to get recommendations for, in the format
    /// 'ish_<publicationId>-<topicId>-16'.
    pub topic: String,
}

#[tool_router(router = tool_router_content, vis = "pub")]
impl<T: GraphQlTransport> DxdMcp<T> {
    #[tool(description = "Gets the Table of Content for a given publication ID.")]
    async fn get_toc(
        &self,
        Parameters(params): Parameters<GetTocParams>,
    ) -> Result<CallToolResult, ErrorData> {
        let payload = self.service.get_toc(params.publication_id).await;
        Ok(CallToolResult::success(vec![Content::text(payload)]))
    }

    #[tool(description = "Get the content for a specific topic given its publication ID and topic ID.")]
    async fn get_topic_content_by_id(
        &self,
        Parameters(params): Parameters<GetTopicByIdParams>,
    ) -> Result<CallToolResult, ErrorData> {
        let payload = self
            .service
            .get_topic_content_by_id(params.publication_id, params.topic_id)
            .await;
        Ok(CallToolResult::success(vec![Content::text(payload)]))
    }

    #[tool(description = "Get the content for a specific topic given its publication ID and URL.")]
    async fn get_topic_content_by_url(
        &self,
        Parameters(params): Parameters<GetTopicByUrlParams>,
    ) -> Result<CallToolResult, ErrorData> {
        let payload = self
            .service
            .get_topic_content_by_url(params.publication_id, &params.url)
            .await;
        Ok(CallToolResult::success(vec![Content::text(payload)]))
    }

    #[tool(description = "Search all topics.")]
    async fn search_topics(
        &self,
        Parameters(params): Parameters<SearchTopicsParams>,
    ) -> Result<CallToolResult, ErrorData> {
        let payload = self.service.search_topics(&params.term).await;
        Ok(CallToolResult::success(vec![Content::text(payload)]))
    }

    #[tool(description = "Get recommendations for a given topic.")]
    async fn get_recommendations(
        &self,
        Parameters(params): Parameters<GetRecommendationsParams>,
    ) -> Result<CallToolResult, ErrorData> {
        let payload = self.service.get_recommendations(&params.topic).await;
        Ok(CallToolResult::success(vec![Content::text(payload)]))
    }
}
