use serde::{Deserialize, Serialize};

use crate::entity::topic;

/// Query parameters for listing topics.
#[derive(Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct TopicListQuery {
    /// Owner whose topics are listed; must match the token.
    #[param(example = 42)]
    pub user_id: i32,
}

/// Request body for creating a topic.
#[derive(Deserialize, utoipa::ToSchema)]
pub struct CreateTopicRequest {
    #[schema(example = 42)]
    pub user_id: i32,
    /// Topic title (1-256 characters).
    #[schema(example = "Budget travel in Portugal")]
    pub title: String,
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct TopicSummary {
    #[schema(example = 7)]
    pub id: i32,
    #[schema(example = "Budget travel in Portugal")]
    pub title: String,
}

impl From<topic::Model> for TopicSummary {
    fn from(m: topic::Model) -> Self {
        Self {
            id: m.id,
            title: m.title,
        }
    }
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct TopicListResponse {
    pub topics: Vec<TopicSummary>,
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct CreateTopicResponse {
    #[schema(example = 7)]
    pub topic_id: i32,
    #[schema(example = "Topic created successfully")]
    pub message: String,
}
