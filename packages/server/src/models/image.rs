use serde::{Deserialize, Serialize};

#[derive(Deserialize, utoipa::ToSchema)]
pub struct ImageRequest {
    #[schema(example = "A tram climbing a hill in Lisbon at sunset")]
    pub prompt: String,
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct ImageResponse {
    #[schema(example = "https://s3.us-east-1.amazonaws.com/webbucket.new/uploads/generated_image_42.png")]
    pub image_url: String,
}
