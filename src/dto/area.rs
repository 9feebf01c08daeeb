use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct AreaDto {
    pub id: i32,
    pub name: String,
    pub region_id: i32,
    pub overseer_id: Option<i32>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateAreaDto {
    pub name: String,
    pub region_id: i32,
    pub overseer_id: Option<i32>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct UpdateAreaDto {
    pub name: String,
    pub overseer_id: Option<i32>,
}
