use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub username: String,
    pub full_name: String,
    pub phone: Option<String>,
    pub role: String,
    pub area_id: Option<i32>,
    pub photo_url: Option<String>,
    pub active: bool,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct PaginatedUsersDto {
    pub users: Vec<UserDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateUserDto {
    pub username: String,
    pub password: Option<String>, // omitted -> server generates a temporary one
    pub full_name: String,
    pub phone: Option<String>,
    pub role: String,
    pub area_id: Option<i32>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreatedUserDto {
    pub user: UserDto,
    pub temporary_password: Option<String>, // only present when the server generated it
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct UpdateUserDto {
    pub full_name: String,
    pub phone: Option<String>,
    pub role: String,
    pub area_id: Option<i32>,
    pub active: bool,
}
