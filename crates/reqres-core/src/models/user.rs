use serde::Deserialize;

/// One user record from the listing endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub avatar: Option<String>,
}

impl User {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Paged listing payload from `GET /api/users`.
#[derive(Debug, Clone, Deserialize)]
pub struct UserPage {
    pub page: i64,
    pub per_page: i64,
    pub total: i64,
    pub total_pages: i64,
    #[serde(default)]
    pub data: Vec<User>,
}
