#[derive(Debug, Clone, PartialEq)]
pub struct Gender {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
