#[derive(Debug, Clone, PartialEq)]
pub struct Species {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    /// Expected lifespan in years, when known.
    pub average_lifespan: Option<i32>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
