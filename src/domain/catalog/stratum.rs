/// A social stratum. Lower `rank` means higher standing.
#[derive(Debug, Clone, PartialEq)]
pub struct Stratum {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub rank: i32,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

pub const MIN_RANK: i32 = 0;
pub const MAX_RANK: i32 = 100;
