pub const DEFAULT_LIMIT: i64 = 50;
pub const MAX_LIMIT: i64 = 200;

/// Listing parameters shared by the catalog resources.
#[derive(Debug, Clone, PartialEq)]
pub struct ListFilter {
    pub name_contains: Option<String>,
    pub limit: i64,
    pub offset: i64,
}

impl Default for ListFilter {
    fn default() -> Self {
        Self {
            name_contains: None,
            limit: DEFAULT_LIMIT,
            offset: 0,
        }
    }
}

impl ListFilter {
    pub fn new(q: Option<String>, limit: Option<i64>, offset: Option<i64>) -> Self {
        Self {
            name_contains: q
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
            limit: limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT),
            offset: offset.unwrap_or(0).max(0),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GenderInput {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SpeciesInput {
    pub name: String,
    pub description: Option<String>,
    pub average_lifespan: Option<i32>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StratumInput {
    pub name: String,
    pub description: Option<String>,
    pub rank: i32,
}
