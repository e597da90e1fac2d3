/// Raw head count for one category (a gender, species or stratum).
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryCount {
    pub id: i32,
    pub name: String,
    pub count: i64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryShare {
    pub id: i32,
    pub name: String,
    pub count: i64,
    pub percentage: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PopulationTotals {
    pub genders: i64,
    pub species: i64,
    pub strata: i64,
    pub inhabitants: i64,
    pub average_age: Option<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SpeciesBreakdown {
    pub species_id: i32,
    pub species_name: String,
    pub total: i64,
    pub average_age: Option<f64>,
    pub by_gender: Vec<CategoryShare>,
    pub by_stratum: Vec<CategoryShare>,
}
