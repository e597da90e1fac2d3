use crate::application::dto::catalog::StratumInput;
use crate::application::ports::stratum_repository::StratumRepository;
use crate::application::use_cases::strata::create_stratum::validate;
use crate::domain::catalog::stratum::Stratum;

pub struct UpdateStratum<'a, R: StratumRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: StratumRepository + ?Sized> UpdateStratum<'a, R> {
    pub async fn execute(&self, id: i32, input: StratumInput) -> anyhow::Result<Option<Stratum>> {
        let input = validate(input)?;
        self.repo.update(id, &input).await
    }
}
