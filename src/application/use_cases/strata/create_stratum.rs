use crate::application::dto::catalog::StratumInput;
use crate::application::ports::stratum_repository::StratumRepository;
use crate::application::validation::{ValidationError, normalize_description, normalize_name};
use crate::domain::catalog::stratum::{MAX_RANK, MIN_RANK, Stratum};

pub struct CreateStratum<'a, R: StratumRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: StratumRepository + ?Sized> CreateStratum<'a, R> {
    pub async fn execute(&self, input: StratumInput) -> anyhow::Result<Stratum> {
        let input = validate(input)?;
        self.repo.create(&input).await
    }
}

pub fn validate(input: StratumInput) -> Result<StratumInput, ValidationError> {
    if !(MIN_RANK..=MAX_RANK).contains(&input.rank) {
        return Err(ValidationError::new(
            "rank",
            format!("must be between {MIN_RANK} and {MAX_RANK}"),
        ));
    }
    Ok(StratumInput {
        name: normalize_name(&input.name)?,
        description: normalize_description(input.description.as_deref())?,
        rank: input.rank,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rank_bounds_are_inclusive() {
        for rank in [MIN_RANK, MAX_RANK] {
            let input = StratumInput {
                name: "Nobleza".into(),
                description: None,
                rank,
            };
            assert!(validate(input).is_ok());
        }
        let input = StratumInput {
            name: "Nobleza".into(),
            description: None,
            rank: MAX_RANK + 1,
        };
        assert_eq!(validate(input).unwrap_err().field, "rank");
    }
}
