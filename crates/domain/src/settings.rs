use crate::{DEFAULT_LADDER, ReadError, Unit, UpdateError};

#[allow(async_fn_in_trait)]
pub trait SettingsService {
    async fn get_settings(&self) -> Result<Settings, ReadError>;
    async fn set_settings(&self, settings: Settings) -> Result<Settings, UpdateError>;
}

#[allow(async_fn_in_trait)]
pub trait SettingsRepository {
    async fn read_settings(&self) -> Result<Settings, ReadError>;
    async fn write_settings(&self, settings: Settings) -> Result<Settings, UpdateError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub unit: Unit,
    pub ladder: Vec<u32>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            unit: Unit::Kg,
            ladder: DEFAULT_LADDER.to_vec(),
        }
    }
}

impl Settings {
    /// Percentage ladder for the calculator, falling back to the default when none is configured.
    #[must_use]
    pub fn ladder(&self) -> &[u32] {
        if self.ladder.is_empty() {
            DEFAULT_LADDER
        } else {
            &self.ladder
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[test]
    fn test_settings_default() {
        let settings = Settings::default();
        assert_eq!(settings.unit, Unit::Kg);
        assert_eq!(settings.ladder(), DEFAULT_LADDER);
    }

    #[rstest]
    #[case(vec![], DEFAULT_LADDER.to_vec())]
    #[case(vec![90, 80, 70], vec![90, 80, 70])]
    #[case(vec![50, 100], vec![50, 100])]
    fn test_settings_ladder(#[case] ladder: Vec<u32>, #[case] expected: Vec<u32>) {
        let settings = Settings {
            unit: Unit::Lbs,
            ladder,
        };
        assert_eq!(settings.ladder(), expected.as_slice());
    }
}
