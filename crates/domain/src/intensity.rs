use std::fmt;

/// Qualitative effort of a load expressed as a percentage of the one-rep max.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Intensity {
    Light,
    LightToModerate,
    Moderate,
    ModerateToHeavy,
    Heavy,
    VeryHeavy,
}

/// Lower bounds of each band, evaluated from the heaviest band downwards.
const BANDS: [(f64, Intensity); 5] = [
    (90.0, Intensity::VeryHeavy),
    (80.0, Intensity::Heavy),
    (70.0, Intensity::ModerateToHeavy),
    (60.0, Intensity::Moderate),
    (50.0, Intensity::LightToModerate),
];

impl Intensity {
    #[must_use]
    pub fn classify(percentage: f64) -> Self {
        BANDS
            .iter()
            .find(|(lower_bound, _)| percentage >= *lower_bound)
            .map_or(Intensity::Light, |(_, intensity)| *intensity)
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Intensity::Light => "Light",
            Intensity::LightToModerate => "Light to Moderate",
            Intensity::Moderate => "Moderate",
            Intensity::ModerateToHeavy => "Moderate to Heavy",
            Intensity::Heavy => "Heavy",
            Intensity::VeryHeavy => "Very Heavy",
        }
    }

    #[must_use]
    pub fn color(self) -> &'static str {
        match self {
            Intensity::Light => "#87CEEB",
            Intensity::LightToModerate => "#32CD32",
            Intensity::Moderate => "#ADFF2F",
            Intensity::ModerateToHeavy => "#FFFF00",
            Intensity::Heavy => "#FFA500",
            Intensity::VeryHeavy => "#FF4D4D",
        }
    }
}

impl fmt::Display for Intensity {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
