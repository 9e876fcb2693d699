use serde::{Deserialize, Serialize};
use std::fmt;

/// The eleven fixed rating axes a comment can score an organization on.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Appearance,
    Lighting,
    Smell,
    Temperature,
    Tactility,
    Signage,
    Intuitiveness,
    StaffAttitude,
    PeopleDensity,
    SelfService,
    Calmness,
}

impl Dimension {
    pub const ALL: [Dimension; 11] = [
        Dimension::Appearance,
        Dimension::Lighting,
        Dimension::Smell,
        Dimension::Temperature,
        Dimension::Tactility,
        Dimension::Signage,
        Dimension::Intuitiveness,
        Dimension::StaffAttitude,
        Dimension::PeopleDensity,
        Dimension::SelfService,
        Dimension::Calmness,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Dimension::Appearance => "appearance",
            Dimension::Lighting => "lighting",
            Dimension::Smell => "smell",
            Dimension::Temperature => "temperature",
            Dimension::Tactility => "tactility",
            Dimension::Signage => "signage",
            Dimension::Intuitiveness => "intuitiveness",
            Dimension::StaffAttitude => "staff_attitude",
            Dimension::PeopleDensity => "people_density",
            Dimension::SelfService => "self_service",
            Dimension::Calmness => "calmness",
        }
    }

    /// Resolves a caller-supplied name to a dimension.
    ///
    /// Matching is case-insensitive. Multi-word dimensions accept both the
    /// canonical snake_case identifier and the separator-free alias
    /// ("staff_attitude" and "staffattitude" resolve to the same axis).
    pub fn resolve(name: &str) -> Option<Dimension> {
        match name.to_lowercase().as_str() {
            "appearance" => Some(Dimension::Appearance),
            "lighting" => Some(Dimension::Lighting),
            "smell" => Some(Dimension::Smell),
            "temperature" => Some(Dimension::Temperature),
            "tactility" => Some(Dimension::Tactility),
            "signage" => Some(Dimension::Signage),
            "intuitiveness" => Some(Dimension::Intuitiveness),
            "staff_attitude" | "staffattitude" => Some(Dimension::StaffAttitude),
            "people_density" | "peopledensity" => Some(Dimension::PeopleDensity),
            "self_service" | "selfservice" => Some(Dimension::SelfService),
            "calmness" => Some(Dimension::Calmness),
            _ => None,
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
