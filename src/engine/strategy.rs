//! Strategy selection and weight profiles.

use std::fmt;

/// Named weighting strategy.
///
/// Each strategy resolves to one fixed [`WeightProfile`]; there is no
/// runtime-tunable weighting. Unknown wire names fall back to
/// [`Strategy::SmartBalance`] rather than erroring, so a caller passing a
/// misspelled strategy still gets a ranking.
///
/// # Examples
///
/// ```
/// use taskrank::engine::Strategy;
///
/// assert_eq!(Strategy::from_name("fastest_wins"), Strategy::FastestWins);
/// assert_eq!(Strategy::from_name("does-not-exist"), Strategy::SmartBalance);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Strategy {
    /// Balanced default: urgency-led, with importance close behind.
    #[default]
    SmartBalance,

    /// Favors low-effort tasks (quick wins dominate).
    FastestWins,

    /// Favors high-importance tasks.
    HighImpact,

    /// Deadline proximity dominates everything else.
    DeadlineDriven,
}

impl Strategy {
    /// All strategies, in wire-name order.
    pub const ALL: [Strategy; 4] = [
        Strategy::SmartBalance,
        Strategy::FastestWins,
        Strategy::HighImpact,
        Strategy::DeadlineDriven,
    ];

    /// Resolves a wire name; anything unrecognized falls back to
    /// [`Strategy::SmartBalance`].
    pub fn from_name(name: &str) -> Self {
        match name {
            "smart_balance" => Strategy::SmartBalance,
            "fastest_wins" => Strategy::FastestWins,
            "high_impact" => Strategy::HighImpact,
            "deadline_driven" => Strategy::DeadlineDriven,
            _ => Strategy::SmartBalance,
        }
    }

    /// The wire name of this strategy.
    pub fn name(self) -> &'static str {
        match self {
            Strategy::SmartBalance => "smart_balance",
            Strategy::FastestWins => "fastest_wins",
            Strategy::HighImpact => "high_impact",
            Strategy::DeadlineDriven => "deadline_driven",
        }
    }

    /// The fixed weight profile for this strategy
    /// (urgency / importance / effort / dependencies).
    pub fn weights(self) -> WeightProfile {
        match self {
            Strategy::SmartBalance => WeightProfile {
                urgency: 0.4,
                importance: 0.3,
                effort: 0.2,
                dependencies: 0.1,
            },
            Strategy::FastestWins => WeightProfile {
                urgency: 0.2,
                importance: 0.2,
                effort: 0.5,
                dependencies: 0.1,
            },
            Strategy::HighImpact => WeightProfile {
                urgency: 0.2,
                importance: 0.6,
                effort: 0.1,
                dependencies: 0.1,
            },
            Strategy::DeadlineDriven => WeightProfile {
                urgency: 0.7,
                importance: 0.1,
                effort: 0.1,
                dependencies: 0.1,
            },
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Relative influence of each score component on the composite.
///
/// The invariant (non-negative weights summing to 1) guarantees the
/// composite stays in `[0, 1]` and that an all-neutral task composites to
/// exactly the neutral score under every strategy.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeightProfile {
    /// Weight of the urgency component.
    pub urgency: f64,
    /// Weight of the importance component.
    pub importance: f64,
    /// Weight of the effort component.
    pub effort: f64,
    /// Weight of the dependency component.
    pub dependencies: f64,
}

impl WeightProfile {
    /// Sum of the four weights.
    pub fn total(&self) -> f64 {
        self.urgency + self.importance + self.effort + self.dependencies
    }

    /// Validates the profile invariant.
    pub fn validate(&self) -> Result<(), String> {
        let weights = [
            ("urgency", self.urgency),
            ("importance", self.importance),
            ("effort", self.effort),
            ("dependencies", self.dependencies),
        ];
        for (name, weight) in weights {
            if weight < 0.0 {
                return Err(format!("{name} weight must be non-negative, got {weight}"));
            }
        }
        let total = self.total();
        if (total - 1.0).abs() > 1e-9 {
            return Err(format!("weights must sum to 1.0, got {total}"));
        }
        Ok(())
    }
}
