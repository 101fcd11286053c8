//! The five visit stages, in form order.

use serde::{Deserialize, Serialize};

/// One screen of the visit form. Strictly linear.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    ProductSelection,
    Availability,
    Quality,
    Prices,
    Incidents,
}

impl Stage {
    /// 1-based position shown in the step indicator.
    #[must_use]
    pub fn number(self) -> u8 {
        match self {
            Stage::ProductSelection => 1,
            Stage::Availability => 2,
            Stage::Quality => 3,
            Stage::Prices => 4,
            Stage::Incidents => 5,
        }
    }

    /// The stage after this one, or `None` from the last stage.
    #[must_use]
    pub fn next_stage(self) -> Option<Stage> {
        match self {
            Stage::ProductSelection => Some(Stage::Availability),
            Stage::Availability => Some(Stage::Quality),
            Stage::Quality => Some(Stage::Prices),
            Stage::Prices => Some(Stage::Incidents),
            Stage::Incidents => None,
        }
    }

    /// The stage before this one, or `None` from the first stage.
    #[must_use]
    pub fn previous_stage(self) -> Option<Stage> {
        match self {
            Stage::ProductSelection => None,
            Stage::Availability => Some(Stage::ProductSelection),
            Stage::Quality => Some(Stage::Availability),
            Stage::Prices => Some(Stage::Quality),
            Stage::Incidents => Some(Stage::Prices),
        }
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Stage::ProductSelection => "product selection",
            Stage::Availability => "availability",
            Stage::Quality => "quality",
            Stage::Prices => "prices",
            Stage::Incidents => "incidents",
        };
        write!(f, "{label}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stages_chain_forward_in_order() {
        let mut stage = Stage::ProductSelection;
        let mut seen = vec![stage];
        while let Some(next) = stage.next_stage() {
            seen.push(next);
            stage = next;
        }
        assert_eq!(
            seen,
            vec![
                Stage::ProductSelection,
                Stage::Availability,
                Stage::Quality,
                Stage::Prices,
                Stage::Incidents,
            ]
        );
    }

    #[test]
    fn previous_undoes_next() {
        for stage in [
            Stage::ProductSelection,
            Stage::Availability,
            Stage::Quality,
            Stage::Prices,
        ] {
            let next = stage.next_stage().unwrap();
            assert_eq!(next.previous_stage(), Some(stage));
        }
    }

    #[test]
    fn numbers_run_one_through_five() {
        assert_eq!(Stage::ProductSelection.number(), 1);
        assert_eq!(Stage::Incidents.number(), 5);
    }
}
