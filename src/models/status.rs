//! Review status values and their verdict messages.

use std::fmt;
use std::str::FromStr;

use crate::error::AppError;

/// Review state of a homework as reported by the status API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewStatus {
    Approved,
    Reviewing,
    Rejected,
}

impl ReviewStatus {
    /// Human-readable verdict sentence sent to the chat.
    pub fn verdict(self) -> &'static str {
        match self {
            ReviewStatus::Approved => "Работа проверена: ревьюеру всё понравилось. Ура!",
            ReviewStatus::Reviewing => "Работа взята на проверку ревьюером.",
            ReviewStatus::Rejected => "Работа проверена: у ревьюера есть замечания.",
        }
    }

    /// Wire representation of the status.
    pub fn as_str(self) -> &'static str {
        match self {
            ReviewStatus::Approved => "approved",
            ReviewStatus::Reviewing => "reviewing",
            ReviewStatus::Rejected => "rejected",
        }
    }
}

impl FromStr for ReviewStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "approved" => Ok(ReviewStatus::Approved),
            "reviewing" => Ok(ReviewStatus::Reviewing),
            "rejected" => Ok(ReviewStatus::Rejected),
            other => Err(AppError::UnknownStatus(other.to_string())),
        }
    }
}

impl fmt::Display for ReviewStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_statuses() {
        assert_eq!("approved".parse::<ReviewStatus>().unwrap(), ReviewStatus::Approved);
        assert_eq!("reviewing".parse::<ReviewStatus>().unwrap(), ReviewStatus::Reviewing);
        assert_eq!("rejected".parse::<ReviewStatus>().unwrap(), ReviewStatus::Rejected);
    }

    #[test]
    fn rejects_unknown_status() {
        let err = "graded".parse::<ReviewStatus>().unwrap_err();
        assert!(matches!(err, AppError::UnknownStatus(s) if s == "graded"));
    }

    #[test]
    fn case_is_significant() {
        assert!("Approved".parse::<ReviewStatus>().is_err());
    }

    #[test]
    fn verdict_for_reviewing() {
        assert_eq!(
            ReviewStatus::Reviewing.verdict(),
            "Работа взята на проверку ревьюером."
        );
    }
}
