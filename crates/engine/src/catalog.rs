//! Status catalog: maps review status codes to the verdict shown to the student.

use homework_common::error::BotError;

/// Review statuses the API is known to report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HomeworkStatus {
    Approved,
    Reviewing,
    Rejected,
}

impl HomeworkStatus {
    /// Parse a raw status code from the API.
    pub fn from_code(code: &str) -> Result<Self, BotError> {
        match code {
            "approved" => Ok(Self::Approved),
            "reviewing" => Ok(Self::Reviewing),
            "rejected" => Ok(Self::Rejected),
            other => Err(BotError::UnknownStatus(other.to_string())),
        }
    }

    pub fn verdict(self) -> &'static str {
        match self {
            Self::Approved => "Работа проверена: ревьюеру всё понравилось. Ура!",
            Self::Reviewing => "Работа взята на проверку ревьюером.",
            Self::Rejected => "Работа проверена: у ревьюера есть замечания.",
        }
    }
}

/// Verdict text for a raw status code.
pub fn verdict_for(code: &str) -> Result<&'static str, BotError> {
    HomeworkStatus::from_code(code).map(HomeworkStatus::verdict)
}
