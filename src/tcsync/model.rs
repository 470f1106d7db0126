use std::fmt;
use std::str::FromStr;

/// Every test case identifier starts with this prefix (`TC-001`, `TC-002~TC-007`).
pub const TEST_CASE_PREFIX: &str = "TC-";

/// Outcome recorded for a test case.
///
/// The checklist only has two visual states, so only [`Status::Pass`] checks an
/// entry. The other outcomes leave it unchecked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    Pass,
    Fail,
    Blocked,
    NotRun,
}

impl Status {
    pub const ALL: [Status; 4] = [Status::Pass, Status::Fail, Status::Blocked, Status::NotRun];

    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Pass => "pass",
            Status::Fail => "fail",
            Status::Blocked => "blocked",
            Status::NotRun => "not_run",
        }
    }

    /// Whether an entry with this outcome is rendered as `[x]`.
    pub fn is_checked(&self) -> bool {
        matches!(self, Status::Pass)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownStatus(pub String);

impl fmt::Display for UnknownStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown status '{}'", self.0)
    }
}

impl std::error::Error for UnknownStatus {}

impl FromStr for Status {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pass" => Ok(Status::Pass),
            "fail" => Ok(Status::Fail),
            "blocked" => Ok(Status::Blocked),
            "not_run" => Ok(Status::NotRun),
            _ => Err(UnknownStatus(s.to_string())),
        }
    }
}

/// One (identifier, status) pair taken from any result source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultRecord {
    pub test_case_id: String,
    pub status: Status,
}

impl ResultRecord {
    pub fn new(test_case_id: impl Into<String>, status: Status) -> Self {
        Self {
            test_case_id: test_case_id.into(),
            status,
        }
    }
}

/// Loose check used to validate user input; the checklist itself decides
/// whether the identifier actually exists.
pub fn is_test_case_id(input: &str) -> bool {
    input.starts_with(TEST_CASE_PREFIX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_statuses_case_insensitively() {
        assert_eq!("PASS".parse::<Status>().unwrap(), Status::Pass);
        assert_eq!("Blocked".parse::<Status>().unwrap(), Status::Blocked);
        assert_eq!("not_run".parse::<Status>().unwrap(), Status::NotRun);
    }

    #[test]
    fn rejects_unknown_status() {
        let err = "skipped".parse::<Status>().unwrap_err();
        assert_eq!(err.to_string(), "Unknown status 'skipped'");
    }

    #[test]
    fn only_pass_is_checked() {
        let checked: Vec<_> = Status::ALL.iter().filter(|s| s.is_checked()).collect();
        assert_eq!(checked, vec![&Status::Pass]);
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for status in Status::ALL {
            assert_eq!(status.to_string().parse::<Status>().unwrap(), status);
        }
    }

    #[test]
    fn test_case_prefix() {
        assert!(is_test_case_id("TC-001"));
        assert!(is_test_case_id("TC-002~TC-007"));
        assert!(!is_test_case_id("tc-001"));
        assert!(!is_test_case_id("001"));
    }
}
