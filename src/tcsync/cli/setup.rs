use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use tcsync::model::Status;

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format: "0.3.2" for releases, "0.3.2@abc1234 2024-01-15 14:30" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum StatusArg {
    Pass,
    Fail,
    Blocked,
    #[value(name = "not_run")]
    NotRun,
}

impl From<StatusArg> for Status {
    fn from(arg: StatusArg) -> Self {
        match arg {
            StatusArg::Pass => Status::Pass,
            StatusArg::Fail => Status::Fail,
            StatusArg::Blocked => Status::Blocked,
            StatusArg::NotRun => Status::NotRun,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "tcsync", bin_name = "tcsync", version = get_version())]
#[command(
    about = "Update the QA test checklist from test results",
    long_about = None,
    after_help = "Examples:\n  \
tcsync --test-case TC-001 --status pass\n  \
tcsync --file test_results.json\n  \
tcsync --from-results\n  \
tcsync --interactive"
)]
pub struct Cli {
    /// Test case ID (e.g. TC-001)
    #[arg(short = 't', long = "test-case", value_name = "ID")]
    pub test_case: Option<String>,

    /// Test status
    #[arg(short, long, value_enum)]
    pub status: Option<StatusArg>,

    /// Read test results from a JSON file
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Read test results from the results document
    #[arg(short = 'r', long)]
    pub from_results: bool,

    /// Interactive mode
    #[arg(short, long)]
    pub interactive: bool,

    /// Checklist to update (overrides config)
    #[arg(short, long, value_name = "PATH", help_heading = "Options")]
    pub checklist: Option<PathBuf>,

    /// Results document to read (overrides config)
    #[arg(long, value_name = "PATH", help_heading = "Options")]
    pub results: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, help_heading = "Options")]
    pub verbose: bool,
}

/// What a run does, picked from the flags in priority order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    Interactive,
    Single { test_case: String, status: Status },
    Json(PathBuf),
    FromResults,
}

impl Cli {
    /// `None` when no usable flag combination was given.
    pub fn mode(&self) -> Option<Mode> {
        if self.interactive {
            return Some(Mode::Interactive);
        }
        if let (Some(test_case), Some(status)) = (&self.test_case, self.status) {
            return Some(Mode::Single {
                test_case: test_case.clone(),
                status: status.into(),
            });
        }
        if let Some(file) = &self.file {
            return Some(Mode::Json(file.clone()));
        }
        if self.from_results {
            return Some(Mode::FromResults);
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        let mut argv = vec!["tcsync"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).unwrap()
    }

    #[test]
    fn single_update_with_short_flags() {
        let cli = parse(&["-t", "TC-001", "-s", "pass"]);
        assert_eq!(
            cli.mode(),
            Some(Mode::Single {
                test_case: "TC-001".into(),
                status: Status::Pass
            })
        );
    }

    #[test]
    fn not_run_keeps_its_underscore() {
        let cli = parse(&["--test-case", "TC-001", "--status", "not_run"]);
        assert_eq!(cli.status, Some(StatusArg::NotRun));
    }

    #[test]
    fn status_is_restricted() {
        let err = Cli::try_parse_from(["tcsync", "-t", "TC-001", "-s", "skipped"]);
        assert!(err.is_err());
    }

    #[test]
    fn interactive_wins_over_everything() {
        let cli = parse(&["-i", "-t", "TC-001", "-s", "pass", "-f", "r.json", "-r"]);
        assert_eq!(cli.mode(), Some(Mode::Interactive));
    }

    #[test]
    fn pair_wins_over_file_and_results() {
        let cli = parse(&["-t", "TC-001", "-s", "fail", "-f", "r.json", "-r"]);
        assert!(matches!(cli.mode(), Some(Mode::Single { .. })));
    }

    #[test]
    fn incomplete_pair_falls_through() {
        let cli = parse(&["-t", "TC-001", "-f", "r.json"]);
        assert_eq!(cli.mode(), Some(Mode::Json(PathBuf::from("r.json"))));

        let cli = parse(&["-s", "pass", "-r"]);
        assert_eq!(cli.mode(), Some(Mode::FromResults));
    }

    #[test]
    fn nothing_selected() {
        assert_eq!(parse(&[]).mode(), None);
        assert_eq!(parse(&["-t", "TC-001"]).mode(), None);
        assert_eq!(parse(&["-v", "-c", "qa.md"]).mode(), None);
    }
}
