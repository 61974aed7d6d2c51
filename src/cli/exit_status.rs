use std::process::ExitCode;

/// Exit status following common conventions for linter tools.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// The file was analyzed and came back clean.
    Success,
    /// The analyzer reported findings, syntax errors included.
    Findings,
    /// The command itself failed (unreadable file, bad invocation).
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Findings => ExitCode::from(1),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
