use thiserror::Error;

/// Everything that can go wrong while correlating pool health with slots.
///
/// Only `UnsupportedPlatform` and `Config` stop a run. The others are logged
/// where they occur and the affected disk is left out of the correlation.
#[derive(Debug, Error)]
pub enum LocateError {
    #[error("`{command}` failed ({status}): {stderr}")]
    ToolInvocation {
        command: String,
        status:  String,
        stderr:  String,
    },

    #[error("cannot resolve {path}: {reason}")]
    ResolutionGap { path: String, reason: String },

    #[error("{tool} report for {device} has no {field} field")]
    MissingField {
        tool:   &'static str,
        device: String,
        field:  &'static str,
    },

    #[error("malformed {tool} line ({found} fields, need {expected}): {line:?}")]
    MalformedLine {
        tool:     &'static str,
        line:     String,
        found:    usize,
        expected: usize,
    },

    #[error("unsupported platform `{0}`: no alias or identity strategy defined")]
    UnsupportedPlatform(String),

    #[error("config {path}: {reason}")]
    Config { path: String, reason: String },
}

impl LocateError {
    pub fn gap(path: &str, reason: impl Into<String>) -> Self {
        LocateError::ResolutionGap { path: path.to_string(), reason: reason.into() }
    }
}
