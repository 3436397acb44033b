use std::path::PathBuf;

/// Input-validation failures. Each one is reported as a single
/// `{"error": ...}` document and exits with status 2.
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    #[error("project root not found: {}", .0.display())]
    ProjectRootNotFound(PathBuf),

    #[error("html file not found: {}", .0.display())]
    HtmlNotFound(PathBuf),

    #[error("input must be a .html file")]
    NotHtml(PathBuf),

    #[error("failed to read html: {source}")]
    HtmlUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read config {}: {source}", .path.display())]
    ConfigUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {}: {message}", .path.display())]
    ConfigInvalid { path: PathBuf, message: String },
}

impl ScanError {
    pub const EXIT_CODE: i32 = 2;

    pub fn exit_code(&self) -> i32 {
        Self::EXIT_CODE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = ScanError::ProjectRootNotFound(PathBuf::from("/nope"));
        assert_eq!(err.to_string(), "project root not found: /nope");

        let err = ScanError::NotHtml(PathBuf::from("draft.htm"));
        assert_eq!(err.to_string(), "input must be a .html file");
        assert_eq!(err.exit_code(), 2);
    }
}
