use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error on '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Commit does not exist: {0}")]
    CommitNotFound(String),

    #[error("Can't find '{}'", .0.display())]
    FileNotFound(PathBuf),

    #[error("Path is not valid UTF-8: {}", .0.display())]
    InvalidPath(PathBuf),

    #[error("Username is not set")]
    AuthorNotSet,

    #[error("No files are tracked")]
    NothingTracked,

    #[error("Nothing to commit")]
    NothingToCommit,
}

/// Coarse classification used by callers that only care about the failure family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    Io,
    NoOp,
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Io { .. } | Error::InvalidPath(_) => ErrorKind::Io,
            Error::CommitNotFound(_)
            | Error::FileNotFound(_)
            | Error::AuthorNotSet
            | Error::NothingTracked => ErrorKind::NotFound,
            Error::NothingToCommit => ErrorKind::NoOp,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds() {
        assert_eq!(Error::NothingToCommit.kind(), ErrorKind::NoOp);
        assert_eq!(
            Error::CommitNotFound("abc123".to_string()).kind(),
            ErrorKind::NotFound
        );
        assert_eq!(Error::AuthorNotSet.kind(), ErrorKind::NotFound);

        let io = Error::io(
            "vcs/log.txt",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert_eq!(io.kind(), ErrorKind::Io);
        assert!(io.to_string().contains("vcs/log.txt"));
    }
}
