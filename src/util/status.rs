use std::fmt;

/// Failure categories surfaced by record sources and the merge engine.
///
/// Stream exhaustion is deliberately not a code here: an exhausted source
/// reports `Ok(None)` through the iterator contract, so end-of-stream can
/// never be confused with a failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Code {
    Corruption,
    InvalidArgument,
    IOError,
    Aborted,
}

#[derive(Debug, Clone)]
pub struct Status {
    code: Code,
    message: Option<String>,
}

impl Status {
    pub fn corruption(msg: impl Into<String>) -> Self {
        Status {
            code: Code::Corruption,
            message: Some(msg.into()),
        }
    }

    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Status {
            code: Code::InvalidArgument,
            message: Some(msg.into()),
        }
    }

    pub fn io_error(msg: impl Into<String>) -> Self {
        Status {
            code: Code::IOError,
            message: Some(msg.into()),
        }
    }

    pub fn aborted(msg: impl Into<String>) -> Self {
        Status {
            code: Code::Aborted,
            message: Some(msg.into()),
        }
    }

    pub fn is_corruption(&self) -> bool {
        self.code == Code::Corruption
    }

    pub fn is_invalid_argument(&self) -> bool {
        self.code == Code::InvalidArgument
    }

    pub fn is_io_error(&self) -> bool {
        self.code == Code::IOError
    }

    pub fn is_aborted(&self) -> bool {
        self.code == Code::Aborted
    }

    pub fn code(&self) -> &Code {
        &self.code
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.message {
            Some(msg) => write!(f, "{:?}: {}", self.code, msg),
            None => write!(f, "{:?}", self.code),
        }
    }
}

impl std::error::Error for Status {}

impl From<std::io::Error> for Status {
    fn from(err: std::io::Error) -> Self {
        Status::io_error(err.to_string())
    }
}

impl From<serde_json::Error> for Status {
    fn from(err: serde_json::Error) -> Self {
        Status::corruption(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Status>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_io_error() {
        let status = Status::io_error("connection reset");
        assert!(status.is_io_error());
        assert_eq!(status.code(), &Code::IOError);
        assert_eq!(status.message(), Some("connection reset"));
    }

    #[test]
    fn test_status_display() {
        let status = Status::corruption("truncated record");
        assert_eq!(status.to_string(), "Corruption: truncated record");
    }

    #[test]
    fn test_status_from_io_error() {
        let err = std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "eof");
        let status = Status::from(err);
        assert!(status.is_io_error());
    }

    #[test]
    fn test_status_from_json_error() {
        let err = serde_json::from_str::<u64>("not json").unwrap_err();
        let status = Status::from(err);
        assert!(status.is_corruption());
    }
}
