use std::fmt;

/// Opaque identifier assigned by the remote video-generation service.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TalkId(String);

impl TalkId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TalkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TalkStatus {
    Pending,
    Done,
    Failed,
}

impl TalkStatus {
    /// Maps the remote service's status string. The service reports
    /// `created`/`started` while rendering; both collapse into `Pending`.
    pub fn from_remote(status: &str) -> Self {
        match status {
            "done" => Self::Done,
            "error" | "rejected" => Self::Failed,
            _ => Self::Pending,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Done | Self::Failed)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Done => "done",
            Self::Failed => "failed",
        }
    }
}

impl fmt::Display for TalkStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Snapshot of one remote generation job, valid for the current request only.
#[derive(Debug, Clone)]
pub struct VideoJob {
    pub id: TalkId,
    pub status: TalkStatus,
    pub result_url: Option<String>,
    pub error_message: Option<String>,
}
