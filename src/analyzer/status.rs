use crate::models::ProbeResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// 2xx: the path exists.
    Found,
    /// 401/403: the path exists but is protected.
    Restricted,
    /// Any other 4xx/5xx.
    NotFound,
    /// Status outside every range above, e.g. an unfollowed 3xx.
    Unexpected,
    /// The request itself failed.
    Unreachable,
}

pub struct StatusAnalyzer;

impl StatusAnalyzer {
    pub fn classify(result: &ProbeResult) -> Verdict {
        if result.is_error() {
            return Verdict::Unreachable;
        }
        Self::classify_status(result.status)
    }

    pub fn classify_status(status: u16) -> Verdict {
        match status {
            200..=299 => Verdict::Found,
            401 | 403 => Verdict::Restricted,
            400..=599 => Verdict::NotFound,
            _ => Verdict::Unexpected,
        }
    }
}
