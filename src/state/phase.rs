//! Crawl phase definitions

use std::fmt;

/// Why a crawl stopped
///
/// All of these are normal terminations. Fetch failures abort the crawl
/// through an error instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StopReason {
    /// The last page had no pagination link
    NoNextPage,

    /// The last page's pagination link pointed back at itself
    SelfReference,

    /// The page ceiling was reached
    PageLimit,
}

impl StopReason {
    /// Short machine-friendly name, used in logs
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NoNextPage => "no_next_page",
            Self::SelfReference => "self_reference",
            Self::PageLimit => "page_limit",
        }
    }
}

impl fmt::Display for StopReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Current phase of the crawl loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrawlPhase {
    /// More pages remain to be fetched
    Running,

    /// The loop has ended
    Done(StopReason),
}

impl CrawlPhase {
    /// Returns true once the loop has ended
    pub fn is_done(&self) -> bool {
        matches!(self, Self::Done(_))
    }

    /// The stop reason, if the loop has ended
    pub fn stop_reason(&self) -> Option<StopReason> {
        match self {
            Self::Running => None,
            Self::Done(reason) => Some(*reason),
        }
    }
}

impl fmt::Display for CrawlPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Running => write!(f, "running"),
            Self::Done(reason) => write!(f, "done ({})", reason),
        }
    }
}
