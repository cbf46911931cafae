//! Originating channels and business segments.

use serde::{Deserialize, Serialize};

/// Originating system/process through which a case was opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Channel {
    AgentWorkBench,
    AdviserWorkBench,
    Connect,
    MomApp,
    PublicWeb,
    SecureWeb,
    Branch,
    Unknown,
}

impl Channel {
    /// One-letter reference-number prefix. `Unknown` has no mapping.
    pub fn prefix(self) -> Option<char> {
        match self {
            Channel::AdviserWorkBench => Some('D'),
            Channel::AgentWorkBench => Some('T'),
            Channel::Branch => Some('B'),
            Channel::Connect => Some('C'),
            Channel::MomApp => Some('A'),
            Channel::PublicWeb => Some('P'),
            Channel::SecureWeb => Some('W'),
            Channel::Unknown => None,
        }
    }

    /// Human-readable label (value → display table).
    pub fn label(self) -> &'static str {
        match self {
            Channel::AgentWorkBench => "Agent Work Bench",
            Channel::AdviserWorkBench => "Adviser Work Bench",
            Channel::Connect => "Connect",
            Channel::MomApp => "Mom App",
            Channel::PublicWeb => "Public Web",
            Channel::SecureWeb => "Secure Web",
            Channel::Branch => "Branch",
            Channel::Unknown => "Unknown",
        }
    }

    /// Inverse lookup (display → value table).
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Agent Work Bench" => Some(Channel::AgentWorkBench),
            "Adviser Work Bench" => Some(Channel::AdviserWorkBench),
            "Connect" => Some(Channel::Connect),
            "Mom App" => Some(Channel::MomApp),
            "Public Web" => Some(Channel::PublicWeb),
            "Secure Web" => Some(Channel::SecureWeb),
            "Branch" => Some(Channel::Branch),
            "Unknown" => Some(Channel::Unknown),
            _ => None,
        }
    }
}

impl core::fmt::Display for Channel {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

/// Business segment a reference number is scoped to.
///
/// Customer servicing is the only segment today; it is the default wherever a
/// segment is taken as input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum BusinessSegment {
    #[default]
    CustomerServicing,
}

impl BusinessSegment {
    /// Reference-number segment prefix.
    pub fn prefix(self) -> Option<&'static str> {
        match self {
            BusinessSegment::CustomerServicing => Some("CS"),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            BusinessSegment::CustomerServicing => "Customer Servicing",
        }
    }
}
