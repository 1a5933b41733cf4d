//! Disk scheduling policies.
//!
//! # Reference
//! Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 11.2

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A classical disk head scheduling policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Policy {
    /// First-Come-First-Served: input order is service order.
    #[serde(rename = "FCFS")]
    Fcfs,
    /// Shortest Seek Time First: always the nearest pending cylinder.
    #[serde(rename = "SSTF")]
    Sstf,
    /// Elevator: sweep to the disk end, then reverse.
    #[serde(rename = "SCAN")]
    Scan,
    /// Circular SCAN: sweep to the disk end, jump to the other end, continue.
    #[serde(rename = "C-SCAN")]
    CScan,
    /// SCAN that reverses at the last pending request.
    #[serde(rename = "LOOK")]
    Look,
    /// C-SCAN that jumps from the last request to the farthest one.
    #[serde(rename = "C-LOOK")]
    CLook,
}

impl Policy {
    /// Every policy, in canonical order.
    pub const ALL: [Policy; 6] = [
        Policy::Fcfs,
        Policy::Sstf,
        Policy::Scan,
        Policy::CScan,
        Policy::Look,
        Policy::CLook,
    ];

    /// Short name (e.g., "C-SCAN").
    pub fn name(self) -> &'static str {
        match self {
            Policy::Fcfs => "FCFS",
            Policy::Sstf => "SSTF",
            Policy::Scan => "SCAN",
            Policy::CScan => "C-SCAN",
            Policy::Look => "LOOK",
            Policy::CLook => "C-LOOK",
        }
    }

    /// Whether the policy uses the initial [`Direction`](super::Direction).
    pub fn is_directional(self) -> bool {
        !matches!(self, Policy::Fcfs | Policy::Sstf)
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a policy name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown disk scheduling policy: {0}")]
pub struct ParsePolicyError(pub String);

impl FromStr for Policy {
    type Err = ParsePolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "FCFS" => Ok(Policy::Fcfs),
            "SSTF" => Ok(Policy::Sstf),
            "SCAN" => Ok(Policy::Scan),
            "C-SCAN" | "CSCAN" => Ok(Policy::CScan),
            "LOOK" => Ok(Policy::Look),
            "C-LOOK" | "CLOOK" => Ok(Policy::CLook),
            _ => Err(ParsePolicyError(s.to_string())),
        }
    }
}
