//! Plan type - the service category a plan belongs to.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Service category of a plan.
///
/// Closed set; an application's plan type is fixed at creation. The order
/// pipeline targets `Nbn` only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanType {
    /// National Broadband Network fixed-line service.
    Nbn,
    /// Opticomm private fibre service.
    Opticomm,
    /// Mobile service.
    Mobile,
}

impl PlanType {
    /// Canonical lowercase form, used in storage and query parameters.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Nbn => "nbn",
            Self::Opticomm => "opticomm",
            Self::Mobile => "mobile",
        }
    }
}

impl fmt::Display for PlanType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error for an unrecognized plan type value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown plan type: {value}")]
pub struct UnknownPlanType {
    /// The rejected input value.
    pub value: String,
}

impl FromStr for PlanType {
    type Err = UnknownPlanType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "nbn" => Ok(Self::Nbn),
            "opticomm" => Ok(Self::Opticomm),
            "mobile" => Ok(Self::Mobile),
            other => Err(UnknownPlanType {
                value: other.to_string(),
            }),
        }
    }
}
