use std::{fmt, str::FromStr};

/// Lifecycle of a pickup request. Stored as its display name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PickupStatus {
    #[default]
    Scheduled,
    Assigned,
    Picked,
    Processing,
    Recycled,
    Cancelled,
}

impl PickupStatus {
    pub const ALL: [PickupStatus; 6] = [
        PickupStatus::Scheduled,
        PickupStatus::Assigned,
        PickupStatus::Picked,
        PickupStatus::Processing,
        PickupStatus::Recycled,
        PickupStatus::Cancelled,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PickupStatus::Scheduled => "Scheduled",
            PickupStatus::Assigned => "Assigned",
            PickupStatus::Picked => "Picked",
            PickupStatus::Processing => "Processing",
            PickupStatus::Recycled => "Recycled",
            PickupStatus::Cancelled => "Cancelled",
        }
    }
}

impl fmt::Display for PickupStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown pickup status `{0}`")]
pub struct UnknownStatus(pub String);

impl FromStr for PickupStatus {
    type Err = UnknownStatus;

    /// Exact, case-sensitive match on the display name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PickupStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| UnknownStatus(s.to_string()))
    }
}
