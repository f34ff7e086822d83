//! Transport mode requested from the routing collaborator.

/// How the user intends to travel to the destination.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[non_exhaustive]
pub enum TransportMode {
    /// Private vehicle (driving directions).
    #[default]
    Automobile,
    /// On foot.
    Walking,
    /// Scheduled public transit.
    Transit,
}

impl TransportMode {
    /// Human-readable label.
    pub fn as_str(self) -> &'static str {
        match self {
            TransportMode::Automobile => "automobile",
            TransportMode::Walking    => "walking",
            TransportMode::Transit    => "transit",
        }
    }
}

impl std::fmt::Display for TransportMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
