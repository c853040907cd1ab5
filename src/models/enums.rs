//! Shared domain enums

// ---------------------------------------------------------------------------
// BookStatus
// ---------------------------------------------------------------------------

/// Lending status of a catalogued book
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookStatus {
    Available,
    Issued,
}

impl BookStatus {
    pub fn is_available(self) -> bool {
        self == BookStatus::Available
    }
}

impl std::fmt::Display for BookStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            BookStatus::Available => "Available",
            BookStatus::Issued => "Issued",
        };
        write!(f, "{}", label)
    }
}
