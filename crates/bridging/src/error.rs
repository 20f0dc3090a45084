/// The hole eliminator's result type.
pub type EliminationResult = Result<(), HoleEliminationError>;

/// The hole eliminator's error enumeration.
#[derive(Clone, Debug, PartialEq)]
pub enum HoleEliminationError {
    /// The horizontal ray cast from the rightmost vertex of the hole did not hit
    /// any boundary edge.
    ///
    /// This happens when the hole is not inside the outer contour. The output
    /// boundary is left partially merged and should be discarded.
    NoVisibleEdge { hole: usize },
    UnsupportedParameter(UnsupportedParameter),
}

#[cfg(feature = "std")]
impl core::fmt::Display for HoleEliminationError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            HoleEliminationError::NoVisibleEdge { hole } => {
                std::write!(f, "No boundary edge is visible from hole #{hole}")
            }
            HoleEliminationError::UnsupportedParameter(e) => {
                std::write!(f, "Unsupported parameter: {e}")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for HoleEliminationError {}

impl core::convert::From<UnsupportedParameter> for HoleEliminationError {
    fn from(value: UnsupportedParameter) -> Self {
        Self::UnsupportedParameter(value)
    }
}

/// Input that cannot be processed at all.
///
/// These checks only guard the indexing of the vertex table. Geometric
/// validity (simple contours, properly nested holes) is not verified.
#[derive(Clone, Debug, PartialEq)]
pub enum UnsupportedParameter {
    PositionIsNaN,
    EpsilonIsNaN,
    NegativeEpsilon,
    NotEnoughContourPoints,
    EmptyHole { hole: usize },
    HoleOutOfBounds { hole: usize },
    OverlappingHoles { hole: usize },
}

#[cfg(feature = "std")]
impl core::fmt::Display for UnsupportedParameter {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            UnsupportedParameter::PositionIsNaN => {
                std::write!(f, "Position is not a number")
            }
            UnsupportedParameter::EpsilonIsNaN => {
                std::write!(f, "Epsilon threshold is not a number")
            }
            UnsupportedParameter::NegativeEpsilon => {
                std::write!(f, "Epsilon threshold is negative")
            }
            UnsupportedParameter::NotEnoughContourPoints => {
                std::write!(f, "The outer contour needs at least three points")
            }
            UnsupportedParameter::EmptyHole { hole } => {
                std::write!(f, "Hole #{hole} has no point")
            }
            UnsupportedParameter::HoleOutOfBounds { hole } => {
                std::write!(f, "Hole #{hole} is outside of the vertex table")
            }
            UnsupportedParameter::OverlappingHoles { hole } => {
                std::write!(f, "Hole #{hole} overlaps another hole or the contour")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for UnsupportedParameter {}

#[cfg(feature = "std")]
#[test]
fn error_messages() {
    use alloc::string::ToString;

    assert_eq!(
        HoleEliminationError::NoVisibleEdge { hole: 3 }.to_string(),
        "No boundary edge is visible from hole #3"
    );
    assert_eq!(
        HoleEliminationError::from(UnsupportedParameter::EmptyHole { hole: 1 }).to_string(),
        "Unsupported parameter: Hole #1 has no point"
    );
}
