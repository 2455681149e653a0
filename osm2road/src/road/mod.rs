use crate::metric::Metre;

mod segment;
pub use segment::{Printable, Segment, SegmentKind};

/// A road cross-section, left to right, and where the way's line sits within it.
///
/// Constructed only by [`crate::transform::tags_to_road`], which guarantees
/// the segments start and end with a single edge and hold one contiguous run
/// of car lanes.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Road {
    segments: Vec<Segment>,
    center: Metre,
}

impl Road {
    pub(crate) fn new(segments: Vec<Segment>, center: Metre) -> Self {
        debug_assert!(segments.first().map_or(false, Segment::is_edge));
        debug_assert!(segments.last().map_or(false, Segment::is_edge));
        Self { segments, center }
    }

    /// Segments from left to right
    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Offset of the way's line from the left boundary
    #[must_use]
    pub fn center(&self) -> Metre {
        self.center
    }

    /// Width in metres
    #[must_use]
    pub fn width(&self) -> Metre {
        self.segments.iter().map(|segment| segment.width).sum()
    }
}

impl std::fmt::Display for Road {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Road({}, Center={})",
            self.segments
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("|"),
            self.center,
        )
    }
}
