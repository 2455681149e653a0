use crate::metric::Metre;

/// The type of a slice across the road
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SegmentKind {
    /// Zero width bookend at either side of the road
    Edge,
    /// Motor vehicle travel lane
    Car,
    /// Cycle lane
    Cycle,
}

impl SegmentKind {
    /// Fixed width of this kind of segment
    #[must_use]
    pub const fn width(self) -> Metre {
        match self {
            Self::Edge => Segment::EDGE_WIDTH,
            Self::Car => Segment::CAR_WIDTH,
            Self::Cycle => Segment::CYCLE_WIDTH,
        }
    }
}

/// A single slice across the road
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Segment {
    pub kind: SegmentKind,
    pub width: Metre,
}

impl Segment {
    pub const EDGE_WIDTH: Metre = Metre::new(0.0);
    pub const CAR_WIDTH: Metre = Metre::new(3.0);
    pub const CYCLE_WIDTH: Metre = Metre::new(1.0);

    pub const EDGE: Segment = Segment::of(SegmentKind::Edge);
    pub const CAR: Segment = Segment::of(SegmentKind::Car);
    pub const CYCLE: Segment = Segment::of(SegmentKind::Cycle);

    /// Segment of the given kind at its fixed width
    #[must_use]
    pub const fn of(kind: SegmentKind) -> Self {
        Self {
            kind,
            width: kind.width(),
        }
    }

    #[must_use]
    pub fn is_edge(&self) -> bool {
        self.kind == SegmentKind::Edge
    }

    #[must_use]
    pub fn is_car(&self) -> bool {
        self.kind == SegmentKind::Car
    }
}

impl std::fmt::Display for Segment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.kind, self.width)
    }
}

/// Display segment detail as printable characters
pub trait Printable {
    fn as_ascii(&self) -> char;
}

impl Printable for Segment {
    fn as_ascii(&self) -> char {
        match self.kind {
            SegmentKind::Edge => '|',
            SegmentKind::Car => 'd',
            SegmentKind::Cycle => 'b',
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Printable, Segment, SegmentKind};
    use crate::metric::Metre;

    #[test]
    fn test_fixed_widths() {
        assert_eq!(Segment::EDGE.width, Metre::new(0.0));
        assert_eq!(Segment::CAR.width, Metre::new(3.0));
        assert_eq!(Segment::CYCLE.width, Metre::new(1.0));
        assert_eq!(Segment::of(SegmentKind::Car), Segment::CAR);
    }

    #[test]
    fn test_display() {
        assert_eq!(Segment::EDGE.to_string(), "Edge 0.0m");
        assert_eq!(Segment::CAR.to_string(), "Car 3.0m");
        assert_eq!(Segment::CYCLE.to_string(), "Cycle 1.0m");
        assert_eq!(Segment::CYCLE.as_ascii(), 'b');
    }
}
