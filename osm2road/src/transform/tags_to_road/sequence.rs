use std::iter;

use crate::metric::Metre;
use crate::road::{Road, Segment};
use crate::transform::TagsToRoadMsg;

/// Segment counts for each block of the cross-section
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(in crate::transform::tags_to_road) struct RoadBuilder {
    pub left_cycle: usize,
    pub car: usize,
    pub right_cycle: usize,
}

impl RoadBuilder {
    /// Lay out `Edge, Cycle*, Car+, Cycle*, Edge` and place the center in the middle of the
    /// car lanes, whichever way they flow.
    ///
    /// # Errors
    ///
    /// If there are no car lanes.
    #[allow(clippy::as_conversions, clippy::cast_precision_loss)]
    pub(in crate::transform::tags_to_road) fn into_road(self) -> Result<Road, TagsToRoadMsg> {
        if self.car == 0 {
            return Err(TagsToRoadMsg::internal("road without car lanes"));
        }

        let segments: Vec<Segment> = iter::once(Segment::EDGE)
            .chain(iter::repeat(Segment::CYCLE).take(self.left_cycle))
            .chain(iter::repeat(Segment::CAR).take(self.car))
            .chain(iter::repeat(Segment::CYCLE).take(self.right_cycle))
            .chain(iter::once(Segment::EDGE))
            .collect();

        let left_offset: Metre = segments
            .iter()
            .take_while(|segment| !segment.is_car())
            .map(|segment| segment.width)
            .sum();
        let block = self.car as f64 * Segment::CAR_WIDTH;
        let center = left_offset + 0.5 * block;

        Ok(Road::new(segments, center))
    }
}
