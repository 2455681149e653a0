#![allow(clippy::module_name_repetitions)]

use osm_tags::Tags;

use crate::transform::error::{RoadError, RoadWarnings};
use crate::transform::{RoadFromTags, WaySide};

mod error;
pub use error::{TagsToRoadIssue, TagsToRoadMsg};

mod lookup;

mod oneway;
use oneway::Directionality;

mod counts;
use counts::LaneCount;

mod cycleway;

mod sequence;
use sequence::RoadBuilder;

mod unsupported;
use unsupported::unsupported;

#[non_exhaustive]
pub struct Config {
    pub error_on_warnings: bool,
}

impl Config {
    #[must_use]
    pub fn new(error_on_warnings: bool) -> Self {
        Self { error_on_warnings }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            error_on_warnings: false,
        }
    }
}

/// From an OpenStreetMap way's tags,
/// determine the road cross-section from left to right.
///
/// # Errors
///
/// A `lanes=*` value that is not an integer from 1 to 32 is an error.
///
/// Warnings are produced for situations that may make the road inaccurate, such as:
///
/// - Unimplemented or unsupported tags, which are ignored
/// - Ambiguous tags
///
/// A config option allows all warnings to be treated as errors.
pub fn tags_to_road(tags: &Tags, config: &Config) -> Result<RoadFromTags, RoadError> {
    let mut warnings = RoadWarnings::default();

    unsupported(tags, &mut warnings);

    // Parse each scheme independently ahead of time
    let directionality = Directionality::from_tags(tags, &mut warnings);
    log::trace!("{directionality:?}");
    let lanes = LaneCount::from_tags(tags, directionality)?;
    log::trace!("{lanes:?}");
    let cycleway = cycleway::Scheme::from_tags(tags, directionality, &mut warnings);
    log::trace!("{cycleway:?}");

    let road = RoadBuilder {
        left_cycle: cycleway.count(WaySide::Left),
        car: lanes.get(),
        right_cycle: cycleway.count(WaySide::Right),
    }
    .into_road()?;
    log::debug!("{road}");

    let road_from_tags = RoadFromTags { road, warnings };

    if config.error_on_warnings && !road_from_tags.warnings.is_empty() {
        return Err(road_from_tags.warnings.into());
    }

    Ok(road_from_tags)
}
