use osm_tags::Tags;

use crate::transform::tags::{BICYCLE, HIGHWAY};
use crate::transform::{RoadWarnings, TagsToRoadMsg};

/// Warn about tags that change the cross-section in ways not yet modelled.
/// The road is still produced as if they were absent.
pub(in crate::transform::tags_to_road) fn unsupported(tags: &Tags, warnings: &mut RoadWarnings) {
    // Ways without motor traffic, e.g. a separately mapped cycle track
    const NON_MOTORIZED: [&str; 8] = [
        "bridleway",
        "corridor",
        "cycleway",
        "footway",
        "path",
        "pedestrian",
        "steps",
        "track",
    ];
    if let Some(highway) = tags.get(&HIGHWAY) {
        if NON_MOTORIZED.contains(&highway) {
            warnings.push(TagsToRoadMsg::unimplemented_tag(HIGHWAY, highway));
        }
    }

    // Cycle track mapped as a separate way
    if let Some(v @ ("use_sidepath" | "optional_sidepath")) = tags.get(&BICYCLE) {
        warnings.push(TagsToRoadMsg::unimplemented("sidepath", tags.subset([BICYCLE])));
        log::debug!("bicycle={v} ignored");
    }
}
