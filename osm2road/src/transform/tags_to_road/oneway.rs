use osm_tags::{TagKey, Tags};

use crate::transform::tags::ONEWAY;
use crate::transform::{RoadWarnings, TagsToRoadMsg};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Oneway {
    Yes,
    No,
}

impl From<Oneway> for bool {
    fn from(oneway: Oneway) -> Self {
        match oneway {
            Oneway::Yes => true,
            Oneway::No => false,
        }
    }
}

/// Direction of travel permitted on the road as a whole
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Directionality {
    pub oneway: Oneway,
    /// Cyclists may travel against a oneway road
    pub bicycle_exempt: bool,
}

impl Directionality {
    pub const ONEWAY_BICYCLE: TagKey = TagKey::from_static("oneway:bicycle");

    /// Unknown `oneway=*` values are treated as two-way, with a warning.
    pub fn from_tags(tags: &Tags, warnings: &mut RoadWarnings) -> Self {
        let oneway = match tags.get(&ONEWAY) {
            Some("yes") => Oneway::Yes,
            None | Some("no") => Oneway::No,
            Some(value) => {
                warnings.push(TagsToRoadMsg::unimplemented_tag(ONEWAY, value));
                Oneway::No
            },
        };
        let bicycle_exempt = tags.is(&Self::ONEWAY_BICYCLE, "no");
        if bicycle_exempt && oneway == Oneway::No {
            warnings.push(TagsToRoadMsg::ambiguous_tags(
                tags.subset([ONEWAY, Self::ONEWAY_BICYCLE]),
            ));
        }
        Self {
            oneway,
            bicycle_exempt: bicycle_exempt && oneway.into(),
        }
    }

    /// Oneway for motor vehicles, with cyclists allowed both ways
    #[must_use]
    pub fn is_contraflow(&self) -> bool {
        self.oneway == Oneway::Yes && self.bicycle_exempt
    }
}
