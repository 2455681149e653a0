mod error;
pub use error::{RoadError, RoadFromTags, RoadWarnings};

mod tags_to_road;
pub use tags_to_road::{tags_to_road, Config, TagsToRoadIssue, TagsToRoadMsg};

mod tags {
    use osm_tags::TagKey;

    pub const HIGHWAY: TagKey = TagKey::from_static("highway");
    pub const ONEWAY: TagKey = TagKey::from_static("oneway");
    pub const LANES: TagKey = TagKey::from_static("lanes");
    pub const CYCLEWAY: TagKey = TagKey::from_static("cycleway");
    pub const BICYCLE: TagKey = TagKey::from_static("bicycle");
}

/// Side of the way, looking along the direction it was drawn
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WaySide {
    Both,
    Right,
    Left,
}

impl WaySide {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Both => "both",
            Self::Right => "right",
            Self::Left => "left",
        }
    }
}

impl std::fmt::Display for WaySide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
