use super::TagsToRoadMsg;
use crate::road::Road;

#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RoadWarnings(Vec<TagsToRoadMsg>);

impl RoadWarnings {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn push(&mut self, msg: TagsToRoadMsg) {
        self.0.push(msg);
    }
}

impl std::fmt::Display for RoadWarnings {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}",
            self.0
                .iter()
                .map(|warning| format!("Warning: {}", warning))
                .collect::<Vec<_>>()
                .join("\n")
        )
    }
}

/// Error for transformation
/// ```
/// use osm2road::transform::{RoadError, TagsToRoadMsg};
/// let err: RoadError = TagsToRoadMsg::malformed_lane_count("0").into();
/// assert!(err.to_string().starts_with("malformed lane count: 'lanes=0'"));
/// ```
#[allow(clippy::module_name_repetitions)]
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum RoadError {
    #[cfg_attr(feature = "serde", serde(rename = "error"))]
    Msg(TagsToRoadMsg),
    #[cfg_attr(feature = "serde", serde(rename = "warnings"))]
    Warnings(RoadWarnings),
}

impl std::error::Error for RoadError {}

impl std::fmt::Display for RoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Msg(msg) => msg.fmt(f),
            Self::Warnings(warnings) => write!(f, "{} warnings", warnings.len()),
        }
    }
}

impl From<TagsToRoadMsg> for RoadError {
    fn from(msg: TagsToRoadMsg) -> Self {
        Self::Msg(msg)
    }
}

impl From<RoadWarnings> for RoadError {
    fn from(warnings: RoadWarnings) -> Self {
        Self::Warnings(warnings)
    }
}

#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RoadFromTags {
    pub road: Road,
    pub warnings: RoadWarnings,
}
