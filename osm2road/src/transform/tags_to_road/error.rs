use std::panic::Location;

use osm_tags::Tags;

use super::counts::LaneCount;
use crate::transform::tags::LANES;

/// Tags to Road Transformation Logic Issue
///
/// ```
/// use osm2road::transform::TagsToRoadMsg;
/// let _ = TagsToRoadMsg::unsupported_tag("foo", "bar");
/// let msg = TagsToRoadMsg::unimplemented_tag("cycleway", "track");
/// assert!(msg.to_string().starts_with("unimplemented: 'cycleway=track' - "));
/// ```
#[derive(Clone, Debug)]
pub struct TagsToRoadMsg {
    location: &'static Location<'static>,
    issue: TagsToRoadIssue,
}

#[derive(Clone, Debug)]
pub enum TagsToRoadIssue {
    /// Tag combination that is unsupported, and may never be supported
    Unsupported {
        description: Option<String>,
        tags: Option<Tags>,
    },
    /// Tag combination that is known, but has yet to be implemented
    Unimplemented {
        description: Option<String>,
        tags: Option<Tags>,
    },
    /// Tag combination that is ambiguous, and may never be supported
    Ambiguous {
        description: Option<String>,
        tags: Option<Tags>,
    },
    /// `lanes=*` that is not an integer between 1 and `LaneCount::MAX`
    MalformedLaneCount(String),
    /// Internal errors
    Internal(&'static str),
}

impl TagsToRoadMsg {
    #[must_use]
    pub fn issue(&self) -> &TagsToRoadIssue {
        &self.issue
    }

    #[must_use]
    #[track_caller]
    pub fn unsupported_tag<K: AsRef<str>>(key: K, val: &str) -> Self {
        TagsToRoadMsg {
            location: Location::caller(),
            issue: TagsToRoadIssue::Unsupported {
                description: None,
                tags: Some(Tags::from_str_pair([key.as_ref(), val])),
            },
        }
    }

    #[must_use]
    #[track_caller]
    pub fn unimplemented(description: &str, tags: Tags) -> Self {
        TagsToRoadMsg {
            location: Location::caller(),
            issue: TagsToRoadIssue::Unimplemented {
                description: Some(description.to_owned()),
                tags: Some(tags),
            },
        }
    }

    #[must_use]
    #[track_caller]
    pub fn unimplemented_tag<K: AsRef<str>>(key: K, val: &str) -> Self {
        TagsToRoadMsg {
            location: Location::caller(),
            issue: TagsToRoadIssue::Unimplemented {
                description: None,
                tags: Some(Tags::from_str_pair([key.as_ref(), val])),
            },
        }
    }

    #[must_use]
    #[track_caller]
    pub fn ambiguous(description: &str, tags: Tags) -> Self {
        TagsToRoadMsg {
            location: Location::caller(),
            issue: TagsToRoadIssue::Ambiguous {
                description: Some(description.to_owned()),
                tags: Some(tags),
            },
        }
    }

    #[must_use]
    #[track_caller]
    pub fn ambiguous_tags(tags: Tags) -> Self {
        TagsToRoadMsg {
            location: Location::caller(),
            issue: TagsToRoadIssue::Ambiguous {
                description: None,
                tags: Some(tags),
            },
        }
    }

    #[must_use]
    #[track_caller]
    pub fn malformed_lane_count(val: &str) -> Self {
        TagsToRoadMsg {
            location: Location::caller(),
            issue: TagsToRoadIssue::MalformedLaneCount(val.to_owned()),
        }
    }

    #[must_use]
    #[track_caller]
    pub fn internal(e: &'static str) -> Self {
        TagsToRoadMsg {
            location: Location::caller(),
            issue: TagsToRoadIssue::Internal(e),
        }
    }
}

impl std::fmt::Display for TagsToRoadMsg {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match &self.issue {
            TagsToRoadIssue::Unsupported { description, tags }
            | TagsToRoadIssue::Unimplemented { description, tags }
            | TagsToRoadIssue::Ambiguous { description, tags } => {
                let tags = tags.as_ref().map(|tags| {
                    if tags.is_empty() {
                        String::from("no tags")
                    } else {
                        tags.to_vec().join(" ")
                    }
                });
                let prefix = match self.issue {
                    TagsToRoadIssue::Unsupported { .. } => "unsupported",
                    TagsToRoadIssue::Unimplemented { .. } => "unimplemented",
                    TagsToRoadIssue::Ambiguous { .. } => "ambiguous",
                    _ => unreachable!(),
                };
                match (description, tags) {
                    (None, None) => write!(f, "{}", prefix),
                    (Some(description), None) => {
                        write!(f, "{}: '{}'", prefix, description)
                    },
                    (None, Some(tags)) => write!(f, "{}: '{}' - {}", prefix, tags, self.location),
                    (Some(description), Some(tags)) => {
                        write!(
                            f,
                            "{}: '{}' - '{}' - {}",
                            prefix, description, tags, self.location
                        )
                    },
                }
            },
            TagsToRoadIssue::MalformedLaneCount(val) => write!(
                f,
                "malformed lane count: '{}={}' is not an integer from 1 to {} - {}",
                LANES,
                val,
                LaneCount::MAX,
                self.location
            ),
            TagsToRoadIssue::Internal(e) => write!(f, "{} - {}", e, self.location),
        }
    }
}

impl std::error::Error for TagsToRoadMsg {}

#[cfg(feature = "serde")]
impl serde::Serialize for TagsToRoadMsg {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

