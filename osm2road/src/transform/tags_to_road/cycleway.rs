use osm_tags::{TagKey, Tags};

use super::lookup::{SideValue, Source, TagsSided};
use super::oneway::{Directionality, Oneway};
use crate::transform::tags::CYCLEWAY;
use crate::transform::{RoadWarnings, TagsToRoadMsg, WaySide};

#[derive(Debug)]
enum VariantError {
    UnknownVariant(TagKey, String),
    UnimplementedVariant(TagKey, String),
}

impl From<VariantError> for TagsToRoadMsg {
    fn from(e: VariantError) -> Self {
        match e {
            VariantError::UnknownVariant(key, val) => Self::unsupported_tag(key, &val),
            VariantError::UnimplementedVariant(key, val) => Self::unimplemented_tag(key, &val),
        }
    }
}

/// Supported `cycleway=*` values
#[derive(Debug, PartialEq, Eq, Clone, Copy, strum::EnumString, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub(in crate::transform::tags_to_road) enum Variant {
    /// Cycle lane
    Lane,
    /// Contraflow cycle lane on a oneway road
    OppositeLane,
    /// Explicitly no cycle lane
    No,
}

fn get_variant(value: &SideValue<'_>) -> Result<Variant, VariantError> {
    value.val.parse::<Variant>().or_else(|_| match value.val {
        v @ ("track"
        | "opposite_track"
        | "shared_lane"
        | "share_busway"
        | "opposite_share_busway"
        | "opposite"
        | "shared"
        | "shoulder"
        | "separate") => Err(VariantError::UnimplementedVariant(
            value.key.clone(),
            v.to_owned(),
        )),
        v => Err(VariantError::UnknownVariant(value.key.clone(), v.to_owned())),
    })
}

/// Unsupported values are dropped with a warning, leaving no cycle lane.
fn variant_or_warn(value: &SideValue<'_>, warnings: &mut RoadWarnings) -> Option<Variant> {
    match get_variant(value) {
        Ok(variant) => Some(variant),
        Err(e) => {
            warnings.push(e.into());
            None
        },
    }
}

/// Direction of bicycle travel, relative to the way
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub(in crate::transform::tags_to_road) enum Direction {
    Forward,
    Backward,
    Both,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub(in crate::transform::tags_to_road) struct Way {
    direction: Direction,
}

impl Way {
    const FORWARD: Way = Way {
        direction: Direction::Forward,
    };
    const BACKWARD: Way = Way {
        direction: Direction::Backward,
    };

    /// Number of cycle lanes needed: one per direction
    pub(in crate::transform::tags_to_road) fn count(self) -> usize {
        match self.direction {
            Direction::Forward | Direction::Backward => 1,
            Direction::Both => 2,
        }
    }
}

/// Bicycle lane scheme, one optional way per side of the road.
///
/// The right side is taken to carry traffic in the direction of the way.
#[derive(Debug, PartialEq, Eq)]
pub(in crate::transform::tags_to_road) struct Scheme {
    pub left: Option<Way>,
    pub right: Option<Way>,
}

impl Scheme {
    pub(in crate::transform::tags_to_road) fn from_tags(
        tags: &Tags,
        directionality: Directionality,
        warnings: &mut RoadWarnings,
    ) -> Self {
        // `cycleway=*` or `cycleway:both=*`, parsed once for both sides,
        // and only when a side is not tagged explicitly
        let falls_back = [WaySide::Left, WaySide::Right].into_iter().any(|side| {
            tags.get_sided(&CYCLEWAY, side)
                .map_or(false, |value| value.source.is_generic())
        });
        let generic = if falls_back {
            tags.get_sided(&CYCLEWAY, WaySide::Both)
                .and_then(|value| Some((value.key.clone(), variant_or_warn(&value, warnings)?)))
                .map(|(key, variant)| {
                    Self::from_generic(tags, &key, variant, directionality, warnings)
                })
        } else {
            None
        };

        let mut scheme = Self {
            left: Self::from_side(tags, WaySide::Left, generic.as_ref(), directionality, warnings),
            right: Self::from_side(
                tags,
                WaySide::Right,
                generic.as_ref(),
                directionality,
                warnings,
            ),
        };
        scheme.left = scheme.left.map(|way| Self::side_oneway(tags, WaySide::Left, way));
        scheme.right = scheme
            .right
            .map(|way| Self::side_oneway(tags, WaySide::Right, way));
        scheme
    }

    /// Cycle lane count on a side
    pub(in crate::transform::tags_to_road) fn count(&self, side: WaySide) -> usize {
        let way = match side {
            WaySide::Left => self.left,
            WaySide::Right => self.right,
            WaySide::Both => {
                return self.count(WaySide::Left) + self.count(WaySide::Right);
            },
        };
        way.map_or(0, Way::count)
    }

    /// Handle `cycleway:<side>=*`, deferring to the generic scheme when absent
    fn from_side(
        tags: &Tags,
        side: WaySide,
        generic: Option<&Scheme>,
        directionality: Directionality,
        warnings: &mut RoadWarnings,
    ) -> Option<Way> {
        match tags.get_sided(&CYCLEWAY, side) {
            Some(value) if value.source == Source::Side => {
                match variant_or_warn(&value, warnings)? {
                    Variant::Lane => Some(match (side, directionality.oneway) {
                        (WaySide::Left, Oneway::No) => Way::BACKWARD,
                        // A oneway road with a cycleway on the left still flows forward
                        (WaySide::Left, Oneway::Yes) | (WaySide::Right | WaySide::Both, _) => {
                            Way::FORWARD
                        },
                    }),
                    Variant::OppositeLane => Some(Way::BACKWARD),
                    Variant::No => None,
                }
            },
            Some(value) => {
                debug_assert!(value.source.is_generic());
                generic.and_then(|generic| match side {
                    WaySide::Left => generic.left,
                    WaySide::Right | WaySide::Both => generic.right,
                })
            },
            None => None,
        }
    }

    /// Handle `cycleway=*` and `cycleway:both=*`, which do not say which side they apply to
    fn from_generic(
        tags: &Tags,
        key: &TagKey,
        variant: Variant,
        directionality: Directionality,
        warnings: &mut RoadWarnings,
    ) -> Self {
        match (variant, directionality.oneway) {
            (Variant::No, _) => Self {
                left: None,
                right: None,
            },
            (Variant::Lane, Oneway::No) => Self {
                left: Some(Way::BACKWARD),
                right: Some(Way::FORWARD),
            },
            (Variant::OppositeLane, Oneway::No) => {
                warnings.push(TagsToRoadMsg::ambiguous(
                    "opposite cycle lane on a two-way road",
                    tags.subset([key.as_str(), "oneway"]),
                ));
                Self {
                    left: Some(Way::BACKWARD),
                    right: Some(Way::FORWARD),
                }
            },
            // Contraflow pair: with traffic on the right, against it on the left
            (Variant::Lane | Variant::OppositeLane, Oneway::Yes)
                if directionality.is_contraflow() =>
            {
                Self {
                    left: Some(Way::BACKWARD),
                    right: Some(Way::FORWARD),
                }
            },
            (Variant::Lane, Oneway::Yes) => {
                warnings.push(TagsToRoadMsg::ambiguous(
                    "cycle lane side unknown on oneway road, assuming both sides",
                    tags.subset([key.as_str(), "oneway", "oneway:bicycle"]),
                ));
                Self {
                    left: Some(Way::FORWARD),
                    right: Some(Way::FORWARD),
                }
            },
            // Only the contraflow lane is implied without an exemption
            (Variant::OppositeLane, Oneway::Yes) => Self {
                left: Some(Way::BACKWARD),
                right: None,
            },
        }
    }

    /// Handle `cycleway:<side>:oneway=*`
    fn side_oneway(tags: &Tags, side: WaySide, way: Way) -> Way {
        match tags
            .get_sided_suffix(&CYCLEWAY, side, "oneway")
            .map(|value| value.val)
        {
            Some("no") => Way {
                direction: Direction::Both,
            },
            Some("yes") => Way::FORWARD,
            Some("-1") => Way::BACKWARD,
            Some(_) | None => way,
        }
    }
}
