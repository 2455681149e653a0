use osm_tags::Tags;

use super::oneway::{Directionality, Oneway};
use crate::transform::tags::LANES;
use crate::transform::TagsToRoadMsg;

/// The number of lanes for motor vehicle traffic
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LaneCount(usize);

impl LaneCount {
    /// Upper bound on `lanes=*`
    pub const MAX: usize = 32;

    /// Parses the `lanes` scheme (which excludes bike lanes).
    /// See <https://wiki.openstreetmap.org/wiki/Key:lanes>.
    ///
    /// An explicit `lanes=*` wins over `oneway=*`.
    ///
    /// # Errors
    ///
    /// If `lanes=*` is not an integer between 1 and [`LaneCount::MAX`].
    pub fn from_tags(tags: &Tags, directionality: Directionality) -> Result<Self, TagsToRoadMsg> {
        match tags.get(&LANES) {
            Some(val) => match val.parse::<usize>() {
                Ok(lanes) if (1..=Self::MAX).contains(&lanes) => Ok(Self(lanes)),
                Ok(_) | Err(_) => Err(TagsToRoadMsg::malformed_lane_count(val)),
            },
            None => Ok(Self(match directionality.oneway {
                Oneway::Yes => 1,
                Oneway::No => 2,
            })),
        }
    }

    #[must_use]
    pub fn get(self) -> usize {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use osm_tags::Tags;

    use super::LaneCount;
    use crate::transform::tags_to_road::oneway::{Directionality, Oneway};
    use crate::transform::TagsToRoadIssue;

    const TWO_WAY: Directionality = Directionality {
        oneway: Oneway::No,
        bicycle_exempt: false,
    };
    const ONE_WAY: Directionality = Directionality {
        oneway: Oneway::Yes,
        bicycle_exempt: false,
    };

    fn count(tags: &[[&str; 2]], directionality: Directionality) -> usize {
        LaneCount::from_tags(&Tags::from_str_pairs(tags).unwrap(), directionality)
            .unwrap()
            .get()
    }

    #[test]
    fn test_defaults() {
        assert_eq!(count(&[["highway", "road"]], TWO_WAY), 2);
        assert_eq!(count(&[["highway", "road"]], ONE_WAY), 1);
    }

    #[test]
    fn test_explicit_ignores_oneway() {
        for lanes in ["1", "2", "3", "4"] {
            assert_eq!(
                count(&[["lanes", lanes]], TWO_WAY),
                count(&[["lanes", lanes]], ONE_WAY),
            );
        }
        assert_eq!(count(&[["lanes", "3"]], ONE_WAY), 3);
    }

    #[test]
    fn test_bounds() {
        assert_eq!(count(&[["lanes", "32"]], TWO_WAY), LaneCount::MAX);
        assert_eq!(count(&[["lanes", "1"]], ONE_WAY), 1);
    }

    #[test]
    fn test_malformed() {
        for lanes in ["0", "-1", "two", "", "1.5", "33", "1000000000000"] {
            let tags = Tags::from_str_pairs(&[["lanes", lanes]]).unwrap();
            let err = LaneCount::from_tags(&tags, TWO_WAY).unwrap_err();
            assert!(
                matches!(err.issue(), TagsToRoadIssue::MalformedLaneCount(val) if val == lanes),
                "lanes={lanes}"
            );
        }
    }
}
