use osm_tags::{TagKey, Tags};

use crate::transform::WaySide;

/// Which key of a side-specific family a value was read from
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(in crate::transform::tags_to_road) enum Source {
    /// `X:left` or `X:right`
    Side,
    /// `X:both`
    Both,
    /// `X`
    Bare,
}

impl Source {
    /// Value applies to both sides of the way
    pub(in crate::transform::tags_to_road) fn is_generic(self) -> bool {
        matches!(self, Self::Both | Self::Bare)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub(in crate::transform::tags_to_road) struct SideValue<'tag> {
    pub key: TagKey,
    pub val: &'tag str,
    pub source: Source,
}

/// Key precedence for side-specific tags, such as `cycleway:right=*`.
///
/// Only resolves which key wins, never what the value means.
pub(in crate::transform::tags_to_road) trait TagsSided {
    /// `X:<side>`, else `X:both`, else `X`
    fn get_sided(&self, family: &TagKey, side: WaySide) -> Option<SideValue<'_>>;

    /// `X:<side>:<suffix>`, else `X:both:<suffix>`, else `X:<suffix>`.
    /// Never falls back to the opposite side.
    fn get_sided_suffix(
        &self,
        family: &TagKey,
        side: WaySide,
        suffix: &str,
    ) -> Option<SideValue<'_>>;
}

impl TagsSided for Tags {
    fn get_sided(&self, family: &TagKey, side: WaySide) -> Option<SideValue<'_>> {
        resolve(self, family, side, None)
    }

    fn get_sided_suffix(
        &self,
        family: &TagKey,
        side: WaySide,
        suffix: &str,
    ) -> Option<SideValue<'_>> {
        resolve(self, family, side, Some(suffix))
    }
}

fn resolve<'tag>(
    tags: &'tag Tags,
    family: &TagKey,
    side: WaySide,
    suffix: Option<&str>,
) -> Option<SideValue<'tag>> {
    let with_suffix = |key: TagKey| match suffix {
        Some(suffix) => key + suffix,
        None => key,
    };
    let explicit = match side {
        WaySide::Left | WaySide::Right => Some((with_suffix(family + side.as_str()), Source::Side)),
        WaySide::Both => None,
    };
    explicit
        .into_iter()
        .chain([
            (with_suffix(family + WaySide::Both.as_str()), Source::Both),
            (with_suffix(family.clone()), Source::Bare),
        ])
        .find_map(|(key, source)| {
            tags.get(&key).map(|val| SideValue { key, val, source })
        })
}
