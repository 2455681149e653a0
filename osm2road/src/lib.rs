//! This crate transforms tags from an OpenStreetMap (OSM) way into a road cross-section:
//! the ordered segments across the road from left to right, and the offset of the way's
//! digitized line within them. Map tile renderers use it to overlay road geometry.
//!
//! ```
//! use osm2road::transform::{tags_to_road, Config};
//! use osm_tags::Tags;
//!
//! let tags = Tags::from_str_pairs(&[["highway", "road"], ["cycleway", "lane"]]).unwrap();
//! let road = tags_to_road(&tags, &Config::default()).unwrap().road;
//! assert_eq!(
//!     road.to_string(),
//!     "Road(Edge 0.0m|Cycle 1.0m|Car 3.0m|Car 3.0m|Cycle 1.0m|Edge 0.0m, Center=4.0m)"
//! );
//! ```

#![warn(clippy::pedantic, clippy::cargo, clippy::restriction)]
// Allow cargo lints
#![allow(clippy::cargo_common_metadata)]
#![allow(clippy::multiple_crate_versions)]
// Allow restriction lints
#![allow(
    clippy::blanket_clippy_restriction_lints,
    clippy::exhaustive_enums,
    clippy::exhaustive_structs,
    clippy::expect_used,
    clippy::float_arithmetic,
    clippy::implicit_return,
    clippy::missing_docs_in_private_items,
    clippy::missing_inline_in_public_items,
    clippy::mod_module_files,
    clippy::pattern_type_mismatch,
    clippy::pub_use,
    clippy::separated_literal_suffix,
    clippy::shadow_reuse,
    clippy::shadow_same,
    clippy::shadow_unrelated,
    clippy::single_char_lifetime_names,
    clippy::unreachable,
    clippy::unwrap_in_result,
    clippy::unwrap_used,
    clippy::wildcard_enum_match_arm
)]

pub mod metric;
pub mod road;

pub mod transform;

#[cfg(feature = "tests")]
pub mod test;
