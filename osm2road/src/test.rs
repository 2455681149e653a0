use osm_tags::Tags;
use serde::Deserialize;

#[derive(Clone, Deserialize)]
#[serde(untagged, deny_unknown_fields)]
pub enum RustTesting {
    Enabled(bool),
    WithOptions { expect_warnings: Option<bool> },
}

#[allow(clippy::module_name_repetitions)]
#[derive(Clone, Deserialize)]
pub struct TestCase {
    // Metadata
    /// Relevant link
    pub link: Option<String>,
    /// Comment on test case
    pub comment: Option<String>,
    /// Description of test case
    pub description: Option<String>,

    /// Data
    pub tags: Tags,
    /// Expected rendering of the road
    pub output: String,

    pub rust: Option<RustTesting>,
}

impl TestCase {
    /// Test case is enabled, true by default
    fn test_enabled(&self) -> bool {
        match self.rust {
            Some(RustTesting::Enabled(b)) => b,
            None | Some(RustTesting::WithOptions { .. }) => true,
        }
    }
    /// Test case must have warnings
    #[must_use]
    pub fn test_expects_warnings(&self) -> bool {
        match self.rust {
            None | Some(RustTesting::Enabled(_)) => false,
            Some(RustTesting::WithOptions { expect_warnings }) => expect_warnings.unwrap_or(false),
        }
    }
}

impl std::fmt::Display for TestCase {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let names: [Option<&str>; 2] = [self.description.as_deref(), self.link.as_deref()];
        let names = names.into_iter().flatten().collect::<Vec<_>>();
        if names.is_empty() {
            write!(f, "{}", self.tags.to_vec().join(" "))
        } else {
            write!(f, "{}", names.join(" "))
        }
    }
}

/// Get Test Cases from tests.yml
#[must_use]
pub fn get_tests() -> Vec<TestCase> {
    let tests: Vec<TestCase> = serde_yaml::from_str(include_str!("../../data/tests.yml"))
        .expect("invalid yaml in data/tests.yml");
    let tests: Vec<TestCase> = tests.into_iter().filter(TestCase::test_enabled).collect();
    tests
}

#[cfg(test)]
mod tests {
    use assert_json_diff::assert_json_eq;
    use serde_json::json;

    use super::*;
    use crate::road::{Printable, Road};
    use crate::transform::{tags_to_road, Config, RoadError};

    static LOG_INIT: std::sync::Once = std::sync::Once::new();

    fn env_logger_init() {
        LOG_INIT.call_once(|| {
            env_logger::builder().is_test(true).init();
        });
    }

    impl TestCase {
        fn print(&self) {
            if let Some(description) = self.description.as_ref() {
                println!("Description: {}", description);
            }
            if let Some(link) = self.link.as_ref() {
                println!("For input (example from {}):", link);
            } else {
                println!("For input:");
            }
            for [k, v] in self.tags.to_str_pairs() {
                println!("    {} = {}", k, v);
            }
            println!("    Warnings({})", self.test_expects_warnings());
            if let Some(comment) = self.comment.as_ref() {
                println!("        Comment: {}", comment);
            }
        }
    }

    fn stringify_segments(road: &Road) -> String {
        road.segments()
            .iter()
            .map(|segment| format!("{:<2}", segment.as_ascii()))
            .collect()
    }

    #[test]
    fn test_from_data() {
        env_logger_init();
        let tests = get_tests();
        assert!(!tests.is_empty());

        for test in &tests {
            match tags_to_road(&test.tags, &Config::default()) {
                Ok(road_from_tags) => {
                    let actual = road_from_tags.road.to_string();
                    if actual != test.output {
                        test.print();
                        println!("Got:");
                        println!("    {}", actual);
                        println!("    {}", stringify_segments(&road_from_tags.road));
                        println!("Expected:");
                        println!("    {}", test.output);
                        println!("{}", road_from_tags.warnings);
                        println!();
                        panic!("tags_to_road output mismatch");
                    }
                    let warnings = road_from_tags.warnings;
                    if test.test_expects_warnings() && warnings.is_empty() {
                        test.print();
                        println!("Expected warnings. Try removing `expect_warnings`.");
                        println!();
                        panic!("tags_to_road expected warnings");
                    } else if !test.test_expects_warnings() && !warnings.is_empty() {
                        test.print();
                        println!("{}", warnings);
                        println!();
                        panic!("tags_to_road has warnings");
                    }
                },
                Err(RoadError::Warnings(_warnings)) => unreachable!(),
                Err(e) => {
                    test.print();
                    println!("Expected:");
                    println!("    {}", test.output);
                    println!("{}", e);
                    println!();
                    panic!("tags_to_road error");
                },
            }
        }
    }

    #[test]
    fn test_strict_matches_expectations() {
        env_logger_init();
        for test in &get_tests() {
            let strict = tags_to_road(&test.tags, &Config::new(true));
            assert_eq!(
                strict.is_err(),
                test.test_expects_warnings(),
                "{}",
                test
            );
        }
    }

    #[test]
    fn test_serialize() {
        let tags = Tags::from_str_pairs(&[
            ["highway", "road"],
            ["oneway", "yes"],
            ["cycleway:right", "lane"],
        ])
        .unwrap();
        let road_from_tags = tags_to_road(&tags, &Config::default()).unwrap();
        assert_json_eq!(
            serde_json::to_value(&road_from_tags).unwrap(),
            json!({
                "road": {
                    "segments": [
                        {"kind": "edge", "width": 0.0},
                        {"kind": "car", "width": 3.0},
                        {"kind": "cycle", "width": 1.0},
                        {"kind": "edge", "width": 0.0},
                    ],
                    "center": 1.5,
                },
                "warnings": [],
            })
        );
    }

    #[test]
    fn test_serialize_error() {
        let tags = Tags::from_str_pairs(&[["highway", "road"], ["lanes", "0"]]).unwrap();
        let error = tags_to_road(&tags, &Config::default()).unwrap_err();
        let value = serde_json::to_value(&error).unwrap();
        let message = value["error"].as_str().unwrap();
        assert!(message.starts_with("malformed lane count: 'lanes=0'"));
    }
}
