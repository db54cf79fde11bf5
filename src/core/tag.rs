//! Semantic waypoint tags.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Semantic label attached to a waypoint.
///
/// Map files spell tags as lowercase strings (`"front door"`). Strings outside
/// the known vocabulary are kept as [`Tag::Other`] and never match a
/// narration rule.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Tag {
    Building,
    Outside,
    Crossway,
    FrontDoor,
    ThroughBuilding,
    UnderBuilding,
    Other(String),
}

impl Tag {
    pub fn as_str(&self) -> &str {
        match self {
            Tag::Building => "building",
            Tag::Outside => "outside",
            Tag::Crossway => "crossway",
            Tag::FrontDoor => "front door",
            Tag::ThroughBuilding => "through building",
            Tag::UnderBuilding => "under building",
            Tag::Other(s) => s,
        }
    }
}

impl FromStr for Tag {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_ascii_lowercase().as_str() {
            "building" => Tag::Building,
            "outside" => Tag::Outside,
            "crossway" => Tag::Crossway,
            "front door" => Tag::FrontDoor,
            "through building" => Tag::ThroughBuilding,
            "under building" => Tag::UnderBuilding,
            _ => Tag::Other(s.to_string()),
        })
    }
}

impl From<String> for Tag {
    fn from(s: String) -> Self {
        match s.parse() {
            Ok(tag) => tag,
            Err(never) => match never {},
        }
    }
}

impl From<Tag> for String {
    fn from(tag: Tag) -> Self {
        tag.as_str().to_string()
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Set of tags on one waypoint
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TagSet(BTreeSet<Tag>);

impl TagSet {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn contains(&self, tag: &Tag) -> bool {
        self.0.contains(tag)
    }

    /// True when every tag in `tags` is present
    pub fn has_all(&self, tags: &[Tag]) -> bool {
        tags.iter().all(|t| self.0.contains(t))
    }

    pub fn insert(&mut self, tag: Tag) -> bool {
        self.0.insert(tag)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Tag> {
        self.0.iter()
    }
}

impl FromIterator<Tag> for TagSet {
    fn from_iter<I: IntoIterator<Item = Tag>>(iter: I) -> Self {
        TagSet(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_vocabulary() {
        assert_eq!("building".parse::<Tag>().unwrap(), Tag::Building);
        assert_eq!("Front Door".parse::<Tag>().unwrap(), Tag::FrontDoor);
        assert_eq!(
            " through building ".parse::<Tag>().unwrap(),
            Tag::ThroughBuilding
        );
        assert_eq!(
            "bike rack".parse::<Tag>().unwrap(),
            Tag::Other("bike rack".to_string())
        );
    }

    #[test]
    fn test_serde_strings() {
        let tags: TagSet =
            serde_json::from_str(r#"["outside", "crossway", "front door", "cafe"]"#).unwrap();
        assert_eq!(tags.len(), 4);
        assert!(tags.has_all(&[Tag::Outside, Tag::Crossway, Tag::FrontDoor]));
        assert!(!tags.contains(&Tag::Building));

        let json = serde_json::to_string(&TagSet::from_iter([Tag::UnderBuilding])).unwrap();
        assert_eq!(json, r#"["under building"]"#);
    }

    #[test]
    fn test_duplicates_collapse() {
        let tags: TagSet = serde_json::from_str(r#"["outside", "outside"]"#).unwrap();
        assert_eq!(tags.len(), 1);
    }
}
