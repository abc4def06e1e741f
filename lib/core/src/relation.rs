// Relation kinds and the multiplicity each one implies
use serde::{Deserialize, Serialize};
use std::fmt;

/// Symbolic cardinality of an edge, rendered the way GraphWalker labels it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Multiplicity {
    #[serde(rename = "*..1")]
    ManyToOne,
    #[serde(rename = "*..*")]
    ManyToMany,
    #[serde(rename = "1..1")]
    OneToOne,
}

impl Multiplicity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Multiplicity::ManyToOne => "*..1",
            Multiplicity::ManyToMany => "*..*",
            Multiplicity::OneToOne => "1..1",
        }
    }
}

impl fmt::Display for Multiplicity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The `type` tag of a relation in a Django model graph.
///
/// Tags outside the known set are kept verbatim in [`RelationKind::Other`]
/// so they round-trip into the output unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RelationKind {
    ForeignKey,
    /// Sentry's drop-in replacement for `ForeignKey`
    FlexibleForeignKey,
    ManyToManyField,
    OneToOneField,
    /// Model inheritance; edges of this kind point from parent to child
    Inheritance,
    Other(String),
}

impl RelationKind {
    pub fn parse(tag: &str) -> Self {
        match tag {
            "ForeignKey" => RelationKind::ForeignKey,
            "FlexibleForeignKey" => RelationKind::FlexibleForeignKey,
            "ManyToManyField" => RelationKind::ManyToManyField,
            "OneToOneField" => RelationKind::OneToOneField,
            "inheritance" => RelationKind::Inheritance,
            other => RelationKind::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            RelationKind::ForeignKey => "ForeignKey",
            RelationKind::FlexibleForeignKey => "FlexibleForeignKey",
            RelationKind::ManyToManyField => "ManyToManyField",
            RelationKind::OneToOneField => "OneToOneField",
            RelationKind::Inheritance => "inheritance",
            RelationKind::Other(tag) => tag,
        }
    }

    /// Multiplicity for this kind; `None` for inheritance and unknown tags
    pub fn multiplicity(&self) -> Option<Multiplicity> {
        match self {
            RelationKind::ForeignKey | RelationKind::FlexibleForeignKey => {
                Some(Multiplicity::ManyToOne)
            }
            RelationKind::ManyToManyField => Some(Multiplicity::ManyToMany),
            RelationKind::OneToOneField => Some(Multiplicity::OneToOne),
            RelationKind::Inheritance | RelationKind::Other(_) => None,
        }
    }

    #[inline]
    pub fn is_inheritance(&self) -> bool {
        matches!(self, RelationKind::Inheritance)
    }
}

impl From<String> for RelationKind {
    fn from(tag: String) -> Self {
        match RelationKind::parse(&tag) {
            RelationKind::Other(_) => RelationKind::Other(tag),
            known => known,
        }
    }
}

impl From<RelationKind> for String {
    fn from(kind: RelationKind) -> Self {
        match kind {
            RelationKind::Other(tag) => tag,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for RelationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multiplicity_table() {
        assert_eq!(RelationKind::parse("ForeignKey").multiplicity(), Some(Multiplicity::ManyToOne));
        assert_eq!(RelationKind::parse("FlexibleForeignKey").multiplicity(), Some(Multiplicity::ManyToOne));
        assert_eq!(RelationKind::parse("ManyToManyField").multiplicity(), Some(Multiplicity::ManyToMany));
        assert_eq!(RelationKind::parse("OneToOneField").multiplicity(), Some(Multiplicity::OneToOne));
        assert_eq!(RelationKind::parse("inheritance").multiplicity(), None);
        assert_eq!(RelationKind::parse("GenericForeignKey").multiplicity(), None);
    }

    #[test]
    fn test_unknown_tag_is_kept() {
        let kind: RelationKind = serde_json::from_str("\"GenericRelation\"").unwrap();
        assert_eq!(kind, RelationKind::Other("GenericRelation".to_string()));
        assert_eq!(serde_json::to_string(&kind).unwrap(), "\"GenericRelation\"");
    }

    #[test]
    fn test_tags_are_case_sensitive() {
        assert!(RelationKind::parse("inheritance").is_inheritance());
        assert!(!RelationKind::parse("Inheritance").is_inheritance());
        assert_eq!(RelationKind::parse("foreignkey").multiplicity(), None);
    }

    #[test]
    fn test_multiplicity_serializes_as_label() {
        assert_eq!(serde_json::to_string(&Multiplicity::ManyToMany).unwrap(), "\"*..*\"");
        assert_eq!(Multiplicity::OneToOne.to_string(), "1..1");
    }
}
