use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// Possible relations between two geometric entities A and B.
/// A is `SpatialRelation` to B
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SpatialRelation {
    /// A ∩ B = ∅
    Disjoint,
    /// A ∩ B ≠ ∅ and neither A ⊆ B nor B ⊆ A
    Intersects,
    /// B ⊆ A
    Contains,
    /// A ⊆ B
    Within,
}

impl SpatialRelation {
    /// The relation of B to A, given that `self` is the relation of A to B.
    /// Guarantees `a.relate(b) == b.relate(a).transpose()`.
    pub fn transpose(self) -> Self {
        match self {
            SpatialRelation::Contains => SpatialRelation::Within,
            SpatialRelation::Within => SpatialRelation::Contains,
            r => r,
        }
    }

    /// Whether the two entities share at least one point.
    pub fn intersects(self) -> bool {
        self != SpatialRelation::Disjoint
    }

    /// Aggregates the relations of a subject against two parts of another entity
    /// into the relation against the entity as a whole.
    pub fn combine(self, other: SpatialRelation) -> SpatialRelation {
        use SpatialRelation::*;
        match (self, other) {
            (a, b) if a == b => a,
            (Disjoint, Contains) | (Contains, Disjoint) => Contains,
            _ => Intersects,
        }
    }
}

impl Display for SpatialRelation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            SpatialRelation::Disjoint => "DISJOINT",
            SpatialRelation::Intersects => "INTERSECTS",
            SpatialRelation::Contains => "CONTAINS",
            SpatialRelation::Within => "WITHIN",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::SpatialRelation::*;
    use super::*;

    #[test]
    fn transpose_swaps_containment_only() {
        assert_eq!(Contains.transpose(), Within);
        assert_eq!(Within.transpose(), Contains);
        assert_eq!(Disjoint.transpose(), Disjoint);
        assert_eq!(Intersects.transpose(), Intersects);
    }

    #[test]
    fn transpose_is_an_involution() {
        for r in [Disjoint, Intersects, Contains, Within] {
            assert_eq!(r.transpose().transpose(), r);
        }
    }

    #[test]
    fn combine_relations() {
        assert_eq!(Within.combine(Within), Within);
        assert_eq!(Disjoint.combine(Contains), Contains);
        assert_eq!(Contains.combine(Disjoint), Contains);
        assert_eq!(Within.combine(Disjoint), Intersects);
        assert_eq!(Contains.combine(Within), Intersects);
    }

    #[test]
    fn display_uses_upper_case_names() {
        assert_eq!(Intersects.to_string(), "INTERSECTS");
        assert_eq!(Within.to_string(), "WITHIN");
    }
}
