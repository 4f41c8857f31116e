use std::fmt::{Display, Formatter};

/// Spatial relationship between two volumes, as returned by the `contains` family of routines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ContainmentType {
    /// The two volumes don't touch.
    Disjoint,
    /// The two volumes overlap, but the first one does not fully enclose the second.
    Intersects,
    /// The first volume fully encloses the second.
    Contains,
}

/// Position of a point or a volume relative to a plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PlaneIntersectionType {
    /// Entirely behind the plane, on the opposite side of the normal.
    Back,
    /// Entirely in front of the plane, on the same side of the normal.
    Front,
    /// Crossing or lying on the plane.
    Intersecting,
}

impl Display for ContainmentType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ContainmentType::Disjoint => "Disjoint",
            ContainmentType::Intersects => "Intersects",
            ContainmentType::Contains => "Contains",
        };
        write!(f, "{}", name)
    }
}

impl Display for PlaneIntersectionType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            PlaneIntersectionType::Back => "Back",
            PlaneIntersectionType::Front => "Front",
            PlaneIntersectionType::Intersecting => "Intersecting",
        };
        write!(f, "{}", name)
    }
}
