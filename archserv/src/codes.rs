//! Table des codes ArchServ (type sémantique d'un point levé)
//!
//! Le code est la partie `CC` d'une clé codée `CCCCGCCIII`. Il indique au
//! consommateur aval quel type de géométrie construire avec les points d'un
//! même groupe. Le parser lui-même ne valide pas l'appartenance à cette table.

use std::fmt;

/// Codes connus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Code {
    Nail,
    Height,
    Point,
    PolylineOpen,
    PolylineClosed,
    SplineOpen,
    SplineClosed,
    Circle,
    Find,
    ControlPoint,
    FixedPoint,
    BoundaryOpen,
    BoundaryClosed,
}

/// Type de géométrie attendu pour un code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GeometryKind {
    /// Marqueurs discrets
    Point,
    /// Chemins ouverts
    Line,
    /// Chemins fermés
    Polygon,
}

/// Mapping valeur numérique -> code
pub const CODES: &[(u8, Code)] = &[
    (0, Code::Nail),
    (1, Code::Height),
    (11, Code::Point),
    (2, Code::PolylineOpen),
    (3, Code::PolylineClosed),
    (4, Code::SplineOpen),
    (5, Code::SplineClosed),
    (6, Code::Circle),
    (71, Code::Find),
    (81, Code::ControlPoint),
    (91, Code::FixedPoint),
    (92, Code::BoundaryOpen),
    (93, Code::BoundaryClosed),
];

pub const POINT_TYPES: &[Code] = &[
    Code::Nail,
    Code::Height,
    Code::Point,
    Code::Circle,
    Code::Find,
    Code::ControlPoint,
    Code::FixedPoint,
];

pub const LINE_TYPES: &[Code] = &[Code::PolylineOpen, Code::SplineOpen, Code::BoundaryOpen];

pub const POLYGON_TYPES: &[Code] = &[
    Code::PolylineClosed,
    Code::SplineClosed,
    Code::BoundaryClosed,
];

impl Code {
    /// Retrouve le code depuis sa valeur numérique
    pub fn from_value(value: u8) -> Option<Self> {
        CODES
            .iter()
            .find(|&&(v, _)| v == value)
            .map(|&(_, code)| code)
    }

    /// Valeur numérique du code (telle qu'écrite dans la clé)
    pub fn value(self) -> u8 {
        CODES
            .iter()
            .find(|&&(_, c)| c == self)
            .map(|&(v, _)| v)
            .unwrap_or_default()
    }

    pub fn name(self) -> &'static str {
        match self {
            Code::Nail => "Nail",
            Code::Height => "Height",
            Code::Point => "Point",
            Code::PolylineOpen => "PolylineOpen",
            Code::PolylineClosed => "PolylineClosed",
            Code::SplineOpen => "SplineOpen",
            Code::SplineClosed => "SplineClosed",
            Code::Circle => "Circle",
            Code::Find => "Find",
            Code::ControlPoint => "ControlPoint",
            Code::FixedPoint => "FixedPoint",
            Code::BoundaryOpen => "BoundaryOpen",
            Code::BoundaryClosed => "BoundaryClosed",
        }
    }

    pub fn geometry_kind(self) -> GeometryKind {
        if LINE_TYPES.contains(&self) {
            GeometryKind::Line
        } else if POLYGON_TYPES.contains(&self) {
            GeometryKind::Polygon
        } else {
            GeometryKind::Point
        }
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for GeometryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            GeometryKind::Point => "Point",
            GeometryKind::Line => "LineString",
            GeometryKind::Polygon => "Polygon",
        })
    }
}
