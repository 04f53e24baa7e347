//! Canonical spatial function catalog shared across hosts.
//!
//! Each table lists the SQL name, argument bounds and platforms of the
//! functions a registry built from it will recognise. `max_args: None`
//! means the function is variadic.

use crate::arity::{ArgumentBounds, MaxArgs};
use crate::error::Result;
use crate::node::FunctionDefinition;
use crate::platform::{AllowList, MYSQL, POSTGRESQL};

/// Static catalog declaration for one function.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogEntry {
    pub name: &'static str,
    pub min_args: usize,
    pub max_args: Option<usize>,
    pub platforms: &'static [&'static str],
}

impl CatalogEntry {
    pub fn to_definition(&self) -> Result<FunctionDefinition> {
        FunctionDefinition::new(
            self.name,
            ArgumentBounds::new(self.min_args, MaxArgs::from(self.max_args))?,
            AllowList::new(self.platforms.iter().copied()),
        )
    }
}

const PG: &[&str] = &[POSTGRESQL];
const MY: &[&str] = &[MYSQL];

/// PostGIS functions, rendered only for PostgreSQL.
pub const POSTGRESQL_FUNCTIONS: &[CatalogEntry] = &[
    // I/O
    CatalogEntry {
        name: "ST_AsBinary",
        min_args: 1,
        max_args: Some(1),
        platforms: PG,
    },
    CatalogEntry {
        name: "ST_AsGeoJSON",
        min_args: 1,
        max_args: Some(3),
        platforms: PG,
    },
    CatalogEntry {
        name: "ST_AsText",
        min_args: 1,
        max_args: Some(1),
        platforms: PG,
    },
    CatalogEntry {
        name: "ST_GeographyFromText",
        min_args: 1,
        max_args: Some(1),
        platforms: PG,
    },
    CatalogEntry {
        name: "ST_GeomFromText",
        min_args: 1,
        max_args: Some(2),
        platforms: PG,
    },
    CatalogEntry {
        name: "Geography",
        min_args: 1,
        max_args: Some(1),
        platforms: PG,
    },
    // Constructors
    CatalogEntry {
        name: "ST_Collect",
        min_args: 1,
        max_args: Some(2),
        platforms: PG,
    },
    CatalogEntry {
        name: "ST_MakeBox2D",
        min_args: 2,
        max_args: Some(2),
        platforms: PG,
    },
    CatalogEntry {
        name: "ST_MakeEnvelope",
        min_args: 4,
        max_args: Some(5),
        platforms: PG,
    },
    CatalogEntry {
        name: "ST_MakeLine",
        min_args: 1,
        max_args: Some(2),
        platforms: PG,
    },
    CatalogEntry {
        name: "ST_MakePoint",
        min_args: 2,
        max_args: Some(4),
        platforms: PG,
    },
    CatalogEntry {
        name: "ST_Point",
        min_args: 2,
        max_args: Some(2),
        platforms: PG,
    },
    // Accessors
    CatalogEntry {
        name: "ST_Boundary",
        min_args: 1,
        max_args: Some(1),
        platforms: PG,
    },
    CatalogEntry {
        name: "ST_Envelope",
        min_args: 1,
        max_args: Some(1),
        platforms: PG,
    },
    CatalogEntry {
        name: "ST_GeometryN",
        min_args: 2,
        max_args: Some(2),
        platforms: PG,
    },
    CatalogEntry {
        name: "ST_StartPoint",
        min_args: 1,
        max_args: Some(1),
        platforms: PG,
    },
    CatalogEntry {
        name: "ST_Summary",
        min_args: 1,
        max_args: Some(1),
        platforms: PG,
    },
    // Measurement
    CatalogEntry {
        name: "ST_Area",
        min_args: 1,
        max_args: Some(1),
        platforms: PG,
    },
    CatalogEntry {
        name: "ST_Azimuth",
        min_args: 2,
        max_args: Some(2),
        platforms: PG,
    },
    CatalogEntry {
        name: "ST_Centroid",
        min_args: 1,
        max_args: Some(2),
        platforms: PG,
    },
    CatalogEntry {
        name: "ST_ClosestPoint",
        min_args: 2,
        max_args: Some(2),
        platforms: PG,
    },
    CatalogEntry {
        name: "ST_Distance",
        min_args: 2,
        max_args: Some(3),
        platforms: PG,
    },
    CatalogEntry {
        name: "ST_Distance_Sphere",
        min_args: 2,
        max_args: Some(2),
        platforms: PG,
    },
    CatalogEntry {
        name: "ST_Length",
        min_args: 1,
        max_args: Some(2),
        platforms: PG,
    },
    CatalogEntry {
        name: "ST_Perimeter",
        min_args: 1,
        max_args: Some(2),
        platforms: PG,
    },
    CatalogEntry {
        name: "ST_LineCrossingDirection",
        min_args: 2,
        max_args: Some(2),
        platforms: PG,
    },
    CatalogEntry {
        name: "ST_LineInterpolatePoint",
        min_args: 2,
        max_args: Some(2),
        platforms: PG,
    },
    CatalogEntry {
        name: "ST_LineLocatePoint",
        min_args: 2,
        max_args: Some(2),
        platforms: PG,
    },
    // Operations
    CatalogEntry {
        name: "ST_Buffer",
        min_args: 2,
        max_args: Some(3),
        platforms: PG,
    },
    CatalogEntry {
        name: "ST_Expand",
        min_args: 2,
        max_args: Some(2),
        platforms: PG,
    },
    CatalogEntry {
        name: "ST_Extent",
        min_args: 1,
        max_args: Some(1),
        platforms: PG,
    },
    CatalogEntry {
        name: "ST_Intersection",
        min_args: 2,
        max_args: Some(2),
        platforms: PG,
    },
    CatalogEntry {
        name: "ST_LineSubstring",
        min_args: 3,
        max_args: Some(3),
        platforms: PG,
    },
    CatalogEntry {
        name: "ST_Scale",
        min_args: 3,
        max_args: Some(3),
        platforms: PG,
    },
    CatalogEntry {
        name: "ST_SetSRID",
        min_args: 2,
        max_args: Some(2),
        platforms: PG,
    },
    CatalogEntry {
        name: "ST_Simplify",
        min_args: 2,
        max_args: Some(3),
        platforms: PG,
    },
    CatalogEntry {
        name: "ST_SnapToGrid",
        min_args: 2,
        max_args: Some(6),
        platforms: PG,
    },
    CatalogEntry {
        name: "ST_Split",
        min_args: 2,
        max_args: Some(2),
        platforms: PG,
    },
    CatalogEntry {
        name: "ST_Transform",
        min_args: 2,
        max_args: Some(3),
        platforms: PG,
    },
    // Predicates
    CatalogEntry {
        name: "ST_Contains",
        min_args: 2,
        max_args: Some(2),
        platforms: PG,
    },
    CatalogEntry {
        name: "ST_ContainsProperly",
        min_args: 2,
        max_args: Some(2),
        platforms: PG,
    },
    CatalogEntry {
        name: "ST_CoveredBy",
        min_args: 2,
        max_args: Some(2),
        platforms: PG,
    },
    CatalogEntry {
        name: "ST_Covers",
        min_args: 2,
        max_args: Some(2),
        platforms: PG,
    },
    CatalogEntry {
        name: "ST_Crosses",
        min_args: 2,
        max_args: Some(2),
        platforms: PG,
    },
    CatalogEntry {
        name: "ST_Disjoint",
        min_args: 2,
        max_args: Some(2),
        platforms: PG,
    },
    CatalogEntry {
        name: "ST_DWithin",
        min_args: 3,
        max_args: Some(4),
        platforms: PG,
    },
    CatalogEntry {
        name: "ST_Intersects",
        min_args: 2,
        max_args: Some(2),
        platforms: PG,
    },
    CatalogEntry {
        name: "ST_Overlaps",
        min_args: 2,
        max_args: Some(2),
        platforms: PG,
    },
    CatalogEntry {
        name: "ST_Touches",
        min_args: 2,
        max_args: Some(2),
        platforms: PG,
    },
    CatalogEntry {
        name: "ST_Within",
        min_args: 2,
        max_args: Some(2),
        platforms: PG,
    },
];

/// MySQL spatial functions, rendered only for MySQL.
pub const MYSQL_FUNCTIONS: &[CatalogEntry] = &[
    // I/O
    CatalogEntry {
        name: "AsBinary",
        min_args: 1,
        max_args: Some(1),
        platforms: MY,
    },
    CatalogEntry {
        name: "AsText",
        min_args: 1,
        max_args: Some(1),
        platforms: MY,
    },
    CatalogEntry {
        name: "GeomFromText",
        min_args: 1,
        max_args: Some(2),
        platforms: MY,
    },
    // Constructors
    CatalogEntry {
        name: "LineString",
        min_args: 2,
        max_args: None,
        platforms: MY,
    },
    CatalogEntry {
        name: "Point",
        min_args: 2,
        max_args: Some(2),
        platforms: MY,
    },
    // Accessors
    CatalogEntry {
        name: "Dimension",
        min_args: 1,
        max_args: Some(1),
        platforms: MY,
    },
    CatalogEntry {
        name: "EndPoint",
        min_args: 1,
        max_args: Some(1),
        platforms: MY,
    },
    CatalogEntry {
        name: "Envelope",
        min_args: 1,
        max_args: Some(1),
        platforms: MY,
    },
    CatalogEntry {
        name: "ExteriorRing",
        min_args: 1,
        max_args: Some(1),
        platforms: MY,
    },
    CatalogEntry {
        name: "GeometryType",
        min_args: 1,
        max_args: Some(1),
        platforms: MY,
    },
    CatalogEntry {
        name: "InteriorRingN",
        min_args: 2,
        max_args: Some(2),
        platforms: MY,
    },
    CatalogEntry {
        name: "IsClosed",
        min_args: 1,
        max_args: Some(1),
        platforms: MY,
    },
    CatalogEntry {
        name: "IsEmpty",
        min_args: 1,
        max_args: Some(1),
        platforms: MY,
    },
    CatalogEntry {
        name: "IsSimple",
        min_args: 1,
        max_args: Some(1),
        platforms: MY,
    },
    CatalogEntry {
        name: "NumInteriorRings",
        min_args: 1,
        max_args: Some(1),
        platforms: MY,
    },
    CatalogEntry {
        name: "NumPoints",
        min_args: 1,
        max_args: Some(1),
        platforms: MY,
    },
    CatalogEntry {
        name: "PointN",
        min_args: 2,
        max_args: Some(2),
        platforms: MY,
    },
    CatalogEntry {
        name: "SRID",
        min_args: 1,
        max_args: Some(1),
        platforms: MY,
    },
    CatalogEntry {
        name: "StartPoint",
        min_args: 1,
        max_args: Some(1),
        platforms: MY,
    },
    CatalogEntry {
        name: "X",
        min_args: 1,
        max_args: Some(1),
        platforms: MY,
    },
    CatalogEntry {
        name: "Y",
        min_args: 1,
        max_args: Some(1),
        platforms: MY,
    },
    // Measurement
    CatalogEntry {
        name: "Area",
        min_args: 1,
        max_args: Some(1),
        platforms: MY,
    },
    CatalogEntry {
        name: "Centroid",
        min_args: 1,
        max_args: Some(1),
        platforms: MY,
    },
    CatalogEntry {
        name: "Distance",
        min_args: 2,
        max_args: Some(2),
        platforms: MY,
    },
    CatalogEntry {
        name: "GLength",
        min_args: 1,
        max_args: Some(1),
        platforms: MY,
    },
    CatalogEntry {
        name: "ST_Distance_Sphere",
        min_args: 2,
        max_args: Some(3),
        platforms: MY,
    },
    // Operations
    CatalogEntry {
        name: "Buffer",
        min_args: 2,
        max_args: Some(2),
        platforms: MY,
    },
    // Predicates
    CatalogEntry {
        name: "Contains",
        min_args: 2,
        max_args: Some(2),
        platforms: MY,
    },
    CatalogEntry {
        name: "Crosses",
        min_args: 2,
        max_args: Some(2),
        platforms: MY,
    },
    CatalogEntry {
        name: "Disjoint",
        min_args: 2,
        max_args: Some(2),
        platforms: MY,
    },
    CatalogEntry {
        name: "Equals",
        min_args: 2,
        max_args: Some(2),
        platforms: MY,
    },
    CatalogEntry {
        name: "Intersects",
        min_args: 2,
        max_args: Some(2),
        platforms: MY,
    },
    CatalogEntry {
        name: "MBRContains",
        min_args: 2,
        max_args: Some(2),
        platforms: MY,
    },
    CatalogEntry {
        name: "MBRDisjoint",
        min_args: 2,
        max_args: Some(2),
        platforms: MY,
    },
    CatalogEntry {
        name: "MBREqual",
        min_args: 2,
        max_args: Some(2),
        platforms: MY,
    },
    CatalogEntry {
        name: "MBRIntersects",
        min_args: 2,
        max_args: Some(2),
        platforms: MY,
    },
    CatalogEntry {
        name: "MBROverlaps",
        min_args: 2,
        max_args: Some(2),
        platforms: MY,
    },
    CatalogEntry {
        name: "MBRTouches",
        min_args: 2,
        max_args: Some(2),
        platforms: MY,
    },
    CatalogEntry {
        name: "MBRWithin",
        min_args: 2,
        max_args: Some(2),
        platforms: MY,
    },
    CatalogEntry {
        name: "Overlaps",
        min_args: 2,
        max_args: Some(2),
        platforms: MY,
    },
    CatalogEntry {
        name: "Touches",
        min_args: 2,
        max_args: Some(2),
        platforms: MY,
    },
    CatalogEntry {
        name: "Within",
        min_args: 2,
        max_args: Some(2),
        platforms: MY,
    },
];
