//! Vertex records and the tags used to filter them.
use std::collections::BTreeSet;
use std::fmt;

use crate::geometry::Vec3;

/// Stable identifier of a graph vertex.
///
/// Ids are handed out by a monotonically increasing counter and are never
/// recycled, so they are safe to keep in routes across edits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct VertexId(pub u32);

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Coarse passability tag of a vertex.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Default, strum::Display, strum::IntoStaticStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ZoneKind {
    #[default]
    Normal,
    /// Impassable. Never returned by closest-vertex queries, never expanded.
    Blocked,
    /// Scene-specific zone that is still passable.
    Custom(u16),
}

impl ZoneKind {
    #[inline]
    pub fn is_passable(self) -> bool {
        !matches!(self, ZoneKind::Blocked)
    }
}

/// Finer-grained category code used for interest and avoidance filtering.
///
/// Categories are independent of passability: a `FOOD` vertex can sit in a
/// `Normal` zone, and a `DANGER` vertex is still walkable unless it is also
/// marked `Blocked`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Category(pub u16);

impl Category {
    pub const NONE: Self = Self(0);
    pub const FOOD: Self = Self(1);
    pub const HOME: Self = Self(2);
    pub const WATER: Self = Self(3);
    pub const DANGER: Self = Self(4);

    /// Well-known name for the built-in codes.
    pub const fn name(self) -> Option<&'static str> {
        match self.0 {
            0 => Some("none"),
            1 => Some("food"),
            2 => Some("home"),
            3 => Some("water"),
            4 => Some("danger"),
            _ => None,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => f.write_str(name),
            None => write!(f, "category{}", self.0),
        }
    }
}

/// Set of categories. Ordered so that logs and iteration stay deterministic.
pub type CategorySet = BTreeSet<Category>;

/// Optional display hint carried along for tools that draw the graph.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: u8::MAX }
    }
}

/// A vertex of the navigation graph.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vertex {
    pub id: VertexId,
    pub name: String,
    pub position: Vec3,
    /// Undirected adjacency, kept symmetric by [`crate::Graph::add_edge`].
    pub neighbors: Vec<VertexId>,
    pub zone: ZoneKind,
    pub category: Category,
    pub hint: Option<Color>,
}

impl Vertex {
    pub fn new(id: VertexId, position: Vec3) -> Self {
        Self {
            id,
            name: format!("Vertex {}", id.0),
            position,
            neighbors: Vec::new(),
            zone: ZoneKind::Normal,
            category: Category::NONE,
            hint: None,
        }
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    #[must_use]
    pub fn with_zone(mut self, zone: ZoneKind) -> Self {
        self.zone = zone;
        self
    }

    #[must_use]
    pub fn with_category(mut self, category: Category) -> Self {
        self.category = category;
        self
    }

    #[must_use]
    pub fn with_hint(mut self, hint: Color) -> Self {
        self.hint = Some(hint);
        self
    }

    #[inline]
    pub fn is_blocked(&self) -> bool {
        !self.zone.is_passable()
    }

    #[inline]
    pub fn is_adjacent_to(&self, other: VertexId) -> bool {
        self.neighbors.contains(&other)
    }

    pub fn distance_to(&self, point: Vec3) -> f32 {
        self.position.distance(point)
    }
}
