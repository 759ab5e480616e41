//! Breakable distance constraint between two points.
//!
//! A link is created by one point (its owner, endpoint `a`) toward another
//! (endpoint `b`). It never owns either endpoint; both are arena handles.
//! Once stretched past `rest_length × extensibility` the link goes dead and
//! stops pulling. Dead links stay in the graph.

use serde::{Deserialize, Serialize};
use weft_types::PointId;

use crate::point::Point;

/// Role of a link in the grid topology.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkKind {
    /// Joins a point to its neighbour in the previous row (same column).
    Row,
    /// Joins a point to its neighbour in the previous column (same row).
    Column,
    /// Shear brace across a grid cell.
    Diagonal,
}

impl LinkKind {
    /// Every link kind.
    pub const ALL: [LinkKind; 3] = [LinkKind::Row, LinkKind::Column, LinkKind::Diagonal];

    /// Row and column links form the primary grid.
    pub fn is_structural(self) -> bool {
        !matches!(self, LinkKind::Diagonal)
    }
}

/// Selects which links a broadcast operation touches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkFilter {
    /// Only links of this kind.
    Only(LinkKind),
    /// Every link except this kind.
    Except(LinkKind),
}

impl LinkFilter {
    #[inline]
    pub fn accepts(self, kind: LinkKind) -> bool {
        match self {
            LinkFilter::Only(only) => kind == only,
            LinkFilter::Except(excluded) => kind != excluded,
        }
    }
}

/// A breakable distance constraint.
#[derive(Debug, Clone, PartialEq)]
pub struct Link {
    a: PointId,
    b: PointId,
    kind: LinkKind,
    rest_length: f32,
    extensibility: f32,
    dead: bool,
    can_self_repair: bool,
}

impl Link {
    /// Creates a live link from `a` (owner) to `b`.
    pub fn new(a: PointId, b: PointId, rest_length: f32, extensibility: f32, kind: LinkKind) -> Self {
        Self {
            a,
            b,
            kind,
            rest_length,
            extensibility,
            dead: false,
            can_self_repair: false,
        }
    }

    /// Owning endpoint.
    pub fn a(&self) -> PointId {
        self.a
    }

    /// Referenced endpoint.
    pub fn b(&self) -> PointId {
        self.b
    }

    pub fn kind(&self) -> LinkKind {
        self.kind
    }

    pub fn rest_length(&self) -> f32 {
        self.rest_length
    }

    pub fn extensibility(&self) -> f32 {
        self.extensibility
    }

    /// Distance beyond which the link dies.
    pub fn break_length(&self) -> f32 {
        self.rest_length * self.extensibility
    }

    pub fn is_dead(&self) -> bool {
        self.dead
    }

    pub fn can_self_repair(&self) -> bool {
        self.can_self_repair
    }

    /// Returns true if `point` is one of the endpoints.
    pub fn touches(&self, point: PointId) -> bool {
        self.a == point || self.b == point
    }

    pub fn set_rest_length(&mut self, rest_length: f32) {
        self.rest_length = rest_length;
    }

    pub fn set_extensibility(&mut self, extensibility: f32) {
        self.extensibility = extensibility;
    }

    pub fn set_self_repair(&mut self, can_self_repair: bool) {
        self.can_self_repair = can_self_repair;
    }

    /// Re-evaluates the tear state, then pulls the endpoints toward rest length.
    ///
    /// Each unlocked endpoint moves `weight` of the way toward its target,
    /// the targets sitting symmetrically around the current midpoint.
    /// Without self-repair a dead link is never re-evaluated.
    pub fn solve(&mut self, a: &mut Point, b: &mut Point, weight: f32) {
        let delta = a.position - b.position;
        if !self.dead || self.can_self_repair {
            self.dead = delta.length() > self.break_length();
        }
        if self.dead {
            return;
        }

        let half = delta.normalize_or_zero() * (self.rest_length * 0.5);
        let center = (a.position + b.position) * 0.5;
        if !a.is_locked() {
            a.position = a.position.lerp(center + half, weight);
        }
        if !b.is_locked() {
            b.position = b.position.lerp(center - half, weight);
        }
    }
}
