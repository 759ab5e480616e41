//! Arena storage for points and links.
//!
//! Points and links reference each other only through `PointId` and
//! `LinkId`. A link is shared by its two endpoints: it appears in the
//! owner's `links` and in the other endpoint's `incoming`. Both lists are
//! updated together in [`ClothGraph::connect`] and
//! [`ClothGraph::remove_point`], so no handle outlives its target.
//!
//! Freed slots are reused, which is only sound because removal scrubs
//! every reference to the removed point.

use weft_math::{balanced_frame, safe_direction, Quat, Vec3};
use weft_types::{LinkId, PointId};

use crate::link::{Link, LinkFilter, LinkKind};
use crate::point::Point;

/// Central store of cloth points and links.
#[derive(Debug, Clone, Default)]
pub struct ClothGraph {
    points: Vec<Option<Point>>,
    links: Vec<Option<Link>>,
    free_points: Vec<PointId>,
    free_links: Vec<LinkId>,
}

impl ClothGraph {
    pub fn new() -> Self {
        Self::default()
    }

    // ─── Points ───────────────────────────────────────────────

    /// Stores a point. Any link lists it carries are discarded.
    pub fn add_point(&mut self, mut point: Point) -> PointId {
        point.links.clear();
        point.incoming.clear();
        match self.free_points.pop() {
            Some(id) => {
                self.points[id.index()] = Some(point);
                id
            }
            None => {
                self.points.push(Some(point));
                PointId((self.points.len() - 1) as u32)
            }
        }
    }

    /// Removes a point and every link touching it.
    ///
    /// Surviving neighbours lose the corresponding entries in their
    /// `links` / `incoming` lists. Returns the removed point, whose own
    /// link lists are left empty.
    pub fn remove_point(&mut self, id: PointId) -> Option<Point> {
        let mut point = self.points.get_mut(id.index())?.take()?;
        let touching: Vec<LinkId> = point.links.drain(..).chain(point.incoming.drain(..)).collect();
        for link in touching {
            self.detach_link(link);
        }
        self.free_points.push(id);
        Some(point)
    }

    pub fn point(&self, id: PointId) -> Option<&Point> {
        self.points.get(id.index()).and_then(Option::as_ref)
    }

    pub fn point_mut(&mut self, id: PointId) -> Option<&mut Point> {
        self.points.get_mut(id.index()).and_then(Option::as_mut)
    }

    pub fn contains_point(&self, id: PointId) -> bool {
        self.point(id).is_some()
    }

    /// Number of live points.
    pub fn point_count(&self) -> usize {
        self.points.len() - self.free_points.len()
    }

    /// Live points in slot order.
    pub fn points(&self) -> impl Iterator<Item = (PointId, &Point)> + '_ {
        self.points
            .iter()
            .enumerate()
            .filter_map(|(i, p)| p.as_ref().map(|p| (PointId(i as u32), p)))
    }

    // ─── Links ────────────────────────────────────────────────

    /// Creates a link owned by `owner` toward `other`.
    ///
    /// Returns `None` if either endpoint is missing or both are the same point.
    pub fn connect(
        &mut self,
        owner: PointId,
        other: PointId,
        rest_length: f32,
        extensibility: f32,
        kind: LinkKind,
    ) -> Option<LinkId> {
        if owner == other || !self.contains_point(owner) || !self.contains_point(other) {
            return None;
        }

        let link = Link::new(owner, other, rest_length, extensibility, kind);
        let id = match self.free_links.pop() {
            Some(id) => {
                self.links[id.index()] = Some(link);
                id
            }
            None => {
                self.links.push(Some(link));
                LinkId((self.links.len() - 1) as u32)
            }
        };

        if let Some(p) = self.point_mut(owner) {
            p.links.push(id);
        }
        if let Some(p) = self.point_mut(other) {
            p.incoming.push(id);
        }
        Some(id)
    }

    pub fn link(&self, id: LinkId) -> Option<&Link> {
        self.links.get(id.index()).and_then(Option::as_ref)
    }

    pub fn link_mut(&mut self, id: LinkId) -> Option<&mut Link> {
        self.links.get_mut(id.index()).and_then(Option::as_mut)
    }

    /// Number of live links (dead/torn links included).
    pub fn link_count(&self) -> usize {
        self.links.len() - self.free_links.len()
    }

    /// Live links in slot order.
    pub fn links(&self) -> impl Iterator<Item = (LinkId, &Link)> + '_ {
        self.links
            .iter()
            .enumerate()
            .filter_map(|(i, l)| l.as_ref().map(|l| (LinkId(i as u32), l)))
    }

    /// Number of links of the given kind.
    pub fn count_kind(&self, kind: LinkKind) -> usize {
        self.links().filter(|(_, l)| l.kind() == kind).count()
    }

    /// Number of torn links.
    pub fn dead_link_count(&self) -> usize {
        self.links().filter(|(_, l)| l.is_dead()).count()
    }

    /// First link of `kind` created by `point`.
    pub fn outgoing_of_kind(&self, point: PointId, kind: LinkKind) -> Option<LinkId> {
        let p = self.point(point)?;
        p.links
            .iter()
            .copied()
            .find(|&id| self.link(id).is_some_and(|l| l.kind() == kind))
    }

    fn detach_link(&mut self, id: LinkId) {
        let Some(link) = self.links.get_mut(id.index()).and_then(Option::take) else {
            return;
        };
        for end in [link.a(), link.b()] {
            if let Some(p) = self.point_mut(end) {
                p.links.retain(|&l| l != id);
                p.incoming.retain(|&l| l != id);
            }
        }
        self.free_links.push(id);
    }

    // ─── Solving ──────────────────────────────────────────────

    /// Solves one link at `weight`.
    pub fn solve_link(&mut self, id: LinkId, weight: f32) {
        let Some(link) = self.links.get_mut(id.index()).and_then(Option::as_mut) else {
            return;
        };
        if let Some((a, b)) = pair_mut(&mut self.points, link.a(), link.b()) {
            link.solve(a, b, weight);
        }
    }

    /// Solves every link created by `point` that `filter` accepts.
    pub fn relax(&mut self, point: PointId, weight: f32, filter: LinkFilter) {
        let count = self.point(point).map_or(0, |p| p.links.len());
        for slot in 0..count {
            let Some(id) = self.point(point).and_then(|p| p.links.get(slot).copied()) else {
                break;
            };
            if self.link(id).is_some_and(|l| filter.accepts(l.kind())) {
                self.solve_link(id, weight);
            }
        }
    }

    /// Applies `f` to every link created by `point` that `filter` accepts.
    pub fn for_each_link_mut(
        &mut self,
        point: PointId,
        filter: LinkFilter,
        mut f: impl FnMut(&mut Link),
    ) {
        let Some(p) = self.points.get(point.index()).and_then(Option::as_ref) else {
            return;
        };
        for &id in &p.links {
            if let Some(link) = self.links.get_mut(id.index()).and_then(Option::as_mut) {
                if filter.accepts(link.kind()) {
                    f(link);
                }
            }
        }
    }

    pub fn set_spacing(&mut self, point: PointId, spacing: f32, filter: LinkFilter) {
        self.for_each_link_mut(point, filter, |l| l.set_rest_length(spacing));
    }

    pub fn set_extensibility(&mut self, point: PointId, extensibility: f32, filter: LinkFilter) {
        self.for_each_link_mut(point, filter, |l| l.set_extensibility(extensibility));
    }

    /// Applies the self-repair flag to every link created by `point`.
    pub fn set_self_repair(&mut self, point: PointId, can_self_repair: bool) {
        let Some(p) = self.points.get(point.index()).and_then(Option::as_ref) else {
            return;
        };
        for &id in &p.links {
            if let Some(link) = self.links.get_mut(id.index()).and_then(Option::as_mut) {
                link.set_self_repair(can_self_repair);
            }
        }
    }

    // ─── Orientation ──────────────────────────────────────────

    /// Direction through `point` along links of `kind`.
    ///
    /// Runs from the origin of the last incoming link of that kind to the
    /// target of the last outgoing one; a point missing one side uses its
    /// own position there. Falls back to +Y when both ends coincide.
    pub fn direction(&self, point: PointId, kind: LinkKind) -> Vec3 {
        let Some(p) = self.point(point) else {
            return Vec3::Y;
        };

        let out = p
            .links
            .iter()
            .filter_map(|&id| self.link(id))
            .filter(|l| l.kind() == kind)
            .last()
            .and_then(|l| self.point(l.b()))
            .map_or(p.position, |q| q.position);
        let inward = p
            .incoming
            .iter()
            .filter_map(|&id| self.link(id))
            .filter(|l| l.kind() == kind)
            .last()
            .and_then(|l| self.point(l.a()))
            .map_or(p.position, |q| q.position);

        if out == inward {
            return Vec3::Y;
        }
        safe_direction(out - inward, Vec3::Y)
    }

    /// Proxy rotation for `point`: row direction as forward, column
    /// direction as upward, balanced to be perpendicular.
    pub fn orientation(&self, point: PointId) -> Quat {
        balanced_frame(
            self.direction(point, LinkKind::Row),
            self.direction(point, LinkKind::Column),
        )
    }
}

/// Borrows two distinct point slots mutably.
fn pair_mut(points: &mut [Option<Point>], a: PointId, b: PointId) -> Option<(&mut Point, &mut Point)> {
    let (i, j) = (a.index(), b.index());
    if i == j || i.max(j) >= points.len() {
        return None;
    }
    if i < j {
        let (lo, hi) = points.split_at_mut(j);
        Some((lo[i].as_mut()?, hi[0].as_mut()?))
    } else {
        let (lo, hi) = points.split_at_mut(i);
        Some((hi[0].as_mut()?, lo[j].as_mut()?))
    }
}
