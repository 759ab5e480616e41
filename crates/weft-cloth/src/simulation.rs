//! The cloth simulator.
//!
//! Owns the grid of points, the link arena and the visual proxies, and
//! runs the fixed per-step pipeline:
//!
//! ```text
//! reconcile grid size
//! refresh link lengths        (spacing changed)
//! refresh break thresholds    (extensibility changed or grid resized)
//! propagate self-repair       (flag changed)
//! enforce corner pins
//! integrate gravity + wind
//! soft diagonal pass          (consistency != 0)
//! N full-weight passes over row/column links
//! collisions                  (first hit wins)
//! write poses to proxies
//! ```
//!
//! Points are always visited row-major.

use std::time::Instant;

use weft_math::Vec3;
use weft_types::constants::STURDY_EXTENSIBILITY_FACTOR;
use weft_types::PointId;

use crate::config::ClothConfig;
use crate::graph::ClothGraph;
use crate::link::{LinkFilter, LinkKind};
use crate::proxy::ProxyHost;
use crate::report::StepReport;
use crate::wind::WindField;

/// Last values the change-gated refreshes ran with.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
struct RefreshCache {
    spacing: Option<f32>,
    extensibility: Option<f32>,
    can_self_repair: Option<bool>,
}

/// A resizable, tearable cloth grid.
pub struct ClothSimulation<P: ProxyHost> {
    pub(crate) graph: ClothGraph,
    /// Point handles, `grid[row][column]`. Never empty, rectangular.
    pub(crate) grid: Vec<Vec<PointId>>,
    pub(crate) proxies: P,
    origin: Vec3,
    wind: Option<Box<dyn WindField>>,
    cache: RefreshCache,
    timestep: u32,
}

impl<P: ProxyHost> ClothSimulation<P> {
    /// Creates a 1×1 cloth at `origin`. The single point is corner A.
    pub fn new(origin: Vec3, config: &ClothConfig, proxies: P) -> Self {
        let mut sim = Self {
            graph: ClothGraph::new(),
            grid: Vec::new(),
            proxies,
            origin,
            wind: None,
            cache: RefreshCache::default(),
            timestep: 0,
        };
        let first = sim.spawn_point(origin, config);
        if let Some(p) = sim.graph.point_mut(first) {
            p.set_locked(config.corners.a);
        }
        sim.grid.push(vec![first]);
        sim
    }

    /// Installs a wind field sampled at every point each step.
    pub fn set_wind_field(&mut self, wind: Box<dyn WindField>) {
        self.wind = Some(wind);
    }

    pub fn clear_wind_field(&mut self) {
        self.wind = None;
    }

    pub fn has_wind_field(&self) -> bool {
        self.wind.is_some()
    }

    /// Advances the cloth by one fixed step of `dt` seconds, first resizing
    /// the grid to `target_rows × target_columns`.
    pub fn step(
        &mut self,
        target_rows: usize,
        target_columns: usize,
        config: &ClothConfig,
        dt: f32,
    ) -> StepReport {
        let start = Instant::now();

        let topology_changed = self.reconcile(target_rows, target_columns, config);
        self.refresh_parameters(config, topology_changed);
        self.enforce_corners(config);
        self.integrate(config, dt);

        if config.consistency != 0.0 {
            self.relax_all(config.consistency, LinkFilter::Only(LinkKind::Diagonal));
        }
        for _ in 0..config.solve_iterations {
            self.relax_all(1.0, LinkFilter::Except(LinkKind::Diagonal));
        }

        let contacts = self.resolve_collisions(config);
        self.write_back();

        let report = StepReport {
            timestep: self.timestep,
            rows: self.rows(),
            columns: self.columns(),
            point_count: self.graph.point_count(),
            link_count: self.graph.link_count(),
            dead_links: self.graph.dead_link_count(),
            contacts,
            topology_changed,
            wall_time: start.elapsed().as_secs_f64(),
        };
        tracing::trace!(
            timestep = report.timestep,
            points = report.point_count,
            dead_links = report.dead_links,
            contacts = report.contacts,
            "cloth step"
        );
        self.timestep += 1;
        report
    }

    // ─── Pipeline stages ──────────────────────────────────────

    fn refresh_parameters(&mut self, config: &ClothConfig, topology_changed: bool) {
        if self.cache.spacing != Some(config.spacing) {
            self.cache.spacing = Some(config.spacing);
            self.refresh_spacing(config.spacing, config.diagonal_spacing());
        }
        if self.cache.extensibility != Some(config.extensibility) || topology_changed {
            self.cache.extensibility = Some(config.extensibility);
            self.refresh_extensibility(config.extensibility);
        }
        if self.cache.can_self_repair != Some(config.can_self_repair) {
            self.cache.can_self_repair = Some(config.can_self_repair);
            for row in &self.grid {
                for &id in row {
                    self.graph.set_self_repair(id, config.can_self_repair);
                }
            }
            tracing::debug!(can_self_repair = config.can_self_repair, "self-repair updated");
        }
    }

    fn refresh_spacing(&mut self, spacing: f32, diagonal_spacing: f32) {
        for row in &self.grid {
            for &id in row {
                self.graph.set_spacing(id, spacing, LinkFilter::Except(LinkKind::Diagonal));
                self.graph.set_spacing(id, diagonal_spacing, LinkFilter::Only(LinkKind::Diagonal));
            }
        }
        tracing::debug!(spacing, "link spacing updated");
    }

    /// Reassigns break thresholds with the reinforcement pattern.
    ///
    /// Every column link is sturdy, so tears run along rows. On each row
    /// one row link is sturdy too: last column on even rows, first column
    /// on odd rows, which makes tears zig-zag like a pulled thread.
    fn refresh_extensibility(&mut self, extensibility: f32) {
        let sturdy = extensibility * STURDY_EXTENSIBILITY_FACTOR;
        let columns = self.columns();
        for (i, row) in self.grid.iter().enumerate() {
            let sturdy_column = if i % 2 == 0 { columns - 1 } else { 0 };
            for (j, &id) in row.iter().enumerate() {
                let row_link = if j == sturdy_column { sturdy } else { extensibility };
                self.graph.set_extensibility(id, row_link, LinkFilter::Only(LinkKind::Row));
                self.graph.set_extensibility(id, sturdy, LinkFilter::Only(LinkKind::Column));
                self.graph.set_extensibility(id, extensibility, LinkFilter::Only(LinkKind::Diagonal));
            }
        }
        tracing::debug!(extensibility, sturdy, "link extensibility updated");
    }

    fn enforce_corners(&mut self, config: &ClothConfig) {
        let (last_row, last_column) = (self.rows() - 1, self.columns() - 1);
        self.set_locked(0, 0, config.corners.a);
        self.set_locked(last_row, 0, config.corners.b);
        self.set_locked(0, last_column, config.corners.c);
        self.set_locked(last_row, last_column, config.corners.d);
    }

    fn integrate(&mut self, config: &ClothConfig, dt: f32) {
        let gravity = Vec3::NEG_Y * config.mass * config.gravity;
        let wind_scale = config.wind_multiplier * config.mass;
        for row in &self.grid {
            for &id in row {
                let Some(point) = self.graph.point_mut(id) else {
                    continue;
                };
                let mut force = gravity;
                if let Some(wind) = &self.wind {
                    force += wind.sample(point.position()) * wind_scale;
                }
                point.integrate(force, dt);
            }
        }
    }

    fn relax_all(&mut self, weight: f32, filter: LinkFilter) {
        for row in &self.grid {
            for &id in row {
                self.graph.relax(id, weight, filter);
            }
        }
    }

    fn resolve_collisions(&mut self, config: &ClothConfig) -> usize {
        let mut contacts = 0;
        for row in &self.grid {
            for &id in row {
                if let Some(point) = self.graph.point_mut(id) {
                    if point.resolve_collisions(&config.colliders, &config.friction) {
                        contacts += 1;
                    }
                }
            }
        }
        contacts
    }

    fn write_back(&mut self) {
        for row in &self.grid {
            for &id in row {
                let rotation = self.graph.orientation(id);
                if let Some(point) = self.graph.point(id) {
                    self.proxies.set_pose(point.proxy(), point.position(), rotation);
                }
            }
        }
    }

    // ─── Accessors ────────────────────────────────────────────

    pub fn rows(&self) -> usize {
        self.grid.len()
    }

    pub fn columns(&self) -> usize {
        self.grid.first().map_or(0, Vec::len)
    }

    /// Number of steps run so far.
    pub fn timestep(&self) -> u32 {
        self.timestep
    }

    /// Where the first point was created.
    pub fn origin(&self) -> Vec3 {
        self.origin
    }

    pub fn graph(&self) -> &ClothGraph {
        &self.graph
    }

    /// Direct access to points and links, e.g. for dragging a point.
    pub fn graph_mut(&mut self) -> &mut ClothGraph {
        &mut self.graph
    }

    pub fn proxies(&self) -> &P {
        &self.proxies
    }

    pub fn proxies_mut(&mut self) -> &mut P {
        &mut self.proxies
    }

    /// Handle of the point at `(row, column)`.
    pub fn point_id(&self, row: usize, column: usize) -> Option<PointId> {
        self.grid.get(row).and_then(|r| r.get(column)).copied()
    }

    /// Handles of corners A, B, C, D.
    pub fn corners(&self) -> [PointId; 4] {
        let (last_row, last_column) = (self.rows() - 1, self.columns() - 1);
        [
            self.grid[0][0],
            self.grid[last_row][0],
            self.grid[0][last_column],
            self.grid[last_row][last_column],
        ]
    }

    /// Point positions, row-major.
    pub fn positions(&self) -> Vec<Vec3> {
        self.grid
            .iter()
            .flatten()
            .filter_map(|&id| self.graph.point(id))
            .map(|p| p.position())
            .collect()
    }

    pub(crate) fn position_of(&self, id: PointId) -> Vec3 {
        self.graph.point(id).map_or(self.origin, |p| p.position())
    }

    pub(crate) fn set_locked(&mut self, row: usize, column: usize, locked: bool) {
        if let Some(id) = self.point_id(row, column) {
            if let Some(p) = self.graph.point_mut(id) {
                p.set_locked(locked);
            }
        }
    }
}
