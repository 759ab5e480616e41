//! Grid growth and shrinking.
//!
//! The grid changes one row or column at a time. Diagonal braces are
//! stitched right after each added row or column, while at most one new
//! line exists relative to the previous shape.

use weft_math::{safe_direction, Vec3};
use weft_types::PointId;

use crate::config::ClothConfig;
use crate::link::LinkKind;
use crate::point::Point;
use crate::proxy::ProxyHost;
use crate::simulation::ClothSimulation;

impl<P: ProxyHost> ClothSimulation<P> {
    /// Grows or shrinks the grid until it is `rows × columns`.
    ///
    /// Both targets are clamped to at least 1. Rows are removed, then
    /// columns removed, then rows added, then columns added. Returns true
    /// if the shape changed.
    pub(crate) fn reconcile(&mut self, rows: usize, columns: usize, config: &ClothConfig) -> bool {
        let rows = rows.max(1);
        let columns = columns.max(1);
        let (start_rows, start_columns) = (self.rows(), self.columns());

        while self.rows() > rows {
            self.remove_row();
        }
        while self.columns() > columns {
            self.remove_column();
        }
        while self.rows() < rows {
            self.add_row(config);
        }
        while self.columns() < columns {
            self.add_column(config);
        }

        let changed = (start_rows, start_columns) != (rows, columns);
        if changed {
            tracing::debug!(
                from_rows = start_rows,
                from_columns = start_columns,
                rows,
                columns,
                "cloth grid resized"
            );
        }
        changed
    }

    /// Appends a row below the last one.
    fn add_row(&mut self, config: &ClothConfig) {
        let existing_rows = self.rows();
        let columns = self.columns();
        let mut row: Vec<PointId> = Vec::with_capacity(columns);

        for j in 0..columns {
            let last = self.grid[existing_rows - 1][j];
            let before = (existing_rows > 1).then(|| self.grid[existing_rows - 2][j]);
            let position = self.extrapolate(last, before, Vec3::Z, config.spacing);

            let id = self.spawn_point(position, config);
            self.link_points(id, last, config.spacing, LinkKind::Row, config);
            if let Some(&left) = row.last() {
                self.link_points(id, left, config.spacing, LinkKind::Column, config);
            }
            row.push(id);
        }
        self.grid.push(row);

        // The old bottom corners are no longer corners.
        self.set_locked(existing_rows - 1, 0, false);
        self.set_locked(existing_rows - 1, columns - 1, false);

        for j in 1..columns {
            self.brace_cell(existing_rows, j, config);
        }
    }

    /// Appends a column to the right of the last one.
    fn add_column(&mut self, config: &ClothConfig) {
        let rows = self.rows();
        let existing_columns = self.columns();

        for i in 0..rows {
            let last = self.grid[i][existing_columns - 1];
            let before = (existing_columns > 1).then(|| self.grid[i][existing_columns - 2]);
            let position = self.extrapolate(last, before, Vec3::X, config.spacing);

            let id = self.spawn_point(position, config);
            if i > 0 {
                let above = self.grid[i - 1][existing_columns];
                self.link_points(id, above, config.spacing, LinkKind::Row, config);
            }
            self.link_points(id, last, config.spacing, LinkKind::Column, config);
            self.grid[i].push(id);
        }

        // The old right corners are no longer corners.
        self.set_locked(0, existing_columns - 1, false);
        self.set_locked(rows - 1, existing_columns - 1, false);

        for i in 1..rows {
            self.brace_cell(i, existing_columns, config);
        }
    }

    fn remove_row(&mut self) {
        if self.rows() <= 1 {
            return;
        }
        if let Some(row) = self.grid.pop() {
            for id in row {
                self.despawn_point(id);
            }
        }
        tracing::trace!(rows = self.rows(), "removed cloth row");
    }

    fn remove_column(&mut self) {
        if self.columns() <= 1 {
            return;
        }
        for i in 0..self.grid.len() {
            if let Some(id) = self.grid[i].pop() {
                self.despawn_point(id);
            }
        }
        tracing::trace!(columns = self.columns(), "removed cloth column");
    }

    /// Crossed diagonal pair in the cell whose lower-right point is `(i, j)`.
    fn brace_cell(&mut self, i: usize, j: usize, config: &ClothConfig) {
        let length = config.diagonal_spacing();
        let (here, up_left) = (self.grid[i][j], self.grid[i - 1][j - 1]);
        let (up, left) = (self.grid[i - 1][j], self.grid[i][j - 1]);
        self.link_points(here, up_left, length, LinkKind::Diagonal, config);
        self.link_points(up, left, length, LinkKind::Diagonal, config);
    }

    /// Next position along the line `before → last`, or along `axis` when
    /// the line has a single point.
    fn extrapolate(&self, last: PointId, before: Option<PointId>, axis: Vec3, spacing: f32) -> Vec3 {
        let last = self.position_of(last);
        let direction = match before {
            Some(before) => safe_direction(last - self.position_of(before), axis),
            None => axis,
        };
        last + direction * spacing
    }

    fn link_points(
        &mut self,
        owner: PointId,
        other: PointId,
        rest_length: f32,
        kind: LinkKind,
        config: &ClothConfig,
    ) {
        let created = self
            .graph
            .connect(owner, other, rest_length, config.extensibility, kind);
        if let Some(link) = created.and_then(|id| self.graph.link_mut(id)) {
            link.set_self_repair(config.can_self_repair);
        }
    }

    pub(crate) fn spawn_point(&mut self, position: Vec3, config: &ClothConfig) -> PointId {
        let handle = self.proxies.create(position);
        let extent = self.proxies.extent(handle);
        let point = Point::from_extent(position, extent, handle, false).with_friction(config.friction.air);
        self.graph.add_point(point)
    }

    fn despawn_point(&mut self, id: PointId) {
        if let Some(point) = self.graph.remove_point(id) {
            self.proxies.destroy(point.proxy());
        }
    }
}
