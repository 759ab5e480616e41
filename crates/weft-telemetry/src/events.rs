//! Simulation event types.
//!
//! Lightweight value types describing what happened during a step.

use serde::{Deserialize, Serialize};
use weft_cloth::StepReport;

/// A simulation event, tagged with the step it belongs to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationEvent {
    /// Timestep number (0-indexed).
    pub timestep: u32,
    /// Event payload.
    pub kind: EventKind,
}

/// Event payload variants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum EventKind {
    /// Step started.
    StepBegin {
        /// Step length (seconds).
        dt: f32,
    },

    /// Step completed.
    StepEnd {
        /// Wall-clock time for the step (seconds).
        wall_time: f64,
    },

    /// The grid was resized at the start of the step.
    TopologyChanged {
        rows: usize,
        columns: usize,
        points: usize,
        links: usize,
    },

    /// Links broke during the step.
    LinksTorn {
        /// Links that died this step.
        newly_torn: usize,
        /// Dead links in the whole cloth.
        total_dead: usize,
    },

    /// Links healed during the step (self-repairing cloth only).
    LinksRepaired {
        repaired: usize,
        total_dead: usize,
    },

    /// Points resolved against a collider.
    Contacts { count: usize },
}

impl SimulationEvent {
    /// Creates a new event for the given timestep.
    pub fn new(timestep: u32, kind: EventKind) -> Self {
        Self { timestep, kind }
    }

    /// Expands a step report into events.
    ///
    /// `previous_dead` is the dead-link count after the previous step and is
    /// used to tell tears from repairs. Quiet steps only yield the begin and
    /// end markers.
    pub fn from_report(report: &StepReport, dt: f32, previous_dead: usize) -> Vec<Self> {
        let t = report.timestep;
        let mut events = vec![Self::new(t, EventKind::StepBegin { dt })];

        if report.topology_changed {
            events.push(Self::new(
                t,
                EventKind::TopologyChanged {
                    rows: report.rows,
                    columns: report.columns,
                    points: report.point_count,
                    links: report.link_count,
                },
            ));
        }

        // Resizing removes links, so a drop after a resize is not a repair.
        if report.dead_links > previous_dead {
            events.push(Self::new(
                t,
                EventKind::LinksTorn {
                    newly_torn: report.dead_links - previous_dead,
                    total_dead: report.dead_links,
                },
            ));
        } else if report.dead_links < previous_dead && !report.topology_changed {
            events.push(Self::new(
                t,
                EventKind::LinksRepaired {
                    repaired: previous_dead - report.dead_links,
                    total_dead: report.dead_links,
                },
            ));
        }

        if report.contacts > 0 {
            events.push(Self::new(t, EventKind::Contacts { count: report.contacts }));
        }

        events.push(Self::new(
            t,
            EventKind::StepEnd {
                wall_time: report.wall_time,
            },
        ));
        events
    }
}
