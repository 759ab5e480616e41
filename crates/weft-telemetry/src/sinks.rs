//! Pluggable event sinks.

use std::sync::{Arc, Mutex};

use crate::events::{EventKind, SimulationEvent};

/// Trait for event consumers.
pub trait EventSink: Send {
    /// Process a single event.
    fn handle(&mut self, event: &SimulationEvent);

    /// Called when the simulation ends.
    fn finalize(&mut self) {}

    /// Returns a human-readable name for this sink.
    fn name(&self) -> &str;
}

/// Collects events in memory.
///
/// The buffer is shared, so a clone kept by the caller still sees the
/// events after the sink itself has been boxed into a bus.
#[derive(Debug, Clone, Default)]
pub struct VecSink {
    events: Arc<Mutex<Vec<SimulationEvent>>>,
}

impl VecSink {
    /// Creates an empty vec sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the collected events.
    pub fn events(&self) -> Vec<SimulationEvent> {
        self.events.lock().map(|e| e.clone()).unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.events.lock().map_or(0, |e| e.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl EventSink for VecSink {
    fn handle(&mut self, event: &SimulationEvent) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event.clone());
        }
    }

    fn name(&self) -> &str {
        "vec_sink"
    }
}

/// Logs events with `tracing`. Step markers go to `trace`, the rest to `info`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl TracingSink {
    pub fn new() -> Self {
        Self
    }
}

impl EventSink for TracingSink {
    fn handle(&mut self, event: &SimulationEvent) {
        match &event.kind {
            EventKind::StepBegin { .. } | EventKind::StepEnd { .. } => {
                tracing::trace!(timestep = event.timestep, event = ?event.kind, "simulation_event");
            }
            kind => {
                tracing::info!(timestep = event.timestep, event = ?kind, "simulation_event");
            }
        }
    }

    fn name(&self) -> &str {
        "tracing_sink"
    }
}
