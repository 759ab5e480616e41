//! # weft-telemetry
//!
//! Event bus for cloth telemetry. The simulator's per-step reports are
//! turned into structured events (step timing, resizes, tears, contacts)
//! and dispatched to pluggable sinks.

pub mod bus;
pub mod events;
pub mod sinks;

pub use bus::EventBus;
pub use events::{EventKind, SimulationEvent};
pub use sinks::{EventSink, TracingSink, VecSink};
