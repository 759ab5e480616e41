//! Integration tests for weft-telemetry.

use weft_cloth::{ClothConfig, ClothSimulation, NullProxies, StepReport};
use weft_math::Vec3;
use weft_telemetry::bus::EventBus;
use weft_telemetry::events::{EventKind, SimulationEvent};
use weft_telemetry::sinks::{TracingSink, VecSink};

fn report(timestep: u32) -> StepReport {
    StepReport {
        timestep,
        rows: 2,
        columns: 2,
        point_count: 4,
        link_count: 6,
        ..Default::default()
    }
}

#[test]
fn emit_and_flush() {
    let mut bus = EventBus::new();
    let sink = VecSink::new();
    bus.add_sink(Box::new(sink.clone()));

    bus.emit(SimulationEvent::new(0, EventKind::StepBegin { dt: 0.02 }));
    bus.emit(SimulationEvent::new(0, EventKind::StepEnd { wall_time: 0.001 }));
    assert!(sink.is_empty());

    bus.flush();
    assert_eq!(sink.len(), 2);
    assert_eq!(sink.events()[0].kind, EventKind::StepBegin { dt: 0.02 });
}

#[test]
fn disabled_bus_drops_events() {
    let mut bus = EventBus::new();
    let sink = VecSink::new();
    bus.add_sink(Box::new(sink.clone()));
    bus.set_enabled(false);
    assert!(!bus.is_enabled());

    bus.emit(SimulationEvent::new(0, EventKind::StepBegin { dt: 0.02 }));
    bus.flush();
    assert!(sink.is_empty());
}

#[test]
fn multiple_sinks() {
    let mut bus = EventBus::new();
    let (first, second) = (VecSink::new(), VecSink::new());
    bus.add_sink(Box::new(first.clone()));
    bus.add_sink(Box::new(second.clone()));
    bus.add_sink(Box::new(TracingSink::new()));
    assert_eq!(bus.sink_count(), 3);
    assert_eq!(bus.sink_names(), vec!["vec_sink", "vec_sink", "tracing_sink"]);

    bus.emit(SimulationEvent::new(3, EventKind::Contacts { count: 7 }));
    bus.finish();
    assert_eq!(first.len(), 1);
    assert_eq!(second.len(), 1);
}

#[test]
fn quiet_step_yields_markers_only() {
    let events = SimulationEvent::from_report(&report(4), 0.02, 0);
    assert_eq!(events.len(), 2);
    assert!(matches!(events[0].kind, EventKind::StepBegin { .. }));
    assert!(matches!(events[1].kind, EventKind::StepEnd { .. }));
    assert!(events.iter().all(|e| e.timestep == 4));
}

#[test]
fn tear_and_contacts_are_reported() {
    let r = StepReport {
        dead_links: 3,
        contacts: 5,
        topology_changed: true,
        ..report(1)
    };
    let kinds: Vec<EventKind> = SimulationEvent::from_report(&r, 0.02, 1)
        .into_iter()
        .map(|e| e.kind)
        .collect();

    assert!(kinds.contains(&EventKind::TopologyChanged {
        rows: 2,
        columns: 2,
        points: 4,
        links: 6
    }));
    assert!(kinds.contains(&EventKind::LinksTorn {
        newly_torn: 2,
        total_dead: 3
    }));
    assert!(kinds.contains(&EventKind::Contacts { count: 5 }));
}

#[test]
fn repair_only_without_resize() {
    let healed = StepReport {
        dead_links: 1,
        ..report(2)
    };
    let events = SimulationEvent::from_report(&healed, 0.02, 4);
    assert!(events.iter().any(|e| e.kind
        == EventKind::LinksRepaired {
            repaired: 3,
            total_dead: 1
        }));

    let shrunk = StepReport {
        topology_changed: true,
        ..healed
    };
    let events = SimulationEvent::from_report(&shrunk, 0.02, 4);
    assert!(!events
        .iter()
        .any(|e| matches!(e.kind, EventKind::LinksRepaired { .. })));
}

#[test]
fn simulation_reports_feed_the_bus() {
    let config = ClothConfig::default();
    let mut sim = ClothSimulation::new(Vec3::ZERO, &config, NullProxies::new());
    let mut bus = EventBus::new();
    let sink = VecSink::new();
    bus.add_sink(Box::new(sink.clone()));

    let mut dead = 0;
    for _ in 0..3 {
        let report = sim.step(3, 3, &config, 0.02);
        bus.emit_all(SimulationEvent::from_report(&report, 0.02, dead));
        dead = report.dead_links;
    }
    bus.flush();

    let resized = sink
        .events()
        .iter()
        .filter(|e| matches!(e.kind, EventKind::TopologyChanged { .. }))
        .count();
    assert_eq!(resized, 1);
}

#[test]
fn event_serialization() {
    let event = SimulationEvent::new(
        5,
        EventKind::LinksTorn {
            newly_torn: 2,
            total_dead: 9,
        },
    );
    let json = serde_json::to_string(&event).unwrap();
    let recovered: SimulationEvent = serde_json::from_str(&json).unwrap();
    assert_eq!(recovered, event);
    assert!(json.contains("newly_torn"));
}

#[test]
fn only_step_events_deserialize() {
    let custom = r#"{"timestep":0,"kind":{"Custom":{"label":"x","payload":"{}"}}}"#;
    assert!(serde_json::from_str::<SimulationEvent>(custom).is_err());

    let contacts = r#"{"timestep":2,"kind":{"Contacts":{"count":4}}}"#;
    let event: SimulationEvent = serde_json::from_str(contacts).unwrap();
    assert_eq!(event.kind, EventKind::Contacts { count: 4 });
}
