#![allow(non_snake_case)]

use super::*;
use crate::LOCUS_FIELD;
use parking_lot::Mutex;
use std::sync::Arc;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::Layer;
use tracing_subscriber::layer::Context;
use tracing_subscriber::prelude::*;

#[derive(Debug, Clone, PartialEq)]
struct Captured {
    level: Level,
    locus: Option<String>,
    message: Option<String>,
}

/// Records every event in memory
#[derive(Clone, Default)]
struct CaptureLayer {
    events: Arc<Mutex<Vec<Captured>>>,
}

impl<S: Subscriber> Layer<S> for CaptureLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut visitor = FieldVisitor::default();
        event.record(&mut visitor);
        self.events.lock().push(Captured {
            level: *event.metadata().level(),
            locus: visitor.locus,
            message: visitor.message,
        });
    }
}

#[derive(Default)]
struct FieldVisitor {
    locus: Option<String>,
    message: Option<String>,
}

impl Visit for FieldVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let rendered = format!("{value:?}");
        match field.name() {
            "message" => self.message = Some(rendered),
            name if name == LOCUS_FIELD => self.locus = Some(rendered),
            _ => {}
        }
    }
}

fn capture<F: FnOnce()>(f: F) -> Vec<Captured> {
    let layer = CaptureLayer::default();
    let subscriber = tracing_subscriber::registry().with(layer.clone());
    tracing::subscriber::with_default(subscriber, f);
    let events = layer.events.lock().clone();
    events
}

#[test]
fn TracingSink___error___emits_error_event_with_locus() {
    let sink = TracingSink::new();

    let events = capture(|| sink.error(&Locus::field("com.example.User", "phone"), "missing"));

    assert_eq!(
        events,
        vec![Captured {
            level: Level::ERROR,
            locus: Some("com.example.User#phone".into()),
            message: Some("missing".into()),
        }]
    );
}

#[test]
fn TracingSink___severities___map_to_levels() {
    let sink = TracingSink::new();
    let locus = Locus::class("com.example.User");

    let events = capture(|| {
        sink.warn(&locus, "w");
        sink.note(&locus, "n");
        sink.error(&locus, "e");
    });

    let levels: Vec<_> = events.iter().map(|e| e.level).collect();
    assert_eq!(levels, vec![Level::WARN, Level::INFO, Level::ERROR]);
}

#[test]
fn TracingSink___counts___track_errors_and_warnings() {
    let sink = TracingSink::new();
    let locus = Locus::class("A");

    capture(|| {
        sink.warn(&locus, "w1");
        sink.warn(&locus, "w2");
        sink.note(&locus, "n");
        sink.error(&locus, "e");
    });

    assert_eq!(sink.warning_count(), 2);
    assert_eq!(sink.error_count(), 1);
    assert!(sink.has_errors());
}

#[test]
fn TracingSink___new___starts_clean() {
    let sink = TracingSink::new();

    assert_eq!(sink.error_count(), 0);
    assert!(!sink.has_errors());
}
