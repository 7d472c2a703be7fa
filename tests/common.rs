#![allow(dead_code)]

use std::fmt::{self, Write};
use std::sync::{Arc, Mutex};

use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::{Layer, Registry};

/// A diagnostic recorded while running a closure under [`capture`].
#[derive(Debug, Clone)]
pub struct Captured {
    pub level: Level,
    pub text: String,
}

#[derive(Clone, Default)]
struct CaptureLayer {
    events: Arc<Mutex<Vec<Captured>>>,
}

struct TextVisitor<'a>(&'a mut String);

impl Visit for TextVisitor<'_> {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            let _ = write!(self.0, "{value} ");
        } else {
            let _ = write!(self.0, "{}={value} ", field.name());
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            let _ = write!(self.0, "{value:?} ");
        } else {
            let _ = write!(self.0, "{}={value:?} ", field.name());
        }
    }
}

impl<S: Subscriber> Layer<S> for CaptureLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut text = String::new();
        event.record(&mut TextVisitor(&mut text));
        self.events
            .lock()
            .unwrap_or_else(|err| err.into_inner())
            .push(Captured {
                level: *event.metadata().level(),
                text,
            });
    }
}

/// Runs `f` with a thread-local subscriber and returns its result with every event it emitted.
pub fn capture<R>(f: impl FnOnce() -> R) -> (R, Vec<Captured>) {
    let layer = CaptureLayer::default();
    let events = layer.events.clone();
    let subscriber = Registry::default().with(layer);
    let result = tracing::subscriber::with_default(subscriber, f);
    let events = events
        .lock()
        .unwrap_or_else(|err| err.into_inner())
        .clone();
    (result, events)
}

pub fn at_level(events: &[Captured], level: Level) -> Vec<&Captured> {
    events.iter().filter(|event| event.level == level).collect()
}
