// Inactivity Detect - Samples, Classification & Notifications

use std::sync::mpsc::Sender;

use serde::Serialize;

// ---------------------------------------------------------------------------
// Sample (3-axis acceleration reading, in g)
// ---------------------------------------------------------------------------
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Sample {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Sample {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

// ---------------------------------------------------------------------------
// Classification
// ---------------------------------------------------------------------------
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Inactivity {
    /// No evaluation window has completed yet.
    #[default]
    Unknown,
    Active,
    Inactive,
}

impl Inactivity {
    /// `None` while unknown, otherwise whether the wearer is inactive.
    pub fn as_bool(self) -> Option<bool> {
        match self {
            Self::Unknown => None,
            Self::Active => Some(false),
            Self::Inactive => Some(true),
        }
    }
}

impl From<bool> for Inactivity {
    fn from(inactive: bool) -> Self {
        if inactive {
            Self::Inactive
        } else {
            Self::Active
        }
    }
}

impl From<Option<bool>> for Inactivity {
    fn from(state: Option<bool>) -> Self {
        state.map_or(Self::Unknown, Self::from)
    }
}

// ---------------------------------------------------------------------------
// Notifications
// ---------------------------------------------------------------------------

/// Payload of an `inactivity_detect` event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct InactivityEvent {
    pub inactive: bool,
}

/// Named-event dispatch used to report classification changes.
///
/// Delivery is fire-and-forget: the detector never waits on the sink and
/// ignores delivery failures.
pub trait EventSink {
    fn emit(&mut self, name: &'static str, event: InactivityEvent);
}

impl EventSink for Sender<InactivityEvent> {
    fn emit(&mut self, name: &'static str, event: InactivityEvent) {
        if self.send(event).is_err() {
            log::warn!("{} listener dropped, event {:?} lost", name, event);
        }
    }
}

impl<F> EventSink for F
where
    F: FnMut(&'static str, InactivityEvent),
{
    fn emit(&mut self, name: &'static str, event: InactivityEvent) {
        self(name, event)
    }
}
