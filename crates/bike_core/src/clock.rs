use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::bike::BikeType;
use crate::ride::StationId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum EventKind {
    /// A rider reaches `destination` and tries to dock `bike_type`.
    RideEnds {
        rider: u64,
        destination: StationId,
        bike_type: BikeType,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Event {
    pub timestamp: u64,
    pub kind: EventKind,
}

impl Ord for Event {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering to make BinaryHeap a min-heap by timestamp.
        other
            .timestamp
            .cmp(&self.timestamp)
            .then_with(|| other.kind.cmp(&self.kind))
    }
}

impl PartialOrd for Event {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[derive(Debug, Default)]
pub struct SimulationClock {
    now: u64,
    events: BinaryHeap<Event>,
}

impl SimulationClock {
    pub fn now(&self) -> u64 {
        self.now
    }

    /// Move the clock forward without popping an event.
    pub fn advance_to(&mut self, timestamp: u64) {
        debug_assert!(timestamp >= self.now, "clock cannot move backwards");
        self.now = self.now.max(timestamp);
    }

    pub fn schedule(&mut self, event: Event) {
        debug_assert!(
            event.timestamp >= self.now,
            "event timestamp must be >= current time"
        );
        self.events.push(event);
    }

    pub fn pop_next(&mut self) -> Option<Event> {
        let event = self.events.pop()?;
        self.now = self.now.max(event.timestamp);
        Some(event)
    }

    /// Pop the next event only if it is due at or before `until`.
    pub fn pop_due(&mut self, until: u64) -> Option<Event> {
        if self.events.peek()?.timestamp > until {
            return None;
        }
        self.pop_next()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
