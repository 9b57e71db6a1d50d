//! A parent's children and the buses they ride.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{BusState, BusStatus};
use crate::query::Fleet;

use super::alerts::AlertLog;

/// Delay (minutes) above which a bus counts as significantly delayed.
const SIGNIFICANT_DELAY_MINS: u32 = 15;

/// Delay (minutes) above which a bus counts as running late.
const MINOR_DELAY_MINS: u32 = 5;

/// Delay (minutes) above which a bus is shown as an emergency.
const SEVERE_DELAY_MINS: u32 = 30;

/// Error returned when a child cannot be added.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RosterError {
    /// Required fields were empty
    #[error("missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    /// The roster already holds the largest possible id
    #[error("no child ids left after {0}")]
    IdsExhausted(u32),
}

/// A child registered by a parent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Child {
    pub id: u32,
    pub name: String,
    pub bus_number: String,
    pub student_id: String,
    pub class: String,
}

/// Form input for a new child; the roster assigns the id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewChild {
    pub name: String,
    pub bus_number: String,
    pub student_id: String,
    pub class: String,
}

impl NewChild {
    /// Names of the empty fields, in form order.
    fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("name", &self.name),
            ("busNumber", &self.bus_number),
            ("studentId", &self.student_id),
            ("class", &self.class),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field)
        .collect()
    }
}

/// How the children list is ordered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ChildSort {
    #[default]
    Name,
    Bus,
}

/// How safe a child's bus looks right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SafetyStatus {
    NotTracked,
    Cancelled,
    SignificantlyDelayed,
    MinorDelay,
    OnSchedule,
}

impl SafetyStatus {
    /// Classify a bus (or its absence).
    pub fn for_bus(bus: Option<&BusState>) -> Self {
        let Some(bus) = bus else {
            return Self::NotTracked;
        };
        if bus.status == BusStatus::Cancelled {
            return Self::Cancelled;
        }
        match bus.delay {
            d if d > SIGNIFICANT_DELAY_MINS => Self::SignificantlyDelayed,
            d if d > MINOR_DELAY_MINS => Self::MinorDelay,
            _ => Self::OnSchedule,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Self::NotTracked => "Bus not tracked",
            Self::Cancelled => "Bus cancelled",
            Self::SignificantlyDelayed => "Significantly Delayed",
            Self::MinorDelay => "Minor Delay",
            Self::OnSchedule => "On Schedule",
        }
    }

    /// Whether a parent should be warned.
    pub fn needs_attention(&self) -> bool {
        !matches!(self, Self::OnSchedule)
    }
}

/// Buses delayed by more than half an hour, in fleet order.
pub fn emergency_buses(fleet: &Fleet) -> Vec<&BusState> {
    fleet
        .buses()
        .iter()
        .filter(|bus| bus.delay > SEVERE_DELAY_MINS)
        .collect()
}

/// A child together with their bus's current state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChildTracking<'a> {
    pub child: &'a Child,
    pub bus: Option<&'a BusState>,
    pub safety: SafetyStatus,
}

/// A parent's request to be alerted when a child's bus reaches its next stop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParentAlert {
    pub child_id: u32,
    pub child_name: String,
    pub bus_number: String,
    pub stop_name: String,
    pub timestamp: DateTime<Utc>,
}

/// The children a parent tracks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChildRoster {
    children: Vec<Child>,
}

impl ChildRoster {
    pub fn children(&self) -> &[Child] {
        &self.children
    }

    pub fn get(&self, id: u32) -> Option<&Child> {
        self.children.iter().find(|c| c.id == id)
    }

    /// Add a child, assigning the next free id.
    pub fn add(&mut self, new: NewChild) -> Result<&Child, RosterError> {
        let missing = new.missing_fields();
        if !missing.is_empty() {
            return Err(RosterError::MissingFields(missing));
        }

        let id = match self.children.iter().map(|c| c.id).max() {
            None => 1,
            Some(max) => max.checked_add(1).ok_or(RosterError::IdsExhausted(max))?,
        };
        self.children.push(Child {
            id,
            name: new.name.trim().to_string(),
            bus_number: new.bus_number.trim().to_string(),
            student_id: new.student_id.trim().to_string(),
            class: new.class.trim().to_string(),
        });
        Ok(&self.children[self.children.len() - 1])
    }

    /// Remove a child by id, returning them if present.
    pub fn remove(&mut self, id: u32) -> Option<Child> {
        let idx = self.children.iter().position(|c| c.id == id)?;
        Some(self.children.remove(idx))
    }

    /// Children matching a search, in the requested order.
    ///
    /// The query matches name, student id or bus number case-insensitively;
    /// an empty query matches everyone.
    pub fn filter(&self, query: &str, sort: ChildSort) -> Vec<&Child> {
        let query = query.trim().to_lowercase();
        let mut list: Vec<&Child> = self
            .children
            .iter()
            .filter(|c| {
                query.is_empty()
                    || c.name.to_lowercase().contains(&query)
                    || c.student_id.to_lowercase().contains(&query)
                    || c.bus_number.to_lowercase().contains(&query)
            })
            .collect();

        match sort {
            ChildSort::Name => list.sort_by(|a, b| a.name.cmp(&b.name)),
            ChildSort::Bus => list.sort_by(|a, b| a.bus_number.cmp(&b.bus_number)),
        }
        list
    }

    /// Where a child's bus is, if the child exists.
    pub fn tracking<'a>(&'a self, id: u32, fleet: &'a Fleet) -> Option<ChildTracking<'a>> {
        let child = self.get(id)?;
        let bus = fleet.get_by_number(&child.bus_number);
        Some(ChildTracking {
            child,
            bus,
            safety: SafetyStatus::for_bus(bus),
        })
    }

    /// Tracking for every child, in roster order.
    pub fn tracking_all<'a>(&'a self, fleet: &'a Fleet) -> Vec<ChildTracking<'a>> {
        self.children
            .iter()
            .map(|child| {
                let bus = fleet.get_by_number(&child.bus_number);
                ChildTracking {
                    child,
                    bus,
                    safety: SafetyStatus::for_bus(bus),
                }
            })
            .collect()
    }
}

impl AlertLog<ParentAlert> {
    /// Record an arrival alert for a child's bus at its next stop.
    ///
    /// Returns `None` if the child is unknown or their bus is not in the fleet.
    pub fn set_arrival_alert(
        &mut self,
        roster: &ChildRoster,
        child_id: u32,
        fleet: &Fleet,
        now: DateTime<Utc>,
    ) -> Option<ParentAlert> {
        let child = roster.get(child_id)?;
        let bus = fleet.get_by_number(&child.bus_number)?;
        let alert = ParentAlert {
            child_id: child.id,
            child_name: child.name.clone(),
            bus_number: bus.number.clone(),
            stop_name: bus.next_stop.clone(),
            timestamp: now,
        };
        self.push(alert.clone());
        Some(alert)
    }
}
