//! Event domain models and the derived publication status.
//!
//! Events carry per-audience capacities, participant ID lists and
//! publication windows. Publication status is never stored: it is computed
//! from the stored fields at read time.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared::validation::one_of;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;
use validator::{Validate, ValidationError};

/// Kind of scheduled event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "event_type", rename_all = "lowercase")]
pub enum EventType {
    Nwta,
    Training,
    Staffing,
}

impl EventType {
    pub const ALL: [&'static str; 3] = ["nwta", "training", "staffing"];

    pub fn as_str(&self) -> &'static str {
        match self {
            EventType::Nwta => "nwta",
            EventType::Training => "training",
            EventType::Staffing => "staffing",
        }
    }
}

impl FromStr for EventType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "nwta" => Ok(EventType::Nwta),
            "training" => Ok(EventType::Training),
            "staffing" => Ok(EventType::Staffing),
            _ => Err(format!("Invalid event type: {}", s)),
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Derived publication status for one audience of an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PublicationStatus {
    Hidden,
    Preview,
    Open,
    Full,
    Closed,
}

impl PublicationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PublicationStatus::Hidden => "hidden",
            PublicationStatus::Preview => "preview",
            PublicationStatus::Open => "open",
            PublicationStatus::Full => "full",
            PublicationStatus::Closed => "closed",
        }
    }
}

impl fmt::Display for PublicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Computes the publication status for one audience of an event.
///
/// An unpublished event is always `Hidden`. A published event with no window,
/// or whose window has not opened yet, is `Preview`. Inside the window it is
/// `Full` once the committed count reaches capacity and `Open` otherwise.
/// Past the window it is `Closed`.
pub fn publication_status(
    is_published: bool,
    window: Option<(DateTime<Utc>, DateTime<Utc>)>,
    capacity: i32,
    committed: usize,
    now: DateTime<Utc>,
) -> PublicationStatus {
    if !is_published {
        return PublicationStatus::Hidden;
    }
    let Some((open_at, close_at)) = window else {
        return PublicationStatus::Preview;
    };
    if now < open_at {
        PublicationStatus::Preview
    } else if now > close_at {
        PublicationStatus::Closed
    } else if committed >= capacity.max(0) as usize {
        PublicationStatus::Full
    } else {
        PublicationStatus::Open
    }
}

/// One start/end pair in an event schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ScheduleEntry {
    pub starts_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
}

fn validate_schedule(entries: &Vec<ScheduleEntry>) -> Result<(), ValidationError> {
    for entry in entries {
        if entry.starts_at >= entry.ends_at {
            let mut err = ValidationError::new("schedule_entry");
            err.message = Some("Schedule entries must start before they end".into());
            return Err(err);
        }
    }
    Ok(())
}

fn validate_event_type(value: &str) -> Result<(), ValidationError> {
    one_of(value, &EventType::ALL, "event_type")
}

/// A scheduled event (NWTA, training or staffing occurrence).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Event {
    pub id: Uuid,
    pub name: String,
    pub event_type: EventType,
    pub venue_id: Option<Uuid>,
    pub is_published: bool,

    pub staff_capacity: i32,
    pub participant_capacity: i32,

    pub committed_staff: Vec<Uuid>,
    pub waitlisted_staff: Vec<Uuid>,
    pub potential_staff: Vec<Uuid>,
    pub committed_participants: Vec<Uuid>,
    pub waitlisted_participants: Vec<Uuid>,
    pub potential_participants: Vec<Uuid>,

    pub staff_open_at: Option<DateTime<Utc>>,
    pub staff_close_at: Option<DateTime<Utc>>,
    pub participant_open_at: Option<DateTime<Utc>>,
    pub participant_close_at: Option<DateTime<Utc>>,

    pub schedule: Vec<ScheduleEntry>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Event {
    fn window(
        open: Option<DateTime<Utc>>,
        close: Option<DateTime<Utc>>,
    ) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
        match (open, close) {
            (Some(open), Some(close)) => Some((open, close)),
            _ => None,
        }
    }

    /// Derived publication status for the staff audience.
    pub fn staff_status(&self, now: DateTime<Utc>) -> PublicationStatus {
        publication_status(
            self.is_published,
            Self::window(self.staff_open_at, self.staff_close_at),
            self.staff_capacity,
            self.committed_staff.len(),
            now,
        )
    }

    /// Derived publication status for the participant audience.
    pub fn participant_status(&self, now: DateTime<Utc>) -> PublicationStatus {
        publication_status(
            self.is_published,
            Self::window(self.participant_open_at, self.participant_close_at),
            self.participant_capacity,
            self.committed_participants.len(),
            now,
        )
    }
}

/// Event as returned by the API: the stored record plus derived statuses.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct EventResponse {
    #[serde(flatten)]
    pub event: Event,
    pub staff_status: PublicationStatus,
    pub participant_status: PublicationStatus,
}

impl EventResponse {
    pub fn at(event: Event, now: DateTime<Utc>) -> Self {
        let staff_status = event.staff_status(now);
        let participant_status = event.participant_status(now);
        Self {
            event,
            staff_status,
            participant_status,
        }
    }
}

/// Request payload for creating an event.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "snake_case")]
pub struct CreateEventRequest {
    #[validate(length(min = 1, max = 200, message = "Name must be between 1 and 200 characters"))]
    pub name: String,

    #[validate(custom(function = "validate_event_type"))]
    pub event_type: String,

    pub venue_id: Option<Uuid>,

    pub is_published: Option<bool>,

    #[validate(range(min = 0, message = "Staff capacity must be non-negative"))]
    pub staff_capacity: Option<i32>,

    #[validate(range(min = 0, message = "Participant capacity must be non-negative"))]
    pub participant_capacity: Option<i32>,

    pub committed_staff: Option<Vec<Uuid>>,
    pub waitlisted_staff: Option<Vec<Uuid>>,
    pub potential_staff: Option<Vec<Uuid>>,
    pub committed_participants: Option<Vec<Uuid>>,
    pub waitlisted_participants: Option<Vec<Uuid>>,
    pub potential_participants: Option<Vec<Uuid>>,

    pub staff_open_at: Option<DateTime<Utc>>,
    pub staff_close_at: Option<DateTime<Utc>>,
    pub participant_open_at: Option<DateTime<Utc>>,
    pub participant_close_at: Option<DateTime<Utc>>,

    #[validate(custom(function = "validate_schedule"))]
    pub schedule: Option<Vec<ScheduleEntry>>,

    #[validate(length(max = 5000, message = "Notes must be at most 5000 characters"))]
    pub notes: Option<String>,
}

/// Request payload for updating an event. All fields optional.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "snake_case")]
pub struct UpdateEventRequest {
    #[validate(length(min = 1, max = 200, message = "Name must be between 1 and 200 characters"))]
    pub name: Option<String>,

    #[validate(custom(function = "validate_event_type"))]
    pub event_type: Option<String>,

    pub venue_id: Option<Uuid>,

    pub is_published: Option<bool>,

    #[validate(range(min = 0, message = "Staff capacity must be non-negative"))]
    pub staff_capacity: Option<i32>,

    #[validate(range(min = 0, message = "Participant capacity must be non-negative"))]
    pub participant_capacity: Option<i32>,

    pub committed_staff: Option<Vec<Uuid>>,
    pub waitlisted_staff: Option<Vec<Uuid>>,
    pub potential_staff: Option<Vec<Uuid>>,
    pub committed_participants: Option<Vec<Uuid>>,
    pub waitlisted_participants: Option<Vec<Uuid>>,
    pub potential_participants: Option<Vec<Uuid>>,

    pub staff_open_at: Option<DateTime<Utc>>,
    pub staff_close_at: Option<DateTime<Utc>>,
    pub participant_open_at: Option<DateTime<Utc>>,
    pub participant_close_at: Option<DateTime<Utc>>,

    #[validate(custom(function = "validate_schedule"))]
    pub schedule: Option<Vec<ScheduleEntry>>,

    #[validate(length(max = 5000, message = "Notes must be at most 5000 characters"))]
    pub notes: Option<String>,
}

/// Query parameters for listing events.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct EventQuery {
    pub event_type: Option<String>,
    pub venue_id: Option<Uuid>,
    pub published: Option<bool>,
}
