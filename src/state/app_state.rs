//! Application state definitions

use super::countdown::CountdownTimer;
use super::event::EventDefinition;
use super::forms::RegistrationForm;
use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Current view in the application
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum View {
    /// `/event/:id`
    Event,
    /// `/expired`
    Expired,
    /// `/success`
    Success,
    /// `/404` and every unknown path
    #[default]
    NotFound,
}

/// View parameters for navigation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewParams {
    pub event_id: Option<String>,
}

impl View {
    /// Resolve a route path.
    ///
    /// `/event/` without an id and any unknown path resolve to the not-found view.
    pub fn from_path(path: &str) -> (View, ViewParams) {
        let trimmed = path.trim().trim_end_matches('/');
        let segments: Vec<&str> = trimmed
            .trim_start_matches('/')
            .split('/')
            .filter(|s| !s.is_empty())
            .collect();

        match segments.as_slice() {
            ["event", id] => (
                View::Event,
                ViewParams {
                    event_id: Some((*id).to_string()),
                },
            ),
            ["expired"] => (View::Expired, ViewParams::default()),
            ["success"] => (View::Success, ViewParams::default()),
            _ => (View::NotFound, ViewParams::default()),
        }
    }

    /// Route path of this view
    pub fn path(&self, params: &ViewParams) -> String {
        match self {
            View::Event => match &params.event_id {
                Some(id) => format!("/event/{id}"),
                None => "/404".to_string(),
            },
            View::Expired => "/expired".to_string(),
            View::Success => "/success".to_string(),
            View::NotFound => "/404".to_string(),
        }
    }
}

/// Collapsible detail sections on the event page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailSection {
    About,
    Contact,
    Location,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExpandedSections {
    pub about: bool,
    pub contact: bool,
    pub location: bool,
}

impl ExpandedSections {
    pub fn toggle(&mut self, section: DetailSection) {
        let flag = match section {
            DetailSection::About => &mut self.about,
            DetailSection::Contact => &mut self.contact,
            DetailSection::Location => &mut self.location,
        };
        *flag = !*flag;
    }

    pub fn is_expanded(&self, section: DetailSection) -> bool {
        match section {
            DetailSection::About => self.about,
            DetailSection::Contact => self.contact,
            DetailSection::Location => self.location,
        }
    }
}

/// One-shot navigation after a delay
#[derive(Debug, Clone)]
pub struct RedirectTimer {
    pub target: View,
    pub due: Instant,
}

impl RedirectTimer {
    pub fn new(target: View, delay: Duration) -> Self {
        Self {
            target,
            due: Instant::now() + delay,
        }
    }

    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.due
    }
}

/// A fetched event and everything owned by one visit of its page
#[derive(Debug)]
pub struct LoadedEvent {
    pub event: EventDefinition,
    pub form: RegistrationForm,
    pub countdown: CountdownTimer,
    pub sections: ExpandedSections,
    pub redirect: Option<RedirectTimer>,
}

impl LoadedEvent {
    pub fn new(event: EventDefinition) -> Self {
        Self {
            form: RegistrationForm::new(&event),
            countdown: CountdownTimer::new(event.expiry_date),
            sections: ExpandedSections::default(),
            redirect: None,
            event,
        }
    }
}

/// Load status of the event page
#[derive(Debug)]
pub enum EventLoad {
    Loading,
    /// Fetch failed with an inline message; the page halts here
    Failed(String),
    Ready(Box<LoadedEvent>),
}

/// State of the event page, dropped when the view is left
#[derive(Debug)]
pub struct EventPageState {
    pub event_id: String,
    pub load: EventLoad,
}

impl EventPageState {
    pub fn new(event_id: String) -> Self {
        Self {
            event_id,
            load: EventLoad::Loading,
        }
    }

    pub fn loaded(&self) -> Option<&LoadedEvent> {
        match &self.load {
            EventLoad::Ready(loaded) => Some(loaded),
            _ => None,
        }
    }

    pub fn loaded_mut(&mut self) -> Option<&mut LoadedEvent> {
        match &mut self.load {
            EventLoad::Ready(loaded) => Some(loaded),
            _ => None,
        }
    }
}

/// Main application state
#[derive(Debug, Default)]
pub struct AppState {
    // Navigation
    pub current_view: View,
    pub view_params: ViewParams,
    pub view_history: Vec<(View, ViewParams)>,

    // Event page, present only while the event view is shown
    pub event_page: Option<EventPageState>,

    // Blocking alerts, shown one at a time
    pub error_queue: VecDeque<String>,

    // Transient status line message
    pub status_message: Option<String>,
}

impl AppState {
    pub fn has_errors(&self) -> bool {
        !self.error_queue.is_empty()
    }

    pub fn current_error(&self) -> Option<&str> {
        self.error_queue.front().map(String::as_str)
    }

    pub fn push_error(&mut self, message: String) {
        tracing::debug!(%message, "queued error");
        self.error_queue.push_back(message);
    }

    pub fn dismiss_error(&mut self) {
        self.error_queue.pop_front();
    }

    /// The loaded event for the current page, if any
    pub fn loaded_event(&self) -> Option<&LoadedEvent> {
        self.event_page.as_ref().and_then(EventPageState::loaded)
    }

    pub fn loaded_event_mut(&mut self) -> Option<&mut LoadedEvent> {
        self.event_page
            .as_mut()
            .and_then(EventPageState::loaded_mut)
    }
}
