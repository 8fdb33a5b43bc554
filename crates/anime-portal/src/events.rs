//! Event dispatch between the UI layer and the interaction handlers.
//!
//! The UI layer turns user input into `UiEvent`s and applies the `Effect`s
//! that come back. Handlers subscribe to an `EventBus`; each one sees every
//! event and ignores the ones it does not own.

use crate::binder::SearchResultsView;
use crate::interactions::contact::{ContactForm, FormMessage};
use crate::query::SearchQuery;
use serde::Serialize;
use shared::CatalogRecord;
use std::time::Duration;

/// Something the user (or a timer) did
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    CarouselNext,
    CarouselPrev,
    CarouselTick,
    NavToggle,
    NavLinkClicked,
    Scrolled { offset: f64 },
    BackToTopClicked,
    ContactSubmitted(ContactForm),
    FormMessageExpired { generation: u64 },
    SearchInput(String),
    SearchSubmitted,
    SearchKey(String),
    SearchCompleted(Vec<CatalogRecord>),
    SearchCleared,
    CardActivated { id: u32 },
    BackToHome,
    Quit,
}

/// Element a class change applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Target {
    NavMenu,
    BackToTop,
}

/// A change the UI layer should apply
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "effect", rename_all = "snake_case")]
pub enum Effect {
    ShowSlide { index: usize },
    SetClass { target: Target, class: &'static str, enabled: bool },
    ScrollToTop { smooth: bool },
    ShowFormMessage { message: FormMessage },
    HideFormMessage,
    ResetForm,
    ScheduleFormMessageExpiry {
        #[serde(with = "millis")]
        after: Duration,
        generation: u64,
    },
    RunSearch { query: String },
    ShowSearchResults { results: SearchResultsView },
    ClearSearch,
    Navigate { href: String },
}

mod millis {
    use serde::Serializer;
    use std::time::Duration;

    pub fn serialize<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(duration.as_millis() as u64)
    }
}

/// A subscriber to UI events
pub trait Handler: Send {
    fn handle(&mut self, event: &UiEvent) -> Vec<Effect>;
}

/// Fan-out of events to subscribed handlers
#[derive(Default)]
pub struct EventBus {
    handlers: Vec<Box<dyn Handler>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe a handler; handlers run in subscription order
    pub fn subscribe(&mut self, handler: impl Handler + 'static) {
        self.handlers.push(Box::new(handler));
    }

    /// Deliver an event to every handler and collect their effects
    pub fn dispatch(&mut self, event: &UiEvent) -> Vec<Effect> {
        self.handlers
            .iter_mut()
            .flat_map(|handler| handler.handle(event))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl Effect {
    /// Ask the session to run a search for `query`
    pub fn run_search(query: &SearchQuery) -> Self {
        Effect::RunSearch {
            query: query.as_str().to_string(),
        }
    }
}

/// Parse one line of session input into events.
///
/// Commands: `next`, `prev`, `tick`, `menu`, `link`, `scroll <offset>`,
/// `top`, `type <text>`, `search [text]`, `key <name>`, `clear`,
/// `open <id>`, `home`, `contact <name>|<email>|<subject>|<message>`, `quit`.
/// `search <text>` types the text and submits it. Unknown or malformed
/// commands yield nothing.
pub fn parse_command(line: &str) -> Vec<UiEvent> {
    let line = line.trim();
    let (command, rest) = line.split_once(' ').unwrap_or((line, ""));
    let rest = rest.trim();

    let event = match command {
        "search" if !rest.is_empty() => {
            return vec![UiEvent::SearchInput(rest.to_string()), UiEvent::SearchSubmitted];
        }
        "next" => UiEvent::CarouselNext,
        "prev" => UiEvent::CarouselPrev,
        "tick" => UiEvent::CarouselTick,
        "menu" => UiEvent::NavToggle,
        "link" => UiEvent::NavLinkClicked,
        "scroll" => match rest.parse() {
            Ok(offset) => UiEvent::Scrolled { offset },
            Err(_) => return Vec::new(),
        },
        "top" => UiEvent::BackToTopClicked,
        "type" => UiEvent::SearchInput(rest.to_string()),
        "search" => UiEvent::SearchSubmitted,
        "key" => UiEvent::SearchKey(rest.to_string()),
        "clear" => UiEvent::SearchCleared,
        "open" => match rest.parse() {
            Ok(id) => UiEvent::CardActivated { id },
            Err(_) => return Vec::new(),
        },
        "home" => UiEvent::BackToHome,
        "contact" => {
            let mut parts = rest.splitn(4, '|');
            let mut next = || parts.next().unwrap_or_default().to_string();
            UiEvent::ContactSubmitted(ContactForm {
                name: next(),
                email: next(),
                subject: next(),
                message: next(),
            })
        }
        "quit" | "exit" => UiEvent::Quit,
        _ => return Vec::new(),
    };

    vec![event]
}
