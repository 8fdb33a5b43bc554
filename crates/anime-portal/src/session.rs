//! Interactive session: the event loop behind a live page.
//!
//! Events arrive on a channel from the UI layer, timers and the carousel
//! autoplay task. Each event is dispatched to the subscribed handlers; effects
//! that need I/O (searches, delayed hides) are carried out here before the
//! remaining effects are handed to the UI layer.

use crate::api::CatalogSource;
use crate::events::{Effect, EventBus, UiEvent};
use crate::interactions::{
    carousel, BackToTop, Carousel, ContactFormHandler, NavMenu, Navigator, SearchPanel,
};
use crate::pages::Portal;
use crate::query::SearchQuery;
use shared::Config;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info};

const CHANNEL_CAPACITY: usize = 64;

pub struct Session<S> {
    portal: Portal<S>,
    bus: EventBus,
    tx: mpsc::Sender<UiEvent>,
    rx: mpsc::Receiver<UiEvent>,
    autoplay: Option<JoinHandle<()>>,
    carousel_period: Duration,
}

impl<S: CatalogSource> Session<S> {
    /// Create a session with every interaction handler subscribed
    pub fn new(portal: Portal<S>, config: &Config) -> Self {
        let ctx = portal.context().clone();
        let mut bus = EventBus::new();
        bus.subscribe(Carousel::new(config.ui.carousel_slides));
        bus.subscribe(NavMenu::new());
        bus.subscribe(BackToTop::new(config.ui.back_to_top_offset));
        bus.subscribe(ContactFormHandler::new(Duration::from_millis(
            config.ui.form_message_ms,
        )));
        bus.subscribe(SearchPanel::new(ctx.clone()));
        bus.subscribe(Navigator::new(ctx));

        let (tx, rx) = mpsc::channel(CHANNEL_CAPACITY);

        Self {
            portal,
            bus,
            tx,
            rx,
            autoplay: None,
            carousel_period: Duration::from_millis(config.ui.carousel_interval_ms),
        }
    }

    /// Sender for feeding events into the session
    pub fn sender(&self) -> mpsc::Sender<UiEvent> {
        self.tx.clone()
    }

    /// Start advancing the carousel on its configured interval.
    ///
    /// Returns whether autoplay is running.
    pub fn start_autoplay(&mut self) -> bool {
        if self.autoplay.is_none() {
            self.autoplay = carousel::spawn_autoplay(self.carousel_period, self.sender());
        }
        self.autoplay.is_some()
    }

    /// Process events until `UiEvent::Quit`, passing effects to `apply`.
    ///
    /// Returns the number of events processed.
    pub async fn run<F: FnMut(&Effect)>(mut self, mut apply: F) -> usize {
        info!(handlers = self.bus.len(), "Session started");
        let mut processed = 0;

        while let Some(event) = self.rx.recv().await {
            if event == UiEvent::Quit {
                break;
            }
            processed += 1;
            for effect in self.process(event).await {
                apply(&effect);
            }
        }

        if let Some(autoplay) = self.autoplay.take() {
            autoplay.abort();
        }
        info!(events = processed, "Session ended");
        processed
    }

    async fn process(&mut self, event: UiEvent) -> Vec<Effect> {
        debug!(event = ?event, "Dispatching event");
        let mut effects = self.bus.dispatch(&event);
        let mut follow_ups = Vec::new();

        for effect in &effects {
            match effect {
                Effect::RunSearch { query } => {
                    if let Some(query) = SearchQuery::parse(query) {
                        let records = self.portal.search_records(&query).await;
                        follow_ups.extend(self.bus.dispatch(&UiEvent::SearchCompleted(records)));
                    }
                }
                Effect::ScheduleFormMessageExpiry { after, generation } => {
                    let tx = self.sender();
                    let (after, generation) = (*after, *generation);
                    tokio::spawn(async move {
                        tokio::time::sleep(after).await;
                        // The session may already be gone
                        let _ = tx.send(UiEvent::FormMessageExpired { generation }).await;
                    });
                }
                _ => {}
            }
        }

        effects.extend(follow_ups);
        effects
    }
}
