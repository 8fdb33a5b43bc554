//! Homepage carousel.

use crate::events::{Effect, Handler, UiEvent};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::{debug, warn};

/// Rotating slide index over a fixed number of slides
#[derive(Debug, Clone)]
pub struct Carousel {
    index: usize,
    len: usize,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Advance one slide, wrapping from the last back to the first
    pub fn next(&mut self) -> Option<usize> {
        if self.is_empty() {
            return None;
        }
        self.index = (self.index + 1) % self.len;
        Some(self.index)
    }

    /// Go back one slide, wrapping from the first to the last
    pub fn prev(&mut self) -> Option<usize> {
        if self.is_empty() {
            return None;
        }
        self.index = (self.index + self.len - 1) % self.len;
        Some(self.index)
    }
}

impl Handler for Carousel {
    fn handle(&mut self, event: &UiEvent) -> Vec<Effect> {
        let index = match event {
            UiEvent::CarouselNext | UiEvent::CarouselTick => self.next(),
            UiEvent::CarouselPrev => self.prev(),
            _ => return Vec::new(),
        };

        index
            .map(|index| vec![Effect::ShowSlide { index }])
            .unwrap_or_default()
    }
}

/// Send a `CarouselTick` every `period` until the receiver goes away.
///
/// The first tick fires one full period after the call. A zero period
/// starts nothing and returns `None`.
pub fn spawn_autoplay(period: Duration, events: mpsc::Sender<UiEvent>) -> Option<JoinHandle<()>> {
    if period.is_zero() {
        warn!("Carousel interval is zero, autoplay disabled");
        return None;
    }

    Some(tokio::spawn(async move {
        let mut ticker = interval_at(Instant::now() + period, period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            ticker.tick().await;
            if events.send(UiEvent::CarouselTick).await.is_err() {
                debug!("Carousel autoplay stopped");
                break;
            }
        }
    }))
}
