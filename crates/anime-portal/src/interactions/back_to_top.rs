//! Back-to-top button.

use crate::events::{Effect, Handler, Target, UiEvent};

#[derive(Debug, Clone)]
pub struct BackToTop {
    threshold: f64,
    visible: bool,
}

impl BackToTop {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            visible: false,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }
}

impl Handler for BackToTop {
    fn handle(&mut self, event: &UiEvent) -> Vec<Effect> {
        match event {
            UiEvent::Scrolled { offset } => {
                let visible = *offset > self.threshold;
                if visible == self.visible {
                    return Vec::new();
                }
                self.visible = visible;
                vec![Effect::SetClass {
                    target: Target::BackToTop,
                    class: "show",
                    enabled: visible,
                }]
            }
            UiEvent::BackToTopClicked => vec![Effect::ScrollToTop { smooth: true }],
            _ => Vec::new(),
        }
    }
}
