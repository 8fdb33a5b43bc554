//! Mobile navigation menu.

use crate::events::{Effect, Handler, Target, UiEvent};

const SHOW_CLASS: &str = "show";

#[derive(Debug, Clone, Default)]
pub struct NavMenu {
    open: bool,
}

impl NavMenu {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    fn set(&mut self, open: bool) -> Vec<Effect> {
        self.open = open;
        vec![Effect::SetClass {
            target: Target::NavMenu,
            class: SHOW_CLASS,
            enabled: open,
        }]
    }
}

impl Handler for NavMenu {
    fn handle(&mut self, event: &UiEvent) -> Vec<Effect> {
        match event {
            UiEvent::NavToggle => self.set(!self.open),
            UiEvent::NavLinkClicked => self.set(false),
            _ => Vec::new(),
        }
    }
}
