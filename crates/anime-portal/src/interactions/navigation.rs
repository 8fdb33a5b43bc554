//! Page navigation from cards and the back-to-home control.

use crate::binder::BindContext;
use crate::events::{Effect, Handler, UiEvent};

#[derive(Debug, Clone)]
pub struct Navigator {
    ctx: BindContext,
}

impl Navigator {
    pub fn new(ctx: BindContext) -> Self {
        Self { ctx }
    }
}

impl Handler for Navigator {
    fn handle(&mut self, event: &UiEvent) -> Vec<Effect> {
        let href = match event {
            UiEvent::CardActivated { id } => self.ctx.details_link(*id),
            UiEvent::BackToHome => self.ctx.home_page.clone(),
            _ => return Vec::new(),
        };
        vec![Effect::Navigate { href }]
    }
}
