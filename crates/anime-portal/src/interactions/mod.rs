//! Interaction handlers.
//!
//! Each handler owns its own state and reacts to `UiEvent`s through the
//! `Handler` trait. None of them touch the network; the search panel asks
//! for a request with an effect and waits for the results event.

pub mod back_to_top;
pub mod carousel;
pub mod contact;
pub mod nav;
pub mod navigation;
pub mod search;

pub use back_to_top::BackToTop;
pub use carousel::Carousel;
pub use contact::{ContactForm, ContactFormHandler, FormMessage, MessageKind};
pub use nav::NavMenu;
pub use navigation::Navigator;
pub use search::SearchPanel;
