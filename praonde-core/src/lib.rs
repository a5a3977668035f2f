//! Pra Onde Vamos? - event discovery deck, saved list and details state.
//!
//! All state lives in a [`Session`] and changes only through
//! [`Session::apply`]. Nothing here does I/O.

pub mod deck;
pub mod error;
pub mod event;
pub mod filter;
pub mod modal;
pub mod seed;
pub mod session;

pub use deck::Deck;
pub use error::{ParseBuzzError, ParseFilterError, SeedError};
pub use event::{Buzz, Category, Event, EventId, LikedEvent, TicketLink};
pub use filter::Filter;
pub use modal::{ClickTarget, Modal, VibeReport};
pub use seed::Seed;
pub use session::{
    Action, DEFAULT_SUPER_LIKES, DiscoveryView, Outcome, Page, PageKind, Session,
};
