//! Content model for the folio portfolio
//!
//! Everything on the page other than the particle background:
//!
//! - [`content`] - compiled-in records (profile, skills, projects, ...)
//! - [`Filter`] - project category filter and badge counts
//! - [`RevealTracker`] - one-time scroll-triggered reveal
//! - [`Navbar`] - hide-on-scroll navigation and mobile menu
//! - [`Carousel`] - testimonials with autoplay
//! - [`CodePlayground`] / [`LiveCoding`] - code showcase timers
//! - [`RadarChart`] / [`SkillsPanel`] - skills radar geometry and selection
//! - [`Theme`] / [`ThemeStore`] - persisted colour scheme
//! - [`ContactForm`] - validation and asynchronous submission

pub mod content;
mod carousel;
mod contact;
mod filter;
mod live_coding;
mod navbar;
mod notification;
mod playground;
mod radar;
mod reveal;
mod theme;
mod transport;

pub use carousel::{Carousel, AUTOPLAY_INTERVAL};
pub use contact::{
    is_valid_email, validate, ContactFields, ContactForm, ContactPreference, Field,
    OpportunityType, SubmitError, ValidationError, INVALID_EMAIL_MESSAGE,
    MISSING_FIELDS_MESSAGE, SUCCESS_TITLE,
};
pub use filter::{category_counts, filter_in, filter_projects, project_by_id, Filter};
pub use live_coding::{LiveCoding, LINE_INTERVAL, SNIPPET_HOLD};
pub use navbar::{Navbar, HIDE_THRESHOLD};
pub use notification::{Notification, NotificationKind, Notifications};
pub use playground::{CodePlayground, COPIED_DURATION, RUN_DURATION};
pub use radar::{RadarChart, SkillsPanel};
pub use reveal::RevealTracker;
pub use theme::{Theme, ThemeError, ThemeStore};
pub use transport::{
    ContactDispatcher, OutboxTransport, SimulatedTransport, Transport, TransportError,
    SIMULATED_DELAY,
};
