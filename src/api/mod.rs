//! API Module
//!
//! Structure:
//! - commands.rs: On-demand analysis and store operations
//! - events.rs: Collaborator traits and the navigation trigger

pub mod commands;
pub mod events;

pub use commands::*;
pub use events::{
    on_navigation_completed, ActivePage, NavigationEvent, Notification, NotificationSink,
    PageContentProvider,
};
