//! Notification module for clipshim
//!
//! Transient messages shown in the corner of the demo page, mostly
//! clipboard outcomes and configuration warnings.

mod notification_render;
mod notification_state;

pub use notification_render::render_notification;
pub use notification_state::{NotificationState, NotificationType};
