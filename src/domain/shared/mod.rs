pub mod notification;

pub use notification::{Notification, Notifier, Severity};
