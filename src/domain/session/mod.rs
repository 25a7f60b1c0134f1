pub mod error;
pub mod model;
pub mod service;

pub use error::SessionError;
pub use model::{AccessToken, GateView, Session, SessionEvent};
pub use service::SessionGate;
