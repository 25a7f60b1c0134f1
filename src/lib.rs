pub mod app;
pub mod domain;
pub mod infrastructure;

pub use app::{init_logging, App};
pub use domain::conversion::{ConversionWorkflow, SubmitOutcome};
pub use domain::session::{GateView, Session, SessionEvent, SessionGate};
