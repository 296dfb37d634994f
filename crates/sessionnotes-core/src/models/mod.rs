//! Shared domain types consumed by the frontend and the API.

pub mod plan;
pub mod session;
pub mod user;

pub use plan::{Plan, PlanStatus};
pub use session::{Session, SessionStatus};
pub use user::{User, UserRole};
