//! Resource model functions: validate input, run SQL through the facade, decode rows.

mod crud;
mod households;
mod plans;
mod users;
pub mod validation;

pub use households::HouseholdService;
pub use plans::PlanService;
pub use users::UserService;
