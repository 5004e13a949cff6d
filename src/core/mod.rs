pub mod constants;
pub mod planner_data;
pub mod session;

pub use planner_data::{PlannerData, PlannerFile};
pub use session::PlannerSession;
