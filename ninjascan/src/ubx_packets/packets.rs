mod nav_pos_llh;
mod nav_sol;
mod nav_status;
mod nav_time_utc;
mod nav_vel_ned;

pub use nav_pos_llh::*;
pub use nav_sol::*;
pub use nav_status::*;
pub use nav_time_utc::*;
pub use nav_vel_ned::*;
