pub mod auth;
pub mod data;
pub mod models;
pub mod session;

pub use auth::{AuthError, Registration, SimulatedBackend};
pub use models::{Occupancy, ParkingZone, User, UserType};
pub use session::{SessionController, ViewId};

#[cfg(feature = "gui")]
pub mod gui;
