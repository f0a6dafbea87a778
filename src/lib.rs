pub mod constants;
pub mod control;
pub mod errors;
pub mod telemetry_system;
pub mod trajectory_system;

pub use constants::*;
pub use control::environment::{Environment, EnvironmentConfig};
pub use control::mission::{DropMission, FlightReport};
pub use control::propulsion::PropulsionProperties;
pub use control::vehicle::{VehicleConfig, VehicleProperties};
pub use errors::SimulationError;

// Re-export commonly used items from trajectory_system
pub use trajectory_system::descent::{
    DescentResult, DescentSimulator, SimulationState, TerminationReason,
};
pub use trajectory_system::freefall::FreefallProfile;
pub use trajectory_system::outcome::{FlightOutcome, OutcomeEvaluation};

// Re-export commonly used items from telemetry_system
pub use telemetry_system::report::{display_report, display_trace};
