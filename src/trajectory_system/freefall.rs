use crate::constants::GRAVITY;
use crate::control::environment::Environment;
use crate::control::vehicle::{VehicleConfig, VehicleProperties};
use crate::errors::SimulationError;

/// Free-fall figures for the drop phase, from release to the start of
/// venting.
///
/// Terminal velocity comes from the quadratic drag/gravity balance
/// v_t = sqrt(2·m·g / (ρ_air·Cd·A)). The fall time to the venting altitude
/// is approximated with constant acceleration up to terminal velocity,
/// i.e. an average speed of half the terminal velocity. The vehicle is
/// assumed to be at terminal velocity when venting begins.
#[derive(Debug, Clone, PartialEq)]
pub struct FreefallProfile {
    pub terminal_velocity: f64, // m/s
    pub time_to_venting: f64,   // s
}

impl FreefallProfile {
    pub fn derive(
        config: &VehicleConfig,
        properties: &VehicleProperties,
        environment: &Environment,
    ) -> Result<Self, SimulationError> {
        let drag_term =
            environment.air_density * properties.drag_coefficient * properties.drag_area;
        if drag_term <= 0.0 {
            return Err(SimulationError::ConfigurationError(format!(
                "drag term must be positive, got {} kg/m",
                drag_term
            )));
        }
        if properties.wet_mass <= 0.0 {
            return Err(SimulationError::ConfigurationError(format!(
                "wet mass must be positive, got {} kg",
                properties.wet_mass
            )));
        }

        let terminal_velocity = (2.0 * properties.wet_mass * GRAVITY / drag_term).sqrt();
        let time_to_venting =
            (config.drop_altitude - config.venting_altitude) / (0.5 * terminal_velocity);

        Ok(FreefallProfile {
            terminal_velocity,
            time_to_venting,
        })
    }
}
