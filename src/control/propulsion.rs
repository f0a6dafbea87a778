use crate::constants::{GRAVITY, WATER_DENSITY};
use crate::control::vehicle::{circle_area, VehicleConfig};
use crate::errors::SimulationError;

/// Water-jet propulsion figures, constant for the whole venting phase.
///
/// The headspace gas pressure is assumed not to decay as water is expelled,
/// so exit velocity, ejection rate and thrust are all fixed at their initial
/// values. Exit velocity follows Bernoulli's principle for an ideal
/// incompressible jet: v = sqrt(2·P_gauge / ρ_water). Thrust is pure
/// momentum flux with no pressure-thrust term.
#[derive(Debug, Clone, PartialEq)]
pub struct PropulsionProperties {
    pub exit_velocity: f64,          // m/s
    pub ejection_rate_per_vent: f64, // kg/s
    pub total_ejection_rate: f64,    // kg/s
    pub thrust_per_vent: f64,        // N
    pub total_thrust: f64,           // N
}

impl PropulsionProperties {
    pub fn derive(config: &VehicleConfig) -> Result<Self, SimulationError> {
        if config.head_space_pressure <= 0.0 {
            return Err(SimulationError::ConfigurationError(format!(
                "headspace pressure must be positive, got {} Pa",
                config.head_space_pressure
            )));
        }
        if config.vent_nozzle_diameter <= 0.0 {
            return Err(SimulationError::ConfigurationError(format!(
                "vent nozzle diameter must be positive, got {} m",
                config.vent_nozzle_diameter
            )));
        }
        if config.vent_count == 0 {
            return Err(SimulationError::ConfigurationError(
                "at least one vent nozzle is required".to_string(),
            ));
        }

        let exit_velocity = (2.0 * config.head_space_pressure / WATER_DENSITY).sqrt();
        let ejection_rate_per_vent =
            circle_area(config.vent_nozzle_diameter) * exit_velocity * WATER_DENSITY;
        let thrust_per_vent = ejection_rate_per_vent * exit_velocity;
        let vents = f64::from(config.vent_count);

        Ok(PropulsionProperties {
            exit_velocity,
            ejection_rate_per_vent,
            total_ejection_rate: ejection_rate_per_vent * vents,
            thrust_per_vent,
            total_thrust: thrust_per_vent * vents,
        })
    }

    /// Whether total thrust exceeds the weight of the given mass. A vehicle
    /// whose thrust never exceeds its weight cannot decelerate.
    pub fn can_decelerate(&self, mass: f64) -> bool {
        self.total_thrust > mass * GRAVITY
    }
}
