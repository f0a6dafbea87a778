use std::f64::consts::PI;

use crate::constants::{DRAG_COEFFICIENT, WATER_DENSITY};
use crate::errors::SimulationError;

/// Design and operational parameters for a single drop. All lengths in
/// meters, masses in kg, pressures in Pa.
#[derive(Debug, Clone, PartialEq)]
pub struct VehicleConfig {
    pub tube_diameter: f64,          // m
    pub tube_height: f64,            // m
    pub pressure_tube_diameter: f64, // m
    pub pressure_tube_headspace: f64, // m - length of the pressurized gas column
    pub head_space_pressure: f64,    // Pa
    pub dry_mass: f64,               // kg
    pub paddle_width: f64,           // m
    pub paddle_length: f64,          // m
    pub paddle_count: u32,
    pub vent_nozzle_diameter: f64, // m
    pub vent_count: u32,
    pub drop_altitude: f64,    // m
    pub venting_altitude: f64, // m
}

impl Default for VehicleConfig {
    fn default() -> Self {
        VehicleConfig {
            tube_diameter: 0.75,
            tube_height: 1.75,
            pressure_tube_diameter: 0.5,
            pressure_tube_headspace: 0.5,
            head_space_pressure: 2_600_000.0,
            dry_mass: 68.0, // ~150 lbs
            paddle_width: 0.4,
            paddle_length: 0.6,
            paddle_count: 4,
            vent_nozzle_diameter: 0.02,
            vent_count: 6,
            drop_altitude: 3048.0, // ~10,000 ft
            venting_altitude: 340.0,
        }
    }
}

/// Quantities derived once from the vehicle geometry and frozen for the
/// rest of the run.
#[derive(Debug, Clone, PartialEq)]
pub struct VehicleProperties {
    pub head_space_volume: f64, // m³
    pub tube_volume: f64,       // m³
    pub water_volume: f64,      // m³
    pub water_mass: f64,        // kg
    pub wet_mass: f64,          // kg - total mass at start of drop
    pub paddle_area: f64,       // m² - downward-facing, paddles near horizontal
    pub drag_area: f64,         // m² - paddles plus tube bottom surface
    pub drag_coefficient: f64,
}

pub(crate) fn circle_area(diameter: f64) -> f64 {
    PI * (diameter / 2.0).powi(2)
}

fn cylinder_volume(diameter: f64, height: f64) -> f64 {
    circle_area(diameter) * height
}

impl VehicleProperties {
    pub fn derive(config: &VehicleConfig) -> Result<Self, SimulationError> {
        config.validate()?;

        let head_space_volume =
            cylinder_volume(config.pressure_tube_diameter, config.pressure_tube_headspace);
        let tube_volume = cylinder_volume(config.tube_diameter, config.tube_height);
        let water_volume = tube_volume - head_space_volume;

        if water_volume < 0.0 {
            return Err(SimulationError::ConfigurationError(format!(
                "headspace volume {:.4} m³ exceeds tube volume {:.4} m³",
                head_space_volume, tube_volume
            )));
        }

        let water_mass = water_volume * WATER_DENSITY;
        let paddle_area =
            config.paddle_width * config.paddle_length * f64::from(config.paddle_count);

        Ok(VehicleProperties {
            head_space_volume,
            tube_volume,
            water_volume,
            water_mass,
            wet_mass: config.dry_mass + water_mass,
            paddle_area,
            drag_area: paddle_area + circle_area(config.tube_diameter),
            drag_coefficient: DRAG_COEFFICIENT,
        })
    }

    /// Water mass available for venting before the dry-mass floor.
    pub fn water_budget(&self, dry_mass: f64) -> f64 {
        self.wet_mass - dry_mass
    }
}

impl VehicleConfig {
    fn validate(&self) -> Result<(), SimulationError> {
        let positive_lengths = [
            ("tube diameter", self.tube_diameter),
            ("tube height", self.tube_height),
            ("pressure tube diameter", self.pressure_tube_diameter),
            ("pressure tube headspace", self.pressure_tube_headspace),
            ("paddle width", self.paddle_width),
            ("paddle length", self.paddle_length),
            ("vent nozzle diameter", self.vent_nozzle_diameter),
        ];
        for (name, value) in positive_lengths {
            if value <= 0.0 {
                return Err(SimulationError::ConfigurationError(format!(
                    "{} must be positive, got {} m",
                    name, value
                )));
            }
        }
        if self.head_space_pressure <= 0.0 {
            return Err(SimulationError::ConfigurationError(format!(
                "headspace pressure must be positive, got {} Pa",
                self.head_space_pressure
            )));
        }
        if self.dry_mass <= 0.0 {
            return Err(SimulationError::ConfigurationError(format!(
                "dry mass must be positive, got {} kg",
                self.dry_mass
            )));
        }
        if self.vent_count == 0 {
            return Err(SimulationError::ConfigurationError(
                "at least one vent nozzle is required".to_string(),
            ));
        }
        if self.venting_altitude <= 0.0 {
            return Err(SimulationError::ConfigurationError(format!(
                "venting altitude must be positive, got {} m",
                self.venting_altitude
            )));
        }
        if self.venting_altitude >= self.drop_altitude {
            return Err(SimulationError::ConfigurationError(format!(
                "venting altitude {} m must be below drop altitude {} m",
                self.venting_altitude, self.drop_altitude
            )));
        }
        Ok(())
    }
}
