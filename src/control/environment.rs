use crate::constants::{
    AIR_DENSITY_5000_FT, AMBIENT_TEMPERATURE, CELSIUS_TO_KELVIN_OFFSET, R_SPECIFIC_AIR,
    STANDARD_ATMOSPHERIC_PRESSURE,
};
use crate::errors::SimulationError;

/// Fixed atmospheric inputs for the drop site. Air density is held constant
/// for the whole flight rather than varied with altitude.
#[derive(Debug, Clone, PartialEq)]
pub struct EnvironmentConfig {
    pub air_density: f64,           // kg/m³
    pub temperature: f64,           // °C
    pub specific_gas_constant: f64, // J/(kg·K)
    pub standard_pressure: f64,     // Pa
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        EnvironmentConfig {
            air_density: AIR_DENSITY_5000_FT,
            temperature: AMBIENT_TEMPERATURE,
            specific_gas_constant: R_SPECIFIC_AIR,
            standard_pressure: STANDARD_ATMOSPHERIC_PRESSURE,
        }
    }
}

/// Ambient conditions derived once from the configuration via the
/// ideal-gas relation P = ρ·R·T.
#[derive(Debug, Clone, PartialEq)]
pub struct Environment {
    pub air_density: f64,        // kg/m³
    pub temperature_kelvin: f64, // K
    pub pressure: f64,           // Pa
    pub pressure_atm: f64,       // atm
}

impl Environment {
    pub fn new(config: &EnvironmentConfig) -> Result<Self, SimulationError> {
        let temperature_kelvin = CELSIUS_TO_KELVIN_OFFSET + config.temperature;

        if config.air_density <= 0.0 {
            return Err(SimulationError::ConfigurationError(format!(
                "air density must be positive, got {} kg/m³",
                config.air_density
            )));
        }
        if config.specific_gas_constant <= 0.0 {
            return Err(SimulationError::ConfigurationError(format!(
                "specific gas constant must be positive, got {} J/(kg·K)",
                config.specific_gas_constant
            )));
        }
        if temperature_kelvin <= 0.0 {
            return Err(SimulationError::ConfigurationError(format!(
                "absolute temperature must be positive, got {} K",
                temperature_kelvin
            )));
        }
        if config.standard_pressure <= 0.0 {
            return Err(SimulationError::ConfigurationError(format!(
                "standard pressure must be positive, got {} Pa",
                config.standard_pressure
            )));
        }

        let pressure = config.air_density * config.specific_gas_constant * temperature_kelvin;

        Ok(Environment {
            air_density: config.air_density,
            temperature_kelvin,
            pressure,
            pressure_atm: pressure / config.standard_pressure,
        })
    }
}
