// Physical Constants
pub const GRAVITY: f64 = 9.80665; // m/s²
pub const WATER_DENSITY: f64 = 1000.0; // kg/m³
pub const CELSIUS_TO_KELVIN_OFFSET: f64 = 273.15; // K

// Environmental Constants
pub const AIR_DENSITY_5000_FT: f64 = 1.0582; // kg/m³ - typical air density at 5000 feet
pub const AMBIENT_TEMPERATURE: f64 = 15.0; // °C
pub const R_SPECIFIC_AIR: f64 = 287.05; // J/(kg·K)
pub const STANDARD_ATMOSPHERIC_PRESSURE: f64 = 101_325.0; // Pa

// Aerodynamic Constants
pub const DRAG_COEFFICIENT: f64 = 1.0; // flat-ish shape falling close to vertical

// Simulation Parameters
pub const TIME_STEP: f64 = 0.1; // s
pub const MAX_ITERATIONS: usize = 1_000_000;
