use crate::control::environment::{Environment, EnvironmentConfig};
use crate::control::propulsion::PropulsionProperties;
use crate::control::vehicle::{VehicleConfig, VehicleProperties};
use crate::errors::SimulationError;
use crate::trajectory_system::descent::{DescentSimulator, SimulationState, TerminationReason};
use crate::trajectory_system::freefall::FreefallProfile;
use crate::trajectory_system::outcome::{FlightOutcome, OutcomeEvaluation};

/// Everything a reporting collaborator needs about a completed drop:
/// the configurations, every derived quantity, and the terminal state.
#[derive(Debug, Clone, PartialEq)]
pub struct FlightReport {
    pub vehicle: VehicleConfig,
    pub environment: Environment,
    pub properties: VehicleProperties,
    pub propulsion: PropulsionProperties,
    pub freefall: FreefallProfile,
    pub outcome: FlightOutcome,
    pub water_exhausted: bool,
    pub termination: TerminationReason,
    pub final_altitude: f64,      // m
    pub final_velocity: f64,      // m/s downward
    pub water_remaining: f64,     // kg
    pub peak_deceleration: f64,   // m/s² - last acceleration computed before loop exit
}

/// One full drop: derive the vehicle, propulsion and free-fall figures,
/// integrate the venting phase, classify the outcome.
#[derive(Debug, Clone, PartialEq)]
pub struct DropMission {
    pub vehicle: VehicleConfig,
    pub environment: EnvironmentConfig,
    pub simulator: DescentSimulator,
}

impl Default for DropMission {
    fn default() -> Self {
        DropMission::new(VehicleConfig::default(), EnvironmentConfig::default())
    }
}

impl DropMission {
    pub fn new(vehicle: VehicleConfig, environment: EnvironmentConfig) -> Self {
        DropMission {
            vehicle,
            environment,
            simulator: DescentSimulator::default(),
        }
    }

    pub fn with_time_step(mut self, time_step: f64) -> Self {
        self.simulator.time_step = time_step;
        self
    }

    pub fn run(&self) -> Result<(FlightReport, Vec<SimulationState>), SimulationError> {
        let environment = Environment::new(&self.environment)?;
        let properties = VehicleProperties::derive(&self.vehicle)?;
        let propulsion = PropulsionProperties::derive(&self.vehicle)?;
        let freefall = FreefallProfile::derive(&self.vehicle, &properties, &environment)?;

        let result = self
            .simulator
            .run(&self.vehicle, &properties, &propulsion, &freefall)?;
        let evaluation = OutcomeEvaluation::from_result(&result);

        let terminal = result.terminal_state;
        let report = FlightReport {
            vehicle: self.vehicle.clone(),
            environment,
            properties,
            propulsion,
            freefall,
            outcome: evaluation.outcome,
            water_exhausted: evaluation.water_exhausted,
            termination: result.reason,
            final_altitude: terminal.altitude,
            final_velocity: terminal.velocity,
            water_remaining: terminal.water_remaining,
            peak_deceleration: terminal.acceleration,
        };

        Ok((report, result.trace))
    }
}
