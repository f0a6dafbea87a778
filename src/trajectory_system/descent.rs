use crate::constants::{GRAVITY, MAX_ITERATIONS, TIME_STEP};
use crate::control::propulsion::PropulsionProperties;
use crate::control::vehicle::{VehicleConfig, VehicleProperties};
use crate::errors::SimulationError;
use crate::trajectory_system::freefall::FreefallProfile;

/// One snapshot of the venting phase. Altitude is height above ground,
/// velocity is positive downward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationState {
    pub time: f64,            // s since venting start
    pub altitude: f64,        // m
    pub velocity: f64,        // m/s downward
    pub water_remaining: f64, // kg
    pub acceleration: f64,    // m/s² of deceleration
}

/// Why the integration loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationReason {
    /// Remaining mass reached the dry-mass floor before the vehicle stopped.
    WaterDepleted,
    /// Downward velocity reached zero above ground.
    VelocityArrested,
    /// Altitude reached zero while still moving.
    GroundReached,
}

/// Result of a venting-phase run: the terminal state, why the loop stopped,
/// and the per-step trace. The trace holds one entry per accepted step; the
/// steps that trigger water depletion or velocity arrest are not appended.
#[derive(Debug, Clone, PartialEq)]
pub struct DescentResult {
    pub terminal_state: SimulationState,
    pub reason: TerminationReason,
    pub trace: Vec<SimulationState>,
}

/// Fixed-timestep integrator for the powered deceleration phase.
///
/// Thrust and ejection rate are constant; velocity is updated before
/// altitude each step (Euler-Cromer ordering). The update order is part of
/// the model's numeric contract and must not be rearranged.
#[derive(Debug, Clone, PartialEq)]
pub struct DescentSimulator {
    pub time_step: f64, // s
    pub max_iterations: usize,
}

impl Default for DescentSimulator {
    fn default() -> Self {
        DescentSimulator {
            time_step: TIME_STEP,
            max_iterations: MAX_ITERATIONS,
        }
    }
}

impl DescentSimulator {
    pub fn new(time_step: f64, max_iterations: usize) -> Self {
        DescentSimulator {
            time_step,
            max_iterations,
        }
    }

    pub fn run(
        &self,
        config: &VehicleConfig,
        properties: &VehicleProperties,
        propulsion: &PropulsionProperties,
        freefall: &FreefallProfile,
    ) -> Result<DescentResult, SimulationError> {
        if self.time_step <= 0.0 {
            return Err(SimulationError::ConfigurationError(format!(
                "time step must be positive, got {} s",
                self.time_step
            )));
        }
        if self.max_iterations == 0 {
            return Err(SimulationError::ConfigurationError(
                "iteration limit must be at least 1".to_string(),
            ));
        }

        let dt = self.time_step;
        let wet_mass = properties.wet_mass;
        let dry_mass = config.dry_mass;

        let mut state = SimulationState {
            time: 0.0,
            altitude: config.venting_altitude,
            velocity: freefall.terminal_velocity,
            water_remaining: properties.water_budget(dry_mass),
            acceleration: 0.0,
        };
        let mut trace = Vec::new();
        let mut reason = TerminationReason::GroundReached;
        let mut iterations = 0usize;

        while state.altitude > 0.0 {
            iterations += 1;
            if iterations > self.max_iterations {
                return Err(SimulationError::DivergedError(format!(
                    "no terminal condition reached after {} steps ({:.1} s of flight); \
                     thrust may be balancing gravity",
                    self.max_iterations,
                    self.max_iterations as f64 * dt
                )));
            }

            state.time += dt;
            let current_mass = wet_mass - propulsion.total_ejection_rate * state.time;
            if current_mass <= dry_mass {
                // Ran out of water; velocity and altitude keep the values of
                // the previous step, as does the last computed acceleration.
                state.water_remaining = (current_mass - dry_mass).max(0.0);
                reason = TerminationReason::WaterDepleted;
                break;
            }

            let net_force = propulsion.total_thrust - current_mass * GRAVITY;
            state.acceleration = net_force / current_mass;
            state.velocity -= state.acceleration * dt;
            state.altitude -= state.velocity * dt;
            state.water_remaining = current_mass - dry_mass;

            if state.velocity <= 0.0 {
                // Arrested above ground; this step is not part of the trace.
                reason = TerminationReason::VelocityArrested;
                break;
            }

            trace.push(state);
        }

        Ok(DescentResult {
            terminal_state: state,
            reason,
            trace,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::control::environment::{Environment, EnvironmentConfig};
    use approx::assert_abs_diff_eq;

    fn run_scenario(config: &VehicleConfig, simulator: &DescentSimulator) -> DescentResult {
        let properties = VehicleProperties::derive(config).unwrap();
        let propulsion = PropulsionProperties::derive(config).unwrap();
        let environment = Environment::new(&EnvironmentConfig::default()).unwrap();
        let freefall = FreefallProfile::derive(config, &properties, &environment).unwrap();
        simulator
            .run(config, &properties, &propulsion, &freefall)
            .unwrap()
    }

    #[test]
    fn test_default_vehicle_arrests_above_ground() {
        let config = VehicleConfig::default();
        let result = run_scenario(&config, &DescentSimulator::default());

        assert_eq!(result.reason, TerminationReason::VelocityArrested);
        assert!(result.terminal_state.velocity <= 0.0);
        assert!(result.terminal_state.altitude > 0.0);
        assert!(result.terminal_state.water_remaining > 0.0);

        // Known values for the default scenario at dt = 0.1 s
        assert_abs_diff_eq!(result.terminal_state.time, 4.7, epsilon = 1e-9);
        assert_abs_diff_eq!(result.terminal_state.altitude, 5.35, epsilon = 0.01);
        assert_abs_diff_eq!(result.terminal_state.water_remaining, 36.10, epsilon = 0.01);
        assert_eq!(result.trace.len(), 46);
    }

    #[test]
    fn test_trace_excludes_terminating_step() {
        let config = VehicleConfig::default();
        let result = run_scenario(&config, &DescentSimulator::default());

        let last = result.trace.last().unwrap();
        assert!(last.time < result.terminal_state.time);
        assert!(last.velocity > 0.0);
    }

    #[test]
    fn test_trace_altitude_is_strictly_decreasing() {
        let config = VehicleConfig::default();
        let result = run_scenario(&config, &DescentSimulator::default());

        for pair in result.trace.windows(2) {
            assert!(pair[1].altitude < pair[0].altitude);
            assert!(pair[1].time > pair[0].time);
        }
    }

    #[test]
    fn test_first_step_matches_hand_computation() {
        let config = VehicleConfig::default();
        let properties = VehicleProperties::derive(&config).unwrap();
        let propulsion = PropulsionProperties::derive(&config).unwrap();
        let environment = Environment::new(&EnvironmentConfig::default()).unwrap();
        let freefall = FreefallProfile::derive(&config, &properties, &environment).unwrap();
        let result = DescentSimulator::default()
            .run(&config, &properties, &propulsion, &freefall)
            .unwrap();

        let dt = 0.1;
        let mass = properties.wet_mass - propulsion.total_ejection_rate * dt;
        let acceleration = (propulsion.total_thrust - mass * GRAVITY) / mass;
        let velocity = freefall.terminal_velocity - acceleration * dt;
        let altitude = config.venting_altitude - velocity * dt;

        let first = result.trace[0];
        assert_abs_diff_eq!(first.time, dt, epsilon = 1e-12);
        assert_abs_diff_eq!(first.acceleration, acceleration, epsilon = 1e-12);
        assert_abs_diff_eq!(first.velocity, velocity, epsilon = 1e-12);
        assert_abs_diff_eq!(first.altitude, altitude, epsilon = 1e-12);
        assert_abs_diff_eq!(first.water_remaining, mass - config.dry_mass, epsilon = 1e-12);
    }

    #[test]
    fn test_insufficient_thrust_reaches_ground() {
        // 500 kPa of headspace pressure gives ~1.9 kN of thrust against
        // ~7.3 kN of weight, so the vehicle keeps accelerating downward.
        let config = VehicleConfig {
            head_space_pressure: 500_000.0,
            ..VehicleConfig::default()
        };
        let result = run_scenario(&config, &DescentSimulator::default());

        assert_eq!(result.reason, TerminationReason::GroundReached);
        assert!(result.terminal_state.altitude <= 0.0);
        assert!(result.terminal_state.velocity > 0.0);
        assert!(result.terminal_state.water_remaining > 0.0);

        // Every computed acceleration is negative: the vehicle speeds up
        for state in &result.trace {
            assert!(state.acceleration < 0.0);
        }
    }

    #[test]
    fn test_water_depletion_stops_integration() {
        // No paddles raises terminal velocity past what the water budget can
        // absorb; venting from high up keeps the ground out of reach.
        let config = VehicleConfig {
            paddle_count: 0,
            venting_altitude: 2000.0,
            ..VehicleConfig::default()
        };
        let result = run_scenario(&config, &DescentSimulator::default());

        assert_eq!(result.reason, TerminationReason::WaterDepleted);
        assert_abs_diff_eq!(result.terminal_state.water_remaining, 0.0, epsilon = 1e-9);
        assert!(result.terminal_state.velocity > 0.0);
        assert!(result.terminal_state.altitude > 0.0);

        // The depleting step advances time but freezes velocity and altitude
        let last = result.trace.last().unwrap();
        assert_abs_diff_eq!(
            result.terminal_state.time,
            last.time + 0.1,
            epsilon = 1e-9
        );
        assert_abs_diff_eq!(result.terminal_state.velocity, last.velocity, epsilon = 1e-12);
        assert_abs_diff_eq!(result.terminal_state.altitude, last.altitude, epsilon = 1e-12);
    }

    #[test]
    fn test_iteration_cap_is_enforced() {
        let config = VehicleConfig::default();
        let properties = VehicleProperties::derive(&config).unwrap();
        let propulsion = PropulsionProperties::derive(&config).unwrap();
        let environment = Environment::new(&EnvironmentConfig::default()).unwrap();
        let freefall = FreefallProfile::derive(&config, &properties, &environment).unwrap();

        // The default scenario needs 47 steps; a cap of 10 must trip the guard
        let simulator = DescentSimulator::new(0.1, 10);
        let result = simulator.run(&config, &properties, &propulsion, &freefall);
        assert!(matches!(result, Err(SimulationError::DivergedError(_))));
    }

    #[test]
    fn test_rejects_non_positive_time_step() {
        let config = VehicleConfig::default();
        let properties = VehicleProperties::derive(&config).unwrap();
        let propulsion = PropulsionProperties::derive(&config).unwrap();
        let environment = Environment::new(&EnvironmentConfig::default()).unwrap();
        let freefall = FreefallProfile::derive(&config, &properties, &environment).unwrap();

        let simulator = DescentSimulator::new(0.0, MAX_ITERATIONS);
        assert!(matches!(
            simulator.run(&config, &properties, &propulsion, &freefall),
            Err(SimulationError::ConfigurationError(_))
        ));
    }

    #[test]
    fn test_identical_runs_produce_identical_traces() {
        let config = VehicleConfig::default();
        let first = run_scenario(&config, &DescentSimulator::default());
        let second = run_scenario(&config, &DescentSimulator::default());

        assert_eq!(first, second);
    }
}
