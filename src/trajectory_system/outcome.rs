use crate::trajectory_system::descent::{DescentResult, SimulationState, TerminationReason};

/// How the flight ended. `WaterDepleted` runs are classified as impacts
/// since the vehicle is still moving when propulsion dies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlightOutcome {
    Hover,
    Impact,
}

/// Outcome classification together with the independent water-exhaustion
/// flag; an impact can happen with or without water left, and a hover
/// always has some.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutcomeEvaluation {
    pub outcome: FlightOutcome,
    pub water_exhausted: bool,
}

impl OutcomeEvaluation {
    pub fn evaluate(terminal_state: &SimulationState, reason: TerminationReason) -> Self {
        let hover = reason == TerminationReason::VelocityArrested
            && terminal_state.water_remaining > 0.0
            && terminal_state.altitude >= 0.0;

        OutcomeEvaluation {
            outcome: if hover {
                FlightOutcome::Hover
            } else {
                FlightOutcome::Impact
            },
            water_exhausted: terminal_state.water_remaining <= 0.0,
        }
    }

    pub fn from_result(result: &DescentResult) -> Self {
        Self::evaluate(&result.terminal_state, result.reason)
    }

    pub fn is_hover(&self) -> bool {
        self.outcome == FlightOutcome::Hover
    }
}
