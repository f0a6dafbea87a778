use crate::constants::GRAVITY;
use crate::control::mission::FlightReport;
use crate::trajectory_system::descent::SimulationState;
use crate::trajectory_system::outcome::FlightOutcome;

// Unit conversion factors for the report text
const CUBIC_METERS_TO_GALLONS: f64 = 264.2;
const METERS_PER_SECOND_TO_MPH: f64 = 2.237;
const METERS_TO_FEET: f64 = 3.28084;
const PASCALS_TO_PSI: f64 = 0.000_145_038;
const NEWTONS_TO_POUND_FORCE: f64 = 1.0 / 4.44822;
const KILOGRAMS_TO_GALLONS: f64 = 1.0 / 3.7854;

fn mph(meters_per_second: f64) -> f64 {
    meters_per_second * METERS_PER_SECOND_TO_MPH
}

fn feet(meters: f64) -> f64 {
    meters * METERS_TO_FEET
}

/// Prints the flight outcome in the shape mission reviewers expect:
/// geometry, free fall, venting performance, then the terminal verdict.
/// All unit conversion lives here; the report itself is strictly SI.
pub fn display_report(report: &FlightReport) {
    let vehicle = &report.vehicle;
    let properties = &report.properties;
    let propulsion = &report.propulsion;
    let freefall = &report.freefall;

    let verdict = match report.outcome {
        FlightOutcome::Hover => "SUCCESS",
        FlightOutcome::Impact => "FAIL",
    };
    println!(">>> DROP SIMULATION OUTCOME: {}\n", verdict);

    println!(
        "Reservoir dimensions: {:.2} meters inner diameter, {:.2} meters high.",
        vehicle.tube_diameter, vehicle.tube_height
    );
    println!(
        "\t containing {:.1} cubic meters of water ({:.1} gallons) weighing {:.1} metric tons.",
        properties.water_volume,
        properties.water_volume * CUBIC_METERS_TO_GALLONS,
        properties.water_mass / 1000.0
    );
    println!(
        "Freefall flight controlled with {} paddles measuring {} x {} meters each.",
        vehicle.paddle_count, vehicle.paddle_width, vehicle.paddle_length
    );
    println!(
        "\t for a terminal velocity of {:.0} m/s ({:.1} mph) with air density of {:.2} kg/m3 ({:.2} atm)",
        freefall.terminal_velocity,
        mph(freefall.terminal_velocity),
        report.environment.air_density,
        report.environment.pressure_atm
    );
    println!(
        "Vehicle was dropped at an altitude of {:.0} meters ({:.0} feet)",
        vehicle.drop_altitude,
        feet(vehicle.drop_altitude)
    );
    println!(
        "\t and fell for {:.0} seconds to an altitude of {:.0} meters ({:.0} feet) before venting for retrothrust",
        freefall.time_to_venting,
        vehicle.venting_altitude,
        feet(vehicle.venting_altitude)
    );
    println!(
        "Reservoir headspace pressure maintained at {} kPa ({:.0} psi) throughout venting phase",
        vehicle.head_space_pressure / 1000.0,
        vehicle.head_space_pressure * PASCALS_TO_PSI
    );
    println!(
        "\t causing a water ejection velocity of {:.1} m/s ({:.1} mph) through each venting nozzle of diameter {:.1} cm",
        propulsion.exit_velocity,
        mph(propulsion.exit_velocity),
        vehicle.vent_nozzle_diameter * 100.0
    );
    println!(
        "\t ejecting water at a rate of {:.1} kg/sec ({:.1} gallons/sec) in total across all {} vent nozzles",
        propulsion.total_ejection_rate,
        propulsion.total_ejection_rate * 0.26,
        vehicle.vent_count
    );
    println!(
        "\t producing a total deceleration thrust of {:.2} N ({:.2} pound-force)",
        propulsion.total_thrust,
        propulsion.total_thrust * NEWTONS_TO_POUND_FORCE
    );
    println!(
        "\t resulting in a peak deceleration of {:.1} g.",
        report.peak_deceleration / GRAVITY
    );

    match report.outcome {
        FlightOutcome::Hover => {
            println!(
                "\nVehicle will hover at an altitude of {:.2} meters.",
                report.final_altitude
            );
        }
        FlightOutcome::Impact => {
            println!(
                "\nVehicle will impact at a velocity of {:.2} m/s ({:.1} mph).",
                report.final_velocity,
                mph(report.final_velocity)
            );
        }
    }
    if report.water_exhausted {
        println!(
            "\t because the water was depleted at an altitude of {:.1} meters ({:.0} feet)",
            report.final_altitude,
            feet(report.final_altitude)
        );
    } else {
        println!(
            "\t with {:.1} kg ({:.1} gallons) of water remaining in the reservoir",
            report.water_remaining,
            report.water_remaining * KILOGRAMS_TO_GALLONS
        );
    }
}

/// Prints a coarse table of the venting-phase trace, one line per second
/// of flight. Any chart scaling is left to whoever renders the trace.
pub fn display_trace(trace: &[SimulationState]) {
    if trace.is_empty() {
        println!("No accepted integration steps before the flight ended.");
        return;
    }

    println!("\n  time |  altitude |  velocity |   water | deceleration");
    println!("   (s) |       (m) |     (m/s) |    (kg) |       (m/s²)");
    // roughly one line per second of flight; the first entry is at one dt
    let stride = ((1.0 / trace[0].time).round() as usize).max(1);
    for state in trace.iter().step_by(stride) {
        println!(
            "{:6.1} | {:9.2} | {:9.2} | {:7.1} | {:12.2}",
            state.time, state.altitude, state.velocity, state.water_remaining, state.acceleration
        );
    }
}
