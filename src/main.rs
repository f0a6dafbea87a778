use drop_simulation::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mission = DropMission::default();
    let (report, trace) = mission.run()?;

    display_report(&report);
    display_trace(&trace);

    Ok(())
}
