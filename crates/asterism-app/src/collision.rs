//! Collision layer for the headless host.
//!
//! Runs the circle and beam tests after each tick and reports every contact
//! back to the engine.

use asterism_core::components::Transform;
use asterism_sim::systems::contacts::{find_beam_targets, find_contacts};
use asterism_sim::SimulationEngine;

/// Number of contacts reported in one pass.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ContactReport {
    pub bodies: usize,
    pub beam: usize,
}

/// Report all overlaps in the current world to `engine`.
pub fn report_contacts(engine: &mut SimulationEngine) -> ContactReport {
    let mut report = ContactReport::default();
    for (source, other) in find_contacts(engine.world()) {
        engine.report_contact(source, other);
        report.bodies += 1;
    }

    if !engine.laser_emitted() {
        return report;
    }
    let Some(player) = engine.player() else {
        return report;
    };
    let Ok(transform) = engine.world().get::<&Transform>(player).map(|t| *t) else {
        return report;
    };
    // The beam spans the whole playfield.
    let reach = engine
        .boundary()
        .map(|boundary| boundary.extent().half.length() * 2.0)
        .unwrap_or_default();
    for target in find_beam_targets(engine.world(), transform.position, transform.rotation_deg, reach) {
        engine.report_laser_contact(target);
        report.beam += 1;
    }
    report
}
