//! Applying player care actions to the plant

use crate::actions::catalog::Action;
use crate::core::config::SimulationConfig;
use crate::entity::plant::PlantState;
use crate::simulation::tick::{narrate_bands, SimulationEvent};

/// Apply a care action. Deterministic: actions never roll dice.
///
/// A dead plant is not touched, but the attempt is still narrated.
pub fn perform_action(
    plant: &mut PlantState,
    action: Action,
    config: &SimulationConfig,
) -> Vec<SimulationEvent> {
    if !plant.alive {
        tracing::debug!(action = action.id(), "Action ignored, plant is dead");
        return vec![SimulationEvent::ActionOnDeadPlant { action }];
    }

    let stage_before = plant.stage();
    let water_before = config.water_band.classify(plant.water());
    let nutrients_before = config.nutrient_band.classify(plant.nutrients());
    let mut events = vec![SimulationEvent::ActionApplied { action }];

    for &(stat, delta) in action.deltas() {
        plant.adjust(stat, delta);
    }

    narrate_bands(
        (water_before, config.water_band.classify(plant.water())),
        (
            nutrients_before,
            config.nutrient_band.classify(plant.nutrients()),
        ),
        &mut events,
    );

    if action.clears_pests() && plant.pests {
        plant.pests = false;
        events.push(SimulationEvent::PestsRemoved);
    }

    if action == Action::Inspect {
        events.push(SimulationEvent::Diagnosis {
            water: config.water_band.classify(plant.water()),
            nutrients: config.nutrient_band.classify(plant.nutrients()),
            pests: plant.pests,
            stage: plant.stage(),
        });
    }

    let stage_after = plant.stage();
    if stage_after != stage_before {
        events.push(SimulationEvent::StageChanged {
            from: stage_before,
            to: stage_after,
        });
    }

    tracing::debug!(
        action = action.id(),
        water = plant.water(),
        nutrients = plant.nutrients(),
        health = plant.health(),
        growth = plant.growth(),
        "Action applied"
    );

    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::BandPosition;
    use crate::entity::plant::Stage;

    #[test]
    fn test_water_twice_clamps_at_100() {
        let config = SimulationConfig::default();
        let mut plant = PlantState::default();

        perform_action(&mut plant, Action::Water, &config);
        assert_eq!(plant.water(), 95.0);

        perform_action(&mut plant, Action::Water, &config);
        assert_eq!(plant.water(), 100.0);
    }

    #[test]
    fn test_overwatering_reports_waterlogged() {
        let config = SimulationConfig::default();
        let mut plant = PlantState::default();

        let events = perform_action(&mut plant, Action::Water, &config);
        assert_eq!(plant.water(), 95.0);
        assert_eq!(
            events,
            vec![
                SimulationEvent::ActionApplied {
                    action: Action::Water
                },
                SimulationEvent::Waterlogged,
            ]
        );

        // Already soaked: no repeat
        let events = perform_action(&mut plant, Action::Water, &config);
        assert!(!events.contains(&SimulationEvent::Waterlogged));
    }

    #[test]
    fn test_watering_dry_plant_reports_comfortable() {
        let config = SimulationConfig::default();
        let mut plant = PlantState::with_stats(30.0, 60.0, 70.0, 0.0);

        let events = perform_action(&mut plant, Action::Water, &config);
        assert_eq!(plant.water(), 55.0);
        assert!(events.contains(&SimulationEvent::Comfortable));
    }

    #[test]
    fn test_sun_can_dry_the_soil() {
        let config = SimulationConfig::default();
        let mut plant = PlantState::with_stats(42.0, 60.0, 70.0, 0.0);

        let events = perform_action(&mut plant, Action::Sun, &config);
        assert_eq!(plant.water(), 37.0);
        assert!(events.contains(&SimulationEvent::Thirsty));
    }

    #[test]
    fn test_each_action_logs() {
        let config = SimulationConfig::default();
        for action in Action::ALL {
            let mut plant = PlantState::default();
            let events = perform_action(&mut plant, action, &config);
            assert_eq!(events[0], SimulationEvent::ActionApplied { action });
        }
    }

    #[test]
    fn test_fertilize_sun_mist() {
        let config = SimulationConfig::default();
        let mut plant = PlantState::with_stats(50.0, 40.0, 70.0, 10.0);

        perform_action(&mut plant, Action::Fertilize, &config);
        assert_eq!(plant.nutrients(), 60.0);

        perform_action(&mut plant, Action::Sun, &config);
        assert_eq!(plant.health(), 75.0);
        assert_eq!(plant.growth(), 11.0);
        assert_eq!(plant.water(), 45.0);

        perform_action(&mut plant, Action::Mist, &config);
        assert_eq!(plant.water(), 55.0);
        assert_eq!(plant.health(), 77.0);
    }

    #[test]
    fn test_prune_clears_pests() {
        let config = SimulationConfig::default();
        let mut plant = PlantState::with_stats(50.0, 40.0, 70.0, 12.0);
        plant.pests = true;

        let events = perform_action(&mut plant, Action::Prune, &config);
        assert!(!plant.pests);
        assert_eq!(plant.growth(), 7.0);
        assert_eq!(plant.health(), 75.0);
        assert!(events.contains(&SimulationEvent::PestsRemoved));
        assert!(events.contains(&SimulationEvent::StageChanged {
            from: Stage::Sprout,
            to: Stage::Seed,
        }));
    }

    #[test]
    fn test_inspect_reports_without_changing_stats() {
        let config = SimulationConfig::default();
        let mut plant = PlantState::with_stats(20.0, 60.0, 70.0, 35.0);
        plant.pests = true;
        let before = plant.clone();

        let events = perform_action(&mut plant, Action::Inspect, &config);
        assert_eq!(plant, before);
        assert!(events.contains(&SimulationEvent::Diagnosis {
            water: BandPosition::Below,
            nutrients: BandPosition::Within,
            pests: true,
            stage: Stage::Young,
        }));
    }

    #[test]
    fn test_dead_plant_ignores_actions() {
        let config = SimulationConfig::default();
        let mut plant = PlantState::with_stats(10.0, 10.0, 0.0, 50.0);
        plant.check_death();
        let before = plant.clone();

        for action in Action::ALL {
            let events = perform_action(&mut plant, action, &config);
            assert_eq!(events, vec![SimulationEvent::ActionOnDeadPlant { action }]);
            assert_eq!(plant, before);
        }
    }
}
