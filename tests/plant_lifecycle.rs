//! Integration tests for the plant lifecycle
//!
//! These tests drive the public API the way the game loop does:
//! - Neglect kills the plant and it stays dead
//! - Steady care keeps it alive and growing
//! - The activity log stays bounded and newest-first

use virtual_plant::actions::Action;
use virtual_plant::core::config::SimulationConfig;
use virtual_plant::entity::{PlantState, Stage};
use virtual_plant::simulation::{
    perform_action, tick, update, PlantEvent, ScriptedRandom, Session, SimulationEvent,
};

#[test]
fn test_fresh_plant_watered_twice() {
    let config = SimulationConfig::default();
    let mut plant = PlantState::default();
    assert_eq!(plant.water(), 70.0);
    assert_eq!(plant.nutrients(), 60.0);
    assert_eq!(plant.health(), 100.0);
    assert_eq!(plant.growth(), 0.0);
    assert!(plant.alive);

    perform_action(&mut plant, Action::Water, &config);
    assert_eq!(plant.water(), 95.0);

    perform_action(&mut plant, Action::Water, &config);
    assert_eq!(plant.water(), 100.0);
}

#[test]
fn test_overwatered_plant_explains_its_health_loss() {
    let config = SimulationConfig::default();
    let mut plant = PlantState::default();
    let mut rng = ScriptedRandom::calm();

    let mut events = perform_action(&mut plant, Action::Water, &config);
    events.extend(perform_action(&mut plant, Action::Water, &config));
    for _ in 0..3 {
        events.extend(tick(&mut plant, &config, &mut rng));
    }

    // 100 -> 95 -> 90 -> 85: two penalized ticks, then back in band
    assert_eq!(plant.water(), 85.0);
    assert_eq!(plant.health(), 90.0);
    let waterlogged = events.iter().position(|e| *e == SimulationEvent::Waterlogged);
    let comfortable = events.iter().position(|e| *e == SimulationEvent::Comfortable);
    assert!(waterlogged.is_some());
    assert!(waterlogged < comfortable);
    assert_eq!(
        events
            .iter()
            .filter(|e| **e == SimulationEvent::Waterlogged)
            .count(),
        1
    );
}

#[test]
fn test_neglect_kills_and_death_is_final() {
    let config = SimulationConfig::default();
    let mut plant = PlantState::default();
    let mut rng = ScriptedRandom::calm();

    let mut died_at = None;
    for i in 0..200 {
        let events = tick(&mut plant, &config, &mut rng);
        if events.contains(&SimulationEvent::Died) {
            died_at = Some(i);
            break;
        }
    }

    assert!(died_at.is_some(), "Untended plant should die");
    assert!(!plant.alive);
    assert_eq!(plant.health(), 0.0);

    let frozen = plant.clone();
    for _ in 0..20 {
        assert!(tick(&mut plant, &config, &mut rng).is_empty());
    }
    assert_eq!(plant, frozen);

    let events = perform_action(&mut plant, Action::Water, &config);
    assert_eq!(events.len(), 1);
    assert_eq!(plant, frozen);
}

#[test]
fn test_steady_care_reaches_bloom() {
    let config = SimulationConfig::default();
    let mut plant = PlantState::default();
    let mut rng = ScriptedRandom::calm();

    // Water every other tick, fertilize every fourth
    for i in 0..200 {
        if i % 2 == 0 && plant.water() < 60.0 {
            perform_action(&mut plant, Action::Water, &config);
        }
        if i % 4 == 0 && plant.nutrients() < 50.0 {
            perform_action(&mut plant, Action::Fertilize, &config);
        }
        tick(&mut plant, &config, &mut rng);
    }

    assert!(plant.alive);
    assert_eq!(plant.stage(), Stage::Blooming);
}

#[test]
fn test_prune_saves_infested_plant() {
    let config = SimulationConfig::default();
    let mut plant = PlantState::default();
    let mut unlucky = ScriptedRandom::unlucky();

    tick(&mut plant, &config, &mut unlucky);
    assert!(plant.pests);

    perform_action(&mut plant, Action::Prune, &config);
    assert!(!plant.pests);
}

#[test]
fn test_pure_update_chain() {
    let config = SimulationConfig::default();
    let mut rng = ScriptedRandom::calm();
    let start = PlantState::default();

    let events = [
        PlantEvent::Action(Action::Water),
        PlantEvent::Tick,
        PlantEvent::Action(Action::Sun),
        PlantEvent::Tick,
    ];

    let end = events.iter().fold(start.clone(), |state, &event| {
        update(&state, event, &config, &mut rng).state
    });

    assert_eq!(start, PlantState::default());
    assert!(end.alive);
    assert!(end.growth() > 0.0);
}

#[test]
fn test_session_log_is_bounded_newest_first() {
    let mut session = Session::new(SimulationConfig::default(), 99).unwrap();

    for _ in 0..40 {
        session.perform(Action::Mist);
        session.tick();
    }

    let log: Vec<_> = session.log().iter().collect();
    assert!(log.len() <= 10);
    assert!(log.windows(2).all(|w| w[0].tick >= w[1].tick));
}

#[test]
fn test_session_ignores_unknown_names() {
    let mut session = Session::new(SimulationConfig::default(), 5).unwrap();
    let before = session.plant().clone();
    assert!(session.perform_named("sing").is_empty());
    assert!(session.perform_named("").is_empty());
    assert_eq!(session.plant(), &before);
}
