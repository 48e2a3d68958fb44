use bevy::app::AppExit;
use bevy::prelude::*;

use solsim::configuration::config::ScenarioConfig;
use solsim::simulation::scenario::Scenario;
use solsim::PhysicsStepPlugin;

fn headless_app(scenario: Scenario) -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .insert_resource(scenario)
        .add_plugins(PhysicsStepPlugin);
    app
}

fn exit_requests(app: &App) -> Vec<AppExit> {
    let events = app.world().resource::<Events<AppExit>>();
    events.get_reader().read(events).cloned().collect()
}

#[test]
fn every_frame_advances_exactly_one_step() {
    let mut app = headless_app(Scenario::solar_system().unwrap());

    for frame in 1..=7 {
        app.update();
        let scenario = app.world().resource::<Scenario>();
        assert_eq!(scenario.system.steps, frame);
        assert!(scenario.system.bodies.iter().all(|b| b.orbit.len() == frame as usize));
    }
    assert!(exit_requests(&app).is_empty());
}

#[test]
fn failed_step_requests_error_exit() {
    let cfg = ScenarioConfig::from_yaml_str(
        "engine:\n  separation: \"reject\"\nbodies:\n  - { name: \"A\", x: [1.0, 0.0], m: 1.0 }\n  - { name: \"B\", x: [1.0, 0.0], m: 1.0 }\n",
    )
    .unwrap();
    let mut app = headless_app(Scenario::build_scenario(cfg).unwrap());

    app.update();

    assert_eq!(app.world().resource::<Scenario>().system.steps, 0);
    let exits = exit_requests(&app);
    assert_eq!(exits.len(), 1);
    assert!(exits[0].is_error());
}
