use bevy::prelude::*;
use bevy::sprite::{MaterialMesh2dBundle, Mesh2dHandle};
use bevy::math::primitives::Circle;
use bevy::window::{PresentMode, WindowResolution};
use bevy::winit::{UpdateMode, WinitSettings};
use std::time::Duration;

use crate::simulation::scenario::Scenario;
use crate::simulation::integrator::step;
use crate::visualization::adapter::{body_views, ScreenMapping};

#[derive(Component)]
struct BodyIndex(pub usize);

#[derive(Component)]
struct BodyLabel(pub usize);

const LABEL_FONT_SIZE: f32 = 16.0;

pub fn run_2d(scenario: Scenario) -> AppExit {
    let display = scenario.display;
    // one frame = one integration step + one render, capped at `fps`
    let frame = UpdateMode::reactive_low_power(Duration::from_secs_f64(1.0 / scenario.engine.fps));

    App::new()
        .insert_resource(ClearColor(Color::BLACK))
        .insert_resource(WinitSettings {
            focused_mode: frame,
            unfocused_mode: frame,
        })
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Planet Simulation".into(),
                resolution: WindowResolution::new(display.width, display.height),
                present_mode: PresentMode::AutoVsync,
                ..default()
            }),
            ..default()
        }))
        .insert_resource(scenario)
        .add_systems(Startup, setup_bodies_system)
        .add_plugins(PhysicsStepPlugin)
        .add_systems(Update, (render_system.after(SimSet::Step), quit_on_escape_system))
        .run()
}

/// Ordering label for the per-frame integration step
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum SimSet {
    Step,
}

/// Advances the `Scenario` resource by exactly one step on every `Update`.
/// A failed step requests `AppExit::error()`.
pub struct PhysicsStepPlugin;

impl Plugin for PhysicsStepPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, physics_step_system.in_set(SimSet::Step));
    }
}

fn mapping(scenario: &Scenario) -> ScreenMapping {
    ScreenMapping::from_display(&scenario.display, scenario.parameters.au)
}

// screen px (top-left origin, y down) -> bevy world (centered, y up)
fn to_world(p: [f32; 2], mapping: &ScreenMapping) -> Vec2 {
    Vec2::new(p[0] - mapping.width / 2.0, mapping.height / 2.0 - p[1])
}

fn to_color(c: [u8; 3]) -> Color {
    Color::srgb_u8(c[0], c[1], c[2])
}

fn setup_bodies_system(mut commands: Commands, scenario: Res<Scenario>, mut meshes: ResMut<Assets<Mesh>>, mut materials: ResMut<Assets<ColorMaterial>>) {
    info!("run_2d: starting Bevy 2D viewer with {} bodies", scenario.system.bodies.len());

    // 2D camera
    commands.spawn(Camera2dBundle::default());

    let mapping = mapping(&scenario);
    for (i, view) in body_views(&scenario.system, &mapping).into_iter().enumerate() {
        let pos = to_world(view.center, &mapping);

        commands.spawn((
            MaterialMesh2dBundle {
                mesh: Mesh2dHandle(meshes.add(Circle::new(view.radius))),
                material: materials.add(ColorMaterial::from(to_color(view.color))),
                transform: Transform::from_xyz(pos.x, pos.y, 1.0),
                ..Default::default()
            },
            BodyIndex(i),
        ));

        if let Some(label) = view.label {
            commands.spawn((
                Text2dBundle {
                    text: Text::from_section(label, TextStyle {
                        font_size: LABEL_FONT_SIZE,
                        color: Color::WHITE,
                        ..default()
                    }),
                    transform: Transform::from_xyz(pos.x, pos.y, 2.0),
                    ..default()
                },
                BodyLabel(i),
            ));
        }
    }
}

fn physics_step_system(mut scenario: ResMut<Scenario>, mut exit: EventWriter<AppExit>) {
    if let Err(e) = step(&mut scenario) {
        error!("simulation stopped: {e}");
        exit.send(AppExit::error());
    }
}

fn render_system(
    scenario: Res<Scenario>,
    mut gizmos: Gizmos,
    mut bodies: Query<(&BodyIndex, &mut Transform), Without<BodyLabel>>,
    mut labels: Query<(&BodyLabel, &mut Transform, &mut Text), Without<BodyIndex>>,
) {
    let mapping = mapping(&scenario);
    let views = body_views(&scenario.system, &mapping);

    for view in &views {
        if let Some(trail) = &view.trail {
            gizmos.linestrip_2d(trail.iter().map(|p| to_world(*p, &mapping)), to_color(view.color));
        }
    }

    for (BodyIndex(i), mut transform) in &mut bodies {
        if let Some(view) = views.get(*i) {
            let pos = to_world(view.center, &mapping);
            transform.translation.x = pos.x;
            transform.translation.y = pos.y;
        }
    }

    for (BodyLabel(i), mut transform, mut text) in &mut labels {
        let Some(view) = views.get(*i) else { continue };
        let pos = to_world(view.center, &mapping);
        transform.translation.x = pos.x;
        transform.translation.y = pos.y;
        if let (Some(label), Some(section)) = (&view.label, text.sections.first_mut()) {
            section.value.clone_from(label);
        }
    }
}

fn quit_on_escape_system(keys: Res<ButtonInput<KeyCode>>, mut exit: EventWriter<AppExit>) {
    if keys.just_pressed(KeyCode::Escape) {
        exit.send(AppExit::Success);
    }
}
