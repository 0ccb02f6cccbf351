use bevy::math::primitives::Circle;
use bevy::prelude::*;
use bevy::sprite::{MaterialMesh2dBundle, Mesh2dHandle};
use bevy::window::{PrimaryWindow, WindowResolution};

use crate::simulation::scenario::Scenario;
use crate::simulation::states::{Body, BodyHandle};

#[derive(Component)]
struct BodyIndex(pub usize);

const WINDOW_TITLE: &str = "2D Physics Simulation Engine";

pub fn run_2d(scenario: Scenario) {
    println!("run_2d: starting Bevy 2D viewer with {} bodies", scenario.system.len());

    let width = scenario.parameters.width as f32;
    let height = scenario.parameters.height as f32;

    App::new()
        .insert_resource(ClearColor(Color::BLACK))
        .insert_resource(scenario)
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: WINDOW_TITLE.to_string(),
                resolution: WindowResolution::new(width, height),
                resizable: false,
                ..Default::default()
            }),
            ..Default::default()
        }))
        .add_systems(Startup, setup_bodies_system)
        .add_systems(Update, (spawn_on_click_system, physics_step_system, sync_transforms_system).chain())
        .run();
}

fn setup_bodies_system(mut commands: Commands, scenario: Res<Scenario>, mut meshes: ResMut<Assets<Mesh>>, mut materials: ResMut<Assets<ColorMaterial>>) {
    // 2D camera
    commands.spawn(Camera2dBundle::default());

    for (i, body) in scenario.system.iter().enumerate() {
        spawn_body_mesh(&mut commands, &mut meshes, &mut materials, &scenario, i, body);
    }
}

fn spawn_body_mesh(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<ColorMaterial>,
    scenario: &Scenario,
    index: usize,
    body: &Body,
) {
    let [r, g, b] = body.color;
    let (x, y) = to_screen(scenario, body);

    commands.spawn((
        MaterialMesh2dBundle {
            mesh: Mesh2dHandle(meshes.add(Circle::new(body.radius() as f32))),
            material: materials.add(ColorMaterial::from(Color::srgb_u8(r, g, b))),
            transform: Transform::from_xyz(x, y, 0.0),
            ..Default::default()
        },
        BodyIndex(index),
    ));
}

/// World space is y-down with the origin at the top-left corner;
/// Bevy's 2D camera is y-up and centered
fn to_screen(scenario: &Scenario, body: &Body) -> (f32, f32) {
    let p = &scenario.parameters;
    let x = (body.x.x - 0.5 * p.width) as f32;
    let y = (0.5 * p.height - body.x.y) as f32;
    (x, y)
}

fn spawn_on_click_system(
    mut commands: Commands,
    buttons: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut scenario: ResMut<Scenario>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    if !buttons.just_pressed(MouseButton::Left) {
        return;
    }
    let Ok(window) = windows.get_single() else {
        return;
    };
    // Cursor coordinates are already top-left origin, y-down
    let Some(cursor) = window.cursor_position() else {
        return;
    };

    let radius = scenario.spawn_radius;
    let BodyHandle(i) = scenario.spawn(cursor.x as f64, cursor.y as f64, radius);
    info!("spawned body {i} at ({:.1}, {:.1})", cursor.x, cursor.y);

    if let Some(body) = scenario.system.get(BodyHandle(i)) {
        spawn_body_mesh(&mut commands, &mut meshes, &mut materials, &scenario, i, body);
    }
}

fn physics_step_system(time: Res<Time>, mut scenario: ResMut<Scenario>) {
    scenario.advance(time.delta_seconds_f64());
}

fn sync_transforms_system(scenario: Res<Scenario>, mut query: Query<(&BodyIndex, &mut Transform)>) {
    for (BodyIndex(i), mut transform) in &mut query {
        if let Some(b) = scenario.system.get(BodyHandle(*i)) {
            let (x, y) = to_screen(&scenario, b);
            transform.translation.x = x;
            transform.translation.y = y;
        }
    }
}
