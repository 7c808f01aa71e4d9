use bevy::prelude::*;

// Marker for the rigid body slab that follows the animated orientation
#[derive(Component)]
pub struct BodySlab;

// Marker for the yaw/pitch/roll readout in the corner
#[derive(Component)]
pub struct OverlayText;

// Function to create the scene (camera, lights, body slab, and overlay)
pub fn setup_scene(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    info!("Setting up gimbal lock scene...");

    // Camera looking at the origin from an off-axis corner so all three
    // arrows stay visible
    commands.spawn((
        Camera3d::default(),
        Transform::from_xyz(2.4, 1.9, 2.6).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    // Directional light (sun)
    commands.spawn((
        DirectionalLight {
            color: Color::srgb(0.98, 0.95, 0.82),
            shadows_enabled: false,
            illuminance: 10000.0,
            ..default()
        },
        Transform::from_xyz(0.0, 10.0, 0.0).looking_at(Vec3::new(-0.15, -0.5, 0.25), Vec3::Y),
    ));

    // Ambient light to make sure everything is visible
    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: 120.0,
    });

    // The rigid body: a flat slab so its orientation reads at a glance
    commands.spawn((
        BodySlab,
        Mesh3d(meshes.add(Cuboid::new(0.9, 0.06, 0.6))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::srgba(0.85, 0.85, 0.9, 0.55),
            alpha_mode: AlphaMode::Blend,
            perceptual_roughness: 1.0,
            reflectance: 0.1,
            ..default()
        })),
        Transform::from_xyz(0.0, 0.0, 0.0),
    ));

    // Angle readout, top-left
    commands.spawn((
        OverlayText,
        Text::new(""),
        TextFont {
            font_size: 20.0,
            ..default()
        },
        TextColor(Color::WHITE),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(10.0),
            left: Val::Px(12.0),
            ..default()
        },
    ));

    // Legend and controls, bottom-left
    commands.spawn((
        Text::new(concat!(
            "world axes gray, body X red / Y green / Z blue\n",
            "Space: pause    S: save snapshot"
        )),
        TextFont {
            font_size: 14.0,
            ..default()
        },
        TextColor(Color::srgb(0.7, 0.7, 0.7)),
        Node {
            position_type: PositionType::Absolute,
            bottom: Val::Px(10.0),
            left: Val::Px(12.0),
            ..default()
        },
    ));
}

// System to draw the fixed world axes in gray, as the reference the body
// axes collapse against
pub fn draw_reference_axes(mut gizmos: Gizmos) {
    let gray = Color::srgb(0.5, 0.5, 0.5);
    gizmos.arrow(Vec3::ZERO, Vec3::X, gray);
    gizmos.arrow(Vec3::ZERO, Vec3::Y, gray);
    gizmos.arrow(Vec3::ZERO, Vec3::Z, gray);
}
