//! Free-flying camera for inspecting the grid and orbits.
//!
//! WASD moves in the look plane, Up/Down arrows move vertically,
//! Left/Right arrows turn, and dragging with the right mouse button looks
//! around. Look state lives on the camera component, so nothing is global.

use bevy::{input::mouse::AccumulatedMouseMotion, prelude::*};

/// Initial camera position, looking across the grid at the system.
pub const START_POSITION: Vec3 = Vec3::new(-17.0, 4.0, -8.0);

/// Initial yaw in degrees (0 looks along +x).
pub const START_YAW: f32 = 20.0;

/// Initial pitch in degrees.
pub const START_PITCH: f32 = -20.0;

/// Vertical field of view in degrees.
pub const FOV_DEGREES: f32 = 45.0;

/// Pitch limit in degrees, short of straight up/down.
pub const MAX_PITCH: f32 = 89.0;

/// Marker component for the main camera.
#[derive(Component)]
pub struct MainCamera;

/// Per-camera fly state.
#[derive(Component, Debug, Clone)]
pub struct FlyCamera {
    /// Degrees, 0 looks along +x, increasing towards +z
    pub yaw: f32,
    /// Degrees, positive looks up
    pub pitch: f32,
    /// Units per second
    pub move_speed: f32,
    /// Degrees per second for arrow-key turning
    pub turn_speed: f32,
    /// Degrees per pixel of mouse motion
    pub sensitivity: f32,
}

impl Default for FlyCamera {
    fn default() -> Self {
        Self {
            yaw: START_YAW,
            pitch: START_PITCH,
            move_speed: 5.0,
            turn_speed: 60.0,
            sensitivity: 0.1,
        }
    }
}

impl FlyCamera {
    /// Unit look direction for the current yaw and pitch.
    pub fn forward(&self) -> Vec3 {
        let (yaw, pitch) = (self.yaw.to_radians(), self.pitch.to_radians());
        Vec3::new(yaw.cos() * pitch.cos(), pitch.sin(), yaw.sin() * pitch.cos()).normalize()
    }

    /// Unit vector to the right of the look direction, in the ground plane.
    pub fn right(&self) -> Vec3 {
        self.forward().cross(Vec3::Y).normalize()
    }

    /// Apply a look offset in pixels (y up is positive), clamping pitch.
    pub fn look(&mut self, dx: f32, dy: f32) {
        self.yaw += dx * self.sensitivity;
        self.pitch = (self.pitch + dy * self.sensitivity).clamp(-MAX_PITCH, MAX_PITCH);
    }
}

/// Plugin providing camera functionality.
pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_camera)
            .add_systems(Update, (camera_look, camera_move).chain());
    }
}

/// Spawn the main camera with a perspective projection.
fn setup_camera(mut commands: Commands) {
    let fly = FlyCamera::default();
    commands.spawn((
        Camera3d::default(),
        Projection::from(PerspectiveProjection {
            fov: FOV_DEGREES.to_radians(),
            near: 0.1,
            far: 100.0,
            ..default()
        }),
        Transform::from_translation(START_POSITION).looking_to(fly.forward(), Vec3::Y),
        fly,
        MainCamera,
    ));
}

/// Mouse look while the right button is held.
fn camera_look(
    mouse_buttons: Res<ButtonInput<MouseButton>>,
    mouse_motion: Res<AccumulatedMouseMotion>,
    mut camera_query: Query<(&mut Transform, &mut FlyCamera), With<MainCamera>>,
) {
    if !mouse_buttons.pressed(MouseButton::Right) || mouse_motion.delta == Vec2::ZERO {
        return;
    }

    let Ok((mut transform, mut fly)) = camera_query.single_mut() else {
        return;
    };

    // Screen y grows downwards
    fly.look(mouse_motion.delta.x, -mouse_motion.delta.y);
    transform.look_to(fly.forward(), Vec3::Y);
}

/// Keyboard movement and turning.
fn camera_move(
    keys: Res<ButtonInput<KeyCode>>,
    time: Res<Time>,
    mut camera_query: Query<(&mut Transform, &mut FlyCamera), With<MainCamera>>,
) {
    let Ok((mut transform, mut fly)) = camera_query.single_mut() else {
        return;
    };

    let dt = time.delta_secs();
    let step = fly.move_speed * dt;
    let forward = fly.forward();
    let right = fly.right();

    let mut delta = Vec3::ZERO;
    if keys.pressed(KeyCode::KeyW) {
        delta += forward;
    }
    if keys.pressed(KeyCode::KeyS) {
        delta -= forward;
    }
    if keys.pressed(KeyCode::KeyD) {
        delta += right;
    }
    if keys.pressed(KeyCode::KeyA) {
        delta -= right;
    }
    if keys.pressed(KeyCode::ArrowUp) {
        delta += Vec3::Y;
    }
    if keys.pressed(KeyCode::ArrowDown) {
        delta -= Vec3::Y;
    }
    transform.translation += delta * step;

    let turn = fly.turn_speed * dt;
    if keys.pressed(KeyCode::ArrowLeft) {
        fly.yaw -= turn;
    }
    if keys.pressed(KeyCode::ArrowRight) {
        fly.yaw += turn;
    }
    transform.look_to(fly.forward(), Vec3::Y);
}
