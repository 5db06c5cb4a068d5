//! Scenario system for predefined gravitational setups.
//!
//! A scenario lists its bodies in polar form plus the grid, orbit and field
//! parameters. Loading one validates everything up front and replaces the
//! running simulation:
//! - Lone planet (a single orbiter with a hand-picked speed)
//! - Star system (one star, three circular orbiters)
//! - Binary star (two equal stars in mutual orbit)

pub mod presets;

use bevy::math::DVec3;
use bevy::prelude::*;

use crate::error::{ConfigError, is_positive};
use crate::field::{FieldConfig, GridSpec, HeightField};
use crate::physics::{FrameIntegrator, PhysicsConfig};
use crate::registry::BodyRegistry;
use crate::types::{Body, BodyKind, SimulationClock};

pub use presets::SCENARIOS;

/// Initial orbital speed of a body.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum OrbitalSpeed {
    /// Use this tangential speed as given
    Fixed(f64),
    /// `sqrt(G·M/r)` with `M` the total mass of the other primary bodies
    Circular,
}

/// One body of a scenario.
#[derive(Clone, Copy, Debug)]
pub struct BodySpec {
    pub name: &'static str,
    pub kind: BodyKind,
    pub mass: f64,
    /// Distance from the origin in the XZ plane
    pub distance: f64,
    /// Polar angle in radians, measured from +x towards +z
    pub orbit_angle: f64,
    pub speed: OrbitalSpeed,
    /// Height above the grid plane
    pub elevation: f64,
    /// Render radius
    pub radius: f32,
    /// Spin in radians per simulated second (render only)
    pub rotation_speed: f32,
    /// sRGB color
    pub color: [f32; 3],
}

impl Default for BodySpec {
    fn default() -> Self {
        Self::BASE
    }
}

impl BodySpec {
    /// Template for presets; override fields with struct update syntax.
    pub const BASE: BodySpec = BodySpec {
        name: "body",
        kind: BodyKind::Secondary,
        mass: 1.0,
        distance: 0.0,
        orbit_angle: 0.0,
        speed: OrbitalSpeed::Fixed(0.0),
        elevation: 0.0,
        radius: 0.5,
        rotation_speed: 0.0,
        color: [0.8, 0.8, 0.8],
    };

    /// Build the body, resolving its speed against `central_mass`.
    ///
    /// Position is `(d·cos θ, elevation, d·sin θ)` and the velocity is
    /// tangential, counter-clockwise seen from +y.
    pub fn instantiate(&self, g: f64, central_mass: f64) -> Result<Body, ConfigError> {
        let invalid = |speed| ConfigError::InvalidPlacement {
            name: self.name,
            distance: self.distance,
            speed,
        };

        if !self.distance.is_finite() || self.distance < 0.0 || !self.elevation.is_finite() {
            return Err(invalid(f64::NAN));
        }

        let speed = match self.speed {
            OrbitalSpeed::Fixed(v) => v,
            OrbitalSpeed::Circular => {
                if central_mass <= 0.0 {
                    return Err(ConfigError::NoCentralMass(self.name));
                }
                if !is_positive(self.distance) {
                    return Err(invalid(f64::NAN));
                }
                (g * central_mass / self.distance).sqrt()
            }
        };
        if !speed.is_finite() {
            return Err(invalid(speed));
        }

        let (sin, cos) = self.orbit_angle.sin_cos();
        let pos = DVec3::new(self.distance * cos, self.elevation, self.distance * sin);
        let vel = DVec3::new(-sin, 0.0, cos) * speed;

        Body::new(self.mass, pos, vel, self.kind)
    }
}

/// A predefined scenario configuration.
#[derive(Clone, Copy, Debug)]
pub struct Scenario {
    /// Unique identifier for the scenario.
    pub id: &'static str,
    /// Display name.
    pub name: &'static str,
    /// Brief description of the scenario.
    pub description: &'static str,
    pub bodies: &'static [BodySpec],
    pub grid: GridSpec,
    pub physics: PhysicsConfig,
    pub field: FieldConfig,
    /// Initial time scale.
    pub time_scale: f64,
    /// Whether to start paused.
    pub start_paused: bool,
}

/// Everything a loaded scenario contributes to the world.
#[derive(Clone, Debug)]
pub struct SimulationSetup {
    pub registry: BodyRegistry,
    pub field: HeightField,
    pub physics: PhysicsConfig,
    pub field_config: FieldConfig,
    pub clock: SimulationClock,
}

impl Scenario {
    /// Total mass of the primary bodies, used for circular speeds.
    pub fn central_mass(&self) -> f64 {
        self.bodies
            .iter()
            .filter(|b| b.kind == BodyKind::Primary)
            .map(|b| b.mass)
            .sum()
    }

    /// Mass `spec` orbits: the primaries' total, less its own mass when it
    /// is itself a primary.
    pub fn central_mass_for(&self, spec: &BodySpec) -> f64 {
        let total = self.central_mass();
        if spec.kind == BodyKind::Primary {
            total - spec.mass
        } else {
            total
        }
    }

    /// Validate the scenario and build its initial state.
    pub fn instantiate(&self) -> Result<SimulationSetup, ConfigError> {
        self.physics.validate()?;
        self.field.validate()?;

        let g = self.physics.gravitational_constant;
        let bodies = self
            .bodies
            .iter()
            .map(|spec| spec.instantiate(g, self.central_mass_for(spec)))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(SimulationSetup {
            registry: BodyRegistry::new(bodies),
            field: HeightField::new(self.grid)?,
            physics: self.physics,
            field_config: self.field,
            clock: SimulationClock::new(self.time_scale, self.start_paused),
        })
    }
}

/// Look up a preset by id.
pub fn get_scenario(id: &str) -> Result<&'static Scenario, ConfigError> {
    SCENARIOS
        .iter()
        .find(|s| s.id == id)
        .ok_or_else(|| ConfigError::UnknownScenario(id.to_string()))
}

/// Resource naming the scenario currently loaded.
#[derive(Resource, Clone, Copy, Debug)]
pub struct ActiveScenario(pub &'static Scenario);

impl Default for ActiveScenario {
    fn default() -> Self {
        Self(&presets::STAR_SYSTEM)
    }
}

/// Message requesting a (re)load of a scenario.
#[derive(Message, Clone, Debug)]
pub struct LoadScenario {
    pub scenario_id: String,
}

/// Scenario id requested at launch (the first command-line argument).
///
/// Resolved into [`ActiveScenario`] at startup; an unknown id is logged and
/// the current scenario kept.
#[derive(Resource, Clone, Debug, Default)]
pub struct RequestedScenario(pub Option<String>);

/// Plugin providing scenario management.
pub struct ScenarioPlugin;

impl Plugin for ScenarioPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ActiveScenario>()
            .init_resource::<RequestedScenario>()
            .add_message::<LoadScenario>()
            .add_systems(
                Startup,
                (select_requested_scenario, load_active_scenario).chain(),
            )
            .add_systems(
                Update,
                handle_load_scenario.before(crate::types::SimulationSet::Clock),
            );
    }
}

fn install(commands: &mut Commands, setup: SimulationSetup) {
    commands.insert_resource(setup.registry);
    commands.insert_resource(setup.field);
    commands.insert_resource(setup.physics);
    commands.insert_resource(setup.field_config);
    commands.insert_resource(setup.clock);
    commands.insert_resource(FrameIntegrator::default());
}

/// Swap in the scenario named on the command line, if any.
fn select_requested_scenario(
    requested: Res<RequestedScenario>,
    mut active: ResMut<ActiveScenario>,
) {
    let Some(id) = requested.0.as_deref() else {
        return;
    };

    match get_scenario(id) {
        Ok(scenario) => active.0 = scenario,
        Err(err) => warn!("{err}, using '{}'", active.0.id),
    }
}

/// Instantiate the active scenario at startup.
fn load_active_scenario(mut commands: Commands, active: Res<ActiveScenario>) -> Result {
    let scenario = active.0;
    let setup = scenario.instantiate()?;

    info!(
        "Loaded scenario: {} ({} bodies, {}x{} grid)",
        scenario.name,
        setup.registry.len(),
        scenario.grid.count,
        scenario.grid.count
    );
    install(&mut commands, setup);
    Ok(())
}

/// Handle scenario load requests.
fn handle_load_scenario(
    mut commands: Commands,
    mut events: MessageReader<LoadScenario>,
    mut active: ResMut<ActiveScenario>,
) {
    for event in events.read() {
        let scenario = match get_scenario(&event.scenario_id) {
            Ok(scenario) => scenario,
            Err(err) => {
                warn!("{err}");
                continue;
            }
        };

        match scenario.instantiate() {
            Ok(setup) => {
                info!("Loading scenario: {} ({})", scenario.name, scenario.id);
                install(&mut commands, setup);
                active.0 = scenario;
            }
            Err(err) => error!("Scenario '{}' rejected: {err}", scenario.id),
        }
    }
}
