//! Procedural scene generation
//!
//! The scene stands in for the environment the eight reference views were
//! captured from: a ground plane, a block of buildings, a ring of vegetation
//! and a few vehicles. Category counts, spatial distributions and color ranges
//! are fixed; only the coordinates are random. Generation draws from a caller
//! supplied random source so a seed reproduces the exact point set.

use std::f32::consts::TAU;
use std::ops::Range;
use std::sync::Arc;

use octaview_core::{Color3f, Point3f, Scene, SceneCategory, ScenePoint};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub const GROUND_POINTS: usize = 1000;
pub const BUILDING_POINTS: usize = 800;
pub const VEGETATION_POINTS: usize = 400;
pub const VEHICLE_POINTS: usize = 100;

/// Size of every generated scene
pub const TOTAL_POINTS: usize =
    GROUND_POINTS + BUILDING_POINTS + VEGETATION_POINTS + VEHICLE_POINTS;

/// Where a category places its points
#[derive(Debug, Clone)]
enum Placement {
    /// Uniform in an axis-aligned box
    Box {
        x: Range<f32>,
        y: Range<f32>,
        z: Range<f32>,
    },
    /// Uniform angle and radius around the vertical axis
    Ring {
        radius: Range<f32>,
        z: Range<f32>,
    },
}

/// How a category colors its points
#[derive(Debug, Clone, Copy)]
enum Tint {
    Solid(Color3f),
    /// Base color plus a uniform `[0, jitter)` offset per channel
    Jittered { base: Color3f, jitter: Color3f },
}

#[derive(Debug, Clone)]
struct CategorySpec {
    category: SceneCategory,
    count: usize,
    placement: Placement,
    tint: Tint,
}

fn category_specs() -> [CategorySpec; 4] {
    [
        CategorySpec {
            category: SceneCategory::Ground,
            count: GROUND_POINTS,
            placement: Placement::Box {
                x: -20.0..20.0,
                y: -20.0..20.0,
                z: 0.0..0.5,
            },
            tint: Tint::Solid([0.2, 0.8, 0.3]),
        },
        CategorySpec {
            category: SceneCategory::Building,
            count: BUILDING_POINTS,
            placement: Placement::Box {
                x: -15.0..15.0,
                y: -15.0..15.0,
                z: 2.0..17.0,
            },
            tint: Tint::Solid([0.6, 0.6, 0.7]),
        },
        CategorySpec {
            category: SceneCategory::Vegetation,
            count: VEGETATION_POINTS,
            placement: Placement::Ring {
                radius: 5.0..20.0,
                z: 1.0..9.0,
            },
            tint: Tint::Jittered {
                base: [0.1, 0.5, 0.1],
                jitter: [0.3, 0.3, 0.0],
            },
        },
        CategorySpec {
            category: SceneCategory::Vehicle,
            count: VEHICLE_POINTS,
            placement: Placement::Ring {
                radius: 3.0..15.0,
                z: 1.5..2.5,
            },
            tint: Tint::Solid([0.8, 0.2, 0.2]),
        },
    ]
}

impl Placement {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Point3f {
        match self {
            Placement::Box { x, y, z } => Point3f::new(
                rng.gen_range(x.clone()),
                rng.gen_range(y.clone()),
                rng.gen_range(z.clone()),
            ),
            Placement::Ring { radius, z } => {
                let angle = rng.gen_range(0.0..TAU);
                let radius = rng.gen_range(radius.clone());
                Point3f::new(
                    angle.cos() * radius,
                    angle.sin() * radius,
                    rng.gen_range(z.clone()),
                )
            }
        }
    }
}

impl Tint {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Color3f {
        match *self {
            Tint::Solid(color) => color,
            Tint::Jittered { base, jitter } => {
                let mut color = base;
                for (channel, amount) in color.iter_mut().zip(jitter) {
                    if amount > 0.0 {
                        *channel += rng.gen::<f32>() * amount;
                    }
                }
                color
            }
        }
    }
}

/// Generate a scene from the given random source.
///
/// Points are emitted category by category: ground, building, vegetation, vehicle.
pub fn generate_scene<R: Rng + ?Sized>(rng: &mut R) -> Scene {
    let mut points = Vec::with_capacity(TOTAL_POINTS);

    for spec in category_specs() {
        for _ in 0..spec.count {
            let position = spec.placement.sample(rng);
            let color = spec.tint.sample(rng);
            points.push(ScenePoint::new(position, color, spec.category));
        }
    }

    log::debug!("generated scene with {} points", points.len());
    Scene::from_points(points)
}

/// Generate a scene from a seeded `StdRng`
pub fn generate_scene_seeded(seed: u64) -> Scene {
    let mut rng = StdRng::seed_from_u64(seed);
    generate_scene(&mut rng)
}

/// Owns the one scene of a session.
///
/// The scene is generated at construction and handed out by reference
/// afterwards; it is never regenerated.
#[derive(Debug, Clone)]
pub struct SceneStore {
    scene: Arc<Scene>,
    seed: u64,
}

impl SceneStore {
    pub fn new(seed: u64) -> Self {
        Self {
            scene: Arc::new(generate_scene_seeded(seed)),
            seed,
        }
    }

    /// Seed the store from OS entropy, for sessions that do not need reproducibility
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    pub fn scene(&self) -> &Arc<Scene> {
        &self.scene
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}
