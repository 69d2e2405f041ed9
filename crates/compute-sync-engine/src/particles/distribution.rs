use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::Particle;

/// Radius of the spawn disc in normalized device coordinates.
pub const SPAWN_RADIUS: f32 = 0.25;

/// Initial particle speed (NDC units per millisecond of simulated time).
pub const INITIAL_SPEED: f32 = 0.00025;

/// Generates `count` particles spread uniformly over a disc at the origin.
///
/// `aspect` is `width / height` of the target; x is divided by it so the disc
/// stays round on screen. Each particle moves radially outwards and gets a
/// random opaque color.
pub fn generate_particles<R: Rng>(count: u32, aspect: f32, rng: &mut R) -> Vec<Particle> {
    let aspect = if aspect.is_finite() && aspect > 0.0 { aspect } else { 1.0 };

    (0..count)
        .map(|_| {
            // sqrt keeps the density uniform over the disc area.
            let r = SPAWN_RADIUS * rng.gen_range(0.0f32..=1.0).sqrt();
            let theta = rng.gen_range(0.0f32..=1.0) * std::f32::consts::TAU;
            let x = r * theta.cos() / aspect;
            let y = r * theta.sin();

            let len = (x * x + y * y).sqrt();
            let velocity = if len > 0.0 {
                [x / len * INITIAL_SPEED, y / len * INITIAL_SPEED]
            } else {
                [0.0, 0.0]
            };

            Particle {
                position: [x, y],
                velocity,
                color: [
                    rng.gen_range(0.0..=1.0),
                    rng.gen_range(0.0..=1.0),
                    rng.gen_range(0.0..=1.0),
                    1.0,
                ],
            }
        })
        .collect()
}

/// Deterministic variant of [`generate_particles`].
pub fn seeded_particles(count: u32, aspect: f32, seed: u64) -> Vec<Particle> {
    let mut rng = StdRng::seed_from_u64(seed);
    generate_particles(count, aspect, &mut rng)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-6;

    #[test]
    fn generates_exact_count() {
        assert_eq!(seeded_particles(200, 1.0, 1).len(), 200);
        assert!(seeded_particles(0, 1.0, 1).is_empty());
    }

    #[test]
    fn same_seed_same_particles() {
        assert_eq!(seeded_particles(64, 1.5, 42), seeded_particles(64, 1.5, 42));
        assert_ne!(seeded_particles(64, 1.5, 42), seeded_particles(64, 1.5, 43));
    }

    #[test]
    fn positions_inside_spawn_disc() {
        let aspect = 16.0 / 9.0;
        for p in seeded_particles(2_000, aspect, 7) {
            let [x, y] = p.position;
            // Undo the aspect squash before measuring the radius.
            let r = ((x * aspect).powi(2) + y * y).sqrt();
            assert!(r <= SPAWN_RADIUS + EPS, "radius {r} outside spawn disc");
        }
    }

    #[test]
    fn velocity_points_away_from_origin() {
        for p in seeded_particles(500, 1.3, 9) {
            let [vx, vy] = p.velocity;
            let speed = (vx * vx + vy * vy).sqrt();
            if speed == 0.0 {
                continue;
            }
            assert!((speed - INITIAL_SPEED).abs() < 1e-7);
            let dot = vx * p.position[0] + vy * p.position[1];
            assert!(dot >= 0.0);
        }
    }

    #[test]
    fn colors_opaque_and_in_range() {
        for p in seeded_particles(500, 1.0, 3) {
            assert_eq!(p.color[3], 1.0);
            assert!(p.color[..3].iter().all(|c| (0.0..=1.0).contains(c)));
        }
    }

    #[test]
    fn invalid_aspect_falls_back_to_square() {
        assert_eq!(seeded_particles(16, 0.0, 5), seeded_particles(16, 1.0, 5));
        assert_eq!(seeded_particles(16, f32::NAN, 5), seeded_particles(16, 1.0, 5));
    }
}
