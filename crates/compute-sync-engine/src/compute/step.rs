use crate::particles::Particle;

/// Host-side mirror of one `cs_main` invocation.
///
/// Integrates `position += velocity * delta_time`, then flips each velocity
/// component that still points out of `[-1, 1]`. Must stay in lockstep with
/// `shaders/particles.wgsl`.
pub fn step_particle(p: Particle, delta_time: f32) -> Particle {
    let mut moved = p;
    for axis in 0..2 {
        let pos = p.position[axis] + p.velocity[axis] * delta_time;
        let vel = p.velocity[axis];
        moved.position[axis] = pos;
        if (pos >= 1.0 && vel > 0.0) || (pos <= -1.0 && vel < 0.0) {
            moved.velocity[axis] = -vel;
        }
    }
    moved
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::particles::INITIAL_SPEED;

    fn particle(position: [f32; 2], velocity: [f32; 2]) -> Particle {
        Particle {
            position,
            velocity,
            color: [1.0; 4],
        }
    }

    #[test]
    fn integrates_inside_clip_space() {
        let p = step_particle(particle([0.0, 0.0], [0.001, -0.002]), 10.0);
        assert!((p.position[0] - 0.01).abs() < 1e-6);
        assert!((p.position[1] + 0.02).abs() < 1e-6);
        assert_eq!(p.velocity, [0.001, -0.002]);
    }

    #[test]
    fn leaving_an_edge_flips_that_component_only() {
        let p = step_particle(particle([0.999, 0.0], [0.001, 0.001]), 2.0);
        assert!(p.position[0] > 1.0);
        assert_eq!(p.velocity, [-0.001, 0.001]);

        let p = step_particle(particle([0.0, -0.999], [0.0, -0.001]), 2.0);
        assert_eq!(p.velocity, [0.0, 0.001]);
    }

    #[test]
    fn particle_outside_moving_inward_keeps_direction() {
        let p = step_particle(particle([1.1, -1.1], [-0.001, 0.001]), 1.0);
        assert_eq!(p.velocity, [-0.001, 0.001]);
    }

    #[test]
    fn overshoot_after_stall_returns_to_clip_space() {
        // One clamped stall step overshoots far past the edge; regular frames
        // afterwards must bring the particle back rather than trap it outside.
        let frame = 33.2;
        let mut p = particle([0.99, 0.0], [INITIAL_SPEED, 0.0]);

        p = step_particle(p, 500.0);
        assert!(p.position[0] > 1.1);
        assert!(p.velocity[0] < 0.0);

        let max_overshoot = 1.0 + INITIAL_SPEED * frame + 1e-4;
        for i in 0..10_000 {
            p = step_particle(p, frame);
            if i > 100 {
                assert!(
                    p.position[0].abs() <= max_overshoot,
                    "frame {i}: x = {}",
                    p.position[0],
                );
            }
        }
        assert!(p.position[0].abs() <= max_overshoot);
    }
}
