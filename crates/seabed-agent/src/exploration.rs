//! Randomized exploration, used when there is nothing worth chasing.

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use seabed_core::commands::MovementIntent;
use seabed_core::state::Fish;
use seabed_core::types::Position;

/// Whether any visible fish lies within `radius` of `position`.
pub fn fish_nearby(position: &Position, visible: &[Fish], radius: f64) -> bool {
    visible
        .iter()
        .any(|fish| position.distance_to(&fish.position) <= radius)
}

/// Move to a uniformly random point in `[0, map_size)`, light on only if a
/// visible fish is within `detection_radius`.
pub fn explore(
    position: &Position,
    visible: &[Fish],
    rng: &mut ChaCha8Rng,
    map_size: i32,
    detection_radius: f64,
) -> MovementIntent {
    let target = Position::new(rng.gen_range(0..map_size), rng.gen_range(0..map_size));
    MovementIntent::Move {
        target,
        light: fish_nearby(position, visible, detection_radius),
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;

    use seabed_core::catalogue::FishDetail;
    use seabed_core::types::Velocity;

    use super::*;

    fn fish_at(x: i32, y: i32) -> Fish {
        Fish {
            id: 1,
            position: Position::new(x, y),
            velocity: Velocity::default(),
            detail: FishDetail::new(0, 0),
        }
    }

    #[test]
    fn test_no_fish_means_light_off() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..50 {
            let intent = explore(&Position::new(5_000, 3_000), &[], &mut rng, 10_000, 800.0);
            let target = intent.target().unwrap();
            assert!(target.in_bounds(10_000));
            assert!(!intent.light());
        }
    }

    #[test]
    fn test_light_tracks_detection_radius() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let here = Position::new(1_000, 1_000);

        let near = [fish_at(1_000, 1_800)];
        assert!(explore(&here, &near, &mut rng, 10_000, 800.0).light());

        let far = [fish_at(1_000, 1_801)];
        assert!(!explore(&here, &far, &mut rng, 10_000, 800.0).light());
    }

    #[test]
    fn test_same_seed_same_moves() {
        let mut a = ChaCha8Rng::seed_from_u64(99);
        let mut b = ChaCha8Rng::seed_from_u64(99);
        let here = Position::new(0, 0);
        for _ in 0..10 {
            assert_eq!(
                explore(&here, &[], &mut a, 10_000, 800.0),
                explore(&here, &[], &mut b, 10_000, 800.0)
            );
        }
    }
}
