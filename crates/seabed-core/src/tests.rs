#[cfg(test)]
mod tests {
    use crate::catalogue::{CatalogueError, FishCatalogue, FishDetail};
    use crate::commands::MovementIntent;
    use crate::enums::RadarDirection;
    use crate::events::DecisionEvent;
    use crate::state::{DroneView, VisibleFish, WorldSnapshot};
    use crate::types::{Position, Velocity};

    #[test]
    fn test_position_distance() {
        let a = Position::new(0, 0);
        let b = Position::new(300, 400);
        assert!((a.distance_to(&b) - 500.0).abs() < 1e-9);
        assert_eq!(a.manhattan_to(&b), 700);
    }

    #[test]
    fn test_position_bounds_and_clamp() {
        assert!(Position::new(0, 9_999).in_bounds(10_000));
        assert!(!Position::new(10_000, 5).in_bounds(10_000));
        assert!(!Position::new(-1, 5).in_bounds(10_000));

        let clamped = Position::new(-20, 12_000).clamped(10_000);
        assert_eq!(clamped, Position::new(0, 9_999));
    }

    #[test]
    fn test_radar_direction_parse() {
        for token in ["TL", "TR", "BL", "BR"] {
            let dir: RadarDirection = token.parse().unwrap();
            assert_eq!(dir.to_string(), token);
        }
        assert!("XX".parse::<RadarDirection>().is_err());
    }

    #[test]
    fn test_radar_direction_corner() {
        assert_eq!(RadarDirection::TopLeft.corner(10_000), Position::new(0, 0));
        assert_eq!(
            RadarDirection::BottomRight.corner(10_000),
            Position::new(9_999, 9_999)
        );
    }

    #[test]
    fn test_radar_direction_serde_uses_tokens() {
        let json = serde_json::to_string(&RadarDirection::BottomLeft).unwrap();
        assert_eq!(json, "\"BL\"");
    }

    #[test]
    fn test_catalogue_rejects_duplicates() {
        let result = FishCatalogue::from_entries([(4, 0, 0), (5, 1, 0), (4, 2, 2)]);
        assert_eq!(result, Err(CatalogueError::DuplicateFish(4)));
    }

    #[test]
    fn test_catalogue_lookup() {
        let catalogue = FishCatalogue::from_entries([(4, 0, 0), (5, 1, 2)]).unwrap();
        assert_eq!(catalogue.len(), 2);
        assert_eq!(catalogue.detail(5), Some(FishDetail::new(1, 2)));
        assert_eq!(catalogue.detail(6), None);
        let ids: Vec<u32> = catalogue.iter().map(|(id, _)| id).collect();
        assert_eq!(ids, vec![4, 5]);
    }

    #[test]
    fn test_fish_detail_serde_field_name() {
        let json = serde_json::to_string(&FishDetail::new(2, 1)).unwrap();
        assert_eq!(json, r#"{"color":2,"type":1}"#);
    }

    #[test]
    fn test_movement_intent_helpers() {
        let intent = MovementIntent::Move {
            target: Position::new(12_000, -5),
            light: true,
        };
        assert!(intent.light());
        let clamped = intent.clamped(10_000).without_light();
        assert_eq!(clamped.target(), Some(Position::new(9_999, 0)));
        assert!(!clamped.light());
        assert_eq!(MovementIntent::Wait { light: false }.target(), None);
    }

    #[test]
    fn test_snapshot_serde() {
        let snapshot = WorldSnapshot {
            my_score: 12,
            my_drones: vec![DroneView {
                id: 0,
                position: Position::new(2_500, 500),
                alive: true,
                battery: 30,
                unbanked_scans: vec![4],
            }],
            visible_fish: vec![VisibleFish {
                id: 4,
                position: Position::new(3_000, 3_100),
                velocity: Velocity::new(-200, 0),
            }],
            ..Default::default()
        };
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: WorldSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snapshot, back);
        assert!(back.my_drones[0].has_unbanked_scans());
    }

    #[test]
    fn test_decision_event_tagged() {
        let event = DecisionEvent::ExplorationFallback { drone_id: 3 };
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("\"type\":\"ExplorationFallback\""));
    }
}
