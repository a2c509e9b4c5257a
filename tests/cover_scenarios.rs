//! End-to-end cover detection scenarios
//!
//! Scene geometry used throughout: grid unit 50, medium tokens occupy one
//! 50x50 square. The observer sits at (0, 0) and the subject at (500, 0),
//! so the center-to-center ray is the horizontal line y = 25 from x = 25 to
//! x = 525.

use gridcover::cover::{Anchor, CoverDetector, CoverLevel};
use gridcover::geometry::Point;
use gridcover::scene::wall::DoorState;
use gridcover::{DetectionConfig, IntersectionMode, Scene, SizeCategory, Token, Wall};

fn medium(name: &str, x: f64, y: f64) -> Token {
    Token::creature(name, x, y, 1.0, SizeCategory::Medium)
}

fn scene(tokens: Vec<Token>, walls: Vec<Wall>) -> Scene {
    Scene {
        grid_unit: 50.0,
        tokens,
        walls,
    }
}

fn detect(scene: &Scene, config: &DetectionConfig, observer: &Token, subject: &Token) -> CoverLevel {
    CoverDetector::new(config).detect(scene, Anchor::Token(observer), subject, None)
}

// Scenario 1: blocker crosses the ray but is not 2+ ranks larger.
#[test]
fn any_mode_equal_size_blocker_grants_lesser() {
    let observer = medium("observer", 0.0, 0.0);
    let subject = medium("subject", 500.0, 0.0);
    // Rect (250, 0)-(300, 50) straddles the ray at y = 25.
    let blocker = medium("blocker", 250.0, 0.0);
    let scene = scene(vec![observer.clone(), subject.clone(), blocker], vec![]);
    let config = DetectionConfig::default();

    assert_eq!(detect(&scene, &config, &observer, &subject), CoverLevel::Lesser);
}

// Scenario 2: blocker out-ranks both principals by 2.
#[test]
fn any_mode_oversized_blocker_grants_standard() {
    let observer = medium("observer", 0.0, 0.0);
    let subject = medium("subject", 500.0, 0.0);
    let blocker = Token::creature("dragon", 200.0, -50.0, 3.0, SizeCategory::Huge);
    let scene = scene(vec![observer.clone(), subject.clone(), blocker], vec![]);
    let config = DetectionConfig::default();

    assert_eq!(detect(&scene, &config, &observer, &subject), CoverLevel::Standard);
}

// Scenario 3: a wall floors the result at standard; wall plus the oversized
// blocker escalates to greater.
#[test]
fn wall_standard_floor_and_greater_escalation() {
    let observer = medium("observer", 0.0, 0.0);
    let subject = medium("subject", 500.0, 0.0);
    let wall = Wall::new(250.0, -100.0, 250.0, 100.0);
    let config = DetectionConfig::default();

    let walls_only = scene(vec![observer.clone(), subject.clone()], vec![wall.clone()]);
    assert_eq!(
        detect(&walls_only, &config, &observer, &subject),
        CoverLevel::Standard
    );

    let dragon = Token::creature("dragon", 200.0, -50.0, 3.0, SizeCategory::Huge);
    let combined = scene(
        vec![observer.clone(), subject.clone(), dragon],
        vec![wall],
    );
    assert_eq!(
        detect(&combined, &config, &observer, &subject),
        CoverLevel::Greater
    );
}

// Scenario 4: coverage mode, 80% of the blocker's longer side.
#[test]
fn coverage_mode_eighty_percent_grants_greater() {
    let observer = medium("observer", 0.0, 0.0);
    let subject = medium("subject", 500.0, 0.0);
    // 40 x 50 rect: ray clips 40 units, longer side 50 -> 80%.
    let mut blocker = medium("pillar", 250.0, 0.0);
    blocker.width = 0.8;
    let scene = scene(vec![observer.clone(), subject.clone(), blocker], vec![]);
    let config = DetectionConfig {
        mode: IntersectionMode::Coverage,
        ..DetectionConfig::default()
    };

    assert_eq!(detect(&scene, &config, &observer, &subject), CoverLevel::Greater);
}

// Scenario 5: tactical mode, enclosure vs. an open repositioning corner.
#[test]
fn tactical_mode_enclosed_subject_grants_greater() {
    let observer = medium("observer", 0.0, 0.0);
    let subject = medium("subject", 500.0, 0.0);
    let shroud = Token::creature("shroud", 450.0, -50.0, 3.0, SizeCategory::Huge);
    let scene = scene(vec![observer.clone(), subject.clone(), shroud], vec![]);
    let config = DetectionConfig {
        mode: IntersectionMode::Tactical,
        ..DetectionConfig::default()
    };

    assert_eq!(detect(&scene, &config, &observer, &subject), CoverLevel::Greater);
}

#[test]
fn tactical_mode_best_corner_sees_past_short_wall() {
    let observer = medium("observer", 0.0, 0.0);
    let subject = medium("subject", 500.0, 0.0);
    // Wall clips lines from the observer's top corners only; the bottom
    // corners see all four subject corners cleanly.
    let wall = Wall::new(250.0, -1000.0, 250.0, 10.0);
    let scene = scene(vec![observer.clone(), subject.clone()], vec![wall]);
    let config = DetectionConfig {
        mode: IntersectionMode::Tactical,
        ..DetectionConfig::default()
    };

    assert_eq!(detect(&scene, &config, &observer, &subject), CoverLevel::None);
}

// Scenario 6: an open door on the direct line grants nothing.
#[test]
fn open_door_between_principals_grants_none() {
    let observer = medium("observer", 0.0, 0.0);
    let subject = medium("subject", 500.0, 0.0);
    let door = Wall::door(250.0, -100.0, 250.0, 100.0, DoorState::Open);
    let scene = scene(vec![observer.clone(), subject.clone()], vec![door]);
    let config = DetectionConfig::default();

    assert_eq!(detect(&scene, &config, &observer, &subject), CoverLevel::None);
}

#[test]
fn self_cover_is_always_none() {
    let solo = medium("solo", 0.0, 0.0);
    let scene = scene(
        vec![solo.clone()],
        vec![Wall::new(-10.0, -10.0, 60.0, 60.0)],
    );
    let config = DetectionConfig::default();

    assert_eq!(detect(&scene, &config, &solo, &solo), CoverLevel::None);
}

// Walls-only scenes reduce the detector to the wall evaluator exactly, for
// every mode and with every filter toggle disabled.
#[test]
fn walls_only_scene_reduces_to_wall_evaluator() {
    let observer = medium("observer", 0.0, 0.0);
    let subject = medium("subject", 500.0, 0.0);
    let wall = Wall::new(250.0, -100.0, 250.0, 100.0);
    let scene = scene(vec![observer.clone(), subject.clone()], vec![wall]);

    for mode in [
        IntersectionMode::Any,
        IntersectionMode::Center,
        IntersectionMode::Coverage,
        IntersectionMode::Tactical,
    ] {
        let config = DetectionConfig {
            mode,
            ..DetectionConfig::default()
        };
        let level = detect(&scene, &config, &observer, &subject);
        assert!(
            level >= CoverLevel::Standard,
            "mode {:?} lost the wall floor",
            mode
        );
    }
}

// Wall dominance floor: the wall result survives any blocker configuration.
#[test]
fn wall_floor_survives_filtered_blockers() {
    let observer = medium("observer", 0.0, 0.0);
    let subject = medium("subject", 500.0, 0.0);
    let mut corpse = medium("corpse", 250.0, 0.0);
    corpse.hit_points = Some(0);
    let wall = Wall::new(250.0, -100.0, 250.0, 100.0);
    let scene = scene(vec![observer.clone(), subject.clone(), corpse], vec![wall]);

    let mut config = DetectionConfig::default();
    config.filters.ignore_dead = true;

    assert_eq!(detect(&scene, &config, &observer, &subject), CoverLevel::Standard);
}

#[test]
fn center_mode_requires_exact_center_ray_hit() {
    let observer = medium("observer", 0.0, 0.0);
    let subject = medium("subject", 500.0, 0.0);
    // Rect (250, 30)-(300, 80) misses the ray at y = 25 entirely.
    let blocker = medium("blocker", 250.0, 30.0);
    let scene = scene(vec![observer.clone(), subject.clone(), blocker], vec![]);
    let config = DetectionConfig {
        mode: IntersectionMode::Center,
        ..DetectionConfig::default()
    };

    assert_eq!(detect(&scene, &config, &observer, &subject), CoverLevel::None);
}

#[test]
fn filtered_out_blockers_leave_no_cover() {
    let observer = medium("observer", 0.0, 0.0);
    let subject = medium("subject", 500.0, 0.0);
    let mut sleeper = medium("sleeper", 250.0, 0.0);
    sleeper.condition_slugs.push("prone".to_string());
    let scene = scene(vec![observer.clone(), subject.clone(), sleeper], vec![]);
    // Default config: prone blockers are not allowed.
    let config = DetectionConfig::default();

    assert_eq!(detect(&scene, &config, &observer, &subject), CoverLevel::None);
}

#[test]
fn area_effect_origin_uses_point_anchor() {
    let subject = medium("subject", 500.0, 0.0);
    let blocker = medium("pillar", 250.0, 0.0);
    let scene = scene(vec![subject.clone(), blocker], vec![]);
    let config = DetectionConfig::default();
    let detector = CoverDetector::new(&config);

    let level = detector.detect(
        &scene,
        Anchor::Point(Point::new(25.0, 25.0)),
        &subject,
        None,
    );
    assert_eq!(level, CoverLevel::Lesser);
}

#[test]
fn scene_loaded_from_json_detects_cover() {
    let json = r#"{
        "grid_unit": 50.0,
        "tokens": [
            {"name": "archer", "x": 0.0, "y": 0.0},
            {"name": "target", "x": 500.0, "y": 0.0},
            {"name": "pillar", "x": 250.0, "y": 0.0}
        ],
        "walls": []
    }"#;
    let scene = Scene::from_json_str(json).unwrap();
    let config = DetectionConfig::default();
    let detector = CoverDetector::new(&config);

    let archer = scene.token_by_name("archer").unwrap();
    let target = scene.token_by_name("target").unwrap();
    let level = detector.detect(&scene, Anchor::Token(archer), target, None);
    assert_eq!(level, CoverLevel::Lesser);
}
