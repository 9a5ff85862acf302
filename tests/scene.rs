use geometric_shapes::{MotionStyle, Point2, SceneConfig, SceneError, ShapeScene};
use rand::rngs::StdRng;
use rand::SeedableRng;

const DT: f32 = 1.0 / 60.0;

fn running_scene(style: MotionStyle, seed: u64) -> ShapeScene<StdRng> {
    let config = SceneConfig {
        motion_style: style,
        ..SceneConfig::default()
    };
    let origin = config.origin_for_view(375.0, 667.0);
    let mut scene = ShapeScene::new(config, StdRng::seed_from_u64(seed), origin).unwrap();
    scene.run().unwrap();
    scene
}

fn live_colours_are_distinct(scene: &ShapeScene<StdRng>) -> bool {
    let mut colours: Vec<usize> = scene.instances().iter().map(|i| i.color_index).collect();
    colours.sort_unstable();
    let before = colours.len();
    colours.dedup();
    before == colours.len()
}

#[test_log::test]
fn population_is_constant_while_recycling() {
    for style in [
        MotionStyle::RiseAndReturn,
        MotionStyle::EasedBounce,
        MotionStyle::QuadraticRise,
    ] {
        let mut scene = running_scene(style, 21);
        let mut recycled = 0;
        for _ in 0..(60 * 10) {
            for id in scene.tick(DT) {
                scene.on_motion_complete(id).unwrap();
                recycled += 1;
            }
            assert_eq!(scene.len(), 4);
            assert!(live_colours_are_distinct(&scene));
        }
        assert!(recycled >= 4, "{style:?} recycled only {recycled}");
    }
}

#[test_log::test]
fn shapes_rise_above_origin_and_come_back() {
    let mut scene = running_scene(MotionStyle::RiseAndReturn, 8);
    let origin = scene.origin();
    let ids: Vec<_> = scene.instances().iter().map(|i| i.id).collect();

    scene.tick(0.5);
    for placement in scene.placements() {
        let rise = origin.y - placement.position.y;
        assert!((150.0..=320.0).contains(&rise), "rise {rise}");
        assert!((placement.position.x - origin.x).abs() <= 40.0);
    }

    let finished = scene.tick(0.5);
    assert_eq!(finished.len(), ids.len());
    for id in &ids {
        let instance = scene.get(*id).unwrap();
        let p = instance.current_position();
        assert!((p.x - origin.x).abs() < 1e-3 && (p.y - origin.y).abs() < 1e-3);
    }
}

#[test]
fn recycled_ids_are_fresh() {
    let mut scene = running_scene(MotionStyle::RiseAndReturn, 13);
    let finished = scene.tick(1.0);
    let new_id = scene.on_motion_complete(finished[0]).unwrap();
    assert!(scene.get(finished[0]).is_none());
    assert!(scene.get(new_id).is_some());
    assert_eq!(
        scene.on_motion_complete(finished[0]),
        Err(SceneError::UnknownInstance(finished[0]))
    );
}

#[test]
fn cancelling_shrinks_the_pool_without_respawn() {
    let mut scene = running_scene(MotionStyle::RiseAndReturn, 17);
    let id = scene.instances()[0].id;
    scene.cancel(id).unwrap();
    assert_eq!(scene.len(), 3);
    scene.run().unwrap();
    assert_eq!(scene.len(), 4);
    assert!(live_colours_are_distinct(&scene));
}

#[test]
fn new_origin_applies_to_later_spawns_only() {
    let mut scene = running_scene(MotionStyle::RiseAndReturn, 30);
    let old_origin = scene.origin();
    let new_origin = Point2::new(50.0, 900.0);
    scene.set_origin(new_origin);

    let first = scene.instances()[0].id;
    assert_eq!(scene.get(first).unwrap().current_position(), old_origin);

    let finished = scene.tick(1.0);
    let replacement = scene.on_motion_complete(finished[0]).unwrap();
    assert_eq!(scene.get(replacement).unwrap().current_position(), new_origin);
}

#[test]
fn invalid_config_is_rejected() {
    let config = SceneConfig {
        population: 12,
        ..SceneConfig::default()
    };
    let result = ShapeScene::new(config, StdRng::seed_from_u64(1), Point2::ZERO);
    assert!(matches!(result, Err(SceneError::InvalidConfig(_))));
}

#[test]
fn identical_seeds_give_identical_scenes() {
    let a = running_scene(MotionStyle::EasedBounce, 64);
    let b = running_scene(MotionStyle::EasedBounce, 64);
    let shapes_a: Vec<_> = a.instances().iter().map(|i| (i.shape.clone(), i.color_index)).collect();
    let shapes_b: Vec<_> = b.instances().iter().map(|i| (i.shape.clone(), i.color_index)).collect();
    assert_eq!(shapes_a, shapes_b);
}
