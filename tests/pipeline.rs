#![allow(clippy::unwrap_used)]

use approx::assert_relative_eq;
use solidify::geometry::Shape;
use solidify::math::{Point3, Transform2};
use solidify::operations::merge::{BoundaryMerger, ContourUnion};
use solidify::operations::BuildSurface;
use solidify::refresh::{RefreshHost, RefreshScheduler};
use solidify::scene::{ContextId, EntityData, SceneGraph, ShapeSource};
use solidify::surface::{SurfaceBuffer, SurfaceKind};
use solidify::tessellation::SolidMesh;
use solidify::PipelineConfig;

const CTX: ContextId = ContextId(7);

/// Four overlapping unit boxes forming an L, plus a player that must be ignored.
fn l_scene() -> SceneGraph {
    let mut scene = SceneGraph::new();
    let level = scene.add_entity(EntityData::new("Level", Transform2::identity(), CTX));
    for (i, (x, y)) in [(0.5, 0.5), (1.3, 0.55), (2.1, 0.5), (0.55, 1.3)]
        .into_iter()
        .enumerate()
    {
        scene.add_entity(
            EntityData::new(format!("Block{i}"), Transform2::from_position(x, y), CTX)
                .with_parent(level)
                .with_collider(Shape::rect(0.5, 0.5), false),
        );
    }
    let player = scene.add_entity(
        EntityData::new("Player", Transform2::from_position(1.0, 3.0), CTX)
            .with_collider(Shape::circle(0.5), false),
    );
    scene.add_entity(
        EntityData::new("Feet", Transform2::from_position(1.0, 2.5), CTX)
            .with_parent(player)
            .with_collider(Shape::rect(0.4, 0.1), false),
    );
    scene.add_entity(
        EntityData::new("Coin", Transform2::from_position(5.0, 5.0), CTX)
            .with_collider(Shape::circle(0.3), true),
    );
    scene.add_entity(
        EntityData::new("Elsewhere", Transform2::identity(), ContextId(8))
            .with_collider(Shape::rect(1.0, 1.0), false),
    );
    scene
}

/// Unit boxes centred on `centres`, all in one context.
fn box_scene(centres: &[(f64, f64)]) -> SceneGraph {
    let mut scene = SceneGraph::new();
    let level = scene.add_entity(EntityData::new("Level", Transform2::identity(), CTX));
    for (i, &(x, y)) in centres.iter().enumerate() {
        scene.add_entity(
            EntityData::new(format!("Block{i}"), Transform2::from_position(x, y), CTX)
                .with_parent(level)
                .with_collider(Shape::rect(0.5, 0.5), false),
        );
    }
    scene
}

/// Area covered by the triangles lying entirely on the front cap.
fn front_cap_area(mesh: &SolidMesh, front: f64) -> f64 {
    mesh.indices
        .iter()
        .filter(|tri| {
            tri.iter()
                .all(|&i| (mesh.vertices[i as usize].z - front).abs() < 1e-9)
        })
        .map(|&[a, b, c]| {
            let (a, b, c) = (
                mesh.vertices[a as usize],
                mesh.vertices[b as usize],
                mesh.vertices[c as usize],
            );
            ((b.x - a.x) * (c.y - a.y) - (b.y - a.y) * (c.x - a.x)).abs() * 0.5
        })
        .sum()
}

#[test]
fn l_of_boxes_becomes_one_prism() {
    let scene = l_scene();
    let config = PipelineConfig::default();
    let merger = ContourUnion::default();
    let build = BuildSurface::new(&scene, &merger, CTX, &config);

    let rings = build.sample_rings();
    assert_eq!(rings.len(), 4);
    let paths = merger.merge(&rings);
    assert_eq!(paths.len(), 1);
    assert_eq!(paths[0].outer.len(), 14);
    assert_relative_eq!(paths[0].area(), 3.4075, epsilon = 1e-9);

    let mesh = build.execute().unwrap();
    let n = mesh.vertex_count() / 2;
    assert_eq!(n, 14);
    assert_eq!(mesh.triangle_count(), 2 * (n - 2) + 2 * n);
    assert!(mesh.all_vertices_referenced());
    assert_relative_eq!(front_cap_area(&mesh, -10.0), 3.4075, epsilon = 1e-9);
    assert_relative_eq!(mesh.signed_volume(), 3.4075 * 20.0, epsilon = 1e-6);

    let bb = mesh.bounds.unwrap();
    assert_relative_eq!(bb.min, Point3::new(0.0, 0.0, -10.0), epsilon = 1e-9);
    assert_relative_eq!(bb.max, Point3::new(2.6, 1.8, 10.0), epsilon = 1e-9);
}

#[test]
fn grid_aligned_l_becomes_one_prism() {
    let scene = box_scene(&[(0.5, 0.5), (1.25, 0.5), (2.0, 0.5), (0.5, 1.25)]);
    let config = PipelineConfig::default();
    let merger = ContourUnion::default();
    let build = BuildSurface::new(&scene, &merger, CTX, &config);

    let paths = merger.merge(&build.sample_rings());
    assert_eq!(paths.len(), 1);
    assert_eq!(paths[0].outer.len(), 6);
    assert_relative_eq!(paths[0].area(), 3.25, epsilon = 1e-9);

    let mesh = build.execute().unwrap();
    assert_eq!(mesh.vertex_count(), 12);
    assert_eq!(mesh.triangle_count(), 2 * 4 + 2 * 6);
    assert_relative_eq!(front_cap_area(&mesh, -10.0), 3.25, epsilon = 1e-9);
    assert_relative_eq!(mesh.signed_volume(), 3.25 * 20.0, epsilon = 1e-6);
}

#[test]
fn abutting_l_becomes_one_prism() {
    let scene = box_scene(&[(0.5, 0.5), (1.5, 0.5), (2.5, 0.5), (0.5, 1.5)]);
    let config = PipelineConfig::default();
    let merger = ContourUnion::default();
    let build = BuildSurface::new(&scene, &merger, CTX, &config);

    let paths = merger.merge(&build.sample_rings());
    assert_eq!(paths.len(), 1);
    assert_eq!(paths[0].outer.len(), 6);
    assert_relative_eq!(paths[0].area(), 4.0, epsilon = 1e-9);

    let mesh = build.execute().unwrap();
    assert_eq!(mesh.triangle_count(), 2 * 4 + 2 * 6);
    assert_relative_eq!(front_cap_area(&mesh, -10.0), 4.0, epsilon = 1e-9);
    assert_relative_eq!(mesh.signed_volume(), 4.0 * 20.0, epsilon = 1e-6);
}

#[test]
fn corner_touching_boxes_keep_full_cap_area() {
    let scene = box_scene(&[(0.5, 0.5), (1.5, 1.5)]);
    let config = PipelineConfig::default();
    let merger = ContourUnion::default();
    let build = BuildSurface::new(&scene, &merger, CTX, &config);

    let paths = merger.merge(&build.sample_rings());
    assert_eq!(paths.len(), 2);

    let mesh = build.execute().unwrap();
    assert_eq!(mesh.triangle_count(), 2 * (2 * 2 + 2 * 4));
    assert!(mesh.all_vertices_referenced());
    assert_relative_eq!(front_cap_area(&mesh, -10.0), 2.0, epsilon = 1e-9);
    assert_relative_eq!(mesh.signed_volume(), 2.0 * 20.0, epsilon = 1e-6);
}

#[test]
fn excluded_and_trigger_colliders_are_ignored() {
    let scene = l_scene();
    assert_eq!(scene.scene_shapes().len(), 8);
    let config = PipelineConfig::default();
    let rings = BuildSurface::new(&scene, &ContourUnion::default(), CTX, &config).sample_rings();
    assert_eq!(rings.len(), 4);
}

#[test]
fn scheduler_publishes_static_surface_and_floor() {
    let scene = l_scene();
    let mut sink = SurfaceBuffer::default();
    let mut scheduler = RefreshScheduler::new(
        PipelineConfig::default(),
        CTX,
        Box::new(ContourUnion::default()),
    )
    .unwrap();

    let mut host = RefreshHost {
        source: &scene,
        tracked: &Point3::new(1.0, 3.0, 0.0),
        sink: &mut sink,
    };
    scheduler.initialize(&mut host).unwrap();
    let reports: Vec<_> = [0.03, 0.04, 0.04]
        .iter()
        .map(|&dt| scheduler.tick(dt, &mut host))
        .collect();
    assert_eq!(reports.iter().filter(|r| r.floor_fired).count(), 1);
    assert!(reports.iter().all(|r| !r.floor_failed));

    assert_eq!(sink.loads, 2);
    assert_eq!(sink.surfaces.len(), 2);
    let (terrain, floor) = (&sink.surfaces[0], &sink.surfaces[1]);
    assert_eq!(terrain.kind, SurfaceKind::Hangable);
    assert!(!terrain.visible);
    assert!(floor.visible);
    let floor_bb = floor.mesh.bounds.unwrap();
    assert_relative_eq!(floor_bb.center(), Point3::new(1.0, -17.0, 0.0));
}
