use nav_core::{
    Category, CategorySet, Graph, GraphBuilder, PathFinder, Vec3, VertexId, ZoneKind,
};

fn categories(list: &[Category]) -> CategorySet {
    list.iter().copied().collect()
}

/// 5x5 grid, unit spacing, 4-connected. A danger column at x = 2 splits the
/// grid except for a gap at the top row, and food sits at the far corner.
fn split_grid(gap: bool) -> Graph {
    let mut builder = GraphBuilder::new();
    let mut ids = [[VertexId(0); 5]; 5];
    for (y, row) in ids.iter_mut().enumerate() {
        for (x, slot) in row.iter_mut().enumerate() {
            *slot = builder.vertex(Vec3::planar(x as f32, y as f32));
        }
    }
    for y in 0..5 {
        for x in 0..5 {
            if x + 1 < 5 {
                builder.edge(ids[y][x], ids[y][x + 1]);
            }
            if y + 1 < 5 {
                builder.edge(ids[y][x], ids[y + 1][x]);
            }
        }
    }
    for y in 0..5 {
        if gap && y == 4 {
            continue;
        }
        builder.category(ids[y][2], Category::DANGER);
    }
    builder.category(ids[0][4], Category::FOOD);
    builder.build().expect("grid is well formed")
}

fn assert_route_is_walkable(graph: &Graph, route: &[VertexId]) {
    for pair in route.windows(2) {
        let a = graph.vertex(pair[0]).expect("route vertex exists");
        assert!(
            a.is_adjacent_to(pair[1]),
            "{} -> {} is not an edge",
            pair[0],
            pair[1]
        );
    }
}

#[test]
fn successful_route_round_trips() {
    let graph = split_grid(true);
    let start_position = Vec3::planar(0.2, 0.1);
    let route = PathFinder::new(&graph).find_interest_path(
        start_position,
        &categories(&[Category::FOOD]),
        &categories(&[Category::DANGER]),
        false,
    );

    assert!(!route.is_empty());
    let closest = graph.find_closest_vertex(start_position).unwrap().id;
    assert_eq!(route.first(), Some(&closest));
    let last = graph.vertex(*route.last().unwrap()).unwrap();
    assert_eq!(last.category, Category::FOOD);
    assert_route_is_walkable(&graph, &route);

    // The gap forces a detour through the top row.
    assert!(
        route
            .iter()
            .all(|id| graph.vertex(*id).unwrap().category != Category::DANGER)
    );
}

#[test]
fn retry_crosses_prohibited_only_when_allowed() {
    let graph = split_grid(false);
    let finder = PathFinder::new(&graph);
    let interests = categories(&[Category::FOOD]);
    let fears = categories(&[Category::DANGER]);

    let strict = finder.find_interest_path(Vec3::ZERO, &interests, &fears, false);
    assert!(strict.is_empty());

    let relaxed = finder.find_interest_path(Vec3::ZERO, &interests, &fears, true);
    assert!(!relaxed.is_empty());
    assert_route_is_walkable(&graph, &relaxed);
    assert!(
        relaxed
            .iter()
            .any(|id| graph.vertex(*id).unwrap().category == Category::DANGER)
    );
}

#[test]
fn retry_never_crosses_blocked() {
    let mut graph = split_grid(false);
    let danger: Vec<_> = graph
        .vertices()
        .filter(|v| v.category == Category::DANGER)
        .map(|v| v.id)
        .collect();
    for id in danger {
        graph
            .update_vertex(id, |v| v.zone = ZoneKind::Blocked)
            .unwrap();
    }

    let route = PathFinder::new(&graph).find_interest_path(
        Vec3::ZERO,
        &categories(&[Category::FOOD]),
        &categories(&[Category::DANGER]),
        true,
    );
    assert!(route.is_empty());
}

#[test]
fn closest_vertex_is_never_blocked() {
    let mut graph = split_grid(true);
    let ids: Vec<_> = graph.vertices().map(|v| v.id).collect();
    for id in ids.iter().step_by(2) {
        graph
            .update_vertex(*id, |v| v.zone = ZoneKind::Blocked)
            .unwrap();
    }

    for x in -2..7 {
        for y in -2..7 {
            let point = Vec3::planar(x as f32 * 0.7, y as f32 * 0.7);
            let closest = graph.find_closest_vertex(point).unwrap();
            assert!(!closest.is_blocked());
        }
    }
}

#[test]
fn editing_after_build_keeps_symmetry() {
    let mut graph = split_grid(true);
    let extra = graph.add_vertex(Vec3::planar(10.0, 10.0)).unwrap();
    let corner = graph.find_closest_vertex(Vec3::planar(4.0, 4.0)).unwrap().id;

    assert!(graph.add_edge(extra, corner).unwrap());
    assert!(!graph.add_edge(corner, extra).unwrap());
    assert!(graph.vertex(extra).unwrap().is_adjacent_to(corner));
    assert!(graph.vertex(corner).unwrap().is_adjacent_to(extra));
    graph.validate().unwrap();
}
