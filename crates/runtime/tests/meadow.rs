use std::sync::Arc;

use goap::IdleReason;
use nav_content::ContentFactory;
use nav_core::{Graph, Vec3, VertexId, ZoneKind};
use runtime::{AgentConfig, BehaviorMode, Scenario, Simulation};

const DT: f32 = 0.1;

fn meadow() -> Arc<Graph> {
    Arc::new(
        ContentFactory::bundled()
            .load_graph("meadow")
            .expect("bundled meadow graph"),
    )
}

fn lone_rabbit() -> Simulation {
    let scenario = Scenario::parse(
        r#"Scenario(graph: "meadow", agents: [(name: "rabbit", spawn: (0.0, 0.0, 0.0), home: 0)])"#,
    )
    .unwrap();
    scenario
        .build(meadow(), &AgentConfig::default(), 42)
        .unwrap()
}

#[test]
fn hungry_rabbit_eats_then_rests_at_home() {
    let mut simulation = lone_rabbit();
    let mut ate = false;
    let mut rested = false;

    for _ in 0..3000 {
        simulation.step(DT);
        let rabbit = &simulation.actors()[0].agent;
        if rabbit.mode() == BehaviorMode::Eating && rabbit.idle_reason().is_none() {
            ate = true;
        }
        if ate && rabbit.idle_reason() == Some(IdleReason::GoalSatisfied) {
            rested = true;
            break;
        }
    }

    assert!(ate, "rabbit never started eating");
    assert!(rested, "rabbit never settled after eating");

    let actor = &simulation.actors()[0];
    assert!(!actor.agent.hunger().is_hungry());
    let home = simulation
        .graph()
        .find_closest_vertex(actor.body.position)
        .map(|v| v.id);
    assert_eq!(home, Some(VertexId(0)));
}

#[test]
fn routes_keep_clear_of_the_boulder() {
    let mut simulation = lone_rabbit();
    let boulder = Vec3::planar(4.0, 2.0);

    for _ in 0..3000 {
        simulation.step(DT);
        let position = simulation.actors()[0].body.position;
        assert!(
            position.distance(boulder) > 0.9,
            "rabbit walked onto the boulder at {position}"
        );
    }
}

#[test]
fn same_seed_same_run() {
    let run = || {
        let mut simulation = lone_rabbit();
        simulation.run(500, DT);
        simulation.summaries()
    };
    assert_eq!(run(), run());
}

#[test]
fn bundled_scenario_runs() {
    let factory = ContentFactory::bundled();
    let scenario = Scenario::load_from_file(&factory.scenario_path("meadow")).unwrap();
    let graph = Arc::new(factory.load_graph(&scenario.graph).unwrap());

    let mut simulation = scenario
        .build(graph, &AgentConfig::default(), 7)
        .unwrap();
    simulation.run(600, DT);

    let summaries = simulation.summaries();
    assert_eq!(summaries.len(), 2);
    assert_eq!(summaries[0].name, "rabbit");
    assert_eq!(summaries[1].name, "fox");
    assert!(summaries.iter().all(|s| s.replans > 0));
    assert_eq!(simulation.ticks(), 600);
}

#[test]
fn editing_a_shared_graph_leaves_running_agents_alone() {
    let simulation = lone_rabbit();
    let mut edited = Arc::clone(simulation.graph());

    Arc::make_mut(&mut edited)
        .update_vertex(VertexId(6), |vertex| vertex.zone = ZoneKind::Normal)
        .unwrap();

    assert!(!edited.vertex(VertexId(6)).unwrap().is_blocked());
    assert!(simulation.graph().vertex(VertexId(6)).unwrap().is_blocked());
}

#[test]
fn summary_reports_the_step_in_progress() {
    let mut simulation = lone_rabbit();
    simulation.step(DT);

    let summary = &simulation.summaries()[0];
    assert!(summary.step.is_some());
    assert_eq!(summary.step.as_ref(), summary.plan.first());
}
