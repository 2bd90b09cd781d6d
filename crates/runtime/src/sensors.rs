//! Translating the agent's surroundings into planner facts.
use goap::WorldState;
use nav_core::{Graph, Vec3, VertexId};

use crate::config::{SenseConfig, SightConfig};

/// Proposition names shared by the sensors and the default catalog.
pub mod keys {
    pub const FOUND_FOOD: &str = "found_food";
    pub const ON_FOOD: &str = "on_food";
    pub const FOUND_PLAYER: &str = "found_player";
    pub const LOW_HEALTH: &str = "low_health";
    pub const HUNGRY: &str = "hungry";
    pub const COMFORT: &str = "comfort";
}

/// Everything the sensors look at besides the graph.
#[derive(Clone, Copy, Debug)]
pub struct SensorInput<'a> {
    pub position: Vec3,
    pub home: VertexId,
    pub interests: &'a nav_core::CategorySet,
    pub hungry: bool,
    /// Current health over maximum health.
    pub health_fraction: f32,
    pub player_visible: bool,
}

/// One sampling of every sensor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct SensorReadings {
    pub found_food: bool,
    pub on_food: bool,
    pub found_player: bool,
    pub low_health: bool,
    pub hungry: bool,
    pub comfort: bool,
}

impl SensorReadings {
    pub fn sample(graph: &Graph, config: &SenseConfig, input: &SensorInput<'_>) -> Self {
        let closest = graph.find_closest_vertex(input.position);

        let found_food = closest.is_some_and(|vertex| {
            graph
                .vertices_in_hop_range(vertex.id, config.food_hops, config.food_range)
                .iter()
                .any(|v| input.interests.contains(&v.category))
        });
        let on_food = closest.is_some_and(|vertex| input.interests.contains(&vertex.category));
        let at_home = closest.is_some_and(|vertex| vertex.id == input.home);

        Self {
            found_food,
            on_food,
            found_player: input.player_visible,
            low_health: input.health_fraction < config.low_health_fraction,
            hungry: input.hungry,
            comfort: at_home && !input.hungry && !input.player_visible,
        }
    }

    pub fn to_world_state(&self) -> WorldState {
        WorldState::new()
            .with(keys::FOUND_FOOD, self.found_food)
            .with(keys::ON_FOOD, self.on_food)
            .with(keys::FOUND_PLAYER, self.found_player)
            .with(keys::LOW_HEALTH, self.low_health)
            .with(keys::HUNGRY, self.hungry)
            .with(keys::COMFORT, self.comfort)
    }
}

impl SightConfig {
    /// True if `target` is visible from `eye` looking along `facing`.
    ///
    /// A zero `facing` (an agent that never moved) only sees within the inner
    /// radius.
    pub fn can_see(&self, eye: Vec3, facing: Vec3, target: Vec3) -> bool {
        let offset = target - eye;
        let distance = offset.length();
        if distance > self.max_distance {
            return false;
        }
        if distance <= self.inner_radius {
            return true;
        }

        let facing = facing.normalize_or_zero();
        if facing == Vec3::ZERO {
            return false;
        }
        let cos = (facing.dot(offset) / distance).clamp(-1.0, 1.0);
        cos.acos().to_degrees() <= self.max_angle
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nav_core::{Category, CategorySet, GraphBuilder};

    /// home(0) - 1 - 2 - food(3), two units apart.
    fn corridor() -> Graph {
        let mut builder = GraphBuilder::new();
        let ids: Vec<_> = (0..4)
            .map(|i| builder.vertex(Vec3::planar(2.0 * i as f32, 0.0)))
            .collect();
        for pair in ids.windows(2) {
            builder.edge(pair[0], pair[1]);
        }
        builder.category(ids[0], Category::HOME);
        builder.category(ids[3], Category::FOOD);
        builder.build().unwrap()
    }

    fn input(position: Vec3, interests: &CategorySet) -> SensorInput<'_> {
        SensorInput {
            position,
            home: VertexId(0),
            interests,
            hungry: false,
            health_fraction: 1.0,
            player_visible: false,
        }
    }

    #[test]
    fn food_is_found_within_hop_range() {
        let graph = corridor();
        let interests = CategorySet::from([Category::FOOD]);
        let config = SenseConfig::default();

        let far = SensorReadings::sample(&graph, &config, &input(Vec3::ZERO, &interests));
        assert!(!far.found_food);

        let near =
            SensorReadings::sample(&graph, &config, &input(Vec3::planar(2.1, 0.0), &interests));
        assert!(near.found_food);
        assert!(!near.on_food);

        let on =
            SensorReadings::sample(&graph, &config, &input(Vec3::planar(5.8, 0.0), &interests));
        assert!(on.found_food);
        assert!(on.on_food);
    }

    #[test]
    fn comfort_needs_home_and_calm() {
        let graph = corridor();
        let interests = CategorySet::from([Category::FOOD]);
        let config = SenseConfig::default();

        let mut at_home = input(Vec3::planar(0.3, 0.0), &interests);
        assert!(SensorReadings::sample(&graph, &config, &at_home).comfort);

        at_home.hungry = true;
        assert!(!SensorReadings::sample(&graph, &config, &at_home).comfort);

        at_home.hungry = false;
        at_home.player_visible = true;
        let readings = SensorReadings::sample(&graph, &config, &at_home);
        assert!(!readings.comfort);
        assert!(readings.found_player);
    }

    #[test]
    fn low_health_is_below_a_third() {
        let graph = corridor();
        let interests = CategorySet::new();
        let config = SenseConfig::default();
        let mut sample = input(Vec3::ZERO, &interests);

        sample.health_fraction = 0.34;
        assert!(!SensorReadings::sample(&graph, &config, &sample).low_health);
        sample.health_fraction = 0.3;
        assert!(SensorReadings::sample(&graph, &config, &sample).low_health);
    }

    #[test]
    fn world_state_carries_every_fact() {
        let state = SensorReadings {
            hungry: true,
            ..SensorReadings::default()
        }
        .to_world_state();
        assert_eq!(state.len(), 6);
        assert_eq!(state.get(keys::HUNGRY), Some(true));
        assert_eq!(state.get(keys::COMFORT), Some(false));
    }

    #[test]
    fn sight_cone() {
        let sight = SightConfig {
            max_distance: 6.0,
            inner_radius: 2.0,
            max_angle: 45.0,
        };
        let east = Vec3::planar(1.0, 0.0);

        assert!(sight.can_see(Vec3::ZERO, east, Vec3::planar(5.0, 1.0)));
        assert!(!sight.can_see(Vec3::ZERO, east, Vec3::planar(-5.0, 0.0)));
        assert!(!sight.can_see(Vec3::ZERO, east, Vec3::planar(7.0, 0.0)));
        // Inner radius ignores facing.
        assert!(sight.can_see(Vec3::ZERO, east, Vec3::planar(-1.5, 0.0)));
        assert!(sight.can_see(Vec3::ZERO, Vec3::ZERO, Vec3::planar(0.0, 1.0)));
        assert!(!sight.can_see(Vec3::ZERO, Vec3::ZERO, Vec3::planar(0.0, 3.0)));
    }
}
