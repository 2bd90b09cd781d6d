//! Content factory for locating graph fixtures in a data directory.

use std::path::{Path, PathBuf};

use nav_core::Graph;

use crate::loaders::{GraphLoader, LoadResult};

/// Locates fixtures by name in a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── graphs/
/// │   └── meadow.ron
/// └── scenarios/
///     └── meadow.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Factory rooted at the fixtures shipped with this crate.
    pub fn bundled() -> Self {
        Self::new(Path::new(env!("CARGO_MANIFEST_DIR")).join("data"))
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn graph_path(&self, name: &str) -> PathBuf {
        self.data_dir.join("graphs").join(format!("{name}.ron"))
    }

    /// Scenario files are parsed by the runtime; this only locates them.
    pub fn scenario_path(&self, name: &str) -> PathBuf {
        self.data_dir.join("scenarios").join(format!("{name}.ron"))
    }

    /// Load `graphs/<name>.ron`.
    pub fn load_graph(&self, name: &str) -> LoadResult<Graph> {
        GraphLoader::load(&self.graph_path(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn graph_paths_are_rooted_in_data_dir() {
        let factory = ContentFactory::new("/tmp/data");
        assert_eq!(factory.data_dir(), Path::new("/tmp/data"));
        assert_eq!(
            factory.graph_path("meadow"),
            Path::new("/tmp/data/graphs/meadow.ron")
        );
        assert_eq!(
            factory.scenario_path("meadow"),
            Path::new("/tmp/data/scenarios/meadow.ron")
        );
    }

    #[test]
    fn bundled_meadow_loads() {
        let graph = ContentFactory::bundled().load_graph("meadow").unwrap();
        assert!(!graph.is_empty());
        graph.validate().unwrap();
    }
}
