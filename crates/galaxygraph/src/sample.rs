//! The bundled sample world: three galaxies, 25 nodes and 18 roads.

use crate::error::Result;
use crate::loader::LoadedGraph;
use crate::statement::Script;

/// Statement script of the sample world, ending with `FIND a.a->a.a`.
pub const SAMPLE_SCRIPT: &str = include_str!("../data/sample.cypher");

/// Decode the sample script.
pub fn sample_script() -> Result<Script> {
    Script::parse(SAMPLE_SCRIPT)
}

/// Build the sample world store.
pub fn sample_world() -> Result<LoadedGraph> {
    sample_script()?.description.load()
}
