//! Records each step of [`recursion_schemes::cata`] as a list of actions that can be
//! serialized to JSON and replayed elsewhere.

pub mod visualize;

pub use visualize::{cata_v, serialize_json, Viz, VizAction};
