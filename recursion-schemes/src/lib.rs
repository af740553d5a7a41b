//! Generic folds and unfolds over recursive data structures.
//!
//! A recursive type is described by a frame type with its recursive positions
//! abstracted out ([`MappableFrame`], the `map` capability), plus whichever of the
//! following it supports:
//!
//! - [`Collapsible`] (`unfix`): take one layer off a value
//! - [`Expandable`] (`fix`): close one layer into a value
//! - [`Choice`] (`either`): tell a finished child from a seed mid-unfold
//!
//! Each combinator requires exactly the capabilities it uses:
//!
//! | combinator | capabilities |
//! |---|---|
//! | [`cata`], [`cata_recursive`], [`try_cata`] | `map`, `unfix` |
//! | [`ana_recursive`] | `map`, `fix` |
//! | [`hylo_recursive`] | `map` |
//! | [`para_recursive`] | `map`, `unfix` |
//! | [`apo_recursive`] | `map`, `fix`, `either` |
//!
//! Everything suffixed `_recursive` uses the call stack, one frame per layer of depth.
//! [`cata`] is stack safe.

mod arena;
mod either;
mod frame;
mod recursive;
mod schemes;

pub use arena::{cata, cata_observed, try_cata, ArenaIndex, Observer};
pub use either::{Choice, Either};
pub use frame::{MappableFrame, PartiallyApplied};
pub use recursive::{Collapsible, CollapsibleExt, Expandable, ExpandableExt};
pub use schemes::{ana_recursive, apo_recursive, cata_recursive, hylo_recursive, para_recursive};
