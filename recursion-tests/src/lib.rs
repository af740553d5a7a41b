//! Recursive types used to exercise `recursion-schemes`: each one is a frame type,
//! a `MappableFrame` instance, and `Collapsible`/`Expandable` impls for one or
//! more concrete representations.

pub mod expr;
pub mod list;
pub mod nat;
pub mod tree;
