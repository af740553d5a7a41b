use std::fmt::Display;
use std::io;
use std::path::Path;

use recursion_schemes::{cata_observed, ArenaIndex, Collapsible, MappableFrame, Observer};
use serde::Serialize;

type VizNodeId = usize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "typ", rename_all = "snake_case")]
pub enum VizAction {
    // layer exposed, with children shown as the ids of their own layers
    Discover {
        target_id: VizNodeId,
        parent_id: Option<VizNodeId>,
        txt: String,
    },
    // every child of the layer replaced by its collapsed value
    Resolve {
        target_id: VizNodeId,
        txt: String,
    },
    // layer collapsed to a value, removing all child nodes
    Collapse {
        target_id: VizNodeId,
        txt: String,
    },
    // info text display!
    InfoCard {
        info_header: String,
        info_txt: String,
    },
}

/// Ordered record of a traversal, built up by using a `Viz` as the [`Observer`]
/// for [`cata_observed`]. Node ids are arena indices, so the root is always `0`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Viz {
    actions: Vec<VizAction>,
}

impl Viz {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn actions(&self) -> &[VizAction] {
        &self.actions
    }

    /// put an info card in front of everything recorded so far
    pub fn label(mut self, info_header: String, info_txt: String) -> Self {
        self.actions.insert(
            0,
            VizAction::InfoCard {
                info_header,
                info_txt,
            },
        );
        self
    }

    /// append the actions of `next`, separated from ours by an info card
    pub fn fuse(self, next: Self, info_header: String, info_txt: String) -> Self {
        let mut actions = self.actions;
        actions.push(VizAction::InfoCard {
            info_header,
            info_txt,
        });
        actions.extend(next.actions);

        Self { actions }
    }

    pub fn write_to(&self, path: impl AsRef<Path>) -> io::Result<()> {
        let to_write = serialize_json(self)?;
        std::fs::write(path, to_write)
    }
}

impl<F, Out> Observer<F, Out> for Viz
where
    F: MappableFrame,
    F::Frame<ArenaIndex>: Display,
    F::Frame<Out>: Display,
    Out: Display,
{
    fn discovered(
        &mut self,
        idx: ArenaIndex,
        parent: Option<ArenaIndex>,
        layer: &F::Frame<ArenaIndex>,
    ) {
        self.actions.push(VizAction::Discover {
            target_id: idx.index(),
            parent_id: parent.map(ArenaIndex::index),
            txt: layer.to_string(),
        });
    }

    fn resolved(&mut self, idx: ArenaIndex, layer: &F::Frame<Out>) {
        self.actions.push(VizAction::Resolve {
            target_id: idx.index(),
            txt: layer.to_string(),
        });
    }

    fn collapsed(&mut self, idx: ArenaIndex, out: &Out) {
        self.actions.push(VizAction::Collapse {
            target_id: idx.index(),
            txt: out.to_string(),
        });
    }
}

pub fn serialize_json(v: &Viz) -> serde_json::Result<String> {
    serde_json::to_string(v)
}

/// [`recursion_schemes::cata`], also returning a record of every step it took
/// followed by an info card with the result.
pub fn cata_v<T, Out>(
    x: T,
    alg: impl FnMut(<T::FrameToken as MappableFrame>::Frame<Out>) -> Out,
) -> (Out, Viz)
where
    T: Collapsible,
    <T::FrameToken as MappableFrame>::Frame<ArenaIndex>: Display,
    <T::FrameToken as MappableFrame>::Frame<Out>: Display,
    Out: Display,
{
    let mut viz = Viz::new();
    let out = cata_observed(x, alg, &mut viz);

    viz.actions.push(VizAction::InfoCard {
        info_header: "Completed".to_string(),
        info_txt: format!("result: {}", out),
    });

    (out, viz)
}
