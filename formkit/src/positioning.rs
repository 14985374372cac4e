//! Interface to the floating-element positioning engine.
//!
//! Placement math lives in the engine. Controls only hand it the two nodes
//! they obtained through their reference sinks and apply what it returns.

use std::fmt;

use formkit_dom::{AttributeBag, NodeHandle, NodeRef, RefSink};

/// Where a floating node sits relative to its anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Placement {
    Auto,
    AutoStart,
    AutoEnd,
    Top,
    TopStart,
    TopEnd,
    Bottom,
    BottomStart,
    BottomEnd,
    Right,
    RightStart,
    RightEnd,
    Left,
    LeftStart,
    LeftEnd,
}

impl Placement {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::AutoStart => "auto-start",
            Self::AutoEnd => "auto-end",
            Self::Top => "top",
            Self::TopStart => "top-start",
            Self::TopEnd => "top-end",
            Self::Bottom => "bottom",
            Self::BottomStart => "bottom-start",
            Self::BottomEnd => "bottom-end",
            Self::Right => "right",
            Self::RightStart => "right-start",
            Self::RightEnd => "right-end",
            Self::Left => "left",
            Self::LeftStart => "left-start",
            Self::LeftEnd => "left-end",
        }
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Displacement of the floating node: along the anchor edge, then away from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Offset {
    pub skidding: i32,
    pub distance: i32,
}

impl Offset {
    pub const fn new(skidding: i32, distance: i32) -> Self {
        Self { skidding, distance }
    }
}

/// What the engine returns for a floating node.
#[derive(Debug, Clone, Default)]
pub struct Positioned {
    /// Style attributes for the floating node.
    pub style: AttributeBag,
    /// Extra attributes for the floating node.
    pub attributes: AttributeBag,
}

/// A positioning engine.
///
/// Implementations recompute on their own when geometry changes; controls
/// call `compute` once per render.
pub trait Positioner {
    fn compute(
        &self,
        anchor: &NodeHandle,
        floating: &NodeHandle,
        placement: Placement,
        offset: Offset,
    ) -> Positioned;
}

/// Engine that only records the requested placement. Useful where no real
/// geometry exists, such as tests and server rendering.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlacementOnly;

impl Positioner for PlacementOnly {
    fn compute(
        &self,
        _anchor: &NodeHandle,
        _floating: &NodeHandle,
        placement: Placement,
        offset: Offset,
    ) -> Positioned {
        Positioned {
            style: AttributeBag::new().with("position", "absolute"),
            attributes: AttributeBag::new()
                .with("data-placement", placement.as_str())
                .with("data-offset", format!("{},{}", offset.skidding, offset.distance)),
        }
    }
}

/// The anchor and floating nodes of one popup.
///
/// Clones share both cells, so the pair can live in control state across
/// renders while sinks created from it are attached to elements.
#[derive(Debug, Clone, Default)]
pub struct FloatingPair {
    anchor: NodeRef,
    floating: NodeRef,
}

impl FloatingPair {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn anchor(&self) -> &NodeRef {
        &self.anchor
    }

    pub fn floating(&self) -> &NodeRef {
        &self.floating
    }

    pub fn anchor_sink(&self) -> RefSink {
        RefSink::cell(&self.anchor)
    }

    pub fn floating_sink(&self) -> RefSink {
        RefSink::cell(&self.floating)
    }

    /// Ask the engine for a position, once both nodes exist.
    pub fn position(
        &self,
        positioner: &dyn Positioner,
        placement: Placement,
        offset: Offset,
    ) -> Option<Positioned> {
        let anchor = self.anchor.get()?;
        let floating = self.floating.get()?;
        Some(positioner.compute(&anchor, &floating, placement, offset))
    }
}
