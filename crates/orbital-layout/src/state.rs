//! Working state shared by the placement, collision and hierarchy passes

use crate::tree::SystemTree;

/// Where a body sits relative to its parent centre
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Placement {
    /// Roots, and bodies no pass has positioned
    Anchored,
    Orbit { distance: f64 },
    Band { inner: f64, outer: f64 },
}

/// Radial interval a body occupies around its parent
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Footprint {
    pub center: f64,
    pub inner_clearance: f64,
    pub outer_extent: f64,
}

impl Footprint {
    pub fn inner_edge(&self) -> f64 {
        self.center - self.inner_clearance
    }

    pub fn outer_edge(&self) -> f64 {
        self.center + self.outer_extent
    }
}

/// Visual radii and placements, indexed like the input bodies
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutState {
    pub visual: Vec<f64>,
    pub placement: Vec<Placement>,
}

impl LayoutState {
    pub fn new(visual: Vec<f64>) -> Self {
        let placement = vec![Placement::Anchored; visual.len()];
        Self { visual, placement }
    }

    pub fn is_placed(&self, body: usize) -> bool {
        !matches!(self.placement[body], Placement::Anchored)
    }

    /// Radius a sibling must clear around this body's centre: the larger of
    /// its own visual radius and the outer reach of everything orbiting it
    pub fn effective_radius(&self, tree: &SystemTree, body: usize) -> f64 {
        tree.children(body)
            .iter()
            .map(|&child| self.outer_reach(tree, child))
            .fold(self.visual[body], f64::max)
    }

    /// How far from its parent centre a child (and its own satellites) reaches
    fn outer_reach(&self, tree: &SystemTree, child: usize) -> f64 {
        match self.placement[child] {
            Placement::Anchored => 0.0,
            Placement::Orbit { distance } => distance + self.effective_radius(tree, child),
            Placement::Band { outer, .. } => outer,
        }
    }

    pub fn footprint(&self, tree: &SystemTree, body: usize) -> Footprint {
        match self.placement[body] {
            Placement::Band { inner, outer } => {
                let half_width = (outer - inner) / 2.0;
                Footprint {
                    center: (inner + outer) / 2.0,
                    inner_clearance: half_width,
                    outer_extent: half_width,
                }
            }
            Placement::Orbit { distance } => {
                let radius = self.effective_radius(tree, body);
                Footprint {
                    center: distance,
                    inner_clearance: radius,
                    outer_extent: radius,
                }
            }
            Placement::Anchored => {
                let radius = self.effective_radius(tree, body);
                Footprint {
                    center: 0.0,
                    inner_clearance: radius,
                    outer_extent: radius,
                }
            }
        }
    }

    /// Move a placed body outward; bands move as a rigid unit
    pub fn shift_outward(&mut self, body: usize, delta: f64) {
        self.placement[body] = match self.placement[body] {
            Placement::Orbit { distance } => Placement::Orbit {
                distance: distance + delta,
            },
            Placement::Band { inner, outer } => Placement::Band {
                inner: inner + delta,
                outer: outer + delta,
            },
            Placement::Anchored => Placement::Anchored,
        };
    }
}
