//! Parent/child index over a flat body list
//!
//! Bodies reference their parent by id. The tree resolves those references
//! once, so the layout passes can work with plain indices into the input
//! slice.

use std::collections::HashMap;

use tracing::debug;

use crate::body::CelestialBody;

/// Resolved hierarchy of a body list
///
/// References that cannot be honoured degrade to roots: unknown parent ids,
/// bodies naming themselves as parent, and one link of every parent cycle.
/// When ids are duplicated, the first occurrence is the one children attach
/// to.
#[derive(Debug, Clone, PartialEq)]
pub struct SystemTree {
    index: HashMap<String, usize>,
    parents: Vec<Option<usize>>,
    children: Vec<Vec<usize>>,
    depths: Vec<usize>,
}

impl SystemTree {
    pub fn build(bodies: &[CelestialBody]) -> Self {
        let mut index = HashMap::with_capacity(bodies.len());
        for (i, body) in bodies.iter().enumerate() {
            index.entry(body.id.clone()).or_insert(i);
        }

        let mut parents: Vec<Option<usize>> = bodies
            .iter()
            .enumerate()
            .map(|(i, body)| {
                let parent_id = body.parent_id()?;
                match index.get(parent_id) {
                    Some(&p) if p != i => Some(p),
                    Some(_) => {
                        debug!(body = %body.id, "body orbits itself, treating it as a root");
                        None
                    }
                    None => {
                        debug!(body = %body.id, parent = parent_id, "unknown parent id, treating body as a root");
                        None
                    }
                }
            })
            .collect();

        break_cycles(bodies, &mut parents);

        let mut children = vec![Vec::new(); bodies.len()];
        for (i, parent) in parents.iter().enumerate() {
            if let Some(p) = *parent {
                children[p].push(i);
            }
        }

        let depths = (0..bodies.len())
            .map(|i| {
                let mut depth = 0;
                let mut current = parents[i];
                while let Some(p) = current {
                    depth += 1;
                    current = parents[p];
                }
                depth
            })
            .collect();

        Self {
            index,
            parents,
            children,
            depths,
        }
    }

    pub fn len(&self) -> usize {
        self.parents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parents.is_empty()
    }

    /// Index of the first body carrying `id`
    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    pub fn parent(&self, body: usize) -> Option<usize> {
        self.parents[body]
    }

    /// Children in input order
    pub fn children(&self, body: usize) -> &[usize] {
        &self.children[body]
    }

    /// Number of ancestors; roots have depth 0
    pub fn depth(&self, body: usize) -> usize {
        self.depths[body]
    }

    pub fn roots(&self) -> impl Iterator<Item = usize> + '_ {
        self.parents
            .iter()
            .enumerate()
            .filter_map(|(i, parent)| parent.is_none().then_some(i))
    }

    /// Every body with at least one child, deepest first, ties in input order
    ///
    /// Visiting parents in this order guarantees that a body's own satellites
    /// are settled before the body itself is positioned among its siblings.
    pub fn parents_deepest_first(&self) -> Vec<usize> {
        let mut parents: Vec<usize> = (0..self.len())
            .filter(|&i| !self.children[i].is_empty())
            .collect();
        parents.sort_by(|&a, &b| self.depths[b].cmp(&self.depths[a]).then(a.cmp(&b)));
        parents
    }
}

/// Cut one link of every parent cycle so the hierarchy becomes a forest
///
/// Walking up from a body that sits on a cycle eventually returns to it;
/// that body loses its parent. Bodies hanging off a cycle are left alone
/// because the cycle members are visited in turn.
fn break_cycles(bodies: &[CelestialBody], parents: &mut [Option<usize>]) {
    let n = parents.len();
    for i in 0..n {
        let mut current = parents[i];
        let mut steps = 0;
        while let Some(p) = current {
            if p == i {
                debug!(body = %bodies[i].id, "parent cycle detected, treating body as a root");
                parents[i] = None;
                break;
            }
            steps += 1;
            if steps > n {
                break;
            }
            current = parents[p];
        }
    }
}
