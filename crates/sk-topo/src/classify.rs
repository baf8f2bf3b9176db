use rayon::prelude::*;
use sk_core::{BinaryMask, crossing_number};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointKind {
    Endpoint,
    Interior,
    Branch,
}

pub fn point_kind(cn: u8) -> PointKind {
    match cn {
        1 => PointKind::Endpoint,
        0 | 2 => PointKind::Interior,
        _ => PointKind::Branch,
    }
}

/// Classified skeleton pixels as `(x, y)`, each list in row-major order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Features {
    pub endpoints: Vec<(usize, usize)>,
    pub branches: Vec<(usize, usize)>,
}

impl Features {
    pub fn num_endpoints(&self) -> usize {
        self.endpoints.len()
    }

    pub fn num_branches(&self) -> usize {
        self.branches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.endpoints.is_empty() && self.branches.is_empty()
    }
}

/// Read-only scan of interior rows in parallel; the outer ring is never
/// classified.
pub fn classify(skeleton: &BinaryMask) -> Features {
    let (w, h) = skeleton.dimensions();
    if w < 3 || h < 3 {
        return Features::default();
    }

    let labeled: Vec<(PointKind, (usize, usize))> = (1..h - 1)
        .into_par_iter()
        .flat_map_iter(|y| {
            (1..w - 1).filter_map(move |x| {
                if !skeleton.is_foreground(x, y) {
                    return None;
                }
                let n = skeleton.neighborhood(x, y)?;
                match point_kind(crossing_number(&n)) {
                    PointKind::Interior => None,
                    kind => Some((kind, (x, y))),
                }
            })
        })
        .collect();

    let mut features = Features::default();
    for (kind, p) in labeled {
        match kind {
            PointKind::Endpoint => features.endpoints.push(p),
            PointKind::Branch => features.branches.push(p),
            PointKind::Interior => {}
        }
    }
    features
}
