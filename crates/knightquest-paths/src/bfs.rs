use std::collections::hash_map::Entry;
use std::collections::{HashMap, VecDeque};

use knightquest_core::Point;

use crate::neighbors::KnightPather;
use crate::traits::Pather;

/// Brute-force breadth-first shortest paths on the unbounded lattice.
///
/// Used as ground truth for the closed-form engine. The oracle owns its
/// parent map, queue and neighbor buffer so repeated queries reuse their
/// allocations.
///
/// Without a radius cap the search runs until the target is found, which
/// never terminates for a target the pather cannot reach. With
/// [`with_max_radius`](Self::with_max_radius) only squares within that
/// Chebyshev distance of the start are explored.
#[derive(Debug)]
pub struct BfsOracle<P: Pather = KnightPather> {
    pather: P,
    max_radius: Option<i32>,
    parents: HashMap<Point, Point>,
    queue: VecDeque<Point>,
    nbuf: Vec<Point>,
}

impl Default for BfsOracle {
    fn default() -> Self {
        Self::new()
    }
}

impl BfsOracle {
    /// Create an uncapped oracle for knight moves.
    pub fn new() -> Self {
        Self::with_pather(KnightPather)
    }
}

impl<P: Pather> BfsOracle<P> {
    /// Create an uncapped oracle over an arbitrary move set.
    pub fn with_pather(pather: P) -> Self {
        Self {
            pather,
            max_radius: None,
            parents: HashMap::new(),
            queue: VecDeque::new(),
            nbuf: Vec::with_capacity(8),
        }
    }

    /// Restrict the search to squares within `radius` (Chebyshev) of the
    /// start.
    pub fn with_max_radius(mut self, radius: i32) -> Self {
        self.max_radius = Some(radius);
        self
    }

    /// The current search-radius cap, if any.
    pub fn max_radius(&self) -> Option<i32> {
        self.max_radius
    }

    #[inline]
    fn in_bounds(&self, from: Point, p: Point) -> bool {
        self.max_radius.is_none_or(|r| (p - from).chebyshev_norm() <= r)
    }

    /// Shortest path from `from` to `to`, both endpoints included.
    ///
    /// Returns `None` if the target lies outside the radius cap or could
    /// not be reached within it.
    pub fn path(&mut self, from: Point, to: Point) -> Option<Vec<Point>> {
        if from == to {
            return Some(vec![from]);
        }
        if !self.in_bounds(from, to) {
            log::trace!("bfs {from} -> {to}: target outside radius cap");
            return None;
        }

        // Reset.
        self.parents.clear();
        self.queue.clear();
        self.parents.insert(from, from);
        self.queue.push_back(from);

        let mut nbuf = std::mem::take(&mut self.nbuf);

        let found = 'search: loop {
            let Some(cp) = self.queue.pop_front() else {
                break 'search false;
            };

            nbuf.clear();
            self.pather.neighbors(cp, &mut nbuf);

            for &np in nbuf.iter() {
                if !self.in_bounds(from, np) {
                    continue;
                }
                let Entry::Vacant(slot) = self.parents.entry(np) else {
                    continue;
                };
                slot.insert(cp);
                if np == to {
                    break 'search true;
                }
                self.queue.push_back(np);
            }
        };

        self.nbuf = nbuf;
        log::trace!(
            "bfs {from} -> {to}: {} squares visited, found = {found}",
            self.parents.len()
        );
        if !found {
            return None;
        }

        let mut path = vec![to];
        let mut cur = to;
        while cur != from {
            cur = self.parents[&cur];
            path.push(cur);
        }
        path.reverse();
        Some(path)
    }

    /// Length of the shortest path from `from` to `to`, in moves.
    pub fn distance(&mut self, from: Point, to: Point) -> Option<i64> {
        self.path(from, to).map(|p| p.len() as i64 - 1)
    }
}
