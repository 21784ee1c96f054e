//! Branch-and-bound search frame.

use crate::distance::DistanceMatrix;

/// One node of the implicit search tree, held by value.
///
/// `path` always starts at vertex 0; `active` lists the unvisited vertex
/// indices in ascending order.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct SearchFrame {
    pub path: Vec<usize>,
    pub active: Vec<usize>,
    pub cost: f64,
}

impl SearchFrame {
    pub fn root(n: usize) -> Self {
        Self {
            path: vec![0],
            active: (1..n).collect(),
            cost: 0.0,
        }
    }

    fn last(&self) -> usize {
        self.path[self.path.len() - 1]
    }

    /// The frame reached by moving to `active[pos]` next.
    pub fn child(&self, pos: usize, distances: &DistanceMatrix) -> Self {
        let next = self.active[pos];
        let mut path = Vec::with_capacity(self.path.len() + 1);
        path.extend_from_slice(&self.path);
        path.push(next);

        let mut active = self.active.clone();
        active.remove(pos);

        Self {
            path,
            active,
            cost: self.cost + distances.get(self.last(), next),
        }
    }

    /// All vertices visited.
    pub fn is_terminal(&self) -> bool {
        self.active.is_empty()
    }

    /// Accumulated cost plus the return edge to vertex 0.
    pub fn tour_cost(&self, distances: &DistanceMatrix) -> f64 {
        self.cost + distances.get(self.last(), self.path[0])
    }

    /// Greedy cheapest-exit estimate of the cheapest completion.
    ///
    /// Any completion leaves the current vertex once into the active set and
    /// leaves every active vertex once, towards another active vertex or
    /// back to vertex 0. Summing the cheapest such edge for each departure
    /// never exceeds the true completion cost.
    pub fn lower_bound(&self, distances: &DistanceMatrix) -> f64 {
        let home = self.path[0];
        let leave_current = self
            .active
            .iter()
            .map(|&a| distances.get(self.last(), a))
            .fold(f64::INFINITY, f64::min);

        let leave_active: f64 = self
            .active
            .iter()
            .map(|&a| {
                self.active
                    .iter()
                    .filter(|&&b| b != a)
                    .chain(std::iter::once(&home))
                    .map(|&b| distances.get(a, b))
                    .fold(f64::INFINITY, f64::min)
            })
            .sum();

        self.cost + leave_current + leave_active
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> DistanceMatrix {
        // Unit square, corners 0-1-2-3 in order; diagonals √2.
        let d = std::f64::consts::SQRT_2;
        DistanceMatrix::from_data(
            4,
            vec![
                0.0, 1.0, d, 1.0, //
                1.0, 0.0, 1.0, d, //
                d, 1.0, 0.0, 1.0, //
                1.0, d, 1.0, 0.0,
            ],
        )
        .expect("valid")
    }

    #[test]
    fn test_root() {
        let root = SearchFrame::root(4);
        assert_eq!(root.path, vec![0]);
        assert_eq!(root.active, vec![1, 2, 3]);
        assert!(!root.is_terminal());
        assert!(SearchFrame::root(1).is_terminal());
    }

    #[test]
    fn test_child() {
        let dm = square();
        let child = SearchFrame::root(4).child(1, &dm);
        assert_eq!(child.path, vec![0, 2]);
        assert_eq!(child.active, vec![1, 3]);
        assert!((child.cost - std::f64::consts::SQRT_2).abs() < 1e-12);
    }

    #[test]
    fn test_terminal_cost() {
        let dm = square();
        let leaf = SearchFrame::root(4)
            .child(0, &dm)
            .child(0, &dm)
            .child(0, &dm);
        assert!(leaf.is_terminal());
        assert_eq!(leaf.path, vec![0, 1, 2, 3]);
        assert!((leaf.tour_cost(&dm) - 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_lower_bound_admissible() {
        let dm = square();
        let root = SearchFrame::root(4);
        // optimum is the perimeter, 4.0
        assert!(root.lower_bound(&dm) <= 4.0 + 1e-12);

        let bad = root.child(1, &dm);
        // best completion after 0→2 is 2→1→3→0 or 2→3→1→0: √2 + 1 + √2 + 1
        let best = 2.0 + 2.0 * std::f64::consts::SQRT_2;
        assert!(bad.lower_bound(&dm) <= best + 1e-12);
        assert!(bad.lower_bound(&dm) > root.lower_bound(&dm));
    }
}
