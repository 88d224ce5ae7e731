//! Territory bookkeeping

use clap::ValueEnum;

/// How territories are fused when they meet
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum MergeStrategy {
    /// Relabel every cell of the absorbed territory, scanning the whole grid
    #[default]
    Relabel,
    /// Keep raw ids in the grid and join them in a disjoint-set
    UnionFind,
}

/// Disjoint-set over territory ids
///
/// Ids are seed indices, so they are dense and start from zero.
#[derive(Clone, Debug, Default)]
pub struct DisjointSet {
    parent: Vec<usize>,
}

impl DisjointSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.parent.clear();
    }

    /// Register `id` as its own singleton set
    pub fn make_set(&mut self, id: usize) {
        let len = self.parent.len();
        if id >= len {
            self.parent.extend(len..=id);
        }
        self.parent[id] = id;
    }

    /// Representative of `id`, compressing the path on the way
    pub fn find(&mut self, id: usize) -> usize {
        let root = self.root(id);
        let mut current = id;
        while current != root {
            let next = self.parent[current];
            self.parent[current] = root;
            current = next;
        }
        root
    }

    /// Representative of `id` without modifying the forest
    pub fn root(&self, id: usize) -> usize {
        let mut current = id;
        while let Some(&parent) = self.parent.get(current) {
            if parent == current {
                break;
            }
            current = parent;
        }
        current
    }

    /// Attach the set of `from` under the set of `into`
    ///
    /// The representative of `into` survives, like the target label of a
    /// relabel scan.
    pub fn union_into(&mut self, from: usize, into: usize) {
        let from = self.find(from);
        let into = self.find(into);
        if from != into {
            self.parent[from] = into;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::DisjointSet;

    #[test]
    fn singletons_are_their_own_root() {
        let mut sets = DisjointSet::new();
        (0..4).for_each(|id| sets.make_set(id));
        assert_eq!((0..4).map(|id| sets.find(id)).collect::<Vec<_>>(), [0, 1, 2, 3]);
    }

    #[test]
    fn target_representative_survives() {
        let mut sets = DisjointSet::new();
        (0..5).for_each(|id| sets.make_set(id));
        sets.union_into(0, 1);
        sets.union_into(2, 3);
        sets.union_into(1, 3);
        assert_eq!(sets.root(0), 3);
        assert_eq!(sets.find(0), 3);
        assert_eq!(sets.find(2), 3);
        assert_eq!(sets.find(4), 4);
    }

    #[test]
    fn find_compresses_paths() {
        let mut sets = DisjointSet::new();
        (0..4).for_each(|id| sets.make_set(id));
        sets.union_into(0, 1);
        sets.union_into(1, 2);
        sets.union_into(2, 3);
        assert_eq!(sets.find(0), 3);
        assert_eq!(sets.parent[0], 3);
        assert_eq!(sets.parent[1], 3);
    }

    #[test]
    fn make_set_resets_reused_id() {
        let mut sets = DisjointSet::new();
        sets.make_set(0);
        sets.make_set(1);
        sets.union_into(0, 1);
        sets.make_set(0);
        assert_eq!(sets.find(0), 0);
    }
}
