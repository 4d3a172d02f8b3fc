use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Trait for types that can be located in N-dimensional Cartesian space.
pub trait KdPoint<const N: usize> {
    fn point(&self) -> [f64; N];
}

/// Axis-aligned KD-Tree node referencing a single item by index.
#[derive(Debug, Clone)]
pub struct KdNode {
    pub axis: u8,
    pub item_index: usize,
    pub left: Option<usize>,
    pub right: Option<usize>,
}

#[derive(Debug, Clone)]
pub struct KdTree<T, const N: usize>
where
    T: KdPoint<N>,
{
    pub items: Vec<T>,
    pub nodes: Vec<KdNode>,
    pub root: Option<usize>,
}

impl<T, const N: usize> KdTree<T, N>
where
    T: KdPoint<N>,
{
    pub fn build(items: Vec<T>) -> Self {
        if items.is_empty() {
            return Self {
                items,
                nodes: Vec::new(),
                root: None,
            };
        }

        let mut indices: Vec<usize> = (0..items.len()).collect();
        let mut builder = TreeBuilder {
            points: items.iter().map(|item| item.point()).collect(),
            nodes: Vec::with_capacity(items.len()),
        };
        let root = builder.build_recursive(&mut indices, 0);

        Self {
            items,
            nodes: builder.nodes,
            root,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Find the closest item to the query point.
    /// Returns the item index and Euclidean distance.
    pub fn nearest_neighbor(&self, query_point: [f64; N]) -> Option<(usize, f64)> {
        self.k_nearest(query_point, 1).into_iter().next()
    }

    /// The `k` closest items as (index, Euclidean distance), nearest first.
    pub fn k_nearest(&self, query_point: [f64; N], k: usize) -> Vec<(usize, f64)> {
        let root = match self.root {
            Some(idx) if k > 0 => idx,
            _ => return Vec::new(),
        };

        let mut best = BinaryHeap::with_capacity(k.min(self.items.len()) + 1);
        self.nearest_recursive(root, &query_point, k, &mut best);

        best.into_sorted_vec()
            .into_iter()
            .map(|c| (c.index, c.dist2.sqrt()))
            .collect()
    }

    fn nearest_recursive(
        &self,
        node_idx: usize,
        query_point: &[f64; N],
        k: usize,
        best: &mut BinaryHeap<Candidate>,
    ) {
        let node = &self.nodes[node_idx];
        let point = self.items[node.item_index].point();
        let dist2 = squared_distance(&point, query_point);

        if best.len() < k {
            best.push(Candidate {
                index: node.item_index,
                dist2,
            });
        } else if best.peek().is_some_and(|worst| dist2 < worst.dist2) {
            best.pop();
            best.push(Candidate {
                index: node.item_index,
                dist2,
            });
        }

        let axis = node.axis as usize;
        let diff = query_point[axis] - point[axis];
        let (near, far) = if diff <= 0.0 {
            (node.left, node.right)
        } else {
            (node.right, node.left)
        };

        if let Some(child) = near {
            self.nearest_recursive(child, query_point, k, best);
        }

        let worst = if best.len() < k {
            f64::INFINITY
        } else {
            best.peek().map_or(f64::INFINITY, |c| c.dist2)
        };
        if diff * diff < worst {
            if let Some(child) = far {
                self.nearest_recursive(child, query_point, k, best);
            }
        }
    }

    /// Collect indices of all items lying within `radius` of the query point.
    pub fn radius_search(&self, query_point: [f64; N], radius: f64) -> Vec<usize> {
        if radius < 0.0 {
            return Vec::new();
        }

        let root = match self.root {
            Some(idx) => idx,
            None => return Vec::new(),
        };

        let mut hits = Vec::new();
        self.radius_recursive(root, &query_point, radius * radius, &mut hits);
        hits
    }

    fn radius_recursive(
        &self,
        node_idx: usize,
        query_point: &[f64; N],
        radius2: f64,
        hits: &mut Vec<usize>,
    ) {
        let node = &self.nodes[node_idx];
        let point = self.items[node.item_index].point();
        if squared_distance(&point, query_point) <= radius2 {
            hits.push(node.item_index);
        }

        let axis = node.axis as usize;
        let diff = query_point[axis] - point[axis];
        let (near, far) = if diff <= 0.0 {
            (node.left, node.right)
        } else {
            (node.right, node.left)
        };

        if let Some(child) = near {
            self.radius_recursive(child, query_point, radius2, hits);
        }

        if diff * diff <= radius2 {
            if let Some(child) = far {
                self.radius_recursive(child, query_point, radius2, hits);
            }
        }
    }
}

/// Heap entry ordered by squared distance, largest on top
#[derive(Debug, Clone, Copy)]
struct Candidate {
    index: usize,
    dist2: f64,
}

impl PartialEq for Candidate {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Candidate {}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.dist2
            .total_cmp(&other.dist2)
            .then(self.index.cmp(&other.index))
    }
}

fn squared_distance<const N: usize>(a: &[f64; N], b: &[f64; N]) -> f64 {
    a.iter().zip(b.iter()).map(|(x, y)| (x - y) * (x - y)).sum()
}

struct TreeBuilder<const N: usize> {
    points: Vec<[f64; N]>,
    nodes: Vec<KdNode>,
}

impl<const N: usize> TreeBuilder<N> {
    fn build_recursive(&mut self, indices: &mut [usize], depth: usize) -> Option<usize> {
        if indices.is_empty() || N == 0 {
            return None;
        }

        let axis = depth % N;
        let points = &self.points;
        indices.sort_unstable_by(|a, b| points[*a][axis].total_cmp(&points[*b][axis]));

        let median = indices.len() / 2;
        let (left_slice, rest) = indices.split_at_mut(median);
        let (median_idx, right_slice) = rest.split_first_mut()?;

        let node_index = self.nodes.len();
        self.nodes.push(KdNode {
            axis: axis as u8,
            item_index: *median_idx,
            left: None,
            right: None,
        });

        let left = self.build_recursive(left_slice, depth + 1);
        let right = self.build_recursive(right_slice, depth + 1);
        self.nodes[node_index].left = left;
        self.nodes[node_index].right = right;
        Some(node_index)
    }
}
