use num_traits::Zero;
use ordered_float::OrderedFloat;
use std::fmt::{Debug, Display};

/// Numeric type usable as an edge weight and as a path distance
///
/// Distances are sums of weights, so the type doubles as the distance type.
/// Sums are checked: an overflowing sum is reported instead of wrapping.
pub trait Weight: Copy + Ord + Zero + Debug + Display + Send + Sync {
    /// Adds two weights, returning `None` when the result is not representable
    fn checked_sum(self, other: Self) -> Option<Self>;

    /// Returns true if the value may label an edge
    fn is_valid_weight(&self) -> bool {
        *self >= Self::zero()
    }
}

macro_rules! impl_integer_weight {
    ($($t:ty),*) => {
        $(
            impl Weight for $t {
                fn checked_sum(self, other: Self) -> Option<Self> {
                    self.checked_add(other)
                }
            }
        )*
    };
}

impl_integer_weight!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

macro_rules! impl_float_weight {
    ($($t:ty),*) => {
        $(
            impl Weight for OrderedFloat<$t> {
                fn checked_sum(self, other: Self) -> Option<Self> {
                    let sum = self.0 + other.0;
                    if sum.is_finite() {
                        Some(OrderedFloat(sum))
                    } else {
                        None
                    }
                }

                // NaN sorts above every number in OrderedFloat, so it must be excluded explicitly
                fn is_valid_weight(&self) -> bool {
                    self.0.is_finite() && self.0 >= 0.0
                }
            }
        )*
    };
}

impl_float_weight!(f32, f64);

/// Trait representing a read-only weighted directed graph
///
/// Nodes are identified by contiguous indices `0..node_count()`.
pub trait Graph<W>: Debug
where
    W: Weight,
{
    /// Returns the number of nodes in the graph
    fn node_count(&self) -> usize;

    /// Returns the number of edges in the graph
    fn edge_count(&self) -> usize;

    /// Returns an iterator over the outgoing edges from a node, in insertion order
    fn outgoing_edges(&self, node: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_>;

    /// Returns true if the node exists in the graph
    fn has_node(&self, node: usize) -> bool {
        node < self.node_count()
    }
}

impl<W> Graph<W> for Vec<Vec<(usize, W)>>
where
    W: Weight,
{
    fn node_count(&self) -> usize {
        self.len()
    }

    fn edge_count(&self) -> usize {
        self.iter().map(|edges| edges.len()).sum()
    }

    fn outgoing_edges(&self, node: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_> {
        match self.get(node) {
            Some(edges) => Box::new(edges.iter().copied()),
            None => Box::new(std::iter::empty()),
        }
    }
}
