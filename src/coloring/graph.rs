//! Immutable undirected graph.

use crate::error::GraphError;

/// An undirected simple graph over vertices `0..n`.
///
/// Construction validates the input: every edge is stored in both
/// directions, duplicate edges collapse, and self-loops are rejected.
/// The graph never changes afterwards.
///
/// # Examples
///
/// ```
/// use u_coloring::coloring::Graph;
///
/// // 4-cycle given with 1-based vertex ids.
/// let g = Graph::from_one_based_edges(4, &[(1, 2), (2, 3), (3, 4), (4, 1)]).unwrap();
/// assert_eq!(g.num_vertices(), 4);
/// assert!(g.are_adjacent(0, 3));
/// assert!(!g.are_adjacent(0, 2));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph {
    adjacency: Vec<Vec<usize>>,
    num_edges: usize,
}

impl Graph {
    /// Builds a graph from 0-based edges.
    pub fn from_edges(num_vertices: usize, edges: &[(usize, usize)]) -> Result<Self, GraphError> {
        let mut adjacency = vec![Vec::new(); num_vertices];
        for &(u, v) in edges {
            for vertex in [u, v] {
                if vertex >= num_vertices {
                    return Err(GraphError::VertexOutOfRange {
                        vertex,
                        num_vertices,
                    });
                }
            }
            if u == v {
                return Err(GraphError::SelfLoop { vertex: u });
            }
            adjacency[u].push(v);
            adjacency[v].push(u);
        }

        let mut num_edges = 0;
        for list in &mut adjacency {
            list.sort_unstable();
            list.dedup();
            num_edges += list.len();
        }

        Ok(Self {
            adjacency,
            num_edges: num_edges / 2,
        })
    }

    /// Builds a graph from 1-based edges, as in DIMACS `e u v` lines.
    pub fn from_one_based_edges(
        num_vertices: usize,
        edges: &[(usize, usize)],
    ) -> Result<Self, GraphError> {
        let zero_based = edges
            .iter()
            .map(|&(u, v)| match (u.checked_sub(1), v.checked_sub(1)) {
                (Some(u), Some(v)) => Ok((u, v)),
                _ => Err(GraphError::ZeroVertexId),
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_edges(num_vertices, &zero_based)
    }

    /// Builds a graph from a square, symmetric adjacency matrix.
    pub fn from_adjacency_matrix(matrix: &[Vec<bool>]) -> Result<Self, GraphError> {
        let n = matrix.len();
        for (row, entries) in matrix.iter().enumerate() {
            if entries.len() != n {
                return Err(GraphError::NotSquare {
                    row,
                    len: entries.len(),
                    expected: n,
                });
            }
        }

        let mut edges = Vec::new();
        for i in 0..n {
            if matrix[i][i] {
                return Err(GraphError::SelfLoop { vertex: i });
            }
            for j in (i + 1)..n {
                if matrix[i][j] != matrix[j][i] {
                    return Err(GraphError::Asymmetric { i, j });
                }
                if matrix[i][j] {
                    edges.push((i, j));
                }
            }
        }
        Self::from_edges(n, &edges)
    }

    pub fn num_vertices(&self) -> usize {
        self.adjacency.len()
    }

    pub fn num_edges(&self) -> usize {
        self.num_edges
    }

    /// Returns `true` if an edge joins `i` and `j`.
    pub fn are_adjacent(&self, i: usize, j: usize) -> bool {
        self.adjacency
            .get(i)
            .is_some_and(|list| list.binary_search(&j).is_ok())
    }

    /// Sorted neighbors of `vertex`.
    pub fn neighbors(&self, vertex: usize) -> &[usize] {
        &self.adjacency[vertex]
    }

    pub fn degree(&self, vertex: usize) -> usize {
        self.adjacency[vertex].len()
    }

    /// Iterates over every edge once, as `(u, v)` with `u < v`.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.adjacency.iter().enumerate().flat_map(|(u, list)| {
            list.iter()
                .copied()
                .filter(move |&v| u < v)
                .map(move |v| (u, v))
        })
    }
}
