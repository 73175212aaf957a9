//! Path reconstruction from solver output.
//!
//! Single-source results are walked backward through a predecessor map,
//! all-pairs results forward through a next-hop matrix. Both walks stop after
//! as many steps as there are vertices, so a corrupted structure yields an
//! error instead of looping.

use indexmap::IndexMap;

use crate::data_structures::Matrix;
use crate::graph::{Graph, Vertex, VertexIndex, Weight};
use crate::{Error, Result};

/// Walks predecessor links from `target` back to a vertex without a
/// predecessor and returns the vertices in root-to-target order.
///
/// The map alone cannot tell the source apart from a vertex that was never
/// reached, so an unreached target comes back as `[target]`. Use
/// [`ShortestPathResult::path_to`](crate::ShortestPathResult::path_to) to get
/// an empty path for unreachable targets instead.
pub fn reconstruct_backward<V>(predecessors: &IndexMap<V, Option<V>>, target: &V) -> Result<Vec<V>>
where
    V: Vertex,
{
    let limit = predecessors.len();
    let mut path = vec![target.clone()];
    let mut current = target;

    loop {
        let pred = predecessors
            .get(current)
            .ok_or_else(|| Error::unknown_vertex(current))?;
        match pred {
            Some(pred) => {
                if path.len() >= limit {
                    return Err(Error::PathCycle(limit));
                }
                path.push(pred.clone());
                current = pred;
            }
            None => break,
        }
    }

    path.reverse();
    Ok(path)
}

/// Index-based backward walk over a solver's own predecessor vector
pub(crate) fn walk_predecessors<V>(
    vertices: &VertexIndex<V>,
    predecessors: &[Option<usize>],
    target: usize,
) -> Result<Vec<V>>
where
    V: Vertex,
{
    let limit = predecessors.len();
    let mut indices = vec![target];
    let mut current = target;

    while let Some(pred) = predecessors.get(current).copied().flatten() {
        if indices.len() >= limit {
            return Err(Error::PathCycle(limit));
        }
        indices.push(pred);
        current = pred;
    }

    indices
        .into_iter()
        .rev()
        .map(|index| {
            vertices
                .vertex(index)
                .cloned()
                .ok_or_else(|| Error::BrokenPath(format!("no vertex at position {}", index)))
        })
        .collect()
}

/// Follows the next-hop matrix from `start` until `end`, returning every
/// visited vertex starting with `start`.
///
/// Returns an empty path when no successor is recorded for the pair, which
/// includes `start == end` unless a negative cycle runs through `start`.
pub fn reconstruct_forward<V>(
    next_hop: &Matrix<Option<usize>>,
    vertices: &VertexIndex<V>,
    start: &V,
    end: &V,
) -> Result<Vec<V>>
where
    V: Vertex,
{
    if next_hop.size() != vertices.len() {
        return Err(Error::BrokenPath(format!(
            "next-hop matrix is {0}x{0} for {1} vertices",
            next_hop.size(),
            vertices.len()
        )));
    }

    let target = vertices.require(end)?;
    let mut current = vertices.require(start)?;
    if next_hop.get(current, target).is_none() {
        return Ok(Vec::new());
    }

    let limit = vertices.len();
    let mut path = vec![start.clone()];
    let mut steps = 0;

    while current != target {
        if steps >= limit {
            return Err(Error::PathCycle(limit));
        }
        let hop = (*next_hop.get(current, target)).ok_or_else(|| {
            Error::BrokenPath(format!("no successor recorded after {:?} towards {:?}", path.last(), end))
        })?;
        let vertex = vertices
            .vertex(hop)
            .ok_or_else(|| Error::BrokenPath(format!("no vertex at position {}", hop)))?;
        path.push(vertex.clone());
        current = hop;
        steps += 1;
    }

    Ok(path)
}

/// Total weight of `path` in `graph`, taking the cheapest edge between each
/// pair of consecutive vertices.
///
/// `None` if some step has no edge. Paths with fewer than two vertices cost
/// zero.
pub fn path_cost<V, W, G>(graph: &G, path: &[V]) -> Option<W>
where
    V: Vertex,
    W: Weight,
    G: Graph<V, W> + ?Sized,
{
    path.windows(2).try_fold(W::zero(), |total, step| {
        graph.get_edge_weight(&step[0], &step[1]).map(|weight| total + weight)
    })
}
