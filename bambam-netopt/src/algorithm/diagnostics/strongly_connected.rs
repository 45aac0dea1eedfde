use crate::algorithm::shortest_path::DenseGraph;

/// labels each stop of the graph with its strongly connected component,
/// using Kosaraju's algorithm with explicit stacks. components are numbered
/// from 0 in discovery order.
///
/// # Returns
///
/// The number of components and the component label of each stop index.
pub fn strongly_connected_components(graph: &DenseGraph) -> (usize, Vec<usize>) {
    let n = graph.n_stops();
    let mut reverse: Vec<Vec<usize>> = vec![vec![]; n];
    for src in 0..n {
        for (dst, _) in graph.out_adjacency(src) {
            reverse[*dst].push(src);
        }
    }

    // first pass: order stops by DFS finish time on the forward graph
    let mut visited = vec![false; n];
    let mut finish_order: Vec<usize> = Vec::with_capacity(n);
    for root in 0..n {
        if visited[root] {
            continue;
        }
        visited[root] = true;
        let mut stack: Vec<(usize, usize)> = vec![(root, 0)];
        while let Some((node, next_child)) = stack.pop() {
            let adjacency = graph.out_adjacency(node);
            if next_child < adjacency.len() {
                stack.push((node, next_child + 1));
                let (child, _) = adjacency[next_child];
                if !visited[child] {
                    visited[child] = true;
                    stack.push((child, 0));
                }
            } else {
                finish_order.push(node);
            }
        }
    }

    // second pass: flood the reverse graph in reverse finish order
    let mut component: Vec<Option<usize>> = vec![None; n];
    let mut n_components = 0;
    for root in finish_order.into_iter().rev() {
        if component[root].is_some() {
            continue;
        }
        component[root] = Some(n_components);
        let mut stack = vec![root];
        while let Some(node) = stack.pop() {
            for pred in reverse[node].iter() {
                if component[*pred].is_none() {
                    component[*pred] = Some(n_components);
                    stack.push(*pred);
                }
            }
        }
        n_components += 1;
    }

    let labels = component.into_iter().map(|c| c.unwrap_or(0)).collect();
    (n_components, labels)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::network::{EdgeMode, StopId, TransitGraph};

    #[test]
    fn test_cycle_and_tail() {
        let mut graph = TransitGraph::empty();
        let s = |x: &str| StopId::from(x);
        graph.add_edge(&s("a"), &s("b"), EdgeMode::Transit, 1.0);
        graph.add_edge(&s("b"), &s("c"), EdgeMode::Transit, 1.0);
        graph.add_edge(&s("c"), &s("a"), EdgeMode::Transit, 1.0);
        graph.add_edge(&s("c"), &s("d"), EdgeMode::Transit, 1.0);
        graph.add_stop(&s("e"));

        let dense = DenseGraph::from_graph(&graph);
        let (count, labels) = strongly_connected_components(&dense);
        assert_eq!(count, 3);
        assert_eq!(labels[0], labels[1]);
        assert_eq!(labels[1], labels[2]);
        assert_ne!(labels[2], labels[3]);
        assert_ne!(labels[3], labels[4]);
    }
}
