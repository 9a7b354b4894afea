//! Iterative depth-first cycle detection.
//!
//! # Algorithm
//!
//! 1. Treat each task's `dependencies` entries as forward edges from its
//!    own 1-based position.
//! 2. Run depth-first traversal from every not-yet-visited position in
//!    ascending order, keeping an explicit frame stack (node + next-edge
//!    cursor) and one mutable path vector, pushed on entry and popped on
//!    exit.
//! 3. When an edge targets a node already on the active path, record the
//!    sub-path from that node's first occurrence through the current tip
//!    and do not descend along that edge.
//! 4. Fully explored nodes are marked visited and never re-entered, so
//!    each cycle is reported once even when several branches reach it.
//!
//! The explicit stack bounds memory by the batch size and keeps arbitrarily
//! deep dependency chains off the call stack.

use crate::task::Task;

/// One traversal frame: a node and the index of its next outgoing edge.
struct Frame {
    node: usize,
    next_dep: usize,
}

/// Finds all dependency cycles in a task batch.
///
/// Nodes are 1-based batch positions; edges follow each task's
/// `dependencies` list in order. References outside `1..=tasks.len()` are
/// skipped (they point at nothing and can never close a cycle). A task
/// listing its own position yields a one-element cycle.
///
/// Returns the list of cyclic paths in deterministic traversal order; an
/// empty list means the batch is acyclic.
///
/// # Examples
///
/// ```
/// use taskrank::cycle::detect_cycles;
/// use taskrank::task::Task;
///
/// let tasks = vec![
///     Task::new("a").with_dependencies(vec![2]),
///     Task::new("b").with_dependencies(vec![1]),
///     Task::new("c"),
/// ];
/// assert_eq!(detect_cycles(&tasks), vec![vec![1, 2]]);
/// ```
pub fn detect_cycles(tasks: &[Task]) -> Vec<Vec<usize>> {
    let len = tasks.len();
    let mut cycles: Vec<Vec<usize>> = Vec::new();

    // Index 0 unused so positions index directly.
    let mut visited = vec![false; len + 1];
    let mut on_path = vec![false; len + 1];
    let mut path: Vec<usize> = Vec::new();
    let mut stack: Vec<Frame> = Vec::new();

    for root in 1..=len {
        if visited[root] {
            continue;
        }
        visited[root] = true;
        on_path[root] = true;
        path.push(root);
        stack.push(Frame { node: root, next_dep: 0 });

        while let Some(frame) = stack.last_mut() {
            let node = frame.node;
            let deps = &tasks[node - 1].dependencies;

            if frame.next_dep >= deps.len() {
                // All edges explored: leave the active path.
                on_path[node] = false;
                path.pop();
                stack.pop();
                continue;
            }

            let target = deps[frame.next_dep];
            frame.next_dep += 1;

            if target == 0 || target > len {
                // Reference outside the batch: no node, no edge.
                continue;
            }
            if on_path[target] {
                let start = path.iter().position(|&p| p == target).unwrap_or(0);
                cycles.push(path[start..].to_vec());
            } else if !visited[target] {
                visited[target] = true;
                on_path[target] = true;
                path.push(target);
                stack.push(Frame { node: target, next_dep: 0 });
            }
            // Visited but off-path: a finished subgraph, nothing to do.
        }
    }

    cycles
}

#[cfg(test)]
mod tests {
    use super::*;

    fn batch(deps: &[&[usize]]) -> Vec<Task> {
        deps.iter()
            .enumerate()
            .map(|(index, d)| Task::new(format!("task-{}", index + 1)).with_dependencies(d.to_vec()))
            .collect()
    }

    #[test]
    fn test_two_task_cycle() {
        let tasks = batch(&[&[2], &[1], &[]]);
        let cycles = detect_cycles(&tasks);

        assert_eq!(cycles.len(), 1, "expected exactly one cycle: {cycles:?}");
        assert_eq!(cycles[0], vec![1, 2]);
        assert!(
            cycles.iter().all(|c| !c.contains(&3)),
            "task 3 must not appear in any cycle: {cycles:?}"
        );
    }

    #[test]
    fn test_acyclic_chain() {
        let tasks = batch(&[&[2], &[3], &[]]);
        assert!(detect_cycles(&tasks).is_empty());
    }

    #[test]
    fn test_empty_batch() {
        assert!(detect_cycles(&[]).is_empty());
    }

    #[test]
    fn test_self_reference_is_single_node_cycle() {
        let tasks = batch(&[&[], &[2]]);
        assert_eq!(detect_cycles(&tasks), vec![vec![2]]);
    }

    #[test]
    fn test_three_task_cycle_reports_full_path() {
        let tasks = batch(&[&[2], &[3], &[1]]);
        assert_eq!(detect_cycles(&tasks), vec![vec![1, 2, 3]]);
    }

    #[test]
    fn test_cycle_entered_from_outside_excludes_entry_node() {
        // 1 -> 2 -> 3 -> 2: the cycle is [2, 3], not [1, 2, 3].
        let tasks = batch(&[&[2], &[3], &[2]]);
        assert_eq!(detect_cycles(&tasks), vec![vec![2, 3]]);
    }

    #[test]
    fn test_disjoint_cycles_both_reported() {
        let tasks = batch(&[&[2], &[1], &[4], &[3]]);
        let cycles = detect_cycles(&tasks);
        assert_eq!(cycles, vec![vec![1, 2], vec![3, 4]]);
    }

    #[test]
    fn test_overlapping_cycles_reported_once_each() {
        // 1 -> 2 -> 1 and 1 -> 3 -> 1 share node 1.
        let tasks = batch(&[&[2, 3], &[1], &[1]]);
        let cycles = detect_cycles(&tasks);
        assert_eq!(cycles, vec![vec![1, 2], vec![1, 3]]);
    }

    #[test]
    fn test_finished_cycle_not_rediscovered_from_later_root() {
        // Task 3 points into the already-explored 1 <-> 2 cycle.
        let tasks = batch(&[&[2], &[1], &[1]]);
        let cycles = detect_cycles(&tasks);
        assert_eq!(cycles, vec![vec![1, 2]]);
    }

    #[test]
    fn test_out_of_range_references_ignored() {
        let tasks = batch(&[&[0, 99], &[1, 42]]);
        // Only real edge chain is 2 -> 1; no cycle.
        assert!(detect_cycles(&tasks).is_empty());
    }

    #[test]
    fn test_duplicate_edges_report_cycle_once() {
        let tasks = batch(&[&[2, 2], &[1]]);
        assert_eq!(detect_cycles(&tasks), vec![vec![1, 2]]);
    }

    #[test]
    fn test_long_chain_stays_iterative() {
        // A 10_000-task chain would overflow the call stack if traversal
        // recursed; the explicit stack must handle it.
        let mut tasks: Vec<Task> = (1..10_000)
            .map(|position| Task::new(format!("t{position}")).with_dependencies(vec![position + 1]))
            .collect();
        tasks.push(Task::new("last"));
        assert!(detect_cycles(&tasks).is_empty());

        // Close the loop and the whole chain becomes one cycle.
        let last = tasks.len();
        tasks[last - 1].dependencies = vec![1];
        let cycles = detect_cycles(&tasks);
        assert_eq!(cycles.len(), 1);
        assert_eq!(cycles[0].len(), last);
    }
}
