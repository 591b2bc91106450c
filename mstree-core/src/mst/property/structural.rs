//! Property runners comparing the driver with the oracles and checking the
//! shape of its output.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::{Edge, MstOutcome, Termination, minimum_spanning_weight};

use super::oracle::{ForestSummary, exhaustive_forest, is_acyclic, sequential_forest};
use super::types::MstFixture;

fn run(vertex_count: usize, edges: &[Edge]) -> Result<MstOutcome, TestCaseError> {
    minimum_spanning_weight(vertex_count, edges.iter().copied()).map_err(|err| {
        TestCaseError::fail(format!(
            "kruskal failed: {err} (vertices={vertex_count}, edges={})",
            edges.len()
        ))
    })
}

fn compare(outcome: &MstOutcome, expected: ForestSummary, context: &str) -> TestCaseResult {
    if outcome.total_weight() != expected.total_weight {
        return Err(TestCaseError::fail(format!(
            "total weight mismatch: kruskal={}, oracle={} ({context})",
            outcome.total_weight(),
            expected.total_weight
        )));
    }
    if outcome.component_count() != expected.component_count {
        return Err(TestCaseError::fail(format!(
            "component count mismatch: kruskal={}, oracle={} ({context})",
            outcome.component_count(),
            expected.component_count
        )));
    }
    if outcome.accepted().len() != expected.edge_count {
        return Err(TestCaseError::fail(format!(
            "edge count mismatch: kruskal={}, oracle={} ({context})",
            outcome.accepted().len(),
            expected.edge_count
        )));
    }
    Ok(())
}

/// The driver matches exhaustive enumeration on a tiny graph.
pub(super) fn run_exhaustive_equivalence(vertex_count: usize, edges: &[Edge]) -> TestCaseResult {
    let outcome = run(vertex_count, edges)?;
    let expected = exhaustive_forest(vertex_count, edges);
    compare(
        &outcome,
        expected,
        &format!("vertices={vertex_count}, edges={edges:?}"),
    )
}

/// The driver matches the sequential oracle on a generated fixture.
pub(super) fn run_sequential_equivalence(fixture: &MstFixture) -> TestCaseResult {
    let outcome = run(fixture.vertex_count, &fixture.edges)?;
    let expected = sequential_forest(fixture.vertex_count, &fixture.edges);
    compare(
        &outcome,
        expected,
        &format!(
            "shape={:?}, vertices={}, edges={}",
            fixture.shape,
            fixture.vertex_count,
            fixture.edges.len()
        ),
    )
}

/// Accepted edges form a forest and the termination reason is consistent.
pub(super) fn run_structural_invariants(fixture: &MstFixture) -> TestCaseResult {
    let outcome = run(fixture.vertex_count, &fixture.edges)?;
    let context = format!(
        "shape={:?}, vertices={}, edges={}",
        fixture.shape,
        fixture.vertex_count,
        fixture.edges.len()
    );

    if !is_acyclic(fixture.vertex_count, outcome.accepted()) {
        return Err(TestCaseError::fail(format!(
            "accepted edges contain a cycle ({context})"
        )));
    }
    if outcome.accepted().len() + outcome.component_count() != fixture.vertex_count {
        return Err(TestCaseError::fail(format!(
            "forest has {} edges and {} components over {} vertices ({context})",
            outcome.accepted().len(),
            outcome.component_count(),
            fixture.vertex_count
        )));
    }
    if outcome.accepted().len() + outcome.discarded() > fixture.edges.len() {
        return Err(TestCaseError::fail(format!(
            "examined more edges than supplied ({context})"
        )));
    }

    let spans_everything = outcome.component_count() == 1;
    let expected_termination = if spans_everything && !outcome.accepted().is_empty() {
        Termination::AllConnected
    } else {
        Termination::Exhausted
    };
    if outcome.termination() != expected_termination {
        return Err(TestCaseError::fail(format!(
            "termination {:?} but expected {:?} ({context})",
            outcome.termination(),
            expected_termination
        )));
    }
    if expected_termination == Termination::Exhausted
        && outcome.accepted().len() + outcome.discarded() != fixture.edges.len()
    {
        return Err(TestCaseError::fail(format!(
            "exhausted run skipped edges ({context})"
        )));
    }
    Ok(())
}
