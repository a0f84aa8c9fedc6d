// Cyclomatic complexity scoring
//
// A function's score is 1 (the base path) plus the number of
// decision-contributing nodes anywhere in its body. Counting is flat: a
// decision nested three loops deep still contributes exactly 1, and a switch
// contributes 1 no matter how many cases it carries. Downstream consumers
// depend on these numbers, so the per-case variant of the metric is
// deliberately not used here.

use crate::parser::{Stmt, StmtKind};

/// Count decision-contributing nodes in a statement subtree
pub fn decision_points(stmt: &Stmt) -> usize {
    let own = match stmt.kind {
        StmtKind::If
        | StmtKind::Switch
        | StmtKind::For
        | StmtKind::While
        | StmtKind::DoWhile
        | StmtKind::Ternary => 1,
        StmtKind::Block | StmtKind::Other => 0,
    };

    own + stmt
        .children
        .iter()
        .map(decision_points)
        .sum::<usize>()
}

/// Score a function body. Always at least 1.
pub fn score(body: &Stmt) -> usize {
    1 + decision_points(body)
}
