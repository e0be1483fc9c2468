use lcs_trace::{build, reconstruct, Direction, Rule, Step};
use proptest::prelude::*;

proptest! {
    #[test]
    fn step_count_is_cells_plus_two(
        a in "[xyz]{0,9}",
        b in "[xyz]{0,9}",
        case_sensitive in any::<bool>(),
        substring in any::<bool>(),
    ) {
        let trace = build(&a, &b, case_sensitive, substring);
        let cells = a.chars().count() * b.chars().count();
        let evals = trace.steps().iter().filter(|s| s.as_cell_eval().is_some()).count();
        prop_assert_eq!(evals, cells);
        prop_assert_eq!(trace.steps().len(), cells + 2);
        prop_assert_eq!(trace.stats().comparisons, cells as u64);
        prop_assert_eq!(trace.stats().cell_writes, cells as u64);
        prop_assert_eq!(trace.stats().matches + trace.stats().mismatches, cells as u64);
    }

    #[test]
    fn steps_reconstruct_tables(
        a in "[xyz]{0,9}",
        b in "[xyz]{0,9}",
        substring in any::<bool>(),
    ) {
        let trace = build(&a, &b, true, substring);
        let (matrix, backpointers) = reconstruct(trace.steps()).unwrap();
        prop_assert_eq!(&matrix, trace.matrix());
        prop_assert_eq!(&backpointers, trace.backpointers());
    }

    #[test]
    fn builds_are_deterministic(
        a in "[A-Da-d]{0,8}",
        b in "[A-Da-d]{0,8}",
        case_sensitive in any::<bool>(),
        substring in any::<bool>(),
    ) {
        let first = build(&a, &b, case_sensitive, substring);
        let second = build(&a, &b, case_sensitive, substring);
        prop_assert_eq!(first.steps(), second.steps());
        prop_assert_eq!(first, second);
    }

    #[test]
    fn deps_match_rule(
        a in "[xy]{1,8}",
        b in "[xy]{1,8}",
        substring in any::<bool>(),
    ) {
        let trace = build(&a, &b, true, substring);
        let matrix = trace.matrix();
        for eval in trace.steps().iter().filter_map(Step::as_cell_eval) {
            let (i, j) = eval.coord();
            match eval.rule {
                Rule::Match => {
                    prop_assert_eq!(eval.deps.as_slice(), &[(i - 1, j - 1)]);
                    prop_assert_eq!(eval.value, matrix[(i - 1, j - 1)] + 1);
                }
                Rule::MismatchUp => {
                    prop_assert_eq!(eval.deps.len(), 2);
                    prop_assert!(matrix[(i - 1, j)] >= matrix[(i, j - 1)]);
                    prop_assert_eq!(eval.value, matrix[(i - 1, j)]);
                }
                Rule::MismatchLeft => {
                    prop_assert_eq!(eval.deps.len(), 2);
                    prop_assert!(matrix[(i - 1, j)] < matrix[(i, j - 1)]);
                    prop_assert_eq!(eval.value, matrix[(i, j - 1)]);
                }
                Rule::SubstringMismatch => {
                    prop_assert!(substring);
                    prop_assert!(eval.deps.is_empty());
                    prop_assert_eq!(eval.value, 0);
                }
            }
            prop_assert_eq!(trace.backpointers()[(i, j)], eval.rule.direction());
        }
    }
}

#[test]
fn border_stays_zero_with_no_direction() {
    let trace = build("HELLO", "WORLD", true, false);
    let (m, b) = (trace.matrix(), trace.backpointers());
    for r in 0..m.rows() {
        assert_eq!(m[(r, 0)], 0);
        assert_eq!(b[(r, 0)], Direction::None);
    }
    for c in 0..m.cols() {
        assert_eq!(m[(0, c)], 0);
        assert_eq!(b[(0, c)], Direction::None);
    }
}

#[test]
fn last_step_mirrors_outcome() {
    let trace = build("ABCBDAB", "BDCABA", true, false);
    let last = trace.steps().last().and_then(Step::as_traceback).unwrap();
    assert_eq!(last, trace.outcome());
}

#[test]
fn trace_is_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<lcs_trace::Trace>();
}
