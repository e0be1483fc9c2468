use lcs_trace::{build, Direction, Mode, Rule, Step, TraceBuilder};

fn is_subsequence(needle: &str, hay: &str) -> bool {
    let mut it = hay.chars();
    needle.chars().all(|c| it.any(|h| h == c))
}

#[test]
fn textbook_subsequence_example() {
    let trace = build("ABCBDAB", "BDCABA", true, false);
    let result = trace.result();
    assert_eq!(result.chars().count(), 4);
    assert!(
        ["BCBA", "BDAB", "BCAB"].contains(&result.as_str()),
        "unexpected LCS {result}"
    );
    assert!(is_subsequence(&result, "ABCBDAB"));
    assert!(is_subsequence(&result, "BDCABA"));
    assert_eq!(trace.matrix()[(7, 6)], 4);
}

#[test]
fn textbook_substring_example() {
    let trace = build("ABCBDAB", "BDCABA", true, true);
    assert_eq!(trace.mode(), Mode::Substring);
    // Row 2 is the first to reach a run of two ("AB" ending at column 5).
    assert_eq!(trace.result(), "AB");
    assert_eq!(trace.outcome().path, vec![(2, 5), (1, 4)]);
}

#[test]
fn case_insensitive_full_match() {
    let insensitive = build("ABC", "abc", false, false);
    assert_eq!(insensitive.outcome().len(), 3);
    assert_eq!(insensitive.result(), "ABC");

    let sensitive = build("ABC", "abc", true, false);
    assert_eq!(sensitive.outcome().len(), 0);
    assert!(sensitive.outcome().path.len() <= 3 + 3);
}

#[test]
fn empty_inputs_in_every_mode() {
    for (a, b) in [("", "XYZ"), ("XYZ", ""), ("", "")] {
        for case_sensitive in [true, false] {
            for substring in [true, false] {
                let trace = build(a, b, case_sensitive, substring);
                assert!(trace.matrix().cells().all(|(_, v)| *v == 0));
                assert_eq!(trace.cell_eval_count(), 0);
                assert_eq!(trace.steps().len(), 2);
                assert!(trace.outcome().is_empty());
                assert!(trace.outcome().path.is_empty());
            }
        }
    }
}

#[test]
fn subsequence_path_walks_from_terminal_cell() {
    let trace = build("AGGTAB", "GXTXAYB", true, false);
    assert_eq!(trace.result(), "GTAB");
    let path = &trace.outcome().path;
    assert_eq!(path.first(), Some(&(6, 7)));
    for w in path.windows(2) {
        let (a, b) = (w[0], w[1]);
        let step = (a.0 - b.0, a.1 - b.1);
        assert!(matches!(step, (1, 1) | (1, 0) | (0, 1)), "bad step {a:?} -> {b:?}");
        let dir = trace.backpointers()[a];
        assert_eq!(dir.predecessor(a), Some(b));
    }
}

#[test]
fn mismatch_ties_record_up() {
    // No matches at all: every cell is a 0/0 tie.
    let trace = build("AB", "CD", true, false);
    for step in trace.steps().iter().filter_map(Step::as_cell_eval) {
        assert_eq!(step.rule, Rule::MismatchUp);
        assert_eq!(step.deps.as_slice(), &[(step.row - 1, step.col), (step.row, step.col - 1)]);
    }
    assert!(trace
        .backpointers()
        .cells()
        .filter(|((r, c), _)| *r > 0 && *c > 0)
        .all(|(_, d)| *d == Direction::Up));
}

#[test]
fn substring_mismatches_have_no_direction() {
    let trace = build("abxcd", "abycd", true, true);
    assert_eq!(trace.result(), "ab");
    let eval = trace
        .steps()
        .iter()
        .filter_map(Step::as_cell_eval)
        .find(|e| e.coord() == (3, 3))
        .copied()
        .unwrap();
    assert_eq!(eval.rule, Rule::SubstringMismatch);
    assert!(eval.deps.is_empty());
    assert_eq!(trace.backpointers()[(3, 3)], Direction::None);
}

#[test]
fn substring_leftmost_column_wins_in_best_row() {
    // "ab" occurs twice in s2; both runs end in row 2.
    let trace = build("ab", "abab", true, true);
    assert_eq!(trace.result(), "ab");
    assert_eq!(trace.outcome().path, vec![(2, 2), (1, 1)]);
}

#[test]
fn substring_first_best_row_is_kept() {
    // Two runs of length 2 in s1: "xy" (rows 1-2) and "zw" (rows 4-5).
    let trace = build("xyqzw", "zwxy", true, true);
    assert_eq!(trace.result(), "xy");
    assert_eq!(trace.outcome().path, vec![(2, 4), (1, 3)]);
}

#[test]
fn builder_and_free_function_agree() {
    let via_builder = TraceBuilder::new()
        .case_sensitive(false)
        .mode(Mode::Substring)
        .build("Hello World", "yellow");
    let via_fn = build("Hello World", "yellow", false, true);
    assert_eq!(via_builder, via_fn);
    assert_eq!(via_fn.result(), "ello");
}

#[test]
fn unicode_characters_are_single_cells() {
    let trace = build("naïve", "NAÏVE", false, false);
    assert_eq!(trace.matrix().rows(), 6);
    assert_eq!(trace.matrix().cols(), 6);
    assert_eq!(trace.result(), "naïve");
}
