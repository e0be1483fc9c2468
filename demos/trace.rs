//! Example: step through an LCS table build.
//!
//! Run with:
//! `cargo run --example trace -- ABCBDAB BDCABA`
//! Add `--substring` or `--ignore-case` to switch modes.

use lcs_trace::{Direction, Frame, Replay, Step, TraceBuilder};

fn main() {
    let mut words = Vec::new();
    let mut builder = TraceBuilder::new();
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--substring" => builder = builder.substring(true),
            "--ignore-case" => builder = builder.case_sensitive(false),
            _ => words.push(arg),
        }
    }
    let s1 = words.first().map(String::as_str).unwrap_or("ABCBDAB");
    let s2 = words.get(1).map(String::as_str).unwrap_or("BDCABA");

    if let Err(err) = builder.check(s1, s2) {
        eprintln!("warning: {err}; the table will be large");
    }
    let trace = builder.build(s1, s2);

    let replay = Replay::new(trace.steps());
    for (k, step) in trace.steps().iter().enumerate() {
        let kind = step.kind();
        match step {
            Step::Init { rows, cols } => println!("[{k}] {kind} {rows}x{cols}"),
            Step::CellEval(e) => {
                let deps: Vec<String> = e.deps.iter().map(|(r, c)| format!("({r},{c})")).collect();
                println!(
                    "[{k}] {kind} ({}, {}) {} vs {} -> {:?} = {} deps [{}]",
                    e.row,
                    e.col,
                    e.row_char,
                    e.col_char,
                    e.rule,
                    e.value,
                    deps.join(" ")
                );
            }
            Step::Traceback(tb) => println!(
                "[{k}] {kind} \"{}\" (len {}) path {:?}",
                tb.result_string(),
                tb.len(),
                tb.path
            ),
        }
    }

    if let Ok(frame) = replay.frame_at(replay.len() - 1) {
        print_frame(&frame, s1, s2);
    }

    let stats = trace.stats();
    println!(
        "comparisons: {}, cell writes: {}, matches: {}",
        stats.comparisons, stats.cell_writes, stats.matches
    );
}

fn print_frame(frame: &Frame, s1: &str, s2: &str) {
    let header: String = s2.chars().map(|c| format!("{c:>4}")).collect();
    println!("\n      {header}");
    let labels: Vec<char> = std::iter::once(' ').chain(s1.chars()).collect();
    for (r, row_label) in labels.iter().enumerate() {
        let mut line = format!("{row_label:>2}");
        for c in 0..frame.values.cols() {
            let marker = match frame.directions[(r, c)] {
                Direction::Diagonal => '\\',
                Direction::Up => '|',
                Direction::Left => '-',
                Direction::None => ' ',
            };
            let value = frame.values[(r, c)].map_or(".".to_string(), |v| v.to_string());
            let star = if frame.on_path((r, c)) { '*' } else { ' ' };
            line.push_str(&format!(" {marker}{value:>1}{star}"));
        }
        println!("{line}");
    }
    println!();
}
