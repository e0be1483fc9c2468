use std::env;
use std::time::Instant;

use lcs_trace::{reconstruct, utils, Mode, Trace, TraceBuilder};
use sysinfo::{get_current_pid, ProcessRefreshKind, System};

fn main() {
    #[cfg(feature = "tracing")]
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let options = match Options::parse(env::args().skip(1)) {
        Ok(opts) => opts,
        Err(err) => {
            eprintln!("trace_probe: {err}");
            Options::print_help();
            std::process::exit(2);
        }
    };

    let mut sys = System::new();
    let mut measurements = Vec::new();

    let scenarios = [
        ("subsequence", TraceBuilder::new()),
        ("substring", TraceBuilder::new().mode(Mode::Substring)),
        ("subsequence_nocase", TraceBuilder::new().case_sensitive(false)),
    ];
    for &(name, ref builder) in &scenarios {
        measurements.extend(run_scenario(name, builder, &options, &mut sys));
    }

    let failed = report_failures(&measurements);

    if let Err(err) = options.format.write(&measurements) {
        eprintln!("trace_probe output error: {err}");
        std::process::exit(1);
    }
    if failed > 0 {
        std::process::exit(1);
    }
}

struct Options {
    format: OutputFormat,
    verify_limit: usize,
    max_len: usize,
}

impl Options {
    fn parse<I, T>(mut args: I) -> Result<Self, String>
    where
        I: Iterator<Item = T>,
        T: Into<String>,
    {
        let mut format = OutputFormat::Csv;
        let mut verify_limit = 256usize;
        let mut max_len = 1024usize;

        while let Some(arg) = args.next() {
            let arg: String = arg.into();
            if arg == "--help" || arg == "-h" {
                Options::print_help();
                std::process::exit(0);
            }
            let (key, inline) = match arg.split_once('=') {
                Some((k, v)) => (k.to_string(), Some(v.to_string())),
                None => (arg.clone(), None),
            };
            let mut value = || -> Result<String, String> {
                match &inline {
                    Some(v) => Ok(v.clone()),
                    None => args
                        .next()
                        .map(Into::into)
                        .ok_or_else(|| format!("missing value after {key}")),
                }
            };
            match key.as_str() {
                "--format" => format = OutputFormat::from_str(&value()?)?,
                "--verify-limit" => verify_limit = parse_count(&value()?, "verify limit")?,
                "--max-len" => max_len = parse_count(&value()?, "max length")?,
                _ => return Err(format!("unrecognized argument '{arg}'")),
            }
        }

        Ok(Self {
            format,
            verify_limit,
            max_len,
        })
    }

    fn print_help() {
        println!(
            "\
Usage: cargo run --bin trace_probe [-- <options>]

Options:
  --format <csv|table>          Output format (default: csv)
  --verify-limit <N>            Largest input length checked against the baseline (default: 256)
  --max-len <N>                 Largest input length to build (default: 1024)
  -h, --help                    Print this help message

Examples:
  cargo run --bin trace_probe
  cargo run --bin trace_probe -- --format table --max-len 512
"
        );
    }
}

fn parse_count(value: &str, what: &str) -> Result<usize, String> {
    value
        .parse::<usize>()
        .ok()
        .filter(|&n| n > 0)
        .ok_or_else(|| format!("{what} must be a positive integer, got '{value}'"))
}

#[derive(Copy, Clone)]
enum OutputFormat {
    Csv,
    Table,
}

impl OutputFormat {
    fn from_str(value: &str) -> Result<Self, String> {
        match value {
            "csv" => Ok(Self::Csv),
            "table" => Ok(Self::Table),
            other => Err(format!("unknown format '{other}'")),
        }
    }

    fn write(self, measurements: &[Measurement]) -> Result<(), String> {
        match self {
            OutputFormat::Csv => write_csv(measurements),
            OutputFormat::Table => write_table(measurements),
        }
    }
}

#[derive(Clone)]
struct Measurement {
    scenario: &'static str,
    len: usize,
    steps: usize,
    result_len: usize,
    above_limit: bool,
    wall_s: f64,
    rss_delta_kib: u64,
    verification_status: VerificationStatus,
    verification_detail: Option<String>,
}

#[derive(Clone, Copy)]
enum VerificationStatus {
    NotChecked,
    Passed,
    Failed,
}

impl VerificationStatus {
    fn label(&self) -> &'static str {
        match self {
            VerificationStatus::NotChecked => "not_checked",
            VerificationStatus::Passed => "passed",
            VerificationStatus::Failed => "failed",
        }
    }
}

fn run_scenario(
    scenario: &'static str,
    builder: &TraceBuilder,
    options: &Options,
    sys: &mut System,
) -> Vec<Measurement> {
    const SIZES: &[usize] = &[16, 32, 64, 128, 256, 512, 1024, 2048];
    let sizes: Vec<usize> = SIZES
        .iter()
        .copied()
        .filter(|&len| len <= options.max_len)
        .collect();
    sizes
        .into_iter()
        .map(|len| {
            let s1 = deterministic_text(len, 0);
            let s2 = deterministic_text(len, 3);
            let above_limit = builder.check(&s1, &s2).is_err();

            let before = rss_kib(sys);
            let start = Instant::now();
            let trace = builder.build(&s1, &s2);
            let wall_s = start.elapsed().as_secs_f64();
            let after = rss_kib(sys);

            let (status, detail) = if len <= options.verify_limit {
                verify(&trace, &s1, &s2)
            } else {
                (VerificationStatus::NotChecked, None)
            };

            Measurement {
                scenario,
                len,
                steps: trace.steps().len(),
                result_len: trace.outcome().len(),
                above_limit,
                wall_s,
                rss_delta_kib: after.saturating_sub(before),
                verification_status: status,
                verification_detail: detail,
            }
        })
        .collect()
}

fn verify(trace: &Trace, s1: &str, s2: &str) -> (VerificationStatus, Option<String>) {
    let a: Vec<char> = s1.chars().collect();
    let b: Vec<char> = s2.chars().collect();
    let expected = match trace.mode() {
        Mode::Subsequence => utils::lcs_len(&a, &b, trace.case_sensitive()),
        Mode::Substring => utils::longest_common_run(&a, &b, trace.case_sensitive()),
    };
    let got = trace.outcome().len() as u32;
    if got != expected {
        return (
            VerificationStatus::Failed,
            Some(format!("expected {expected}, got {got}")),
        );
    }
    if trace.steps().len() != a.len() * b.len() + 2 {
        return (
            VerificationStatus::Failed,
            Some(format!("unexpected step count {}", trace.steps().len())),
        );
    }
    match reconstruct(trace.steps()) {
        Some((matrix, backpointers))
            if &matrix == trace.matrix() && &backpointers == trace.backpointers() =>
        {
            (VerificationStatus::Passed, None)
        }
        _ => (
            VerificationStatus::Failed,
            Some("replay does not rebuild the tables".to_string()),
        ),
    }
}

/// Logs each failed measurement to stderr and returns how many there were.
fn report_failures(measurements: &[Measurement]) -> usize {
    let mut failed = 0;
    for m in measurements {
        if let VerificationStatus::Failed = m.verification_status {
            failed += 1;
            eprintln!(
                "failed: {} len={}: {}",
                m.scenario,
                m.len,
                m.verification_detail.as_deref().unwrap_or("")
            );
        }
    }
    failed
}

fn write_csv(measurements: &[Measurement]) -> Result<(), String> {
    println!("scenario,len,steps,result_len,above_limit,wall_s,rss_delta_kib,verification_status,verification_detail");
    for m in measurements {
        let detail = m
            .verification_detail
            .as_ref()
            .map(|s| s.replace('"', "'"))
            .unwrap_or_default();
        println!(
            "{},{},{},{},{},{:.3},{},{},\"{}\"",
            m.scenario,
            m.len,
            m.steps,
            m.result_len,
            m.above_limit,
            m.wall_s,
            m.rss_delta_kib,
            m.verification_status.label(),
            detail
        );
    }
    Ok(())
}

fn write_table(measurements: &[Measurement]) -> Result<(), String> {
    let col1 = measurements
        .iter()
        .map(|m| m.scenario.len())
        .max()
        .unwrap_or(0)
        .max("scenario".len());

    println!(
        "{:<col1$}  {:>6}  {:>9}  {:>10}  {:>10}  {:>14}  {:>12}  {}",
        "scenario", "len", "steps", "result_len", "wall_s", "rss_delta_kib", "status", "detail",
    );
    println!(
        "{:-<col1$}  {:-<6}  {:-<9}  {:-<10}  {:-<10}  {:-<14}  {:-<12}  {:-<12}",
        "", "", "", "", "", "", "", "",
    );
    for m in measurements {
        println!(
            "{:<col1$}  {:>6}  {:>9}  {:>10}  {:>10.3}  {:>14}  {:>12}  {}",
            m.scenario,
            m.len,
            m.steps,
            m.result_len,
            m.wall_s,
            m.rss_delta_kib,
            m.verification_status.label(),
            m.verification_detail.as_deref().unwrap_or(""),
        );
    }
    Ok(())
}

fn rss_kib(sys: &mut System) -> u64 {
    sys.refresh_processes_specifics(ProcessRefreshKind::new());
    if let Some(process) = get_current_pid().ok().and_then(|pid| sys.process(pid)) {
        process.memory() / 1024
    } else {
        0
    }
}

/// Mixed-case text over a small alphabet, rotated by `offset`.
fn deterministic_text(len: usize, offset: usize) -> String {
    const ALPHABET: &[char] = &['A', 'c', 'G', 't', 'a', 'C', 'g', 'T'];
    (0..len)
        .map(|i| ALPHABET[(i * 3 + offset) % ALPHABET.len()])
        .collect()
}
