use std::path::Path;
use std::process::{exit, Command, ExitStatus};

use clap::{Parser, Subcommand, ValueEnum};

// ── CLI definition ─────────────────────────────────────────────────

#[derive(Parser)]
#[command(
    name = "xtask",
    about = "Task runner for the bike-share station workspace",
    long_about = "A unified CLI for running scenarios, parameter sweeps, benchmarks,\n\
                  and CI checks in the bike-share station workspace."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a station scenario (defaults unless a JSON config is given)
    Run {
        /// Path to a scenario JSON file
        #[arg(long, env = "BIKE_SCENARIO")]
        config: Option<String>,
    },
    /// Run a parameter sweep experiment
    Sweep {
        /// Parameter space preset
        #[arg(value_enum, default_value_t = SweepPreset::Reservation)]
        preset: SweepPreset,
    },
    /// Run Criterion benchmarks
    Bench,
    /// Compare benchmarks: stash changes, create baseline, restore, compare
    BenchCompare,
    /// Run CI checks (fmt, clippy, tests, examples, benchmarks)
    Ci {
        /// Job to run
        #[arg(value_enum, default_value_t = CiJob::Check)]
        job: CiJob,
    },
}

#[derive(Clone, ValueEnum)]
enum CiJob {
    /// Formatting, clippy, and tests
    Check,
    /// Build and run example scenarios
    Examples,
    /// Run benchmarks
    Bench,
    /// Run check + examples + bench
    All,
}

#[derive(Clone, Copy, ValueEnum)]
enum SweepPreset {
    Comprehensive,
    Reservation,
    Fleet,
    Ebike,
    Minimal,
}

impl SweepPreset {
    fn arg(self) -> &'static str {
        match self {
            Self::Comprehensive => "comprehensive",
            Self::Reservation => "reservation",
            Self::Fleet => "fleet",
            Self::Ebike => "ebike",
            Self::Minimal => "minimal",
        }
    }
}

// ── helpers ────────────────────────────────────────────────────────

fn step(label: &str) {
    eprintln!("\n=== {label} ===");
}

fn spawn(program: &str, args: &[&str]) -> ExitStatus {
    eprintln!("+ {program} {}", args.join(" "));
    Command::new(program).args(args).status().unwrap_or_else(|error| {
        eprintln!("failed to execute {program}: {error}");
        exit(1)
    })
}

fn run_cargo(args: &[&str]) {
    let status = spawn("cargo", args);
    if !status.success() {
        exit(status.code().unwrap_or(1));
    }
}

fn run_git(args: &[&str]) {
    let status = spawn("git", args);
    if !status.success() {
        exit(status.code().unwrap_or(1));
    }
}

fn bench(extra: &[&str]) {
    let mut args = vec!["bench", "--package", "bike_core", "--bench", "performance"];
    if !extra.is_empty() {
        args.push("--");
        args.extend_from_slice(extra);
    }
    run_cargo(&args);
}

// ── CI jobs ────────────────────────────────────────────────────────

fn ci_check() {
    step("Check formatting");
    run_cargo(&["fmt", "--all", "--", "--check"]);

    step("Clippy");
    run_cargo(&[
        "clippy",
        "--all-targets",
        "--all-features",
        "--",
        "-D",
        "warnings",
    ]);

    step("Test bike_core");
    run_cargo(&["test", "-p", "bike_core"]);

    step("Test bike_experiments");
    run_cargo(&["test", "-p", "bike_experiments"]);
}

fn ci_examples() {
    step("Run scenario_run (default scenario)");
    run_cargo(&[
        "run",
        "-p",
        "bike_core",
        "--example",
        "scenario_run",
        "--release",
    ]);

    step("Run parameter_sweep (minimal space)");
    run_cargo(&[
        "run",
        "-p",
        "bike_experiments",
        "--example",
        "parameter_sweep",
        "--release",
        "--",
        "minimal",
    ]);
}

fn ci_bench() {
    step("Run benchmarks");
    bench(&[]);
}

// ── main ───────────────────────────────────────────────────────────

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run { config } => {
            let mut args = vec!["run", "-p", "bike_core", "--example", "scenario_run", "--release"];
            if let Some(path) = config.as_deref() {
                args.extend(["--", path]);
            }
            run_cargo(&args);
        }
        Commands::Sweep { preset } => {
            run_cargo(&[
                "run",
                "-p",
                "bike_experiments",
                "--example",
                "parameter_sweep",
                "--release",
                "--",
                preset.arg(),
            ]);
        }
        Commands::Bench => bench(&[]),
        Commands::BenchCompare => {
            let baseline_dir = Path::new("target/criterion");
            if baseline_dir.exists() {
                step("Removing existing benchmark data");
                if let Err(error) = std::fs::remove_dir_all(baseline_dir) {
                    eprintln!("failed to remove target/criterion: {error}");
                    exit(1);
                }
            }

            step("Stashing current changes");
            run_git(&[
                "stash",
                "push",
                "-m",
                "Temporary stash for benchmark comparison",
            ]);

            step("Running benchmark to create baseline");
            bench(&["--save-baseline", "main"]);

            step("Reapplying changes");
            run_git(&["stash", "pop"]);

            step("Running benchmark comparing against baseline");
            bench(&["--baseline", "main"]);

            eprintln!("\nDone! Check the output above to see performance comparison.");
        }
        Commands::Ci { job } => {
            match job {
                CiJob::Check => ci_check(),
                CiJob::Examples => ci_examples(),
                CiJob::Bench => ci_bench(),
                CiJob::All => {
                    ci_check();
                    ci_examples();
                    ci_bench();
                }
            }
            eprintln!("\nCI job passed.");
        }
    }
}
