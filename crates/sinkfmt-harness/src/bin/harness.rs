//! CLI entrypoint for the sinkfmt conformance harness.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use sinkfmt_core::printf::{Segment, compile, print_with};
use sinkfmt_core::sink;
use sinkfmt_core::{ArgPolicy, config};
use sinkfmt_harness::fixtures::{FixtureArg, to_args};
use sinkfmt_harness::structured_log::LogEmitter;

/// Conformance tooling for sinkfmt.
#[derive(Debug, Parser)]
#[command(name = "sinkfmt-harness")]
#[command(about = "Fixture conformance harness for the sinkfmt template engine")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Verify the engine against JSON fixture sets.
    Verify {
        /// Fixture file, or directory containing fixture JSON files.
        #[arg(long, default_value = sinkfmt_harness::DEFAULT_FIXTURE_DIR)]
        fixture: PathBuf,
        /// Output report path (markdown); a JSON copy is written alongside.
        #[arg(long)]
        report: Option<PathBuf>,
        /// Structured JSONL log path.
        #[arg(long)]
        log: Option<PathBuf>,
        /// Policies to run: exact, widening or both.
        #[arg(long, default_value = "both")]
        policy: String,
    },
    /// Render one template to stdout.
    Render {
        template: String,
        /// Typed arguments, e.g. `i32:-5`, `u64:42`, `char:x`, `str:hello`.
        args: Vec<String>,
        /// Argument policy; defaults to the SINKFMT_ARG_POLICY setting.
        #[arg(long)]
        policy: Option<String>,
    },
    /// Validate a template and describe its segments.
    Check { template: String },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Verify {
            fixture,
            report,
            log,
            policy,
        } => {
            eprintln!("Verifying against fixtures in {}", fixture.display());
            let policies = sinkfmt_harness::parse_policies(&policy)?;
            let run_id = format!("run-{}", std::process::id());

            let report_doc = match &log {
                Some(path) => {
                    let mut emitter = LogEmitter::to_file(path, "harness", &run_id)?;
                    sinkfmt_harness::verify_fixtures(&fixture, &policies, &mut emitter)?
                }
                None => {
                    let mut emitter = LogEmitter::new(std::io::sink(), "harness", &run_id);
                    sinkfmt_harness::verify_fixtures(&fixture, &policies, &mut emitter)?
                }
            };

            eprintln!(
                "Verification complete: total={}, passed={}, failed={}",
                report_doc.summary.total, report_doc.summary.passed, report_doc.summary.failed
            );
            for failure in report_doc.summary.failures() {
                eprintln!("FAIL {}", failure.case_name);
                if let Some(diff) = &failure.diff {
                    eprint!("{diff}");
                }
            }

            if let Some(report_path) = report {
                eprintln!("Writing report to {}", report_path.display());
                std::fs::write(&report_path, report_doc.to_markdown())?;
                std::fs::write(report_path.with_extension("json"), report_doc.to_json())?;
            }
            if let Some(path) = log {
                eprintln!("Wrote structured log to {}", path.display());
            }

            if !report_doc.summary.all_passed() {
                return Err("Conformance verification failed".into());
            }
        }
        Command::Render {
            template,
            args,
            policy,
        } => {
            let policy = policy.map_or_else(config::arg_policy, |p| ArgPolicy::from_str_loose(&p));
            let fixture_args = args
                .iter()
                .map(|raw| FixtureArg::parse_typed(raw))
                .collect::<Result<Vec<_>, _>>()?;
            let args = to_args(&fixture_args)?;

            let mut out = sink::stdout();
            let result = print_with(&mut out, &template, &args, policy);
            out.flush()?;
            if let Err(err) = result {
                println!();
                return Err(format!("render failed ({}): {err}", err.kind_name()).into());
            }
            println!();
        }
        Command::Check { template } => {
            let segments = compile(&template)
                .map_err(|err| format!("invalid template ({}): {err}", err.kind_name()))?;
            let mut placeholders = 0;
            for segment in &segments {
                match segment {
                    Segment::Literal(text) => println!("literal     {text:?}"),
                    Segment::Placeholder(spec) => {
                        println!(
                            "placeholder #{placeholders}: length={:?} specifier={} width={:?} precision={:?} fill={:?} align={:?} expects={}",
                            spec.length.as_str(),
                            spec.specifier.as_char(),
                            spec.width,
                            spec.precision,
                            spec.fill,
                            spec.alignment,
                            expected_arg(spec),
                        );
                        placeholders += 1;
                    }
                }
            }
            eprintln!("OK: {} segments, {placeholders} placeholders", segments.len());
        }
    }

    Ok(())
}

fn expected_arg(spec: &sinkfmt_core::printf::PlaceholderSpec) -> &'static str {
    use sinkfmt_core::printf::Specifier;
    match spec.specifier {
        Specifier::Char => "char",
        Specifier::String => "str",
        _ => spec.length.int_kind().as_str(),
    }
}
