//! Offline planner: run the advice pipeline over a transcript file and print the report.

use advice_mind::config::Config;
use advice_mind::pipeline::AdvicePipeline;
use advice_mind::pipeline::auxiliary::AuxiliaryAnalysis;
use advice_mind::pipeline::types::Utterance;
use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "plan", about = "Generate an action plan from a transcript JSON file")]
struct Args {
    /// Path to a JSON file containing [{"speaker": ..., "text": ...}, ...]
    transcript: PathBuf,

    /// Optional path to an auxiliary analysis JSON file
    #[arg(long)]
    analysis: Option<PathBuf>,

    /// Explicit user goal; repeat for multiple goals
    #[arg(long = "goal")]
    goals: Vec<String>,

    /// Pretty-print the report JSON
    #[arg(long)]
    pretty: bool,
}

fn main() -> Result<()> {
    advice_mind::load_env();
    let args = Args::parse();

    let config = Config::load()?;

    let raw = std::fs::read_to_string(&args.transcript)
        .with_context(|| format!("reading transcript {}", args.transcript.display()))?;
    let transcript: Vec<Utterance> =
        serde_json::from_str(&raw).context("transcript must be a JSON array of {speaker, text}")?;

    let auxiliary = match &args.analysis {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("reading analysis {}", path.display()))?;
            serde_json::from_str(&raw).context("analysis file is not a valid analysis payload")?
        }
        None => AuxiliaryAnalysis::default(),
    };

    let pipeline = AdvicePipeline::new(config.pipeline);
    let report = pipeline.generate_advice(&transcript, &auxiliary, &args.goals)?;

    let out = if args.pretty {
        serde_json::to_string_pretty(&report)?
    } else {
        serde_json::to_string(&report)?
    };
    println!("{}", out);

    Ok(())
}
