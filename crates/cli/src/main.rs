use anyhow::{bail, Context, Result};
use biarc::connector::{connect, ConnectOpts};
use clap::{Args, Parser, Subcommand};
use std::path::Path;
use tracing_subscriber::fmt::SubscriberBuilder;

mod dto;
mod provenance;

use dto::{parse_segment, segment_from_repr, ConnectorOut, PairIn, PairOut, SegmentRepr};
use provenance::{write_sidecar, Payload};

#[derive(Parser)]
#[command(name = "biarc-cli")]
#[command(about = "Tangent-arc connectors between directed segments")]
struct Cmd {
    /// Optional run tag; propagated to outputs and logs
    #[arg(long)]
    vk: Option<String>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Args, Clone, Copy)]
struct SolveArgs {
    /// Keep both roots of the algebraic candidate equation
    #[arg(long)]
    all_roots: bool,
    /// Weight of the second segment in the algebraic candidates
    #[arg(long, default_value_t = 1.0)]
    tension: f64,
}

impl SolveArgs {
    fn opts(self) -> ConnectOpts {
        ConnectOpts::new(!self.all_roots, self.tension)
    }
}

#[derive(Subcommand)]
enum Action {
    /// Connect one pair and print the result as JSON
    Connect {
        /// First segment as x0,y0,x1,y1; the connector starts at its end
        #[arg(long, value_parser = parse_segment, allow_hyphen_values = true)]
        from: SegmentRepr,
        /// Second segment as x0,y0,x1,y1; the connector ends at its start
        #[arg(long, value_parser = parse_segment, allow_hyphen_values = true)]
        to: SegmentRepr,
        /// Also emit a polyline with this many steps per arc
        #[arg(long)]
        samples: Option<usize>,
        #[command(flatten)]
        solve: SolveArgs,
    },
    /// Connect every pair of a JSON file and write results with a provenance sidecar
    Batch {
        #[arg(long)]
        input: String,
        #[arg(long)]
        out: String,
        #[command(flatten)]
        solve: SolveArgs,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Connect {
            from,
            to,
            samples,
            solve,
        } => connect_one(from, to, samples, solve, cmd.vk),
        Action::Batch { input, out, solve } => batch(&input, &out, solve, cmd.vk),
        Action::Report => report(cmd.vk),
    }
}

fn connect_one(
    from: SegmentRepr,
    to: SegmentRepr,
    samples: Option<usize>,
    solve: SolveArgs,
    vk: Option<String>,
) -> Result<()> {
    tracing::info!(
        ?from,
        ?to,
        tension = solve.tension,
        all_roots = solve.all_roots,
        vk = ?vk,
        "connect"
    );
    let res = connect(
        &segment_from_repr(from),
        &segment_from_repr(to),
        solve.opts(),
    );
    match res {
        Ok(c) => {
            let out = ConnectorOut::new(&c, samples);
            println!("{}", serde_json::to_string_pretty(&out)?);
            Ok(())
        }
        Err(e) => bail!("connect failed: {e}"),
    }
}

/// Results of a batch run; `failed` counts records with an `error`.
fn run_batch(pairs: &[PairIn], solve: SolveArgs) -> (Vec<PairOut>, usize) {
    let opts = solve.opts();
    let mut failed = 0;
    let out = pairs
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let res = connect(&segment_from_repr(p.from), &segment_from_repr(p.to), opts);
            if let Err(e) = &res {
                failed += 1;
                tracing::debug!(index = i, error = %e, "pair failed");
            }
            PairOut::new(i, res)
        })
        .collect();
    (out, failed)
}

fn batch(input: &str, out: &str, solve: SolveArgs, vk: Option<String>) -> Result<()> {
    tracing::info!(input, out, vk = ?vk, "batch");
    let raw = std::fs::read(input).with_context(|| format!("reading {input}"))?;
    let pairs: Vec<PairIn> =
        serde_json::from_slice(&raw).with_context(|| format!("parsing {input}"))?;
    let (results, failed) = run_batch(&pairs, solve);
    tracing::info!(pairs = pairs.len(), failed, "batch_done");

    let out_path = Path::new(out);
    if let Some(parent) = out_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(out_path, serde_json::to_vec_pretty(&results)?)
        .with_context(|| format!("writing {out}"))?;

    let payload = Payload::new(serde_json::json!({
        "input": input,
        "pairs": pairs.len(),
        "failed": failed,
        "shortest": !solve.all_roots,
        "tension": solve.tension
    }))
    .with_tag(vk);
    let prov = write_sidecar(out_path, payload)?;
    tracing::info!(provenance = %prov.display(), "wrote");
    Ok(())
}

fn report(vk: Option<String>) -> Result<()> {
    let obj = provenance::document(&Payload::new(serde_json::json!({})).with_tag(vk), &[]);
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
