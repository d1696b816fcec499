use anyhow::{ensure, Result};
use clap::{Parser, Subcommand, ValueEnum};
use dchull::geom2::rand::{draw_cloud, CloudCfg, CloudShape, ReplayToken};
use dchull::geom2::Point2;
use dchull::hull::{check, ConvexHull, HullArena, MergeObserver, NodeId, Tangents};
use std::path::Path;
use std::time::Instant;
use tracing_subscriber::fmt::SubscriberBuilder;
use tracing_subscriber::EnvFilter;

mod io;
mod provenance;

use provenance::Payload;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Divide-and-conquer convex hull runner")]
struct Cmd {
    /// Optional run tag; propagated to logs and provenance sidecars
    #[arg(long)]
    tag: Option<String>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Compute the hull of a point file (.csv with x,y columns or .json)
    Hull {
        #[arg(long)]
        input: String,
        #[arg(long)]
        out: String,
        /// Log every merge (tangents and fused hull size) at debug level
        #[arg(long)]
        trace: bool,
        /// Check link consistency, convexity and enclosure before writing
        #[arg(long)]
        verify: bool,
    },
    /// Write a seeded random point cloud as CSV
    Sample {
        #[arg(long, default_value_t = 100)]
        count: usize,
        #[arg(long, value_enum, default_value_t = ShapeArg::Disc)]
        shape: ShapeArg,
        #[arg(long, default_value_t = 1.0)]
        radius: f64,
        /// Snap coordinates to this grid (0 disables)
        #[arg(long, default_value_t = 0.0)]
        grid: f64,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 0)]
        index: u64,
        #[arg(long)]
        out: String,
    },
    /// Print a small provenance JSON block
    Report,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ShapeArg {
    Square,
    Disc,
    Circle,
}

impl From<ShapeArg> for CloudShape {
    fn from(s: ShapeArg) -> Self {
        match s {
            ShapeArg::Square => CloudShape::Square,
            ShapeArg::Disc => CloudShape::Disc,
            ShapeArg::Circle => CloudShape::Circle,
        }
    }
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    SubscriberBuilder::default()
        .with_target(false)
        .with_env_filter(filter)
        .init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Hull {
            input,
            out,
            trace,
            verify,
        } => hull(input, out, trace, verify, cmd.tag),
        Action::Sample {
            count,
            shape,
            radius,
            grid,
            seed,
            index,
            out,
        } => {
            let cfg = CloudCfg {
                count,
                shape: shape.into(),
                radius,
                grid,
            };
            sample(cfg, ReplayToken { seed, index }, out, cmd.tag)
        }
        Action::Report => report(cmd.tag),
    }
}

/// Logs merge events through `tracing`; node tags are input row indices.
struct TraceMerges {
    merges: usize,
}

impl MergeObserver<usize> for TraceMerges {
    fn tangents_found(&mut self, arena: &HullArena<usize>, t: &Tangents) {
        let row = |id: NodeId| arena.point(id).tag;
        tracing::debug!(
            merge = self.merges,
            upper = ?(row(t.upper.0), row(t.upper.1)),
            lower = ?(row(t.lower.0), row(t.lower.1)),
            "tangents"
        );
    }

    fn hull_merged(&mut self, _arena: &HullArena<usize>, hull: &[NodeId]) {
        tracing::debug!(merge = self.merges, size = hull.len(), "merged");
        self.merges += 1;
    }
}

fn hull(input: String, out: String, trace: bool, verify: bool, tag: Option<String>) -> Result<()> {
    tracing::info!(input, out, trace, verify, tag = ?tag, "hull");
    let rows = io::read_points(Path::new(&input))?;
    let points: Vec<Point2<usize>> = rows
        .iter()
        .enumerate()
        .map(|(i, r)| Point2::new(r.x, r.y, i))
        .collect();

    let start = Instant::now();
    let hull = if trace {
        let mut observer = TraceMerges { merges: 0 };
        ConvexHull::with_observer(points, &mut observer)?
    } else {
        ConvexHull::from_points(points)?
    };
    let elapsed = start.elapsed();
    tracing::info!(
        points = rows.len(),
        vertices = hull.len(),
        elapsed_ms = elapsed.as_secs_f64() * 1e3,
        "hull_done"
    );

    if verify {
        ensure!(check::is_consistent(&hull), "hull links are inconsistent");
        ensure!(check::is_convex(&hull), "hull is not strictly convex");
        for (i, r) in rows.iter().enumerate() {
            ensure!(
                check::encloses(&hull, dchull::Vec2::new(r.x, r.y)),
                "input row {i} lies outside the hull"
            );
        }
        tracing::info!("verify_ok");
    }

    let report = io::HullReport::from_hull(&hull, rows.len(), elapsed);
    io::write_json(Path::new(&out), &report)?;
    let payload = Payload::new(serde_json::json!({
        "command": "hull",
        "trace": trace,
        "verify": verify,
        "points": rows.len(),
        "vertices": hull.len()
    }))
    .with_input(input)
    .with_tag(tag);
    provenance::write_sidecar(&out, payload)?;
    Ok(())
}

fn sample(cfg: CloudCfg, tok: ReplayToken, out: String, tag: Option<String>) -> Result<()> {
    tracing::info!(count = cfg.count, shape = ?cfg.shape, seed = tok.seed, index = tok.index, out, "sample");
    let pts = draw_cloud(cfg, tok);
    io::write_csv(Path::new(&out), &pts)?;
    let payload = Payload::new(serde_json::json!({
        "command": "sample",
        "count": cfg.count,
        "shape": format!("{:?}", cfg.shape),
        "radius": cfg.radius,
        "grid": cfg.grid,
        "seed": tok.seed,
        "index": tok.index
    }))
    .with_tag(tag);
    provenance::write_sidecar(&out, payload)?;
    Ok(())
}

fn report(tag: Option<String>) -> Result<()> {
    let payload = Payload::new(serde_json::json!({})).with_tag(tag);
    let doc = provenance::document(&payload, &[]);
    println!("{}", serde_json::to_string_pretty(&doc)?);
    Ok(())
}
