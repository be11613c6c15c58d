use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use planar::prelude::*;
use serde::Serialize;
use std::path::Path;
use tracing_subscriber::fmt::SubscriberBuilder;

mod args;
mod points;
mod provenance;

use args::{parse_matrix, parse_vec2};
use provenance::TransformRecord;

#[derive(Parser)]
#[command(name = "planar-cli")]
#[command(about = "Batch 2D transforms and vector checks")]
struct Cmd {
    /// Optional run label; recorded in provenance sidecars and logs
    #[arg(long)]
    tag: Option<String>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Apply an affine transform to every row of an x,y CSV
    Transform {
        #[arg(long)]
        input: String,
        /// Coefficients m11,m12,m21,m22,m31,m32
        #[arg(long, allow_hyphen_values = true)]
        matrix: String,
        #[arg(long)]
        out: String,
        /// Round results to the nearest integer (ties to even)
        #[arg(long, conflicts_with = "truncate")]
        round: bool,
        /// Drop the fractional part of results
        #[arg(long)]
        truncate: bool,
    },
    /// Classify the winding of the triple (a, center, c)
    Winding {
        #[arg(long, allow_hyphen_values = true)]
        a: String,
        #[arg(long, allow_hyphen_values = true)]
        center: String,
        #[arg(long, allow_hyphen_values = true)]
        c: String,
    },
    /// Safe-normalize a single vector
    Normalize {
        #[arg(long, allow_hyphen_values = true)]
        v: String,
    },
    /// Print a small provenance JSON block
    Report,
}

/// Post-processing applied to every transformed point.
#[derive(Clone, Copy, Debug, PartialEq)]
enum Snap {
    None,
    Round,
    Truncate,
}

impl Snap {
    fn apply(self, p: &mut Vec2) {
        match self {
            Snap::None => {}
            Snap::Round => round(p),
            Snap::Truncate => truncate(p),
        }
    }

    fn name(self) -> &'static str {
        match self {
            Snap::None => "none",
            Snap::Round => "round",
            Snap::Truncate => "truncate",
        }
    }
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Transform {
            input,
            matrix,
            out,
            round,
            truncate,
        } => {
            let snap = if round {
                Snap::Round
            } else if truncate {
                Snap::Truncate
            } else {
                Snap::None
            };
            let matrix = parse_matrix(&matrix)?;
            run_transform(&input, &matrix, &out, snap, cmd.tag)
        }
        Action::Winding { a, center, c } => {
            let doc = winding(parse_vec2(&a)?, parse_vec2(&center)?, parse_vec2(&c)?);
            println!("{}", serde_json::to_string_pretty(&doc)?);
            Ok(())
        }
        Action::Normalize { v } => {
            let v = parse_vec2(&v)?;
            let n = normalized(v);
            tracing::info!(x = v.x, y = v.y, "normalize");
            println!("{}", serde_json::json!({ "x": n.x, "y": n.y }));
            Ok(())
        }
        Action::Report => report(cmd.tag),
    }
}

fn run_transform(
    input: &str,
    matrix: &Matrix2D,
    out: &str,
    snap: Snap,
    tag: Option<String>,
) -> Result<()> {
    tracing::info!(input, out, snap = snap.name(), tag = ?tag, "transform");
    let src = points::read_points(input)?;
    let mut dst = vec![Vec2::zeros(); src.len()];
    transform_slice(&src, matrix, &mut dst)?;
    for p in dst.iter_mut() {
        snap.apply(p);
    }
    tracing::info!(rows = dst.len(), "transformed");

    let out_path = Path::new(out);
    points::write_points(out_path, &dst)?;
    let record =
        TransformRecord::new(input, out_path, *matrix, snap.name(), dst.len()).with_tag(tag);
    let prov = provenance::write_sidecar(out_path, &record)
        .with_context(|| format!("writing provenance for {out}"))?;
    tracing::info!(provenance = %prov.display(), "wrote");
    Ok(())
}

#[derive(Debug, Serialize)]
struct WindingReport {
    cross: f32,
    ccw: bool,
}

fn winding(a: Vec2, center: Vec2, c: Vec2) -> WindingReport {
    let report = WindingReport {
        cross: cross(center - a, c - center),
        ccw: is_triangle_ccw(a, center, c),
    };
    tracing::info!(cross = report.cross, ccw = report.ccw, "winding");
    report
}

fn report(tag: Option<String>) -> Result<()> {
    let obj = serde_json::json!({
        "code_rev": provenance::code_rev(),
        "planar_version": planar::VERSION,
        "tag": tag,
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
