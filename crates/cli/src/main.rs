//! Reporting front end for the terminal Fano 3-tope classification.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use tracing_subscriber::fmt::SubscriberBuilder;

use fano3::grow::{enlarge, seed_registry};
use fano3::registry::Registry;
use fano3::seeds::seed_polytopes;

mod report;

#[derive(Parser)]
#[command(name = "fano3")]
#[command(about = "Terminal Fano 3-tope classifier")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Run the full classification and write the polytope report
    Classify {
        /// Report path
        #[arg(long, default_value = "Polytope_Data.txt")]
        out: String,
        /// Optional JSON run summary path
        #[arg(long)]
        summary: Option<String>,
    },
    /// Print the thirteen minimal seed polytopes
    Seeds,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Classify { out, summary } => classify_cmd(&out, summary.as_deref()),
        Action::Seeds => seeds_cmd(),
    }
}

fn classify_cmd(out: &str, summary: Option<&str>) -> Result<()> {
    let (mut reg, seeds) = seed_registry();
    let total = seeds.len();
    for (i, id) in seeds.into_iter().enumerate() {
        tracing::info!(seed = i + 1, total, "growing minimal polytope");
        enlarge(&mut reg, id);
        tracing::info!(discovered = reg.len(), "registry size after seed");
    }
    reg.assign_ids();
    tracing::info!(polytopes = reg.len(), "classification finished");

    let out_path = Path::new(out);
    if let Some(parent) = out_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let file = File::create(out_path).with_context(|| format!("creating {out}"))?;
    let mut writer = BufWriter::new(file);
    report::write_report(&reg, &mut writer).with_context(|| format!("writing {out}"))?;
    tracing::info!(path = out, "report written");

    if let Some(summary_path) = summary {
        let doc = RunSummary::from_registry(&reg, out);
        std::fs::write(summary_path, serde_json::to_vec_pretty(&doc)?)
            .with_context(|| format!("writing {summary_path}"))?;
        tracing::info!(path = summary_path, "summary written");
    }
    Ok(())
}

fn seeds_cmd() -> Result<()> {
    for (i, p) in seed_polytopes().iter().enumerate() {
        let verts: Vec<String> = p
            .vertices()
            .iter()
            .map(|v| format!("({},{},{})", v.x, v.y, v.z))
            .collect();
        println!(
            "seed {:2}  vertices {}  simplicial {}  {}",
            i + 1,
            p.num_vertices(),
            u8::from(p.is_simplicial()),
            verts.join(" ")
        );
    }
    Ok(())
}

/// Machine-readable counts for a finished run.
#[derive(Serialize)]
struct RunSummary {
    total: usize,
    by_vertex_count: BTreeMap<usize, usize>,
    simplicial: usize,
    minimal: usize,
    maximal: usize,
    report: String,
}

impl RunSummary {
    fn from_registry(reg: &Registry, report: &str) -> Self {
        let mut by_vertex_count = BTreeMap::new();
        let (mut simplicial, mut minimal, mut maximal) = (0, 0, 0);
        for (_, e) in reg.iter() {
            *by_vertex_count.entry(e.poly.num_vertices()).or_insert(0) += 1;
            simplicial += usize::from(e.poly.is_simplicial());
            minimal += usize::from(e.parents.is_empty());
            maximal += usize::from(e.children.is_empty());
        }
        Self {
            total: reg.len(),
            by_vertex_count,
            simplicial,
            minimal,
            maximal,
            report: report.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_counts_the_seed_registry() {
        let (reg, _) = seed_registry();
        let doc = RunSummary::from_registry(&reg, "out.txt");
        assert_eq!(doc.total, 13);
        assert_eq!(doc.by_vertex_count[&4], 8);
        assert_eq!(doc.by_vertex_count[&5], 3);
        assert_eq!(doc.by_vertex_count[&6], 2);
        // No growth yet: everything is both minimal and maximal.
        assert_eq!(doc.minimal, 13);
        assert_eq!(doc.maximal, 13);
    }
}
