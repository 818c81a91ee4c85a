//! Tab-delimited polytope report: writer plus a parser for round trips.
//!
//! The field order and separators are fixed; downstream tooling consumes
//! this artifact as-is. One record per polytope in ascending id order:
//! a numeric header row (id, vertex/parent/child counts, simplicial,
//! minimal, maximal flags), three rows of x/y/z coordinates, the sorted
//! parent id list and sorted child id list (each omitted when empty), and a
//! `---` terminator. Minimal and maximal form a 3-valued classification
//! with minimal taking precedence: a parentless polytope is flagged
//! `1\t0` even when it also has no children.

use anyhow::{bail, Context, Result};
use std::io::Write;

use fano3::registry::Registry;

/// One parsed report record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReportRecord {
    pub id: u32,
    pub num_vertices: usize,
    pub num_parents: usize,
    pub num_children: usize,
    pub simplicial: bool,
    pub minimal: bool,
    pub maximal: bool,
    pub xs: Vec<i64>,
    pub ys: Vec<i64>,
    pub zs: Vec<i64>,
    pub parents: Vec<u32>,
    pub children: Vec<u32>,
}

const SEPARATOR: &str = "---";

/// Write the report for a registry with assigned ids.
pub fn write_report(reg: &Registry, out: &mut impl Write) -> std::io::Result<()> {
    writeln!(
        out,
        "Polytope ID\tNum Vertices\tNum Parent\tNum Children\tSimplicial\tMinimal\tMaximal"
    )?;
    writeln!(out, "Vertex List")?;
    writeln!(out, "Parent List (if any)")?;
    writeln!(out, "Child List (if any)")?;
    writeln!(out, "{SEPARATOR}")?;

    for id in reg.ids_in_report_order() {
        let entry = reg.entry(id);
        let flag = |b: bool| u8::from(b);
        let minimal = entry.parents.is_empty();
        let maximal = !minimal && entry.children.is_empty();
        writeln!(
            out,
            "{}\t{}\t{}\t{}\t{}\t{}\t{}",
            entry.report_id,
            entry.poly.num_vertices(),
            entry.parents.len(),
            entry.children.len(),
            flag(entry.poly.is_simplicial()),
            flag(minimal),
            flag(maximal),
        )?;
        for axis in 0..3 {
            let row: Vec<String> = entry
                .poly
                .vertices()
                .iter()
                .map(|v| v[axis].to_string())
                .collect();
            writeln!(out, "{}", row.join("\t"))?;
        }
        for list in [&entry.parents, &entry.children] {
            if list.is_empty() {
                continue;
            }
            let mut ids: Vec<u32> = list.iter().map(|p| reg.entry(*p).report_id).collect();
            ids.sort_unstable();
            let row: Vec<String> = ids.iter().map(u32::to_string).collect();
            writeln!(out, "{}", row.join("\t"))?;
        }
        writeln!(out, "{SEPARATOR}")?;
    }
    Ok(())
}

/// Parse a report back into records. Inverse of `write_report`; used to
/// verify the emitted DAG is isomorphic to the in-memory one.
pub fn parse_report(text: &str) -> Result<Vec<ReportRecord>> {
    let mut lines = text.lines();
    // Skip the four header lines and their separator.
    for _ in 0..5 {
        lines.next().context("truncated report header")?;
    }

    let mut records = Vec::new();
    while let Some(head) = lines.next() {
        if head.is_empty() {
            continue;
        }
        let fields: Vec<&str> = head.split('\t').collect();
        if fields.len() != 7 {
            bail!("malformed record header: {head:?}");
        }
        let id: u32 = fields[0].parse().context("polytope id")?;
        let num_vertices: usize = fields[1].parse().context("vertex count")?;
        let num_parents: usize = fields[2].parse().context("parent count")?;
        let num_children: usize = fields[3].parse().context("child count")?;
        let [simplicial, minimal, maximal] =
            [fields[4], fields[5], fields[6]].map(|f| f == "1");

        let mut coord_row = |axis: &str| -> Result<Vec<i64>> {
            let line = lines
                .next()
                .with_context(|| format!("missing {axis} row for polytope {id}"))?;
            let row: Vec<i64> = line
                .split('\t')
                .map(|f| f.parse::<i64>())
                .collect::<Result<_, _>>()
                .with_context(|| format!("{axis} row for polytope {id}"))?;
            if row.len() != num_vertices {
                bail!("{axis} row length mismatch for polytope {id}");
            }
            Ok(row)
        };
        let xs = coord_row("x")?;
        let ys = coord_row("y")?;
        let zs = coord_row("z")?;

        let mut id_row = |count: usize, what: &str| -> Result<Vec<u32>> {
            if count == 0 {
                return Ok(Vec::new());
            }
            let line = lines
                .next()
                .with_context(|| format!("missing {what} list for polytope {id}"))?;
            let row: Vec<u32> = line
                .split('\t')
                .map(|f| f.parse::<u32>())
                .collect::<Result<_, _>>()
                .with_context(|| format!("{what} list for polytope {id}"))?;
            if row.len() != count {
                bail!("{what} list length mismatch for polytope {id}");
            }
            Ok(row)
        };
        let parents = id_row(num_parents, "parent")?;
        let children = id_row(num_children, "child")?;

        match lines.next() {
            Some(SEPARATOR) => {}
            other => bail!("expected record separator for polytope {id}, got {other:?}"),
        }

        records.push(ReportRecord {
            id,
            num_vertices,
            num_parents,
            num_children,
            simplicial,
            minimal,
            maximal,
            xs,
            ys,
            zs,
            parents,
            children,
        });
    }
    Ok(records)
}
