//! Subcommand bodies. Each one reads its inputs, evaluates lazily, writes a JSON
//! artifact, and records a provenance sidecar next to it.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{ensure, Context, Result};
use lazysets::api::{
    minkowski_difference, minkowski_difference_zonotopes, symmetric_interval_hull, ConvexSet,
    Hyperrectangular, IntervalHullOf, PolyhedralSet,
};
use serde::Serialize;
use serde_json::json;

use crate::input::{load_set, parse_point, read_directions, vector, ConstraintDesc};
use crate::provenance::{write_sidecar, Payload};

#[derive(Debug, Serialize)]
struct SupportRow {
    direction: Vec<f64>,
    value: f64,
    vector: Vec<f64>,
}

#[derive(Debug, Serialize)]
struct SupportOut {
    set: &'static str,
    rows: Vec<SupportRow>,
}

#[derive(Debug, Serialize)]
struct DifferenceOut {
    algorithm: &'static str,
    bounded: bool,
    constraints: Vec<ConstraintDesc>,
}

#[derive(Debug, Serialize)]
struct HullOut {
    absorbed: bool,
    radii: Option<Vec<f64>>,
}

fn write_json<T: Serialize>(out: &Path, value: &T) -> Result<()> {
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    fs::write(out, serde_json::to_vec_pretty(value)?)
        .with_context(|| format!("writing {}", out.display()))
}

/// Support function and vector of one set along every direction of a CSV file.
pub fn support(set: &Path, directions: &Path, out: &Path) -> Result<PathBuf> {
    let s = load_set(set)?;
    let dirs = read_directions(directions)?;
    tracing::info!(set = %set.display(), kind = s.kind(), directions = dirs.len(), "support");
    let mut rows = Vec::with_capacity(dirs.len());
    for (i, d) in dirs.into_iter().enumerate() {
        ensure!(
            d.len() == s.dim(),
            "direction {i} has {} coordinates but the set has dimension {}",
            d.len(),
            s.dim()
        );
        let dv = vector(d);
        let value = s.support_function(&dv)?;
        let v = s.support_vector(&dv)?;
        rows.push(SupportRow {
            direction: dv.iter().copied().collect(),
            value,
            vector: v.iter().copied().collect(),
        });
    }
    write_json(
        out,
        &SupportOut {
            set: s.kind(),
            rows,
        },
    )?;
    write_sidecar(
        out,
        Payload::new("support", json!({ "set_kind": s.kind() })).with_inputs([set, directions]),
    )
}

/// `left ⊖ right`, general polyhedral algorithm or the zonotope one.
pub fn difference(left: &Path, right: &Path, zonotope: bool, out: &Path) -> Result<PathBuf> {
    let p = load_set(left)?;
    let q = load_set(right)?;
    tracing::info!(left = p.kind(), right = q.kind(), zonotope, "difference");
    let result = if zonotope {
        let z1 = p
            .as_zonotope()
            .with_context(|| format!("{} is not a zonotope ({})", left.display(), p.kind()))?;
        let z2 = q
            .as_zonotope()
            .with_context(|| format!("{} is not a zonotope ({})", right.display(), q.kind()))?;
        let hp = minkowski_difference_zonotopes(&z1, &z2)?;
        DifferenceOut {
            algorithm: "zonotope",
            bounded: true,
            constraints: hp.constraints_list().iter().map(ConstraintDesc::from_halfspace).collect(),
        }
    } else {
        let d = minkowski_difference(&p, &q)?;
        DifferenceOut {
            algorithm: "polyhedral",
            bounded: matches!(d, PolyhedralSet::Bounded(_)),
            constraints: d.constraints_list().iter().map(ConstraintDesc::from_halfspace).collect(),
        }
    };
    tracing::info!(constraints = result.constraints.len(), bounded = result.bounded, "difference done");
    write_json(out, &result)?;
    write_sidecar(
        out,
        Payload::new(
            "difference",
            json!({ "algorithm": result.algorithm, "left_kind": p.kind(), "right_kind": q.kind() }),
        )
        .with_inputs([left, right]),
    )
}

/// Radii of the symmetric interval hull.
pub fn hull(set: &Path, out: &Path) -> Result<PathBuf> {
    let s = load_set(set)?;
    tracing::info!(set = %set.display(), kind = s.kind(), "hull");
    let result = match symmetric_interval_hull(&s) {
        IntervalHullOf::Absorbed(_) => HullOut {
            absorbed: true,
            radii: None,
        },
        IntervalHullOf::Lazy(h) => HullOut {
            absorbed: false,
            radii: Some(h.radius_vector()?.iter().copied().collect()),
        },
    };
    write_json(out, &result)?;
    write_sidecar(
        out,
        Payload::new("hull", json!({ "set_kind": s.kind() })).with_inputs([set]),
    )
}

/// Point membership.
pub fn contains(set: &Path, point: &str) -> Result<bool> {
    let s = load_set(set)?;
    let x = parse_point(point)?;
    ensure!(
        x.len() == s.dim(),
        "the point has {} coordinates but the set has dimension {}",
        x.len(),
        s.dim()
    );
    let inside = s.contains(&vector(x))?;
    tracing::info!(set = %set.display(), kind = s.kind(), inside, "contains");
    Ok(inside)
}
