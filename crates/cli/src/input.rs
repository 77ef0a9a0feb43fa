//! JSON set descriptions and CSV direction lists.
//!
//! A set file holds one object tagged by `type`, e.g.
//! `{"type": "hyperrectangle", "center": [0, 0], "radius": [1, 1]}`.
//! Zonotope generators are listed column by column.

use std::fs;
use std::path::Path;

use anyhow::{bail, ensure, Context, Result};
use lazysets::prelude::{DMatrix, DVector};
use lazysets::sets::{
    ConcreteSet, EmptySet, HPolyhedron, HPolytope, HalfSpace, Hyperrectangle, Interval, Singleton,
    VPolygon, VPolytope, ZeroSet, Zonotope,
};
use polars::prelude::*;
use serde::{Deserialize, Serialize};

#[inline]
pub fn vector(v: Vec<f64>) -> DVector<f64> {
    DVector::from_vec(v)
}

/// Half-space `a · x <= b` as it appears in set files and outputs.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ConstraintDesc {
    pub a: Vec<f64>,
    pub b: f64,
}

impl ConstraintDesc {
    pub fn from_halfspace(h: &HalfSpace<f64>) -> Self {
        Self {
            a: h.a.iter().copied().collect(),
            b: h.b,
        }
    }

    fn into_halfspace(self) -> HalfSpace<f64> {
        HalfSpace::new(vector(self.a), self.b)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SetDesc {
    Empty { dim: usize },
    Zero { dim: usize },
    Singleton { element: Vec<f64> },
    Interval { lo: f64, hi: f64 },
    Hyperrectangle { center: Vec<f64>, radius: Vec<f64> },
    Zonotope { center: Vec<f64>, generators: Vec<Vec<f64>> },
    Hpolytope { dim: usize, constraints: Vec<ConstraintDesc> },
    Hpolyhedron { dim: usize, constraints: Vec<ConstraintDesc> },
    Vpolytope { dim: usize, vertices: Vec<Vec<f64>> },
    Vpolygon { vertices: Vec<Vec<f64>> },
}

impl SetDesc {
    pub fn into_set(self) -> Result<ConcreteSet<f64>> {
        let set: ConcreteSet<f64> = match self {
            SetDesc::Empty { dim } => EmptySet::new(dim).into(),
            SetDesc::Zero { dim } => ZeroSet::new(dim).into(),
            SetDesc::Singleton { element } => Singleton::new(vector(element)).into(),
            SetDesc::Interval { lo, hi } => Interval::new(lo, hi)?.into(),
            SetDesc::Hyperrectangle { center, radius } => {
                Hyperrectangle::new(vector(center), vector(radius))?.into()
            }
            SetDesc::Zonotope { center, generators } => {
                let n = center.len();
                for (j, g) in generators.iter().enumerate() {
                    ensure!(
                        g.len() == n,
                        "generator {j} has length {} but the center has length {n}",
                        g.len()
                    );
                }
                let gm = DMatrix::from_fn(n, generators.len(), |i, j| generators[j][i]);
                Zonotope::new(vector(center), gm)?.into()
            }
            SetDesc::Hpolytope { dim, constraints } => HPolytope::new(
                dim,
                constraints.into_iter().map(ConstraintDesc::into_halfspace).collect(),
            )?
            .into(),
            SetDesc::Hpolyhedron { dim, constraints } => HPolyhedron::new(
                dim,
                constraints.into_iter().map(ConstraintDesc::into_halfspace).collect(),
            )?
            .into(),
            SetDesc::Vpolytope { dim, vertices } => {
                VPolytope::new(dim, vertices.into_iter().map(vector).collect())?.into()
            }
            SetDesc::Vpolygon { vertices } => {
                let points: Vec<_> = vertices.into_iter().map(vector).collect();
                VPolygon::new(&points)?.into()
            }
        };
        Ok(set)
    }
}

/// Read and build the set described in `path`.
pub fn load_set(path: &Path) -> Result<ConcreteSet<f64>> {
    let raw = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let desc: SetDesc =
        serde_json::from_slice(&raw).with_context(|| format!("parsing {}", path.display()))?;
    desc.into_set()
        .with_context(|| format!("building the set from {}", path.display()))
}

/// One direction per CSV row; every column is a coordinate.
pub fn read_directions(path: &Path) -> Result<Vec<Vec<f64>>> {
    let df = LazyCsvReader::new(path)
        .with_infer_schema_length(Some(100))
        .finish()
        .and_then(|lf| lf.collect())
        .with_context(|| format!("reading directions from {}", path.display()))?;
    let mut rows = vec![Vec::with_capacity(df.width()); df.height()];
    for column in df.get_columns() {
        let values = column.cast(&DataType::Float64)?;
        let values = values.f64()?;
        for (i, v) in values.into_iter().enumerate() {
            match v {
                Some(x) => rows[i].push(x),
                None => bail!("missing value in column {} row {i}", column.name()),
            }
        }
    }
    Ok(rows)
}

/// Parse `x1,x2,...` into a point.
pub fn parse_point(s: &str) -> Result<Vec<f64>> {
    s.split(',')
        .map(|t| {
            t.trim()
                .parse::<f64>()
                .with_context(|| format!("invalid coordinate {t:?}"))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use lazysets::sets::ConvexSet;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn parses_tagged_set_descriptions() {
        let desc: SetDesc = serde_json::from_str(
            r#"{"type": "zonotope", "center": [0, 0], "generators": [[1, 0], [1, 1]]}"#,
        )
        .unwrap();
        let z = desc.into_set().unwrap();
        assert_eq!(z.kind(), "zonotope");
        assert_eq!(z.support_function(&vector(vec![1.0, 0.0])).unwrap(), 2.0);

        let desc: SetDesc = serde_json::from_str(
            r#"{"type": "hpolytope", "dim": 1, "constraints": [{"a": [1], "b": 2}, {"a": [-1], "b": 0}]}"#,
        )
        .unwrap();
        assert!(desc.into_set().unwrap().contains(&vector(vec![1.0])).unwrap());
    }

    #[test]
    fn rejects_malformed_sets() {
        let bad = SetDesc::Hyperrectangle {
            center: vec![0.0],
            radius: vec![-1.0],
        };
        assert!(bad.into_set().is_err());
        let ragged = SetDesc::Zonotope {
            center: vec![0.0, 0.0],
            generators: vec![vec![1.0]],
        };
        assert!(ragged.into_set().is_err());
    }

    #[test]
    fn reads_directions_row_by_row() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("d.csv");
        let mut f = fs::File::create(&path).unwrap();
        writeln!(f, "x,y\n1,0\n0.5,-2").unwrap();
        drop(f);
        let rows = read_directions(&path).unwrap();
        assert_eq!(rows, vec![vec![1.0, 0.0], vec![0.5, -2.0]]);
    }

    #[test]
    fn parses_points() {
        assert_eq!(parse_point("1, -2.5,3").unwrap(), vec![1.0, -2.5, 3.0]);
        assert!(parse_point("1,x").is_err());
    }
}
