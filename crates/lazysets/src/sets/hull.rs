//! H↔V conversions, convex hulls, and supporting-hyperplane enumeration.
//!
//! Why enumeration
//! - Conversions enumerate `n`-tuples (of constraints or points) and keep the
//!   feasible/supporting ones. This is `O(C(m, n))` but dependency-free, exact
//!   for exact scalars, and easy to audit. Volume and large-scale vertex
//!   enumeration belong to an external polyhedral backend.
//! - Degenerate tuples (parallel planes, affinely dependent points) are skipped.

use std::cmp::Ordering;

use nalgebra::DVector;

use super::halfspace::HalfSpace;
use crate::linalg::{combinations, cross_product, null_space, rank, solve};
use crate::num::{approx_leq, is_approx, is_approx_vec, is_approx_zero_vec, Number, Tolerance};

/// Remove approximate duplicates, keeping first occurrences in order.
pub(crate) fn dedup_points<N: Number>(
    points: &[DVector<N>],
    tol: &Tolerance<N>,
) -> Vec<DVector<N>> {
    let mut out: Vec<DVector<N>> = Vec::with_capacity(points.len());
    for p in points {
        if !out.iter().any(|q| is_approx_vec(p, q, tol)) {
            out.push(p.clone());
        }
    }
    out
}

fn lex_cmp<N: Number>(a: &DVector<N>, b: &DVector<N>) -> Ordering {
    for (x, y) in a.iter().zip(b.iter()) {
        match x.partial_cmp(y).unwrap_or(Ordering::Equal) {
            Ordering::Equal => continue,
            o => return o,
        }
    }
    Ordering::Equal
}

#[inline]
fn turn<N: Number>(a: &DVector<N>, b: &DVector<N>, c: &DVector<N>) -> N {
    (b[0] - a[0]) * (c[1] - a[1]) - (b[1] - a[1]) * (c[0] - a[0])
}

/// Andrew's monotone chain in the plane; returns hull vertices in CCW order.
///
/// Collinear points are dropped. A single distinct point yields one vertex and a
/// segment yields its two endpoints.
pub fn convex_hull_2d<N: Number>(points: &[DVector<N>], tol: &Tolerance<N>) -> Vec<DVector<N>> {
    let mut pts = points.to_vec();
    pts.sort_by(lex_cmp);
    let pts = dedup_points(&pts, tol);
    if pts.len() < 3 {
        return pts;
    }
    let mut lower: Vec<DVector<N>> = Vec::with_capacity(pts.len());
    for p in &pts {
        while lower.len() >= 2
            && approx_leq(turn(&lower[lower.len() - 2], &lower[lower.len() - 1], p), N::zero(), tol.ztol)
        {
            lower.pop();
        }
        lower.push(p.clone());
    }
    let mut upper: Vec<DVector<N>> = Vec::with_capacity(pts.len());
    for p in pts.iter().rev() {
        while upper.len() >= 2
            && approx_leq(turn(&upper[upper.len() - 2], &upper[upper.len() - 1], p), N::zero(), tol.ztol)
        {
            upper.pop();
        }
        upper.push(p.clone());
    }
    lower.pop();
    upper.pop();
    let mut hull = lower;
    hull.extend(upper);
    hull
}

/// H→V by intersecting every `n`-tuple of constraint hyperplanes.
///
/// Non-singular tuples whose intersection point satisfies all constraints are
/// vertices. Complexity `O(C(m, n) · (n³ + m n))`.
pub fn h_to_vertices<N: Number>(
    dim: usize,
    constraints: &[HalfSpace<N>],
    tol: &Tolerance<N>,
) -> Vec<DVector<N>> {
    let mut out = Vec::new();
    if dim == 0 || constraints.len() < dim {
        return out;
    }
    for comb in combinations(constraints.len(), dim) {
        let a: Vec<Vec<N>> = comb
            .iter()
            .map(|&i| constraints[i].a.iter().copied().collect())
            .collect();
        let b: Vec<N> = comb.iter().map(|&i| constraints[i].b).collect();
        if let Some(x) = solve(a, b, tol.ztol) {
            let x = DVector::from_vec(x);
            if constraints.iter().all(|h| h.satisfies(&x, tol.ztol)) {
                out.push(x);
            }
        }
    }
    dedup_points(&out, tol)
}

/// Dimension of the affine hull of `points`.
pub(crate) fn affine_dim<N: Number>(points: &[DVector<N>], tol: &Tolerance<N>) -> usize {
    match points.split_first() {
        None => 0,
        Some((p0, rest)) => {
            let rows: Vec<Vec<N>> = rest.iter().map(|p| (p - p0).iter().copied().collect()).collect();
            rank(rows, tol.ztol)
        }
    }
}

/// Supporting hyperplanes through `n` affinely independent points of the set.
///
/// For a full-dimensional point set these are exactly its facets. Normals are
/// scaled to `max |a_i| == 1`, oriented so that every point satisfies
/// `a · x <= b`, and deduplicated.
pub fn supporting_hyperplanes<N: Number>(
    points: &[DVector<N>],
    tol: &Tolerance<N>,
) -> Vec<HalfSpace<N>> {
    match points.first() {
        Some(p) => facets_in_hull(points, p.len(), &[], tol),
        None => Vec::new(),
    }
}

/// Half-space representation of `conv(points)` of any affine dimension.
///
/// A set of affine dimension `k < n` first gets one equality pair
/// `a · x <= a · p0`, `-a · x <= -a · p0` per normal `a` of its affine hull,
/// then its facets relative to that hull. Full-dimensional sets get their facets
/// only. An empty point list has no representation here and yields nothing.
pub fn constraints_from_points<N: Number>(
    points: &[DVector<N>],
    tol: &Tolerance<N>,
) -> Vec<HalfSpace<N>> {
    let pts = dedup_points(points, tol);
    let Some((p0, rest)) = pts.split_first() else {
        return Vec::new();
    };
    let n = p0.len();
    let rows: Vec<Vec<N>> = rest.iter().map(|p| (p - p0).iter().copied().collect()).collect();
    let normals = null_space(rows, n, tol.ztol);
    let mut out = Vec::with_capacity(2 * normals.len());
    for a in &normals {
        let h = HalfSpace::new(a.clone(), a.dot(p0));
        let flipped = h.flip();
        out.push(h);
        out.push(flipped);
    }
    out.extend(facets_in_hull(&pts, n - normals.len(), &normals, tol));
    out
}

/// Hyperplanes through `k` affinely independent points whose normal is
/// orthogonal to every vector in `normals` (`k + normals.len() == n`).
fn facets_in_hull<N: Number>(
    points: &[DVector<N>],
    k: usize,
    normals: &[DVector<N>],
    tol: &Tolerance<N>,
) -> Vec<HalfSpace<N>> {
    let mut out: Vec<HalfSpace<N>> = Vec::new();
    let n = match points.first() {
        Some(p) => p.len(),
        None => return out,
    };
    if k == 0 || points.len() < k {
        return out;
    }
    for comb in combinations(points.len(), k) {
        let p0 = &points[comb[0]];
        let mut spanning: Vec<DVector<N>> = comb[1..].iter().map(|&i| &points[i] - p0).collect();
        spanning.extend(normals.iter().cloned());
        let normal = cross_product(&spanning, n);
        if is_approx_zero_vec(&normal, tol.ztol) {
            continue;
        }
        let candidate = match HalfSpace::new(normal, N::zero()).normalize_inf() {
            Some(h) => HalfSpace::new(h.a.clone(), h.a.dot(p0)),
            None => continue,
        };
        let oriented = if points.iter().all(|x| candidate.satisfies(x, tol.ztol)) {
            candidate
        } else {
            let flipped = candidate.flip();
            if points.iter().all(|x| flipped.satisfies(x, tol.ztol)) {
                flipped
            } else {
                continue;
            }
        };
        if !out.iter().any(|h| h.is_equivalent(&oriented, tol)) {
            out.push(oriented);
        }
    }
    out
}

/// The origin lies in the interior of `conv(normals)`, i.e. the normals
/// positively span `R^dim`. A polyhedron is bounded iff its normals do.
pub(crate) fn positively_spans<N: Number>(
    dim: usize,
    normals: &[DVector<N>],
    tol: &Tolerance<N>,
) -> bool {
    if dim == 0 {
        return true;
    }
    if normals.len() <= dim || affine_dim(normals, tol) < dim {
        return false;
    }
    let facets = supporting_hyperplanes(normals, tol);
    !facets.is_empty() && facets.iter().all(|h| h.b > tol.ztol)
}

/// Extreme points of `conv(points)`.
///
/// A point is extreme iff the facet normals tight at it have rank `n`. Sets that
/// are not full-dimensional are only deduplicated (planar sets use the 2D hull).
pub fn extreme_points<N: Number>(points: &[DVector<N>], tol: &Tolerance<N>) -> Vec<DVector<N>> {
    let pts = dedup_points(points, tol);
    let n = match pts.first() {
        Some(p) => p.len(),
        None => return pts,
    };
    if n == 2 {
        return convex_hull_2d(&pts, tol);
    }
    if pts.len() <= n + 1 || affine_dim(&pts, tol) < n {
        return pts;
    }
    let facets = supporting_hyperplanes(&pts, tol);
    pts.into_iter()
        .filter(|p| {
            let tight: Vec<Vec<N>> = facets
                .iter()
                .filter(|h| is_approx(h.a.dot(p), h.b, tol))
                .map(|h| h.a.iter().copied().collect())
                .collect();
            rank(tight, tol.ztol) == n
        })
        .collect()
}
