//! Minkowski difference of two zonotopes by facet-normal enumeration.
//!
//! Every facet normal of an `n`-dimensional zonotope is the generalized cross
//! product of `n - 1` of its generators. For each lexicographic
//! `(n-1)`-combination of `Z1`'s generators with a nonzero normal `c`, the
//! difference `Z1 ⊖ Z2` is bounded by the pair of half-spaces
//!
//! `±c · z <= ±c · (c1 - c2) + Σ_g |c · g| - Σ_h |c · h|`
//!
//! with `g` ranging over `Z1`'s generators and `h` over `Z2`'s.
//!
//! Cost: `C(p, n-1)` combinations for `p` generators. This is fine in low
//! dimension and blows up quickly with `n` for fixed `p`; callers working in
//! high dimension should reduce generators first.

use nalgebra::{DMatrix, DVector};
use tracing::debug;

use crate::error::{ensure_dim, SetResult};
use crate::linalg::{binomial, combinations, cross_product};
use crate::num::{is_approx_zero_vec, Number, Tolerance};
use crate::sets::{HPolytope, HalfSpace, ZonotopeLike};

/// `Z1 ⊖ Z2` as a polytope; constraints are emitted in combination order.
pub fn minkowski_difference_zonotopes<N, Z1, Z2>(z1: &Z1, z2: &Z2) -> SetResult<HPolytope<N>>
where
    N: Number,
    Z1: ZonotopeLike<N> + ?Sized,
    Z2: ZonotopeLike<N> + ?Sized,
{
    let n = z1.dim();
    ensure_dim("the dimensions of the zonotopes", n, z2.dim())?;
    let shift = z1.center() - z2.center();
    let constraints = facet_constraints(&z1.genmat(), &z2.genmat(), &shift, &Tolerance::default());
    HPolytope::new(n, constraints)
}

/// Half-space pairs along every facet normal of the zonotope generated by `gm`,
/// offset by `shift` and shrunk by the generators `gsub`.
///
/// With an empty `gsub` and `shift = c` this is the facet description of the
/// zonotope `(c, gm)` itself.
pub(crate) fn facet_constraints<N: Number>(
    gm: &DMatrix<N>,
    gsub: &DMatrix<N>,
    shift: &DVector<N>,
    tol: &Tolerance<N>,
) -> Vec<HalfSpace<N>> {
    let n = gm.nrows();
    if n == 0 {
        return Vec::new();
    }
    let p = gm.ncols();
    let generators: Vec<DVector<N>> = gm.column_iter().map(|g| g.into_owned()).collect();
    debug!(
        dim = n,
        generators = p,
        combinations = binomial(p, n - 1),
        "zonotope facet enumeration"
    );

    let mut out = Vec::new();
    for comb in combinations(p, n - 1) {
        let selected: Vec<DVector<N>> = comb.iter().map(|&j| generators[j].clone()).collect();
        let normal = cross_product(&selected, n);
        if is_approx_zero_vec(&normal, tol.ztol) {
            continue;
        }
        let c = &normal / N::unit_scale(normal.dot(&normal));
        let spread = generators.iter().fold(N::zero(), |acc, g| acc + c.dot(g).abs());
        let spread_sub = gsub.column_iter().fold(N::zero(), |acc, h| acc + h.dot(&c).abs());
        let c_shift = c.dot(shift);
        let slack = spread - spread_sub;
        out.push(HalfSpace::new(c.clone(), c_shift + slack));
        out.push(HalfSpace::new(-c, -c_shift + slack));
    }
    out
}
