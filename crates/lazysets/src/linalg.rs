//! Small dense linear algebra over any [`Number`].
//!
//! Purpose
//! - Products and sums go through `nalgebra` directly (`a.dot(&b)`, `&m * &v`,
//!   `m.tr_mul(&v)`). What lives here is the part `nalgebra` only offers for
//!   `ComplexField` scalars: elimination, determinants, inverses. Those are
//!   written against `Number` so `Rational64` stays exact.
//! - Generalized cross products and index combinations for facet enumeration.
//! - Elimination workspaces are plain row vectors.

use nalgebra::{DMatrix, DVector};

use crate::num::{is_approx_zero, Number};

/// `e_i` in `R^n`.
#[inline]
pub fn unit_vector<N: Number>(n: usize, i: usize) -> DVector<N> {
    DVector::from_fn(n, |j, _| if j == i { N::one() } else { N::zero() })
}

/// Determinant by Gaussian elimination with partial pivoting.
///
/// The empty (0×0) matrix has determinant one.
pub fn determinant<N: Number>(mut a: Vec<Vec<N>>) -> N {
    let n = a.len();
    let mut det = N::one();
    for col in 0..n {
        let mut pivot = col;
        for r in col + 1..n {
            if a[r][col].abs() > a[pivot][col].abs() {
                pivot = r;
            }
        }
        if a[pivot][col].is_zero() {
            return N::zero();
        }
        if pivot != col {
            a.swap(pivot, col);
            det = -det;
        }
        let pivot_row = a[col].clone();
        let p = pivot_row[col];
        det = det * p;
        for row in a.iter_mut().skip(col + 1) {
            let f = row[col] / p;
            if f.is_zero() {
                continue;
            }
            for c in col..n {
                row[c] = row[c] - f * pivot_row[c];
            }
        }
    }
    det
}

/// Rank of a row list; pivots with `|p| <= ztol` count as zero.
pub fn rank<N: Number>(mut a: Vec<Vec<N>>, ztol: N) -> usize {
    let rows = a.len();
    let cols = a.first().map_or(0, |r| r.len());
    let mut r = 0usize;
    for col in 0..cols {
        if r == rows {
            break;
        }
        let mut pivot = r;
        for i in r + 1..rows {
            if a[i][col].abs() > a[pivot][col].abs() {
                pivot = i;
            }
        }
        if is_approx_zero(a[pivot][col], ztol) {
            continue;
        }
        a.swap(pivot, r);
        let pivot_row = a[r].clone();
        for row in a.iter_mut().skip(r + 1) {
            let f = row[col] / pivot_row[col];
            for c in col..cols {
                row[c] = row[c] - f * pivot_row[c];
            }
        }
        r += 1;
    }
    r
}

/// Basis of `{x : A x = 0}` for a row list with `cols` columns.
///
/// Reduces `A` to row echelon form (pivots with `|p| <= ztol` count as zero) and
/// returns one vector per free column. An empty row list yields the standard basis.
pub fn null_space<N: Number>(mut a: Vec<Vec<N>>, cols: usize, ztol: N) -> Vec<DVector<N>> {
    let rows = a.len();
    let mut pivots: Vec<usize> = Vec::with_capacity(cols.min(rows));
    for col in 0..cols {
        let r = pivots.len();
        if r == rows {
            break;
        }
        let mut pivot = r;
        for i in r + 1..rows {
            if a[i][col].abs() > a[pivot][col].abs() {
                pivot = i;
            }
        }
        if is_approx_zero(a[pivot][col], ztol) {
            continue;
        }
        a.swap(pivot, r);
        let p = a[r][col];
        for c in col..cols {
            a[r][c] = a[r][c] / p;
        }
        let pivot_row = a[r].clone();
        for (i, row) in a.iter_mut().enumerate() {
            let f = row[col];
            if i == r || f.is_zero() {
                continue;
            }
            for c in col..cols {
                row[c] = row[c] - f * pivot_row[c];
            }
        }
        pivots.push(col);
    }
    (0..cols)
        .filter(|c| !pivots.contains(c))
        .map(|free| {
            let mut v = DVector::from_element(cols, N::zero());
            v[free] = N::one();
            for (i, &pc) in pivots.iter().enumerate() {
                v[pc] = -a[i][free];
            }
            v
        })
        .collect()
}

/// Solve the square system `A x = b` by Gauss–Jordan elimination.
///
/// Returns `None` if a pivot is approximately zero (singular system).
pub fn solve<N: Number>(mut a: Vec<Vec<N>>, mut b: Vec<N>, ztol: N) -> Option<Vec<N>> {
    let n = a.len();
    for col in 0..n {
        let mut pivot = col;
        for r in col + 1..n {
            if a[r][col].abs() > a[pivot][col].abs() {
                pivot = r;
            }
        }
        if is_approx_zero(a[pivot][col], ztol) {
            return None;
        }
        a.swap(pivot, col);
        b.swap(pivot, col);
        let p = a[col][col];
        for c in col..n {
            a[col][c] = a[col][c] / p;
        }
        b[col] = b[col] / p;
        let pivot_row = a[col].clone();
        let pivot_rhs = b[col];
        for r in 0..n {
            if r == col {
                continue;
            }
            let f = a[r][col];
            if f.is_zero() {
                continue;
            }
            for c in col..n {
                a[r][c] = a[r][c] - f * pivot_row[c];
            }
            b[r] = b[r] - f * pivot_rhs;
        }
    }
    Some(b)
}

/// Inverse of a square matrix, `None` if singular up to `ztol`.
pub fn inverse<N: Number>(m: &DMatrix<N>, ztol: N) -> Option<DMatrix<N>> {
    let n = m.nrows();
    if m.ncols() != n {
        return None;
    }
    let rows: Vec<Vec<N>> = (0..n).map(|i| (0..n).map(|j| m[(i, j)]).collect()).collect();
    let mut out = DMatrix::from_element(n, n, N::zero());
    for j in 0..n {
        let mut rhs = vec![N::zero(); n];
        rhs[j] = N::one();
        let col = solve(rows.clone(), rhs, ztol)?;
        for (i, x) in col.into_iter().enumerate() {
            out[(i, j)] = x;
        }
    }
    Some(out)
}

/// Generalized cross product of `n-1` vectors in `R^n`.
///
/// Component `k` is `(-1)^k det(A_k)` where `A_k` drops coordinate `k` from every
/// vector. The result is orthogonal to all inputs and vanishes iff they are
/// linearly dependent. For `n == 1` (no inputs) the result is `(1)`.
pub fn cross_product<N: Number>(vectors: &[DVector<N>], n: usize) -> DVector<N> {
    debug_assert_eq!(vectors.len() + 1, n);
    DVector::from_fn(n, |k, _| {
        let minor: Vec<Vec<N>> = vectors
            .iter()
            .map(|v| (0..n).filter(|&i| i != k).map(|i| v[i]).collect())
            .collect();
        let d = determinant(minor);
        if k % 2 == 0 {
            d
        } else {
            -d
        }
    })
}

/// Lexicographic k-combinations of `0..n`.
///
/// Yields a single empty combination for `k == 0` and nothing for `k > n`.
#[derive(Clone, Debug)]
pub struct Combinations {
    n: usize,
    k: usize,
    idxs: Vec<usize>,
    done: bool,
}

impl Iterator for Combinations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Vec<usize>> {
        if self.done {
            return None;
        }
        let out = self.idxs.clone();
        // advance to the next tuple
        let mut i = self.k;
        loop {
            if i == 0 {
                self.done = true;
                break;
            }
            i -= 1;
            if self.idxs[i] != i + self.n - self.k {
                self.idxs[i] += 1;
                for j in i + 1..self.k {
                    self.idxs[j] = self.idxs[j - 1] + 1;
                }
                break;
            }
        }
        Some(out)
    }
}

pub fn combinations(n: usize, k: usize) -> Combinations {
    Combinations {
        n,
        k,
        idxs: (0..k).collect(),
        done: k > n,
    }
}

/// `C(n, k)`, saturating.
pub fn binomial(n: usize, k: usize) -> usize {
    if k > n {
        return 0;
    }
    let k = k.min(n - k);
    let mut acc: usize = 1;
    for i in 0..k {
        acc = acc.saturating_mul(n - i) / (i + 1);
    }
    acc
}
