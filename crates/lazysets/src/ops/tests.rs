use super::*;
use crate::error::SetError;
use crate::lazy::LinearMap;
use crate::sets::{
    ConvexSet, EmptySet, HPolyhedron, HPolytope, HalfSpace, Hyperrectangle, Polytope, Singleton,
    VPolygon, ZeroSet, Zonotope,
};
use nalgebra::{dmatrix, dvector, DMatrix, DVector};
use num_rational::Rational64;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn cube(r: f64, n: usize) -> Hyperrectangle<f64> {
    Hyperrectangle::new(DVector::zeros(n), DVector::from_element(n, r)).unwrap()
}

fn hbox(r: f64, n: usize) -> HPolytope<f64> {
    HPolytope::new(n, cube(r, n).constraints().unwrap()).unwrap()
}

#[test]
fn box_minus_box_shrinks_every_face() {
    let d = minkowski_difference(&hbox(1.0, 2), &cube(0.5, 2)).unwrap();
    let expected = hbox(0.5, 2);
    assert_eq!(d.as_polytope(), Some(&expected));
    assert!(d.is_bounded());
}

#[test]
fn pontryagin_is_the_same_operation() {
    let p = hbox(1.0, 2);
    let q = Zonotope::new(dvector![0.0, 0.0], dmatrix![0.2, 0.1; 0.0, 0.3]).unwrap();
    assert_eq!(
        pontryagin_difference(&p, &q).unwrap(),
        minkowski_difference(&p, &q).unwrap()
    );
}

#[test]
fn singleton_difference_is_a_translation() {
    let p = hbox(1.0, 2);
    let v = dvector![1.0, -2.0];
    let d = minkowski_difference(&p, &Singleton::new(v.clone())).unwrap();
    let expected = p.translate(&(-v)).unwrap();
    assert_eq!(d.as_polytope(), Some(&expected));
}

#[test]
fn zero_set_is_the_identity() {
    let p = hbox(1.0, 2);
    let d = minkowski_difference(&p, &ZeroSet::new(2)).unwrap();
    assert_eq!(d.constraints_list(), p.constraints_list());
}

#[test]
fn flat_minuends_are_polyhedral() {
    let segment = VPolygon::new(&[dvector![0.0, 0.0], dvector![2.0, 2.0]]).unwrap();
    let d = minkowski_difference(&segment, &ZeroSet::new(2)).unwrap();
    assert!(d.is_bounded());
    assert!(d.contains(&dvector![1.0, 1.0]).unwrap());
    assert!(!d.contains(&dvector![1.0, 0.0]).unwrap());

    // [-1, 1] x {0} shifted left by one
    let flat = Zonotope::new(dvector![0.0, 0.0], dmatrix![1.0; 0.0]).unwrap();
    let d = minkowski_difference(&flat, &Singleton::new(dvector![1.0, 0.0])).unwrap();
    let p = d.as_polytope().unwrap();
    assert_eq!(p.vertices_list().unwrap().len(), 2);
    assert!(p.contains(&dvector![-2.0, 0.0]).unwrap());
    assert!(p.contains(&dvector![0.0, 0.0]).unwrap());
    assert!(!p.contains(&dvector![0.5, 0.0]).unwrap());
    assert!(!p.contains(&dvector![-1.0, 0.1]).unwrap());
}

#[test]
fn empty_subtrahend_gives_the_whole_space() {
    let d = minkowski_difference(&hbox(1.0, 2), &EmptySet::new(2)).unwrap();
    assert!(matches!(d, PolyhedralSet::Unbounded(_)));
    assert!(d.constraints_list().is_empty());
}

#[test]
fn unbounded_minuend_keeps_the_unbounded_tag() {
    let half_plane = HPolyhedron::new(2, vec![HalfSpace::new(dvector![1.0, 0.0], 1.0)]).unwrap();
    let d = minkowski_difference(&half_plane, &cube(0.5, 2)).unwrap();
    match d {
        PolyhedralSet::Unbounded(h) => {
            assert_eq!(h.constraints_list(), &[HalfSpace::new(dvector![1.0, 0.0], 0.5)]);
        }
        other => panic!("expected an unbounded result, got {other:?}"),
    }
}

#[test]
fn preconditions_are_checked_in_order() {
    let lazy = LinearMap::new(dmatrix![1.0, 0.0; 0.0, 1.0], cube(1.0, 2)).unwrap();
    let half_plane = HPolyhedron::new(2, vec![HalfSpace::new(dvector![1.0, 0.0], 1.0)]).unwrap();

    assert!(matches!(
        minkowski_difference(&lazy, &cube(1.0, 3)),
        Err(SetError::DimensionMismatch { left: 2, right: 3, .. })
    ));
    assert_eq!(
        minkowski_difference(&lazy, &half_plane),
        Err(SetError::NotPolyhedral { argument: "first" })
    );
    assert_eq!(
        minkowski_difference(&hbox(1.0, 2), &half_plane),
        Err(SetError::Unbounded { argument: "second" })
    );
    let msg = SetError::NotPolyhedral { argument: "first" }.to_string();
    assert!(msg.contains("overapproximating"));
}

#[test]
fn difference_is_antitone_in_the_subtrahend() {
    let mut rng = StdRng::seed_from_u64(7);
    let p = HPolytope::new(
        2,
        vec![
            HalfSpace::new(dvector![1.0, 1.0], 3.0),
            HalfSpace::new(dvector![-1.0, 1.0], 3.0),
            HalfSpace::new(dvector![0.0, -1.0], 2.0),
        ],
    )
    .unwrap();
    for _ in 0..25 {
        let r1 = dvector![rng.gen_range(0.0..0.4), rng.gen_range(0.0..0.4)];
        let grow = dvector![rng.gen_range(0.0..0.3), rng.gen_range(0.0..0.3)];
        let q1 = Hyperrectangle::new(dvector![0.0, 0.0], r1.clone()).unwrap();
        let q2 = Hyperrectangle::new(dvector![0.0, 0.0], r1 + grow).unwrap();
        let d1 = minkowski_difference(&p, &q1).unwrap();
        let d2 = minkowski_difference(&p, &q2).unwrap();
        let inner = d2.as_polytope().unwrap().vertices_list().unwrap();
        assert!(!inner.is_empty());
        for v in inner {
            assert!(d1.contains(&v).unwrap(), "{v} escapes the larger difference");
        }
    }
}

#[test]
fn zonotope_difference_of_boxes() {
    let z1 = Zonotope::new(dvector![0.0, 0.0], DMatrix::identity(2, 2)).unwrap();
    let z2 = Zonotope::new(dvector![0.0, 0.0], DMatrix::identity(2, 2) * 0.5).unwrap();
    let d = minkowski_difference_zonotopes(&z1, &z2).unwrap();
    assert_eq!(
        d.constraints_list(),
        &[
            HalfSpace::new(dvector![0.0, -1.0], 0.5),
            HalfSpace::new(dvector![0.0, 1.0], 0.5),
            HalfSpace::new(dvector![1.0, 0.0], 0.5),
            HalfSpace::new(dvector![-1.0, 0.0], 0.5),
        ]
    );
}

#[test]
fn zonotope_and_general_algorithms_agree_on_boxes() {
    let z = minkowski_difference_zonotopes(&cube(1.0, 2), &cube(0.5, 2)).unwrap();
    let h = minkowski_difference(&cube(1.0, 2), &cube(0.5, 2)).unwrap();
    let dirs = [
        dvector![1.0, 0.0],
        dvector![0.0, -1.0],
        dvector![1.0, 1.0],
        dvector![-0.3, 0.8],
    ];
    for d in &dirs {
        let a = z.support_function(d).unwrap();
        let b = h.support_function(d).unwrap();
        assert!((a - b).abs() < 1e-12, "{a} vs {b} along {d}");
    }
}

#[test]
fn zonotope_difference_reports_both_dimensions() {
    let z1 = Zonotope::new(dvector![0.0, 0.0], DMatrix::identity(2, 2)).unwrap();
    let z2 = Zonotope::new(dvector![0.0, 0.0, 0.0], DMatrix::identity(3, 3)).unwrap();
    let err = minkowski_difference_zonotopes(&z1, &z2).unwrap_err();
    assert!(matches!(err, SetError::DimensionMismatch { left: 2, right: 3, .. }));
    let msg = err.to_string();
    assert!(msg.contains('2') && msg.contains('3'), "{msg}");
}

#[test]
fn parallel_generators_contribute_no_facet() {
    let gens = dmatrix![
        1.0, 2.0, 0.0, 0.0;
        0.0, 0.0, 1.0, 0.0;
        0.0, 0.0, 0.0, 1.0
    ];
    let z1 = Zonotope::new(dvector![0.0, 0.0, 0.0], gens).unwrap();
    let z2 = ZeroSet::<f64>::new(3);
    let d = minkowski_difference_zonotopes(&z1, &z2).unwrap();
    // C(4, 2) = 6 combinations, one of them degenerate
    assert_eq!(d.constraints_list().len(), 10);
    assert!(d.contains(&dvector![2.9, 0.9, -0.9]).unwrap());
    assert!(!d.contains(&dvector![3.1, 0.0, 0.0]).unwrap());
}

#[test]
fn one_dimensional_zonotope_difference() {
    let z1 = crate::sets::Interval::new(-2.0, 4.0).unwrap();
    let z2 = crate::sets::Interval::new(0.0, 1.0).unwrap();
    let d = minkowski_difference_zonotopes(&z1, &z2).unwrap();
    // center shift 0.5, spread 3 - 0.5
    assert_eq!(
        d.constraints_list(),
        &[
            HalfSpace::new(dvector![1.0], 3.0),
            HalfSpace::new(dvector![-1.0], 2.0),
        ]
    );
}

#[test]
fn exact_zonotope_difference() {
    let r = |n: i64, d: i64| Rational64::new(n, d);
    let z1 = Zonotope::new(
        dvector![r(0, 1), r(0, 1)],
        dmatrix![r(1, 1), r(0, 1); r(0, 1), r(1, 1)],
    )
    .unwrap();
    let z2 = Hyperrectangle::new(dvector![r(1, 4), r(0, 1)], dvector![r(1, 2), r(1, 2)]).unwrap();
    let d = minkowski_difference_zonotopes(&z1, &z2).unwrap();
    assert_eq!(d.constraints_list().len(), 4);
    assert_eq!(d.constraints_list()[2], HalfSpace::new(dvector![r(1, 1), r(0, 1)], r(1, 4)));
    assert_eq!(d.constraints_list()[3], HalfSpace::new(dvector![r(-1, 1), r(0, 1)], r(3, 4)));

    let g = minkowski_difference(&z1, &z2).unwrap();
    assert_eq!(
        g.support_function(&dvector![r(1, 1), r(0, 1)]).unwrap(),
        r(1, 4)
    );
}
