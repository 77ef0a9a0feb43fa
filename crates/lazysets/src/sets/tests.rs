use super::*;
use crate::error::SetError;
use nalgebra::{dmatrix, dvector, DMatrix, DVector};
use num_rational::Rational64;

fn unit_box() -> Hyperrectangle<f64> {
    Hyperrectangle::new(dvector![0.0, 0.0], dvector![1.0, 1.0]).unwrap()
}

#[test]
fn singleton_element_access_is_bounds_checked() {
    let s = Singleton::new(dvector![2.0, 3.0]);
    assert_eq!(s.element_at(0).unwrap(), 2.0);
    assert_eq!(s.element_at(1).unwrap(), 3.0);
    assert_eq!(
        s.element_at(2),
        Err(SetError::IndexOutOfRange { index: 2, dim: 2 })
    );
    // every radius of a singleton is zero
    assert_eq!(s.radius_vector().unwrap(), dvector![0.0, 0.0]);
}

#[test]
fn support_function_matches_dot_of_support_vector() {
    let sets: Vec<ConcreteSet<f64>> = vec![
        unit_box().into(),
        Zonotope::new(dvector![1.0, 0.0], dmatrix![1.0, 1.0; 0.0, 1.0])
            .unwrap()
            .into(),
        VPolygon::new(&[dvector![0.0, 0.0], dvector![2.0, 0.0], dvector![0.0, 1.0]])
            .unwrap()
            .into(),
        Singleton::new(dvector![2.0, 3.0]).into(),
    ];
    let dirs = [dvector![1.0, 0.0], dvector![-1.0, 2.0], dvector![0.3, -0.7]];
    for s in &sets {
        for d in &dirs {
            let v = s.support_vector(d).unwrap();
            let rho = s.support_function(d).unwrap();
            assert!((rho - d.dot(&v)).abs() < 1e-12, "{} along {d}", s.kind());
        }
    }
}

#[test]
fn wrong_direction_length_is_rejected() {
    let b = unit_box();
    assert!(matches!(
        b.support_vector(&dvector![1.0, 0.0, 0.0]),
        Err(SetError::DimensionMismatch { left: 3, right: 2, .. })
    ));
}

#[test]
fn empty_set_has_no_support_vector() {
    let e = EmptySet::<f64>::new(2);
    assert!(e.is_empty());
    assert_eq!(e.support_vector(&dvector![1.0, 0.0]), Err(SetError::EmptySet));
    assert!(polytope::is_empty(&e));
}

#[test]
fn box_constraints_list_upper_then_lower_faces() {
    let b = Hyperrectangle::new(dvector![1.0, 0.0], dvector![0.5, 2.0]).unwrap();
    let cs = b.constraints().unwrap();
    assert_eq!(cs.len(), 4);
    assert_eq!(cs[0], HalfSpace::new(dvector![1.0, 0.0], 1.5));
    assert_eq!(cs[1], HalfSpace::new(dvector![0.0, 1.0], 2.0));
    assert_eq!(cs[2], HalfSpace::new(dvector![-1.0, 0.0], -0.5));
    assert_eq!(cs[3], HalfSpace::new(dvector![0.0, -1.0], 2.0));
}

#[test]
fn negative_radius_and_reversed_interval_are_invalid() {
    assert!(matches!(
        Hyperrectangle::new(dvector![0.0], dvector![-1.0]),
        Err(SetError::Invalid(_))
    ));
    assert!(matches!(Interval::new(1.0, 0.0), Err(SetError::Invalid(_))));
}

#[test]
fn hpolytope_vertices_and_support() {
    let p = HPolytope::new(2, unit_box().constraints().unwrap()).unwrap();
    let vs = p.vertices_list().unwrap();
    assert_eq!(vs.len(), 4);
    let v = p.support_vector(&dvector![1.0, 1.0]).unwrap();
    assert!((v - dvector![1.0, 1.0]).norm() < 1e-12);
    assert!(p.contains(&dvector![0.5, -0.5]).unwrap());
    assert!(!p.contains(&dvector![1.5, 0.0]).unwrap());
}

#[test]
fn half_plane_is_unbounded_and_not_support_queryable() {
    let h = HPolyhedron::new(2, vec![HalfSpace::new(dvector![1.0, 0.0], 0.0)]).unwrap();
    assert!(!h.is_bounded());
    assert!(!h.is_empty());
    assert!(h.to_polytope().is_none());
    assert!(matches!(
        h.support_vector(&dvector![1.0, 0.0]),
        Err(SetError::Unsupported { .. })
    ));
    let boxed = HPolyhedron::new(2, unit_box().constraints().unwrap()).unwrap();
    assert!(boxed.is_bounded());
    assert!(boxed.to_polytope().is_some());
}

#[test]
fn infeasible_hpolytope_is_empty() {
    let p = HPolytope::new(
        1,
        vec![
            HalfSpace::new(dvector![1.0], 0.0),
            HalfSpace::new(dvector![-1.0], -1.0),
        ],
    )
    .unwrap();
    assert!(p.is_empty());
    assert!(polytope::is_empty(&p));
}

#[test]
fn zonotope_support_and_facets() {
    let z = Zonotope::new(dvector![0.0, 0.0], dmatrix![1.0, 1.0; 0.0, 1.0]).unwrap();
    assert_eq!(z.support_function(&dvector![1.0, 0.0]).unwrap(), 2.0);
    assert_eq!(z.support_function(&dvector![0.0, 1.0]).unwrap(), 1.0);
    assert_eq!(z.vertices_list().unwrap().len(), 4);
    let cs = z.constraints().unwrap();
    // one pair per generator in 2D
    assert_eq!(cs.len(), 4);
    for v in z.vertices_list().unwrap() {
        assert!(cs.iter().all(|h| h.satisfies(&v, 1e-9)));
    }
}

#[test]
fn flat_sets_have_constraints() {
    // the diagonal segment from (-1, -1) to (1, 1)
    let flat = Zonotope::new(dvector![0.0, 0.0], dmatrix![1.0; 1.0]).unwrap();
    assert!(!flat.is_full_dimensional());
    let cs = flat.constraints().unwrap();
    // affine-hull equality pair plus two end caps
    assert_eq!(cs.len(), 4);
    let p = HPolytope::new(2, cs).unwrap();
    assert!(p.contains(&dvector![0.5, 0.5]).unwrap());
    assert!(!p.contains(&dvector![0.5, -0.5]).unwrap());
    assert!(!p.contains(&dvector![1.5, 1.5]).unwrap());
    assert_eq!(p.vertices_list().unwrap().len(), 2);

    let point = VPolygon::new(&[dvector![2.0, 3.0]]).unwrap();
    let cs = point.constraints().unwrap();
    assert_eq!(cs.len(), 4);
    let p = HPolytope::new(2, cs).unwrap();
    assert_eq!(p.vertices_list().unwrap(), vec![dvector![2.0, 3.0]]);

    let square_in_space = VPolytope::new(
        3,
        vec![
            dvector![0.0, 0.0, 1.0],
            dvector![1.0, 0.0, 1.0],
            dvector![1.0, 1.0, 1.0],
            dvector![0.0, 1.0, 1.0],
        ],
    )
    .unwrap();
    let cs = square_in_space.constraints().unwrap();
    assert_eq!(cs.len(), 6);
    let p = HPolytope::new(3, cs).unwrap();
    assert!(p.contains(&dvector![0.5, 0.5, 1.0]).unwrap());
    assert!(!p.contains(&dvector![0.5, 0.5, 1.1]).unwrap());
    assert_eq!(p.vertices_list().unwrap().len(), 4);

    assert!(VPolygon::<f64>::new(&[]).unwrap().constraints().is_none());
}

#[test]
fn signed_zero_directions_pick_the_center() {
    let b = Hyperrectangle::new(dvector![1.0, 2.0], dvector![1.0, 1.0]).unwrap();
    assert_eq!(b.support_vector(&dvector![-0.0, 1.0]).unwrap(), dvector![1.0, 3.0]);
    assert_eq!(b.support_vector(&dvector![0.0, -1.0]).unwrap(), dvector![1.0, 1.0]);
    assert!(Hyperrectangle::new(dvector![0.0], dvector![-0.0]).is_ok());

    let i = Interval::new(-1.0, 4.0).unwrap();
    assert_eq!(
        i.support_vector(&dvector![0.0]).unwrap(),
        i.support_vector(&dvector![-0.0]).unwrap()
    );
}

#[test]
fn vertex_enumeration_refuses_unaddressable_counts() {
    assert_eq!(traits::corner_count(3).unwrap(), 8);
    assert!(traits::corner_count(63).is_ok());
    let wide = Hyperrectangle::<f64>::new(DVector::zeros(64), DVector::from_element(64, 1.0)).unwrap();
    assert!(matches!(wide.vertices_list(), Err(SetError::Unsupported { .. })));
    assert!(!polytope::is_empty(&wide));
    let many = Zonotope::new(dvector![0.0], DMatrix::from_element(1, 64, 1.0)).unwrap();
    assert!(matches!(many.vertices_list(), Err(SetError::Unsupported { .. })));
    // flat dimensions do not count
    let mut radius: DVector<f64> = DVector::zeros(70);
    radius[3] = 1.0;
    let thin = Hyperrectangle::new(DVector::zeros(70), radius).unwrap();
    assert_eq!(thin.vertices_list().unwrap().len(), 2);
}

#[test]
fn vpolygon_hull_and_membership() {
    let p = VPolygon::new(&[
        dvector![0.0, 0.0],
        dvector![1.0, 0.0],
        dvector![1.0, 1.0],
        dvector![0.0, 1.0],
        dvector![0.5, 0.5],
    ])
    .unwrap();
    assert_eq!(p.vertices_list().unwrap().len(), 4);
    assert!(p.contains(&dvector![0.5, 0.25]).unwrap());
    assert!(!p.contains(&dvector![1.5, 0.25]).unwrap());
    let cs = p.constraints().unwrap();
    assert!(cs.iter().all(|h| h.satisfies(&dvector![0.5, 0.5], 0.0)));

    let segment = VPolygon::new(&[dvector![0.0, 0.0], dvector![2.0, 2.0]]).unwrap();
    assert!(segment.contains(&dvector![1.0, 1.0]).unwrap());
    assert!(!segment.contains(&dvector![1.0, 0.0]).unwrap());
    assert!(!segment.contains(&dvector![3.0, 3.0]).unwrap());
}

#[test]
fn cube_extreme_points_drop_interior_points() {
    let cube = Hyperrectangle::new(dvector![0.0, 0.0, 0.0], dvector![1.0, 1.0, 1.0]).unwrap();
    let mut pts = cube.vertices_list().unwrap();
    pts.push(dvector![0.0, 0.0, 0.0]);
    pts.push(dvector![1.0, 0.0, 0.0]);
    let v = VPolytope::new(3, pts).unwrap();
    assert_eq!(v.remove_redundant_vertices().vertices_list().unwrap().len(), 8);
    assert_eq!(v.constraints().unwrap().len(), 6);
}

#[test]
fn linear_map_vrep_switches_on_output_dimension() {
    let b = unit_box();
    match linear_map_vrep(&dmatrix![1.0, 1.0], &b, false).unwrap() {
        VrepImage::Interval(i) => {
            assert_eq!((i.min(), i.max()), (-2.0, 2.0));
        }
        other => panic!("expected an interval, got {other:?}"),
    }
    match linear_map_vrep(&dmatrix![0.0, -1.0; 1.0, 0.0], &b, false).unwrap() {
        VrepImage::Polygon(p) => assert_eq!(p.vertices_list().unwrap().len(), 4),
        other => panic!("expected a polygon, got {other:?}"),
    }
    let lift = dmatrix![1.0, 0.0; 0.0, 1.0; 1.0, 1.0];
    match linear_map_vrep(&lift, &b, true).unwrap() {
        VrepImage::Polytope(p) => {
            assert_eq!(p.dim(), 3);
            assert_eq!(p.vertices_list().unwrap().len(), 4);
        }
        other => panic!("expected a polytope, got {other:?}"),
    }
    let e = EmptySet::<f64>::new(2);
    assert!(matches!(
        linear_map_vrep(&dmatrix![1.0, 0.0], &e, false).unwrap(),
        VrepImage::Empty(_)
    ));
    assert!(matches!(
        linear_map_vrep(&dmatrix![1.0, 0.0, 0.0], &b, false),
        Err(SetError::DimensionMismatch { .. })
    ));
}

#[test]
fn linear_map_hrep_uses_inverse_transpose() {
    let p = HPolytope::new(2, unit_box().constraints().unwrap()).unwrap();
    let m = dmatrix![2.0, 0.0; 0.0, 1.0];
    let image = linear_map_hrep(&m, &p, &InverseConstraintMap::default()).unwrap();
    assert!(matches!(image, HrepImage::Polygon(_)));
    assert!(image.contains(&dvector![1.9, 0.9]).unwrap());
    assert!(!image.contains(&dvector![2.1, 0.0]).unwrap());
    assert!((image.support_function(&dvector![1.0, 0.0]).unwrap() - 2.0).abs() < 1e-12);

    let singular = dmatrix![1.0, 1.0; 1.0, 1.0];
    assert!(matches!(
        linear_map_hrep(&singular, &p, &InverseConstraintMap::default()),
        Err(SetError::Singular { .. })
    ));
}

#[test]
fn linear_map_hrep_in_one_dimension() {
    let bounded = HPolyhedron::new(
        1,
        vec![
            HalfSpace::new(dvector![1.0], 1.0),
            HalfSpace::new(dvector![-1.0], 1.0),
        ],
    )
    .unwrap();
    let m = DMatrix::from_element(1, 1, 2.0);
    match linear_map_hrep(&m, &bounded, &InverseConstraintMap::default()).unwrap() {
        HrepImage::Interval(i) => assert_eq!((i.min(), i.max()), (-2.0, 2.0)),
        other => panic!("expected an interval, got {other:?}"),
    }
    // a zero coefficient only checks 0 <= b
    let padded = HPolyhedron::new(
        1,
        vec![
            HalfSpace::new(dvector![1.0], 1.0),
            HalfSpace::new(dvector![0.0], 0.0),
            HalfSpace::new(dvector![-0.0], 0.0),
            HalfSpace::new(dvector![-1.0], 1.0),
        ],
    )
    .unwrap();
    match linear_map_hrep(&m, &padded, &InverseConstraintMap::default()).unwrap() {
        HrepImage::Interval(i) => assert_eq!((i.min(), i.max()), (-2.0, 2.0)),
        other => panic!("expected an interval, got {other:?}"),
    }
    let ray = HPolyhedron::new(1, vec![HalfSpace::new(dvector![1.0], 1.0)]).unwrap();
    assert!(matches!(
        linear_map_hrep(&m, &ray, &InverseConstraintMap::default()).unwrap(),
        HrepImage::Polyhedron(_)
    ));
}

#[test]
fn universality_special_case_and_witness() {
    let free = HPolytope::<f64>::new(2, vec![]).unwrap();
    let (universal, w) = is_universal(&free, true);
    assert!(universal);
    assert_eq!(w.unwrap().len(), 0);

    let b = unit_box();
    assert_eq!(is_universal(&b, false), (false, None));
    let (universal, w) = is_universal(&b, true);
    assert!(!universal);
    assert!(!b.contains(&w.unwrap()).unwrap());

    // the segment's first constraint is its affine-hull equality -x + y <= 0
    let seg = VPolytope::new(2, vec![dvector![0.0, 0.0], dvector![1.0, 1.0]]).unwrap();
    let (universal, w) = is_universal(&seg, true);
    assert!(!universal);
    assert_eq!(w.unwrap(), dvector![-0.5, 0.5]);
}

#[test]
fn universality_witness_skips_zero_normals() {
    let mut cs = vec![HalfSpace::new(dvector![0.0, 0.0], 1.0)];
    cs.extend(unit_box().constraints().unwrap());
    let p = HPolytope::new(2, cs).unwrap();
    let (universal, w) = is_universal(&p, true);
    assert!(!universal);
    let w = w.unwrap();
    assert_eq!(w, dvector![2.0, 0.0]);
    assert!(!p.contains(&w).unwrap());

    let r = |n: i64, d: i64| Rational64::new(n, d);
    let exact = HPolytope::new(
        2,
        vec![
            HalfSpace::new(dvector![r(0, 1), r(0, 1)], r(1, 1)),
            HalfSpace::new(dvector![r(0, 1), r(2, 1)], r(1, 1)),
        ],
    )
    .unwrap();
    let (_, w) = is_universal(&exact, true);
    assert_eq!(w.unwrap(), dvector![r(0, 1), r(1, 1)]);

    // no usable normal at all: fall back to a finite point
    let degenerate = HPolytope::<f64>::new(2, vec![HalfSpace::new(dvector![0.0, 0.0], 1.0)]).unwrap();
    let (universal, w) = is_universal(&degenerate, true);
    assert!(!universal);
    assert!(w.unwrap().iter().all(|x| x.is_finite()));
}

#[test]
fn membership_rejects_sets_on_the_left() {
    let b = unit_box();
    let x = dvector![0.5, 0.5];
    assert!(is_member(Member::Point(&x), &b).unwrap());
    let s = Singleton::new(dvector![0.0, 0.0]);
    assert_eq!(
        is_member(Member::Set(&s), &b),
        Err(SetError::MembershipMisuse)
    );
}

#[test]
fn concrete_set_views_boxes_as_zonotopes() {
    let z = ConcreteSet::from(Hyperrectangle::new(dvector![1.0, 1.0], dvector![1.0, 0.0]).unwrap())
        .as_zonotope()
        .unwrap();
    assert_eq!(z.ngens(), 1);
    let p = HPolytope::new(2, unit_box().constraints().unwrap()).unwrap();
    assert!(ConcreteSet::from(p).as_zonotope().is_none());
}

#[test]
fn exact_scalars_answer_exactly() {
    let r = |n: i64, d: i64| Rational64::new(n, d);
    let b = Hyperrectangle::new(dvector![r(0, 1), r(0, 1)], dvector![r(1, 2), r(1, 3)]).unwrap();
    assert_eq!(
        b.support_function(&dvector![r(1, 1), r(1, 1)]).unwrap(),
        r(5, 6)
    );
    let p = HPolytope::new(2, b.constraints().unwrap()).unwrap();
    assert_eq!(p.vertices_list().unwrap().len(), 4);
    assert!(p.contains(&dvector![r(1, 2), r(1, 3)]).unwrap());
    assert!(!p.contains(&dvector![r(1, 2), r(1, 2)]).unwrap());
}
