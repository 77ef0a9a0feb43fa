//! One discrete reachability step with lazy operators.
//!
//! Purpose
//! - Show how the lazy operators compose: `X1 = A X0 ⊕ U`, enclosed by its
//!   symmetric interval hull, with a guard reset and a safety margin taken off
//!   by a Minkowski difference.
//! - Nothing is materialized until a query or the final difference.
//!
//! Run: `cargo run -p lazysets --example reach_step`

use std::collections::BTreeMap;

use lazysets::api::{
    minkowski_difference, minkowski_difference_zonotopes, ConvexSet, Hyperrectangle,
    Hyperrectangular, LinearMap, MinkowskiSum, ResetMap, SymmetricIntervalHull, Zonotope,
};
use nalgebra::{dmatrix, dvector};

fn main() {
    let x0 = Hyperrectangle::new(dvector![1.0, 0.0], dvector![0.1, 0.1]).expect("initial box");
    let u = Zonotope::new(dvector![0.0, 0.0], dmatrix![0.05, 0.0; 0.02, 0.05]).expect("input set");
    let a = dmatrix![0.9, -0.2; 0.2, 0.9];

    let ax0 = LinearMap::new(a, &x0).expect("square map");
    let x1 = MinkowskiSum::new(&ax0, &u).expect("matching dimensions");
    let hull = SymmetricIntervalHull::new(&x1);

    let d = dvector![1.0, 1.0];
    println!("rho(d, X1) = {:.6}", x1.support_function(&d).expect("support"));
    println!("hull radii = {}", hull.radius_vector().expect("radii").transpose());
    println!("hull cached dims = {:?}", hull.cached_dims());

    let guard = ResetMap::new(&x1, BTreeMap::from([(1, 0.0)])).expect("reset index");
    println!(
        "after reset, sigma(d) = {}",
        guard.support_vector(&d).expect("support").transpose()
    );

    let safe = Hyperrectangle::new(dvector![0.0, 0.0], dvector![2.0, 2.0]).expect("safe box");
    let margin = Hyperrectangle::new(dvector![0.0, 0.0], dvector![0.25, 0.25]).expect("margin");
    let shrunk = minkowski_difference(&safe, &margin).expect("polyhedral difference");
    let shrunk_z = minkowski_difference_zonotopes(&safe, &margin).expect("zonotope difference");
    println!(
        "shrunk safe set: {} constraints (zonotope path: {})",
        shrunk.constraints_list().len(),
        shrunk_z.constraints_list().len()
    );
    let corner = hull.high().expect("hull corner");
    println!(
        "hull corner {} inside shrunk safe set: {}",
        corner.transpose(),
        shrunk.contains(&corner).expect("membership")
    );
}
