use proptest::prelude::*;
use vector_math::Vector;

fn components(len: std::ops::Range<usize>) -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(-1000.0f64..1000.0f64, len)
}

// Property 1: cross product is anti-commutative
proptest! {
    #[test]
    fn prop_cross_anticommutative(a in components(3..4), b in components(3..4)) {
        let a = Vector::new(a).unwrap();
        let b = Vector::new(b).unwrap();

        let ab = a.cross(&b).unwrap();
        let ba = b.cross(&a).unwrap();

        prop_assert_eq!(ab, -ba);
    }
}

// Property 2: addition is commutative (bit-exact under IEEE 754)
proptest! {
    #[test]
    fn prop_add_commutative(a_vals in components(0..64), b_vals in components(0..64)) {
        let len = a_vals.len().min(b_vals.len());
        let a = Vector::new(a_vals[..len].to_vec()).unwrap();
        let b = Vector::new(b_vals[..len].to_vec()).unwrap();

        prop_assert_eq!(a.add(&b).unwrap(), b.add(&a).unwrap());
    }
}

// Property 2b: addition is associative within rounding
proptest! {
    #[test]
    fn prop_add_associative(
        a_vals in components(0..32),
        b_vals in components(0..32),
        c_vals in components(0..32)
    ) {
        let len = a_vals.len().min(b_vals.len()).min(c_vals.len());
        let a = Vector::new(a_vals[..len].to_vec()).unwrap();
        let b = Vector::new(b_vals[..len].to_vec()).unwrap();
        let c = Vector::new(c_vals[..len].to_vec()).unwrap();

        let ab_c = a.add(&b).unwrap().add(&c).unwrap();
        let a_bc = a.add(&b.add(&c).unwrap()).unwrap();

        // components stay below 3000 in magnitude, so a few ulps is well under 1e-9
        prop_assert!(ab_c.approx_eq(&a_bc, 1e-9), "{} != {}", ab_c, a_bc);
    }
}

// Property 3: a - a is the zero vector of the same dimension
proptest! {
    #[test]
    fn prop_subtract_self_is_zero(vals in components(0..64)) {
        let a = Vector::new(vals).unwrap();
        let zero = a.subtract(&a).unwrap();

        prop_assert_eq!(zero.dim(), a.dim());
        prop_assert!(zero.iter().all(|&el| el == 0.0));
    }
}

// Property 4: dividing by one is the identity
proptest! {
    #[test]
    fn prop_divide_by_one_identity(vals in components(0..64)) {
        let a = Vector::new(vals).unwrap();
        prop_assert_eq!(a.divide(1.0).unwrap(), a);
    }
}

// Property 5: projecting a non-zero vector onto itself returns it
proptest! {
    #[test]
    fn prop_proj_self_identity(vals in components(1..32)) {
        let a = Vector::new(vals).unwrap();
        prop_assume!(a.norm() > 1e-3);

        let p = a.proj(&a).unwrap();
        let tolerance = 1e-9 * a.norm().max(1.0);
        prop_assert!(p.approx_eq(&a, tolerance), "{} != {}", p, a);
    }
}

// Property 6: norm is non-negative and display/parse round-trips exactly
proptest! {
    #[test]
    fn prop_norm_and_display_round_trip(vals in prop::collection::vec(any::<f64>().prop_filter("finite", |x| x.is_finite()), 0..32)) {
        let a = Vector::new(vals).unwrap();
        prop_assert!(a.norm() >= 0.0 || a.norm().is_infinite());

        let parsed: Vector = a.to_string().parse().unwrap();
        prop_assert_eq!(parsed, a);
    }
}
