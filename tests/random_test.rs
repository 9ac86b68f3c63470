//! Exploratory tests which use randomized test cases

use fastrand::Rng;
use qir_roots::{
    Precision, Refinement, Refiner, RootRefinement,
    __testing::{
        check_refinement, check_sqrt, isolating_brackets, test_case_roots, RandStreamDecimal,
        RandStreamRational,
    },
    num::{integer::Roots, BigInt, BigRational},
    poly,
};

#[test]
fn rational_roots_are_bracketed() {
    let _ = simple_logger::init_with_level(log::Level::Debug);
    let case = |deg, seed| {
        let mut seed_stream = Rng::with_seed(seed);
        let mut roots_stream = RandStreamRational::new(seed_stream.u64(..), -10, 10, 12);
        for i in 0..50 {
            let (poly, roots) = test_case_roots(&mut roots_stream, deg);
            let scale = seed_stream.i64(3..=12);
            for ((lower, upper), root) in isolating_brackets(&roots).iter().zip(&roots) {
                let result = Refiner::new()
                    .refine(&poly, lower, upper, Precision::Scale(scale))
                    .unwrap();
                assert!(
                    check_refinement(&poly, &result, root),
                    "{result} does not bracket {root} of {poly} @ iter = {i}, scale = {scale}"
                );
            }
        }
    };

    case(1, 1);
    case(2, 2);
    case(3, 3);
    case(5, 4);
}

#[test]
fn decimal_roots_are_found_exactly() {
    let mut seed_stream = Rng::with_seed(5);
    let mut roots_stream = RandStreamDecimal::new(seed_stream.u64(..), -5, 5, 3);
    for i in 0..100 {
        let deg = seed_stream.usize(1..=4);
        let (poly, roots) = test_case_roots(&mut roots_stream, deg);
        let scale = seed_stream.i64(3..=8);
        for ((lower, upper), root) in isolating_brackets(&roots).iter().zip(&roots) {
            let result = Refiner::new()
                .refine(&poly, lower, upper, Precision::Scale(scale))
                .unwrap();
            let Refinement::ExactRoot(x) = &result else {
                panic!("expected exact root {root} of {poly}, got {result} @ iter = {i}");
            };
            assert_eq!(&x.to_rational(), root);
        }
    }
}

#[test]
fn significant_digits_contain_the_root() {
    let mut seed_stream = Rng::with_seed(6);
    let mut roots_stream = RandStreamRational::new(seed_stream.u64(..), -100, 100, 1000);
    for i in 0..100 {
        let deg = seed_stream.usize(1..=4);
        let (poly, roots) = test_case_roots(&mut roots_stream, deg);
        let digits = seed_stream.u64(1..=15);
        for ((lower, upper), root) in isolating_brackets(&roots).iter().zip(&roots) {
            let result = Refiner::new()
                .refine(&poly, lower, upper, Precision::Digits(digits))
                .unwrap();
            assert!(
                result.contains(root),
                "{result} does not contain {root} of {poly} @ iter = {i}, digits = {digits}"
            );
        }
    }
}

#[test]
fn square_roots() {
    let mut rng = Rng::with_seed(7);
    for i in 0..200 {
        let m = rng.i64(2..=1_000_000);
        let p = poly![-m, 0, 1];
        let m = BigRational::from_integer(m.into());
        let upper = &m + BigRational::from_integer(BigInt::from(1));
        let lower = BigRational::from_integer(BigInt::from(0));
        let precision = if rng.bool() {
            Precision::Scale(rng.i64(0..=30))
        } else {
            Precision::Digits(rng.u64(1..=30))
        };
        let result = Refiner::new().refine(&p, &lower, &upper, precision).unwrap();
        assert!(
            check_sqrt(&result, &m),
            "{result} does not bracket sqrt({m}) @ iter = {i}, {precision:?}"
        );
    }
}

#[test]
fn bounded_is_a_fixed_point() {
    let mut rng = Rng::with_seed(8);
    for i in 0..100 {
        let m = rng.i64(2..=10_000);
        let p = poly![-m, 0, 0, 1];
        let scale = rng.i64(1..=20);
        let lower = BigRational::from_integer(BigInt::from(1));
        let upper = BigRational::from_integer(BigInt::from(m));
        let result = Refiner::new()
            .refine(&p, &lower, &upper, Precision::Scale(scale))
            .unwrap();
        if !matches!(result, Refinement::Bounded { .. }) {
            continue;
        }
        let again = Refiner::new()
            .refine(&p, &result.lower(), &result.upper(), Precision::Scale(scale))
            .unwrap();
        assert_eq!(again, result, "cbrt({m}) @ iter = {i}, scale = {scale}");
    }

    let mut rng = Rng::with_seed(11);
    for i in 0..100 {
        let m = rng.i64(2..=10_000);
        let p = poly![-m, 0, 0, 1];
        let digits = rng.u64(1..=20);
        let lower = BigRational::from_integer(BigInt::from(1));
        let upper = BigRational::from_integer(BigInt::from(m));
        let result = Refiner::new()
            .refine(&p, &lower, &upper, Precision::Digits(digits))
            .unwrap();
        if !matches!(result, Refinement::Bounded { .. }) {
            continue;
        }
        let again = Refiner::new()
            .refine(&p, &result.lower(), &result.upper(), Precision::Digits(digits))
            .unwrap();
        assert_eq!(again, result, "cbrt({m}) @ iter = {i}, digits = {digits}");
    }
}

#[test]
fn monotonic_tightening() {
    let mut rng = Rng::with_seed(9);
    for i in 0..50 {
        let m = rng.i64(2..=10_000);
        let p = poly![-m, 0, 0, 1];
        let lower = BigRational::from_integer(BigInt::from(1));
        let upper = BigRational::from_integer(BigInt::from(m));
        let mut root = RootRefinement::new(p, lower, upper, Precision::Scale(0)).unwrap();
        for scale in (1..=40).step_by(3) {
            let finer = root.refine_scale(scale).unwrap();
            assert!(
                finer.lower_bound() >= root.lower_bound() && finer.upper_bound() <= root.upper_bound(),
                "{} is not inside {} @ iter = {i}, scale = {scale}",
                finer.approximation(),
                root.approximation()
            );
            root = finer;
        }
    }
}

#[test]
fn narrow_brackets_are_out_of_bounds() {
    let mut rng = Rng::with_seed(10);
    for i in 0..100 {
        let m = rng.i64(2..=1000);
        let p = poly![-m, 0, 1];
        // an exact bracket around sqrt(m) one millionth wide, off the grid
        let den = BigInt::from(1_000_000);
        let scaled = BigInt::from(m * 1_000_000_000_000).sqrt();
        let lower = BigRational::new(scaled.clone(), den.clone());
        let upper = BigRational::new(scaled + 1, den);
        let result = Refiner::new()
            .refine(&p, &lower, &upper, Precision::Scale(3))
            .unwrap();
        assert!(result.is_out_of_bounds(), "{result} @ iter = {i}, m = {m}");
    }
}
