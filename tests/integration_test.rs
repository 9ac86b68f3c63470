use qir_roots::{
    num::{BigInt, BigRational},
    poly, refine_digits, refine_scale,
    __testing::{isolating_brackets, poly_from_roots},
    Decimal, Error, Poly, Precision, Refinement, Refiner, RootRefinement,
};

fn d(s: &str) -> Decimal {
    s.parse().unwrap()
}

fn q(n: i64, m: i64) -> BigRational {
    BigRational::new(BigInt::from(n), BigInt::from(m))
}

/// a tour of the most important features, the way a caller would use them
#[test]
fn tour() {
    let _ = simple_logger::init_with_level(log::Level::Debug);

    let cbrt2 = poly![-2, 0, 0, 1];
    let root = refine_scale(&cbrt2, &q(1, 1), &q(2, 1), 15).unwrap();
    assert_eq!(root.to_string(), "[1.259921049894873, 1.259921049894874]");
    assert_eq!(root.approximation(), &d("1.259921049894873"));
    assert!(!root.is_exact());

    let golden = poly![-1, -1, 1];
    let root = refine_scale(&golden, &q(1, 1), &q(2, 1), 20).unwrap();
    assert_eq!(
        root,
        Refinement::Bounded {
            lower: d("1.61803398874989484820"),
            upper: d("1.61803398874989484821"),
        }
    );

    let conjugate = refine_scale(&golden, &q(-1, 1), &q(0, 1), 20).unwrap();
    assert_eq!(
        conjugate,
        Refinement::Bounded {
            lower: d("-0.61803398874989484821"),
            upper: d("-0.61803398874989484820"),
        }
    );
}

#[test]
fn integer_roots_are_exact() {
    let roots = (1..=8).map(|k| q(k, 1)).collect::<Vec<_>>();
    let wilkinson = poly_from_roots(&roots);
    assert_eq!(wilkinson.degree(), 8);
    for ((lower, upper), root) in isolating_brackets(&roots).iter().zip(&roots) {
        for precision in [Precision::Scale(0), Precision::Scale(10), Precision::Digits(7)] {
            let result = Refiner::new()
                .refine(&wilkinson, lower, upper, precision)
                .unwrap();
            assert_eq!(
                result,
                Refinement::ExactRoot(Decimal::from(root.to_integer())),
                "{precision:?}"
            );
        }
    }
}

#[test]
fn digits_follow_magnitude() {
    // 10^6 x^2 - 2, root sqrt(2) / 1000
    let p = poly![-2, 0, 1_000_000];
    let root = refine_digits(&p, &q(1, 1000), &q(2, 1000), 6).unwrap();
    let Refinement::Bounded { lower, upper } = &root else {
        panic!("expected a bounded root, got {root}");
    };
    let exact = p.to_rational();
    assert!(exact.eval(&root.lower()) < q(0, 1));
    assert!(exact.eval(&root.upper()) > q(0, 1));
    assert!(lower.scale() > 6);
    assert!(upper - lower <= d("0.00000001"));
}

#[test]
fn root_refinement_progression() {
    let mut root = RootRefinement::new(
        poly![-5, 0, 1],
        q(2, 1),
        q(3, 1),
        Precision::Scale(1),
    )
    .unwrap();
    assert_eq!(root.approximation().to_string(), "[2.2, 2.3]");
    for (scale, expected) in [
        (3, "[2.236, 2.237]"),
        (7, "[2.2360679, 2.2360680]"),
        (30, "[2.236067977499789696409173668731, 2.236067977499789696409173668732]"),
    ] {
        root = root.refine_scale(scale).unwrap();
        assert_eq!(root.approximation().to_string(), expected);
    }
    assert_eq!(root.poly(), &poly![-5, 0, 1]);
}

#[test]
fn errors() {
    let p = poly![-2, 0, 1];
    let err = refine_scale(&p, &q(2, 1), &q(2, 1), 3).unwrap_err();
    assert_eq!(err.to_string(), "lower bound 2 is not below upper bound 2");
    assert!(matches!(
        refine_scale(&Poly::zero(), &q(1, 1), &q(2, 1), 3),
        Err(Error::Degenerate(-1))
    ));
    assert!(matches!(
        refine_digits(&p, &q(1, 1), &q(2, 1), 0),
        Err(Error::InvalidPrecision)
    ));
}
