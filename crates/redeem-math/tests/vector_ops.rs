//! Integration tests for the shared vector arithmetic on dense vectors and views.

use redeem_math::math::functions::{Abs, Mult, Plus};
use redeem_math::math::{equivalent, strict_equivalence, DenseVector, Vector};
use redeem_math::VectorError;

fn dense(values: &[f64]) -> DenseVector {
    DenseVector::from_slice(values)
}

// ---------------------------------------------------------------------------
// Checked access and cardinality
// ---------------------------------------------------------------------------

#[test]
fn get_past_the_end_is_an_index_error() {
    let v = DenseVector::new(4);
    assert!(matches!(v.get(5), Err(VectorError::Index { index: 5, size: 4 })));
    assert!(matches!(v.get(4), Err(VectorError::Index { .. })));
    assert_eq!(v.get(3).unwrap(), 0.0);
}

#[test]
fn set_past_the_end_leaves_the_vector_untouched() {
    let mut v = dense(&[1.0, 2.0]);
    assert!(v.set(2, 9.0).is_err());
    assert_eq!(v.as_slice(), &[1.0, 2.0]);
}

#[test]
fn mismatched_sizes_are_cardinality_errors() {
    let a = DenseVector::new(3);
    let b = DenseVector::new(4);
    assert!(matches!(
        a.plus(&b),
        Err(VectorError::Cardinality { expected: 3, actual: 4 })
    ));
    assert!(a.minus(&b).is_err());
    assert!(a.times(&b).is_err());
    assert!(a.dot(&b).is_err());
    assert!(a.get_distance_squared(&b).is_err());
}

// ---------------------------------------------------------------------------
// Copy-on-operation arithmetic
// ---------------------------------------------------------------------------

#[test]
fn scalar_arithmetic_returns_fresh_vectors() {
    let v = dense(&[1.0, 0.0, -2.0]);
    assert_eq!(v.plus_scalar(1.0).as_slice(), &[2.0, 1.0, -1.0]);
    assert_eq!(v.times_scalar(3.0).as_slice(), &[3.0, 0.0, -6.0]);
    assert_eq!(v.divide(2.0).as_slice(), &[0.5, 0.0, -1.0]);
    assert_eq!(v.as_slice(), &[1.0, 0.0, -2.0]);
}

#[test]
fn vector_arithmetic() {
    let a = dense(&[1.0, 2.0, 0.0]);
    let b = dense(&[0.0, 3.0, 4.0]);
    assert_eq!(a.plus(&b).unwrap().as_slice(), &[1.0, 5.0, 4.0]);
    assert_eq!(a.minus(&b).unwrap().as_slice(), &[1.0, -1.0, -4.0]);
    assert_eq!(a.times(&b).unwrap().as_slice(), &[0.0, 6.0, 0.0]);
    assert_eq!(a.dot(&b).unwrap(), 6.0);
}

#[test]
fn results_keep_the_operand_name() {
    let mut a = dense(&[1.0, 2.0]);
    a.set_name(Some("a".to_string()));
    assert_eq!(a.plus_scalar(1.0).name(), Some("a"));
}

#[test]
fn z_sum_and_max() {
    let v = dense(&[-3.0, -1.0, -2.0]);
    assert_eq!(v.z_sum(), -6.0);
    assert_eq!(v.max_value(), -1.0);
    assert_eq!(v.max_value_index(), Some(1));

    let empty = DenseVector::new(0);
    assert_eq!(empty.max_value(), f64::NEG_INFINITY);
    assert_eq!(empty.max_value_index(), None);
}

#[test]
fn max_value_propagates_nan() {
    let v = dense(&[1.0, f64::NAN, 3.0]);
    assert!(v.max_value().is_nan());
    assert!(dense(&[f64::NAN, 2.0]).max_value().is_nan());
}

#[test]
fn max_value_index_prefers_the_first_maximum() {
    let v = dense(&[0.0, 4.0, 1.0, 4.0]);
    assert_eq!(v.max_value_index(), Some(1));
}

// ---------------------------------------------------------------------------
// Norms
// ---------------------------------------------------------------------------

#[test]
fn norm_special_powers() {
    let v = dense(&[0.0, 5.0, 0.0, 3.0]);
    assert_eq!(v.norm(0.0).unwrap(), 2.0);
    assert_eq!(v.norm(1.0).unwrap(), 8.0);
    assert!((v.norm(2.0).unwrap() - 34f64.sqrt()).abs() < 1e-12);
    assert_eq!(v.norm(f64::INFINITY).unwrap(), 5.0);
}

#[test]
fn norm_general_power() {
    let v = dense(&[1.0, 2.0]);
    let expected = 9f64.powf(1.0 / 3.0);
    assert!((v.norm(3.0).unwrap() - expected).abs() < 1e-12);
}

#[test]
fn negative_or_nan_power_is_rejected() {
    let v = dense(&[1.0]);
    assert!(matches!(v.norm(-1.0), Err(VectorError::InvalidArgument(_))));
    assert!(matches!(v.norm(f64::NAN), Err(VectorError::InvalidArgument(_))));
    assert!(v.normalize_power(-0.5).is_err());
}

#[test]
fn normalize_power_divides_by_the_norm() {
    let v = dense(&[1.0, 3.0]);
    let n = v.normalize_power(1.0).unwrap();
    assert_eq!(n.as_slice(), &[0.25, 0.75]);
}

#[test]
fn normalizing_the_zero_vector_does_not_panic() {
    let v = DenseVector::new(3);
    let n = v.normalize();
    assert_eq!(n.as_slice(), &[0.0, 0.0, 0.0]);
    assert_eq!(n.norm(2.0).unwrap(), 0.0);
}

// ---------------------------------------------------------------------------
// Length cache and distance
// ---------------------------------------------------------------------------

#[test]
fn length_squared_is_recomputed_after_a_write() {
    let mut v = dense(&[3.0, 4.0]);
    assert_eq!(v.get_length_squared(), 25.0);
    v.set_quick(0, 0.0);
    assert_eq!(v.get_length_squared(), 16.0);
    v.assign_value(1.0);
    assert_eq!(v.get_length_squared(), 2.0);
}

#[test]
fn dense_distance_scans_every_slot() {
    let v = dense(&[0.0, 3.0]);
    let other = dense(&[1.0, 1.0]);
    assert_eq!(v.get_distance_squared(&other).unwrap(), 5.0);
}

#[test]
fn view_distance_only_counts_its_own_non_zeros() {
    let mut parent = dense(&[0.0, 3.0]);
    let other = dense(&[1.0, 1.0]);
    let view_distance = {
        let view = parent.view_part(0, 2).unwrap();
        view.get_distance_squared(&other).unwrap()
    };
    assert_eq!(view_distance, 4.0);
    assert_eq!(parent.get_distance_squared(&other).unwrap(), 5.0);
}

// ---------------------------------------------------------------------------
// In-place assignment
// ---------------------------------------------------------------------------

#[test]
fn assign_family_mutates_and_chains() {
    let mut v = DenseVector::new(3);
    v.assign_value(2.0).assign_with_scalar(&Mult, 1.5);
    assert_eq!(v.as_slice(), &[3.0, 3.0, 3.0]);

    v.assign_slice(&[-1.0, 0.0, 2.0]).unwrap().assign_unary(&Abs);
    assert_eq!(v.as_slice(), &[1.0, 0.0, 2.0]);

    v.assign_unary(&|x: f64| x * 10.0);
    assert_eq!(v.as_slice(), &[10.0, 0.0, 20.0]);

    v.assign_from(&dense(&[4.0, 5.0, 6.0])).unwrap();
    assert_eq!(v.as_slice(), &[4.0, 5.0, 6.0]);

    v.assign_from_with(&dense(&[1.0, 1.0, 1.0]), &|a: f64, b: f64| a - b)
        .unwrap();
    assert_eq!(v.as_slice(), &[3.0, 4.0, 5.0]);
}

#[test]
fn assign_checks_cardinality() {
    let mut v = DenseVector::new(3);
    assert!(matches!(
        v.assign_slice(&[1.0]),
        Err(VectorError::Cardinality { expected: 3, actual: 1 })
    ));
    assert!(v.assign_from(&DenseVector::new(2)).is_err());
    assert!(v.assign_from_with(&DenseVector::new(2), &Plus).is_err());
}

#[test]
fn add_to_accumulates_into_the_target() {
    let a = dense(&[1.0, 0.0, 2.0]);
    let mut b = dense(&[1.0, 1.0, 1.0]);
    a.add_to(&mut b).unwrap();
    assert_eq!(b.as_slice(), &[2.0, 1.0, 3.0]);
    assert!(a.add_to(&mut DenseVector::new(2)).is_err());
}

#[test]
fn add_to_from_a_view() {
    let mut parent = dense(&[9.0, 1.0, 2.0]);
    let mut target = dense(&[1.0, 1.0]);
    {
        let view = parent.view_part(1, 2).unwrap();
        view.add_to(&mut target).unwrap();
        assert!(view.add_to(&mut DenseVector::new(3)).is_err());
    }
    assert_eq!(target.as_slice(), &[2.0, 3.0]);
}

// ---------------------------------------------------------------------------
// Iteration, elements and views
// ---------------------------------------------------------------------------

#[test]
fn non_zero_iteration_after_assign() {
    let mut v = DenseVector::new(4);
    v.assign_slice(&[1.0, 0.0, 3.0, 0.0]).unwrap();
    let seen: Vec<(usize, f64)> = v.iterate_non_zero().map(|e| (e.index(), e.get())).collect();
    assert_eq!(seen, vec![(0, 1.0), (2, 3.0)]);
    assert_eq!(v.iterate_all().count(), 4);
}

#[test]
fn iteration_is_restartable() {
    let v = dense(&[1.0, 0.0, 2.0]);
    assert_eq!(v.iterate_non_zero().count(), 2);
    assert_eq!(v.iterate_non_zero().count(), 2);
}

#[test]
fn element_handle_writes_through() {
    let mut v = dense(&[1.0, 2.0]);
    {
        let mut element = v.get_element(1).unwrap();
        assert_eq!(element.index(), 1);
        assert_eq!(element.get(), 2.0);
        element.set(7.0);
    }
    assert_eq!(v[1], 7.0);
    assert!(v.get_element(2).is_err());
}

#[test]
fn view_writes_land_in_the_parent() {
    let mut parent = dense(&[0.0, 1.0, 2.0, 3.0, 4.0]);
    {
        let mut view = parent.view_part(2, 3).unwrap();
        assert_eq!(view.size(), 3);
        assert_eq!(view.get(0).unwrap(), 2.0);
        view.set(1, 30.0).unwrap();
        assert!(view.get(3).is_err());
    }
    assert_eq!(parent.get(3).unwrap(), 30.0);
}

#[test]
fn view_part_bounds() {
    let mut v = DenseVector::new(4);
    assert!(matches!(v.view_part(0, 5), Err(VectorError::Cardinality { .. })));
    assert!(matches!(v.view_part(3, 2), Err(VectorError::Index { .. })));
}

#[test]
fn views_of_views_shift_twice() {
    let mut parent = dense(&[0.0, 1.0, 2.0, 3.0, 4.0, 5.0]);
    {
        let mut outer = parent.view_part(1, 4).unwrap();
        let mut inner = outer.view_part(1, 2).unwrap();
        assert_eq!(inner.get(0).unwrap(), 2.0);
        inner.set(1, -3.0).unwrap();
    }
    assert_eq!(parent.as_slice(), &[0.0, 1.0, 2.0, -3.0, 4.0, 5.0]);
}

#[test]
fn view_arithmetic_returns_dense_results() {
    let mut parent = dense(&[1.0, 2.0, 3.0]);
    let view = parent.view_part(1, 2).unwrap();
    let doubled = view.times_scalar(2.0);
    assert_eq!(doubled.as_slice(), &[4.0, 6.0]);
    assert_eq!(view.plus(&dense(&[1.0, 1.0])).unwrap().as_slice(), &[3.0, 4.0]);
    assert_eq!(DenseVector::from_vector(&view).as_slice(), &[2.0, 3.0]);
}

// ---------------------------------------------------------------------------
// Outer product
// ---------------------------------------------------------------------------

#[test]
fn cross_builds_the_outer_product() {
    let a = dense(&[1.0, 2.0]);
    let b = dense(&[3.0, 0.0, 4.0]);
    let m = a.cross(&b);
    assert_eq!(m.shape(), (2, 3));
    assert_eq!(m.row_slice(0), &[3.0, 0.0, 4.0]);
    assert_eq!(m.row_slice(1), &[6.0, 0.0, 8.0]);
}

// ---------------------------------------------------------------------------
// Equivalence
// ---------------------------------------------------------------------------

#[test]
fn clone_is_deep_and_equal() {
    let original = dense(&[1.0, 2.0, 3.0]);
    let mut copy = original.clone_vector();
    assert_eq!(copy, original);
    copy.set_quick(0, 10.0);
    assert_eq!(original.get(0).unwrap(), 1.0);
    assert_ne!(copy, original);
}

#[test]
fn dense_against_view_compares_values_only() {
    let a = dense(&[1.0, 2.0]);
    let mut b = a.clone();
    let mut view = b.view_part(0, 2).unwrap();
    view.set_name(Some("window".to_string()));
    assert!(a == view);
    assert!(view == a);
    assert!(equivalent(&a, &view));
    assert!(!strict_equivalence(&a, &view));
}

#[test]
fn strict_equivalence_between_dense_vectors() {
    let a = dense(&[1.0, 2.0]);
    let b = dense(&[1.0, 2.0]);
    assert!(strict_equivalence(&a, &b));
    assert!(!strict_equivalence(&a, &dense(&[1.0, 2.5])));
    assert!(!equivalent(&a, &dense(&[1.0, 2.0, 0.0])));
}

#[test]
fn equal_vectors_hash_alike() {
    let a = dense(&[0.0, 1.5, -2.0]);
    let b = a.clone();
    assert_eq!(a.hash_code(), b.hash_code());
}
