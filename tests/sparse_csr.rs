//! Tests for the compressed sparse row matrix: construction, conversion back
//! to dense, transpose, scaling and products against dense operands.
//!
//! The fixtures are small hand-checked matrices; the randomized counterparts
//! of these checks live in `property_tests.rs`.

use approx::assert_relative_eq;
use csrmat::{DenseMatrix, SparseMatrix};
use rand::Rng;

fn staircase() -> DenseMatrix<f64, 4, 5> {
    DenseMatrix::from([
        [0.0, 0.0, 0.0, 0.0, 0.0],
        [5.0, 8.0, 0.0, 0.0, 0.0],
        [0.0, 0.0, 0.0, 0.0, 0.0],
        [0.0, 0.0, 2.0, 0.0, 6.0],
    ])
}

/// Builds a random `N x M` matrix where roughly `density` of the entries are non-zero.
fn random_sparse_dense<const N: usize, const M: usize>(density: f64) -> DenseMatrix<f64, N, M> {
    let mut rng = rand::thread_rng();
    DenseMatrix::from_fn(|_, _| {
        if rng.gen_bool(density) {
            rng.gen_range(-10.0..10.0)
        } else {
            0.0
        }
    })
}

#[test]
fn construction_from_empty_dense() {
    let empty = DenseMatrix::<f64, 3, 3>::zeros();
    let s = SparseMatrix::from_dense(&empty);
    assert_eq!(s.nnz(), 0);
    assert_eq!(s.row_offsets(), &[0, 0, 0, 0]);
    assert_eq!(s.to_dense(), empty);
}

#[test]
fn construction_from_sparse_dense() {
    let s = SparseMatrix::from_dense(&staircase());
    assert_eq!(s.nnz(), 4);
    assert_eq!(s.values(), &[5.0, 8.0, 2.0, 6.0]);
    assert_eq!(s.columns(), &[0, 1, 2, 4]);
    assert_eq!(s.row_offsets(), &[0, 0, 2, 2, 4]);
    assert_eq!(s.to_dense(), staircase());
}

#[test]
fn construction_from_full_dense() {
    let d = DenseMatrix::<f64, 3, 3>::from([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]]);
    let s = SparseMatrix::from(&d);
    assert_eq!(s.nnz(), 9);
    assert_eq!(s.to_dense(), d);
}

#[test]
fn literal_and_dense_construction_agree() {
    let lit = SparseMatrix::<f64, 3, 3>::from_slice(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0])
        .unwrap();
    let d = DenseMatrix::from([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]]);
    assert_eq!(lit, SparseMatrix::from_dense(&d));
}

#[test]
fn transpose_of_rectangular_matrix() {
    let expected = DenseMatrix::<f64, 5, 4>::from([
        [0.0, 5.0, 0.0, 0.0],
        [0.0, 8.0, 0.0, 0.0],
        [0.0, 0.0, 0.0, 2.0],
        [0.0, 0.0, 0.0, 0.0],
        [0.0, 0.0, 0.0, 6.0],
    ]);
    let s = SparseMatrix::from_dense(&staircase());
    assert_eq!(s.transpose().to_dense(), expected);
    assert_eq!(s.transpose(), SparseMatrix::from_dense(&expected));
}

#[test]
fn transpose_of_full_matrix() {
    let b = DenseMatrix::<f64, 3, 3>::from([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]]);
    let b_t = DenseMatrix::from([[1.0, 4.0, 7.0], [2.0, 5.0, 8.0], [3.0, 6.0, 9.0]]);
    assert_eq!(SparseMatrix::from_dense(&b).transpose().to_dense(), b_t);
}

#[test]
fn scalar_multiplication_into_matrix() {
    let mut a = SparseMatrix::<f64, 3, 3>::from_slice(&[1.0; 9]).unwrap();
    a *= 2.0;
    let b = SparseMatrix::<f64, 3, 3>::from_slice(&[2.0; 9]).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.to_dense(), DenseMatrix::from([[2.0, 2.0, 2.0]; 3]));
}

#[test]
fn scaling_by_zero_keeps_explicit_zeros() {
    let s = SparseMatrix::from_dense(&staircase());
    let zeroed = s.scale(0.0);
    assert_eq!(zeroed.nnz(), s.nnz());
    assert_eq!(zeroed.row_offsets(), s.row_offsets());
    assert_eq!(zeroed.to_dense(), DenseMatrix::zeros());
    let mut pruned = zeroed.clone();
    pruned.prune();
    assert_eq!(pruned, SparseMatrix::from_dense(&zeroed.to_dense()));
}

#[test]
fn sparse_times_dense() {
    let a = SparseMatrix::<f64, 3, 4>::from_slice(&[
        1.0, 2.0, 0.0, 0.0, //
        0.0, 1.0, 0.0, 1.0, //
        0.0, 0.0, 0.0, 0.0,
    ])
    .unwrap();
    let b = DenseMatrix::<f64, 4, 3>::from([[1.0, 2.0, 3.0]; 4]);
    let c = DenseMatrix::from([[3.0, 6.0, 9.0], [2.0, 4.0, 6.0], [0.0, 0.0, 0.0]]);
    assert_eq!(&a * &b, c);
}

#[test]
fn random_sparse_products_match_dense() {
    let d = random_sparse_dense::<12, 9>(0.2);
    let b = random_sparse_dense::<9, 7>(0.9);
    let s = SparseMatrix::from_dense(&d);
    let sparse_first = s.matmul(&b);
    let dense_first = d.matmul(&b);
    for (x, y) in sparse_first.iter().zip(dense_first.iter()) {
        assert_relative_eq!(*x, *y, epsilon = 1e-9, max_relative = 1e-12);
    }

    let lhs = random_sparse_dense::<5, 12>(0.9);
    let via_sparse = lhs.matmul_sparse(&s);
    let via_dense = lhs.matmul(&d);
    for (x, y) in via_sparse.iter().zip(via_dense.iter()) {
        assert_relative_eq!(*x, *y, epsilon = 1e-9, max_relative = 1e-12);
    }
}

#[test]
fn triplet_iteration_lists_every_entry() {
    let s = SparseMatrix::from_dense(&staircase());
    let triplets: Vec<(usize, usize, f64)> = s.iter().map(|(i, j, &v)| (i, j, v)).collect();
    assert_eq!(triplets, vec![(1, 0, 5.0), (1, 1, 8.0), (3, 2, 2.0), (3, 4, 6.0)]);
    assert_eq!(s.row(0).count(), 0);
    assert_eq!(s.row(3).map(|(j, _)| j).collect::<Vec<_>>(), vec![2, 4]);
}
