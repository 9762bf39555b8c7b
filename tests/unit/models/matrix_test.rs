use super::*;

#[test]
fn can_create_matrix_from_raw_data() {
    let matrix = Matrix::new(2, vec![0, 3, 5, 0]).expect("cannot create matrix");

    assert_eq!(matrix.size(), 2);
    assert_eq!(matrix[0][1], 3);
    assert_eq!(matrix[1][0], 5);
}

#[test]
fn cannot_create_matrix_from_undersized_data() {
    assert!(Matrix::new(3, vec![0; 8]).is_err());
    assert!(Matrix::new(3, vec![0; 10]).is_err());
    assert!(Matrix::new(0, vec![0]).is_err());
}

#[test]
fn can_create_matrix_from_fn() {
    let matrix = Matrix::from_fn(3, |from, to| (from as i64 - to as i64).abs());

    assert_eq!(matrix.size(), 3);
    assert_eq!(matrix[0][2], 2);
    assert_eq!(matrix[2][0], 2);
    assert_eq!(matrix[1][1], 0);
}
