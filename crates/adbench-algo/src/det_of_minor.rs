use crate::index_list::IndexList;
use adbench_core::Scalar;

/// Determinant of a minor of the `ell x ell` row-major matrix `x`, by expansion along its first
/// row.
///
/// The minor is made of the `k` rows active in `rows` and the `k` columns active in `cols`, both
/// lists having `ell` elements. Both lists are modified during the computation and are left
/// exactly as they were on return.
///
/// # Example
///
/// ```
/// use adbench_algo::{det_of_minor, IndexList};
///
/// let x = [1.0, 2.0, 3.0, 4.0];
/// let mut rows = IndexList::new(2);
/// let mut cols = IndexList::new(2);
/// assert_eq!(-2.0, det_of_minor(&x, 2, 2, &mut rows, &mut cols));
///
/// // Evaluate the 1x1 minor left by removing row 0 and column 1
/// let r = rows.unlink_after(rows.head());
/// let c = cols.unlink_after(0);
/// assert_eq!(3.0, det_of_minor(&x, 2, 1, &mut rows, &mut cols));
/// rows.restore(r);
/// cols.restore(c);
/// ```
pub fn det_of_minor<T: Scalar>(x: &[T], ell: usize, k: usize, rows: &mut IndexList, cols: &mut IndexList) -> T {
    debug_assert_eq!(ell * ell, x.len());
    debug_assert_eq!(ell, rows.len());
    debug_assert_eq!(ell, cols.len());

    let i = rows.first();
    if k == 1 {
        let j = cols.first();
        return x[i * ell + j].clone();
    }

    let mut det = T::zero();
    let mut positive = true;
    let mut prev = cols.head();
    let mut j = cols.first();
    while j != cols.head() {
        let col_token = cols.unlink_after(prev);
        let row_token = rows.unlink_after(rows.head());

        let minor = det_of_minor(x, ell, k - 1, rows, cols);
        let term = x[i * ell + j].clone() * minor;
        det = if positive { det + term } else { det - term };
        positive = !positive;

        rows.restore(row_token);
        cols.restore(col_token);

        prev = j;
        j = cols.next(j);
    }
    det
}

#[cfg(test)]
mod tests {
    use super::*;

    fn det(x: &[f64], ell: usize) -> f64 {
        let mut rows = IndexList::new(ell);
        let mut cols = IndexList::new(ell);
        det_of_minor(x, ell, ell, &mut rows, &mut cols)
    }

    #[test]
    fn test_single_element() {
        assert_eq!(7.0, det(&[7.0], 1));
    }

    #[test]
    fn test_two_by_two() {
        assert_eq!(1.0 * 4.0 - 2.0 * 3.0, det(&[1.0, 2.0, 3.0, 4.0], 2));
    }

    #[test]
    fn test_three_by_three() {
        let x = [1., 2., 3., 4., 5., 6., 7., 8., 10.];
        let expected = 1. * (5. * 10. - 6. * 8.) - 2. * (4. * 10. - 6. * 7.) + 3. * (4. * 8. - 5. * 7.);
        assert_eq!(expected, det(&x, 3));
    }

    #[test]
    fn test_empty_matrix_is_empty_sum() {
        assert_eq!(0.0, det(&[], 0));
    }

    #[test]
    fn test_lists_restored() {
        let x: Vec<f64> = (0..16).map(|v| v as f64).collect();
        let mut rows = IndexList::new(4);
        let mut cols = IndexList::new(4);
        det_of_minor(&x, 4, 4, &mut rows, &mut cols);
        assert_eq!(IndexList::new(4), rows);
        assert_eq!(IndexList::new(4), cols);
    }

    #[test]
    fn test_integer_scalar() {
        let x: [i64; 9] = [2, -1, 0, -1, 2, -1, 0, -1, 2];
        let mut rows = IndexList::new(3);
        let mut cols = IndexList::new(3);
        assert_eq!(4, det_of_minor(&x, 3, 3, &mut rows, &mut cols));
    }
}
