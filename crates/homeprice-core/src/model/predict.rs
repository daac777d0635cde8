pub fn predict(size: f64, rooms: f64, beta0: f64, beta1: f64, beta2: f64) -> f64 {
    beta0 + beta1 * size + beta2 * rooms
}

#[cfg(test)]
mod tests {
    use super::predict;

    #[test]
    fn test_origin_is_intercept() {
        for b0 in [-3000.0, 0.0, 12.5, f64::MAX] {
            assert_eq!(predict(0., 0., b0, 10., 1000.), b0);
        }
    }
    #[test]
    fn test_three_houses_first_row() {
        assert_eq!(predict(100., 2., -3000., 10., 1000.), 0.);
    }
}
