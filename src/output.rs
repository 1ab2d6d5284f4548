/// Joins the decimal representations of `values` with `separator` between
/// elements. An empty slice yields an empty string.
pub fn join_integers(values: &[i64], separator: &str) -> String {
    values
        .iter()
        .map(|value| value.to_string())
        .collect::<Vec<_>>()
        .join(separator)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_slice_joins_to_empty_string() {
        assert_eq!(join_integers(&[], ","), "");
    }

    #[test]
    fn single_element_has_no_separator() {
        assert_eq!(join_integers(&[5], ","), "5");
    }

    #[test]
    fn elements_are_separated() {
        assert_eq!(join_integers(&[1, 2, 3], ","), "1,2,3");
        assert_eq!(join_integers(&[1, 2, 3], " "), "1 2 3");
    }

    #[test]
    fn negative_values_join_cleanly() {
        assert_eq!(join_integers(&[-1, 0, 2], ","), "-1,0,2");
    }
}
