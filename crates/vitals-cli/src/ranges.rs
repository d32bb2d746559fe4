//! Selection of the ranges shown by `vitals ranges`.

use anyhow::{Result, bail};

use vitals_model::PhysiologicalRange;

/// Every listed range: the clamped vitals followed by age.
pub fn all_ranges() -> Vec<PhysiologicalRange> {
    PhysiologicalRange::ALL
        .into_iter()
        .chain([PhysiologicalRange::AGE])
        .collect()
}

/// Ranges matching the given names, or all of them when `names` is empty.
pub fn select_ranges(names: &[String]) -> Result<Vec<PhysiologicalRange>> {
    if names.is_empty() {
        return Ok(all_ranges());
    }
    names
        .iter()
        .map(|name| match PhysiologicalRange::by_name(name) {
            Some(range) => Ok(range),
            None => bail!("unknown range: {name}"),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_names_lists_everything() {
        let ranges = select_ranges(&[]).expect("select");
        assert_eq!(ranges.len(), 7);
        assert_eq!(ranges.last(), Some(&PhysiologicalRange::AGE));
    }

    #[test]
    fn names_filter_in_given_order() {
        let names = vec!["Glucose".to_string(), "age".to_string()];
        let ranges = select_ranges(&names).expect("select");
        assert_eq!(
            ranges,
            vec![PhysiologicalRange::GLUCOSE, PhysiologicalRange::AGE]
        );
    }

    #[test]
    fn unknown_name_is_an_error() {
        let err = select_ranges(&["weight".to_string()]).unwrap_err();
        assert_eq!(err.to_string(), "unknown range: weight");
    }
}
