//! Integration Tests for fairdraw
//!
//! These tests drive the crate-level operations end to end.

#[cfg(test)]
mod tests {
    use fairdraw::{
        entropy_bits, generate_string, sample, sample_double, sample_integer, shuffle,
        shuffle_in_place, CharacterSet, DomainError, DoubleRequest, Error, Exclusion,
        IntegerRequest, Number, RandomRequest, ShuffleOptions, StringRequest,
    };

    #[test]
    fn test_integer_sampling_honors_exclusions() {
        let request = IntegerRequest::new(0, 10).with_exclusion(Exclusion::Both);
        for _ in 0..100 {
            let v = sample_integer(&request).unwrap();
            assert!((1..=9).contains(&v), "got {}", v);
        }
    }

    #[test]
    fn test_no_integer_strictly_between_adjacent_bounds() {
        let request = IntegerRequest::new(5, 6).with_exclusion(Exclusion::Both);
        let result = sample_integer(&request);

        assert!(matches!(
            result,
            Err(Error::Domain(DomainError::EmptyIntegerRange { .. }))
        ));
    }

    #[test]
    fn test_collapsed_range_returns_its_value() {
        assert_eq!(sample_integer(&IntegerRequest::new(1, 1)).unwrap(), 1);
    }

    #[test]
    fn test_double_sampling_stays_inside_bounds() {
        let request = DoubleRequest::new(-2.5, 2.5).with_fraction_digits(2);
        for _ in 0..100 {
            let v = sample_double(&request).unwrap();
            assert!((-2.5..=2.5).contains(&v), "got {}", v);
        }
    }

    #[test]
    fn test_double_rejects_nan_bound() {
        let request = DoubleRequest::new(0.0, f64::NAN);
        assert!(matches!(sample_double(&request), Err(Error::Validation(_))));
    }

    #[test]
    fn test_sample_wraps_both_kinds() {
        let int = sample(&RandomRequest::Integer(IntegerRequest::new(3, 3))).unwrap();
        assert_eq!(int, Number::Integer(3));
        assert_eq!(int.as_f64(), 3.0);

        let dbl = sample(&RandomRequest::Double(DoubleRequest::default())).unwrap();
        assert!((0.0..=1.0).contains(&dbl.as_f64()));
    }

    #[test]
    fn test_shuffle_preserves_the_multiset() {
        let input: Vec<i32> = (0..100).collect();
        let output = shuffle(&input, &ShuffleOptions::default()).unwrap();

        let mut sorted = output.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, input);
    }

    #[test]
    fn test_two_element_anti_identity() {
        // The only admissible output for [1, 2] is [2, 1]
        let options = ShuffleOptions::default().preventing_identical();
        for _ in 0..50 {
            assert_eq!(shuffle(&[1, 2], &options).unwrap(), vec![2, 1]);
        }
    }

    #[test]
    fn test_in_place_shuffle_mutates_the_caller_slice() {
        let mut items: Vec<u8> = (0..16).collect();
        shuffle_in_place(&mut items, &ShuffleOptions::default()).unwrap();

        let mut sorted = items.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..16).collect::<Vec<u8>>());
    }

    #[test]
    fn test_empty_string_regardless_of_charset() {
        let request = StringRequest::new(0).with_charset(CharacterSet::Custom("xx".into()));
        assert_eq!(generate_string(&request).unwrap(), "");
    }

    #[test]
    fn test_ten_distinct_digits_fit_eleven_do_not() {
        let fits = StringRequest::new(10)
            .with_charset(CharacterSet::Numeric)
            .without_repetition();
        assert_eq!(generate_string(&fits).unwrap().len(), 10);

        let overflows = StringRequest::new(11)
            .with_charset(CharacterSet::Numeric)
            .without_repetition();
        assert!(matches!(
            generate_string(&overflows),
            Err(Error::Domain(DomainError::NotEnoughUniqueCharacters { .. }))
        ));
    }

    #[test]
    fn test_generated_characters_come_from_the_set() {
        let request = StringRequest::new(64).with_charset(CharacterSet::Lowercase);
        let s = generate_string(&request).unwrap();

        assert_eq!(s.chars().count(), 64);
        assert!(s.chars().all(|c| c.is_ascii_lowercase()));
    }

    #[test]
    fn test_entropy_of_distinct_draw() {
        let request = StringRequest::new(3)
            .with_charset(CharacterSet::Custom("abcde".into()))
            .without_repetition();
        let expected = 5f64.log2() + 4f64.log2() + 3f64.log2();

        assert!((entropy_bits(&request).unwrap() - expected).abs() < 1e-9);
    }

    #[test]
    fn test_entropy_and_generation_agree_on_validity() {
        // Whatever the estimator rejects, the generator rejects too
        let request = StringRequest::new(30)
            .with_charset(CharacterSet::Hexadecimal)
            .without_repetition();

        assert!(entropy_bits(&request).is_err());
        assert!(generate_string(&request).is_err());
    }

    #[test]
    fn test_exhaustion_reports_the_domain() {
        // Sub-resolution interval: every draw rounds onto the excluded bound
        let request = DoubleRequest::new(0.0, 0.04)
            .with_exclusion(Exclusion::Lower)
            .with_fraction_digits(1);

        match sample_double(&request) {
            Err(Error::Exhausted(e)) => {
                assert_eq!(e.attempts, 30);
                assert!(e.domain.contains("0.04"));
            }
            other => panic!("expected exhaustion, got {:?}", other),
        }
    }
}
