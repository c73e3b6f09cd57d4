mod prop_tests {
    use crate::{
        PERSIAN_ALPHABET, collation_key, first_letter_rank, is_likely_persian,
        numerals::{ARABIC_DIGITS, ASCII_DIGITS, PERSIAN_DIGITS},
        rank, remove_special_characters, to_ascii_digits,
    };
    use proptest::prelude::*;

    fn persian_letter() -> impl Strategy<Value = char> {
        proptest::sample::select(PERSIAN_ALPHABET.to_vec())
    }

    proptest! {
        #[test]
        fn ascii_digits_are_untouched(s in "[0-9]{0,200}") {
            prop_assert_eq!(to_ascii_digits(&s), s.as_str());
        }

        #[test]
        fn persian_digits_map_position_wise(idx in proptest::collection::vec(0usize..10, 0..100)) {
            let persian: String = idx.iter().map(|&i| PERSIAN_DIGITS[i]).collect();
            let arabic: String = idx.iter().map(|&i| ARABIC_DIGITS[i]).collect();
            let ascii: String = idx.iter().map(|&i| ASCII_DIGITS[i]).collect();
            prop_assert_eq!(to_ascii_digits(&persian), ascii.as_str());
            prop_assert_eq!(to_ascii_digits(&arabic), ascii.as_str());
        }

        #[test]
        fn mixed_digits_normalize_independently(
            picks in proptest::collection::vec((0usize..3, 0usize..10), 0..100)
        ) {
            let tables = [&PERSIAN_DIGITS, &ARABIC_DIGITS, &ASCII_DIGITS];
            let mixed: String = picks.iter().map(|&(t, i)| tables[t][i]).collect();
            let ascii: String = picks.iter().map(|&(_, i)| ASCII_DIGITS[i]).collect();
            prop_assert_eq!(to_ascii_digits(&mixed), ascii.as_str());
        }

        #[test]
        fn normalizer_is_idempotent(s in "\\PC{0,300}") {
            let once = to_ascii_digits(&s).into_owned();
            let twice = to_ascii_digits(&once).into_owned();
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn key_is_two_digits_per_ranked_letter(s in "\\PC{0,200}") {
            let key = collation_key(&s);
            let ranked = s.chars().filter(|&c| rank(c).is_some()).count();
            prop_assert_eq!(key.len(), ranked * 2);
            prop_assert!(key.bytes().all(|b| b.is_ascii_digit()));
        }

        #[test]
        fn key_order_follows_first_letter_rank(
            a in persian_letter(),
            b in persian_letter(),
            tail_a in "[آابپتثجچحخدذرزژسشصضطظعغفقکگلمنوهی]{0,8}",
            tail_b in "[آابپتثجچحخدذرزژسشصضطظعغفقکگلمنوهی]{0,8}",
        ) {
            prop_assume!(a != b);
            let sa = format!("{a}{tail_a}");
            let sb = format!("{b}{tail_b}");
            prop_assert_eq!(
                collation_key(&sa).cmp(&collation_key(&sb)),
                first_letter_rank(&sa).cmp(&first_letter_rank(&sb))
            );
        }

        #[test]
        fn any_persian_letter_except_pe_is_detected(c in persian_letter(), prefix in "[a-z]{0,10}") {
            prop_assume!(c != 'پ');
            let text = format!("{prefix}{c}");
            prop_assert!(is_likely_persian(&text));
        }

        #[test]
        fn stripping_is_idempotent(s in "\\PC{0,300}") {
            let once = remove_special_characters(&s).into_owned();
            let twice = remove_special_characters(&once).into_owned();
            prop_assert_eq!(once, twice);
        }
    }
}
