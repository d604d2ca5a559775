mod prop_tests {
    use crate::{Slugify, slugify};
    use proptest::prelude::*;
    use regex::Regex;

    proptest! {
        #[test]
        fn slugify_idempotent(s in "\\PC{0,200}") {
            let slug = Slugify::new();
            let once = slug.slugify(&s);
            let twice = slug.slugify(&once);
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn underscore_idempotent_preserving_case(s in "\\PC{0,200}") {
            let slug = Slugify::new().with_underscore_separator(true).with_lower_case(false);
            let once = slug.slugify(&s);
            let twice = slug.slugify(&once);
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn hyphen_slug_shape(s in "\\PC{0,200}") {
            let shape = Regex::new(r"^([a-z0-9_]+(-[a-z0-9_]+)*)?$").unwrap();
            let out = Slugify::new().slugify(&s);
            prop_assert!(shape.is_match(&out), "bad slug {:?} from {:?}", out, s);
        }

        #[test]
        fn underscore_slug_shape(s in "\\PC{0,200}") {
            let shape = Regex::new(r"^([a-z0-9-]+(_[a-z0-9-]+)*)?$").unwrap();
            let out = Slugify::new().with_underscore_separator(true).slugify(&s);
            prop_assert!(shape.is_match(&out), "bad slug {:?} from {:?}", out, s);
        }

        #[test]
        fn case_preserved_output_is_ascii(s in "\\PC{0,200}") {
            let out = Slugify::new().with_lower_case(false).slugify(&s);
            prop_assert!(out.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_'));
            prop_assert!(!out.starts_with('-') && !out.ends_with('-'));
            prop_assert!(!out.contains("--"));
        }

        #[test]
        fn whitespace_only_is_empty(s in "[ \t\r\n\u{00A0}\u{2003}\u{3000}]{0,50}") {
            prop_assert_eq!(Slugify::new().slugify(&s), "");
        }

        #[test]
        fn ascii_words_join_with_separator(words in prop::collection::vec("[a-z0-9]{1,10}", 1..6)) {
            let input = words.join("  ");
            prop_assert_eq!(Slugify::new().slugify(&input), words.join("-"));
            prop_assert_eq!(
                Slugify::new().with_underscore_separator(true).slugify(&input),
                words.join("_")
            );
        }

        #[test]
        fn free_function_matches_default_builder(s in "\\PC{0,100}") {
            prop_assert_eq!(slugify(&s), Slugify::new().slugify(&s));
        }
    }
}
