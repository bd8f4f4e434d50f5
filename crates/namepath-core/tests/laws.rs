use namepath_core::masking::{escape_for_delimiter, unescape, validate_masked};
use namepath_core::{ComponentListName, DelimitedStringName, MACHINE_DELIMITER, Name};
use proptest::prelude::*;

// Raw text that leans on the characters masking cares about.
fn raw_component() -> impl Strategy<Value = String> {
    "[ab./,\\\\ä]{0,6}"
}

fn delimiter() -> impl Strategy<Value = char> {
    prop_oneof![Just('.'), Just('/'), Just(','), Just('#')]
}

fn raw_names() -> impl Strategy<Value = Vec<String>> {
    proptest::collection::vec(raw_component(), 0..6)
}

proptest! {
    #[test]
    fn unescape_inverts_escape(raw in raw_component(), d in delimiter()) {
        let masked = escape_for_delimiter(&raw, d);
        prop_assert!(validate_masked(&masked, d).is_ok());
        prop_assert_eq!(unescape(&masked), raw);
    }

    #[test]
    fn escape_inverts_unescape_for_valid_masks(raw in raw_component(), d in delimiter()) {
        let masked = escape_for_delimiter(&raw, d);
        prop_assert_eq!(escape_for_delimiter(&unescape(&masked), d), masked);
    }

    #[test]
    fn machine_string_round_trips(raws in raw_names(), d in delimiter()) {
        // "" は常に 0 コンポーネントとして読まれる
        prop_assume!(raws != [""]);

        let list = ComponentListName::from_raw_components(&raws, d).unwrap();
        let delimited = DelimitedStringName::from_raw_components(&raws, d).unwrap();
        prop_assert_eq!(list.as_machine_string(), delimited.as_machine_string());

        let parsed = DelimitedStringName::parse(&list.as_machine_string(), MACHINE_DELIMITER).unwrap();
        let back: Vec<String> = parsed.components().map(unescape).collect();
        prop_assert_eq!(back, raws);
    }

    #[test]
    fn concat_adds_component_counts(left in raw_names(), right in raw_names()) {
        let a = ComponentListName::from_raw_components(&left, '/').unwrap();
        let b = DelimitedStringName::from_raw_components(&right, '/').unwrap();

        let ab = a.concat(&b).unwrap();
        prop_assert_eq!(ab.component_count(), a.component_count() + b.component_count());
        let ba = b.concat(&a).unwrap();
        prop_assert_eq!(ba.component_count(), a.component_count() + b.component_count());
    }

    #[test]
    fn edits_do_not_touch_the_receiver(raws in raw_names(), extra in raw_component()) {
        let list = ComponentListName::from_raw_components(&raws, '.').unwrap();
        let delimited = DelimitedStringName::from(&list);
        let masked = escape_for_delimiter(&extra, '.');

        let before: Vec<String> = list.components().map(str::to_string).collect();
        let _ = list.with_appended(&masked).unwrap();
        let _ = list.with_inserted(0, &masked).unwrap();
        let _ = delimited.with_appended(&masked).unwrap();
        let _ = delimited.with_inserted(0, &masked).unwrap();
        if !list.is_empty() {
            let _ = list.with_component(0, &masked).unwrap();
            let _ = list.with_removed(0).unwrap();
            let _ = delimited.with_component(0, &masked).unwrap();
            let _ = delimited.with_removed(0).unwrap();
        }

        let after: Vec<String> = list.components().map(str::to_string).collect();
        prop_assert_eq!(&after, &before);
        let after: Vec<String> = delimited.components().map(str::to_string).collect();
        prop_assert_eq!(&after, &before);
    }

    #[test]
    fn representations_agree(raws in raw_names(), d in delimiter()) {
        let list = ComponentListName::from_raw_components(&raws, d).unwrap();
        let delimited = DelimitedStringName::from_raw_components(&raws, d).unwrap();

        prop_assert!(list.equals(&delimited));
        prop_assert_eq!(list.hash_code(), delimited.hash_code());
        prop_assert_eq!(list.as_human_string(), delimited.as_human_string());
        prop_assert_eq!(list.component_count(), raws.len());
        prop_assert!(list.component(list.component_count()).is_err());
        prop_assert!(delimited.component(delimited.component_count()).is_err());
    }
}
