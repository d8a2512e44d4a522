use proptest::prelude::*;

use ctrlname::{is_conforming, is_logger_name, is_metrics_name, ControllerName, Convention};

fn padded_word() -> impl Strategy<Value = String> {
    ("[ \t]{0,3}", "[A-Za-z]{1,12}", "[ \t]{0,3}").prop_map(|(l, w, r)| format!("{l}{w}{r}"))
}

proptest! {
    #[test]
    fn letter_fragments_always_conform(fragments in prop::collection::vec(padded_word(), 1..8)) {
        let cn = ControllerName::new(fragments.iter().cloned());
        prop_assert!(is_metrics_name(&cn.metrics_name()));
        prop_assert!(is_logger_name(&cn.logger_name()));
        prop_assert!(ControllerName::try_new(fragments).is_ok());
    }

    #[test]
    fn surrounding_whitespace_does_not_change_names(fragments in prop::collection::vec(padded_word(), 1..8)) {
        let trimmed: Vec<String> = fragments.iter().map(|f| f.trim().to_string()).collect();
        let a = ControllerName::new(fragments);
        let b = ControllerName::new(trimmed);
        prop_assert_eq!(a.metrics_name(), b.metrics_name());
        prop_assert_eq!(a.logger_name(), b.logger_name());
    }

    #[test]
    fn derived_names_differ_only_by_separator(fragments in prop::collection::vec(padded_word(), 1..8)) {
        let cn = ControllerName::new(fragments);
        prop_assert_eq!(cn.metrics_name().replace('_', "-"), cn.logger_name());
    }

    #[test]
    fn validation_never_panics(candidate in any::<String>()) {
        let snake = is_conforming(&candidate, Convention::Snake);
        let kebab = is_conforming(&candidate, Convention::Kebab);
        if snake && kebab {
            prop_assert!(!candidate.contains('_') && !candidate.contains('-'));
        }
    }
}
