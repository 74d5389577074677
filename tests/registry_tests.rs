mod common;

#[cfg(test)]
pub mod registry_tests {
    use std::collections::HashSet;
    use std::sync::Arc;

    use super::common::*;

    use partify_docs::common::*;
    use partify_docs::models::*;

    #[test]
    fn test_homepage_registry_titles_in_order() {
        let titles: Vec<&str> = FeatureRegistry::homepage()
            .iter()
            .map(FeatureEntry::title)
            .collect();

        assert_eq!(titles, PARTIFY_TITLES);
    }

    #[test]
    fn test_homepage_registry_is_valid() {
        assert_eq!(FeatureRegistry::homepage().validate(), Ok(()));
        assert_eq!(FeatureRegistry::homepage().column_span().class(), "col col--4");
    }

    #[test]
    fn test_homepage_registry_initialised_once() {
        assert!(std::ptr::eq(FeatureRegistry::homepage(), FeatureRegistry::homepage()));
    }

    #[test]
    fn test_registry_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<FeatureRegistry>();
        assert_send_sync::<FeatureEntry>();
    }

    #[test]
    fn test_keys_distinct_for_any_length() {
        for len in 0..16 {
            let titles: Vec<String> = (0..len).map(|i| format!("Feature {i}")).collect();
            let titles: Vec<&str> = titles.iter().map(String::as_str).collect();
            let registry = get_registry(&titles);

            let keys: HashSet<FeatureKey> = registry.keyed().map(|(key, _)| key).collect();
            assert_eq!(keys.len(), len);
        }
    }

    #[test]
    fn test_keys_follow_positions() {
        let registry = get_registry(&PARTIFY_TITLES);

        for (position, (key, entry)) in registry.keyed().enumerate() {
            assert_eq!(key.position(), position);
            assert_eq!(entry.title(), PARTIFY_TITLES[position]);
        }
        assert_eq!(FeatureKey::new(2).to_string(), "feature-2");
    }

    #[test]
    fn test_empty_registry() {
        let registry = FeatureRegistry::empty();

        assert!(registry.is_empty());
        assert_eq!(registry.keyed().count(), 0);
        assert_eq!(registry.validate(), Ok(()));
    }

    #[test]
    fn test_validate_fails_on_empty_title() {
        let registry = get_registry(&["Theme Logic", "  "]);

        assert_eq!(registry.validate(), Err(RegistryError::EmptyTitle { index: 1 }));
    }

    #[test]
    fn test_validate_fails_on_blank_description() {
        let registry = FeatureRegistry::new([FeatureEntry::new(
            "Theme Logic",
            RichText::emphasis(" "),
            Arc::new(BitmapImage::new("/img/mountain.svg")),
        )]);

        assert_eq!(registry.validate(), Err(RegistryError::EmptyDescription { index: 0 }));
    }

    #[test]
    fn test_validate_fails_on_duplicate_title() {
        let registry = get_registry(&["Theme Logic", "Powered by Partify", "Theme Logic"]);

        assert_eq!(
            registry.validate(),
            Err(RegistryError::DuplicateTitle {
                title: "Theme Logic".into()
            })
        );
    }

    #[test]
    fn test_clones_share_entries() {
        let registry = get_registry(&PARTIFY_TITLES);
        let copy = registry.clone();

        assert!(std::ptr::eq(registry.get(0).unwrap(), copy.get(0).unwrap()));
    }

    #[test]
    fn test_entry_clones_share_content() {
        let entry = get_feature("Theme Logic");
        let copy = entry.clone();

        assert!(std::ptr::eq(entry.title(), copy.title()));
        assert!(std::ptr::eq(entry.description(), copy.description()));
    }
}
