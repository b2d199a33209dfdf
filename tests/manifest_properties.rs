use deploy_init::analyzer::manifest::{
    ManifestFormat, is_kubernetes_manifest, parse_images_from_kubernetes_yaml,
    parse_images_from_str,
};
use proptest::prelude::*;
use std::fs;
use tempfile::TempDir;

fn pod_with_images(images: &[String]) -> String {
    let mut yaml = String::from("apiVersion: v1\nkind: Pod\nmetadata:\n  name: p\nspec:\n  containers:\n");
    for (i, image) in images.iter().enumerate() {
        yaml.push_str(&format!("  - name: c{i}\n    image: \"{image}\"\n"));
    }
    yaml
}

proptest! {
    #[test]
    fn unrecognized_extensions_are_never_manifests(ext in "[a-zA-Z]{1,6}") {
        prop_assume!(!matches!(ext.as_str(), "yaml" | "yml" | "json"));

        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(format!("manifest.{ext}"));
        fs::write(&path, "apiVersion: v1\nkind: Service\n").unwrap();

        prop_assert!(!is_kubernetes_manifest(&path));
    }

    #[test]
    fn any_api_version_and_kind_is_a_manifest(
        api_version in "[a-z][a-z0-9./]{0,20}",
        kind in "[A-Z][A-Za-z]{0,20}",
    ) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("resource.yaml");
        fs::write(&path, format!("apiVersion: \"{api_version}\"\nkind: \"{kind}\"\n")).unwrap();

        prop_assert!(is_kubernetes_manifest(&path));
        prop_assert!(is_kubernetes_manifest(&path));
    }

    #[test]
    fn images_come_back_in_order(images in prop::collection::vec("[a-z][a-z0-9./:-]{0,30}", 0..6)) {
        let found = parse_images_from_str(&pod_with_images(&images), ManifestFormat::Yaml).unwrap();
        prop_assert_eq!(found, images);
    }

    #[test]
    fn extraction_is_idempotent(images in prop::collection::vec("[a-z][a-z0-9./:-]{0,30}", 0..6)) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("pod.yaml");
        fs::write(&path, pod_with_images(&images)).unwrap();

        let first = parse_images_from_kubernetes_yaml(&path).unwrap();
        let second = parse_images_from_kubernetes_yaml(&path).unwrap();
        prop_assert_eq!(first, second);
    }
}
