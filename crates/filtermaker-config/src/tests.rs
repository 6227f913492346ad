//! Tests for ruleset configuration.

use filtermaker_core::{PropertyFilter, PropertyText, Selection};
use filtermaker_test::{sample_ruleset, sample_ruleset_toml, HEBREW_LETTERS, LATIN_LETTERS};

use super::*;

#[test]
fn test_toml_parsing() {
    let toml = r#"
        lowercase = true

        [[properties]]
        type = "has_chars"
        name = "hasheb"
        chars = "אבג"

        [[properties]]
        type = "has_cluster"
        name = "has_sch"
        clusters = ["sch", "tsch"]

        [[properties]]
        type = "only_charset"
        name = "onlylatin"
        chars = "abcdefghijklmnopqrstuvwxyz"

        [[properties]]
        type = "has_regex"
        name = "has_year"
        pattern = "[0-9]{4}"
    "#;

    let config = RulesetConfig::from_toml_str(toml).unwrap();
    assert!(config.lowercase);
    assert_eq!(config.properties.len(), 4);
    assert_eq!(config.properties[0], PropertyConfig::has_chars("hasheb", "אבג"));
    assert_eq!(
        config.properties[1],
        PropertyConfig::has_cluster("has_sch", ["sch", "tsch"])
    );
    assert_eq!(config.properties[3].name(), "has_year");
}

#[test]
fn test_yaml_parsing() {
    let yaml = r#"
        properties:
          - type: has_chars
            name: hasheb
            chars: "אבג"
          - type: has_regex
            name: has_year
            pattern: "[0-9]{4}"
    "#;

    let config = RulesetConfig::from_yaml_str(yaml).unwrap();
    assert!(!config.lowercase);
    assert_eq!(config.properties.len(), 2);
    assert_eq!(
        config.properties[1],
        PropertyConfig::has_regex("has_year", "[0-9]{4}")
    );
}

#[test]
fn test_empty_document_is_empty_ruleset() {
    let config = RulesetConfig::from_toml_str("").unwrap();
    assert_eq!(config, RulesetConfig::new());
    assert!(config.build_registry().unwrap().is_empty());
}

#[test]
fn test_unknown_property_type_is_parse_error() {
    let toml = r#"
        [[properties]]
        type = "has_vibes"
        name = "x"
    "#;
    assert!(matches!(
        RulesetConfig::from_toml_str(toml),
        Err(ConfigError::Toml(_))
    ));
}

#[test]
fn test_builder() {
    let config = RulesetConfig::new()
        .with_property(PropertyConfig::has_chars("hasheb", HEBREW_LETTERS))
        .with_property(PropertyConfig::only_charset("onlylatin", LATIN_LETTERS));

    assert_eq!(config.properties.len(), 2);
    let registry = config.build_registry().unwrap();
    assert_eq!(registry.names(), vec!["hasheb", "onlylatin"]);
}

#[test]
fn test_build_registry_evaluates() {
    let config = RulesetConfig::new()
        .with_property(PropertyConfig::has_chars("hasheb", HEBREW_LETTERS))
        .with_property(PropertyConfig::only_charset("onlylatin", LATIN_LETTERS))
        .with_property(PropertyConfig::has_cluster("has_sh", ["sh"]))
        .with_property(PropertyConfig::has_regex("has_digit", r"\d"));
    let registry = config.build_registry().unwrap();

    let hebrew = PropertyText::new(&registry, "שלום world");
    assert!(hebrew.has(["hasheb"]).unwrap());
    assert!(!hebrew.has(["onlylatin"]).unwrap());

    let mut latin = PropertyFilter::new(&registry, "Shalom 1", Selection::All).unwrap();
    let confirmed: Vec<&str> = latin.confirmed().collect();
    assert_eq!(confirmed, vec!["has_digit", "has_sh", "onlylatin"]);
    assert!(!latin.has(["hasheb"]).unwrap());
}

#[test]
fn test_later_declaration_wins() {
    let config = RulesetConfig::new()
        .with_property(PropertyConfig::has_chars("p", "a"))
        .with_property(PropertyConfig::has_chars("p", "b"));
    let registry = config.build_registry().unwrap();
    assert_eq!(registry.len(), 1);
    assert!(registry.evaluate("p", "b").unwrap());
    assert!(!registry.evaluate("p", "a").unwrap());
}

#[test]
fn test_lowercase_flag() {
    let mixed = PropertyConfig::has_chars("has_upper_a", "A");

    let strict = RulesetConfig::new().with_property(mixed.clone());
    let registry = strict.build_registry().unwrap();
    assert!(!PropertyText::new(&registry, "A").has(["has_upper_a"]).unwrap());

    let folded = RulesetConfig::new()
        .with_lowercase(true)
        .with_property(mixed)
        .with_property(PropertyConfig::has_cluster("has_sch", ["SCH"]));
    let registry = folded.build_registry().unwrap();
    let text = PropertyText::new(&registry, "SCHULE A");
    assert!(text.has(["has_upper_a", "has_sch"]).unwrap());
}

#[test]
fn test_lowercase_flag_composes_clusters() {
    // "E" + COMBINING ACUTE ACCENT folds to the precomposed "é" the text gets.
    let decomposed = PropertyConfig::has_cluster("has_e_acute", ["E\u{301}"]);

    let folded = RulesetConfig::new()
        .with_lowercase(true)
        .with_property(decomposed.clone());
    let registry = folded.build_registry().unwrap();
    assert!(PropertyText::new(&registry, "école").has(["has_e_acute"]).unwrap());
    assert!(PropertyText::new(&registry, "E\u{301}COLE")
        .has(["has_e_acute"])
        .unwrap());

    let strict = RulesetConfig::new().with_property(decomposed);
    let registry = strict.build_registry().unwrap();
    assert!(!PropertyText::new(&registry, "école").has(["has_e_acute"]).unwrap());
}

#[test]
fn test_sample_ruleset_parses() {
    let config = RulesetConfig::from_toml_str(&sample_ruleset_toml()).unwrap();
    let declared: Vec<&str> = config.properties.iter().map(PropertyConfig::name).collect();
    let expected: Vec<&str> = sample_ruleset().iter().map(|r| r.name).collect();
    assert_eq!(declared, expected);

    let registry = config.build_registry().unwrap();
    let text = PropertyText::new(&registry, "shabbc");
    assert!(text.has(["has_sh", "has_abc", "onlylatin"]).unwrap());
}

#[test]
fn test_empty_cluster_is_build_error() {
    let config = RulesetConfig::new().with_property(PropertyConfig::has_cluster("bad", ["ok", ""]));
    match config.build_registry() {
        Err(ConfigError::Build { name, source }) => {
            assert_eq!(name, "bad");
            assert!(matches!(source, FilterMakerError::Configuration(_)));
        }
        other => panic!("unexpected result: {:?}", other.map(|r| r.len())),
    }
}

#[test]
fn test_malformed_regex_is_build_error() {
    let config = RulesetConfig::new().with_property(PropertyConfig::has_regex("bad", "a(b"));
    let err = config.build_registry().err().unwrap();
    assert!(err.to_string().starts_with("Property bad:"));
}

#[test]
fn test_empty_name_is_invalid() {
    let config = RulesetConfig::new().with_property(PropertyConfig::has_chars("", "a"));
    assert!(matches!(
        config.build_registry(),
        Err(ConfigError::Invalid(_))
    ));
}

#[test]
fn test_register_into_existing_registry() {
    let mut registry = PropertyRegistry::new();
    registry.register("manual", filtermaker_core::haschars(['m']));

    RulesetConfig::new()
        .with_property(PropertyConfig::has_chars("declared", "d"))
        .register_into(&mut registry)
        .unwrap();

    assert_eq!(registry.names(), vec!["declared", "manual"]);
}

#[test]
fn test_load_missing_file() {
    let result = RulesetConfig::load("/nonexistent/filtermaker/ruleset.toml");
    assert!(matches!(result, Err(ConfigError::Io(_))));
}

#[test]
fn test_load_from_files() {
    let dir = std::env::temp_dir().join(format!("filtermaker-config-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();

    let toml_path = dir.join("ruleset.toml");
    std::fs::write(
        &toml_path,
        "[[properties]]\ntype = \"has_chars\"\nname = \"has_x\"\nchars = \"x\"\n",
    )
    .unwrap();
    let from_toml = RulesetConfig::load(&toml_path).unwrap();

    let yaml_path = dir.join("ruleset.yaml");
    std::fs::write(
        &yaml_path,
        "properties:\n  - type: has_chars\n    name: has_x\n    chars: x\n",
    )
    .unwrap();
    let from_yaml = RulesetConfig::from_yaml_file(&yaml_path).unwrap();

    assert_eq!(from_toml, from_yaml);
    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_serialize_round_trip() {
    let config = RulesetConfig::new()
        .with_lowercase(true)
        .with_property(PropertyConfig::has_cluster("has_sch", ["sch"]));
    let toml = toml::to_string(&config).unwrap();
    assert_eq!(RulesetConfig::from_toml_str(&toml).unwrap(), config);
}
