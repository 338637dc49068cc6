use edgerank_core::config::{Config, OutputSettings, RankSettings};
use edgerank_core::input::InputFormat;
use edgerank_core::rank::{Damping, DanglingPolicy};
use std::fs;
use std::path::Path;

#[test]
fn test_load_toml() {
    let d = tempfile::tempdir().unwrap();
    let path = d.path().join("edgerank.toml");
    fs::write(&path, "[rank]\nepsilon = 0.001\nmax_iterations = 50").unwrap();
    let c = Config::load(Some(&path)).unwrap();
    assert!((c.rank.epsilon - 0.001).abs() < f64::EPSILON);
    assert_eq!(c.rank.max_iterations, 50);
    assert_eq!(c.output, OutputSettings::default());
}

#[test]
fn test_defaults() {
    let r = RankSettings::default();
    assert!((r.epsilon - 0.1).abs() < f64::EPSILON);
    assert_eq!(r.max_iterations, 10_000);
    assert_eq!(r.damping, None);
    assert_eq!(r.dangling, DanglingPolicy::Redistribute);

    let o = OutputSettings::default();
    assert_eq!(o.precision, 15);
    assert_eq!(o.top, None);
    assert_eq!(o.format, InputFormat::Small);
}

#[test]
fn test_damping_and_dangling() {
    let c = Config::parse_toml("[rank]\ndamping = 0.85\ndangling = \"drop\"").unwrap();
    let rc = c.rank.to_rank_config();
    assert_eq!(rc.damping, Damping::Fixed(0.85));
    assert_eq!(rc.dangling, DanglingPolicy::Drop);
}

#[test]
fn test_zero_cap_means_unbounded() {
    let c = Config::parse_toml("[rank]\nmax_iterations = 0").unwrap();
    assert_eq!(c.rank.to_rank_config().max_iterations, None);
    assert_eq!(Config::new().rank.to_rank_config().max_iterations, Some(10_000));
}

#[test]
fn test_output_table() {
    let c = Config::parse_toml("[output]\nprecision = 4\ntop = 10\nformat = \"snap\"").unwrap();
    assert_eq!(c.output.precision, 4);
    assert_eq!(c.output.top, Some(10));
    assert_eq!(c.output.format, InputFormat::Snap);
}

#[test]
fn test_invalid_toml_names_file() {
    let d = tempfile::tempdir().unwrap();
    let path = d.path().join("edgerank.toml");
    fs::write(&path, "[rank]\nepsilon = \"tiny\"").unwrap();
    let err = Config::load(Some(&path)).unwrap_err();
    assert!(err.to_string().contains("edgerank.toml"));
    assert!(err.is_input_error());
}

#[test]
fn test_explicit_missing_file_fails() {
    assert!(Config::load(Some(Path::new("/definitely/not/here.toml"))).is_err());
}

#[test]
fn test_round_trip_through_toml() {
    let mut c = Config::new();
    c.rank.damping = Some(0.9);
    c.output.top = Some(5);
    let rendered = c.to_toml().unwrap();
    assert!(rendered.contains("[rank]"));
    assert_eq!(Config::parse_toml(&rendered).unwrap(), c);
}
