// File: crates/dash-core/tests/dash.rs
// Purpose: Dash spec normalization and option-block parsing with defaults.

use dash_core::series::{DEFAULT_LINE_WIDTH, DEFAULT_SHADOW_SIZE};
use dash_core::{DashOptions, DashSpec, DashesPlugin, Error, Series, SeriesHook};

#[test]
fn single_length_doubles() {
    assert_eq!(DashSpec::Length(10.0).normalize().as_slice(), &[10.0, 10.0]);
}

#[test]
fn one_element_list_doubles() {
    assert_eq!(DashSpec::Pattern(vec![7.0]).normalize().as_slice(), &[7.0, 7.0]);
}

#[test]
fn longer_lists_are_kept() {
    let spec = DashSpec::Pattern(vec![4.0, 2.0, 1.0, 1.0]);
    assert_eq!(spec.normalize().as_slice(), &[4.0, 2.0, 1.0, 1.0]);
    let odd = DashSpec::Pattern(vec![6.0, 3.0, 2.0]);
    assert_eq!(odd.normalize().as_slice(), &[6.0, 3.0, 2.0]);
}

#[test]
fn empty_list_uses_default_length() {
    let pattern = DashSpec::Pattern(Vec::new()).normalize();
    assert_eq!(pattern.as_slice(), &[10.0, 10.0]);
    assert_eq!(pattern.cycle_length(), 20.0);
}

#[test]
fn non_positive_lengths_pass_through() {
    assert_eq!(DashSpec::Length(0.0).normalize().as_slice(), &[0.0, 0.0]);
    assert_eq!(DashSpec::Pattern(vec![-2.0]).normalize().as_slice(), &[-2.0, -2.0]);
}

#[test]
fn options_default_when_keys_missing() {
    let opts = DashOptions::from_json("{}").expect("parse");
    assert_eq!(opts, DashOptions::default());
    assert!(!opts.show);
    assert_eq!(opts.line_width, DEFAULT_LINE_WIDTH);
    assert_eq!(opts.dash_length, DashSpec::Length(10.0));
}

#[test]
fn options_accept_number_or_list() {
    let opts = DashOptions::from_json(r#"{"show": true, "dashLength": 6}"#).expect("parse");
    assert!(opts.show);
    assert_eq!(opts.dash_length, DashSpec::Length(6.0));

    let opts = DashOptions::from_json(r#"{"show": true, "lineWidth": 3.5, "dashLength": [8, 4, 2, 4]}"#)
        .expect("parse");
    assert_eq!(opts.line_width, 3.5);
    assert_eq!(opts.dash_length.normalize().as_slice(), &[8.0, 4.0, 2.0, 4.0]);
}

#[test]
fn malformed_options_are_reported() {
    let err = DashOptions::from_json(r#"{"show": "yes"}"#).unwrap_err();
    assert!(matches!(err, Error::Options(_)));
    assert!(err.to_string().starts_with("invalid dash options"));
}

#[test]
fn plugin_metadata_and_defaults() {
    let plugin = DashesPlugin;
    assert_eq!(plugin.name(), "dashes");
    assert_eq!(plugin.version(), "0.1");
    assert_eq!(DashesPlugin::default_options(), DashOptions::default());

    let series = Series::with_data(vec![(0.0, 0.0)]);
    assert!(!series.dashes.show);
    assert_eq!(series.shadow_size, DEFAULT_SHADOW_SIZE);
}
