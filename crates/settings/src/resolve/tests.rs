use approx::assert_relative_eq;
use shoal_core::{LimiterStrategy, constraint::ConstraintError};

use crate::{FatalError, Label, LabelValuePair, RecordedDiagnostics, SolverSettings};

use super::resolve;

const FILE: &str = "harbour.cfg";

type Outcome = (Result<(), FatalError>, SolverSettings, RecordedDiagnostics);

fn pairs(raw: &[(&str, &str)]) -> Vec<LabelValuePair> {
    raw.iter().copied().map(LabelValuePair::from).collect()
}

/// Resolves `raw` against a fresh record.
fn run(raw: &[(&str, &str)]) -> Outcome {
    let mut settings = SolverSettings::new(FILE);
    let mut diagnostics = RecordedDiagnostics::default();
    let result = resolve(&pairs(raw), &mut settings, &mut diagnostics);
    (result, settings, diagnostics)
}

/// Resolves `raw` with a valid end time appended.
fn run_with_end(raw: &[(&str, &str)]) -> Outcome {
    let mut raw = raw.to_vec();
    raw.push(("t end", "100"));
    run(&raw)
}

#[test]
#[allow(clippy::float_cmp)]
fn minimal_block_takes_defaults() {
    let (result, settings, diagnostics) = run(&[("CFL", "0.3"), ("t end", "10.0")]);

    result.expect("should resolve");
    assert!(diagnostics.is_empty());

    assert_eq!(settings.cfl, 0.3);
    assert_eq!(settings.t_end, Some(10.0));
    assert_eq!(settings.t_start, 0.0);
    assert_eq!(settings.limiter, LimiterStrategy::MinMod2);
    assert_eq!(settings.limiter_name, "MinMod2");
    assert_eq!(settings.height_threshold, 1e-6);
    assert_eq!(settings.tile_buffer, 3);
    assert_eq!(settings.max_dt, f64::INFINITY);
    assert!(!settings.restart);
    assert!(!settings.sponge_layer_enabled());
    assert_eq!(settings.initial_condition, "");
    assert_eq!(settings.source_file, FILE);
}

#[test]
#[allow(clippy::float_cmp)]
fn full_block() {
    let (result, settings, diagnostics) = run(&[
        ("Limiter", "Van Albada"),
        ("Height Threshold", "1e-4"),
        ("Sponge Strength", "2.0"),
        ("Tile Buffer", "5"),
        ("CFL", "0.45"),
        ("Max dt", "0.5"),
        ("t start", "-1.0"),
        ("t end", "3600"),
        ("Restart", "On"),
        ("Initial Condition", "Dam Break"),
    ]);

    result.expect("should resolve");
    assert!(diagnostics.is_empty());

    assert_eq!(settings.limiter, LimiterStrategy::VanAlbada);
    assert_eq!(settings.limiter_name, "VanAlbada");
    assert_relative_eq!(settings.height_threshold, 1e-4);
    assert_eq!(settings.sponge_strength, Some(2.0));
    assert_eq!(settings.tile_buffer, 5);
    assert_relative_eq!(settings.cfl, 0.45);
    assert_relative_eq!(settings.max_dt, 0.5);
    assert_relative_eq!(settings.t_start, -1.0);
    assert_eq!(settings.t_end, Some(3600.0));
    assert!(settings.restart);
    assert_eq!(settings.initial_condition, "Dam Break");
}

#[test]
fn cfl_window() {
    for v in ["0.000001", "0.1", "0.25", "0.5"] {
        let (result, settings, _) = run_with_end(&[("cfl", v)]);
        assert!(result.is_ok(), "cfl {v} should be accepted");
        assert_relative_eq!(settings.cfl, v.parse::<f64>().unwrap());
    }

    for (v, reason) in [
        ("0", ConstraintError::BelowMinimum),
        ("-0.2", ConstraintError::BelowMinimum),
        ("0.5000001", ConstraintError::AboveMaximum),
        ("1", ConstraintError::AboveMaximum),
        ("NaN", ConstraintError::NotANumber),
    ] {
        let (result, _, _) = run_with_end(&[("cfl", v)]);
        assert_eq!(
            result,
            Err(FatalError::OutOfRange {
                source_file: FILE.into(),
                label: Label::Cfl,
                value: v.into(),
                reason,
            }),
            "cfl {v}"
        );
    }
}

#[test]
fn tile_buffer_must_exceed_one() {
    for n in [2, 3, 10, 1000] {
        let (result, settings, _) = run_with_end(&[("tile buffer", n.to_string().as_str())]);
        assert!(result.is_ok(), "tile buffer {n}");
        assert_eq!(settings.tile_buffer, n);
    }

    for n in ["1", "0", "-3"] {
        let (result, _, _) = run_with_end(&[("tile buffer", n)]);
        assert!(
            matches!(
                result,
                Err(FatalError::OutOfRange { label: Label::TileBuffer, .. })
            ),
            "tile buffer {n}"
        );
    }
}

#[test]
fn positive_fields_reject_zero_and_negatives() {
    for label in ["height threshold", "sponge strength", "max dt"] {
        for v in ["0", "-1e-6"] {
            let (result, _, _) = run_with_end(&[(label, v)]);
            let err = result.expect_err("should be fatal");
            assert_eq!(err.label(), Label::lookup(label), "{label} = {v}");
            assert!(matches!(err, FatalError::OutOfRange { .. }));
        }
    }
}

#[test]
fn max_dt_accepts_infinity() {
    let (result, settings, _) = run_with_end(&[("max dt", "inf")]);
    result.expect("should resolve");
    assert!(settings.max_dt.is_infinite());
}

#[test]
fn missing_end_time_is_fatal() {
    let cases: [&[(&str, &str)]; 3] = [
        &[],
        &[("cfl", "0.3")],
        &[("t start", "0"), ("limiter", "weno"), ("restart", "on")],
    ];

    for raw in cases {
        let (result, _, _) = run(raw);
        assert_eq!(
            result,
            Err(FatalError::MissingEndTime {
                source_file: FILE.into()
            })
        );
    }
}

#[test]
fn end_time_on_record_does_not_count_as_input() {
    let mut settings = SolverSettings::new(FILE);
    settings.t_end = Some(10.0);

    let result = resolve(
        &pairs(&[("cfl", "0.3")]),
        &mut settings,
        &mut RecordedDiagnostics::default(),
    );

    assert!(matches!(result, Err(FatalError::MissingEndTime { .. })));
}

#[test]
fn start_after_end_is_fatal() {
    let (result, _, _) = run(&[("t start", "5.0"), ("t end", "2.0")]);

    assert_eq!(
        result,
        Err(FatalError::StartAfterEnd {
            source_file: FILE.into(),
            t_start: 5.0,
            t_end: 2.0,
        })
    );
}

#[test]
fn equal_start_and_end_is_allowed() {
    let (result, _, _) = run(&[("t start", "2.0"), ("t end", "2.0")]);
    assert!(result.is_ok());
}

#[test]
fn default_start_after_negative_end_is_fatal() {
    let (result, _, _) = run(&[("t end", "-1")]);
    assert!(matches!(result, Err(FatalError::StartAfterEnd { .. })));
}

#[test]
fn limiter_tokens_ignore_case() {
    for (token, expected) in [
        ("minmod1", LimiterStrategy::MinMod1),
        ("MinMod2", LimiterStrategy::MinMod2),
        ("van albada", LimiterStrategy::VanAlbada),
        ("Albada", LimiterStrategy::VanAlbada),
        ("Weno", LimiterStrategy::Weno),
        ("NONE", LimiterStrategy::None),
    ] {
        let (result, settings, diagnostics) = run_with_end(&[("limiter", token)]);
        result.expect("should resolve");
        assert_eq!(settings.limiter, expected, "{token}");
        assert_eq!(settings.limiter_name, expected.name());
        assert!(diagnostics.is_empty(), "{token}");
    }
}

#[test]
fn unknown_limiter_warns_and_falls_back() {
    let (result, settings, diagnostics) =
        run_with_end(&[("limiter", "weno"), ("limiter", "banana")]);

    result.expect("should resolve");
    assert_eq!(settings.limiter, LimiterStrategy::MinMod2);
    assert_eq!(settings.limiter_name, "MinMod2");
    assert_eq!(
        diagnostics.warnings,
        ["harbour.cfg: unrecognized limiter 'banana' (expected one of minmod1, minmod2, \
          van albada, albada, weno, none), using MinMod2"]
    );
    assert!(diagnostics.unrecognized_labels.is_empty());
}

#[test]
fn unknown_restart_option_warns_and_falls_back() {
    let (result, settings, diagnostics) = run_with_end(&[("restart", "yes")]);

    result.expect("should resolve");
    assert!(!settings.restart);
    assert_eq!(
        diagnostics.warnings,
        ["harbour.cfg: unrecognized restart 'yes' (expected on or off), using off"]
    );
}

#[test]
fn sponge_strength_enables_sponge() {
    let (result, settings, _) = run_with_end(&[("sponge strength", "2.0")]);
    result.expect("should resolve");
    assert!(settings.sponge_layer_enabled());
    assert_eq!(settings.sponge_strength, Some(2.0));

    let (result, settings, _) = run_with_end(&[]);
    result.expect("should resolve");
    assert!(!settings.sponge_layer_enabled());
}

#[test]
fn unrecognized_label_is_reported_once_and_ignored() {
    let (result, settings, diagnostics) = run_with_end(&[("foo", "bar")]);
    let (_, baseline, _) = run_with_end(&[]);

    result.expect("should resolve");
    assert_eq!(diagnostics.unrecognized_labels, ["foo"]);
    assert!(diagnostics.warnings.is_empty());
    assert_eq!(settings, baseline);
}

#[test]
fn closures_receive_label_warnings() {
    let mut messages = Vec::new();
    let mut settings = SolverSettings::new(FILE);

    resolve(
        &pairs(&[("Friction", "0.03"), ("t end", "1")]),
        &mut settings,
        &mut |m: &str| messages.push(m.to_owned()),
    )
    .expect("should resolve");

    assert_eq!(messages, ["harbour.cfg: unrecognized input label 'Friction'"]);
}

#[test]
fn malformed_numbers_are_fatal() {
    for (label, value) in [
        ("cfl", "abc"),
        ("max dt", ""),
        ("tile buffer", "3.5"),
        ("t start", "soon"),
        ("t end", "NaN"),
    ] {
        let (result, _, _) = run_with_end(&[(label, value)]);
        assert_eq!(
            result,
            Err(FatalError::Malformed {
                source_file: FILE.into(),
                label: Label::lookup(label).unwrap(),
                value: value.into(),
            }),
            "{label} = {value:?}"
        );
    }
}

#[test]
fn first_fatal_error_stops_processing() {
    let (result, settings, diagnostics) = run(&[
        ("cfl", "0.4"),
        ("tile buffer", "1"),
        ("limiter", "banana"),
        ("t end", "10"),
    ]);

    assert!(matches!(
        result,
        Err(FatalError::OutOfRange { label: Label::TileBuffer, .. })
    ));
    // Written before the failure; nothing after it ran.
    assert_relative_eq!(settings.cfl, 0.4);
    assert_eq!(settings.t_end, None);
    assert!(diagnostics.is_empty());
}

#[test]
fn later_duplicate_wins() {
    let (result, settings, _) = run_with_end(&[("cfl", "0.1"), ("CFL", "0.2")]);
    result.expect("should resolve");
    assert_relative_eq!(settings.cfl, 0.2);
}

#[test]
fn values_and_labels_are_trimmed() {
    let (result, settings, _) =
        run(&[("  t end ", " 5 "), ("initial condition", "  still water ")]);

    result.expect("should resolve");
    assert_eq!(settings.t_end, Some(5.0));
    assert_eq!(settings.initial_condition, "still water");
}

#[test]
fn defaults_replace_stale_values() {
    let mut settings = SolverSettings::new(FILE);
    settings.cfl = 0.4;
    settings.restart = true;
    settings.sponge_strength = Some(9.0);

    settings
        .resolve(&pairs(&[("t end", "1")]), &mut RecordedDiagnostics::default())
        .expect("should resolve");

    assert_relative_eq!(settings.cfl, 0.25);
    assert!(!settings.restart);
    assert!(!settings.sponge_layer_enabled());
}

#[test]
fn resolution_is_deterministic() {
    let raw = [
        ("limiter", "weno"),
        ("cfl", "0.35"),
        ("sponge strength", "1.5"),
        ("bogus", "1"),
        ("t start", "1"),
        ("t end", "9"),
    ];

    let (first, a, da) = run(&raw);
    let (second, b, db) = run(&raw);

    assert_eq!(first, second);
    assert_eq!(a, b);
    assert_eq!(da, db);
}
