use super::*;

#[test]
fn counts_each_command_family() {
    let c = CommandCensus::count("M0 0 L1 1 H2 V3 C0 0 1 1 2 2 S1 1 2 2 Q0 0 1 1 T2 2 A1 1 0 0 1 3 3 Z");
    assert_eq!(
        c,
        CommandCensus {
            moves: 1,
            lines: 3,
            curves: 4,
            arcs: 1,
            closes: 1,
        }
    );
    assert_eq!(c.total(), 10);
}

#[test]
fn relative_commands_count_equally() {
    assert_eq!(
        CommandCensus::count("m0 0 l10 10 l20 0 z"),
        CommandCensus::count("M0 0 L10 10 L20 0 Z")
    );
}

#[test]
fn exponents_are_not_commands() {
    assert_eq!(CommandCensus::count("M1e2 0 L2E1 1").total(), 2);
}

#[test]
fn four_command_path_estimates_300() {
    let c = CommandCensus::of_path(0, Some("M0 0 L10 10 L20 0 Z")).unwrap();
    assert_eq!(c.total(), 4);
    assert_eq!(c.estimate(0), PathEstimate { index: 0, length: 300 });
}

#[test]
fn empty_path_data_is_valid_and_minimal() {
    let c = CommandCensus::of_path(0, Some("")).unwrap();
    assert_eq!(c.total(), 0);
    assert_eq!(c.estimate(0).length, 100);
}

#[test]
fn missing_attribute_is_a_path_data_error() {
    let err = CommandCensus::of_path(5, None).unwrap_err();
    assert!(matches!(err, PathcostError::PathData { index: 5, .. }));
}

#[test]
fn garbage_path_data_is_rejected() {
    let err = CommandCensus::of_path(1, Some("M0 0 L banana")).unwrap_err();
    assert!(matches!(err, PathcostError::PathData { index: 1, .. }));
}
