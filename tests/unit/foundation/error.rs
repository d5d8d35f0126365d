use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(PathcostError::parse("x").to_string().contains("parse error:"));
    assert!(
        PathcostError::provision("x")
            .to_string()
            .contains("provision error:")
    );
    assert!(PathcostError::worker("x").to_string().contains("worker error:"));
    assert!(
        PathcostError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        PathcostError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn path_data_names_the_index() {
    let err = PathcostError::path_data(3, "missing d attribute");
    let s = err.to_string();
    assert!(s.contains("index 3"));
    assert!(s.contains("missing d attribute"));
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = PathcostError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
