use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        GradientError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        GradientError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
    assert!(
        GradientError::InvalidShapeParameter(-1.0)
            .to_string()
            .contains("got -1")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = GradientError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
