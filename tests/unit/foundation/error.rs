use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        SpinError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(SpinError::render("x").to_string().contains("render error:"));
    assert!(SpinError::encode("x").to_string().contains("encode error:"));
    assert!(
        SpinError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn dimension_mismatch_names_both_sizes() {
    let err = SpinError::DimensionMismatch {
        index: 3,
        expected_width: 400,
        expected_height: 300,
        got_width: 64,
        got_height: 64,
    };
    let msg = err.to_string();
    assert!(msg.contains("frame 3"));
    assert!(msg.contains("64x64"));
    assert!(msg.contains("400x300"));
}

#[test]
fn only_input_errors_are_user_errors() {
    assert!(SpinError::validation("x").is_user_error());
    assert!(SpinError::serde("x").is_user_error());
    assert!(!SpinError::EmptySequence.is_user_error());
    assert!(!SpinError::render("x").is_user_error());
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = SpinError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
