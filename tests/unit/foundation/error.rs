use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        CloudError::MalformedHeader
            .to_string()
            .contains("malformed header:")
    );
    assert!(
        CloudError::MissingVertexCount
            .to_string()
            .contains("missing vertex count:")
    );
    assert!(
        CloudError::unsupported_format("ascii")
            .to_string()
            .contains("unsupported format: ascii")
    );
    assert!(
        CloudError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        CloudError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn decode_errors_are_classified() {
    assert!(CloudError::MalformedHeader.is_decode_error());
    assert!(CloudError::MissingVertexCount.is_decode_error());
    assert!(CloudError::unsupported_format("ascii").is_decode_error());
    assert!(!CloudError::validation("x").is_decode_error());
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = CloudError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
