use super::*;

#[test]
fn exit_codes_are_distinct() {
    assert_ne!(EXIT_SUCCESS, EXIT_VIOLATIONS);
    assert_ne!(EXIT_SUCCESS, EXIT_ERROR);
    assert_ne!(EXIT_VIOLATIONS, EXIT_ERROR);
}
