use super::*;

#[test]
fn storage_key_matches_header_name() {
    assert_eq!(STORAGE_KEY, "Authorization");
}

#[test]
fn usable_token_keeps_opaque_value_verbatim() {
    assert_eq!(usable_token(Some("Bearer abc.def".to_owned())), Some("Bearer abc.def".to_owned()));
}

#[test]
fn usable_token_rejects_missing_and_blank() {
    assert_eq!(usable_token(None), None);
    assert_eq!(usable_token(Some(String::new())), None);
    assert_eq!(usable_token(Some("   ".to_owned())), None);
}

#[test]
fn load_token_is_none_outside_browser() {
    assert_eq!(load_token(), None);
}
