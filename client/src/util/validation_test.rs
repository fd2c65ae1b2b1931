use super::*;

fn sign_up(password: &str, conf: &str) -> SignUpRequest {
    SignUpRequest {
        username: "lou".to_owned(),
        email: "lou@example.com".to_owned(),
        password: password.to_owned(),
        conf_password: conf.to_owned(),
        passkey: "writers".to_owned(),
    }
}

fn draft(title: &str, synopsis: &str) -> ArticleDraft {
    ArticleDraft { title: title.to_owned(), synopsis: synopsis.to_owned(), content: String::new() }
}

#[test]
fn validate_field_reports_first_failing_rule() {
    assert_eq!(validate_field("", SIGN_UP_PASSWORD), Some("Password is required"));
    assert_eq!(
        validate_field("Ab1!", SIGN_UP_PASSWORD),
        Some("Password must be at least eight (8) characters long")
    );
    assert_eq!(
        validate_field("abcdefgh", SIGN_UP_PASSWORD),
        Some("Must contain: uppercase, lowercase, number, and special character")
    );
    assert_eq!(validate_field("Abcdef1!", SIGN_UP_PASSWORD), None);
}

#[test]
fn required_treats_whitespace_as_missing() {
    assert_eq!(validate_field("   ", SIGN_UP_PASSKEY), Some("Writer Pass Key is required"));
}

#[test]
fn lengths_count_characters_not_bytes() {
    let title: String = "é".repeat(40);
    assert_eq!(validate_field(&title, ARTICLE_TITLE), None);
    let too_long: String = "é".repeat(41);
    assert_eq!(validate_field(&too_long, ARTICLE_TITLE), Some("Max length is 40 characters"));
}

#[test]
fn strong_password_requires_every_class() {
    assert!(is_strong_password("Passw0rd!"));
    assert!(!is_strong_password("passw0rd!"));
    assert!(!is_strong_password("PASSW0RD!"));
    assert!(!is_strong_password("Password!"));
    assert!(!is_strong_password("Passw0rdd"));
}

#[test]
fn strong_password_rejects_characters_outside_allowed_set() {
    assert!(!is_strong_password("Passw0rd!#"));
    assert!(!is_strong_password("Pass w0rd!"));
}

#[test]
fn sign_in_accepts_valid_credentials() {
    let form = SignInRequest { email: "lou@example.com".to_owned(), password: "12345678".to_owned() };
    assert_eq!(validate_sign_in(&form), Ok(()));
}

#[test]
fn sign_in_reports_each_field() {
    let form = SignInRequest { email: String::new(), password: "short".to_owned() };
    let errors = validate_sign_in(&form).unwrap_err();
    assert_eq!(errors.get("email"), Some("Email is required"));
    assert_eq!(errors.get("password"), Some("Password must be at least eight (8) characters long"));
}

#[test]
fn sign_in_email_limited_to_thirty_characters() {
    let form = SignInRequest { email: format!("{}@x.io", "a".repeat(26)), password: "12345678".to_owned() };
    let errors = validate_sign_in(&form).unwrap_err();
    assert_eq!(
        errors.get("email"),
        Some("Email cannot be longer than thirty (30) characters long!")
    );
}

#[test]
fn sign_up_accepts_matching_strong_passwords() {
    assert_eq!(validate_sign_up(&sign_up("Abcdef1!", "Abcdef1!")), Ok(()));
}

#[test]
fn sign_up_rejects_mismatched_confirmation() {
    let errors = validate_sign_up(&sign_up("Abcdef1!", "Abcdef1?")).unwrap_err();
    assert_eq!(errors.get("confPassword"), Some("Passwords do not match"));
    assert_eq!(errors.get("password"), None);
}

#[test]
fn sign_up_missing_confirmation_reports_required_first() {
    let errors = validate_sign_up(&sign_up("Abcdef1!", "")).unwrap_err();
    assert_eq!(errors.get("confPassword"), Some("Please confirm your password"));
}

#[test]
fn sign_up_username_limited_to_twenty_characters() {
    let mut form = sign_up("Abcdef1!", "Abcdef1!");
    form.username = "u".repeat(21);
    let errors = validate_sign_up(&form).unwrap_err();
    assert_eq!(
        errors.get("username"),
        Some("Username cannot be longer than twenty (20) characters long!")
    );
}

#[test]
fn article_requires_title_and_synopsis() {
    let errors = validate_article(&draft("", "")).unwrap_err();
    assert_eq!(errors.get("title"), Some("Title is required"));
    assert_eq!(errors.get("synopsis"), Some("Synopsis is required"));
}

#[test]
fn article_enforces_length_bounds() {
    let errors = validate_article(&draft("A", &"s".repeat(201))).unwrap_err();
    assert_eq!(errors.get("title"), Some("Min length is 2 characters"));
    assert_eq!(errors.get("synopsis"), Some("Max length is 200 characters"));
    assert_eq!(validate_article(&draft("Ok", &"s".repeat(200))), Ok(()));
}
