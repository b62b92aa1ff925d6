use super::*;

#[test]
fn captured_session_cookie_is_rewritten_to_expire() {
    let out = expire_cookie("sessionid=abc; Expires=Wed, 01 Jan 2030 00:00:00 GMT; Max-Age=600;");
    assert!(out.contains("sessionid=;"));
    assert!(out.contains("Expires=Thu, 01 Jan 1970 00:00:00 GMT;"));
    assert!(out.contains("Max-Age=0;"));
    assert!(!out.contains("abc"));
    assert!(!out.contains("2030"));
}

#[test]
fn other_attributes_survive_and_missing_ones_are_appended() {
    let out = expire_cookie("csrftoken=tok; Path=/; SameSite=Lax");
    assert_eq!(
        out,
        "csrftoken=; Path=/; SameSite=Lax; Expires=Thu, 01 Jan 1970 00:00:00 GMT; Max-Age=0;"
    );
}

#[test]
fn attribute_names_match_case_insensitively() {
    let out = expire_cookie("sessionid=abc; expires=Wed, 01 Jan 2030 00:00:00 GMT; max-age=10");
    assert_eq!(out, "sessionid=; Expires=Thu, 01 Jan 1970 00:00:00 GMT; Max-Age=0;");
}

#[test]
fn unrelated_cookie_values_are_kept() {
    let out = expire_cookies(&["theme=dark; Max-Age=60".to_string()]);
    assert_eq!(out, vec!["theme=dark; Max-Age=0; Expires=Thu, 01 Jan 1970 00:00:00 GMT;"]);
}

#[test]
fn backend_credentials_come_from_captured_cookies() {
    let creds = credentials_from_set_cookies(&[
        "csrftoken=tok; Path=/; Max-Age=31449600".to_string(),
        "sessionid=sid; HttpOnly; Path=/".to_string(),
    ]);
    assert_eq!(creds, Credentials::new("tok", "sid"));
}

#[test]
fn session_cookie_attributes() {
    assert_eq!(
        session_cookie("_session", "abc", 300, false),
        "_session=abc; Path=/; Max-Age=300; HttpOnly; SameSite=Lax"
    );
    assert!(session_cookie("_session", "abc", 300, true).ends_with("; Secure"));
    assert!(clear_session_cookie("_session").starts_with("_session=; Path=/; Expires=Thu, 01 Jan 1970"));
}
