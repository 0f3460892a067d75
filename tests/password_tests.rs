//! Integration tests for password strength classification

use stringutils::prelude::*;

#[test]
fn test_password_security() {
    assert!(!is_secure(None), "None is never secure");
    assert!(!is_secure(Some("")), "empty password is too short");
    assert!(
        !is_secure(Some("0123456789abcABC#%&")),
        "length 19 is too short"
    );
    assert!(
        !is_secure(Some("abcdefghijABCDEFGHIJ#%&")),
        "missing digit"
    );
    assert!(
        !is_secure(Some("1234567890ABCDEFGHIJ#%&")),
        "missing lowercase letter"
    );
    assert!(
        !is_secure(Some("1234567890abcdefghij#%&")),
        "missing uppercase letter"
    );
    assert!(
        !is_secure(Some("abcdefghijABCDEFGHI123")),
        "missing special character"
    );
    assert!(
        !is_secure(Some("12abAB#%&&&&&&&&&&&&")),
        "only 9 distinct characters"
    );
    assert!(is_secure(Some("123456abcdefABCDEF#%&")));
}

#[test]
fn test_length_19_always_insecure() {
    let candidates = [
        "0123456789abcABC#%&",
        "aA1!bB2@cC3#dD4$eE5",
        "ÄÖÜäöü12345ßéè#%&Ωπ",
    ];
    for password in candidates {
        assert_eq!(password.chars().count(), 19);
        assert!(!is_secure(Some(password)), "{:?}", password);
    }
}

#[test]
fn test_repeated_special_character_counts_once() {
    // 10 distinct characters, one special repeated many times
    let password = "1aA2bB3cC#########";
    let padded = format!("{}##", password);
    assert_eq!(padded.chars().count(), 20);
    assert!(is_secure(Some(&padded)));
}

#[test]
fn test_unicode_classes() {
    // Greek letters count as upper- and lowercase
    assert!(is_secure(Some("ΑΒΓΔαβγδ0123456789!!")));
    // Han characters are neither upper- nor lowercase, so they count as special
    assert!(is_secure(Some("中文密码Abcdxyz1234567890")));
    // Arabic-Indic digits are decimal digits
    assert!(is_secure(Some("\u{0661}\u{0662}\u{0663}abcdefABCDEF#%&xyzw")));
}

#[test]
fn test_whitespace_is_special() {
    assert!(is_secure(Some("abc DEF 123 ghi JKL 456")));
}

#[test]
fn test_assessment_report() {
    let report = PasswordPolicy::default().assess("1234567890abcdefghij#%&");
    assert!(!report.is_secure());
    assert!(report.has_digit && report.has_lowercase && report.has_special);
    assert!(!report.has_uppercase);
    assert_eq!(report.missing(), &[PasswordRequirement::Uppercase]);
}

#[test]
fn test_policy_from_config() {
    let config = Config::from_toml_str(
        r#"
        [password]
        min_length = 6
        min_distinct = 6
        require_special = false
        "#,
    )
    .unwrap();

    assert!(config.password.is_secure("abcDE1"));
    assert!(!config.password.is_secure("abcDE"));
    assert!(!is_secure(Some("abcDE1")));
}
