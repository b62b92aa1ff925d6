use crate::api::{CSRF_COOKIE, Credentials, SESSION_COOKIE};

pub const EPOCH_EXPIRES: &str = "Thu, 01 Jan 1970 00:00:00 GMT";

/// Rewrites a captured `Set-Cookie` value so that replaying it deletes the
/// cookie: `sessionid`/`csrftoken` values are blanked, `Expires` is forced to
/// the epoch and `Max-Age` to 0. Missing attributes are appended.
pub fn expire_cookie(set_cookie: &str) -> String {
    let mut parts: Vec<String> = set_cookie
        .split(';')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect();

    if let Some(first) = parts.first_mut()
        && let Some((name, _)) = first.split_once('=')
        && (name.trim() == SESSION_COOKIE || name.trim() == CSRF_COOKIE)
    {
        *first = format!("{}=", name.trim());
    }

    let mut saw_expires = false;
    let mut saw_max_age = false;
    for part in parts.iter_mut().skip(1) {
        let attr = part.split('=').next().unwrap_or("").trim().to_ascii_lowercase();
        match attr.as_str() {
            "expires" => {
                *part = format!("Expires={}", EPOCH_EXPIRES);
                saw_expires = true;
            }
            "max-age" => {
                *part = "Max-Age=0".to_string();
                saw_max_age = true;
            }
            _ => {}
        }
    }
    if !saw_expires {
        parts.push(format!("Expires={}", EPOCH_EXPIRES));
    }
    if !saw_max_age {
        parts.push("Max-Age=0".to_string());
    }

    parts
        .iter()
        .map(|p| format!("{};", p))
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn expire_cookies(cookies: &[String]) -> Vec<String> {
    cookies.iter().map(|c| expire_cookie(c)).collect()
}

/// Backend `csrftoken`/`sessionid` values carried by captured `Set-Cookie`
/// headers. Later headers win.
pub fn credentials_from_set_cookies(cookies: &[String]) -> Credentials {
    let pairs: Vec<&str> = cookies
        .iter()
        .filter_map(|c| c.split(';').next())
        .map(str::trim)
        .collect();
    Credentials::from_cookie_header(Some(&pairs.join("; ")))
}

/// The gateway's own session cookie.
pub fn session_cookie(name: &str, id: &str, max_age_secs: u64, secure: bool) -> String {
    let mut out = format!(
        "{}={}; Path=/; Max-Age={}; HttpOnly; SameSite=Lax",
        name, id, max_age_secs
    );
    if secure {
        out.push_str("; Secure");
    }
    out
}

pub fn clear_session_cookie(name: &str) -> String {
    format!(
        "{}=; Path=/; Expires={}; Max-Age=0; HttpOnly; SameSite=Lax",
        name, EPOCH_EXPIRES
    )
}

#[cfg(test)]
#[path = "../tests/session/cookies_tests.rs"]
mod tests;
