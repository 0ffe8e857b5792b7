//! Cookies carried by a response snapshot.
//!
//! Rendering follows the usual web-framework conventions: `Path` defaults to
//! `/`, and `Max-Age` also emits a matching `Expires` date. Values are
//! percent-encoded; names must be RFC 6265 tokens.

use std::fmt::Write;
use std::time::Duration;

use axum::http::HeaderValue;
use chrono::{DateTime, Utc};

use crate::errors::Error;

/// Rejected cookie name or attribute value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CookieError {
    #[error("invalid cookie name {0:?}")]
    InvalidName(String),
    #[error("invalid cookie {attribute} {value:?}")]
    InvalidAttribute {
        attribute: &'static str,
        value: String,
    },
}

/// A cookie value plus its optional attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cookie {
    pub value: String,
    pub options: Option<CookieOptions>,
}

/// `SameSite` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SameSite {
    Strict,
    Lax,
    None,
}

impl SameSite {
    fn as_str(&self) -> &'static str {
        match self {
            SameSite::Strict => "Strict",
            SameSite::Lax => "Lax",
            SameSite::None => "None",
        }
    }
}

/// `Priority` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CookiePriority {
    Low,
    Medium,
    High,
}

impl CookiePriority {
    fn as_str(&self) -> &'static str {
        match self {
            CookiePriority::Low => "Low",
            CookiePriority::Medium => "Medium",
            CookiePriority::High => "High",
        }
    }
}

/// Cookie attributes. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CookieOptions {
    pub domain: Option<String>,
    pub path: Option<String>,
    pub max_age: Option<Duration>,
    pub expires: Option<DateTime<Utc>>,
    pub secure: bool,
    pub http_only: bool,
    pub same_site: Option<SameSite>,
    pub partitioned: bool,
    pub priority: Option<CookiePriority>,
}

impl CookieOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = Some(domain.into());
        self
    }

    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn max_age(mut self, max_age: Duration) -> Self {
        self.max_age = Some(max_age);
        self
    }

    pub fn expires(mut self, expires: DateTime<Utc>) -> Self {
        self.expires = Some(expires);
        self
    }

    pub fn secure(mut self, secure: bool) -> Self {
        self.secure = secure;
        self
    }

    pub fn http_only(mut self, http_only: bool) -> Self {
        self.http_only = http_only;
        self
    }

    pub fn same_site(mut self, same_site: SameSite) -> Self {
        self.same_site = Some(same_site);
        self
    }

    pub fn partitioned(mut self, partitioned: bool) -> Self {
        self.partitioned = partitioned;
        self
    }

    pub fn priority(mut self, priority: CookiePriority) -> Self {
        self.priority = Some(priority);
        self
    }
}

impl Cookie {
    pub fn new(value: impl Into<String>, options: Option<CookieOptions>) -> Self {
        Self {
            value: value.into(),
            options,
        }
    }

    /// Render as a `Set-Cookie` header value.
    ///
    /// Fails on a name that is not a token, or a `Domain`/`Path` that would
    /// break out of its attribute.
    pub fn to_header_value(&self, name: &str) -> Result<HeaderValue, Error> {
        self.check(name).map_err(Error::other)?;
        let rendered = self.render(name, Utc::now());
        HeaderValue::from_str(&rendered).map_err(Error::other)
    }

    fn check(&self, name: &str) -> Result<(), CookieError> {
        if name.is_empty() || !name.bytes().all(is_token_byte) {
            return Err(CookieError::InvalidName(name.to_string()));
        }
        if let Some(opts) = &self.options {
            for (attribute, value) in [("domain", &opts.domain), ("path", &opts.path)] {
                if let Some(value) = value {
                    if !value.bytes().all(|b| (0x20..0x7f).contains(&b) && b != b';') {
                        return Err(CookieError::InvalidAttribute {
                            attribute,
                            value: value.clone(),
                        });
                    }
                }
            }
        }
        Ok(())
    }

    fn render(&self, name: &str, now: DateTime<Utc>) -> String {
        let default_options = CookieOptions::default();
        let opts = self.options.as_ref().unwrap_or(&default_options);

        let mut out = format!("{}={}", name, urlencoding::encode(&self.value));

        if let Some(max_age) = opts.max_age {
            let _ = write!(out, "; Max-Age={}", max_age.as_secs());
        }
        if let Some(domain) = &opts.domain {
            let _ = write!(out, "; Domain={}", domain);
        }
        let _ = write!(out, "; Path={}", opts.path.as_deref().unwrap_or("/"));

        let expires = match opts.max_age {
            Some(max_age) => chrono::Duration::from_std(max_age)
                .ok()
                .and_then(|d| now.checked_add_signed(d)),
            None => opts.expires,
        };
        if let Some(expires) = expires {
            let _ = write!(out, "; Expires={}", expires.format("%a, %d %b %Y %H:%M:%S GMT"));
        }

        if opts.http_only {
            out.push_str("; HttpOnly");
        }
        if opts.secure {
            out.push_str("; Secure");
        }
        if opts.partitioned {
            out.push_str("; Partitioned");
        }
        if let Some(priority) = opts.priority {
            let _ = write!(out, "; Priority={}", priority.as_str());
        }
        if let Some(same_site) = opts.same_site {
            let _ = write!(out, "; SameSite={}", same_site.as_str());
        }

        out
    }
}

fn is_token_byte(b: u8) -> bool {
    matches!(b, 0x21..=0x7e) && !b"()<>@,;:\\\"/[]?={}".contains(&b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
    }

    #[test]
    fn test_plain_cookie_defaults_path() {
        let cookie = Cookie::new("abc", None);
        assert_eq!(cookie.render("sid", fixed_now()), "sid=abc; Path=/");
    }

    #[test]
    fn test_all_attributes() {
        let opts = CookieOptions::new()
            .domain("example.com")
            .path("/api")
            .secure(true)
            .http_only(true)
            .same_site(SameSite::Strict)
            .partitioned(true)
            .priority(CookiePriority::High);
        let cookie = Cookie::new("abc", Some(opts));

        assert_eq!(
            cookie.render("sid", fixed_now()),
            "sid=abc; Domain=example.com; Path=/api; HttpOnly; Secure; Partitioned; Priority=High; SameSite=Strict"
        );
    }

    #[test]
    fn test_max_age_sets_expires() {
        let opts = CookieOptions::new().max_age(Duration::from_secs(3600));
        let cookie = Cookie::new("t", Some(opts));

        assert_eq!(
            cookie.render("refresh", fixed_now()),
            "refresh=t; Max-Age=3600; Path=/; Expires=Mon, 01 Jan 2024 01:00:00 GMT"
        );
    }

    #[test]
    fn test_explicit_expires() {
        let opts = CookieOptions::new().expires(fixed_now());
        let cookie = Cookie::new("t", Some(opts));

        assert_eq!(
            cookie.render("a", fixed_now()),
            "a=t; Path=/; Expires=Mon, 01 Jan 2024 00:00:00 GMT"
        );
    }

    #[test]
    fn test_value_is_percent_encoded() {
        let cookie = Cookie::new("a b,c", None);
        assert_eq!(cookie.render("sid", fixed_now()), "sid=a%20b%2Cc; Path=/");

        let value = Cookie::new("bad\nvalue", None).to_header_value("sid").unwrap();
        assert_eq!(value, "sid=bad%0Avalue; Path=/");
    }

    #[test]
    fn test_value_cannot_add_attributes() {
        let cookie = Cookie::new("x; Domain=evil.example; Path=/admin", None);
        let value = cookie.to_header_value("sid").unwrap();
        assert_eq!(
            value,
            "sid=x%3B%20Domain%3Devil.example%3B%20Path%3D%2Fadmin; Path=/"
        );
    }

    #[test]
    fn test_invalid_name_is_rejected() {
        let cookie = Cookie::new("v", None);
        assert!(cookie.to_header_value("a=b; Secure").is_err());
        assert!(cookie.to_header_value("").is_err());
        assert!(cookie.to_header_value("bad\nname").is_err());
        assert!(cookie.to_header_value("session_id-2").is_ok());
        assert_eq!(
            cookie.check("a b"),
            Err(CookieError::InvalidName("a b".to_string()))
        );
    }

    #[test]
    fn test_attribute_cannot_add_attributes() {
        let opts = CookieOptions::new().path("/; Domain=evil.example");
        let cookie = Cookie::new("v", Some(opts));
        assert_eq!(
            cookie.check("sid"),
            Err(CookieError::InvalidAttribute {
                attribute: "path",
                value: "/; Domain=evil.example".to_string(),
            })
        );
        assert!(cookie.to_header_value("sid").is_err());
    }
}
