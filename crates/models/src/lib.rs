pub mod blog_post;
pub mod contact_submission;
pub mod db;
pub mod errors;
pub mod review;
pub mod service;

/// Appliance categories the business repairs. The contact form only accepts
/// one of these.
pub const APPLIANCE_TYPES: &[&str] = &[
    "Refrigerator",
    "Washing Machine",
    "Air Conditioner",
    "Microwave",
    "TV/Home Theatre",
    "Water Purifier",
    "Dishwasher",
    "Induction Cooktop",
    "Other",
];

/// True when `s` is usable as a URL path segment: non-empty, lowercase
/// ASCII alphanumerics and hyphens, no leading/trailing/double hyphen.
pub fn is_url_safe_slug(s: &str) -> bool {
    if s.is_empty() || s.starts_with('-') || s.ends_with('-') || s.contains("--") {
        return false;
    }
    s.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

#[cfg(test)]
mod tests {
    use super::is_url_safe_slug;

    #[test]
    fn slug_accepts_lowercase_hyphenated() {
        assert!(is_url_safe_slug("washing-machine-repair"));
        assert!(is_url_safe_slug("ac-service-2024"));
    }

    #[test]
    fn slug_rejects_bad_shapes() {
        assert!(!is_url_safe_slug(""));
        assert!(!is_url_safe_slug("-leading"));
        assert!(!is_url_safe_slug("trailing-"));
        assert!(!is_url_safe_slug("double--hyphen"));
        assert!(!is_url_safe_slug("Upper-Case"));
        assert!(!is_url_safe_slug("with space"));
        assert!(!is_url_safe_slug("uni/code"));
    }
}
