//! License display names
//!
//! Creative Commons license URIs are recognised structurally
//! (`/licenses/{code}/{version}/{jurisdiction?}/deed.{locale}`) rather than
//! listed one by one. A handful of other common licenses come from a
//! static table. Anything else has no name and is shown as its URI.

use url::Url;

/// Host serving Creative Commons license deeds
const CC_HOST: &str = "creativecommons.org";

/// License codes under `/licenses/`
const CC_LICENSE_CODES: &[&str] = &[
    "by", "by-sa", "by-nd", "by-nc", "by-nc-sa", "by-nc-nd", "by-nd-nc", "sa", "nc", "nd",
];

/// Non-CC licenses, keyed by URI without trailing slash
const OTHER_LICENSES: &[(&str, &str)] = &[
    ("http://artlibre.org/licence/lal", "Free Art License 1.3"),
    ("http://www.gnu.org/licenses/fdl-1.3.html", "GNU FDL 1.3"),
    ("http://www.gnu.org/licenses/gpl-3.0.html", "GNU GPL 3.0"),
    ("http://opendatacommons.org/licenses/odbl/1.0", "ODbL 1.0"),
];

/// Canonical form of a license URI
///
/// Creative Commons URIs lose their `deed.*` / `legalcode*` suffix and are
/// rewritten to `http://creativecommons.org/.../` with a trailing slash. Other
/// URIs are returned unchanged.
pub fn normalize_license_uri(uri: &str) -> String {
    match cc_segments(uri) {
        Some(segments) => format!("http://{}/{}/", CC_HOST, segments.join("/")),
        None => uri.to_string(),
    }
}

/// Display name for a license URI, if it is a known license
///
/// ```
/// use libcredit::license::license_name;
///
/// assert_eq!(
///     license_name("http://creativecommons.org/licenses/by/3.0/au/deed.en_US").as_deref(),
///     Some("CC-BY 3.0 (AU)")
/// );
/// assert_eq!(license_name("http://example.org/my-license"), None);
/// ```
pub fn license_name(uri: &str) -> Option<String> {
    if let Some(segments) = cc_segments(uri) {
        return cc_license_name(&segments);
    }

    let key = uri.trim_end_matches('/');
    OTHER_LICENSES
        .iter()
        .find(|(known, _)| *known == key || key.strip_prefix("https://") == known.strip_prefix("http://"))
        .map(|(_, name)| name.to_string())
}

/// Meaningful path segments of a Creative Commons URI
fn cc_segments(uri: &str) -> Option<Vec<String>> {
    let url = Url::parse(uri).ok()?;
    if !matches!(url.scheme(), "http" | "https") {
        return None;
    }
    let host = url.host_str()?;
    if host != CC_HOST && host != "www.creativecommons.org" {
        return None;
    }

    let segments: Vec<String> = url
        .path_segments()?
        .filter(|s| !s.is_empty())
        .take_while(|s| !s.starts_with("deed") && !s.starts_with("legalcode"))
        .map(|s| s.to_ascii_lowercase())
        .collect();

    if segments.is_empty() {
        None
    } else {
        Some(segments)
    }
}

fn cc_license_name(segments: &[String]) -> Option<String> {
    match segments {
        [kind, code, version, rest @ ..] if kind == "licenses" => {
            if !CC_LICENSE_CODES.contains(&code.as_str()) || !is_version(version) {
                return None;
            }
            let base = format!("CC-{} {}", code.to_ascii_uppercase(), version);
            match rest {
                [] if version.starts_with('4') => Some(format!("{} International", base)),
                [] => Some(format!("{} Unported", base)),
                [jurisdiction] => Some(format!("{} ({})", base, jurisdiction.to_ascii_uppercase())),
                _ => None,
            }
        }
        [kind, tool, version] if kind == "publicdomain" && is_version(version) => {
            match tool.as_str() {
                "zero" => Some(format!("CC0 {} Universal", version)),
                "mark" => Some(format!("Public Domain Mark {}", version)),
                _ => None,
            }
        }
        _ => None,
    }
}

fn is_version(segment: &str) -> bool {
    !segment.is_empty()
        && segment.chars().all(|c| c.is_ascii_digit() || c == '.')
        && segment.starts_with(|c: char| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unported_names() {
        assert_eq!(
            license_name("http://creativecommons.org/licenses/by-sa/3.0/").as_deref(),
            Some("CC-BY-SA 3.0 Unported")
        );
        assert_eq!(
            license_name("http://creativecommons.org/licenses/by-nc/2.5/deed.en").as_deref(),
            Some("CC-BY-NC 2.5 Unported")
        );
        assert_eq!(
            license_name("http://creativecommons.org/licenses/by-nc-nd/3.0/").as_deref(),
            Some("CC-BY-NC-ND 3.0 Unported")
        );
    }

    #[test]
    fn test_jurisdiction_names() {
        assert_eq!(
            license_name("http://creativecommons.org/licenses/by/3.0/au/deed.en_US").as_deref(),
            Some("CC-BY 3.0 (AU)")
        );
        assert_eq!(
            license_name("https://creativecommons.org/licenses/by-sa/2.5/se/").as_deref(),
            Some("CC-BY-SA 2.5 (SE)")
        );
    }

    #[test]
    fn test_international_and_public_domain() {
        assert_eq!(
            license_name("https://creativecommons.org/licenses/by/4.0/legalcode").as_deref(),
            Some("CC-BY 4.0 International")
        );
        assert_eq!(
            license_name("http://creativecommons.org/publicdomain/zero/1.0/").as_deref(),
            Some("CC0 1.0 Universal")
        );
        assert_eq!(
            license_name("http://creativecommons.org/publicdomain/mark/1.0/").as_deref(),
            Some("Public Domain Mark 1.0")
        );
    }

    #[test]
    fn test_other_licenses() {
        assert_eq!(
            license_name("http://artlibre.org/licence/lal/").as_deref(),
            Some("Free Art License 1.3")
        );
        assert_eq!(
            license_name("https://www.gnu.org/licenses/gpl-3.0.html").as_deref(),
            Some("GNU GPL 3.0")
        );
    }

    #[test]
    fn test_unknown_licenses() {
        assert_eq!(license_name("http://example.org/license"), None);
        assert_eq!(license_name("http://creativecommons.org/licenses/foo/3.0/"), None);
        assert_eq!(license_name("http://creativecommons.org/licenses/by/"), None);
        assert_eq!(license_name("not a uri"), None);
    }

    #[test]
    fn test_normalize_strips_deed() {
        assert_eq!(
            normalize_license_uri("https://www.creativecommons.org/licenses/by/3.0/au/deed.en_US"),
            "http://creativecommons.org/licenses/by/3.0/au/"
        );
        assert_eq!(
            normalize_license_uri("http://creativecommons.org/licenses/by-sa/3.0"),
            "http://creativecommons.org/licenses/by-sa/3.0/"
        );
        assert_eq!(
            normalize_license_uri("http://example.org/license"),
            "http://example.org/license"
        );
    }

    #[test]
    fn test_lookup_ignores_deed_suffix() {
        let bare = "http://creativecommons.org/licenses/by-nd/2.0/de/";
        let deed = "http://creativecommons.org/licenses/by-nd/2.0/de/deed.de";
        assert_eq!(license_name(bare), license_name(deed));
        assert_eq!(license_name(&normalize_license_uri(deed)), license_name(deed));
    }
}
