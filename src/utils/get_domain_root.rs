use crate::constants::{SCHEME_PREFIX_PATTERN, TLD_LIST};

/// Derives the brand-identifying label of a URL's hostname.
///
/// `https://shop.ford.co.uk/parts` -> `ford`
///
/// Hosts without a dot (`localhost`, `localhost:3000`) are returned as is.
/// Returns an empty string when nothing remains after stripping known TLD
/// labels.
pub fn get_domain_root(raw_url: &str) -> String {
    let lowercased = raw_url.trim().to_lowercase();

    let without_scheme = SCHEME_PREFIX_PATTERN.replace(&lowercased, "");
    let host = without_scheme.split('/').next().unwrap_or_default();
    let host = host.strip_prefix("www.").unwrap_or(host);

    if !host.contains('.') {
        return host.to_string();
    }

    host.split('.')
        .rfind(|label| !TLD_LIST.contains(*label))
        .unwrap_or_default()
        .to_string()
}
