use url::Url;

/// Host fragments that mark a result as academic literature.
pub const SCHOLARLY_DOMAINS: [&str; 7] = [
    ".edu",
    "springer",
    "sciencedirect",
    "arxiv",
    "researchgate",
    "acm",
    "ieee",
];

/// True when the URL's host contains one of [`SCHOLARLY_DOMAINS`],
/// ignoring case. Anything that does not parse to a host is not scholarly.
pub fn is_scholarly(url: &str) -> bool {
    let Ok(parsed) = Url::parse(url) else {
        return false;
    };
    let Some(host) = parsed.host_str() else {
        return false;
    };
    let host = host.to_ascii_lowercase();
    SCHOLARLY_DOMAINS.iter().any(|domain| host.contains(domain))
}
