// Remote endpoint constants and URL assembly

use url::Url;

use crate::error::{Result, StoreError};

pub const DEFAULT_HOST: &str = "https://www.jsonstore.io";
pub const GET_TOKEN: &str = "get-token";

pub const ORDER_KEY: &str = "orderKey";
pub const FILTER_VALUE: &str = "filterValue";
pub const VALUE_TYPE: &str = "valueType";

/// Join path segments onto a host
///
/// Leading and trailing slashes of each segment are dropped, empty segments
/// are skipped, and the rest are joined with a single `/`.
pub fn join(host: &str, segments: &[&str]) -> String {
    let mut joined = host.trim_end_matches('/').to_string();
    for segment in segments {
        let segment = segment.trim_matches('/');
        if segment.is_empty() {
            continue;
        }
        joined.push('/');
        joined.push_str(segment);
    }
    joined
}

/// Reject paths holding `.` or `..` segments
///
/// URL parsing resolves those segments, which would let a call path climb
/// out of the base path or the token. Backslashes count as separators and
/// `%2e` as a dot, as they do for the parser.
pub fn check_path(path: &str) -> Result<()> {
    let is_dot_segment = |segment: &str| {
        let decoded = segment.to_ascii_lowercase().replace("%2e", ".");
        decoded == "." || decoded == ".."
    };
    if path.split(['/', '\\']).any(is_dot_segment) {
        return Err(StoreError::InvalidPath(path.to_string()));
    }
    Ok(())
}

/// Build a request URL, appending query pairs that are present and non-empty
///
/// All pairs land in one query string joined with `&`, in the order given.
pub fn build(host: &str, segments: &[&str], query: &[(&str, Option<&str>)]) -> Result<Url> {
    for segment in segments {
        check_path(segment)?;
    }
    let mut url = Url::parse(&join(host, segments))?;
    let present: Vec<(&str, &str)> = query
        .iter()
        .filter_map(|(key, value)| value.filter(|v| !v.is_empty()).map(|v| (*key, v)))
        .collect();
    if !present.is_empty() {
        url.query_pairs_mut().extend_pairs(present);
    }
    Ok(url)
}
