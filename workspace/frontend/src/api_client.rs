pub mod district_data;
pub mod geocoder;

use dashboard::FetchError;
use gloo_net::http::RequestBuilder;
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use serde::de::DeserializeOwned;

pub use district_data::HttpDataSource;
pub use geocoder::NominatimGeocoder;

/// Bytes escaped by `encodeURIComponent`: everything except ASCII
/// alphanumerics and `- _ . ! ~ * ' ( )`. Non-ASCII is always escaped.
const URI_COMPONENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'$')
    .add(b'%')
    .add(b'&')
    .add(b'+')
    .add(b',')
    .add(b'/')
    .add(b':')
    .add(b';')
    .add(b'<')
    .add(b'=')
    .add(b'>')
    .add(b'?')
    .add(b'@')
    .add(b'[')
    .add(b'\\')
    .add(b']')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

/// Escapes one path segment or query value the way `encodeURIComponent` does.
pub(crate) fn encode_segment(segment: &str) -> String {
    utf8_percent_encode(segment, URI_COMPONENT).to_string()
}

/// Common GET request handler
pub(crate) async fn get<T>(request: RequestBuilder, endpoint: &str) -> Result<T, FetchError>
where
    T: DeserializeOwned,
{
    log::debug!("GET request to: {}", endpoint);

    let response = request.send().await.map_err(|e| {
        let err = FetchError::Network(e.to_string());
        log::warn!("GET {} - {}", endpoint, err);
        err
    })?;

    if !response.ok() {
        let err = FetchError::Status(response.status());
        log::warn!("GET {} - {}", endpoint, err);
        return Err(err);
    }

    log::trace!("GET {} - Response received, parsing JSON", endpoint);
    let body: T = response.json().await.map_err(|e| {
        let err = FetchError::Decode(e.to_string());
        log::warn!("GET {} - {}", endpoint, err);
        err
    })?;

    log::info!("GET {} - Success", endpoint);
    Ok(body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_segment_matches_uri_component() {
        assert_eq!(encode_segment("Uttar Pradesh"), "Uttar%20Pradesh");
        assert_eq!(encode_segment("Agra/Firozabad"), "Agra%2FFirozabad");
        assert_eq!(encode_segment("A&B=C?D#E"), "A%26B%3DC%3FD%23E");
        assert_eq!(encode_segment("100%+"), "100%25%2B");
    }

    #[test]
    fn test_encode_segment_keeps_unreserved() {
        assert_eq!(encode_segment("Sant-Kabir_Nagar.(x)!~*'"), "Sant-Kabir_Nagar.(x)!~*'");
    }

    #[test]
    fn test_encode_segment_devanagari() {
        assert_eq!(encode_segment("आगरा"), "%E0%A4%86%E0%A4%97%E0%A4%B0%E0%A4%BE");
    }
}
