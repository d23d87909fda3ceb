use crate::error::{AppError, Result};
use crate::extract::AppJson;
use crate::model::{ShortenRequest, ShortenResponse};
use crate::state::AppState;
use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::Redirect;
use axum::Json;
use jiff::tz::TimeZone;
use jiff::Timestamp;
use snip_core::{CreateLinkParams, ShortCode, DEFAULT_VALIDITY_MINUTES};
use url::Url;

/// ISO-8601 in UTC at second precision, e.g. `2023-11-14T22:13:20Z`.
///
/// Years outside `0000..=9999` use the expanded, signed six-digit form
/// (`-000826-10-21T17:14:34Z`).
fn format_expires_at(expires_at: Timestamp) -> String {
    let datetime = expires_at.to_zoned(TimeZone::UTC).datetime();
    let year = match datetime.year() {
        year @ 0..=9999 => format!("{:04}", year),
        year => format!("{:+07}", year),
    };
    format!("{}-{}", year, datetime.strftime("%m-%dT%H:%M:%SZ"))
}

/// Accepts absolute `http`/`https` URLs with a host.
fn validate_url(raw: &str) -> Result<()> {
    let url = Url::parse(raw).map_err(|e| AppError::InvalidUrl(format!("{}: {}", raw, e)))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(AppError::InvalidUrl(format!(
            "URL scheme must be http or https: {}",
            url.scheme()
        )));
    }
    if !url.has_host() {
        return Err(AppError::InvalidUrl(format!("URL must have a host: {}", raw)));
    }

    Ok(())
}

pub async fn shorten_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    AppJson(request): AppJson<ShortenRequest>,
) -> Result<(StatusCode, Json<ShortenResponse>)> {
    validate_url(&request.url)?;

    let mut params = CreateLinkParams::new(request.url)
        .with_validity_minutes(request.validity.unwrap_or(DEFAULT_VALIDITY_MINUTES));
    // an empty custom code means "generate one"
    if let Some(code) = request.custom_code.filter(|code| !code.is_empty()) {
        params = params.with_custom_code(ShortCode::custom(code));
    }

    let link = state.registry().create_link(params).await?;

    let response = ShortenResponse {
        short_url: state.short_url(&headers, &link.code),
        expires_at: format_expires_at(link.expires_at),
    };
    Ok((StatusCode::CREATED, Json(response)))
}

pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Redirect> {
    let original_url = state.registry().resolve(&ShortCode::custom(code)).await?;
    Ok(Redirect::temporary(&original_url))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_http_and_https() {
        assert!(validate_url("https://example.com").is_ok());
        assert!(validate_url("http://example.com/a/b?c=d#e").is_ok());
        assert!(validate_url("http://127.0.0.1:8080").is_ok());
    }

    #[test]
    fn rejects_malformed_urls() {
        assert!(validate_url("").is_err());
        assert!(validate_url("not-a-valid-url").is_err());
        assert!(validate_url("example.com").is_err());
    }

    fn timestamp(year: i16, month: i8, day: i8) -> Timestamp {
        jiff::civil::date(year, month, day)
            .at(17, 14, 34, 0)
            .to_zoned(TimeZone::UTC)
            .unwrap()
            .timestamp()
    }

    #[test]
    fn expires_at_in_common_era() {
        let expires_at = Timestamp::from_second(1_700_000_000).unwrap();
        assert_eq!(format_expires_at(expires_at), "2023-11-14T22:13:20Z");
        assert_eq!(format_expires_at(timestamp(5, 1, 2)), "0005-01-02T17:14:34Z");
    }

    #[test]
    fn expires_at_before_year_zero_uses_expanded_year() {
        assert_eq!(
            format_expires_at(timestamp(-826, 10, 21)),
            "-000826-10-21T17:14:34Z"
        );
        assert_eq!(
            format_expires_at(timestamp(-1, 12, 31)),
            "-000001-12-31T17:14:34Z"
        );
    }

    #[test]
    fn rejects_other_schemes() {
        assert!(matches!(
            validate_url("ftp://example.com"),
            Err(AppError::InvalidUrl(_))
        ));
        assert!(validate_url("mailto:someone@example.com").is_err());
    }
}
