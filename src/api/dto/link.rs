//! DTOs for the link management endpoints.

use serde::Deserialize;
use validator::{Validate, ValidationError};

use crate::domain::entities::{LinkPatch, LinkRules, NewLink};

/// Rejects titles made only of whitespace.
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank").with_message("must not be blank".into()));
    }
    Ok(())
}

/// Accepts only `http` and `https` URLs, the schemes a hub link may point to.
pub fn http_url(value: &str) -> Result<(), ValidationError> {
    let value = value.trim().to_ascii_lowercase();
    if value.starts_with("http://") || value.starts_with("https://") {
        return Ok(());
    }
    Err(ValidationError::new("scheme").with_message("URL must use http or https".into()))
}

fn default_enabled() -> bool {
    true
}

/// Request body for `POST /api/links`.
///
/// ```json
/// {
///   "title": "Newsletter",
///   "url": "https://example.com/newsletter",
///   "enabled": true,
///   "rules": {
///     "timeRange": { "start": "09:00", "end": "17:00" },
///     "device": "mobile",
///     "priority": 4
///   }
/// }
/// ```
///
/// `enabled` defaults to `true`; `rules` and each of its fields are optional.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateLinkRequest {
    #[validate(
        length(min = 1, max = 200, message = "Title must be 1-200 characters"),
        custom(function = "not_blank")
    )]
    pub title: String,

    #[validate(url(message = "Invalid URL format"), custom(function = "http_url"))]
    pub url: String,

    #[serde(default = "default_enabled")]
    pub enabled: bool,

    #[serde(default)]
    pub rules: Option<LinkRules>,
}

impl From<CreateLinkRequest> for NewLink {
    fn from(request: CreateLinkRequest) -> Self {
        NewLink {
            title: request.title.trim().to_string(),
            url: request.url.trim().to_string(),
            enabled: request.enabled,
            rules: request.rules,
        }
    }
}

/// Request body for `PATCH /api/links/{id}`.
///
/// All fields are optional. Only provided fields are changed.
///
/// # `rules` semantics
///
/// - **Absent** → leave existing rules unchanged
/// - **`null`** → remove all rules
/// - **Object** → replace the whole rule set
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateLinkRequest {
    #[validate(
        length(min = 1, max = 200, message = "Title must be 1-200 characters"),
        custom(function = "not_blank")
    )]
    pub title: Option<String>,

    #[validate(url(message = "Invalid URL format"), custom(function = "http_url"))]
    pub url: Option<String>,

    pub enabled: Option<bool>,

    #[serde(default, with = "::serde_with::rust::double_option")]
    pub rules: Option<Option<LinkRules>>,
}

impl From<UpdateLinkRequest> for LinkPatch {
    fn from(request: UpdateLinkRequest) -> Self {
        LinkPatch {
            title: request.title.map(|t| t.trim().to_string()),
            url: request.url.map(|u| u.trim().to_string()),
            enabled: request.enabled,
            rules: request.rules,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::DeviceClass;
    use serde_json::json;

    #[test]
    fn test_create_request_defaults() {
        let request: CreateLinkRequest = serde_json::from_value(json!({
            "title": "Blog",
            "url": "https://example.com/blog"
        }))
        .unwrap();

        assert!(request.validate().is_ok());
        assert!(request.enabled);
        assert!(request.rules.is_none());
    }

    #[test]
    fn test_create_request_rejects_blank_title_and_bad_url() {
        let request: CreateLinkRequest = serde_json::from_value(json!({
            "title": "   ",
            "url": "not a url"
        }))
        .unwrap();

        let errors = request.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("title"));
        assert!(fields.contains_key("url"));
    }

    #[test]
    fn test_create_request_parses_rules() {
        let request: CreateLinkRequest = serde_json::from_value(json!({
            "title": "Shop",
            "url": "https://example.com/shop",
            "enabled": false,
            "rules": {
                "timeRange": { "start": "09:00", "end": "17:30" },
                "device": "tablet",
                "priority": 0
            }
        }))
        .unwrap();

        let link: NewLink = request.into();
        let rules = link.rules.unwrap();
        assert!(!link.enabled);
        assert_eq!(rules.device, Some(DeviceClass::Tablet));
        assert_eq!(rules.priority, Some(0));
        assert_eq!(rules.time_range.unwrap().to_string(), "09:00 - 17:30");
    }

    #[test]
    fn test_create_request_rejects_malformed_time() {
        let result = serde_json::from_value::<CreateLinkRequest>(json!({
            "title": "Shop",
            "url": "https://example.com/shop",
            "rules": { "timeRange": { "start": "9am", "end": "17:00" } }
        }));

        assert!(result.is_err());
    }

    #[test]
    fn test_update_request_rules_tristate() {
        let absent: UpdateLinkRequest = serde_json::from_value(json!({ "title": "New" })).unwrap();
        let cleared: UpdateLinkRequest = serde_json::from_value(json!({ "rules": null })).unwrap();
        let set: UpdateLinkRequest =
            serde_json::from_value(json!({ "rules": { "priority": 5 } })).unwrap();

        assert_eq!(LinkPatch::from(absent).rules, None);
        assert_eq!(LinkPatch::from(cleared).rules, Some(None));
        assert_eq!(
            LinkPatch::from(set).rules,
            Some(Some(LinkRules {
                priority: Some(5),
                ..LinkRules::default()
            }))
        );
    }

    #[test]
    fn test_update_request_validates_present_fields_only() {
        let empty = UpdateLinkRequest::default();
        let bad_url = UpdateLinkRequest {
            url: Some("ftp//broken".to_string()),
            ..UpdateLinkRequest::default()
        };

        assert!(empty.validate().is_ok());
        assert!(bad_url.validate().is_err());
    }

    #[test]
    fn test_only_http_schemes_are_accepted() {
        assert!(http_url("https://example.com").is_ok());
        assert!(http_url("HTTP://example.com").is_ok());
        assert!(http_url("javascript:alert(1)").is_err());
        assert!(http_url("ftp://example.com/file").is_err());

        let script: CreateLinkRequest = serde_json::from_value(json!({
            "title": "Click me",
            "url": "javascript:alert(document.cookie)"
        }))
        .unwrap();
        let errors = script.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("url"));

        let patch = UpdateLinkRequest {
            url: Some("data:text/html,hi".to_string()),
            ..UpdateLinkRequest::default()
        };
        assert!(patch.validate().is_err());
    }

    #[test]
    fn test_requests_trim_title_and_url() {
        let create: CreateLinkRequest = serde_json::from_value(json!({
            "title": "  Blog ",
            "url": " https://example.com/blog  "
        }))
        .unwrap();
        let update: UpdateLinkRequest = serde_json::from_value(json!({
            "title": " Blog",
            "url": "https://example.com/blog "
        }))
        .unwrap();

        let link = NewLink::from(create);
        let patch = LinkPatch::from(update);

        assert_eq!(link.title, "Blog");
        assert_eq!(link.url, "https://example.com/blog");
        assert_eq!(patch.title.as_deref(), Some("Blog"));
        assert_eq!(patch.url.as_deref(), Some("https://example.com/blog"));
    }
}
