//! HTML form payloads of the dashboard and login pages.
//!
//! Browsers post `application/x-www-form-urlencoded` bodies where unchecked
//! checkboxes are absent and empty inputs arrive as empty strings, so optional
//! inputs go through `NoneAsEmptyString`.

use regex::Regex;
use serde::Deserialize;
use serde_with::{NoneAsEmptyString, serde_as};
use std::sync::LazyLock;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::api::dto::link::{http_url, not_blank};
use crate::domain::entities::{
    DeviceClass, Link, LinkPatch, LinkRules, NewLink, TimeRange, parse_hhmm,
};

/// `HH:MM` on a 24-hour clock, as produced by `<input type="time">`.
static HHMM_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([01]\d|2[0-3]):[0-5]\d$").unwrap());

/// Default bounds offered when a link has no time range yet.
pub const DEFAULT_START_TIME: &str = "09:00";
pub const DEFAULT_END_TIME: &str = "18:00";

fn valid_priority(value: &str) -> Result<(), ValidationError> {
    value.trim().parse::<i32>().map(|_| ()).map_err(|_| {
        ValidationError::new("priority").with_message("Priority must be a whole number".into())
    })
}

/// Flattens validation errors into display messages, sorted for stable output.
pub fn error_messages(errors: &ValidationErrors) -> Vec<String> {
    let mut messages: Vec<String> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter()
                .map(|e| match &e.message {
                    Some(message) => message.to_string(),
                    None => format!("{field} is invalid"),
                })
                .collect::<Vec<_>>()
        })
        .collect();
    messages.sort();
    messages.dedup();
    messages
}

/// Body of `POST /login`.
///
/// `mode=signup` comes from a hidden input on the sign-up variant of the page,
/// which also asks for a name. No credential is checked.
#[serde_as]
#[derive(Debug, Default, Deserialize, Validate)]
pub struct LoginForm {
    #[serde(default)]
    #[validate(email(message = "Enter a valid email address"))]
    pub email: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,

    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub name: Option<String>,

    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub mode: Option<String>,
}

impl LoginForm {
    pub fn is_signup(&self) -> bool {
        self.mode.as_deref() == Some("signup")
    }

    /// Runs field validation plus the sign-up name requirement.
    pub fn check(&self) -> Result<(), Vec<String>> {
        let mut messages = match self.validate() {
            Ok(()) => Vec::new(),
            Err(errors) => error_messages(&errors),
        };

        let has_name = self.name.as_deref().is_some_and(|n| !n.trim().is_empty());
        if self.is_signup() && !has_name {
            messages.push("Full name is required".to_string());
        }

        if messages.is_empty() {
            Ok(())
        } else {
            Err(messages)
        }
    }
}

/// Body of the add/edit link form.
#[serde_as]
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct LinkForm {
    #[serde(default)]
    #[validate(
        length(min = 1, max = 200, message = "Title is required (up to 200 characters)"),
        custom(function = "not_blank", message = "Title is required (up to 200 characters)")
    )]
    pub title: String,

    #[serde(default)]
    #[validate(
        url(message = "URL must be a valid absolute URL"),
        custom(function = "http_url", message = "URL must start with http:// or https://")
    )]
    pub url: String,

    #[serde(default)]
    pub device: Option<DeviceClass>,

    /// Checkbox: present when checked.
    #[serde(default)]
    pub enabled: Option<String>,

    /// Checkbox: present when checked.
    #[serde(default)]
    pub use_time_range: Option<String>,

    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    #[validate(regex(path = "*HHMM_REGEX", message = "Start time must be HH:MM"))]
    pub start_time: Option<String>,

    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    #[validate(regex(path = "*HHMM_REGEX", message = "End time must be HH:MM"))]
    pub end_time: Option<String>,

    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    #[validate(custom(function = "valid_priority"))]
    pub priority: Option<String>,
}

impl LinkForm {
    /// Form prefilled for a new link: enabled, shown on all devices.
    pub fn blank() -> Self {
        Self {
            device: Some(DeviceClass::All),
            enabled: Some("on".to_string()),
            ..Self::default()
        }
    }

    /// Form prefilled from an existing link.
    pub fn from_link(link: &Link) -> Self {
        let time_range = link.time_range();
        Self {
            title: link.title.clone(),
            url: link.url.clone(),
            device: Some(link.device().unwrap_or(DeviceClass::All)),
            enabled: link.enabled.then(|| "on".to_string()),
            use_time_range: time_range.map(|_| "on".to_string()),
            start_time: time_range.map(|r| r.start.format("%H:%M").to_string()),
            end_time: time_range.map(|r| r.end.format("%H:%M").to_string()),
            priority: link.priority().map(|p| p.to_string()),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled.is_some()
    }

    pub fn uses_time_range(&self) -> bool {
        self.use_time_range.is_some()
    }

    /// Runs field validation plus the time range requirement.
    pub fn check(&self) -> Result<(), Vec<String>> {
        let mut messages = match self.validate() {
            Ok(()) => Vec::new(),
            Err(errors) => error_messages(&errors),
        };

        if self.uses_time_range() && (self.start_time.is_none() || self.end_time.is_none()) {
            messages.push("Start and end time are required for a time range".to_string());
        }

        if messages.is_empty() {
            Ok(())
        } else {
            Err(messages)
        }
    }

    /// Rule set described by the form. Always carries a device, like the
    /// form's select, and a time range only when the checkbox is ticked.
    ///
    /// Call after [`LinkForm::check`]; unparsable optional values are dropped.
    pub fn rules(&self) -> LinkRules {
        let time_range = if self.uses_time_range() {
            match (self.start_time.as_deref(), self.end_time.as_deref()) {
                (Some(start), Some(end)) => match (parse_hhmm(start), parse_hhmm(end)) {
                    (Ok(start), Ok(end)) => Some(TimeRange::new(start, end)),
                    _ => None,
                },
                _ => None,
            }
        } else {
            None
        };

        LinkRules {
            time_range,
            device: Some(self.device.unwrap_or(DeviceClass::All)),
            priority: self
                .priority
                .as_deref()
                .and_then(|p| p.trim().parse::<i32>().ok()),
        }
    }

    pub fn to_new_link(&self) -> NewLink {
        NewLink {
            title: self.title.trim().to_string(),
            url: self.url.trim().to_string(),
            enabled: self.is_enabled(),
            rules: Some(self.rules()),
        }
    }

    /// Patch replacing every editable field of the link.
    pub fn to_patch(&self) -> LinkPatch {
        LinkPatch {
            title: Some(self.title.trim().to_string()),
            url: Some(self.url.trim().to_string()),
            enabled: Some(self.is_enabled()),
            rules: Some(Some(self.rules())),
        }
    }
}

/// Body of `POST /dashboard/links/move`.
#[derive(Debug, Deserialize)]
pub struct MoveForm {
    pub from: usize,
    pub to: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse<T: serde::de::DeserializeOwned>(body: &str) -> T {
        serde_urlencoded::from_str(body).unwrap()
    }

    #[test]
    fn test_login_form_valid() {
        let form: LoginForm = parse("email=ada%40example.com&password=secret");

        assert!(form.check().is_ok());
        assert!(!form.is_signup());
    }

    #[test]
    fn test_login_form_errors() {
        let form: LoginForm = parse("email=nope&password=");

        let messages = form.check().unwrap_err();
        assert_eq!(
            messages,
            vec!["Enter a valid email address", "Password is required"]
        );
    }

    #[test]
    fn test_signup_requires_name() {
        let form: LoginForm = parse("email=ada%40example.com&password=secret&name=&mode=signup");

        assert!(form.is_signup());
        assert_eq!(form.check().unwrap_err(), vec!["Full name is required"]);
    }

    #[test]
    fn test_link_form_full() {
        let form: LinkForm = parse(
            "title=Shop&url=https%3A%2F%2Fexample.com%2Fshop&device=mobile&enabled=on\
             &use_time_range=on&start_time=22%3A00&end_time=02%3A00&priority=4",
        );

        assert!(form.check().is_ok());
        let link = form.to_new_link();
        let rules = link.rules.unwrap();
        assert!(link.enabled);
        assert_eq!(rules.device, Some(DeviceClass::Mobile));
        assert_eq!(rules.priority, Some(4));
        assert_eq!(rules.time_range.unwrap().to_string(), "22:00 - 02:00");
    }

    #[test]
    fn test_link_form_unchecked_boxes_and_empty_inputs() {
        let form: LinkForm = parse(
            "title=Blog&url=https%3A%2F%2Fexample.com&device=all&start_time=09%3A00&end_time=18%3A00&priority=",
        );

        assert!(form.check().is_ok());
        let link = form.to_new_link();
        let rules = link.rules.unwrap();
        assert!(!link.enabled);
        assert_eq!(rules.device, Some(DeviceClass::All));
        assert_eq!(rules.time_range, None);
        assert_eq!(rules.priority, None);
    }

    #[test]
    fn test_link_form_errors() {
        let form: LinkForm = parse(
            "title=+&url=example&use_time_range=on&start_time=25%3A00&priority=high",
        );

        let messages = form.check().unwrap_err();
        assert!(messages.contains(&"Title is required (up to 200 characters)".to_string()));
        assert!(messages.contains(&"URL must be a valid absolute URL".to_string()));
        assert!(messages.contains(&"Start time must be HH:MM".to_string()));
        assert!(messages.contains(&"Priority must be a whole number".to_string()));
        assert!(
            messages.contains(&"Start and end time are required for a time range".to_string())
        );
    }

    #[test]
    fn test_link_form_round_trips_existing_link() {
        let link = Link::new(
            "7".into(),
            "Talk".to_string(),
            "https://example.com/talk".to_string(),
            false,
            Some(LinkRules {
                time_range: Some(TimeRange::new(
                    parse_hhmm("08:30").unwrap(),
                    parse_hhmm("12:00").unwrap(),
                )),
                device: Some(DeviceClass::Desktop),
                priority: Some(0),
            }),
        );

        let form = LinkForm::from_link(&link);
        let mut edited = link.clone();
        edited.apply(form.to_patch());

        assert_eq!(form.start_time.as_deref(), Some("08:30"));
        assert_eq!(form.priority.as_deref(), Some("0"));
        assert_eq!(edited, link);
    }

    #[test]
    fn test_blank_form_defaults() {
        let form = LinkForm::blank();

        assert!(form.is_enabled());
        assert!(!form.uses_time_range());
        assert_eq!(form.device, Some(DeviceClass::All));
    }

    #[test]
    fn test_link_form_rejects_non_http_url() {
        let form: LinkForm = parse("title=Trap&url=javascript%3Aalert(1)&device=all&enabled=on");

        let messages = form.check().unwrap_err();
        assert!(messages.contains(&"URL must start with http:// or https://".to_string()));
    }
}
