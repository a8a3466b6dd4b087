//! Add and edit link form handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};

use crate::domain::entities::{DeviceClass, LinkId};
use crate::error::AppError;
use crate::state::AppState;
use crate::web::forms::{DEFAULT_END_TIME, DEFAULT_START_TIME, LinkForm};

/// One `<option>` of the device select.
pub struct DeviceOption {
    pub value: &'static str,
    pub label: &'static str,
    pub selected: bool,
}

/// Template for the add/edit link page.
#[derive(Template, WebTemplate)]
#[template(path = "link_form.html")]
pub struct LinkFormTemplate {
    pub active: &'static str,
    pub heading: &'static str,
    pub submit_label: &'static str,
    pub action: String,
    pub title: String,
    pub url: String,
    pub enabled: bool,
    pub use_time_range: bool,
    pub start_time: String,
    pub end_time: String,
    pub priority: String,
    pub device_options: Vec<DeviceOption>,
    pub errors: Vec<String>,
}

impl LinkFormTemplate {
    fn new(editing: Option<&LinkId>, form: LinkForm, errors: Vec<String>) -> Self {
        let (heading, submit_label, action) = match editing {
            Some(id) => ("Edit Link", "Update", format!("/dashboard/links/{id}")),
            None => ("Add New Link", "Add Link", "/dashboard/links".to_string()),
        };
        let device = form.device.unwrap_or(DeviceClass::All);

        Self {
            active: "dashboard",
            heading,
            submit_label,
            action,
            enabled: form.is_enabled(),
            use_time_range: form.uses_time_range(),
            start_time: form
                .start_time
                .unwrap_or_else(|| DEFAULT_START_TIME.to_string()),
            end_time: form.end_time.unwrap_or_else(|| DEFAULT_END_TIME.to_string()),
            priority: form.priority.unwrap_or_default(),
            device_options: DeviceClass::options()
                .into_iter()
                .map(|d| DeviceOption {
                    value: d.as_str(),
                    label: d.label(),
                    selected: d == device,
                })
                .collect(),
            title: form.title,
            url: form.url,
            errors,
        }
    }

    fn invalid(editing: Option<&LinkId>, form: LinkForm, errors: Vec<String>) -> Response {
        (
            StatusCode::UNPROCESSABLE_ENTITY,
            Self::new(editing, form, errors),
        )
            .into_response()
    }
}

/// `GET /dashboard/links/new`
pub async fn new_link_handler() -> LinkFormTemplate {
    LinkFormTemplate::new(None, LinkForm::blank(), Vec::new())
}

/// Creates a link from the form and returns to the dashboard.
///
/// # Endpoint
///
/// `POST /dashboard/links`
///
/// # Errors
///
/// Re-renders the form with `422 Unprocessable Entity` if validation fails.
pub async fn create_link_handler(
    State(state): State<AppState>,
    Form(form): Form<LinkForm>,
) -> Result<Response, AppError> {
    if let Err(errors) = form.check() {
        return Ok(LinkFormTemplate::invalid(None, form, errors));
    }

    state.link_service.add_link(form.to_new_link()).await?;

    Ok(Redirect::to("/dashboard").into_response())
}

/// `GET /dashboard/links/{id}/edit`
///
/// # Errors
///
/// Returns 404 Not Found if no link has this id.
pub async fn edit_link_handler(
    Path(id): Path<LinkId>,
    State(state): State<AppState>,
) -> Result<LinkFormTemplate, AppError> {
    let link = state.link_service.get_link(&id).await?;
    Ok(LinkFormTemplate::new(
        Some(&id),
        LinkForm::from_link(&link),
        Vec::new(),
    ))
}

/// Saves the edit form and returns to the dashboard.
///
/// # Endpoint
///
/// `POST /dashboard/links/{id}`
///
/// # Errors
///
/// Re-renders the form with `422 Unprocessable Entity` if validation fails.
/// Returns 404 Not Found if no link has this id.
pub async fn update_link_handler(
    Path(id): Path<LinkId>,
    State(state): State<AppState>,
    Form(form): Form<LinkForm>,
) -> Result<Response, AppError> {
    if let Err(errors) = form.check() {
        return Ok(LinkFormTemplate::invalid(Some(&id), form, errors));
    }

    state.link_service.update_link(&id, form.to_patch()).await?;

    Ok(Redirect::to("/dashboard").into_response())
}
