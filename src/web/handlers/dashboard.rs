//! Dashboard page and its link actions.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Path, State},
    response::Redirect,
};

use crate::domain::entities::{DeviceClass, Link, LinkId};
use crate::error::AppError;
use crate::state::AppState;
use crate::web::forms::MoveForm;

/// One row of the dashboard link list.
pub struct LinkRow {
    pub index: usize,
    pub id: String,
    pub title: String,
    pub url: String,
    pub enabled: bool,
    /// `HH:MM - HH:MM`, empty without a time range.
    pub time_range: String,
    /// Device restriction, empty when shown on all devices.
    pub device: String,
    /// Priority, empty when unset.
    pub priority: String,
    pub is_first: bool,
    pub is_last: bool,
}

impl LinkRow {
    fn new(index: usize, count: usize, link: &Link) -> Self {
        Self {
            index,
            id: link.id.to_string(),
            title: link.title.clone(),
            url: link.url.clone(),
            enabled: link.enabled,
            time_range: link
                .time_range()
                .map(|r| r.to_string())
                .unwrap_or_default(),
            device: match link.device() {
                Some(DeviceClass::All) | None => String::new(),
                Some(device) => device.to_string(),
            },
            priority: link.priority().map(|p| p.to_string()).unwrap_or_default(),
            is_first: index == 0,
            is_last: index + 1 == count,
        }
    }

    pub fn up(&self) -> usize {
        self.index.saturating_sub(1)
    }

    pub fn down(&self) -> usize {
        self.index + 1
    }
}

/// Template for the dashboard page.
///
/// Renders `templates/dashboard.html` with the ordered link list. Rows can be
/// dragged (`static/dashboard.js` posts the move) or moved with buttons.
#[derive(Template, WebTemplate)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate {
    pub active: &'static str,
    pub rows: Vec<LinkRow>,
}

/// Renders the dashboard.
///
/// # Endpoint
///
/// `GET /dashboard`
pub async fn dashboard_handler(
    State(state): State<AppState>,
) -> Result<DashboardTemplate, AppError> {
    let links = state.link_service.list_links().await?;
    let count = links.len();

    Ok(DashboardTemplate {
        active: "dashboard",
        rows: links
            .iter()
            .enumerate()
            .map(|(index, link)| LinkRow::new(index, count, link))
            .collect(),
    })
}

/// `POST /dashboard/links/{id}/toggle`
pub async fn toggle_link_handler(
    Path(id): Path<LinkId>,
    State(state): State<AppState>,
) -> Result<Redirect, AppError> {
    state.link_service.toggle_link(&id).await?;
    Ok(Redirect::to("/dashboard"))
}

/// `POST /dashboard/links/{id}/delete`
pub async fn delete_link_handler(
    Path(id): Path<LinkId>,
    State(state): State<AppState>,
) -> Result<Redirect, AppError> {
    state.link_service.delete_link(&id).await?;
    Ok(Redirect::to("/dashboard"))
}

/// Moves a link from one position to another.
///
/// # Endpoint
///
/// `POST /dashboard/links/move` with form fields `from` and `to`
///
/// # Errors
///
/// Returns 400 Bad Request if either index is out of range.
pub async fn move_link_handler(
    State(state): State<AppState>,
    Form(form): Form<MoveForm>,
) -> Result<Redirect, AppError> {
    state.link_service.move_link(form.from, form.to).await?;
    Ok(Redirect::to("/dashboard"))
}
