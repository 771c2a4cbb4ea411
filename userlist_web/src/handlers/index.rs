use crate::error::WebError;
use crate::handlers::utilities::{get_template_name, redirect_to_index};
use crate::templates::index::{LoadErrorTemplate, PageLinkDisplay, UsersTemplate};
use crate::utils::AppState;
use crate::viewer::UsersView;
use actix_session::Session;
use actix_web::{HttpRequest, HttpResponse, get, web};
use log::info;
use userlist_core::{Navigation, pagination_links};
use userlist_source::{HttpUserSource, UserSource};
use uuid::Uuid;

const VIEWER_KEY: &str = "viewer_id";

#[get("/")]
pub async fn index(
    request: HttpRequest,
    session: Session,
    source: web::Data<HttpUserSource>,
    state: web::Data<AppState>,
) -> Result<HttpResponse, WebError> {
    if let Some(previous) = session.get::<Uuid>(VIEWER_KEY)? {
        state.viewers.close(&previous).await;
    }

    let loaded = source.load_users().await;
    if !loaded.is_success() {
        session.remove(VIEWER_KEY);
        let env = state.jinja.acquire_env()?;
        let template = env.get_template("index/load_error.html")?;
        let body = template.render(LoadErrorTemplate {
            theme: &state.theme,
            status_code: loaded.status_code,
        })?;
        return Ok(HttpResponse::Ok().content_type("text/html").body(body));
    }

    let (viewer_id, view) = state.viewers.open(loaded.users).await;
    session.insert(VIEWER_KEY, viewer_id)?;
    info!(
        "viewer {viewer_id} loaded {} pages of users; {} viewers active",
        view.state.total_pages,
        state.viewers.len().await
    );
    render_users(&request, &state, view)
}

#[get("/page/first")]
pub async fn first_page(
    request: HttpRequest,
    session: Session,
    state: web::Data<AppState>,
) -> Result<HttpResponse, WebError> {
    navigate(&request, &session, &state, Navigation::First).await
}

#[get("/page/last")]
pub async fn last_page(
    request: HttpRequest,
    session: Session,
    state: web::Data<AppState>,
) -> Result<HttpResponse, WebError> {
    navigate(&request, &session, &state, Navigation::Last).await
}

#[get("/page/{page}")]
pub async fn go_to_page(
    request: HttpRequest,
    session: Session,
    state: web::Data<AppState>,
    path: web::Path<(usize,)>,
) -> Result<HttpResponse, WebError> {
    navigate(&request, &session, &state, Navigation::Page(path.0)).await
}

async fn navigate(
    request: &HttpRequest,
    session: &Session,
    state: &AppState,
    navigation: Navigation,
) -> Result<HttpResponse, WebError> {
    let Some(viewer_id) = session.get::<Uuid>(VIEWER_KEY)? else {
        return Ok(redirect_to_index(request));
    };
    match state.viewers.view(&viewer_id, Some(navigation)).await {
        Some(view) => render_users(request, state, view),
        None => {
            session.remove(VIEWER_KEY);
            Ok(redirect_to_index(request))
        }
    }
}

fn render_users(
    request: &HttpRequest,
    state: &AppState,
    view: UsersView,
) -> Result<HttpResponse, WebError> {
    let links = pagination_links(&state.pagination, view.state)
        .into_iter()
        .map(PageLinkDisplay::from)
        .collect();

    let template_name = get_template_name(request, "index");
    let env = state.jinja.acquire_env()?;
    let template = env.get_template(&template_name)?;
    let body = template.render(UsersTemplate {
        theme: &state.theme,
        users: &view.users,
        page_info: view.state.into(),
        links,
    })?;

    Ok(HttpResponse::Ok().content_type("text/html").body(body))
}
