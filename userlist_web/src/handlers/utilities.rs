use actix_web::HttpRequest;
use actix_web::HttpResponse;
use actix_web::http::header::LOCATION;

pub fn is_htmx(request: &HttpRequest) -> bool {
    request
        .headers()
        .get("HX-Request")
        .is_some_and(|v| v == "true")
}

pub fn get_template_name(request: &HttpRequest, path: &str) -> String {
    if is_htmx(request) {
        format!("{path}/content.html")
    } else {
        format!("{path}/page.html")
    }
}

/// Sends the client back to `/`, which loads the user list again.
///
/// htmx requests get an `HX-Redirect` so the whole page is replaced instead of the fragment.
pub fn redirect_to_index(request: &HttpRequest) -> HttpResponse {
    if is_htmx(request) {
        HttpResponse::Ok().insert_header(("HX-Redirect", "/")).finish()
    } else {
        HttpResponse::SeeOther()
            .insert_header((LOCATION, "/"))
            .finish()
    }
}
