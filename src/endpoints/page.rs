use actix_web::{HttpRequest, HttpResponse, web, get};
use crate::appdata::AppData;
use crate::view::Region;
use super::Visit;

#[get("/")]
pub async fn index(data: web::Data<AppData>, req: HttpRequest) -> HttpResponse {
    Visit::of(&data, &req).render_page()
}

/// The current markup of a single region, for clients that only want to refresh one part.
#[get("/regions/{id}")]
pub async fn get_region(data: web::Data<AppData>, req: HttpRequest, id: web::Path<String>) -> HttpResponse {
    match Region::from_id(&id) {
        Some(region) => Visit::of(&data, &req).render_region(region),
        None => HttpResponse::NotFound().finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::endpoints::test_util::{app_data, visitor_cookie};
    use actix_web::{test, App};
    use actix_web::http::StatusCode;
    use httpmock::MockServer;

    #[actix_web::test]
    async fn index_shows_forms_and_empty_regions() {
        let server = MockServer::start_async().await;
        let app = test::init_service(App::new().app_data(app_data(&server)).service(index)).await;

        let response = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
        let cookie = visitor_cookie(&response);
        assert_eq!(cookie.value().len(), 32);
        assert_eq!(cookie.http_only(), Some(true));

        let body = String::from_utf8(test::read_body(response).await.to_vec()).unwrap();
        assert!(body.contains("action=\"/search/keyword\""));
        assert!(body.contains("action=\"/search/name\""));
        assert!(body.contains("action=\"/add\""));
        assert!(body.contains("<div id=\"kw_results\"></div>"));
    }

    #[actix_web::test]
    async fn returning_visitor_keeps_their_id() {
        let server = MockServer::start_async().await;
        let app = test::init_service(App::new().app_data(app_data(&server)).service(index)).await;

        let first = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
        let cookie = visitor_cookie(&first);

        let again = test::call_service(&app, test::TestRequest::get().uri("/").cookie(cookie.clone()).to_request()).await;
        assert_eq!(visitor_cookie(&again).value(), cookie.value());
    }

    #[actix_web::test]
    async fn unknown_region_is_not_found() {
        let server = MockServer::start_async().await;
        let app = test::init_service(App::new().app_data(app_data(&server)).service(get_region)).await;

        let response = test::call_service(&app, test::TestRequest::get().uri("/regions/nope").to_request()).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = test::call_service(&app, test::TestRequest::get().uri("/regions/add_result").to_request()).await;
        assert_eq!(response.status(), StatusCode::OK);
    }
}
