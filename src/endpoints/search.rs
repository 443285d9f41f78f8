use actix_web::{HttpRequest, HttpResponse, web, post};
use crate::appdata::AppData;
use crate::forms::{KeywordForm, NameForm};
use super::Visit;

#[post("/search/keyword")]
pub async fn search_keyword(data: web::Data<AppData>, req: HttpRequest, form: web::Form<KeywordForm>) -> HttpResponse {
    let visit = Visit::of(&data, &req);
    data.client.search_keyword(&visit.screen, &form).await;
    visit.render_page()
}

#[post("/search/name")]
pub async fn search_name(data: web::Data<AppData>, req: HttpRequest, form: web::Form<NameForm>) -> HttpResponse {
    let visit = Visit::of(&data, &req);
    data.client.search_name(&visit.screen, &form).await;
    visit.render_page()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::endpoints::page::{index, get_region};
    use crate::endpoints::test_util::{app_data, visitor_cookie};
    use actix_web::{test, App};
    use httpmock::prelude::*;
    use serde_json::json;

    async fn body_of(response: actix_web::dev::ServiceResponse) -> String {
        String::from_utf8(test::read_body(response).await.to_vec()).unwrap()
    }

    #[actix_web::test]
    async fn keyword_form_renders_cards_into_the_page() {
        let server = MockServer::start_async().await;
        server.mock_async(|when, then| {
            when.method(POST).path("/search/keyword").json_body(json!({"keyword": "lamp"}));
            then.status(200).json_body(json!({"results": [
                {"name": "Desk Lamp", "description": "Small", "category": "Lighting", "price": 19.99}
            ]}));
        }).await;

        let app = test::init_service(App::new()
            .app_data(app_data(&server))
            .service(search_keyword)
            .service(get_region)).await;

        let request = test::TestRequest::post()
            .uri("/search/keyword")
            .set_form(&[("kw", " lamp ")])
            .to_request();
        let response = test::call_service(&app, request).await;
        let cookie = visitor_cookie(&response);
        assert!(body_of(response).await.contains("<div class=\"result\"><b>Desk Lamp</b>"));

        let region = test::TestRequest::get().uri("/regions/kw_results").cookie(cookie).to_request();
        assert_eq!(
            body_of(test::call_service(&app, region).await).await,
            "<div class=\"result\"><b>Desk Lamp</b><div>Small</div><div><i>Lighting</i> — €19.99</div></div>"
        );
    }

    #[actix_web::test]
    async fn visitors_only_see_their_own_results() {
        let server = MockServer::start_async().await;
        server.mock_async(|when, then| {
            when.method(POST).path("/search/keyword").json_body(json!({"keyword": "lamp"}));
            then.status(200).json_body(json!({"results": [
                {"name": "Desk Lamp", "description": "Small", "category": "Lighting", "price": 19.99}
            ]}));
        }).await;
        server.mock_async(|when, then| {
            when.method(POST).path("/search/keyword").json_body(json!({"keyword": "chair"}));
            then.status(200).json_body(json!({"results": [
                {"name": "Office Chair", "description": "Black", "category": "Furniture", "price": 120}
            ]}));
        }).await;

        let app = test::init_service(App::new()
            .app_data(app_data(&server))
            .service(index)
            .service(search_keyword)).await;

        let alice = test::call_service(&app, test::TestRequest::post()
            .uri("/search/keyword")
            .set_form(&[("kw", "lamp")])
            .to_request()).await;
        let alice_cookie = visitor_cookie(&alice);

        let bob = test::call_service(&app, test::TestRequest::post()
            .uri("/search/keyword")
            .set_form(&[("kw", "chair")])
            .to_request()).await;
        let bob_cookie = visitor_cookie(&bob);
        assert_ne!(alice_cookie.value(), bob_cookie.value());

        let bob_page = body_of(bob).await;
        assert!(bob_page.contains("Office Chair"));
        assert!(!bob_page.contains("Desk Lamp"));

        let alice_page = body_of(test::call_service(&app, test::TestRequest::get()
            .uri("/")
            .cookie(alice_cookie)
            .to_request()).await).await;
        assert!(alice_page.contains("Desk Lamp"));
        assert!(!alice_page.contains("Office Chair"));

        let stranger_page = body_of(test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await).await;
        assert!(stranger_page.contains("<div id=\"kw_results\"></div>"));
    }

    #[actix_web::test]
    async fn name_form_shows_server_error() {
        let server = MockServer::start_async().await;
        server.mock_async(|when, then| {
            when.method(POST).path("/search/name");
            then.status(400).json_body(json!({"error": "missing name"}));
        }).await;

        let app = test::init_service(App::new().app_data(app_data(&server)).service(search_name)).await;

        let request = test::TestRequest::post()
            .uri("/search/name")
            .set_form(&[("name", "")])
            .to_request();
        let body = body_of(test::call_service(&app, request).await).await;
        assert!(body.contains("<div id=\"name_results\"><b>Error:</b> missing name</div>"));
    }

    #[actix_web::test]
    async fn missing_form_field_is_read_as_empty() {
        let server = MockServer::start_async().await;
        let mock = server.mock_async(|when, then| {
            when.method(POST).path("/search/keyword").json_body(json!({"keyword": ""}));
            then.status(200).json_body(json!({"results": []}));
        }).await;

        let app = test::init_service(App::new().app_data(app_data(&server)).service(search_keyword)).await;

        let request = test::TestRequest::post()
            .uri("/search/keyword")
            .set_form(&[("other", "x")])
            .to_request();
        let body = body_of(test::call_service(&app, request).await).await;

        mock.assert_async().await;
        assert!(body.contains("<div id=\"kw_results\"><i>No results</i></div>"));
    }
}
