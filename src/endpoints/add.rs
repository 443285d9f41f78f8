use actix_web::{HttpRequest, HttpResponse, web, post};
use crate::appdata::AppData;
use crate::forms::AddForm;
use super::Visit;

#[post("/add")]
pub async fn add_product(data: web::Data<AppData>, req: HttpRequest, form: web::Form<AddForm>) -> HttpResponse {
    let visit = Visit::of(&data, &req);
    data.client.add_product(&visit.screen, &form).await;
    visit.render_page()
}
