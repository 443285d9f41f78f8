pub mod page;
pub mod search;
pub mod add;

use std::sync::Arc;
use actix_web::{HttpRequest, HttpResponse};
use actix_web::cookie::{Cookie, SameSite};
use askama::Template;
use tracing::error;
use crate::appdata::AppData;
use crate::render::Page;
use crate::view::{Region, Screen};

pub const VISITOR_COOKIE: &str = "catalogr_visitor";

/// The visitor behind a request and the screen that belongs to them.
pub struct Visit {
    pub id:         String,
    pub screen:     Arc<Screen>
}

impl Visit {
    pub fn of(data: &AppData, req: &HttpRequest) -> Self {
        let cookie = req.cookie(VISITOR_COOKIE);
        let (id, screen) = data.sessions.visit(cookie.as_ref().map(|c| c.value()));
        Self { id, screen }
    }

    fn cookie(&self) -> Cookie<'static> {
        Cookie::build(VISITOR_COOKIE, self.id.clone())
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax)
            .finish()
    }

    /// Renders the whole page from the visitor's regions.
    pub fn render_page(&self) -> HttpResponse {
        let kw_results = self.screen.get(Region::KeywordResults);
        let name_results = self.screen.get(Region::NameResults);
        let add_result = self.screen.get(Region::AddResult);

        let page = Page {
            kw_results: &kw_results,
            name_results: &name_results,
            add_result: &add_result
        };

        match page.render() {
            Ok(body) => HttpResponse::Ok()
                .cookie(self.cookie())
                .content_type("text/html; charset=utf-8")
                .body(body),
            Err(err) => {
                error!("Unable to render page: {:?}", err);
                HttpResponse::InternalServerError().finish()
            }
        }
    }

    pub fn render_region(&self, region: Region) -> HttpResponse {
        HttpResponse::Ok()
            .cookie(self.cookie())
            .content_type("text/html; charset=utf-8")
            .body(self.screen.get(region))
    }
}
