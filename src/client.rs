//! The three user operations: read the form, show a placeholder, ask the catalog
//! server, render its answer into the region the operation owns.

use tracing::{debug, info, warn};
use crate::apis::catalog::CatalogApi;
use crate::appdata::Config;
use crate::error::Result;
use crate::forms::{KeywordForm, NameForm, AddForm};
use crate::render;
use crate::view::{Region, Screen, Ticket};

pub struct CatalogClient {
    api:        CatalogApi,
    currency:   String
}

impl CatalogClient {
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Self {
            api: CatalogApi::new(config)?,
            currency: config.currency_symbol.clone()
        })
    }

    /// Returns whether the answer reached the screen; a newer search on the same screen discards it.
    pub async fn search_keyword(&self, screen: &Screen, form: &KeywordForm) -> bool {
        let keyword = form.keyword();
        let ticket = screen.begin(Region::KeywordResults, render::SEARCHING);
        info!(keyword, "Searching by keyword");

        let rendered = self.api.search_keyword(keyword).await
            .and_then(|response| render::search_response(&response, &self.currency));
        finish(screen, ticket, rendered)
    }

    pub async fn search_name(&self, screen: &Screen, form: &NameForm) -> bool {
        let query = form.name();
        let ticket = screen.begin(Region::NameResults, render::SEARCHING);
        info!(query, "Searching by name");

        let rendered = self.api.search_name(query).await
            .and_then(|response| render::search_response(&response, &self.currency));
        finish(screen, ticket, rendered)
    }

    pub async fn add_product(&self, screen: &Screen, form: &AddForm) -> bool {
        let product = form.to_request();
        let ticket = screen.begin(Region::AddResult, render::ADDING);
        info!(product = %product.name, price = product.price, "Adding product");

        let rendered = self.api.add_product(&product).await
            .and_then(|response| render::add_response(&response));
        finish(screen, ticket, rendered)
    }
}

/// Replaces the placeholder with the rendered answer, or with the generic failure message.
fn finish(screen: &Screen, ticket: Ticket, rendered: Result<String>) -> bool {
    let region = ticket.region().id();
    let markup = match rendered {
        Ok(markup) => markup,
        Err(err) => {
            warn!(region, "Catalog request failed: {}", err);
            render::request_failed()
        }
    };

    let applied = screen.apply(ticket, markup);
    if applied {
        debug!(region, "Rendered response");
    }
    applied
}
