use askama::Template;
use crate::models::{SearchResponse, SearchResult, AddResponse, truthy_error, display_value};
use crate::error::{Error, Result};

pub const SEARCHING: &str = "Searching...";
pub const ADDING: &str = "Adding...";
pub const NO_RESULTS: &str = "<i>No results</i>";

const REQUEST_FAILED: &str = "request failed";

/// One result with every field already turned into display text.
struct Card {
    name:           String,
    description:    String,
    category:       String,
    price:          String
}

impl From<&SearchResult> for Card {
    fn from(result: &SearchResult) -> Self {
        Self {
            name: display_value(result.name.as_ref()),
            description: display_value(result.description.as_ref()),
            category: display_value(result.category.as_ref()),
            price: display_value(result.price.as_ref())
        }
    }
}

#[derive(Template)]
#[template(source = r#"{% for card in cards %}<div class="result"><b>{{ card.name }}</b><div>{{ card.description }}</div><div><i>{{ card.category }}</i> — {{ currency }}{{ card.price }}</div></div>{% endfor %}"#, ext = "html")]
struct ResultCards<'a> {
    cards:      Vec<Card>,
    currency:   &'a str
}

#[derive(Template)]
#[template(source = "<b>Error:</b> {{ message }}", ext = "html")]
struct ErrorMessage<'a> {
    message:    &'a str
}

#[derive(Template)]
#[template(source = "<b>Added product id:</b> {{ id }}", ext = "html")]
struct AddedMessage {
    id:         String
}

/// The full page; regions hold markup that has already been rendered and escaped.
#[derive(Template)]
#[template(path = "index.html")]
pub struct Page<'a> {
    pub kw_results:     &'a str,
    pub name_results:   &'a str,
    pub add_result:     &'a str
}

/**
Renders a search response: an error, the empty state, or one card per result in response order.
*/
pub fn search_response(response: &SearchResponse, currency: &str) -> Result<String> {
    if let Some(message) = truthy_error(&response.error) {
        return error_message(&message);
    }

    match response.results.as_deref() {
        None | Some([]) => Ok(NO_RESULTS.to_string()),
        Some(results) => {
            let cards = results.iter().map(Card::from).collect();
            Ok(ResultCards { cards, currency }.render()?)
        }
    }
}

/// Fails with [`Error::MissingId`] when the server reports neither an error nor an id.
pub fn add_response(response: &AddResponse) -> Result<String> {
    if let Some(message) = truthy_error(&response.error) {
        return error_message(&message);
    }

    let id = response.id.as_ref().ok_or(Error::MissingId)?;
    Ok(AddedMessage { id: display_value(Some(id)) }.render()?)
}

pub fn error_message(message: &str) -> Result<String> {
    Ok(ErrorMessage { message }.render()?)
}

/// Shown in place of a placeholder when the exchange itself failed.
pub fn request_failed() -> String {
    format!("<b>Error:</b> {}", REQUEST_FAILED)
}

#[cfg(test)]
pub(crate) fn text_content(markup: &str) -> String {
    let mut text = String::new();
    let mut in_tag = false;
    for c in markup.chars() {
        match c {
            '<' => in_tag = true,
            '>' => in_tag = false,
            c if !in_tag => text.push(c),
            _ => {}
        }
    }
    text
}
