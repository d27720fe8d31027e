use std::path::Path;
use crate::books::dto::BookDto;
use crate::core::library::{ShopError, ShopResult};

pub const BOOKS_PLACEHOLDER: &str = "{{books}}";

// Reads the page template from disk on every call so edits show up without a restart.
pub async fn load_template(path: &Path) -> ShopResult<String> {
    tokio::fs::read_to_string(path).await.map_err(|err| {
        ShopError::runtime(format!("open {}: {}", path.display(), err).as_str(), None)
    })
}

pub fn render_index(template: &str, books: &[BookDto]) -> String {
    let cards: Vec<String> = books.iter().map(render_book_card).collect();
    template.replace(BOOKS_PLACEHOLDER, cards.join("\n").as_str())
}

fn render_book_card(book: &BookDto) -> String {
    format!(
        r#"<div class="book-card" data-category="{category}">
  <img src="{image}" alt="{title}">
  <h3>{title}</h3>
  <p class="author">{author}</p>
  <p class="price">${price:.2}</p>
  <button class="add-to-cart" data-id="{id}">Add to Cart</button>
</div>"#,
        id = book.id,
        category = escape_html(book.category.as_str()),
        image = escape_html(book.image.as_str()),
        title = escape_html(book.title.as_str()),
        author = escape_html(book.author.as_str()),
        price = book.price,
    )
}

pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&#34;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
