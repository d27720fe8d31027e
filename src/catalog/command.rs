pub mod list_books_cmd;
pub mod render_index_cmd;
