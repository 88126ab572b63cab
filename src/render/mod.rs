mod escape;
mod index_page;
mod quiz_page;
pub mod script;

pub use escape::{escape, escape_value, format, format_value};
pub use index_page::{page_name, render_index_page};
pub use quiz_page::render_quiz_page;
