pub mod html;
pub mod text;


pub use html::{PageExtractor, ParsedPage};
pub use text::{ProjectTitle, clean_text, create_slug, parse_project_title, split_sentences};
