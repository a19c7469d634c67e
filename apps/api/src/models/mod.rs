pub mod idea;
pub mod style;

pub use idea::{GeneratedArticle, Idea};
pub use style::Style;
