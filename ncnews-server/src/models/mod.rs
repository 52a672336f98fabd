//! Domain inputs with validation at construction
//!
//! Everything a client sends is parsed into one of these types before a
//! repository sees it. Invalid input returns ValidationError, not panic.

pub mod article_query;
pub mod comment;
pub mod validation;

pub use article_query::{ArticleListParams, ArticleQuery, SortColumn, SortOrder};
pub use comment::NewComment;
pub use validation::ValidationError;
