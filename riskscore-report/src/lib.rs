pub mod page;
pub mod summary;

pub use page::render_page;
pub use summary::{render_summary, REPORT_CONTENT_TYPE, REPORT_FILE_NAME};
