//! `sheetview_view` v1:
//! Selection guard, two-key filter and text markup over a loaded dataset.
//!
//! Modules:
//! - `conf`   : markup tokens and messages
//! - `spec`   : selection/view-state models
//! - `format` : text-to-markup transform
//! - `filter` : guarded two-key filter
//! - `page`   : view assembly and page layout
//! - `error`  : view errors
pub mod conf;
pub mod error;
pub mod filter;
pub mod format;
pub mod page;
pub mod spec;

pub use conf::{C_MSG_LOAD_ERROR_PREFIX, C_MSG_NO_DATA, C_MSG_SELECT_BOTH, C_TITLE_PAGE};
pub use error::ViewError;
pub use filter::{SpecFilteredView, filter_dataset};
pub use format::{format_text, render_record};
pub use page::{SheetViewer, build_view, render_page_markdown};
pub use spec::{EnumViewState, SpecRenderedRecord, SpecSelection};
