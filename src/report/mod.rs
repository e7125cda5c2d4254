pub mod panels;
pub mod storage;
pub mod text;

pub use panels::{
    progress_forecast, render_back, render_breakdown, render_front, render_info, render_report,
};
pub use storage::{report_contents, report_file_name, save_report};
pub use text::{capitalize, center_text, sanitize_file_stem, wrap_text};
