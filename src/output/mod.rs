pub mod formatter;

pub use formatter::{
    format_cost, format_count, format_prediction, format_report, should_use_colors,
};
