pub mod formatter;

pub use formatter::{
    format_question, format_result_card, format_signups_table, format_tally, format_types_table,
    should_use_colors,
};
