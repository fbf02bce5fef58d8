// Coloured terminal rendering of the derived view models

mod widgets;

pub use widgets::{
    render_analysis, render_comparison, render_day, render_progress, render_scans,
    render_suggestion,
};
