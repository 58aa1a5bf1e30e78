mod messages;
mod number;
mod presentation;
mod text;

#[cfg(test)]
mod tests;

pub use messages::{advice_message, category_description, category_label, MessageKey};
pub use number::{format_amount, format_dna, format_percent, NumberStyle, PLACEHOLDER};
pub use presentation::{
    advice_color, explorer_link, session_stat, tier_color, Gauge, Headline, ReportPresentation,
    TableRow, MIN_GAUGE_VALUE,
};
pub use text::render_text;
