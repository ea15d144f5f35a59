use shared::BookingContext;

use crate::config::ContactFormConfig;

/// One label/value line of the read-only booking summary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryRow {
    pub label: &'static str,
    pub value: String,
    /// Rendered with the price accent
    pub emphasized: bool,
}

/// Read-only recap of the session being booked
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingSummary {
    pub title: &'static str,
    pub rows: Vec<SummaryRow>,
}

impl BookingSummary {
    pub fn from_context(context: &BookingContext, config: &ContactFormConfig) -> Self {
        let row = |label, value: &str| SummaryRow {
            label,
            value: value.to_string(),
            emphasized: false,
        };

        let rows = vec![
            row("Tutor:", &context.tutor_name),
            row("Subject:", &context.subject_name),
            row("Date:", &context.date),
            row("Time:", &context.time),
            row("Duration:", &config.session_duration_label),
            SummaryRow {
                label: "Price:",
                value: format!("{} {}", config.currency_code, context.price),
                emphasized: true,
            },
        ];

        Self {
            title: "Booking Summary",
            rows,
        }
    }

    /// Value of the row with the given label, if any
    #[cfg(test)]
    pub fn value_of(&self, label: &str) -> Option<&str> {
        self.rows
            .iter()
            .find(|row| row.label == label)
            .map(|row| row.value.as_str())
    }
}
