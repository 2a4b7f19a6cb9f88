use std::io::IsTerminal;

use owo_colors::OwoColorize;
use terminal_size::{terminal_size, Width};

use crate::calculator::{CalculationResult, CREDIT_UNIT_PRICE};
use crate::sequestration::PredictionResult;

/// Currency symbol for cost figures. Display concern only; the engine deals
/// in bare currency units.
const CURRENCY_SYMBOL: &str = "₹";

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Get terminal width, defaulting to 80 for pipes
fn get_terminal_width() -> usize {
    terminal_size().map_or(80, |(Width(w), _)| w as usize)
}

/// Format an integer with thousands separators (9290 -> "9,290")
pub fn format_count(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Format a cost figure with the currency symbol and separators
pub fn format_cost(cost: f64) -> String {
    format!("{}{}", CURRENCY_SYMBOL, format_count(cost.round() as u64))
}

/// Wrap text to the given width on word boundaries, prefixing continuation
/// lines with `indent`
fn wrap_line(text: &str, width: usize, indent: &str) -> String {
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if !current.is_empty() && current.len() + 1 + word.len() > width {
            lines.push(current.clone());
            current.clear();
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
        .iter()
        .enumerate()
        .map(|(i, l)| {
            if i == 0 {
                l.clone()
            } else {
                format!("{}{}", indent, l)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format a full emission report: headline figures, per-category breakdown,
/// and reduction advisories.
pub fn format_report(result: &CalculationResult, use_colors: bool) -> String {
    let width = get_terminal_width();
    let mut out = String::new();

    let total = format!("{} tons CO2/year", format_count(result.total_emissions));
    let credits = format!(
        "{} credits (1 credit = 1 ton)",
        format_count(result.credits_needed)
    );
    let cost = format!(
        "{} at {} per credit",
        format_cost(result.estimated_cost),
        format_cost(CREDIT_UNIT_PRICE)
    );

    if use_colors {
        out.push_str(&format!("Total emissions:  {}\n", total.red().bold()));
        out.push_str(&format!("Credits needed:   {}\n", credits.cyan()));
        out.push_str(&format!("Estimated cost:   {}\n", cost.green()));
    } else {
        out.push_str(&format!("Total emissions:  {}\n", total));
        out.push_str(&format!("Credits needed:   {}\n", credits));
        out.push_str(&format!("Estimated cost:   {}\n", cost));
    }

    out.push_str("\nBreakdown (tons CO2/year, rounded per category):\n");
    let rows = [
        ("Transport", result.breakdown.transport),
        ("Manufacturing", result.breakdown.manufacturing),
        ("Operations", result.breakdown.operations),
        ("Logistics", result.breakdown.logistics),
    ];
    for (label, tons) in rows {
        out.push_str(&format!("  {:<14}{:>10}\n", label, format_count(tons)));
    }

    if !result.recommended_actions.is_empty() {
        out.push_str("\nRecommended actions:\n");
        for action in &result.recommended_actions {
            let line = wrap_line(action, width.saturating_sub(4), "    ");
            out.push_str(&format!("  - {}\n", line));
        }
    }

    out
}

/// Format a sequestration prediction
pub fn format_prediction(result: &PredictionResult, use_colors: bool) -> String {
    let co2 = format!("{} tons CO2/year", format_count(result.predicted_co2));
    let credits = format!("{} credits", format_count(result.credits_needed));

    if use_colors {
        format!(
            "Predicted sequestration:  {}\nCredits generated:        {}\nRecommended ecosystem:    {}\n",
            co2.green().bold(),
            credits.cyan(),
            result.recommended_ecosystem.bold()
        )
    } else {
        format!(
            "Predicted sequestration:  {}\nCredits generated:        {}\nRecommended ecosystem:    {}\n",
            co2, credits, result.recommended_ecosystem
        )
    }
}
