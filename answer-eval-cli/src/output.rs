//! Output formatting for CLI

use anyhow::Result;
use clap::ValueEnum;
use colored::Colorize;
use comfy_table::{modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL, Cell, Color, Table};

use answer_eval_core::{EvaluationReport, ROUGE_L};

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq, Eq)]
pub enum OutputFormat {
    /// Table format (default)
    #[default]
    Table,
    /// JSON format
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Table => write!(f, "table"),
            Self::Json => write!(f, "json"),
        }
    }
}

pub struct OutputWriter {
    format: OutputFormat,
}

impl OutputWriter {
    pub fn new(format: OutputFormat, no_color: bool) -> Self {
        if no_color {
            colored::control::set_override(false);
        }
        Self { format }
    }

    /// Render a report; per-item rows are included when `items` is set.
    pub fn render(&self, report: &EvaluationReport, items: bool) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let json = if items {
                    serde_json::to_string_pretty(report)?
                } else {
                    serde_json::to_string_pretty(&report.scores)?
                };
                Ok(json)
            }
            OutputFormat::Table => {
                let mut rendered = scores_table(report).to_string();
                if items {
                    rendered.push('\n');
                    rendered.push_str(&items_table(report).to_string());
                    rendered.push_str(&format!(
                        "\n{} {} item(s)",
                        "Total:".bold(),
                        report.items.len().to_string().green()
                    ));
                }
                Ok(rendered)
            }
        }
    }

    pub fn write(&self, report: &EvaluationReport, items: bool) -> Result<()> {
        println!("{}", self.render(report, items)?);
        Ok(())
    }
}

fn new_table(headers: &[String]) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.apply_modifier(UTF8_ROUND_CORNERS);
    table.set_header(
        headers
            .iter()
            .map(|h| Cell::new(h).fg(Color::Cyan))
            .collect::<Vec<_>>(),
    );
    table
}

fn scores_table(report: &EvaluationReport) -> Table {
    let mut table = new_table(&["Metric".to_string(), "Score".to_string()]);
    for (name, score) in report.scores.iter() {
        table.add_row(vec![Cell::new(name), Cell::new(format_score(score))]);
    }
    table
}

fn items_table(report: &EvaluationReport) -> Table {
    let orders = report.items.first().map(|item| item.bleu.len()).unwrap_or(0);
    let mut headers = vec!["Id".to_string()];
    headers.extend((1..=orders).map(answer_eval_core::bleu_metric_name));
    headers.push(ROUGE_L.to_string());

    let mut table = new_table(&headers);
    for item in &report.items {
        let mut row = vec![Cell::new(&item.id)];
        row.extend(item.bleu.iter().map(|score| Cell::new(format_score(*score))));
        row.push(Cell::new(format_score(item.rouge_l)));
        table.add_row(row);
    }
    table
}

/// Fixed precision for ordinary values, scientific notation for floored ones.
pub fn format_score(score: f64) -> String {
    if score != 0.0 && score.abs() < 1e-4 {
        format!("{:.3e}", score)
    } else {
        format!("{:.4}", score)
    }
}
