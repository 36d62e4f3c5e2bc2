use crate::reporter::{Reporter, VerdictReport};
use crate::types::{FinalVerdict, ProcessedProvider, ProviderStatus};
use colored::Colorize;

pub struct TerminalReporter {
    verbose: bool,
}

impl TerminalReporter {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    fn verdict_color(&self, verdict: &FinalVerdict) -> colored::ColoredString {
        let label = verdict.to_string();
        match verdict {
            FinalVerdict::Malicious => label.red().bold(),
            FinalVerdict::Suspicious => label.yellow().bold(),
            FinalVerdict::Benign => label.green().bold(),
            FinalVerdict::Unknown => label.dimmed(),
        }
    }

    fn status_color(&self, status: &ProviderStatus) -> colored::ColoredString {
        let label = format!("{:8}", status.as_str());
        match status {
            ProviderStatus::Success => label.green(),
            ProviderStatus::Timeout => label.yellow(),
            ProviderStatus::Error => label.red(),
        }
    }

    /// Visual bar for a 0-100 score (10 chars wide)
    fn score_bar(&self, score: u8) -> String {
        let filled = ((f32::from(score) / 100.0) * 10.0).round() as usize;
        let filled = filled.min(10);
        format!("{}{}", "█".repeat(filled), "░".repeat(10 - filled))
    }

    fn format_provider_row(&self, provider: &ProcessedProvider) -> String {
        let dash = || "-".to_string();
        format!(
            "  {:20} {} {:11} {:7} {:7} {:>6} {:>7}\n",
            provider.provider,
            self.status_color(&provider.status),
            provider.verdict.map(|v| v.to_string()).unwrap_or_else(dash),
            provider.confidence.map(|c| c.to_string()).unwrap_or_else(dash),
            provider.trust_level.map(|t| t.to_string()).unwrap_or_else(dash),
            provider
                .normalized_score
                .map(|s| format!("{:.0}", s))
                .unwrap_or_else(dash),
            provider
                .effective_weight
                .map(|w| format!("{:.3}", w))
                .unwrap_or_else(dash),
        )
    }

    fn format_providers(&self, providers: &[ProcessedProvider]) -> String {
        let mut output = String::new();
        output.push_str(&format!(
            "{}\n",
            format!(
                "  {:20} {:8} {:11} {:7} {:7} {:>6} {:>7}",
                "PROVIDER", "STATUS", "VERDICT", "CONF", "TRUST", "SCORE", "WEIGHT"
            )
            .bold()
        ));
        for provider in providers {
            output.push_str(&self.format_provider_row(provider));
        }
        output
    }
}

impl Reporter for TerminalReporter {
    fn report(&self, report: &VerdictReport) -> String {
        let result = &report.result;
        let meta = &result.meta;
        let mut output = String::new();

        output.push_str(&format!(
            "{}\n\n",
            format!("threat-verdict v{}", env!("CARGO_PKG_VERSION")).bold()
        ));
        if let Some(indicator) = &report.indicator {
            output.push_str(&format!("Indicator: {}\n\n", indicator));
        }

        let verdict = self.verdict_color(&result.verdict);
        match result.final_score {
            Some(score) => output.push_str(&format!(
                "{}\n",
                format!("━━━ VERDICT: {} ({}/100) ━━━", verdict, score).bold()
            )),
            None => output.push_str(&format!(
                "{}\n",
                format!("━━━ VERDICT: {} (no score) ━━━", verdict).bold()
            )),
        }
        if let Some(score) = result.final_score {
            output.push_str(&format!("  {}\n", self.score_bar(score).dimmed()));
        }
        output.push('\n');

        if meta.has_conflicting_signals {
            output.push_str(&format!(
                "{}\n",
                "! Conflicting signals: providers disagree between high and low threat".yellow()
            ));
        }
        if meta.single_provider_mode {
            output.push_str(&format!(
                "{}\n",
                "! Single provider: the score rests on one source".cyan()
            ));
        }
        if !result.has_signal() {
            output.push_str(&format!(
                "{}\n",
                "No usable signal from any provider".dimmed()
            ));
        }

        if self.verbose && !result.processed_providers.is_empty() {
            output.push('\n');
            output.push_str(&self.format_providers(&result.processed_providers));
        }

        output.push_str(&format!("{}\n", "━".repeat(50)));
        output.push_str(&format!(
            "Providers: {} total, {} succeeded, {} failed, {} timed out\n",
            meta.total_providers,
            meta.successful_providers.to_string().green(),
            meta.failed_providers.to_string().red(),
            meta.timed_out_providers.to_string().yellow()
        ));

        output
    }
}
