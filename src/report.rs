//! Plain-text rendering of generated paths for the command line.

use tabled::{Table, Tabled, settings::Style};

use crate::analysis::{MarketSentiment, PathSummary, PriceChange, ProbabilityLabel, SeriesSampler, volume_bar_fraction};
use crate::config::Timeframe;
use crate::domain::{Outcome, PricePath};
use crate::error::PathResult;
use crate::utils::{
    PLACEHOLDER, format_axis_time, format_duration, format_compact_volume, format_currency, format_percent,
    format_percent_change, format_price, format_time_remaining,
};

#[derive(Tabled)]
struct PointRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "Time")]
    time: String,
    #[tabled(rename = "YES")]
    yes: String,
    #[tabled(rename = "NO")]
    no: String,
    #[tabled(rename = "Volume")]
    volume: String,
    #[tabled(rename = "Reading")]
    reading: String,
}

pub struct PathReporter {
    buffer: Vec<String>,
}

impl Default for PathReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl PathReporter {
    pub fn new() -> Self {
        Self { buffer: Vec::new() }
    }

    pub fn add_table(&mut self, path: &PricePath, timeframe: Timeframe) {
        let rows = path.iter().enumerate().map(|(index, p)| PointRow {
            index,
            time: format_axis_time(p.timestamp_ms(), timeframe),
            yes: format_price(p.yes_price()),
            no: format_price(p.no_price()),
            volume: format_currency(p.volume()),
            reading: ProbabilityLabel::from_price(p.yes_price()).to_string(),
        });
        let mut table = Table::new(rows);
        table.with(Style::rounded());
        self.buffer.push(table.to_string());
    }

    /// One line per window: last price, latest move, spread, total volume and
    /// the sentiment of the window's average YES price.
    pub fn add_summary(&mut self, path: &PricePath, timeframe: Timeframe) {
        let Some(summary) = PathSummary::from_path(path) else {
            self.buffer.push(format!("{:>4}: {}", timeframe.to_string(), PLACEHOLDER));
            return;
        };
        let change = PriceChange::latest(path)
            .map(|c| format_percent_change(c.percent))
            .unwrap_or_else(|| PLACEHOLDER.to_string());
        let yes: Vec<f64> = path.prices(Outcome::Yes).collect();
        let sentiment = MarketSentiment::from_yes_prices(&yes)
            .map(|s| format!("{} ({})", s.level, s.trend))
            .unwrap_or_else(|| PLACEHOLDER.to_string());

        self.buffer.push(format!(
            "{:>4}: {} pts over {} | YES {} ({}) | mean {} ± {} | range {}-{} | vol {} | {}",
            timeframe.to_string(),
            path.len(),
            format_duration(timeframe.span()),
            format_price(summary.last.yes_price()),
            change,
            format_percent(summary.mean),
            format_percent(summary.std_dev),
            format_price(summary.min),
            format_price(summary.max),
            format_compact_volume(summary.total_volume),
            sentiment
        ));
    }

    /// The point a cursor at `fraction` would highlight.
    pub fn add_hover(&mut self, path: &PricePath, timeframe: Timeframe, fraction: f64) -> PathResult<()> {
        let idx = SeriesSampler::nearest_index(path, fraction)?;
        let p = &path[idx];
        self.buffer.push(format!(
            "Hover {:.2} -> #{} {} | {} {} | {} {} | volume {} (bar {})",
            fraction,
            idx,
            format_axis_time(p.timestamp_ms(), timeframe),
            Outcome::Yes,
            format_price(p.yes_price()),
            Outcome::No,
            format_price(p.no_price()),
            format_currency(p.volume()),
            format_percent(volume_bar_fraction(p.volume()))
        ));
        Ok(())
    }

    pub fn add_countdown(&mut self, now_ms: i64, closes_ms: i64) {
        self.buffer.push(format!("Closes in: {}", format_time_remaining(now_ms, closes_ms)));
    }

    pub fn render(&self) -> String {
        self.buffer.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PathConfig;
    use crate::generator::PathGenerator;

    fn day() -> PricePath {
        PathGenerator::default()
            .generate(&PathConfig::for_timeframe(7, Timeframe::H24, 0.5))
            .unwrap()
    }

    #[test]
    fn table_lists_every_point() {
        let mut r = PathReporter::new();
        r.add_table(&day(), Timeframe::H24);
        let out = r.render();
        assert!(out.contains("YES"));
        assert!(out.contains("$0.500"));
        // header + 25 rows, each on its own line
        assert!(out.lines().filter(|l| l.contains('$')).count() >= 25);
    }

    #[test]
    fn summary_and_hover_lines() {
        let path = day();
        let mut r = PathReporter::new();
        r.add_summary(&path, Timeframe::H24);
        r.add_hover(&path, Timeframe::H24, 0.0).unwrap();
        let out = r.render();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with(" 24h: 25 pts over 1d | YES $0."));
        assert!(lines[1].starts_with("Hover 0.00 -> #0"));
        assert!(r.add_hover(&path, Timeframe::H24, 2.0).is_err());
    }

    #[test]
    fn countdown_line() {
        let mut r = PathReporter::new();
        r.add_countdown(0, 3 * crate::utils::MS_IN_D);
        r.add_countdown(10, 5);
        assert_eq!(r.render(), "Closes in: 3 days\nCloses in: Ended");
    }
}
