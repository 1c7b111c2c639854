use anyhow::Result;
use cadence_core::RunStatistics;
use serde::Serialize;

#[derive(Debug, Serialize, PartialEq)]
struct SummaryOutput {
    completed_cycles: u32,
    total_work_minutes: f64,
    total_break_minutes: f64,
}

impl SummaryOutput {
    fn from_statistics(statistics: &RunStatistics) -> Self {
        Self {
            completed_cycles: statistics.completed_cycles,
            total_work_minutes: round_to_hundredths(statistics.work_minutes()),
            total_break_minutes: round_to_hundredths(statistics.break_minutes()),
        }
    }
}

pub fn print(statistics: &RunStatistics, json: bool) -> Result<()> {
    if json {
        println!("{}", render_json(statistics)?);
    } else {
        println!("{}", render_text(statistics));
    }
    Ok(())
}

fn render_json(statistics: &RunStatistics) -> Result<String> {
    Ok(serde_json::to_string_pretty(&SummaryOutput::from_statistics(
        statistics,
    ))?)
}

fn render_text(statistics: &RunStatistics) -> String {
    format!(
        "Session summary\n   Work cycles completed: {}\n   Total work time: {:.2} min\n   Total break time: {:.2} min",
        statistics.completed_cycles,
        statistics.work_minutes(),
        statistics.break_minutes()
    )
}

fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
