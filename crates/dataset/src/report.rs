//! Build summary storage and reporting

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::runner::{BatchOutput, GameFailure};

/// Summary of a dataset build
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchReport {
    /// Input the games were read from
    pub input: String,
    pub games_read: usize,
    pub games_replayed: usize,
    pub total_plies: usize,
    /// Replayed games per outcome token ("1-0", "0-1", "1/2-1/2", "*", "none")
    pub outcomes: BTreeMap<String, usize>,
    pub failures: Vec<GameFailure>,
}

impl BatchReport {
    pub fn new(input: &str, games_read: usize, output: &BatchOutput) -> Self {
        let mut outcomes = BTreeMap::new();
        for game in &output.games {
            let key = game.outcome.map_or("none", |o| o.as_str());
            *outcomes.entry(key.to_string()).or_insert(0) += 1;
        }

        Self {
            input: input.to_string(),
            games_read,
            games_replayed: output.games.len(),
            total_plies: output.total_plies(),
            outcomes,
            failures: output.failures.clone(),
        }
    }

    /// Save report to JSON file
    pub fn save(&self, path: &Path) -> Result<(), String> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize: {}", e))?;
        std::fs::write(path, json).map_err(|e| format!("Failed to write: {}", e))
    }

    /// Load report from JSON file
    pub fn load(path: &Path) -> Result<Self, String> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| format!("Failed to read: {}", e))?;
        serde_json::from_str(&contents).map_err(|e| format!("Failed to parse: {}", e))
    }

    /// Generate a text report
    pub fn generate_report(&self) -> String {
        let mut report = String::new();
        report.push_str(&format!("=== Dataset: {} ===\n\n", self.input));
        report.push_str(&format!(
            "Games: {} read, {} replayed, {} failed\n",
            self.games_read,
            self.games_replayed,
            self.failures.len()
        ));
        report.push_str(&format!("Snapshots: {}\n\n", self.total_plies));

        report.push_str("Outcomes:\n");
        for (outcome, count) in &self.outcomes {
            report.push_str(&format!("  {:<10} {:>6}\n", outcome, count));
        }

        if !self.failures.is_empty() {
            report.push_str("\nFailures:\n");
            report.push_str(&format!("{:<8} {:<8} {}\n", "Game", "Line", "Error"));
            report.push_str(&"-".repeat(60));
            report.push('\n');
            for failure in &self.failures {
                report.push_str(&format!(
                    "{:<8} {:<8} {}\n",
                    failure.index, failure.line, failure.error
                ));
            }
        }

        report
    }

    /// Print report to stdout
    pub fn print_report(&self) {
        println!("{}", self.generate_report());
    }
}
