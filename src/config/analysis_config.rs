use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

//complete analysis configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfiguration {
    //input
    pub data_path: PathBuf,

    //directory receiving the three output artifacts
    pub output_dir: PathBuf,

    //artifact file names within output_dir
    pub values_filename: String,
    pub returns_filename: String,
    pub metrics_filename: String,
}

impl Default for AnalysisConfiguration {
    fn default() -> Self {
        AnalysisConfiguration {
            data_path: PathBuf::from("data/market_data_combined.csv"),
            output_dir: PathBuf::from("data"),
            values_filename: "portfolio_value_buy_and_hold.csv".to_string(),
            returns_filename: "portfolio_returns_buy_and_hold.csv".to_string(),
            metrics_filename: "portfolio_metrics_buy_and_hold.txt".to_string(),
        }
    }
}

impl AnalysisConfiguration {
    pub fn values_path(&self) -> PathBuf {
        self.output_dir.join(&self.values_filename)
    }

    pub fn returns_path(&self) -> PathBuf {
        self.output_dir.join(&self.returns_filename)
    }

    pub fn metrics_path(&self) -> PathBuf {
        self.output_dir.join(&self.metrics_filename)
    }

    //load configuration from a JSON file
    pub fn from_json_file(path: &Path) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: AnalysisConfiguration = serde_json::from_str(&contents)?;
        Ok(config)
    }

    //save configuration to a JSON file
    pub fn to_json_file(&self, path: &Path) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_paths_follow_batch_layout() {
        let config = AnalysisConfiguration::default();
        assert_eq!(
            config.values_path(),
            PathBuf::from("data/portfolio_value_buy_and_hold.csv")
        );
        assert_eq!(
            config.metrics_path(),
            PathBuf::from("data/portfolio_metrics_buy_and_hold.txt")
        );
    }

    #[test]
    fn json_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        let mut config = AnalysisConfiguration::default();
        config.data_path = PathBuf::from("custom/combined.csv");
        config.to_json_file(&path).unwrap();

        let loaded = AnalysisConfiguration::from_json_file(&path).unwrap();
        assert_eq!(loaded.data_path, PathBuf::from("custom/combined.csv"));
        assert_eq!(loaded.values_filename, config.values_filename);
    }
}
