use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::Result;

fn default_gravity() -> f64 {
    9.8
}
fn default_write_interval() -> usize {
    1
}
fn default_output_dir() -> String {
    "outputs".to_string()
}

/// Raw contents of the JSON parameter file.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct SolverParamParser {
    pub x_left: f64,
    pub x_right: f64,
    pub elem_num: usize,
    pub node_num: usize,
    pub quadrature_point_num: usize,
    pub step_num: usize,
    pub final_time: f64,
    #[serde(default = "default_gravity")]
    pub gravity: f64,
    #[serde(default = "default_write_interval")]
    pub write_interval: usize,
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
}
impl SolverParamParser {
    pub fn parse(file_path: impl AsRef<Path>) -> Result<Self> {
        let file_content = fs::read_to_string(file_path)?;
        Self::parse_str(&file_content)
    }
    pub fn parse_str(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DgError;

    #[test]
    fn test_defaults_applied() {
        let param = SolverParamParser::parse_str(
            r#"{
                "x_left": 0.0, "x_right": 10.0,
                "elem_num": 6, "node_num": 4,
                "quadrature_point_num": 20,
                "step_num": 5, "final_time": 1.0
            }"#,
        )
        .unwrap();
        assert_eq!(param.elem_num, 6);
        assert_eq!(param.gravity, 9.8);
        assert_eq!(param.write_interval, 1);
        assert_eq!(param.output_dir, "outputs");
    }

    #[test]
    fn test_missing_field_is_an_error() {
        let err = SolverParamParser::parse_str(r#"{ "x_left": 0.0 }"#).unwrap_err();
        assert!(matches!(err, DgError::Json(_)));
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let err = SolverParamParser::parse("no/such/solverparam.json").unwrap_err();
        assert!(matches!(err, DgError::Io(_)));
    }
}
