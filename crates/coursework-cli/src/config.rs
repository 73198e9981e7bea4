//! JSON configuration for the demo commands.
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use coursework_core::geometry::{Circle, Cube, Figure, Rectangle, Sphere};
use coursework_core::stats::ConfusionMatrix;

/// Inputs for every demo command. Missing sections fall back to defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub exercises: ExerciseConfig,
    pub vectors: VectorConfig,
    pub coins: CoinConfig,
    pub geometry: GeometryConfig,
}

/// Arguments of the week 34 exercises.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExerciseConfig {
    pub legs: (f64, f64),
    pub cathetus_and_hypotenuse: (f64, f64),
    pub line_points: [(f64, f64); 2],
    pub plane_points: [(f64, f64); 2],
    pub space_points: [(f64, f64, f64); 2],
    pub correct_predictions: u64,
    pub total_predictions: u64,
    pub confusion: ConfusionMatrix,
    pub precision: usize,
}

impl Default for ExerciseConfig {
    fn default() -> Self {
        Self {
            legs: (3.0, 4.0),
            cathetus_and_hypotenuse: (5.0, 7.0),
            line_points: [(4.0, 4.0), (0.0, 1.0)],
            plane_points: [(3.0, 5.0), (-2.0, 4.0)],
            space_points: [(2.0, 1.0, 4.0), (3.0, 1.0, 0.0)],
            correct_predictions: 300,
            total_predictions: 365,
            confusion: ConfusionMatrix::new(2, 2, 11, 985),
            precision: 2,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct VectorConfig {
    pub a: Vec<f64>,
    pub b: Vec<f64>,
    pub scalar: f64,
}

impl Default for VectorConfig {
    fn default() -> Self {
        Self {
            a: vec![1.0, 2.0],
            b: vec![3.0, 4.0],
            scalar: 5.0,
        }
    }
}

/// A sequence of deposits followed by withdrawals, as (riksdaler, skilling).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CoinConfig {
    pub owner: String,
    pub deposits: Vec<(f64, f64)>,
    pub withdrawals: Vec<(f64, f64)>,
}

impl Default for CoinConfig {
    fn default() -> Self {
        Self {
            owner: "Gustav".to_string(),
            deposits: vec![(10.0, 48.0), (2.0, 0.0)],
            withdrawals: vec![(4.0, 8.0), (20.0, 0.0)],
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeometryConfig {
    pub title: String,
    pub figures: Vec<Figure>,
    /// Random points drawn around the first figure for the containment plot.
    pub samples: usize,
    pub seed: u64,
    pub margin: f64,
}

impl Default for GeometryConfig {
    fn default() -> Self {
        let figures = default_figures().unwrap_or_default();
        Self {
            title: "Lab 3 shapes".to_string(),
            figures,
            samples: 200,
            seed: 42,
            margin: 1.0,
        }
    }
}

fn default_figures() -> coursework_core::Result<Vec<Figure>> {
    Ok(vec![
        Circle::new(2.5, 3.0, -3.0)?.into(),
        Rectangle::new(4.0, 3.0, 3.0, -3.0)?.into(),
        Sphere::new(1.5, -2.0, 1.0, 0.0)?.into(),
        Cube::new(2.0, -4.0, -4.0, 0.0)?.into(),
    ])
}

/// Load a demo configuration from a JSON file.
pub fn load_demo_config<P: AsRef<Path>>(path: P) -> Result<DemoConfig> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config: {}", path.as_ref().display()))?;
    let config: DemoConfig = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config: {}", path.as_ref().display()))?;
    Ok(config)
}

/// Load `path` if given, otherwise the defaults.
pub fn load_or_default(path: Option<&Path>) -> Result<DemoConfig> {
    match path {
        Some(path) => {
            log::info!("[Coursework] Using config: {:?}", path);
            load_demo_config(path)
        }
        None => {
            log::info!("[Coursework] No config provided; using defaults.");
            Ok(DemoConfig::default())
        }
    }
}
