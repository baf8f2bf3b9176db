use serde::{Deserialize, Serialize};
use sk_binarize::OtsuConfig;
use sk_tone::{ContrastConfig, LumaWeights};
use sk_topo::MarkerStyle;

use crate::PipelineError;

/// Tunables of the full pipeline. Defaults reproduce the reference output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkeletonConfig {
    pub contrast: f32,
    pub luma: LumaWeights,
    pub threshold_scale: f64,
    pub closing_iterations: usize,
    pub marker_radius: usize,
}

impl Default for SkeletonConfig {
    fn default() -> Self {
        Self {
            contrast: ContrastConfig::default().amount,
            luma: LumaWeights::default(),
            threshold_scale: OtsuConfig::default().scale,
            closing_iterations: 1,
            marker_radius: MarkerStyle::default().radius,
        }
    }
}

impl SkeletonConfig {
    pub fn validate(&self) -> Result<(), PipelineError> {
        if !self.contrast.is_finite() || self.contrast < 0.0 {
            return Err(PipelineError::InvalidConfig(format!(
                "contrast must be finite and non-negative, got {}",
                self.contrast
            )));
        }
        if !self.threshold_scale.is_finite() || self.threshold_scale < 0.0 {
            return Err(PipelineError::InvalidConfig(format!(
                "threshold_scale must be finite and non-negative, got {}",
                self.threshold_scale
            )));
        }
        Ok(())
    }

    pub fn contrast_config(&self) -> ContrastConfig {
        ContrastConfig {
            amount: self.contrast,
        }
    }

    pub fn otsu_config(&self) -> OtsuConfig {
        OtsuConfig {
            scale: self.threshold_scale,
        }
    }

    pub fn marker_style(&self) -> MarkerStyle {
        MarkerStyle {
            radius: self.marker_radius,
            ..MarkerStyle::default()
        }
    }
}
