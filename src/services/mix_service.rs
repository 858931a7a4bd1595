use std::sync::Arc;

use pigment_mix::{Latent, Lut, MixError, PigmentMixer, Rgb};

use crate::error::{ApiError, RenderError};
use crate::models::{AppConfig, GradientConfig};
use crate::rendering::render_swatches;
use crate::services::lut_loader::{load_lut, LoadError};

/// High-level mixing service shared by the HTTP handlers and the CLI
pub struct MixService {
    mixer: Arc<PigmentMixer>,
    gradient: GradientConfig,
}

impl MixService {
    pub fn new(lut: Lut, gradient: GradientConfig) -> Self {
        Self {
            mixer: Arc::new(PigmentMixer::with_lut(lut)),
            gradient,
        }
    }

    /// Build the service from configuration, loading the configured LUT.
    pub fn from_config(config: &AppConfig) -> Result<Self, LoadError> {
        let source = config.lut_source().ok_or(LoadError::NotConfigured)?;
        let lut = load_lut(&source)?;
        Ok(Self::new(lut, config.gradient.clone()))
    }

    pub fn gradient_config(&self) -> &GradientConfig {
        &self.gradient
    }

    /// Mix two colors as pigments at ratio `t`.
    pub fn mix(&self, a: Rgb, b: Rgb, t: f64) -> Result<Rgb, MixError> {
        let mixed = Rgb::from(self.mixer.mix(a.to_array(), b.to_array(), t)?);
        tracing::debug!(%a, %b, t, %mixed, "Mixed colors");
        Ok(mixed)
    }

    /// Plain per-channel sRGB interpolation, for comparison.
    pub fn naive_mix(&self, a: Rgb, b: Rgb, t: f64) -> Rgb {
        let a = a.to_float();
        let b = b.to_float();
        Rgb::from_float([
            (1.0 - t) * a[0] + t * b[0],
            (1.0 - t) * a[1] + t * b[1],
            (1.0 - t) * a[2] + t * b[2],
        ])
    }

    pub fn latent(&self, color: Rgb) -> Result<Latent, MixError> {
        self.mixer.encode_rgb8(color.to_array())
    }

    pub fn decode(&self, latent: &Latent) -> Rgb {
        Rgb::from(self.mixer.decode_to_rgb8(latent))
    }

    /// Resolve requested steps against the configured bounds.
    pub fn resolve_steps(&self, requested: Option<usize>) -> Result<usize, ApiError> {
        let steps = requested.unwrap_or(self.gradient.default_steps);
        if steps < 2 {
            return Err(MixError::InvalidSteps { steps }.into());
        }
        if steps > self.gradient.max_steps {
            return Err(ApiError::InvalidParameter(format!(
                "steps must be at most {}, got {steps}",
                self.gradient.max_steps
            )));
        }
        Ok(steps)
    }

    pub fn gradient(&self, a: Rgb, b: Rgb, steps: usize) -> Result<Vec<Rgb>, MixError> {
        let colors = self.mixer.gradient(a.to_array(), b.to_array(), steps)?;
        tracing::debug!(%a, %b, steps, "Computed gradient");
        Ok(colors.into_iter().map(Rgb::from).collect())
    }

    /// Render a gradient as a PNG strip of swatches.
    ///
    /// Uses spawn_blocking so encoding large strips does not stall the
    /// async runtime.
    pub async fn gradient_png(&self, a: Rgb, b: Rgb, steps: usize) -> Result<Vec<u8>, ApiError> {
        let mixer = self.mixer.clone();
        let width = self.gradient.swatch_width;
        let height = self.gradient.swatch_height;

        tokio::task::spawn_blocking(move || -> Result<Vec<u8>, ApiError> {
            let colors: Vec<Rgb> = mixer
                .gradient(a.to_array(), b.to_array(), steps)?
                .into_iter()
                .map(Rgb::from)
                .collect();
            Ok(render_swatches(&colors, width, height)?)
        })
        .await
        .map_err(|e| RenderError::PngEncode(format!("Render task failed: {e}")))?
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pigment_mix::lut::{GRID_CELLS, LUT_LEN};

    /// Uniform LUT: every color gets the same concentrations.
    fn flat_service() -> MixService {
        let mut bytes = vec![0u8; LUT_LEN];
        bytes[2 * GRID_CELLS..3 * GRID_CELLS].fill(128);
        MixService::new(Lut::new(bytes), GradientConfig::default())
    }

    #[test]
    fn test_mix_endpoints() {
        let service = flat_service();
        let a = Rgb::new(200, 10, 30);
        let b = Rgb::new(5, 90, 250);
        assert_eq!(service.mix(a, b, 0.0).unwrap(), a);
        assert_eq!(service.mix(a, b, 1.0).unwrap(), b);
    }

    #[test]
    fn test_naive_mix_midpoint() {
        let service = flat_service();
        let mixed = service.naive_mix(Rgb::new(0, 0, 0), Rgb::new(255, 255, 255), 0.5);
        assert_eq!(mixed, Rgb::new(128, 128, 128));
    }

    #[test]
    fn test_latent_decode_round_trip() {
        let service = flat_service();
        let color = Rgb::new(17, 130, 222);
        let latent = service.latent(color).unwrap();
        assert_eq!(service.decode(&latent), color);
    }

    #[test]
    fn test_resolve_steps() {
        let service = flat_service();
        assert_eq!(service.resolve_steps(None).unwrap(), 9);
        assert_eq!(service.resolve_steps(Some(2)).unwrap(), 2);
        assert_eq!(service.resolve_steps(Some(256)).unwrap(), 256);
        assert!(matches!(
            service.resolve_steps(Some(1)),
            Err(ApiError::Mix(MixError::InvalidSteps { steps: 1 }))
        ));
        assert!(matches!(
            service.resolve_steps(Some(257)),
            Err(ApiError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_gradient_has_requested_steps() {
        let service = flat_service();
        let a = Rgb::new(255, 0, 0);
        let b = Rgb::new(0, 0, 255);
        let colors = service.gradient(a, b, 5).unwrap();
        assert_eq!(colors.len(), 5);
        assert_eq!(colors[0], a);
        assert_eq!(colors[4], b);
    }

    #[tokio::test]
    async fn test_gradient_png_signature() {
        let service = flat_service();
        let png = service
            .gradient_png(Rgb::new(0, 0, 0), Rgb::new(255, 255, 255), 3)
            .await
            .unwrap();
        assert_eq!(&png[..8], b"\x89PNG\r\n\x1a\n");
    }

    #[test]
    fn test_from_config_without_lut() {
        let result = MixService::from_config(&AppConfig::default());
        assert!(matches!(result, Err(LoadError::NotConfigured)));
    }
}
