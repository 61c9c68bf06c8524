//! Parameter sets for the non-photorealistic rendering techniques.
//!
//! These are plain value types an application feeds to its shaders as
//! uniforms; the shading math itself lives GPU-side and is out of scope
//! here. Defaults match the values the techniques were tuned with.

use nalgebra::Vector3;

/// Phong material coefficients.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Material {
    /// Ambient reflectivity.
    pub ka: Vector3<f32>,
    /// Diffuse reflectivity.
    pub kd: Vector3<f32>,
    /// Specular reflectivity.
    pub ks: Vector3<f32>,
    /// Specular exponent.
    pub shininess: f32,
}

impl Material {
    /// Create a material from diffuse and specular terms.
    pub fn new(kd: Vector3<f32>, ks: Vector3<f32>, shininess: f32) -> Self {
        Self {
            ka: Vector3::zeros(),
            kd,
            ks,
            shininess,
        }
    }

    /// Create a material including an ambient term.
    pub fn with_ambient(
        ka: Vector3<f32>,
        kd: Vector3<f32>,
        ks: Vector3<f32>,
        shininess: f32,
    ) -> Self {
        Self { ka, kd, ks, shininess }
    }
}

/// Screen-space outline drawn by re-rendering the backfaces enlarged.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BasicOutline {
    /// Outline color.
    pub color: Vector3<f32>,
    /// Outline thickness in model units.
    pub thickness: f32,
    /// Whether the outline pass runs.
    pub enabled: bool,
}

impl BasicOutline {
    /// Create a disabled outline with the given look.
    pub fn new(color: Vector3<f32>, thickness: f32) -> Self {
        Self {
            color,
            thickness,
            enabled: false,
        }
    }
}

impl Default for BasicOutline {
    fn default() -> Self {
        Self::new(Vector3::zeros(), 0.0)
    }
}

/// Silhouette outline extruded by a geometry shader from the adjacency
/// index buffer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AdvancedOutline {
    /// Outline color.
    pub color: Vector3<f32>,
    /// Extruded quad thickness.
    pub thickness: f32,
    /// How far silhouette edges extend past their endpoints.
    pub extension: f32,
    /// Whether the outline pass runs.
    pub enabled: bool,
}

impl AdvancedOutline {
    /// Create a disabled outline with the given look.
    pub fn new(color: Vector3<f32>, thickness: f32, extension: f32) -> Self {
        Self {
            color,
            thickness,
            extension,
            enabled: false,
        }
    }
}

impl Default for AdvancedOutline {
    fn default() -> Self {
        Self::new(Vector3::zeros(), 0.0, 0.0)
    }
}

/// Single-material rendering ignoring imported surface colors.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Monochrome {
    /// Material used for the whole model.
    pub material: Material,
}

/// Banded lighting with optional rim silhouette darkening.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CelShading {
    /// Number of discrete shading bands.
    pub tones: f32,
    /// Rim-darkening factor; 0 disables silhouetting.
    pub silhouetting_factor: f32,
}

impl Default for CelShading {
    fn default() -> Self {
        Self {
            tones: 2.0,
            silhouetting_factor: 0.0,
        }
    }
}

/// Dot-screen shading in image space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Halftone {
    /// Luminance below which dots appear.
    pub threshold: f32,
    /// Dot intensity.
    pub intensity: f32,
    /// Dot size in pixels.
    pub size: f32,
    /// Dot color.
    pub color: Vector3<f32>,
}

impl Default for Halftone {
    fn default() -> Self {
        Self {
            threshold: 0.25,
            intensity: 0.7,
            size: 2.0,
            color: Vector3::new(0.1, 0.1, 0.1),
        }
    }
}

/// Ordered line dithering with four luminance bands.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dithering {
    /// Luminance cutoffs, brightest band first.
    pub thresholds: [f32; 4],
    /// Line intensity per band.
    pub intensity_thresholds: [f32; 4],
    /// Line pattern density.
    pub density: f32,
    /// Line width in pixels.
    pub width: f32,
    /// Tint the lines with the scene color instead of black.
    pub use_scene_color: bool,
}

impl Default for Dithering {
    fn default() -> Self {
        Self {
            thresholds: [0.8, 0.6, 0.3, 0.15],
            intensity_thresholds: [0.9, 0.6, 0.3, 0.0],
            density: 5.0,
            width: 2.0,
            use_scene_color: false,
        }
    }
}

/// Tonal art map hatching strokes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hatching {
    /// Stroke texture tiling density.
    pub density: f32,
    /// Stroke rotation around each axis, in degrees.
    pub rotation: Vector3<f32>,
}

impl Hatching {
    /// Create hatching parameters with explicit stroke orientation.
    pub fn new(density: f32, rotation: Vector3<f32>) -> Self {
        Self { density, rotation }
    }
}

impl Default for Hatching {
    fn default() -> Self {
        Self {
            density: 6.0,
            rotation: Vector3::zeros(),
        }
    }
}

/// Charcoal-sketch post-processing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Charcoal {
    /// Run the Sobel edge filter.
    pub sobel_filter: bool,
    /// Edge detection threshold.
    pub threshold: f32,
    /// Detected edge color.
    pub edge_color: Vector3<f32>,
    /// Scene color gain before quantization.
    pub color_multiplier: f32,
    /// Paper grain noise amount.
    pub noise: f32,
}

impl Default for Charcoal {
    fn default() -> Self {
        Self {
            sobel_filter: true,
            threshold: 0.025,
            edge_color: Vector3::new(0.2, 0.2, 0.2),
            color_multiplier: 3.0,
            noise: 0.3,
        }
    }
}

/// Gooch cool-to-warm technical illustration shading.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GoochShading {
    /// Blue strength of the cool color.
    pub k_blue: f32,
    /// Yellow strength of the warm color.
    pub k_yellow: f32,
    /// Diffuse contribution to the cool color.
    pub alpha: f32,
    /// Diffuse contribution to the warm color.
    pub beta: f32,
}

impl Default for GoochShading {
    fn default() -> Self {
        Self {
            k_blue: 0.6,
            k_yellow: 0.9,
            alpha: 0.1,
            beta: 0.5,
        }
    }
}

/// Kuwahara-style painterly filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Painterly {
    /// Brush kernel radius in pixels.
    pub brush_size: u32,
}

impl Default for Painterly {
    fn default() -> Self {
        Self { brush_size: 4 }
    }
}

/// Downsampled pixel-art rendering.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelArt {
    /// Virtual horizontal resolution.
    pub horizontal_pixels: f32,
    /// Virtual vertical resolution.
    pub vertical_pixels: f32,
}

impl Default for PixelArt {
    fn default() -> Self {
        Self {
            horizontal_pixels: 200.0,
            vertical_pixels: 200.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outlines_start_disabled() {
        assert!(!BasicOutline::new(Vector3::zeros(), 2.0).enabled);
        assert!(!AdvancedOutline::new(Vector3::zeros(), 2.0, 1.0).enabled);
    }

    #[test]
    fn test_tuned_defaults() {
        assert_eq!(CelShading::default().tones, 2.0);
        assert_eq!(Halftone::default().threshold, 0.25);
        assert_eq!(Dithering::default().thresholds, [0.8, 0.6, 0.3, 0.15]);
        assert_eq!(GoochShading::default().k_yellow, 0.9);
        assert_eq!(Painterly::default().brush_size, 4);
    }
}
