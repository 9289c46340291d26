//! Background handling
//!
//! A background image is shown by the page behind a transparent canvas. When
//! the image is missing or fails to load, the canvas clears to a solid color.

use super::vertex::colors;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Backdrop {
    /// Image loaded and shown behind the canvas
    Image,
    /// No image; fill with a solid color
    #[default]
    Solid,
}

impl Backdrop {
    /// Pick the backdrop for an image load attempt. `None` means no image was configured.
    pub fn from_load(result: Option<bool>) -> Self {
        match result {
            Some(true) => Backdrop::Image,
            Some(false) => {
                log::warn!("Background image failed to load, using solid fill");
                Backdrop::Solid
            }
            None => Backdrop::Solid,
        }
    }

    /// Color the canvas is cleared to each frame
    pub fn clear_color(&self) -> wgpu::Color {
        match self {
            Backdrop::Image => wgpu::Color::TRANSPARENT,
            Backdrop::Solid => {
                let [r, g, b, a] = colors::BACKGROUND;
                wgpu::Color {
                    r: r as f64,
                    g: g as f64,
                    b: b as f64,
                    a: a as f64,
                }
            }
        }
    }
}
