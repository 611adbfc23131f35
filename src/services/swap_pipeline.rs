use std::path::{Path, PathBuf};
use std::sync::Arc;

use palette_remap::{ColorCatalog, PaletteSwapper, PixelBuffer, Rgba, SwapOutput};

use crate::error::SwapError;
use crate::models::AppConfig;
use crate::rendering::{palette_strip, png_io};
use crate::services::palette_loader;
use crate::services::TracingObserver;

/// One invocation of the tool
#[derive(Debug, Clone, Default)]
pub struct SwapRequest {
    /// Image to recolor
    pub base: PathBuf,
    /// Destination palette (text file or PNG)
    pub palette: Option<PathBuf>,
    /// Output path; `None` uses the configured default
    pub dest: Option<PathBuf>,
    /// Write a strip of the base image's colors here
    pub old_palette_strip: Option<PathBuf>,
    /// Write a strip of the destination palette here
    pub new_palette_strip: Option<PathBuf>,
    /// Keep going with the swap after writing strips
    pub long: bool,
}

/// What a run produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SwapOutcome {
    /// Only palette strips were written
    StripsOnly,
    /// The recolored image was written
    Swapped {
        dest: PathBuf,
        /// Distinct colors in the base image
        colors: usize,
        /// Colors left unchanged for lack of a destination entry
        kept: usize,
    },
}

/// Orchestrates load -> swap -> save
pub struct SwapPipeline {
    config: AppConfig,
}

impl SwapPipeline {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Swapper for `palette` with the configured transform settings
    pub fn swapper(&self, palette: ColorCatalog) -> PaletteSwapper {
        PaletteSwapper::new(palette)
            .parallel(self.config.transform.parallel)
            .parallel_threshold(self.config.transform.parallel_threshold)
            .observer(Arc::new(TracingObserver))
    }

    /// Recolor an in-memory image
    pub fn swap_image(
        &self,
        image: &PixelBuffer,
        palette: ColorCatalog,
    ) -> Result<SwapOutput, SwapError> {
        Ok(self.swapper(palette).swap(image)?)
    }

    /// Render `colors` as a strip and save it as PNG
    pub fn write_strip(&self, colors: &[Rgba], path: &Path) -> Result<(), SwapError> {
        let strip =
            palette_strip::render_strip(colors, self.config.strip.width, self.config.strip.height);
        png_io::write_png(path, &strip)?;
        tracing::info!(path = %path.display(), colors = colors.len(), "Wrote palette strip");
        Ok(())
    }

    pub fn run(&self, request: &SwapRequest) -> Result<SwapOutcome, SwapError> {
        let image = png_io::read_png(&request.base)?;
        tracing::info!(
            path = %request.base.display(),
            width = image.width(),
            height = image.height(),
            "Loaded base image"
        );

        if let Some(strip_path) = &request.old_palette_strip {
            let catalog = ColorCatalog::extract(&image);
            self.write_strip(catalog.colors(), strip_path)?;
        }

        let mut palette = None;
        if let Some(strip_path) = &request.new_palette_strip {
            let loaded = self.load_palette(request)?;
            self.write_strip(loaded.colors(), strip_path)?;
            palette = Some(loaded);
        }

        let wrote_strips =
            request.old_palette_strip.is_some() || request.new_palette_strip.is_some();
        if wrote_strips && !request.long {
            return Ok(SwapOutcome::StripsOnly);
        }

        let palette = match palette {
            Some(palette) => palette,
            None => self.load_palette(request)?,
        };

        let output = self.swap_image(&image, palette)?;

        let dest = request
            .dest
            .clone()
            .unwrap_or_else(|| self.config.output.default_path.clone());
        png_io::write_png(&dest, &output.image)?;
        tracing::info!(path = %dest.display(), "Wrote swapped image");

        Ok(SwapOutcome::Swapped {
            dest,
            colors: output.source_catalog.len(),
            kept: output.mapping.fallback_count(),
        })
    }

    fn load_palette(&self, request: &SwapRequest) -> Result<ColorCatalog, SwapError> {
        let path = request.palette.as_deref().ok_or(SwapError::MissingPalette)?;
        palette_loader::load_palette(path)
    }
}
