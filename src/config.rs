//! Display configuration types and builder

pub use crate::command::{CommandSet, InitCommands};
pub use crate::error::BuilderError;

/// Screen geometry of the reference panel and its text margins
///
/// The panel has 132 columns of RAM but only 131 are visible.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Geometry {
    /// Visible columns
    pub width: u8,
    /// Visible rows (pages)
    pub height: u8,
    /// Column margin applied to text cells
    pub x_offset: u8,
    /// Page margin applied to text cells
    pub y_offset: u8,
}

impl Geometry {
    /// Reference panel: 131x132 with a 2 pixel margin on both axes
    pub const REFERENCE: Self = Self {
        width: 131,
        height: 132,
        x_offset: 2,
        y_offset: 2,
    };

    /// Create a geometry with zero margins
    ///
    /// # Errors
    ///
    /// Returns `BuilderError::InvalidGeometry` if either dimension is 0.
    pub fn new(width: u8, height: u8) -> Result<Self, BuilderError> {
        if width == 0 || height == 0 {
            return Err(BuilderError::InvalidGeometry { width, height });
        }
        Ok(Self {
            width,
            height,
            x_offset: 0,
            y_offset: 0,
        })
    }

    /// Set the text margins
    pub fn with_offsets(mut self, x_offset: u8, y_offset: u8) -> Self {
        self.x_offset = x_offset;
        self.y_offset = y_offset;
        self
    }

    /// Total visible pixels
    pub fn pixel_count(&self) -> u32 {
        self.width as u32 * self.height as u32
    }

    /// Number of pixel pairs needed to fill the screen
    ///
    /// Rounds down: on an odd pixel count the last pixel is not covered.
    pub fn pixel_pairs(&self) -> u32 {
        self.pixel_count() / 2
    }
}

impl Default for Geometry {
    fn default() -> Self {
        Self::REFERENCE
    }
}

/// Display configuration
///
/// Use `Builder` to create a Config.
#[derive(Clone, Debug)]
pub struct Config {
    /// Screen geometry
    pub geometry: Geometry,
    /// Controller opcodes
    pub commands: CommandSet,
    /// Color depth byte sent with the color-mode opcode
    pub color_depth: u8,
    /// Orientation byte sent with the memory-access opcode
    pub memory_access: u8,
    /// Level byte sent with the contrast opcode
    pub contrast: u8,
    /// Wait between the final no-op and display-on, in milliseconds
    pub power_on_delay_ms: u32,
}

/// Builder for constructing display configuration
///
/// Every setting has a default matching the reference panel, so
/// `Builder::new().build()` yields a working Philips configuration.
///
/// # Example
///
/// ```
/// use nokia6100_lcd::{Builder, CommandSet, Geometry};
///
/// let config = match Builder::new()
///     .geometry(Geometry::REFERENCE)
///     .commands(CommandSet::PHILIPS)
///     .contrast(0x38)
///     .build()
/// {
///     Ok(config) => config,
///     Err(_) => return,
/// };
/// assert_eq!(config.contrast, 0x38);
/// ```
#[must_use]
pub struct Builder {
    geometry: Geometry,
    commands: CommandSet,
    color_depth: u8,
    memory_access: u8,
    contrast: u8,
    power_on_delay_ms: u32,
}

impl Default for Builder {
    fn default() -> Self {
        Self {
            geometry: Geometry::REFERENCE,
            commands: CommandSet::PHILIPS,
            // 12 bits per pixel
            color_depth: 0x03,
            // Mirror X and Y, BGR order
            memory_access: 0xC8,
            contrast: 0x30,
            power_on_delay_ms: 200,
        }
    }
}

impl Builder {
    /// Create a new Builder with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set screen geometry
    pub fn geometry(mut self, geometry: Geometry) -> Self {
        self.geometry = geometry;
        self
    }

    /// Set the controller command set
    pub fn commands(mut self, commands: CommandSet) -> Self {
        self.commands = commands;
        self
    }

    /// Set the color depth byte
    pub fn color_depth(mut self, value: u8) -> Self {
        self.color_depth = value;
        self
    }

    /// Set the memory access (orientation) byte
    pub fn memory_access(mut self, value: u8) -> Self {
        self.memory_access = value;
        self
    }

    /// Set the contrast level byte
    pub fn contrast(mut self, value: u8) -> Self {
        self.contrast = value;
        self
    }

    /// Set the delay before display-on, in milliseconds
    pub fn power_on_delay_ms(mut self, value: u32) -> Self {
        self.power_on_delay_ms = value;
        self
    }

    /// Build the configuration
    ///
    /// # Errors
    ///
    /// - `BuilderError::InvalidGeometry` if a dimension is 0
    /// - `BuilderError::InvalidOffset` if a margin is not smaller than its dimension
    pub fn build(self) -> Result<Config, BuilderError> {
        let geometry = self.geometry;
        if geometry.width == 0 || geometry.height == 0 {
            return Err(BuilderError::InvalidGeometry {
                width: geometry.width,
                height: geometry.height,
            });
        }
        if geometry.x_offset >= geometry.width || geometry.y_offset >= geometry.height {
            return Err(BuilderError::InvalidOffset {
                x_offset: geometry.x_offset,
                y_offset: geometry.y_offset,
            });
        }
        Ok(Config {
            geometry,
            commands: self.commands,
            color_depth: self.color_depth,
            memory_access: self.memory_access,
            contrast: self.contrast,
            power_on_delay_ms: self.power_on_delay_ms,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_reference_panel() {
        let config = Builder::new().build().unwrap();
        assert_eq!(config.geometry, Geometry::REFERENCE);
        assert_eq!(config.commands, CommandSet::PHILIPS);
        assert_eq!(config.color_depth, 0x03);
        assert_eq!(config.memory_access, 0xC8);
        assert_eq!(config.contrast, 0x30);
        assert_eq!(config.power_on_delay_ms, 200);
    }

    #[test]
    fn test_reference_pixel_pairs() {
        assert_eq!(Geometry::REFERENCE.pixel_count(), 17_292);
        assert_eq!(Geometry::REFERENCE.pixel_pairs(), 8_646);
    }

    #[test]
    fn test_odd_pixel_count_rounds_down() {
        let geometry = Geometry::new(3, 3).unwrap();
        assert_eq!(geometry.pixel_pairs(), 4);
    }

    #[test]
    fn test_zero_geometry_rejected() {
        assert!(matches!(
            Geometry::new(0, 132),
            Err(BuilderError::InvalidGeometry { width: 0, .. })
        ));
        let zero = Geometry {
            width: 131,
            height: 0,
            x_offset: 0,
            y_offset: 0,
        };
        assert!(matches!(
            Builder::new().geometry(zero).build(),
            Err(BuilderError::InvalidGeometry { height: 0, .. })
        ));
    }

    #[test]
    fn test_offset_outside_screen_rejected() {
        let geometry = Geometry::new(16, 16).unwrap().with_offsets(16, 0);
        assert!(matches!(
            Builder::new().geometry(geometry).build(),
            Err(BuilderError::InvalidOffset { x_offset: 16, .. })
        ));
    }

    #[test]
    fn test_epson_commands() {
        let config = Builder::new().commands(CommandSet::EPSON).build().unwrap();
        assert_eq!(config.commands.set_page, 0x75);
    }
}
