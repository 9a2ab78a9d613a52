//! Spacing scale

/// Base spacing unit in pixels; brands scale it by their multiplier
pub const BASE_UNIT_PX: f32 = 4.0;

/// Role name and alias token path of the multiplier
pub const SPACING_SCALE_ROLE: &str = "spacing.scale";

/// A brand's spacing multiplier over the 4px grid
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpacingScale {
    pub multiplier: f32,
}

impl SpacingScale {
    pub const fn new(multiplier: f32) -> Self {
        Self { multiplier }
    }

    /// Parse a resolved multiplier literal (`"1.1"`)
    pub fn parse(value: &str) -> Option<Self> {
        let multiplier: f32 = value.trim().parse().ok()?;
        (multiplier.is_finite() && multiplier > 0.0).then_some(Self { multiplier })
    }

    /// Pixel size of `units` grid steps
    pub fn px(&self, units: f32) -> f32 {
        units * BASE_UNIT_PX * self.multiplier
    }
}

impl Default for SpacingScale {
    fn default() -> Self {
        Self { multiplier: 1.0 }
    }
}
