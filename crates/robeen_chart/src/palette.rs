use crate::error::{ChartError, Result};

/// Non-empty, ordered list of bar fill colours.
///
/// Colours are opaque strings handed to the render surface (`"#4e79a7"`,
/// `"steelblue"`, ...). Bar `i` takes colour `i mod len`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<String>,
}

impl Palette {
    pub fn new(colors: Vec<String>) -> Result<Self> {
        if colors.is_empty() {
            return Err(ChartError::InvalidConfiguration(
                "colour palette must contain at least one colour".to_string(),
            ));
        }
        Ok(Self { colors })
    }

    pub fn color_at(&self, idx: usize) -> &str {
        &self.colors[idx % self.colors.len()]
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}
