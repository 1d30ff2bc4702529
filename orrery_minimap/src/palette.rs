// Copyright 2025 the Orrery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use orrery_layout::NodeClass;
use peniko::Color;

/// Colors used for minimap output.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Palette {
    /// Color of [`NodeClass::Default`] nodes.
    pub default: Color,
    /// Color of [`NodeClass::Start`] nodes.
    pub start: Color,
    /// Color of [`NodeClass::Pattern`] nodes.
    pub pattern: Color,
    /// Color of [`NodeClass::Subpattern`] nodes.
    pub subpattern: Color,
    /// Color of edge segments.
    pub edge: Color,
    /// Color of the viewport outline.
    pub viewport: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            default: Color::from_rgb8(0x9c, 0xa3, 0xaf),
            start: Color::from_rgb8(0x34, 0xd3, 0x99),
            pattern: Color::from_rgb8(0x60, 0xa5, 0xfa),
            subpattern: Color::from_rgb8(0xc0, 0x84, 0xfc),
            edge: Color::from_rgb8(0x4b, 0x55, 0x63),
            viewport: Color::from_rgb8(0xfb, 0xbf, 0x24),
        }
    }
}

impl Palette {
    /// Returns the color for a node class.
    #[must_use]
    pub fn node_color(&self, class: NodeClass) -> Color {
        match class {
            NodeClass::Default => self.default,
            NodeClass::Start => self.start,
            NodeClass::Pattern => self.pattern,
            NodeClass::Subpattern => self.subpattern,
        }
    }
}
