//! Series Appearance Module
//! Maps a requested style and series kind to marker/line visibility.

use crate::data::Style;

/// What produced a rendered series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SeriesKind {
    /// Sampled from a function.
    Function,
    /// Taken verbatim from a point set.
    Points,
}

/// Marker size class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarkerSize {
    Regular,
    /// Barely visible dot, used for dense function samples.
    Minimal,
}

/// Cosmetic flags applied to a series once it is on the chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Appearance {
    pub show_markers: bool,
    pub show_line: bool,
    pub marker_size: MarkerSize,
}

impl Default for Appearance {
    /// Chart widget default: markers joined by a line.
    fn default() -> Self {
        LINE_AND_MARKERS
    }
}

const LINE_ONLY: Appearance = Appearance {
    show_markers: false,
    show_line: true,
    marker_size: MarkerSize::Regular,
};

const MARKERS_ONLY: Appearance = Appearance {
    show_markers: true,
    show_line: false,
    marker_size: MarkerSize::Regular,
};

const LINE_AND_MARKERS: Appearance = Appearance {
    show_markers: true,
    show_line: true,
    marker_size: MarkerSize::Regular,
};

const DENSE_DOTS: Appearance = Appearance {
    show_markers: true,
    show_line: false,
    marker_size: MarkerSize::Minimal,
};

/// Rows follow `Style` declaration order, columns follow `SeriesKind`.
/// Function series ignore the requested style.
const APPEARANCE_TABLE: [[Appearance; 2]; 3] = [
    // Line
    [DENSE_DOTS, LINE_ONLY],
    // Marker
    [DENSE_DOTS, MARKERS_ONLY],
    // LineAndMarker
    [DENSE_DOTS, LINE_AND_MARKERS],
];

fn style_row(style: Style) -> usize {
    match style {
        Style::Line => 0,
        Style::Marker => 1,
        Style::LineAndMarker => 2,
    }
}

fn kind_column(kind: SeriesKind) -> usize {
    match kind {
        SeriesKind::Function => 0,
        SeriesKind::Points => 1,
    }
}

/// Look up how a series of `kind` requested with `style` is drawn.
pub fn appearance(style: Style, kind: SeriesKind) -> Appearance {
    APPEARANCE_TABLE[style_row(style)][kind_column(kind)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_styles() {
        assert_eq!(appearance(Style::Line, SeriesKind::Points), LINE_ONLY);
        assert_eq!(appearance(Style::Marker, SeriesKind::Points), MARKERS_ONLY);
        assert_eq!(
            appearance(Style::LineAndMarker, SeriesKind::Points),
            LINE_AND_MARKERS
        );
    }

    #[test]
    fn functions_are_always_dense_dots() {
        for style in [Style::Line, Style::Marker, Style::LineAndMarker] {
            let look = appearance(style, SeriesKind::Function);
            assert!(look.show_markers);
            assert!(!look.show_line);
            assert_eq!(look.marker_size, MarkerSize::Minimal);
        }
    }
}
