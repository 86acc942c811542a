//! Track layout.
//!
//! The track is a single flex row: every slide is a flex item whose basis
//! is a percentage of the viewport width. Taffy resolves the percentages
//! into cell rectangles; the renderer then shifts them by the current
//! track transform. Slides neither grow nor shrink, so the row overflows
//! the viewport on purpose: that overflow is what the transform scrolls
//! through.

use taffy::{
    AvailableSpace, Dimension, Display, FlexDirection, FlexWrap, NodeId, Size, Style, TaffyResult,
    TaffyTree,
};

/// Resolved cell geometry for the slides in a track.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackLayout {
    /// Width of one slide in cells.
    pub slide_width: u16,
    /// X position of each track slide, in cells, before the transform is
    /// applied.
    pub positions: Vec<u16>,
}

/// Lay out `slide_count` slides of `basis_percent` width inside a
/// viewport of the given cell dimensions.
pub fn compute_track_layout(
    slide_count: usize,
    basis_percent: f32,
    viewport_width: u16,
    viewport_height: u16,
) -> TaffyResult<TrackLayout> {
    let mut tree: TaffyTree<()> = TaffyTree::new();

    let slide_style = Style {
        flex_grow: 0.0,
        flex_shrink: 0.0,
        flex_basis: Dimension::Percent(basis_percent / 100.0),
        size: Size {
            width: Dimension::Auto,
            height: Dimension::Percent(1.0),
        },
        ..Default::default()
    };

    let mut slides: Vec<NodeId> = Vec::with_capacity(slide_count);
    for _ in 0..slide_count {
        slides.push(tree.new_leaf(slide_style.clone())?);
    }

    let track_style = Style {
        display: Display::Flex,
        flex_direction: FlexDirection::Row,
        flex_wrap: FlexWrap::NoWrap,
        size: Size {
            width: Dimension::Length(viewport_width as f32),
            height: Dimension::Length(viewport_height as f32),
        },
        ..Default::default()
    };

    let track = tree.new_with_children(track_style, &slides)?;

    tree.compute_layout(
        track,
        Size {
            width: AvailableSpace::Definite(viewport_width as f32),
            height: AvailableSpace::Definite(viewport_height as f32),
        },
    )?;

    let mut positions = Vec::with_capacity(slide_count);
    let mut slide_width = 0u16;
    for node in &slides {
        let layout = tree.layout(*node)?;
        positions.push(layout.location.x.round() as u16);
        slide_width = layout.size.width.round() as u16;
    }

    Ok(TrackLayout {
        slide_width,
        positions,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_up_layout() {
        let layout = compute_track_layout(4, 50.0, 80, 9).unwrap();

        assert_eq!(layout.slide_width, 40);
        assert_eq!(layout.positions, vec![0, 40, 80, 120]);
    }

    #[test]
    fn test_single_slide_fills_viewport() {
        let layout = compute_track_layout(3, 100.0, 64, 9).unwrap();

        assert_eq!(layout.slide_width, 64);
        assert_eq!(layout.positions, vec![0, 64, 128]);
    }

    #[test]
    fn test_empty_track() {
        let layout = compute_track_layout(0, 50.0, 80, 9).unwrap();

        assert_eq!(layout.positions.len(), 0);
        assert_eq!(layout.slide_width, 0);
    }
}
