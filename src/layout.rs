//! Fixed table metrics and canvas geometry.
//!
//! All dimensions are pure functions of the row and column counts; text
//! measurement never enters into geometry.

/// Width of the topic name column in pixels.
pub const TOPIC_WIDTH: u32 = 800;
/// Width of each score column in pixels.
pub const SCORE_WIDTH: u32 = 100;
/// Height of each topic row in pixels.
pub const ROW_HEIGHT: u32 = 60;
/// Thickness of grid lines in pixels.
pub const LINE_WIDTH: u32 = 3;
/// Horizontal text padding inside a cell, applied on both sides.
pub const CELL_OFFSET: u32 = 7;

/// Immutable pixel geometry for a table with given row/column counts.
///
/// `xs` and `ys` are the ascending grid-line positions: column
/// boundaries (0, topic width, then one score-width step per score) and
/// row boundaries (0, then one row-height step per topic). Both outer
/// edges are included; the canvas carries `LINE_WIDTH` of slack so the
/// last line renders inside it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    /// Full canvas width in pixels.
    pub width: u32,
    /// Full canvas height in pixels.
    pub height: u32,
    /// Vertical grid-line x positions, ascending.
    pub xs: Vec<u32>,
    /// Horizontal grid-line y positions, ascending.
    pub ys: Vec<u32>,
}

impl Layout {
    /// Compute the geometry for `topics` rows and `scores` score columns.
    pub fn for_counts(topics: usize, scores: usize) -> Self {
        let width = TOPIC_WIDTH + SCORE_WIDTH * scores as u32 + LINE_WIDTH;
        let height = ROW_HEIGHT * topics as u32 + LINE_WIDTH;

        let mut xs = Vec::with_capacity(scores + 2);
        xs.push(0);
        let mut x = TOPIC_WIDTH;
        xs.push(x);
        for _ in 0..scores {
            x += SCORE_WIDTH;
            xs.push(x);
        }

        let mut ys = Vec::with_capacity(topics + 1);
        ys.push(0);
        let mut y = 0;
        for _ in 0..topics {
            y += ROW_HEIGHT;
            ys.push(y);
        }

        Self {
            width,
            height,
            xs,
            ys,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn canvas_size_follows_counts() {
        let layout = Layout::for_counts(4, 5);
        assert_eq!(layout.width, TOPIC_WIDTH + 5 * SCORE_WIDTH + LINE_WIDTH);
        assert_eq!(layout.height, 4 * ROW_HEIGHT + LINE_WIDTH);
    }

    #[test]
    fn boundaries_for_two_scores_one_topic() {
        let layout = Layout::for_counts(1, 2);
        assert_eq!(layout.xs, vec![0, 800, 900, 1000]);
        assert_eq!(layout.ys, vec![0, 60]);
        assert_eq!(layout.width, 1003);
        assert_eq!(layout.height, 63);
    }

    #[test]
    fn zero_topics_leaves_only_top_edge() {
        let layout = Layout::for_counts(0, 3);
        assert_eq!(layout.ys, vec![0]);
        assert_eq!(layout.height, LINE_WIDTH);
        assert_eq!(layout.xs.len(), 5);
    }

    #[test]
    fn zero_scores_still_bounds_topic_column() {
        let layout = Layout::for_counts(2, 0);
        assert_eq!(layout.xs, vec![0, 800]);
        assert_eq!(layout.width, TOPIC_WIDTH + LINE_WIDTH);
    }
}
