//! Character grid built from a sampled image.

use super::charset::LuminanceRamp;
use super::mapping::map_pixel;
use super::sampler::SampledImage;

/// Rectangular character matrix addressed `[column][row]`.
///
/// The shape always matches the sampled image it was built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AsciiGrid {
    columns: Vec<Vec<char>>,
    height: usize,
}

impl AsciiGrid {
    /// Map every sampled pixel to a ramp character, column by column.
    pub fn build(image: &SampledImage, ramp: &LuminanceRamp) -> Self {
        let width = image.width();
        let height = image.height();
        let columns = (0..width)
            .map(|x| {
                (0..height)
                    .map(|y| {
                        let [r, g, b] = image.rgb(x, y);
                        map_pixel(r, g, b, ramp)
                    })
                    .collect()
            })
            .collect();
        Self {
            columns,
            height: height as usize,
        }
    }

    /// Build a grid from rows of text. Short rows are padded with spaces.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Self {
        let height = rows.len();
        let width = rows
            .iter()
            .map(|r| r.as_ref().chars().count())
            .max()
            .unwrap_or(0);
        let mut columns = vec![vec![' '; height]; width];
        for (y, row) in rows.iter().enumerate() {
            for (x, c) in row.as_ref().chars().enumerate() {
                columns[x][y] = c;
            }
        }
        Self { columns, height }
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.columns.len()
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.height
    }

    pub fn get(&self, x: usize, y: usize) -> char {
        self.columns[x][y]
    }

    /// Rows top to bottom, each left to right.
    pub fn rows(&self) -> impl Iterator<Item = impl Iterator<Item = char> + '_> + '_ {
        (0..self.height).map(move |y| self.columns.iter().map(move |col| col[y]))
    }

    /// Every cell that draws something, as `(column, row, char)`, row-major.
    pub fn inked_cells(&self) -> impl Iterator<Item = (usize, usize, char)> + '_ {
        (0..self.height).flat_map(move |y| {
            self.columns
                .iter()
                .enumerate()
                .map(move |(x, col)| (x, y, col[y]))
                .filter(|&(_, _, c)| c != ' ')
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rows_pads_short_rows() {
        let grid = AsciiGrid::from_rows(&["ab", "c"]);
        assert_eq!((grid.width(), grid.height()), (2, 2));
        assert_eq!(grid.get(1, 1), ' ');
        assert_eq!(grid.get(0, 1), 'c');
    }

    #[test]
    fn test_rows_transpose() {
        let grid = AsciiGrid::from_rows(&["ab", "cd"]);
        let rows: Vec<String> = grid.rows().map(|r| r.collect()).collect();
        assert_eq!(rows, vec!["ab", "cd"]);
    }

    #[test]
    fn test_inked_cells_skip_blanks() {
        let grid = AsciiGrid::from_rows(&["a ", " b"]);
        let cells: Vec<_> = grid.inked_cells().collect();
        assert_eq!(cells, vec![(0, 0, 'a'), (1, 1, 'b')]);
    }
}
