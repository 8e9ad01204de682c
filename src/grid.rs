// Grid building blocks shared by the solver: dimensions, neighbor
// enumeration, position search, the Manhattan metric, and rendering.

pub type Grid = Vec<Vec<i32>>;
pub type Pos = (usize, usize);

pub fn grid_dimensions(grid: &Grid) -> (usize, usize) {
    if grid.is_empty() {
        return (0, 0);
    }
    (grid.len(), grid[0].len())
}

/// Allocate a `rows` x `cols` grid with every cell set to `value`.
pub fn filled(rows: usize, cols: usize, value: i32) -> Grid {
    vec![vec![value; cols]; rows]
}

/// In-bounds axis-aligned neighbors of `(r, c)`, always yielded in the
/// fixed order up, down, left, right.
pub fn neighbors4((r, c): Pos, rows: usize, cols: usize) -> impl Iterator<Item = Pos> {
    const OFFSETS: [(i32, i32); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
    OFFSETS.into_iter().filter_map(move |(dr, dc)| {
        let nr = r as i32 + dr;
        let nc = c as i32 + dc;
        if nr >= 0 && nr < rows as i32 && nc >= 0 && nc < cols as i32 {
            Some((nr as usize, nc as usize))
        } else {
            None
        }
    })
}

/// Every position holding `value`, in row-major scan order.
pub fn find_positions(grid: &Grid, value: i32) -> Vec<Pos> {
    let mut positions = Vec::new();
    for (r, row) in grid.iter().enumerate() {
        for (c, &cell) in row.iter().enumerate() {
            if cell == value {
                positions.push((r, c));
            }
        }
    }
    positions
}

pub fn manhattan(a: Pos, b: Pos) -> usize {
    a.0.abs_diff(b.0) + a.1.abs_diff(b.1)
}

pub fn grid_to_string(grid: &Grid) -> String {
    grid.iter()
        .map(|row| row.iter().map(|c| c.to_string()).collect::<Vec<_>>().join(" "))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neighbors_interior_order() {
        let result: Vec<Pos> = neighbors4((1, 1), 3, 3).collect();
        assert_eq!(result, vec![(0, 1), (2, 1), (1, 0), (1, 2)]);
    }

    #[test]
    fn neighbors_clip_at_corners() {
        let top_left: Vec<Pos> = neighbors4((0, 0), 3, 3).collect();
        assert_eq!(top_left, vec![(1, 0), (0, 1)]);

        let bottom_right: Vec<Pos> = neighbors4((2, 2), 3, 3).collect();
        assert_eq!(bottom_right, vec![(1, 2), (2, 1)]);
    }

    #[test]
    fn neighbors_single_cell() {
        assert_eq!(neighbors4((0, 0), 1, 1).count(), 0);
    }

    #[test]
    fn find_positions_row_major() {
        let grid = vec![
            vec![0, 1, 0],
            vec![1, 0, 1],
        ];
        assert_eq!(find_positions(&grid, 1), vec![(0, 1), (1, 0), (1, 2)]);
        assert!(find_positions(&grid, 7).is_empty());
    }

    #[test]
    fn manhattan_metric() {
        assert_eq!(manhattan((0, 0), (0, 0)), 0);
        assert_eq!(manhattan((2, 3), (5, 1)), 5);
        assert_eq!(manhattan((5, 1), (2, 3)), 5);
    }

    #[test]
    fn render_rows_space_joined() {
        let grid = vec![
            vec![2, 1, 2],
            vec![1, 0, 1],
        ];
        assert_eq!(grid_to_string(&grid), "2 1 2\n1 0 1");
    }
}
