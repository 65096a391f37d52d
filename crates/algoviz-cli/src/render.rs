//! Plain-text rendering of steps for the terminal.

use algoviz_core::{DpTable, Frame, Step};

/// Header line plus the status, continuation lines indented.
pub fn step_line(index: usize, total: Option<usize>, step: &Step<Frame>) -> String {
    let counter = match total {
        Some(total) => format!("[{}/{}]", index + 1, total),
        None => format!("[{}]", index + 1),
    };
    let marker = if step.is_solution() { " *" } else { "" };
    let status = step.status.replace('\n', "\n    ");
    format!("{counter}{marker} {status}")
}

/// A compact picture of the frame, one string per line.
pub fn frame_lines(frame: &Frame) -> Vec<String> {
    match frame {
        Frame::Array(f) => vec![format!("{:?}", f.array)],
        Frame::Graph(f) => {
            let mut lines = Vec::new();
            if !f.visit_order.is_empty() {
                lines.push(format!("visited: {}", join(f.visit_order.iter())));
            }
            if !f.distances.is_empty() {
                lines.push(format!("distances: {}", join(f.distances.iter())));
            }
            if let Some(total) = f.total_weight {
                lines.push(format!("total weight: {total}"));
            }
            lines
        }
        Frame::Tree(f) => {
            let mut lines = vec![format!("in-order: {:?}", f.tree.in_order())];
            if !f.output.is_empty() {
                lines.push(format!("output: {:?}", f.output));
            }
            lines
        }
        Frame::Dp(f) => match &f.table {
            DpTable::Linear(cells) => vec![cells_line(cells)],
            DpTable::Grid(rows) => rows.iter().map(|row| cells_line(row)).collect(),
            DpTable::Keyed(memo) => vec![memo
                .iter()
                .map(|(k, v)| format!("{k}:{v}"))
                .collect::<Vec<_>>()
                .join(" ")],
        },
        Frame::Board(f) => f
            .cells
            .iter()
            .map(|row| {
                row.iter()
                    .map(|&c| if c == 0 { ".".to_string() } else { c.to_string() })
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect(),
        Frame::Maze(f) => f
            .grid
            .iter()
            .enumerate()
            .map(|(r, row)| {
                row.iter()
                    .enumerate()
                    .map(|(c, &cell)| {
                        let on_path = f.path.iter().any(|p| p.row == r && p.col == c);
                        match (cell, on_path) {
                            (_, true) => '*',
                            (0, _) => '.',
                            _ => '#',
                        }
                    })
                    .collect::<String>()
            })
            .collect(),
        Frame::Subset(f) => {
            let chosen: Vec<i64> = f.chosen.iter().filter_map(|&i| f.nums.get(i).copied()).collect();
            vec![format!("chosen {:?} sum {} / {}", chosen, f.sum, f.target)]
        }
    }
}

fn cells_line(cells: &[Option<i64>]) -> String {
    cells
        .iter()
        .map(|c| c.map_or_else(|| "-".to_string(), |v| v.to_string()))
        .collect::<Vec<_>>()
        .join(" ")
}

fn join<T: std::fmt::Display>(items: impl Iterator<Item = T>) -> String {
    items.map(|i| i.to_string()).collect::<Vec<_>>().join(" ")
}
