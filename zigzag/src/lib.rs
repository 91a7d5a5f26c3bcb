use anyhow::Context;
use clap::{Parser, ValueEnum};
use common::{FirstStep, Grid};

#[derive(Parser, Debug, Clone)]
#[command(author, version, about = "Print the cells of a grid in diagonal zigzag order", long_about = None)]
pub struct Args {
    /// Number of columns
    #[arg(default_value_t = 5, allow_negative_numbers = true)]
    pub width: i64,

    /// Number of rows
    #[arg(default_value_t = 4, allow_negative_numbers = true)]
    pub height: i64,

    #[arg(short, long, value_enum, default_value_t = Format::List)]
    pub format: Format,

    /// Neighbour of the top left cell that is visited second
    #[arg(short, long, value_enum, default_value_t = Start::Right)]
    pub start: Start,
}

#[derive(ValueEnum, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// Values in visit order, as a bracketed list
    #[default]
    List,
    /// Visit order of each cell, laid out as the grid
    Grid,
    /// One `x,y` pair per line, in visit order
    Cells,
}

#[derive(ValueEnum, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Start {
    #[default]
    Right,
    Down,
}

impl From<Start> for FirstStep {
    fn from(value: Start) -> Self {
        match value {
            Start::Right => FirstStep::Right,
            Start::Down => FirstStep::Down,
        }
    }
}

pub fn run(args: &Args) -> anyhow::Result<String> {
    let grid = Grid::try_new(args.width, args.height).context("Invalid grid dimensions")?;

    log::info!(
        "Scanning {}x{} grid, starting {:?}, as {:?}",
        grid.width(),
        grid.height(),
        args.start,
        args.format
    );
    log::debug!("{} cells", grid.cell_count());

    Ok(render(grid, args.start.into(), args.format))
}

pub fn render(grid: Grid, first_step: FirstStep, format: Format) -> String {
    match format {
        Format::List => format_list(grid, first_step),
        Format::Grid => format_grid(grid, first_step),
        Format::Cells => format_cells(grid, first_step),
    }
}

/// e.g. `[1, 2, 6, 11]`
pub fn format_list(grid: Grid, first_step: FirstStep) -> String {
    let values: Vec<u64> = grid.zigzag_from(first_step).values().collect();

    format!("{values:?}")
}

/// Each cell shows when it was visited, counting from 1, right aligned in columns.
pub fn format_grid(grid: Grid, first_step: FirstStep) -> String {
    if grid.is_empty() {
        return String::new();
    }

    // Indexed by value - 1, i.e. row major
    let mut order = vec![0u64; grid.cell_count() as usize];

    for (i, cell) in grid.zigzag_from(first_step).enumerate() {
        order[(grid.value_of(cell) - 1) as usize] = i as u64 + 1;
    }

    let pad = grid.cell_count().to_string().len();

    order
        .chunks(grid.width() as usize)
        .map(|row| {
            row.iter()
                .map(|n| format!("{n:>pad$}"))
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn format_cells(grid: Grid, first_step: FirstStep) -> String {
    grid.zigzag_from(first_step)
        .map(|cell| format!("{},{}", cell.x, cell.y))
        .collect::<Vec<_>>()
        .join("\n")
}
