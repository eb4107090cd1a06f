use docopt::Docopt;
use error_chain::ChainedError;
use log::{debug, info};
use mazes::{
    cell_info::CellInfo,
    cells::Cartesian2DCoordinate,
    generators::{self, Algorithm},
    grid::Grid,
};
use serde_derive::Deserialize;
use std::{
    fmt,
    fs::File,
    io,
    io::prelude::*,
    process,
};

const USAGE: &str = "Mazes

Usage:
    mazes_driver -h | --help
    mazes_driver (binary-tree|sidewinder|depth-first-search|prims|kruskals|recursive-division|all) [--width=<w>] [--height=<h>] [--seed=<s>] [--start-x=<x> --start-y=<y>] [--save-edges=<path>]

Options:
    -h --help              Show this screen.
    --width=<w>            The grid width in a w*h grid [default: 20].
    --height=<h>           The grid height in a w*h grid [default: 20].
    --seed=<s>             Seed of the random source, the same seed always gives the same maze [default: 0].
    --start-x=<x>          x coordinate of the cell the maze grows from (depth-first-search and prims only).
    --start-y=<y>          y coordinate of the cell the maze grows from (depth-first-search and prims only).
    --save-edges=<path>    Serialize the maze to a text file: each line is a pair of numbers. Line 1: n(#vertices) m(#edges). Line 2+ edge between vertices. Uses 1-based vertex indices. With 'all' the algorithm name is appended to the path.
";
#[derive(Debug, Deserialize)]
struct MazeArgs {
    cmd_binary_tree: bool,
    cmd_sidewinder: bool,
    cmd_depth_first_search: bool,
    cmd_prims: bool,
    cmd_kruskals: bool,
    cmd_recursive_division: bool,
    cmd_all: bool,
    flag_width: u32,
    flag_height: u32,
    flag_seed: u32,
    flag_start_x: Option<u32>,
    flag_start_y: Option<u32>,
    flag_save_edges: String,
}

impl MazeArgs {
    fn algorithms(&self) -> Vec<Algorithm> {
        if self.cmd_all {
            return Algorithm::ALL.to_vec();
        }
        let chosen = [(self.cmd_binary_tree, Algorithm::BinaryTree),
                      (self.cmd_sidewinder, Algorithm::Sidewinder),
                      (self.cmd_depth_first_search, Algorithm::DepthFirstSearch),
                      (self.cmd_prims, Algorithm::Prims),
                      (self.cmd_kruskals, Algorithm::Kruskals),
                      (self.cmd_recursive_division, Algorithm::RecursiveDivision)];
        chosen.iter()
              .filter(|&&(is_chosen, _)| is_chosen)
              .map(|&(_, algorithm)| algorithm)
              .collect()
    }

    fn start_point(&self) -> Option<Cartesian2DCoordinate> {
        match (self.flag_start_x, self.flag_start_y) {
            (Some(x), Some(y)) => Some(Cartesian2DCoordinate::new(x, y)),
            _ => None,
        }
    }
}

mod errors {
    // Result is a typedef of std `Result` with the error type our own `Error`
    // ResultExt adds the `chain_err` trait method.
    use error_chain::*;
    error_chain! {

        foreign_links {
            Io(::std::io::Error);
        }

        errors {
            MazeNotGenerated(algorithm: String, width: u32, height: u32) {
                description("no maze generated")
                display("{} cannot generate a {}x{} maze, check the dimensions and start point",
                        algorithm, width, height)
            }
        }
    }
}
use crate::errors::*;

fn main() {
    env_logger::init();

    // Usage errors and --help print the usage text and exit.
    let args: MazeArgs = Docopt::new(USAGE)
        .and_then(|d| d.deserialize())
        .unwrap_or_else(|e| e.exit());
    debug!("{:?}", args);

    if let Err(e) = run(&args) {
        eprintln!("{}", e.display_chain());
        process::exit(1);
    }
}

fn run(args: &MazeArgs) -> Result<()> {
    for algorithm in args.algorithms() {
        let summary = generate_maze(algorithm, args)?;
        println!("{}", summary);
    }

    Ok(())
}

/// What the driver reports about one generated maze.
struct MazeSummary {
    algorithm: Algorithm,
    width: u32,
    height: u32,
    seed: u32,
    passages: usize,
    dead_ends: usize,
    is_perfect: bool,
    max_root_distance: Option<u64>,
}

impl MazeSummary {
    fn new<Info: CellInfo>(algorithm: Algorithm, seed: u32, grid: &Grid<Info>) -> MazeSummary {
        MazeSummary {
            algorithm,
            width: grid.width(),
            height: grid.height(),
            seed,
            passages: grid.links_count(),
            dead_ends: grid.dead_ends().len(),
            is_perfect: grid.is_perfect_maze(),
            max_root_distance: None,
        }
    }
}

impl fmt::Display for MazeSummary {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{}", self.algorithm)?;
        writeln!(f, "  dimensions: {}x{}", self.width, self.height)?;
        writeln!(f, "  seed: {}", self.seed)?;
        writeln!(f, "  passages: {}", self.passages)?;
        writeln!(f, "  dead ends: {}", self.dead_ends)?;
        write!(f, "  perfect maze: {}", self.is_perfect)?;
        if let Some(distance) = self.max_root_distance {
            write!(f, "\n  max distance from start: {}", distance)?;
        }
        Ok(())
    }
}

fn generate_maze(algorithm: Algorithm, args: &MazeArgs) -> Result<MazeSummary> {
    let (width, height, seed) = (args.flag_width, args.flag_height, args.flag_seed);
    let start = args.start_point();
    if start.is_some() && !algorithm.uses_start_point() {
        info!("{} ignores the start point", algorithm);
    }

    let not_generated = || ErrorKind::MazeNotGenerated(algorithm.to_string(), width, height);

    let summary = match algorithm {
        Algorithm::BinaryTree => {
            let grid = generators::binary_tree(width, height, seed).ok_or_else(not_generated)?;
            finish_maze(algorithm, &grid, args)?
        }
        Algorithm::Sidewinder => {
            let grid = generators::sidewinder(width, height, seed).ok_or_else(not_generated)?;
            finish_maze(algorithm, &grid, args)?
        }
        Algorithm::DepthFirstSearch => {
            let grid = generators::depth_first_search(width, height, start, seed)
                .ok_or_else(not_generated)?;
            let max_distance = grid.iter().map(|coord| grid[coord].root_distance).max();
            MazeSummary { max_root_distance: max_distance, ..finish_maze(algorithm, &grid, args)? }
        }
        Algorithm::Prims => {
            let grid = generators::prims(width, height, start, seed).ok_or_else(not_generated)?;
            let max_distance = grid.iter().map(|coord| grid[coord].root_distance).max();
            MazeSummary { max_root_distance: max_distance, ..finish_maze(algorithm, &grid, args)? }
        }
        Algorithm::Kruskals => {
            let grid = generators::kruskals(width, height, seed).ok_or_else(not_generated)?;
            finish_maze(algorithm, &grid, args)?
        }
        Algorithm::RecursiveDivision => {
            let grid = generators::recursive_division(width, height, seed)
                .ok_or_else(not_generated)?;
            finish_maze(algorithm, &grid, args)?
        }
    };

    Ok(summary)
}

fn finish_maze<Info: CellInfo>(algorithm: Algorithm,
                               grid: &Grid<Info>,
                               args: &MazeArgs)
                               -> Result<MazeSummary> {
    if !args.flag_save_edges.is_empty() {
        let file_path = if args.cmd_all {
            format!("{}.{}", args.flag_save_edges, algorithm)
        } else {
            args.flag_save_edges.clone()
        };
        save_maze_graph(grid, &file_path)?;
    }

    Ok(MazeSummary::new(algorithm, args.flag_seed, grid))
}

fn write_text_to_file(data: &str, file_name: &str) -> io::Result<()> {
    let mut f = File::create(file_name)?;
    f.write_all(data.as_bytes())?;
    Ok(())
}

fn save_maze_graph<Info: CellInfo>(maze_grid: &Grid<Info>, file_path: &str) -> Result<()> {

    let mut graph_data = String::new();
    graph_data.push_str(&format!("{} {}\n", maze_grid.size(), maze_grid.links_count()));

    for (src, dst) in maze_grid.sorted_links() {
        let index_a = maze_grid.grid_coordinate_to_index(src)
                               .ok_or("Links iter should give valid coordinate")?;
        let index_b = maze_grid.grid_coordinate_to_index(dst)
                               .ok_or("Links iter should give valid coordinate")?;
        graph_data.push_str(&format!("{} {}\n", index_a + 1, index_b + 1));
    }

    write_text_to_file(&graph_data, file_path)
        .chain_err(|| format!("Failed to write maze graph to text file {}", file_path))?;
    info!("Saved maze graph to {}", file_path);

    Ok(())
}

#[cfg(test)]
mod tests {

    use super::*;

    fn parse(argv: &[&str]) -> ::std::result::Result<MazeArgs, docopt::Error> {
        Docopt::new(USAGE).and_then(|d| d.argv(argv.iter()).deserialize())
    }

    #[test]
    fn defaults() {
        let args = parse(&["mazes_driver", "all"]).unwrap();
        assert_eq!(args.algorithms(), Algorithm::ALL.to_vec());
        assert_eq!((args.flag_width, args.flag_height, args.flag_seed), (20, 20, 0));
        assert_eq!(args.start_point(), None);
    }

    #[test]
    fn unknown_commands_are_usage_errors() {
        let parsed = parse(&["mazes_driver", "aldous-broder"]);
        assert!(parsed.map(|_| ()).err().map_or(false, |e| e.fatal()));
    }

    #[test]
    fn invalid_configurations_are_reported() {
        let args = parse(&["mazes_driver", "prims", "--width=0"]).unwrap();
        match run(&args) {
            Err(e) => {
                match *e.kind() {
                    ErrorKind::MazeNotGenerated(ref name, width, height) => {
                        assert_eq!((name.as_str(), width, height), ("prims", 0, 20));
                    }
                    _ => panic!("unexpected error {}", e),
                }
                let report = e.display_chain().to_string();
                assert!(report.contains("prims cannot generate a 0x20 maze"), "{}", report);
            }
            Ok(_) => panic!("a zero width maze was generated"),
        }

        let args = parse(&["mazes_driver", "depth-first-search", "--start-x=3", "--start-y=9"])
            .unwrap();
        assert_eq!(args.start_point(), Some(Cartesian2DCoordinate::new(3, 9)));
        assert!(run(&args).is_ok());

        let args = parse(&["mazes_driver", "depth-first-search", "--start-x=20", "--start-y=0"])
            .unwrap();
        assert!(run(&args).is_err());
    }

    #[test]
    fn summaries_describe_the_maze() {
        let args = parse(&["mazes_driver", "kruskals", "--width=4", "--height=3", "--seed=5"])
            .unwrap();
        let summary = generate_maze(Algorithm::Kruskals, &args).unwrap();
        assert_eq!((summary.width, summary.height, summary.passages), (4, 3, 11));
        assert!(summary.is_perfect);
        assert_eq!(summary.max_root_distance, None);

        let summary = generate_maze(Algorithm::Prims, &args).unwrap();
        assert!(summary.max_root_distance.is_some());
        assert!(summary.to_string().starts_with("prims\n  dimensions: 4x3"));
    }
}
