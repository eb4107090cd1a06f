use criterion::{criterion_group, criterion_main, Criterion};
use mazes::cell_info::BaseCellInfo;
use mazes::cells::Cartesian2DCoordinate;
use mazes::generators;
use mazes::grid::Grid;
use mazes::units::{ColumnLength, RowLength};

fn bench_grid_11(c: &mut Criterion) {
    c.bench_function("grid_11", |b| {
        b.iter(|| Grid::<BaseCellInfo>::new(RowLength(11), ColumnLength(11)))
    });
}

fn bench_grid_500(c: &mut Criterion) {
    c.bench_function("grid_500", |b| {
        b.iter(|| Grid::<BaseCellInfo>::new(RowLength(500), ColumnLength(500)))
    });
}

fn bench_fully_connected_grid_128(c: &mut Criterion) {
    c.bench_function("fully_connected_grid_128", |b| {
        b.iter(|| Grid::<BaseCellInfo>::fully_connected(RowLength(128), ColumnLength(128)))
    });
}

fn bench_index_to_gridcoordinate(c: &mut Criterion) {
    let g = Grid::<BaseCellInfo>::new(RowLength(11), ColumnLength(11));
    let dims = *g.dimensions();
    c.bench_function("index_to_gridcoordinate", move |b| {
        b.iter(|| Cartesian2DCoordinate::from_row_major_index(93, &dims))
    });
}

fn bench_neighbours_corner_of_grid(c: &mut Criterion) {
    let g = Grid::<BaseCellInfo>::new(RowLength(11), ColumnLength(11));
    let corner = Cartesian2DCoordinate::new(0, 0);
    c.bench_function("neighbours_corner_of_grid", move |b| b.iter(|| g.neighbours(corner)));
}

fn bench_neighbours_middle_of_grid(c: &mut Criterion) {
    let g = Grid::<BaseCellInfo>::new(RowLength(11), ColumnLength(11));
    let mid = Cartesian2DCoordinate::new(5, 5);
    c.bench_function("neighbours_middle_of_grid", move |b| b.iter(|| g.neighbours(mid)));
}

fn bench_is_perfect_maze_128(c: &mut Criterion) {
    let g = generators::kruskals(128, 128, 3);
    c.bench_function("is_perfect_maze_128", move |b| {
        b.iter(|| g.as_ref().map(|maze| maze.is_perfect_maze()))
    });
}

criterion_group!(
    benches,
    bench_grid_11,
    bench_grid_500,
    bench_fully_connected_grid_128,
    bench_index_to_gridcoordinate,
    bench_neighbours_corner_of_grid,
    bench_neighbours_middle_of_grid,
    bench_is_perfect_maze_128
);
criterion_main!(benches);
