use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use elcano_planner::constants::MAX_JUNCTIONS;
use elcano_planner::cursor::ByteCursor;
use elcano_planner::grammar::parse_junctions;
use elcano_planner::{Junction, JunctionGraph, PathPlanner, Position2D, SearchConfig};
use std::hint::black_box;

const COLUMNS: usize = 6;
const ROWS: usize = 5;
const SPACING_MM: i64 = 10_000;

/// Full-capacity 6x5 grid, each junction linked east, north, west, south
fn grid_junctions() -> Vec<Junction> {
    let index = |col: usize, row: usize| row * COLUMNS + col;

    let mut nodes = Vec::with_capacity(COLUMNS * ROWS);
    for row in 0..ROWS {
        for col in 0..COLUMNS {
            let neighbours = [
                (col + 1 < COLUMNS).then(|| index(col + 1, row)),
                (row + 1 < ROWS).then(|| index(col, row + 1)),
                col.checked_sub(1).map(|c| index(c, row)),
                row.checked_sub(1).map(|r| index(col, r)),
            ];
            nodes.push(Junction::new(
                Position2D::new(col as i64 * SPACING_MM, row as i64 * SPACING_MM),
                neighbours,
                [SPACING_MM as u64; 4],
            ));
        }
    }
    nodes
}

fn grid_text(nodes: &[Junction]) -> String {
    nodes
        .iter()
        .map(|j| {
            let slots: Vec<String> = j
                .destinations
                .iter()
                .map(|d| d.map_or_else(|| "END".to_string(), |i| i.to_string()))
                .collect();
            format!(
                "{}, {}, {}, {}, {}, {}, {}, {}, {}, {}\n",
                j.position.east_mm,
                j.position.north_mm,
                slots[0],
                slots[1],
                slots[2],
                slots[3],
                j.distances_mm[0],
                j.distances_mm[1],
                j.distances_mm[2],
                j.distances_mm[3]
            )
        })
        .collect()
}

fn bench_find_path(c: &mut Criterion) {
    let graph = match JunctionGraph::new(grid_junctions()) {
        Ok(graph) => graph,
        Err(e) => panic!("benchmark grid is invalid: {e}"),
    };
    let goal = graph.len() - 1;

    let mut group = c.benchmark_group("find_path");
    for edge_slots in [3, 4] {
        let planner = PathPlanner::new(&graph, SearchConfig::default().with_edge_slots(edge_slots));
        group.bench_with_input(
            BenchmarkId::new("corner_to_corner", edge_slots),
            &planner,
            |b, planner| b.iter(|| planner.find_path(black_box(0), black_box(goal))),
        );
    }
    group.finish();
}

fn bench_parse_junctions(c: &mut Criterion) {
    let text = grid_text(&grid_junctions());

    let mut group = c.benchmark_group("parse_junctions");
    group.throughput(Throughput::Bytes(text.len() as u64));
    group.bench_function("full_capacity", |b| {
        b.iter(|| {
            let mut cursor = ByteCursor::from(black_box(text.as_str()));
            parse_junctions(&mut cursor, MAX_JUNCTIONS)
        })
    });
    group.finish();
}

criterion_group!(benches, bench_find_path, bench_parse_junctions);
criterion_main!(benches);
