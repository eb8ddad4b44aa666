use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use sheetgrid::{recalculate, CellStorage};

/// A column of numbers with a running SUM beside every tenth row
fn populated(rows: u32) -> CellStorage {
    let mut cells = CellStorage::new();
    for row in 0..rows {
        cells.set_cell_value(row, 0, &(row as f64 * 1.5).to_string());
        if row % 10 == 9 {
            cells
                .get_cell(row, 1)
                .set_formula(format!("=SUM(A1:A{})", row + 1));
        }
    }
    cells
}

fn bench_recalculation(c: &mut Criterion) {
    let mut group = c.benchmark_group("recalculate");
    for rows in [100u32, 1_000, 5_000] {
        let cells = populated(rows);
        group.bench_with_input(BenchmarkId::from_parameter(rows), &cells, |b, cells| {
            b.iter_batched(
                || cells.clone(),
                |mut cells| black_box(recalculate(&mut cells)),
                criterion::BatchSize::LargeInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_recalculation);
criterion_main!(benches);
