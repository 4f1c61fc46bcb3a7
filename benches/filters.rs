use criterion::{criterion_group, criterion_main, Criterion};
use window_filtering::filter::{MeanFilter, MedianFilter, WindowSize};
use window_filtering::img::{Matrix2D, Pixel};
use window_filtering::processing::process_with_window;

fn create_grid(w: usize, h: usize) -> Matrix2D {
	let pixels = (0..w * h)
		.map(|i| Pixel::new((i % 0x01000000) as u32 | 0xFF000000))
		.collect();
	Matrix2D::from_pixels(w, h, pixels)
}

pub fn filter_mean(c: &mut Criterion) {
	let size = WindowSize::new(5).unwrap();
	let filter = MeanFilter::new(size);
	let grid = create_grid(1000, 1000);

	let mut group = c.benchmark_group("mean filter");
	group.sample_size(10);
	group.bench_function("mean filter img 1000x1000 window 5", move |b| {
		b.iter(|| {
			let _res = process_with_window(&grid, &filter);
		});
	});
	group.finish();
}

pub fn filter_median(c: &mut Criterion) {
	let size = WindowSize::new(5).unwrap();
	let filter = MedianFilter::new(size);
	let grid = create_grid(1000, 1000);

	let mut group = c.benchmark_group("median filter");
	group.sample_size(10);
	group.bench_function("median filter img 1000x1000 window 5", move |b| {
		b.iter(|| {
			let _res = process_with_window(&grid, &filter);
		});
	});
	group.finish();
}

criterion_group!(benches, filter_mean, filter_median);
criterion_main!(benches);
