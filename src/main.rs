use colscan::prelude::*;
use colscan::fixed::Int32Processor;
use colscan::scalable::ScalableFilterProcessor;
use colscan::sentinel::INT_NULL;
use rand::random_range;
use rayon::prelude::*;

const PARTITION_ROWS: usize = 64 * 1024;

fn get_random_column(rows: usize) -> Vec<i32> {
    (0..rows)
        .map(|_| {
            // Roughly 1% NULLs.
            if random_range(0..100) == 0 {
                INT_NULL
            } else {
                random_range(-1_000_000..1_000_000)
            }
        })
        .collect()
}

fn count_hits<K: ScanKernel<Filter = i32>>(column: &[i32], threshold: i32) -> usize {
    column
        .par_chunks(PARTITION_ROWS)
        .map(|partition| {
            let kernel = K::default();
            let valid = kernel.scan_not_sentinel(partition, INT_NULL);
            let hits = kernel.scan(partition, CmpOp::Gt, threshold);
            valid.iter_ones().filter(|&row| hits[row]).count()
        })
        .sum()
}

fn main() {
    let n_rows: usize = std::env::args()
        .nth(1)
        .expect("Need number of rows")
        .parse()
        .unwrap();
    let threshold: i32 = std::env::args()
        .nth(2)
        .map(|t| t.parse().unwrap())
        .unwrap_or(0);

    let vector_length = VectorLength::from_env().expect("Invalid COLSCAN_VECTOR_BITS");
    rayon::ThreadPoolBuilder::new()
        .start_handler(move |_| vector_length.install())
        .build_global()
        .unwrap();

    let column = get_random_column(n_rows);

    let start_time = std::time::Instant::now();
    let fixed_hits = count_hits::<Fixed<Int32Processor>>(&column, threshold);
    println!(
        "Fixed-width (128-bit) rows > {}: {} \n elapsed time: {:?}",
        threshold,
        fixed_hits,
        start_time.elapsed()
    );

    let start_time = std::time::Instant::now();
    let scalable_hits = count_hits::<Scalable<ScalableFilterProcessor<i32>>>(&column, threshold);
    println!(
        "Scalable ({}-bit) rows > {}: {} \n elapsed time: {:?}",
        vector_length.bits(),
        threshold,
        scalable_hits,
        start_time.elapsed()
    );

    assert_eq!(fixed_hits, scalable_hits);
}
