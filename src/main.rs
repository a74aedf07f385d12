use log::{error, info};
use rand::distributions::Alphanumeric;
use rand::Rng;
use rusty_chains::logger::initialize_logger;
use rusty_chains::{hash_function_2, HashMap, MinHeap};
use std::time::Instant;

const CAPACITY: usize = 5000;
const SAMPLE_SIZE: usize = 100000;
const KEY_LENGTH: usize = 12;

fn random_key<R: Rng>(rng: &mut R) -> String {
    rng.sample_iter(&Alphanumeric)
        .take(KEY_LENGTH)
        .map(char::from)
        .collect()
}

fn main() {
    initialize_logger();

    let mut rng = rand::thread_rng();
    let samples: Vec<String> = (0..SAMPLE_SIZE).map(|_| random_key(&mut rng)).collect();

    let mut h: HashMap<usize> = HashMap::new(CAPACITY, hash_function_2);

    let now: Instant = Instant::now();
    for (i, key) in samples.iter().enumerate() {
        h.put(key.as_str(), i);
    }
    let elapsed: usize = now.elapsed().as_nanos() as usize;

    info!("Initial capacity {} actual capacity {}", CAPACITY, h.capacity());
    info!("Sampled keys {} distinct entries {}", SAMPLE_SIZE, h.size());
    info!("Load factor {} empty buckets {}", h.table_load(), h.empty_buckets());
    info!("Avg time to put {}", elapsed as f64 / SAMPLE_SIZE as f64);

    let now: Instant = Instant::now();
    h.resize_table(SAMPLE_SIZE * 2);
    let elapsed: usize = now.elapsed().as_nanos() as usize;

    info!("Load factor after resize {}", h.table_load());
    info!("Avg time to rehash an entry {}", elapsed as f64 / h.size() as f64);

    let now: Instant = Instant::now();
    for key in samples.iter() {
        if h.get(key).is_none() {
            panic!("Failed to get key {}", key);
        }
    }
    let elapsed: usize = now.elapsed().as_nanos() as usize;

    info!("Avg time to get {}", elapsed as f64 / SAMPLE_SIZE as f64);

    let now: Instant = Instant::now();
    for key in samples.iter() {
        h.remove(key);
    }
    let elapsed: usize = now.elapsed().as_nanos() as usize;

    info!("Entries left {}", h.size());
    info!("Avg time to remove {}", elapsed as f64 / SAMPLE_SIZE as f64);

    let values: Vec<u64> = (0..SAMPLE_SIZE).map(|_| rng.gen()).collect();

    let now: Instant = Instant::now();
    let mut heap: MinHeap<u64> = values.iter().copied().collect();
    let elapsed: usize = now.elapsed().as_nanos() as usize;

    info!("Avg time to add {}", elapsed as f64 / SAMPLE_SIZE as f64);

    let mut previous: u64 = 0;
    while let Ok(min) = heap.remove_min() {
        if min < previous {
            panic!("Heap yielded {} after {}", min, previous);
        }
        previous = min;
    }

    benchmarking::warm_up();
    let bench_result = benchmarking::measure_function(move |measurer| {
        let mut heap: MinHeap<u64> = MinHeap::new();
        measurer.measure(|| {
            heap.build_heap(&values);
        });
    });
    match bench_result {
        Ok(result) => info!("Time to build a heap of {} {:?}", SAMPLE_SIZE, result.elapsed()),
        Err(err) => error!("Failed to measure build_heap {:?}", err),
    }
}
