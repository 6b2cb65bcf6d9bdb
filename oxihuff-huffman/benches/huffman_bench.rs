//! Benchmarks for Huffman compression performance.

use oxihuff_huffman::{compress, decompress};

fn main() {
    let test_cases = vec![
        ("small_text", generate_text_like(1024)),
        ("medium_text", generate_text_like(64 * 1024)),
        ("large_text", generate_text_like(256 * 1024)),
        ("small_skewed", generate_skewed(1024)),
        ("medium_skewed", generate_skewed(64 * 1024)),
        ("large_skewed", generate_skewed(256 * 1024)),
        ("uniform_bytes", generate_uniform(64 * 1024)),
    ];

    println!("Huffman Compression Benchmarks");
    println!("==============================\n");

    for (name, data) in &test_cases {
        let start = std::time::Instant::now();
        let encoded = compress(data).unwrap();
        let compress_elapsed = start.elapsed();

        let start = std::time::Instant::now();
        let decoded = decompress(&encoded.payload, &encoded.tree).unwrap();
        let decompress_elapsed = start.elapsed();
        assert_eq!(&decoded, data);

        let mib = data.len() as f64 / 1024.0 / 1024.0;
        let ratio = data.len() as f64 / (encoded.payload.len() + encoded.tree.len()) as f64;
        println!(
            "{:14} ({:7} bytes): compress {:7.2} MB/s, decompress {:7.2} MB/s, {:.2}x ratio",
            name,
            data.len(),
            mib / compress_elapsed.as_secs_f64(),
            mib / decompress_elapsed.as_secs_f64(),
            ratio
        );
    }
}

fn generate_text_like(size: usize) -> Vec<u8> {
    let sample = b"the quick brown fox jumps over the lazy dog. ";
    sample.iter().cycle().take(size).copied().collect()
}

fn generate_skewed(size: usize) -> Vec<u8> {
    (0..size)
        .map(|i| if i % 10 == 0 { (i % 251) as u8 } else { b'e' })
        .collect()
}

fn generate_uniform(size: usize) -> Vec<u8> {
    (0..size).map(|i| (i * 167 % 256) as u8).collect()
}
