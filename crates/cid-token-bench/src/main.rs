//! Throughput benchmark for the identifier codec.
//!
//! Builds a corpus of random token ids sized like real pinned identifiers,
//! then times the encode, decode, and format passes separately.

use std::time::Instant;

use cid_token::{format_token_id, identifier_to_token_id, token_id_to_identifier, TokenId};
use rand::Rng;

const CORPUS_SIZE: usize = 100_000;

/// Raw multihash width of a legacy identifier (2 header + 32 digest bytes).
const MAX_ID_BYTES: usize = 34;

fn main() {
    let corpus_size = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(CORPUS_SIZE);

    let mut rng = rand::rng();

    // Build corpus
    let generate_start = Instant::now();
    let mut ids = Vec::with_capacity(corpus_size);
    for _ in 0..corpus_size {
        let len = rng.random_range(1..=MAX_ID_BYTES);
        let mut bytes = vec![0u8; len];
        rng.fill(bytes.as_mut_slice());
        ids.push(TokenId::from_bytes_be(&bytes));
    }
    let generate_time = generate_start.elapsed();
    println!("Generated {} token ids in {:?}", ids.len(), generate_time);

    // Encode pass
    let encode_start = Instant::now();
    let identifiers: Vec<String> = ids.iter().map(token_id_to_identifier).collect();
    let encode_time = encode_start.elapsed();
    let identifier_bytes: usize = identifiers.iter().map(String::len).sum();

    println!(
        "\nEncode: {} identifiers ({} bytes) in {:?}",
        identifiers.len(),
        identifier_bytes,
        encode_time
    );
    println!(
        "  Throughput: {:.2} M ids/s",
        ids.len() as f64 / encode_time.as_secs_f64() / 1_000_000.0
    );

    // Decode pass
    let decode_start = Instant::now();
    let mut decoded = Vec::with_capacity(identifiers.len());
    for identifier in &identifiers {
        decoded.push(identifier_to_token_id(identifier).expect("corpus identifiers decode"));
    }
    let decode_time = decode_start.elapsed();

    println!("\nDecode: {} identifiers in {:?}", decoded.len(), decode_time);
    println!(
        "  Throughput: {:.2} M ids/s",
        decoded.len() as f64 / decode_time.as_secs_f64() / 1_000_000.0
    );

    // Verify round-trip
    assert_eq!(decoded, ids);

    // Format pass
    let format_start = Instant::now();
    let labels: Vec<String> = ids.iter().map(format_token_id).collect();
    let format_time = format_start.elapsed();

    println!("\nFormat: {} labels in {:?}", labels.len(), format_time);
    println!(
        "  Throughput: {:.2} M ids/s",
        labels.len() as f64 / format_time.as_secs_f64() / 1_000_000.0
    );

    // Summary
    let truncated = labels.iter().filter(|label| label.contains("...")).count();
    println!("\n=== Summary ===");
    println!("Token ids: {}", ids.len());
    println!(
        "Identifier bytes: {} ({:.1} avg per id)",
        identifier_bytes,
        identifier_bytes as f64 / ids.len() as f64
    );
    println!(
        "Truncated labels: {} ({:.1}%)",
        truncated,
        100.0 * truncated as f64 / labels.len() as f64
    );
    println!(
        "Total round-trip time: {:?}",
        encode_time + decode_time + format_time
    );
}
