//! Basic Text Chunking
//!
//! The minimal example: chunk a document for retrieval.
//!
//! ```bash
//! cargo run --example 01_basic_chunking
//! ```

use chunkwise::chunk_text;

fn main() {
    let document = "Machine learning models learn patterns from data.\n\n\
        They generalize these patterns to make predictions. \
        This is fundamentally different from traditional programming.\n\n\
        Deep learning extends this with multiple hidden layers. \
        Each layer learns increasingly abstract representations.";

    // 16 words per chunk, 4 words carried across each boundary
    let chunks = chunk_text(document, 16, 4);

    println!("Document: {} words", document.split_whitespace().count());
    println!("Chunks: {}\n", chunks.len());

    for chunk in &chunks {
        println!("[{}] {} words: {:?}", chunk.chunk_index, chunk.word_count(), chunk.content);
    }
}
