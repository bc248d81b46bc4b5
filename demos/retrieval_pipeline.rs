//! Chunk, Rank, Assemble
//!
//! The full path from a document to prompt context for one question.
//!
//! ```bash
//! RUST_LOG=chunkwise=debug cargo run --example retrieval_pipeline -- "what makes ATP?"
//! ```

use chunkwise::{
    assemble_context, chunk_indices, ChunkParams, Chunker, ParagraphChunker, RelevanceScorer,
    DEFAULT_MAX_RESULTS,
};
use tracing_subscriber::EnvFilter;

const DOCUMENT: &str = "\
Cellular respiration releases energy stored in glucose.

Glycolysis happens in the cytoplasm and splits glucose into two pyruvate molecules, yielding a small amount of ATP.

The citric acid cycle runs in the mitochondrial matrix. It oxidizes acetyl groups and loads electron carriers.

Oxidative phosphorylation uses the electron transport chain and ATP synthase to make most of the cell's ATP.

Photosynthesis, by contrast, captures light energy in chloroplasts.";

fn main() -> Result<(), chunkwise::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let query = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "How is ATP made?".to_string());

    let chunks = ParagraphChunker::new(ChunkParams::new(30, 5)).chunk(DOCUMENT);
    println!("{} chunks", chunks.len());

    let ranked = RelevanceScorer::new().find_relevant(&chunks, &query, DEFAULT_MAX_RESULTS)?;
    for r in &ranked {
        println!("{r}");
    }

    println!("\nchunks used: {:?}", chunk_indices(&ranked));
    println!("\n--- context for {query:?} ---\n{}", assemble_context(&ranked));
    Ok(())
}
