// Corpus loading — turns text documents into per-document term counts.

pub mod counts;
pub mod loader;
pub mod stemmer;
pub mod stoplist;
pub mod tokenizer;
