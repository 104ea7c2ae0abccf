mod jsonl;

pub use jsonl::{flush_missions_to_jsonl, load_missions_from_jsonl};
