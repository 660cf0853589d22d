mod in_memory;
mod traits;

pub use in_memory::InMemoryCandidateRepository;
pub use traits::CandidateRepository;
