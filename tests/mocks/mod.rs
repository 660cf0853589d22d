mod mock_candidate_repository;

pub use mock_candidate_repository::MockCandidateRepository;
