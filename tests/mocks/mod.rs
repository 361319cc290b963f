mod mock_snapshot_repository;

#[allow(unused_imports)]
pub use mock_snapshot_repository::MockSnapshotRepository;
