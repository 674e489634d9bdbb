use compound::FinanceTracker;
use tempfile::TempDir;

/// Creates a tracker backed by a fresh directory. Keep the guard alive for the
/// duration of the test.
pub fn setup_tracker() -> (FinanceTracker, TempDir) {
    let temp = TempDir::new().expect("create temp dir");
    let tracker = FinanceTracker::open(temp.path().join("data").join("compound.json"));
    (tracker, temp)
}
