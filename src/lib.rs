//! Duplicate detection over local and remote value sequences.

pub mod dupes;
pub mod remote;

pub use dupes::{
    DuplicateProbe, has_duplicates, has_duplicates_sort_copy, has_duplicates_sort_in_place,
};
pub use dupes_client::{RemoteFetchError, RemoteSource};
pub use remote::has_duplicates_remote;
