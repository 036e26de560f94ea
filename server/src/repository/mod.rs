//! Repository Layer
//!
//! Data access abstractions and implementations.

mod db;
mod pack_list_repo;
mod traits;


pub use db::{init_db, DbConn, IN_MEMORY};
pub use pack_list_repo::PackListRepository;
pub use traits::Repository;
