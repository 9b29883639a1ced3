pub mod roster_repo;
