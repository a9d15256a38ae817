pub mod forum_store;
