pub mod forum_services;
