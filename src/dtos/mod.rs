pub mod forum_dtos;
