pub mod payload_errors;
