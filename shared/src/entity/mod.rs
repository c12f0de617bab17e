pub mod admin_logs;
pub mod analyses;
pub mod members;
pub mod testimonials;
