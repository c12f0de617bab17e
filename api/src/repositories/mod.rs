pub mod admin_log_repository;
pub mod analysis_repository;
pub mod member_repository;
pub mod testimonial_repository;

pub use admin_log_repository::AdminLogRepository;
pub use analysis_repository::AnalysisRepository;
pub use member_repository::MemberRepository;
pub use testimonial_repository::TestimonialRepository;
