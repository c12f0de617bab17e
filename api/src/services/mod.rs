pub mod gemini;
pub mod member_service;

pub use gemini::GeminiService;
pub use member_service::MemberService;
