mod section_repository;

pub use section_repository::SectionRepository;
