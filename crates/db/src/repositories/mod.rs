//! Repository layer.
//!
//! Each entity gets a `CrudRepo<E>` alias with the generic CRUD operations,
//! taking `&PgPool` as the first argument. The files here describe the
//! table behind each entity and add any eager-loading detail lookups.

pub mod base_question_repo;
pub mod category_repo;
pub mod program_repo;
pub mod survey_repo;
pub mod survey_type_repo;

pub use base_question_repo::BaseQuestionRepo;
pub use category_repo::CategoryRepo;
pub use program_repo::ProgramRepo;
pub use survey_repo::SurveyRepo;
pub use survey_type_repo::SurveyTypeRepo;
