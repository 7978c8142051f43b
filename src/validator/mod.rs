pub mod checklist;
pub mod disclosure;

pub use checklist::ChecklistBuilder;
pub use disclosure::DisclosureValidator;
