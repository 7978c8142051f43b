pub mod enhance;
pub mod generator;
#[cfg(feature = "api-direct")]
pub mod http_client;
pub mod prompts;
pub mod reasoning;
pub mod script_runner;

pub use enhance::ParagraphCompleter;
pub use generator::{build_generator, DisabledGenerator, GenerationRequest, Generator};
#[cfg(feature = "api-direct")]
pub use http_client::HttpGenerator;
pub use reasoning::ReasoningAdapter;
pub use script_runner::CliGenerator;
