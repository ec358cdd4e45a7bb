pub mod generator;
pub mod pipeline;
pub mod steps;
pub mod wizard;

pub use generator::TextGenerator;
pub use pipeline::GenerationPipeline;
pub use steps::WizardStep;
pub use wizard::{BusyFlags, Operation, StepView, TransitionError, Wizard};
