pub mod rules;

pub use rules::AdvisoryEngine;
