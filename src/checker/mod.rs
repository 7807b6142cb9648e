mod line;
mod tree;
mod violation;

pub use line::LineChecker;
pub use tree::TreeChecker;
pub use violation::{Violation, ViolationLog};
