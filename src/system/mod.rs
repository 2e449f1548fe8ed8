// System Layer
pub mod hasher;
pub mod report;
pub mod scanner;

pub use hasher::ImageHasher;
pub use report::ReportWriter;
pub use scanner::Scanner;
