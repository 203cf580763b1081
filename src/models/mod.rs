mod build;
mod lookup;

pub use build::BuildRecord;
pub use lookup::Lookup;
