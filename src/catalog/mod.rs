mod catalog;
mod load;
mod record;
mod tsv;

pub use catalog::{Catalog, Problem};
pub use load::{load_catalog, LoadError};
pub use record::Record;
