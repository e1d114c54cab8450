pub mod record;
pub mod sex;
pub mod site;
pub mod unit;
pub mod warning;

pub use record::AnthropometricRecord;
pub use sex::Sex;
pub use site::{Breadth, Girth, Length, Site, SkinfoldSite};
pub use unit::{LengthUnit, MassUnit};
pub use warning::{DomainWarning, ExpectedRange};
