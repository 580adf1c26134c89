pub mod aggregate;

pub use aggregate::{fields, Charge, RentalDto, RentalState, ResponsiblePerson, COLLECTION_NAME};
