pub mod evaluation;
pub mod observation;
pub mod record;
pub mod risk;
