pub mod department;
pub mod service_template;
